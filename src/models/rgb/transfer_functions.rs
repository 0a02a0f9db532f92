//! Opto-electronic transfer functions.
//!
//! Encoding (`oetf`, `encode`) maps scene-linear values to a nonlinear signal;
//! decoding (`eotf`, `decode`) maps the signal back. Decoding is the exact
//! inverse of encoding on each function's domain.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// ITU-R BT.2020 constants `(alpha, beta)` for 10-bit and 12-bit systems.
const fn bt2020_constants(is_12_bits_system: bool) -> (f64, f64) {
    if is_12_bits_system {
        (1.0993, 0.0181)
    } else {
        (1.099, 0.018)
    }
}

/// ITU-R BT.2020 opto-electronic transfer function.
///
/// # Examples
///
/// ```rust
/// use macadam::models::rgb::transfer_functions::oetf_bt2020;
/// use approx::assert_relative_eq;
///
/// assert_relative_eq!(oetf_bt2020(0.18, false), 0.409_007_728_864_150, epsilon = 1e-12);
/// ```
#[must_use]
pub fn oetf_bt2020(value: f64, is_12_bits_system: bool) -> f64 {
    let (alpha, beta) = bt2020_constants(is_12_bits_system);
    if value < beta {
        value * 4.5
    } else {
        alpha.mul_add(value.powf(0.45), -(alpha - 1.0))
    }
}

/// ITU-R BT.2020 electro-optical transfer function, the inverse of [`oetf_bt2020`].
///
/// ```rust
/// use macadam::models::rgb::transfer_functions::eotf_bt2020;
/// use approx::assert_relative_eq;
///
/// assert_relative_eq!(eotf_bt2020(0.705_515_089_922_121, false), 0.5, epsilon = 1e-12);
/// ```
#[must_use]
pub fn eotf_bt2020(value: f64, is_12_bits_system: bool) -> f64 {
    let (alpha, beta) = bt2020_constants(is_12_bits_system);
    if value < oetf_bt2020(beta, is_12_bits_system) {
        value / 4.5
    } else {
        ((value + (alpha - 1.0)) / alpha).powf(1.0 / 0.45)
    }
}

/// Sony S-Log encoding.
#[must_use]
pub fn log_encoding_slog(value: f64) -> f64 {
    0.432_699f64.mul_add((value + 0.037_584).log10(), 0.616_596) + 0.03
}

/// Sony S-Log decoding, the inverse of [`log_encoding_slog`].
#[must_use]
pub fn log_decoding_slog(value: f64) -> f64 {
    10f64.powf((value - 0.616_596 - 0.03) / 0.432_699) - 0.037_584
}

/// IEC 61966-2-1 sRGB encoding.
#[must_use]
pub fn srgb_encode(value: f64) -> f64 {
    if value <= 0.003_130_8 {
        value * 12.92
    } else {
        1.055f64.mul_add(value.powf(1.0 / 2.4), -0.055)
    }
}

/// IEC 61966-2-1 sRGB decoding, the inverse of [`srgb_encode`].
#[must_use]
pub fn srgb_decode(value: f64) -> f64 {
    if value <= 0.040_45 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Transfer function of an RGB colourspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferFunction {
    /// No transfer function.
    Linear,
    /// ITU-R BT.2020.
    Bt2020 {
        /// Use the 12-bit system constants.
        is_12_bits_system: bool,
    },
    /// Sony S-Log.
    SLog,
    /// IEC 61966-2-1 sRGB.
    Srgb,
}

impl TransferFunction {
    /// Encodes a linear value.
    #[must_use]
    pub fn encode(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Bt2020 { is_12_bits_system } => oetf_bt2020(value, is_12_bits_system),
            Self::SLog => log_encoding_slog(value),
            Self::Srgb => srgb_encode(value),
        }
    }

    /// Decodes a nonlinear value.
    #[must_use]
    pub fn decode(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Bt2020 { is_12_bits_system } => eotf_bt2020(value, is_12_bits_system),
            Self::SLog => log_decoding_slog(value),
            Self::Srgb => srgb_decode(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [TransferFunction; 5] = [
        TransferFunction::Linear,
        TransferFunction::Bt2020 {
            is_12_bits_system: false,
        },
        TransferFunction::Bt2020 {
            is_12_bits_system: true,
        },
        TransferFunction::SLog,
        TransferFunction::Srgb,
    ];

    #[test]
    fn bt2020_reference_values() {
        assert_relative_eq!(oetf_bt2020(0.18, false), 0.409_007_728_864_150, epsilon = 1e-12);
        assert_relative_eq!(oetf_bt2020(0.18, true), 0.408_846_402_493_504, epsilon = 1e-12);
        assert_relative_eq!(oetf_bt2020(0.01, false), 0.045);
        assert_relative_eq!(eotf_bt2020(0.705_515_089_922_121, false), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn slog_and_srgb_reference_values() {
        assert_relative_eq!(log_encoding_slog(0.18), 0.359_987_846_422_154, epsilon = 1e-12);
        assert_relative_eq!(srgb_encode(0.18), 0.461_356_129_500_442, epsilon = 1e-12);
        assert_relative_eq!(srgb_encode(0.002), 0.025_84);
    }

    #[test]
    fn decode_inverts_encode() {
        for function in ALL {
            for value in [0.0, 0.001, 0.01, 0.18, 0.5, 1.0] {
                assert_relative_eq!(
                    function.decode(function.encode(value)),
                    value,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn encoding_is_monotonic() {
        for function in ALL {
            let samples: Vec<f64> = (0..=100).map(|i| function.encode(f64::from(i) / 100.0)).collect();
            assert!(samples.windows(2).all(|w| w[0] < w[1]), "{function:?}");
        }
    }
}
