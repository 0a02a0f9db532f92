//! Registry of named RGB colourspaces.

use crate::colorimetry::illuminants::illuminant_chromaticity;
use crate::models::rgb::colourspace::{ColourspaceError, RgbColourspace};
use crate::models::rgb::transfer_functions::TransferFunction;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::warn;

/// Name of the ITU-R BT.2020 colourspace.
pub const BT2020: &str = "ITU-R BT.2020";
/// Name of the Sony S-Log colourspace.
pub const S_LOG: &str = "S-Log";
/// Name of the sRGB colourspace.
pub const SRGB: &str = "sRGB";

type Definition = (&'static str, [[f64; 2]; 3], &'static str, TransferFunction);

const DEFINITIONS: [Definition; 3] = [
    (
        BT2020,
        [[0.708, 0.292], [0.170, 0.797], [0.131, 0.046]],
        "D65",
        TransferFunction::Bt2020 {
            is_12_bits_system: false,
        },
    ),
    (
        S_LOG,
        [[0.73, 0.28], [0.14, 0.855], [0.10, -0.05]],
        "D65",
        TransferFunction::SLog,
    ),
    (
        SRGB,
        [[0.64, 0.33], [0.30, 0.60], [0.15, 0.06]],
        "D65",
        TransferFunction::Srgb,
    ),
];

fn define(definition: &Definition) -> Result<RgbColourspace, ColourspaceError> {
    let (name, primaries, illuminant, transfer_function) = *definition;
    let whitepoint = illuminant_chromaticity(illuminant)?;
    RgbColourspace::new(name, primaries, whitepoint, Some(illuminant), transfer_function)
}

static RGB_COLOURSPACES: LazyLock<BTreeMap<&'static str, RgbColourspace>> = LazyLock::new(|| {
    DEFINITIONS
        .iter()
        .filter_map(|definition| match define(definition) {
            Ok(space) => Some((definition.0, space)),
            Err(error) => {
                warn!(name = definition.0, %error, "skipping invalid colourspace");
                None
            }
        })
        .collect()
});

/// Looks up a registered RGB colourspace.
///
/// # Errors
///
/// Returns [`ColourspaceError::UnknownColourspace`] listing the registered names.
///
/// # Examples
///
/// ```rust
/// use macadam::models::rgb::dataset::rgb_colourspace;
///
/// let bt2020 = rgb_colourspace("ITU-R BT.2020").unwrap();
/// assert_eq!(bt2020.whitepoint_name(), Some("D65"));
/// assert!(rgb_colourspace("Adobe RGB").is_err());
/// ```
pub fn rgb_colourspace(name: &str) -> Result<&'static RgbColourspace, ColourspaceError> {
    RGB_COLOURSPACES
        .get(name)
        .ok_or_else(|| ColourspaceError::UnknownColourspace {
            name: name.to_owned(),
            available: rgb_colourspace_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
}

/// Registered colourspace names, sorted.
#[must_use]
pub fn rgb_colourspace_names() -> Vec<&'static str> {
    RGB_COLOURSPACES.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn all_definitions_are_registered() {
        assert_eq!(rgb_colourspace_names(), vec![BT2020, S_LOG, SRGB]);
    }

    #[test]
    fn registered_white_is_unit_luminance() {
        for name in rgb_colourspace_names() {
            let space = rgb_colourspace(name).unwrap();
            let white = space.rgb_to_xyz([1.0; 3], false);
            assert_relative_eq!(white[1], 1.0, epsilon = 1e-12);
            let back = space.xyz_to_rgb(white, false);
            for c in back {
                assert_relative_eq!(c, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn unknown_colourspace_lists_names() {
        let err = rgb_colourspace("ProPhoto RGB").unwrap_err();
        match err {
            ColourspaceError::UnknownColourspace { name, available } => {
                assert_eq!(name, "ProPhoto RGB");
                assert_eq!(available, vec![BT2020, S_LOG, SRGB]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bt2020_uses_its_transfer_function() {
        let space = rgb_colourspace(BT2020).unwrap();
        assert_relative_eq!(
            space.transfer_function().encode(0.18),
            0.409_007_728_864_150,
            epsilon = 1e-12
        );
    }
}
