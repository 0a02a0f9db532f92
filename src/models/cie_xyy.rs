//! CIE xyY colourspace conversions.
//!
//! Tristimulus values are not normalized here: `Y` keeps whatever scale the
//! caller uses (0..1 or 0..100).

#![forbid(unsafe_code)]

/// Converts CIE xyY to CIE XYZ.
///
/// A sample with `y = 0` and `Y = 0` is black and maps to `[0, 0, 0]`. With
/// `y = 0` and `Y != 0` the result is not finite; such a colour does not
/// exist and callers testing membership treat it as outside any volume.
///
/// # Examples
///
/// ```rust
/// use macadam::models::cie_xyy::xyy_to_xyz;
/// use approx::assert_relative_eq;
///
/// let xyz = xyy_to_xyz([0.4476, 0.4075, 0.5]);
/// assert_relative_eq!(xyz[0], 0.549_202_453_987_730, epsilon = 1e-12);
/// assert_relative_eq!(xyz[1], 0.5);
/// assert_relative_eq!(xyz[2], 0.177_791_411_042_945, epsilon = 1e-12);
/// ```
#[must_use]
pub fn xyy_to_xyz(xyy: [f64; 3]) -> [f64; 3] {
    let [x, y, big_y] = xyy;
    if y == 0.0 && big_y == 0.0 {
        return [0.0; 3];
    }
    [x * big_y / y, big_y, (1.0 - x - y) * big_y / y]
}

/// Converts CIE XYZ to CIE xyY.
///
/// Black (`X + Y + Z = 0`) has no chromaticity; it is given the chromaticity
/// of `illuminant` with `Y = 0`.
#[must_use]
pub fn xyz_to_xyy(xyz: [f64; 3], illuminant: [f64; 2]) -> [f64; 3] {
    let [x, y, z] = xyz;
    let sum = x + y + z;
    if sum == 0.0 {
        return [illuminant[0], illuminant[1], 0.0];
    }
    [x / sum, y / sum, y]
}

/// Drops the luminance of an xyY triplet.
#[must_use]
pub const fn xyy_to_xy(xyy: [f64; 3]) -> [f64; 2] {
    [xyy[0], xyy[1]]
}

/// Builds an xyY triplet from chromaticity coordinates and a luminance.
#[must_use]
pub const fn xy_to_xyy(xy: [f64; 2], luminance: f64) -> [f64; 3] {
    [xy[0], xy[1], luminance]
}

/// Converts chromaticity coordinates to XYZ with `Y = 1`.
///
/// ```rust
/// use macadam::models::cie_xyy::xy_to_xyz;
///
/// assert_eq!(xy_to_xyz([0.25, 0.5]), [0.5, 1.0, 0.5]);
/// ```
#[must_use]
pub fn xy_to_xyz(xy: [f64; 2]) -> [f64; 3] {
    xyy_to_xyz(xy_to_xyy(xy, 1.0))
}

/// Elementwise [`xyy_to_xyz`].
#[must_use]
pub fn xyy_to_xyz_batch(xyy: &[[f64; 3]]) -> Vec<[f64; 3]> {
    xyy.iter().copied().map(xyy_to_xyz).collect()
}

/// Elementwise [`xyz_to_xyy`].
#[must_use]
pub fn xyz_to_xyy_batch(xyz: &[[f64; 3]], illuminant: [f64; 2]) -> Vec<[f64; 3]> {
    xyz.iter().map(|v| xyz_to_xyy(*v, illuminant)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const D65: [f64; 2] = [0.31271, 0.32902];

    #[test]
    fn xyy_xyz_round_trip() {
        let xyy = [0.3205, 0.4131, 0.51];
        let back = xyz_to_xyy(xyy_to_xyz(xyy), D65);
        for i in 0..3 {
            assert_relative_eq!(back[i], xyy[i], epsilon = 1e-15);
        }
    }

    #[test]
    fn black_is_handled() {
        assert_eq!(xyy_to_xyz([0.3, 0.0, 0.0]), [0.0; 3]);
        assert_eq!(xyz_to_xyy([0.0; 3], D65), [D65[0], D65[1], 0.0]);
        // Zero luminance with a valid chromaticity is black as well.
        assert_eq!(xyy_to_xyz([0.3, 0.3, 0.0]), [0.0; 3]);
    }

    #[test]
    fn zero_y_with_luminance_is_not_finite() {
        let xyz = xyy_to_xyz([0.3, 0.0, 0.5]);
        assert!(!xyz.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn chromaticity_helpers() {
        assert_eq!(xyy_to_xy([0.1, 0.2, 0.3]), [0.1, 0.2]);
        assert_eq!(xy_to_xyy([0.1, 0.2], 0.3), [0.1, 0.2, 0.3]);
        let xyz = xy_to_xyz(D65);
        assert_relative_eq!(xyz[1], 1.0);
        assert_relative_eq!(xyz[0], 0.31271 / 0.32902);
    }

    #[test]
    fn batch_forms_preserve_order() {
        let xyy = [[0.4476, 0.4075, 0.5], [0.3127, 0.329, 0.1], [0.2, 0.0, 0.0]];
        let xyz = xyy_to_xyz_batch(&xyy);
        assert_eq!(xyz.len(), 3);
        assert_eq!(xyz[2], [0.0; 3]);
        let back = xyz_to_xyy_batch(&xyz, D65);
        assert_relative_eq!(back[0][0], 0.4476, epsilon = 1e-15);
        assert_relative_eq!(back[1][2], 0.1);
        assert_eq!(back[2], [D65[0], D65[1], 0.0]);
    }
}
