//! RGB colourspaces.
//!
//! An [`RgbColourspace`] is defined by the chromaticities of its three
//! primaries, a white point and a transfer function. The RGB to XYZ matrix
//! is derived from the primaries and white point so that RGB `[1, 1, 1]` maps
//! to the white point with `Y = 1`.

use crate::colorimetry::illuminants::IlluminantError;
use crate::geometry::matrix::{Matrix3, MatrixError, inverse, scale_columns, solve, transform};
use crate::models::cie_xyy::xy_to_xyz;
use crate::models::rgb::transfer_functions::TransferFunction;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by colourspace construction and lookup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColourspaceError {
    /// No colourspace is registered under the requested name.
    #[error("Unknown RGB colourspace {name:?}; available colourspaces: {}", available.join(", "))]
    UnknownColourspace {
        /// The requested name
        name: String,
        /// Registered names, sorted
        available: Vec<String>,
    },

    /// The primaries or white point do not define an invertible matrix.
    #[error("Invalid colourspace primaries: {0}")]
    Matrix(#[from] MatrixError),

    /// The white point illuminant is unknown.
    #[error(transparent)]
    Illuminant(#[from] IlluminantError),
}

/// Normalised primary matrix converting linear RGB to XYZ.
///
/// `primaries` are the `xy` chromaticities of red, green and blue.
///
/// # Errors
///
/// Returns `MatrixError::SingularMatrix` when the primaries are collinear.
///
/// # Examples
///
/// ```rust
/// use macadam::models::rgb::colourspace::normalised_primary_matrix;
/// use approx::assert_relative_eq;
///
/// let npm = normalised_primary_matrix(
///     [[0.64, 0.33], [0.30, 0.60], [0.15, 0.06]],
///     [0.3127, 0.3290],
/// )
/// .unwrap();
/// assert_relative_eq!(npm[1][0], 0.2126, epsilon = 1e-4);
/// assert_relative_eq!(npm[1][1], 0.7152, epsilon = 1e-4);
/// assert_relative_eq!(npm[1][2], 0.0722, epsilon = 1e-4);
/// ```
pub fn normalised_primary_matrix(
    primaries: [[f64; 2]; 3],
    whitepoint: [f64; 2],
) -> Result<Matrix3, MatrixError> {
    let columns = primaries.map(|[x, y]| [x, y, 1.0 - x - y]);
    let p = [
        [columns[0][0], columns[1][0], columns[2][0]],
        [columns[0][1], columns[1][1], columns[2][1]],
        [columns[0][2], columns[1][2], columns[2][2]],
    ];
    let scale = solve(&p, xy_to_xyz(whitepoint))?;
    Ok(scale_columns(&p, scale))
}

/// An RGB colourspace with its derived conversion matrices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RgbColourspace {
    name: String,
    primaries: [[f64; 2]; 3],
    whitepoint: [f64; 2],
    whitepoint_name: Option<String>,
    transfer_function: TransferFunction,
    rgb_to_xyz_matrix: Matrix3,
    xyz_to_rgb_matrix: Matrix3,
}

impl RgbColourspace {
    /// Creates a colourspace and derives its matrices.
    ///
    /// # Errors
    ///
    /// Returns [`ColourspaceError::Matrix`] when the primaries are degenerate.
    pub fn new(
        name: impl Into<String>,
        primaries: [[f64; 2]; 3],
        whitepoint: [f64; 2],
        whitepoint_name: Option<&str>,
        transfer_function: TransferFunction,
    ) -> Result<Self, ColourspaceError> {
        let rgb_to_xyz_matrix = normalised_primary_matrix(primaries, whitepoint)?;
        let xyz_to_rgb_matrix = inverse(&rgb_to_xyz_matrix)?;
        Ok(Self {
            name: name.into(),
            primaries,
            whitepoint,
            whitepoint_name: whitepoint_name.map(str::to_owned),
            transfer_function,
            rgb_to_xyz_matrix,
            xyz_to_rgb_matrix,
        })
    }

    /// Colourspace name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Red, green and blue primary chromaticities.
    #[must_use]
    pub const fn primaries(&self) -> &[[f64; 2]; 3] {
        &self.primaries
    }

    /// White point chromaticity.
    #[must_use]
    pub const fn whitepoint(&self) -> [f64; 2] {
        self.whitepoint
    }

    /// Name of the illuminant used as white point, if any.
    #[must_use]
    pub fn whitepoint_name(&self) -> Option<&str> {
        self.whitepoint_name.as_deref()
    }

    /// Transfer function.
    #[must_use]
    pub const fn transfer_function(&self) -> TransferFunction {
        self.transfer_function
    }

    /// Linear RGB to XYZ matrix.
    #[must_use]
    pub const fn rgb_to_xyz_matrix(&self) -> &Matrix3 {
        &self.rgb_to_xyz_matrix
    }

    /// XYZ to linear RGB matrix.
    #[must_use]
    pub const fn xyz_to_rgb_matrix(&self) -> &Matrix3 {
        &self.xyz_to_rgb_matrix
    }

    /// Converts RGB to XYZ, decoding the transfer function first when `encoded`.
    #[must_use]
    pub fn rgb_to_xyz(&self, rgb: [f64; 3], encoded: bool) -> [f64; 3] {
        let linear = if encoded {
            rgb.map(|c| self.transfer_function.decode(c))
        } else {
            rgb
        };
        transform(&self.rgb_to_xyz_matrix, linear)
    }

    /// Converts XYZ to RGB, applying the transfer function when `encode`.
    #[must_use]
    pub fn xyz_to_rgb(&self, xyz: [f64; 3], encode: bool) -> [f64; 3] {
        let linear = transform(&self.xyz_to_rgb_matrix, xyz);
        if encode {
            linear.map(|c| self.transfer_function.encode(c))
        } else {
            linear
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SRGB_PRIMARIES: [[f64; 2]; 3] = [[0.64, 0.33], [0.30, 0.60], [0.15, 0.06]];
    const D65: [f64; 2] = [0.3127, 0.3290];

    fn srgb() -> RgbColourspace {
        RgbColourspace::new("sRGB", SRGB_PRIMARIES, D65, Some("D65"), TransferFunction::Srgb)
            .unwrap()
    }

    #[test]
    fn white_maps_to_whitepoint() {
        let space = srgb();
        let white = space.rgb_to_xyz([1.0; 3], false);
        let expected = xy_to_xyz(D65);
        for i in 0..3 {
            assert_relative_eq!(white[i], expected[i], epsilon = 1e-12);
        }
        assert_relative_eq!(white[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn srgb_matrix_matches_reference() {
        let m = srgb().rgb_to_xyz_matrix;
        let reference = [
            [0.4124, 0.3576, 0.1805],
            [0.2126, 0.7152, 0.0722],
            [0.0193, 0.1192, 0.9505],
        ];
        for (row, expected) in m.iter().zip(reference.iter()) {
            for (a, b) in row.iter().zip(expected.iter()) {
                assert_relative_eq!(a, b, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn encoded_round_trip() {
        let space = srgb();
        let rgb = [0.2, 0.5, 0.8];
        let back = space.xyz_to_rgb(space.rgb_to_xyz(rgb, true), true);
        for i in 0..3 {
            assert_relative_eq!(back[i], rgb[i], epsilon = 1e-10);
        }
        assert_eq!(space.whitepoint_name(), Some("D65"));
        assert_eq!(space.name(), "sRGB");
    }

    #[test]
    fn collinear_primaries_are_rejected() {
        let err = RgbColourspace::new(
            "flat",
            [[0.25, 0.25], [0.5, 0.25], [0.75, 0.25]],
            D65,
            None,
            TransferFunction::Linear,
        )
        .unwrap_err();
        assert_eq!(err, ColourspaceError::Matrix(MatrixError::SingularMatrix));
    }
}
