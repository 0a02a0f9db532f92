//! Illuminant chromaticity coordinates.
//!
//! CIE 1931 2° standard observer chromaticities of the common CIE
//! illuminants, used as white points by the RGB colourspaces and as the
//! chromaticity of black in [`crate::models::cie_xyy::xyz_to_xyy`].

use thiserror::Error;

/// Errors raised by illuminant lookups.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IlluminantError {
    /// The requested illuminant is not tabulated.
    #[error("Unknown illuminant {name:?}; available illuminants: {}", available.join(", "))]
    UnknownIlluminant {
        /// The requested name
        name: String,
        /// Tabulated names, sorted
        available: Vec<String>,
    },
}

/// CIE 1931 2° chromaticity coordinates.
pub const CIE_1931_ILLUMINANTS: [(&str, [f64; 2]); 12] = [
    ("A", [0.44757, 0.40745]),
    ("B", [0.34842, 0.35161]),
    ("C", [0.31006, 0.31616]),
    ("D50", [0.34567, 0.35850]),
    ("D55", [0.33242, 0.34743]),
    ("D60", [0.32168, 0.33767]),
    ("D65", [0.31271, 0.32902]),
    ("D75", [0.29902, 0.31485]),
    ("E", [1.0 / 3.0, 1.0 / 3.0]),
    ("F2", [0.37208, 0.37529]),
    ("F7", [0.31292, 0.32933]),
    ("F11", [0.38052, 0.37713]),
];

/// Chromaticity coordinates of the CIE illuminant `name`.
///
/// # Errors
///
/// Returns [`IlluminantError::UnknownIlluminant`] listing the tabulated names.
///
/// # Examples
///
/// ```rust
/// use macadam::colorimetry::illuminants::illuminant_chromaticity;
///
/// assert_eq!(illuminant_chromaticity("D65").unwrap(), [0.31271, 0.32902]);
/// assert!(illuminant_chromaticity("D93").is_err());
/// ```
pub fn illuminant_chromaticity(name: &str) -> Result<[f64; 2], IlluminantError> {
    CIE_1931_ILLUMINANTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, xy)| *xy)
        .ok_or_else(|| IlluminantError::UnknownIlluminant {
            name: name.to_owned(),
            available: illuminant_names().into_iter().map(str::to_owned).collect(),
        })
}

/// Tabulated illuminant names, sorted.
#[must_use]
pub fn illuminant_names() -> Vec<&'static str> {
    let mut names: Vec<&str> = CIE_1931_ILLUMINANTS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chromaticities_are_valid() {
        for (name, [x, y]) in CIE_1931_ILLUMINANTS {
            assert!(x > 0.0 && y > 0.0 && x + y < 1.0, "{name}");
            assert_eq!(illuminant_chromaticity(name).unwrap(), [x, y]);
        }
    }

    #[test]
    fn unknown_illuminant_lists_names() {
        let err = illuminant_chromaticity("Z").unwrap_err();
        let IlluminantError::UnknownIlluminant { name, available } = &err;
        assert_eq!(name, "Z");
        assert_eq!(available.len(), CIE_1931_ILLUMINANTS.len());
        assert!(available.windows(2).all(|w| w[0] <= w[1]));
        assert!(err.to_string().contains("D65"));
    }
}
