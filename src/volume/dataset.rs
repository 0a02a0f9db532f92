//! Optimal colour stimuli reference data keyed by illuminant.

use crate::volume::datasets::optimal_colour_stimuli::{
    ILLUMINANT_A_OPTIMAL_COLOUR_STIMULI, ILLUMINANT_C_OPTIMAL_COLOUR_STIMULI,
    ILLUMINANT_D65_OPTIMAL_COLOUR_STIMULI,
};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Boundary samples of the optimal colour solid for each illuminant.
///
/// Samples are CIE xyY triplets with `Y` on a 0 to 100 scale. The default
/// dataset holds the built-in tables for illuminants `A`, `C` and `D65`;
/// further illuminants can be registered with [`Self::insert`].
///
/// # Examples
///
/// ```rust
/// use macadam::volume::dataset::OptimalColourStimuliDataset;
///
/// let dataset = OptimalColourStimuliDataset::default();
/// assert_eq!(dataset.keys(), vec!["A", "C", "D65"]);
/// assert!(dataset.get("D65").is_some());
/// assert!(dataset.get("F2").is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OptimalColourStimuliDataset {
    tables: BTreeMap<String, Cow<'static, [[f64; 3]]>>,
}

impl Default for OptimalColourStimuliDataset {
    fn default() -> Self {
        let mut dataset = Self::empty();
        dataset.insert("A", &ILLUMINANT_A_OPTIMAL_COLOUR_STIMULI[..]);
        dataset.insert("C", &ILLUMINANT_C_OPTIMAL_COLOUR_STIMULI[..]);
        dataset.insert("D65", &ILLUMINANT_D65_OPTIMAL_COLOUR_STIMULI[..]);
        dataset
    }
}

impl OptimalColourStimuliDataset {
    /// Creates a dataset without any illuminant.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// The xyY samples of `illuminant`, if present.
    #[must_use]
    pub fn get(&self, illuminant: &str) -> Option<&[[f64; 3]]> {
        self.tables.get(illuminant).map(AsRef::as_ref)
    }

    /// Returns `true` when `illuminant` is present.
    #[must_use]
    pub fn contains(&self, illuminant: &str) -> bool {
        self.tables.contains_key(illuminant)
    }

    /// Illuminant names in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Registers or replaces the samples of `illuminant`.
    ///
    /// Returns the previous samples, if any.
    pub fn insert(
        &mut self,
        illuminant: impl Into<String>,
        samples: impl Into<Cow<'static, [[f64; 3]]>>,
    ) -> Option<Cow<'static, [[f64; 3]]>> {
        self.tables.insert(illuminant.into(), samples.into())
    }

    /// Removes `illuminant`, returning its samples.
    pub fn remove(&mut self, illuminant: &str) -> Option<Cow<'static, [[f64; 3]]>> {
        self.tables.remove(illuminant)
    }

    /// Number of illuminants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` when no illuminant is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::datasets::optimal_colour_stimuli::OPTIMAL_COLOUR_STIMULI_SAMPLES;

    #[test]
    fn builtin_tables_have_expected_shape() {
        let dataset = OptimalColourStimuliDataset::default();
        assert_eq!(dataset.len(), 3);
        for key in dataset.keys() {
            let samples = dataset.get(key).unwrap();
            assert_eq!(samples.len(), OPTIMAL_COLOUR_STIMULI_SAMPLES);
            // Black first, perfect reflector last.
            assert_eq!(samples[0][2], 0.0);
            assert!((samples[samples.len() - 1][2] - 100.0).abs() < 1e-9);
            assert!(samples.iter().all(|s| s.iter().all(|c| c.is_finite())));
        }
    }

    #[test]
    fn insert_and_remove() {
        let mut dataset = OptimalColourStimuliDataset::empty();
        assert!(dataset.is_empty());
        assert!(dataset.insert("X", vec![[0.3, 0.3, 0.0]]).is_none());
        assert!(dataset.contains("X"));
        assert_eq!(dataset.get("X"), Some(&[[0.3, 0.3, 0.0]][..]));

        let previous = dataset.insert("X", vec![[0.3, 0.3, 50.0]]).unwrap();
        assert_eq!(previous.as_ref(), &[[0.3, 0.3, 0.0]]);
        assert!(dataset.remove("X").is_some());
        assert!(!dataset.contains("X"));
    }

    #[test]
    fn keys_are_sorted() {
        let mut dataset = OptimalColourStimuliDataset::default();
        dataset.insert("B", Vec::<[f64; 3]>::new());
        dataset.insert("0", Vec::<[f64; 3]>::new());
        assert_eq!(dataset.keys(), vec!["0", "A", "B", "C", "D65"]);
    }
}
