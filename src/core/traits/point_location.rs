//! Pluggable spatial decomposition and point location.
//!
//! The colour-volume membership test only needs two capabilities from its
//! geometry backend: build a decomposition of a point set once, and locate
//! batches of query points in it. [`PointLocation`] captures exactly that, so
//! the caches and the membership test are independent of the algorithm used.
//! [`DelaunayLocator`] is the default implementation.

use crate::core::algorithms::locate::{LocateError, LocateOptions, locate_points};
use crate::core::cell::CellKey;
use crate::core::triangulation::{Triangulation, TriangulationError, TriangulationOptions};
use crate::geometry::point::Point;
use serde::{Deserialize, Serialize};

/// A spatial decomposition that can locate points.
///
/// Implementations must be deterministic: building twice from the same points
/// must give decompositions that answer every query identically.
pub trait PointLocation: Send + Sync {
    /// The decomposition built from a point set.
    type Complex: Send + Sync;

    /// Identifier of a simplex within [`Self::Complex`].
    type SimplexId: Copy;

    /// Builds a decomposition of `points`.
    ///
    /// # Errors
    ///
    /// Returns `TriangulationError` if the points do not span a volume.
    fn build(&self, points: &[Point]) -> Result<Self::Complex, TriangulationError>;

    /// Locates each point, returning the containing simplex or `None`.
    ///
    /// `tolerance` overrides the locator's configured slack when given.
    ///
    /// # Errors
    ///
    /// Returns `LocateError` for an invalid tolerance.
    fn locate(
        &self,
        complex: &Self::Complex,
        points: &[Point],
        tolerance: Option<f64>,
    ) -> Result<Vec<Option<Self::SimplexId>>, LocateError>;
}

/// Delaunay tetrahedralization with barycentric point location.
///
/// # Examples
///
/// ```rust
/// use macadam::core::traits::point_location::{DelaunayLocator, PointLocation};
/// use macadam::geometry::point::Point;
///
/// let locator = DelaunayLocator::default();
/// let tri = locator
///     .build(&[
///         Point::new([0.0, 0.0, 0.0]),
///         Point::new([1.0, 0.0, 0.0]),
///         Point::new([0.0, 1.0, 0.0]),
///         Point::new([0.0, 0.0, 1.0]),
///     ])
///     .unwrap();
///
/// let found = locator
///     .locate(&tri, &[Point::new([0.2, 0.2, 0.2]), Point::new([1.0, 1.0, 1.0])], None)
///     .unwrap();
/// assert!(found[0].is_some());
/// assert!(found[1].is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DelaunayLocator {
    /// Construction options.
    pub triangulation: TriangulationOptions,
    /// Default query options.
    pub locate: LocateOptions,
}

impl DelaunayLocator {
    /// Creates a locator with the given options.
    #[must_use]
    pub const fn new(triangulation: TriangulationOptions, locate: LocateOptions) -> Self {
        Self {
            triangulation,
            locate,
        }
    }
}

impl PointLocation for DelaunayLocator {
    type Complex = Triangulation;
    type SimplexId = CellKey;

    fn build(&self, points: &[Point]) -> Result<Triangulation, TriangulationError> {
        Triangulation::with_options(points, &self.triangulation)
    }

    fn locate(
        &self,
        complex: &Triangulation,
        points: &[Point],
        tolerance: Option<f64>,
    ) -> Result<Vec<Option<CellKey>>, LocateError> {
        let options = self.locate.with_tolerance(tolerance)?;
        Ok(locate_points(complex, points, &options)?
            .into_iter()
            .map(|result| result.cell())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithms::locate::LocateOptionsBuilder;

    fn octahedron() -> Vec<Point> {
        vec![
            Point::new([1.0, 0.0, 0.0]),
            Point::new([-1.0, 0.0, 0.0]),
            Point::new([0.0, 1.0, 0.0]),
            Point::new([0.0, -1.0, 0.0]),
            Point::new([0.0, 0.0, 1.0]),
            Point::new([0.0, 0.0, -1.0]),
        ]
    }

    #[test]
    fn locator_builds_and_locates() {
        let locator = DelaunayLocator::default();
        let tri = locator.build(&octahedron()).unwrap();
        let queries = [
            Point::new([0.0, 0.0, 0.0]),
            Point::new([0.4, 0.4, 0.4]),
            Point::new([0.4, 0.4, 0.19]),
            Point::new([f64::NAN, 0.0, 0.0]),
        ];
        let found = locator.locate(&tri, &queries, None).unwrap();
        assert_eq!(found.len(), 4);
        assert!(found[0].is_some());
        assert!(found[1].is_none());
        assert!(found[2].is_some());
        assert!(found[3].is_none());
    }

    #[test]
    fn tolerance_override_is_validated() {
        let locator = DelaunayLocator::default();
        let tri = locator.build(&octahedron()).unwrap();
        let err = locator
            .locate(&tri, &[Point::new([0.0, 0.0, 0.0])], Some(-1.0))
            .unwrap_err();
        assert_eq!(err, LocateError::InvalidTolerance { tolerance: -1.0 });
    }

    #[test]
    fn configured_tolerance_applies_without_override() {
        let loose = DelaunayLocator::new(
            TriangulationOptions::default(),
            LocateOptionsBuilder::default().tolerance(0.1).build().unwrap(),
        );
        let tri = loose.build(&octahedron()).unwrap();
        let q = [Point::new([0.35, 0.35, 0.35])];
        assert!(loose.locate(&tri, &q, None).unwrap()[0].is_some());
        assert!(loose.locate(&tri, &q, Some(0.0)).unwrap()[0].is_none());
    }

    #[test]
    fn degenerate_input_fails_to_build() {
        let flat = [
            Point::new([0.0, 0.0, 0.0]),
            Point::new([1.0, 0.0, 0.0]),
            Point::new([0.0, 1.0, 0.0]),
            Point::new([1.0, 1.0, 0.0]),
        ];
        assert!(matches!(
            DelaunayLocator::default().build(&flat),
            Err(TriangulationError::GeometricDegeneracy { .. })
        ));
    }

    #[test]
    fn locator_serializes() {
        let locator = DelaunayLocator::default();
        let json = serde_json::to_string(&locator).unwrap();
        let back: DelaunayLocator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locator);
    }
}
