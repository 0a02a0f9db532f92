//! Point location algorithms for triangulations.
//!
//! Two walks are provided:
//!
//! - A *visibility walk* used while the triangulation is being built. It
//!   crosses any facet whose supporting plane separates the current cell from
//!   the query point, choosing the first facet to test pseudo-randomly, and
//!   stops in the cell that contains the point or in an infinite cell when the
//!   point lies outside the current hull. All decisions use exact orientation
//!   tests, so the walk terminates with probability one.
//! - A *directed barycentric walk* used for containment queries. The sign of
//!   each barycentric coordinate of the query point is decided exactly; the
//!   walk steps across the facet opposite the most negative one. A point is
//!   inside a cell when no coordinate is exactly negative, or when every
//!   negative coordinate is at least `-tolerance` and none exceeds
//!   `1 + tolerance`. When the walk leaves the hull or runs out of steps,
//!   every finite cell is scanned instead, so the answer never depends on the
//!   starting cell.
//!
//! # References
//!
//! - O. Devillers, S. Pion, and M. Teillaud, "Walking in a Triangulation",
//!   International Journal of Foundations of Computer Science, 2001.
//! - CGAL Triangulation_3 documentation

use crate::core::cell::CellKey;
use crate::core::triangulation::Triangulation;
use crate::geometry::point::Point;
use crate::geometry::predicates::{Orientation, barycentric_coordinates, orientation};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default slack applied to barycentric coordinates by containment queries.
///
/// Boundary samples of measured or tabulated data are only known to within
/// floating-point precision, so points on a hull facet must not be rejected
/// because of rounding in the barycentric computation.
pub const DEFAULT_TOLERANCE: f64 = 100.0 * f64::EPSILON;

/// Default step limit for the visibility walk used during construction.
pub const DEFAULT_MAX_WALK_STEPS: usize = 10_000;

/// Result of point location query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateResult {
    /// Point is inside the cell, or on its boundary within tolerance
    InsideCell(CellKey),
    /// Point is outside the convex hull
    Outside,
}

impl LocateResult {
    /// The containing cell, if any.
    #[inline]
    #[must_use]
    pub const fn cell(self) -> Option<CellKey> {
        match self {
            Self::InsideCell(key) => Some(key),
            Self::Outside => None,
        }
    }

    /// Returns `true` when a containing cell was found.
    #[inline]
    #[must_use]
    pub const fn is_inside(self) -> bool {
        matches!(self, Self::InsideCell(_))
    }
}

/// Error during point location.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocateError {
    /// Triangulation has no cells
    #[error("Cannot locate in empty triangulation")]
    EmptyTriangulation,

    /// Cell reference is invalid
    #[error("Invalid cell reference: {cell_key:?}")]
    InvalidCell {
        /// The invalid cell key
        cell_key: CellKey,
    },

    /// Tolerance is negative or NaN
    #[error("Invalid tolerance {tolerance}: must be a non-negative number")]
    InvalidTolerance {
        /// The rejected tolerance
        tolerance: f64,
    },

    /// Cycle detected during walking (numerical issues)
    #[error("Cycle detected after {steps} steps - possible numerical degeneracy")]
    CycleDetected {
        /// Number of steps before cycle detection
        steps: usize,
    },
}

/// Options for containment queries.
///
/// # Examples
///
/// ```rust
/// use macadam::core::algorithms::locate::{LocateOptions, LocateOptionsBuilder, DEFAULT_TOLERANCE};
///
/// let defaults = LocateOptions::default();
/// assert_eq!(defaults.tolerance, DEFAULT_TOLERANCE);
///
/// let loose = LocateOptionsBuilder::default().tolerance(1e-6).build().unwrap();
/// assert_eq!(loose.tolerance, 1e-6);
///
/// assert!(LocateOptionsBuilder::default().tolerance(-1.0).build().is_err());
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct LocateOptions {
    /// Slack applied to every barycentric coordinate.
    #[builder(default = "DEFAULT_TOLERANCE")]
    pub tolerance: f64,
    /// Step limit of the directed walk before falling back to a full scan.
    /// `None` allows one step per cell.
    #[builder(default, setter(strip_option))]
    pub max_walk_steps: Option<usize>,
}

impl LocateOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(tolerance) = self.tolerance {
            validate_tolerance(tolerance).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_walk_steps: None,
        }
    }
}

impl LocateOptions {
    /// Returns a copy with `tolerance` overriding the configured one when given.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::InvalidTolerance`] for a negative or NaN tolerance.
    pub fn with_tolerance(self, tolerance: Option<f64>) -> Result<Self, LocateError> {
        match tolerance {
            Some(tolerance) => Ok(Self {
                tolerance: validate_tolerance(tolerance)?,
                ..self
            }),
            None => Ok(self),
        }
    }
}

/// Checks that `tolerance` is usable as barycentric slack.
///
/// # Errors
///
/// Returns [`LocateError::InvalidTolerance`] for a negative or NaN tolerance.
pub fn validate_tolerance(tolerance: f64) -> Result<f64, LocateError> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(LocateError::InvalidTolerance { tolerance });
    }
    Ok(tolerance)
}

// =============================================================================
// CONSTRUCTION WALK
// =============================================================================

/// Deterministic generator choosing the first facet tested at each walk step.
///
/// A fixed seed keeps construction reproducible: the same point sequence
/// always yields the same triangulation.
#[derive(Clone, Debug)]
pub(crate) struct WalkRng {
    state: u64,
}

impl Default for WalkRng {
    fn default() -> Self {
        Self {
            state: 0x853c_49e6_748f_ea9b,
        }
    }
}

impl WalkRng {
    pub(crate) fn next_offset(&mut self) -> usize {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.state >> 33) % 4) as usize
    }
}

/// Cell reached by a visibility walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WalkOutcome {
    pub(crate) cell: CellKey,
    pub(crate) steps: usize,
}

/// Walks from `start` towards `point` using exact orientation tests.
///
/// Returns a finite cell containing `point` (possibly on its boundary) or an
/// infinite cell whose hull facet is visible from `point`.
pub(crate) fn visibility_walk(
    tri: &Triangulation,
    start: CellKey,
    point: &Point,
    rng: &mut WalkRng,
    max_steps: usize,
) -> Result<WalkOutcome, LocateError> {
    let mut current = start;
    for steps in 0..max_steps {
        let cell = tri
            .cell(current)
            .ok_or(LocateError::InvalidCell { cell_key: current })?;
        if cell.is_infinite() {
            return Ok(WalkOutcome {
                cell: current,
                steps,
            });
        }

        let offset = rng.next_offset();
        let mut next = None;
        for j in 0..4 {
            let facet = (offset + j) % 4;
            let Some([a, b, c, d]) = tri.points_with_substitute(cell.vertices(), facet, point)
            else {
                continue;
            };
            if orientation(&a, &b, &c, &d) == Orientation::NEGATIVE {
                next = Some(
                    cell.neighbor(facet)
                        .ok_or(LocateError::InvalidCell { cell_key: current })?,
                );
                break;
            }
        }

        match next {
            Some(neighbor) => current = neighbor,
            None => {
                return Ok(WalkOutcome {
                    cell: current,
                    steps,
                });
            }
        }
    }
    Err(LocateError::CycleDetected { steps: max_steps })
}

// =============================================================================
// CONTAINMENT QUERIES
// =============================================================================

/// Locate the finite cell containing `point`.
///
/// `hint` is an optional starting cell; locality between consecutive queries
/// shortens the walk considerably. Non-finite points are always outside.
///
/// # Errors
///
/// Returns `LocateError` if the tolerance is invalid or the triangulation has
/// no cells.
///
/// # Examples
///
/// ```rust
/// use macadam::core::algorithms::locate::{locate_containing_cell, LocateOptions, LocateResult};
/// use macadam::core::triangulation::Triangulation;
/// use macadam::geometry::point::Point;
///
/// let points = [
///     Point::new([0.0, 0.0, 0.0]),
///     Point::new([1.0, 0.0, 0.0]),
///     Point::new([0.0, 1.0, 0.0]),
///     Point::new([0.0, 0.0, 1.0]),
/// ];
/// let tri = Triangulation::new(&points).unwrap();
/// let options = LocateOptions::default();
///
/// let inside = locate_containing_cell(&tri, &Point::new([0.1, 0.1, 0.1]), &options, None).unwrap();
/// assert!(inside.is_inside());
///
/// let outside = locate_containing_cell(&tri, &Point::new([1.0, 1.0, 1.0]), &options, None).unwrap();
/// assert_eq!(outside, LocateResult::Outside);
/// ```
pub fn locate_containing_cell(
    tri: &Triangulation,
    point: &Point,
    options: &LocateOptions,
    hint: Option<CellKey>,
) -> Result<LocateResult, LocateError> {
    let tolerance = validate_tolerance(options.tolerance)?;
    let fallback = tri.hint_cell().ok_or(LocateError::EmptyTriangulation)?;
    if !point.is_finite() || !tri.bounding_box().contains(point, tolerance) {
        return Ok(LocateResult::Outside);
    }

    let start = hint
        .filter(|key| tri.cell(*key).is_some_and(|cell| !cell.is_infinite()))
        .unwrap_or(fallback);
    let max_steps = options
        .max_walk_steps
        .unwrap_or_else(|| tri.number_of_cells() + 1);

    if let Some(found) = directed_walk(tri, start, point, tolerance, max_steps) {
        return Ok(LocateResult::InsideCell(found));
    }

    trace!(
        point = %point,
        "directed walk inconclusive, scanning all finite cells"
    );
    Ok(brute_force_locate(tri, point, tolerance))
}

/// Locate a batch of points, reusing each result as the next query's hint.
///
/// # Errors
///
/// Returns `LocateError` under the same conditions as [`locate_containing_cell`].
pub fn locate_points(
    tri: &Triangulation,
    points: &[Point],
    options: &LocateOptions,
) -> Result<Vec<LocateResult>, LocateError> {
    let mut hint = None;
    points
        .iter()
        .map(|point| {
            let result = locate_containing_cell(tri, point, options, hint)?;
            if let LocateResult::InsideCell(key) = result {
                hint = Some(key);
            }
            Ok(result)
        })
        .collect()
}

/// Outcome of testing a query point against one finite cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellContainment {
    /// Inside, on the boundary, or outside by at most the tolerance.
    Inside,
    /// Outside; `exit` is the facet to cross towards the point.
    Outside { exit: usize },
}

/// Tests `point` against finite cell `key`.
///
/// The sign of each barycentric coordinate is decided by the exact
/// orientation predicate. Floating-point coordinates only serve to measure
/// the slack of the coordinates that are exactly negative, and to choose the
/// exit facet. Returns `None` for an infinite or stale cell.
fn test_cell(
    tri: &Triangulation,
    key: CellKey,
    point: &Point,
    tolerance: f64,
) -> Option<CellContainment> {
    let cell = tri.cell(key)?;
    let mut negative = [false; 4];
    for (facet, flag) in negative.iter_mut().enumerate() {
        let [a, b, c, d] = tri.points_with_substitute(cell.vertices(), facet, point)?;
        *flag = orientation(&a, &b, &c, &d) == Orientation::NEGATIVE;
    }
    let Some(first) = negative.iter().position(|flag| *flag) else {
        return Some(CellContainment::Inside);
    };

    let weights = barycentric_coordinates(&tri.tetrahedron(key)?, point);
    if weights.is_some_and(|w| within_tolerance(&w, &negative, tolerance)) {
        return Some(CellContainment::Inside);
    }
    let exit = weights.map_or(first, |w| {
        (0..4)
            .filter(|i| negative[*i])
            .fold(first, |best, i| if w[i] < w[best] { i } else { best })
    });
    Some(CellContainment::Outside { exit })
}

/// Whether coordinates with the exact signs `negative` are admitted by
/// `tolerance`.
///
/// Every coordinate must also stay below `1 + tolerance`: a point slightly
/// outside a cell has coordinates that sum to one with no large member, while
/// a flat cell yields huge coordinates of meaningless sign.
fn within_tolerance(weights: &[f64; 4], negative: &[bool; 4], tolerance: f64) -> bool {
    weights
        .iter()
        .zip(negative)
        .all(|(w, negative)| *w <= 1.0 + tolerance && (!negative || *w >= -tolerance))
}

fn directed_walk(
    tri: &Triangulation,
    start: CellKey,
    point: &Point,
    tolerance: f64,
    max_steps: usize,
) -> Option<CellKey> {
    let mut current = start;
    for _ in 0..max_steps {
        let exit = match test_cell(tri, current, point, tolerance)? {
            CellContainment::Inside => return Some(current),
            CellContainment::Outside { exit } => exit,
        };
        let next = tri.cell(current)?.neighbor(exit)?;
        if tri.cell(next)?.is_infinite() {
            return None;
        }
        current = next;
    }
    None
}

fn brute_force_locate(tri: &Triangulation, point: &Point, tolerance: f64) -> LocateResult {
    tri.finite_cell_keys()
        .find(|key| test_cell(tri, *key, point, tolerance) == Some(CellContainment::Inside))
        .map_or(LocateResult::Outside, LocateResult::InsideCell)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::triangulation::Triangulation;

    fn cube() -> Vec<Point> {
        let mut points = Vec::new();
        for x in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for z in [0.0, 1.0] {
                    points.push(Point::new([x, y, z]));
                }
            }
        }
        points.push(Point::new([0.5, 0.5, 0.5]));
        points
    }

    #[test]
    fn walk_rng_is_deterministic_and_in_range() {
        let mut a = WalkRng::default();
        let mut b = WalkRng::default();
        for _ in 0..100 {
            let offset = a.next_offset();
            assert!(offset < 4);
            assert_eq!(offset, b.next_offset());
        }
    }

    #[test]
    fn locate_inside_and_outside_cube() {
        let tri = Triangulation::new(&cube()).unwrap();
        let options = LocateOptions::default();

        for q in [[0.1, 0.2, 0.3], [0.9, 0.9, 0.1], [0.5, 0.5, 0.5]] {
            let result = locate_containing_cell(&tri, &Point::new(q), &options, None).unwrap();
            assert!(result.is_inside(), "{q:?} should be inside");
        }
        for q in [[1.5, 0.5, 0.5], [-0.1, 0.5, 0.5], [0.5, 0.5, 1.0 + 1e-9]] {
            let result = locate_containing_cell(&tri, &Point::new(q), &options, None).unwrap();
            assert_eq!(result, LocateResult::Outside, "{q:?} should be outside");
        }
    }

    #[test]
    fn locate_boundary_points_are_inside() {
        let tri = Triangulation::new(&cube()).unwrap();
        let options = LocateOptions::default();
        for q in [[0.0, 0.0, 0.0], [1.0, 0.5, 0.5], [0.25, 0.0, 0.75]] {
            let result = locate_containing_cell(&tri, &Point::new(q), &options, None).unwrap();
            assert!(result.is_inside(), "{q:?} should be on the boundary");
        }
    }

    #[test]
    fn tolerance_admits_nearby_outside_points() {
        let tri = Triangulation::new(&cube()).unwrap();
        let q = Point::new([1.0 + 1e-7, 0.5, 0.5]);
        let strict = LocateOptions::default().with_tolerance(Some(0.0)).unwrap();
        let loose = LocateOptions::default().with_tolerance(Some(1e-3)).unwrap();
        assert_eq!(
            locate_containing_cell(&tri, &q, &strict, None).unwrap(),
            LocateResult::Outside
        );
        assert!(locate_containing_cell(&tri, &q, &loose, None).unwrap().is_inside());
    }

    #[test]
    fn zero_tolerance_rejects_points_one_ulp_outside() {
        let tri = Triangulation::new(&cube()).unwrap();
        let strict = LocateOptions::default().with_tolerance(Some(0.0)).unwrap();
        let on_face = Point::new([1.0, 0.3, 0.7]);
        let beyond_face = Point::new([f64::from_bits(1.0_f64.to_bits() + 1), 0.3, 0.7]);
        assert!(locate_containing_cell(&tri, &on_face, &strict, None).unwrap().is_inside());
        assert_eq!(
            locate_containing_cell(&tri, &beyond_face, &strict, None).unwrap(),
            LocateResult::Outside
        );
    }

    #[test]
    fn oversized_coordinates_are_not_within_tolerance() {
        // A flat cell seen from far away: every coordinate is positive but
        // the exact sign of the first is negative.
        let negative = [true, false, false, false];
        let weights = [6.05e11, 247_116.9, 9_464_697.7, 5_044_170.3];
        assert!(!within_tolerance(&weights, &negative, DEFAULT_TOLERANCE));
        assert!(!within_tolerance(&weights, &negative, 1e-1));

        let near = [-1e-9, 0.25, 0.5, 0.25 + 1e-9];
        assert!(within_tolerance(&near, &negative, 1e-6));
        assert!(!within_tolerance(&near, &negative, 1e-12));
    }

    #[test]
    fn sliver_cells_do_not_capture_distant_points() {
        // A nearly flat tetrahedron on z = 0 beside a regular one.
        let points = [
            Point::new([0.0, 0.0, 0.0]),
            Point::new([1.0, 0.0, 0.0]),
            Point::new([0.0, 1.0, 0.0]),
            Point::new([0.3, 0.3, 1e-12]),
            Point::new([0.3, 0.3, -1.0]),
        ];
        let tri = Triangulation::new(&points).unwrap();
        let options = LocateOptions::default();
        for z in [-1e-17, 0.0, 1e-17] {
            let far = Point::new([0.9, 0.9, z]);
            assert_eq!(
                locate_containing_cell(&tri, &far, &options, None).unwrap(),
                LocateResult::Outside,
                "z = {z}"
            );
            for key in tri.finite_cell_keys() {
                assert_eq!(
                    locate_containing_cell(&tri, &far, &options, Some(key)).unwrap(),
                    LocateResult::Outside
                );
            }
        }
        let inside = Point::new([0.2, 0.2, -0.1]);
        assert!(locate_containing_cell(&tri, &inside, &options, None).unwrap().is_inside());
    }

    #[test]
    fn invalid_tolerances_are_rejected() {
        assert_eq!(
            LocateOptions::default().with_tolerance(Some(-1e-3)),
            Err(LocateError::InvalidTolerance { tolerance: -1e-3 })
        );
        assert!(LocateOptions::default().with_tolerance(Some(f64::NAN)).is_err());
        assert!(LocateOptions::default().with_tolerance(None).is_ok());
        assert!(LocateOptionsBuilder::default().tolerance(f64::NAN).build().is_err());
    }

    #[test]
    fn non_finite_points_are_outside() {
        let tri = Triangulation::new(&cube()).unwrap();
        let options = LocateOptions::default();
        for q in [[f64::NAN, 0.5, 0.5], [f64::INFINITY, 0.5, 0.5]] {
            let result = locate_containing_cell(&tri, &Point::new(q), &options, None).unwrap();
            assert_eq!(result, LocateResult::Outside);
        }
    }

    #[test]
    fn hints_do_not_change_answers() {
        let tri = Triangulation::new(&cube()).unwrap();
        let options = LocateOptions::default();
        let q = Point::new([0.8, 0.1, 0.6]);
        let expected = locate_containing_cell(&tri, &q, &options, None).unwrap();
        assert!(expected.is_inside());
        for key in tri.finite_cell_keys() {
            let result = locate_containing_cell(&tri, &q, &options, Some(key)).unwrap();
            assert!(result.is_inside());
        }
    }

    #[test]
    fn zero_step_walk_falls_back_to_scan() {
        let tri = Triangulation::new(&cube()).unwrap();
        let options = LocateOptionsBuilder::default()
            .max_walk_steps(0)
            .build()
            .unwrap();
        let result =
            locate_containing_cell(&tri, &Point::new([0.3, 0.3, 0.3]), &options, None).unwrap();
        assert!(result.is_inside());
    }

    #[test]
    fn batch_locate_preserves_order() {
        let tri = Triangulation::new(&cube()).unwrap();
        let queries = [
            Point::new([0.5, 0.5, 0.5]),
            Point::new([2.0, 0.0, 0.0]),
            Point::new([0.1, 0.9, 0.1]),
        ];
        let results = locate_points(&tri, &queries, &LocateOptions::default()).unwrap();
        let inside: Vec<bool> = results.iter().map(|r| r.is_inside()).collect();
        assert_eq!(inside, vec![true, false, true]);
    }
}
