//! Three-dimensional Delaunay triangulations.
//!
//! [`Triangulation`] tetrahedralizes the convex hull of a finite point set by
//! incremental Bowyer–Watson insertion (see
//! [`crate::core::algorithms::incremental_insertion`]). The hull is closed with a
//! symbolic vertex at infinity, so points outside the current hull are
//! inserted by the same cavity mechanism as interior points.
//!
//! # Determinism
//!
//! Construction is a pure function of the input point sequence: points are
//! inserted in input order after the initial tetrahedron, the walk uses a
//! fixed-seed generator and every combinatorial decision is made with exact
//! predicates. Building twice from the same points yields the same cells in
//! the same storage order.
//!
//! # Invariants
//!
//! Checked by [`Triangulation::is_valid`]:
//!
//! - every cell has four neighbours and neighbour relations are mutual;
//! - mutual neighbours share exactly the facet they are linked across;
//! - every finite cell is positively oriented;
//! - (with [`Triangulation::is_delaunay`]) no vertex lies strictly inside the
//!   circumsphere of an adjacent finite cell.

use crate::core::algorithms::incremental_insertion::{
    InsertionError, InsertionReport, insert_vertex, wire_neighbors,
};
use crate::core::algorithms::locate::{
    self, DEFAULT_MAX_WALK_STEPS, LocateError, LocateOptions, LocateResult, WalkRng,
};
use crate::core::cell::{Cell, CellKey, VertexRef};
use crate::core::collections::StorageMap;
use crate::core::util::deduplication::dedup_points_exact;
use crate::geometry::point::Point;
use crate::geometry::predicates::{
    InSphere, Orientation, insphere, orientation, orientation_value,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors raised while building a triangulation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TriangulationError {
    /// Fewer than four distinct points were supplied.
    #[error(
        "Insufficient vertices for a 3D triangulation: found {found} distinct points, need at least 4"
    )]
    InsufficientVertices {
        /// Number of distinct points found
        found: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point in the input
        index: usize,
    },

    /// The points do not span three dimensions.
    #[error("Geometric degeneracy: {message}")]
    GeometricDegeneracy {
        /// Description of the degeneracy
        message: String,
    },

    /// More points than vertex references can address.
    #[error("Too many vertices: {count} exceeds the supported maximum of {max}")]
    TooManyVertices {
        /// Number of points supplied
        count: usize,
        /// Maximum supported number of points
        max: usize,
    },

    /// Incremental insertion of a vertex failed.
    #[error("Failed to insert vertex {index}: {source}")]
    InsertionFailed {
        /// Index of the vertex (after deduplication)
        index: usize,
        /// The underlying insertion failure
        source: InsertionError,
    },
}

/// Violations reported by [`Triangulation::is_valid`] and [`Triangulation::is_delaunay`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulationValidationError {
    /// A cell has no neighbour across one of its facets.
    #[error("Cell {cell:?} has no neighbor across facet {facet}")]
    MissingNeighbor {
        /// The incomplete cell
        cell: CellKey,
        /// The facet without neighbour
        facet: usize,
    },

    /// A neighbour link points at a cell that does not exist or does not link back.
    #[error("Neighbor relation between {cell:?} and {neighbor:?} is not mutual")]
    AsymmetricNeighbors {
        /// The cell holding the link
        cell: CellKey,
        /// The linked cell
        neighbor: CellKey,
    },

    /// Two linked cells do not share the facet they are linked across.
    #[error("Cells {cell:?} and {neighbor:?} are linked across different facets")]
    FacetMismatch {
        /// The cell holding the link
        cell: CellKey,
        /// The linked cell
        neighbor: CellKey,
    },

    /// A finite cell is flat or negatively oriented.
    #[error("Cell {cell:?} has orientation {orientation}")]
    InvalidOrientation {
        /// The offending cell
        cell: CellKey,
        /// Its exact orientation
        orientation: Orientation,
    },

    /// A vertex lies strictly inside the circumsphere of an adjacent cell.
    #[error("Empty circumsphere property violated between {cell:?} and {neighbor:?}")]
    NotDelaunay {
        /// The cell whose circumsphere is violated
        cell: CellKey,
        /// The neighbour contributing the violating vertex
        neighbor: CellKey,
    },
}

// =============================================================================
// OPTIONS AND STATISTICS
// =============================================================================

/// Options controlling triangulation construction.
///
/// # Examples
///
/// ```rust
/// use macadam::core::triangulation::TriangulationOptionsBuilder;
///
/// let options = TriangulationOptionsBuilder::default()
///     .max_walk_steps(500)
///     .build()
///     .unwrap();
/// assert!(options.remove_duplicates);
/// assert_eq!(options.max_walk_steps, 500);
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct TriangulationOptions {
    /// Remove exact duplicate points before insertion.
    #[builder(default = "true")]
    pub remove_duplicates: bool,
    /// Step limit of the point location walk for each insertion. An exhausted
    /// walk falls back to scanning every cell.
    #[builder(default = "DEFAULT_MAX_WALK_STEPS")]
    pub max_walk_steps: usize,
}

impl TriangulationOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_walk_steps == Some(0) {
            return Err("max_walk_steps must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for TriangulationOptions {
    fn default() -> Self {
        Self {
            remove_duplicates: true,
            max_walk_steps: DEFAULT_MAX_WALK_STEPS,
        }
    }
}

/// Summary of a triangulation build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionStatistics {
    /// Points supplied by the caller.
    pub input_points: usize,
    /// Exact duplicates dropped before insertion.
    pub duplicates_removed: usize,
    /// Finite tetrahedra in the final triangulation.
    pub finite_cells: usize,
    /// Convex hull facets (one per infinite cell).
    pub hull_facets: usize,
    /// Cells removed over all insertions.
    pub cells_removed: usize,
    /// Cells created over all insertions.
    pub cells_created: usize,
    /// Largest cavity encountered.
    pub max_cavity_size: usize,
    /// Visibility walk steps over all insertions.
    pub walk_steps: usize,
}

impl ConstructionStatistics {
    fn record(&mut self, report: &InsertionReport) {
        self.cells_removed += report.cavity_size;
        self.cells_created += report.cells_created;
        self.max_cavity_size = self.max_cavity_size.max(report.cavity_size);
        self.walk_steps += report.walk_steps;
    }
}

/// Axis-aligned bounding box of the triangulated points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: [f64; 3],
    /// Maximum corner.
    pub max: [f64; 3],
}

impl BoundingBox {
    fn from_points(points: &[Point]) -> Self {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for p in points {
            for axis in 0..3 {
                min[axis] = min[axis].min(p.coords()[axis]);
                max[axis] = max[axis].max(p.coords()[axis]);
            }
        }
        Self { min, max }
    }

    /// Returns `true` when `point` lies in the box grown by `margin` on every side.
    #[must_use]
    pub fn contains(&self, point: &Point, margin: f64) -> bool {
        (0..3).all(|axis| {
            let c = point.coords()[axis];
            c >= self.min[axis] - margin && c <= self.max[axis] + margin
        })
    }
}

// =============================================================================
// TRIANGULATION
// =============================================================================

/// A Delaunay tetrahedralization of a 3D point set.
///
/// # Examples
///
/// ```rust
/// use macadam::core::triangulation::Triangulation;
/// use macadam::geometry::point::Point;
///
/// let points = [
///     Point::new([0.0, 0.0, 0.0]),
///     Point::new([1.0, 0.0, 0.0]),
///     Point::new([0.0, 1.0, 0.0]),
///     Point::new([0.0, 0.0, 1.0]),
///     Point::new([0.2, 0.2, 0.2]),
/// ];
/// let tri = Triangulation::new(&points).unwrap();
/// assert_eq!(tri.number_of_vertices(), 5);
/// assert_eq!(tri.number_of_cells(), 4);
/// assert!(tri.is_valid().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct Triangulation {
    vertices: Vec<Point>,
    cells: StorageMap<CellKey, Cell>,
    hint: Option<CellKey>,
    bounds: BoundingBox,
    statistics: ConstructionStatistics,
}

impl Triangulation {
    /// Builds the Delaunay triangulation of `points` with default options.
    ///
    /// # Errors
    ///
    /// Returns `TriangulationError` if the points contain non-finite
    /// coordinates, have fewer than four distinct members, are coplanar, or an
    /// insertion fails.
    pub fn new(points: &[Point]) -> Result<Self, TriangulationError> {
        Self::with_options(points, &TriangulationOptions::default())
    }

    /// Builds the Delaunay triangulation of `points`.
    ///
    /// # Errors
    ///
    /// See [`Triangulation::new`].
    pub fn with_options(
        points: &[Point],
        options: &TriangulationOptions,
    ) -> Result<Self, TriangulationError> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFiniteCoordinate { index });
        }

        let vertices = if options.remove_duplicates {
            dedup_points_exact(points)
        } else {
            points.to_vec()
        };
        if vertices.len() < 4 {
            return Err(TriangulationError::InsufficientVertices {
                found: vertices.len(),
            });
        }
        let max = u32::MAX as usize;
        if vertices.len() > max {
            return Err(TriangulationError::TooManyVertices {
                count: vertices.len(),
                max,
            });
        }

        let simplex = initial_simplex(&vertices)?;
        let mut statistics = ConstructionStatistics {
            input_points: points.len(),
            duplicates_removed: points.len() - vertices.len(),
            ..ConstructionStatistics::default()
        };

        let mut tri = Self {
            bounds: BoundingBox::from_points(&vertices),
            vertices,
            cells: StorageMap::with_key(),
            hint: None,
            statistics,
        };
        tri.insert_initial_simplex(simplex);

        let mut rng = WalkRng::default();
        for index in 0..tri.vertices.len() {
            if simplex.contains(&index) {
                continue;
            }
            let report = insert_vertex(&mut tri, index, &mut rng, options.max_walk_steps)
                .map_err(|source| TriangulationError::InsertionFailed { index, source })?;
            statistics.record(&report);
        }

        statistics.finite_cells = tri.finite_cell_keys().count();
        statistics.hull_facets = tri.cells.len() - statistics.finite_cells;
        tri.statistics = statistics;

        debug!(
            vertices = tri.vertices.len(),
            duplicates_removed = statistics.duplicates_removed,
            finite_cells = statistics.finite_cells,
            hull_facets = statistics.hull_facets,
            max_cavity_size = statistics.max_cavity_size,
            walk_steps = statistics.walk_steps,
            "triangulation constructed"
        );
        Ok(tri)
    }

    fn insert_initial_simplex(&mut self, simplex: [usize; 4]) {
        let finite = simplex.map(vertex_ref);
        let mut keys = Vec::with_capacity(5);
        keys.push(self.cells.insert(Cell::new(finite)));
        for i in 0..4 {
            let mut vertices = finite;
            vertices[i] = VertexRef::Infinite;
            vertices.swap((i + 1) % 4, (i + 2) % 4);
            keys.push(self.cells.insert(Cell::new(vertices)));
        }
        wire_neighbors(&mut self.cells, &keys);
        self.hint = keys.first().copied();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The triangulated points, after duplicate removal, in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of finite tetrahedra.
    #[must_use]
    pub fn number_of_cells(&self) -> usize {
        self.statistics.finite_cells
    }

    /// Number of convex hull facets.
    #[must_use]
    pub fn number_of_hull_facets(&self) -> usize {
        self.statistics.hull_facets
    }

    /// Construction summary.
    #[must_use]
    pub const fn statistics(&self) -> &ConstructionStatistics {
        &self.statistics
    }

    /// Bounding box of the vertices.
    #[must_use]
    pub const fn bounding_box(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Looks up a cell (finite or infinite).
    #[must_use]
    pub fn cell(&self, key: CellKey) -> Option<&Cell> {
        self.cells.get(key)
    }

    /// Iterates over all cells, including the infinite ones.
    pub fn cells(&self) -> impl Iterator<Item = (CellKey, &Cell)> {
        self.cells.iter()
    }

    /// Iterates over the keys of the finite cells in storage order.
    pub fn finite_cell_keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.is_infinite())
            .map(|(key, _)| key)
    }

    /// A finite cell used as the default starting point of walks.
    #[must_use]
    pub const fn hint_cell(&self) -> Option<CellKey> {
        self.hint
    }

    /// Resolves a vertex reference to its point.
    #[must_use]
    pub fn point(&self, vertex: VertexRef) -> Option<&Point> {
        vertex.index().and_then(|i| self.vertices.get(i))
    }

    /// The corner points of a finite cell, in orientation order.
    #[must_use]
    pub fn tetrahedron(&self, key: CellKey) -> Option<[Point; 4]> {
        self.cell(key)
            .and_then(|cell| self.points_of(cell.vertices()))
    }

    /// Resolves four vertex references; `None` if any of them is infinite.
    pub(crate) fn points_of(&self, vertices: &[VertexRef; 4]) -> Option<[Point; 4]> {
        Some([
            *self.point(vertices[0])?,
            *self.point(vertices[1])?,
            *self.point(vertices[2])?,
            *self.point(vertices[3])?,
        ])
    }

    /// Resolves four vertex references with slot `slot` replaced by `point`.
    pub(crate) fn points_with_substitute(
        &self,
        vertices: &[VertexRef; 4],
        slot: usize,
        point: &Point,
    ) -> Option<[Point; 4]> {
        let mut result = [*point; 4];
        for (i, vertex) in vertices.iter().enumerate() {
            if i != slot {
                result[i] = *self.point(*vertex)?;
            }
        }
        Some(result)
    }

    pub(crate) const fn cells_mut(&mut self) -> &mut StorageMap<CellKey, Cell> {
        &mut self.cells
    }

    pub(crate) const fn set_hint(&mut self, hint: Option<CellKey>) {
        self.hint = hint;
    }

    /// Locates the finite cell containing `point`.
    ///
    /// # Errors
    ///
    /// Returns `LocateError` for an invalid tolerance.
    pub fn locate(
        &self,
        point: &Point,
        options: &LocateOptions,
        hint: Option<CellKey>,
    ) -> Result<LocateResult, LocateError> {
        locate::locate_containing_cell(self, point, options, hint)
    }

    /// Sum of the volumes of the finite cells.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.finite_cell_keys()
            .filter_map(|key| self.tetrahedron(key))
            .map(|[a, b, c, d]| orientation_value(&a, &b, &c, &d) / 6.0)
            .sum()
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Checks the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn is_valid(&self) -> Result<(), TriangulationValidationError> {
        for (key, cell) in &self.cells {
            for facet in 0..4 {
                let neighbor_key = cell
                    .neighbor(facet)
                    .ok_or(TriangulationValidationError::MissingNeighbor { cell: key, facet })?;
                let asymmetric = TriangulationValidationError::AsymmetricNeighbors {
                    cell: key,
                    neighbor: neighbor_key,
                };
                let neighbor = self.cells.get(neighbor_key).ok_or(asymmetric.clone())?;
                let back = neighbor.neighbor_index(key).ok_or(asymmetric)?;
                if neighbor.facet_key(back) != cell.facet_key(facet) {
                    return Err(TriangulationValidationError::FacetMismatch {
                        cell: key,
                        neighbor: neighbor_key,
                    });
                }
            }

            if let Some([a, b, c, d]) = self.points_of(cell.vertices()) {
                let orientation = orientation(&a, &b, &c, &d);
                if orientation != Orientation::POSITIVE {
                    return Err(TriangulationValidationError::InvalidOrientation {
                        cell: key,
                        orientation,
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks the local empty-circumsphere property on every finite facet.
    ///
    /// For a valid triangulation the local property implies the global one.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn is_delaunay(&self) -> Result<(), TriangulationValidationError> {
        for key in self.finite_cell_keys() {
            let Some(cell) = self.cells.get(key) else {
                continue;
            };
            let Some([a, b, c, d]) = self.points_of(cell.vertices()) else {
                continue;
            };
            for facet in 0..4 {
                let Some(neighbor_key) = cell.neighbor(facet) else {
                    continue;
                };
                let Some(neighbor) = self.cells.get(neighbor_key) else {
                    continue;
                };
                let opposite = neighbor
                    .neighbor_index(key)
                    .and_then(|i| self.point(neighbor.vertices()[i]));
                if let Some(e) = opposite {
                    if insphere(&a, &b, &c, &d, e) == InSphere::INSIDE {
                        return Err(TriangulationValidationError::NotDelaunay {
                            cell: key,
                            neighbor: neighbor_key,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn vertex_ref(index: usize) -> VertexRef {
    // Callers guarantee `index <= u32::MAX`.
    VertexRef::Finite(index as u32)
}

/// Index of the first point maximizing `score`.
fn first_max_by(points: &[Point], mut score: impl FnMut(&Point) -> f64) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, p) in points.iter().enumerate() {
        let s = score(p);
        if s > best.1 {
            best = (i, s);
        }
    }
    best
}

fn cross(u: [f64; 3], v: [f64; 3]) -> [f64; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Chooses a well-shaped, positively oriented starting tetrahedron.
///
/// The first point is kept, then the farthest point from it, then the point
/// spanning the largest triangle with those two, then the point spanning the
/// largest volume.
fn initial_simplex(vertices: &[Point]) -> Result<[usize; 4], TriangulationError> {
    let degeneracy = |message: &str| TriangulationError::GeometricDegeneracy {
        message: message.to_string(),
    };

    let a = 0;
    let origin = vertices[a];
    let (b, distance) = first_max_by(vertices, |p| origin.squared_distance(p));
    if distance <= 0.0 {
        return Err(degeneracy("all points coincide"));
    }

    let ab = vertices[b].sub(&origin);
    let (c, area) = first_max_by(vertices, |p| {
        let [x, y, z] = cross(ab, p.sub(&origin));
        x * x + y * y + z * z
    });
    if area <= 0.0 {
        return Err(degeneracy("all points are collinear"));
    }

    let (pa, pb, pc) = (vertices[a], vertices[b], vertices[c]);
    let (mut d, _) = first_max_by(vertices, |p| orientation_value(&pa, &pb, &pc, p).abs());
    if orientation(&pa, &pb, &pc, &vertices[d]) == Orientation::DEGENERATE {
        d = vertices
            .iter()
            .position(|p| orientation(&pa, &pb, &pc, p) != Orientation::DEGENERATE)
            .ok_or_else(|| degeneracy("all points are coplanar"))?;
    }

    match orientation(&pa, &pb, &pc, &vertices[d]) {
        Orientation::NEGATIVE => Ok([b, a, c, d]),
        _ => Ok([a, b, c, d]),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn unit_tetrahedron() -> Vec<Point> {
        vec![
            Point::new([0.0, 0.0, 0.0]),
            Point::new([1.0, 0.0, 0.0]),
            Point::new([0.0, 1.0, 0.0]),
            Point::new([0.0, 0.0, 1.0]),
        ]
    }

    fn random_points(count: usize, seed: u64) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Point::new([
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                ])
            })
            .collect()
    }

    fn lattice(n: usize) -> Vec<Point> {
        let mut points = Vec::new();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    points.push(Point::new([i as f64, j as f64, k as f64]));
                }
            }
        }
        points
    }

    #[test]
    fn single_tetrahedron() {
        let tri = Triangulation::new(&unit_tetrahedron()).unwrap();
        assert_eq!(tri.number_of_vertices(), 4);
        assert_eq!(tri.number_of_cells(), 1);
        assert_eq!(tri.number_of_hull_facets(), 4);
        assert_eq!(tri.cells().count(), 5);
        assert!(tri.is_valid().is_ok());
        assert!(tri.is_delaunay().is_ok());
        assert_relative_eq!(tri.volume(), 1.0 / 6.0);
    }

    #[test]
    fn random_points_form_valid_delaunay_triangulation() {
        let points = random_points(300, 42);
        let tri = Triangulation::new(&points).unwrap();
        assert_eq!(tri.number_of_vertices(), 300);
        assert!(tri.is_valid().is_ok());
        assert!(tri.is_delaunay().is_ok());
        let stats = tri.statistics();
        assert_eq!(stats.input_points, 300);
        assert_eq!(stats.duplicates_removed, 0);
        assert_eq!(stats.finite_cells, tri.number_of_cells());
        assert!(stats.max_cavity_size >= 1);
    }

    #[test]
    fn cospherical_lattice_is_handled_exactly() {
        // Every unit cube of the lattice has eight cospherical corners.
        let tri = Triangulation::new(&lattice(4)).unwrap();
        assert_eq!(tri.number_of_vertices(), 64);
        assert!(tri.is_valid().is_ok());
        assert!(tri.is_delaunay().is_ok());
        assert_relative_eq!(tri.volume(), 27.0, epsilon = 1e-9);
    }

    #[test]
    fn construction_is_deterministic() {
        let points = random_points(200, 7);
        let first = Triangulation::new(&points).unwrap();
        let second = Triangulation::new(&points).unwrap();
        let cells = |tri: &Triangulation| -> Vec<[VertexRef; 4]> {
            tri.cells().map(|(_, cell)| *cell.vertices()).collect()
        };
        assert_eq!(cells(&first), cells(&second));
        assert_eq!(first.statistics(), second.statistics());
    }

    #[test]
    fn duplicates_are_removed() {
        let mut points = unit_tetrahedron();
        points.push(Point::new([1.0, 0.0, 0.0]));
        points.push(Point::new([0.0, -0.0, 0.0]));
        let tri = Triangulation::new(&points).unwrap();
        assert_eq!(tri.number_of_vertices(), 4);
        assert_eq!(tri.statistics().duplicates_removed, 2);
    }

    #[test]
    fn duplicates_without_removal_fail_insertion() {
        let mut points = unit_tetrahedron();
        points.push(Point::new([0.25, 0.25, 0.25]));
        points.push(Point::new([0.25, 0.25, 0.25]));
        let options = TriangulationOptionsBuilder::default()
            .remove_duplicates(false)
            .build()
            .unwrap();
        let err = Triangulation::with_options(&points, &options).unwrap_err();
        assert!(matches!(
            err,
            TriangulationError::InsertionFailed { index: 5, .. }
        ));
    }

    #[test]
    fn insufficient_vertices() {
        let points = &unit_tetrahedron()[..3];
        assert_eq!(
            Triangulation::new(points).unwrap_err(),
            TriangulationError::InsufficientVertices { found: 3 }
        );
        let repeated = vec![Point::new([1.0, 1.0, 1.0]); 10];
        assert_eq!(
            Triangulation::new(&repeated).unwrap_err(),
            TriangulationError::InsufficientVertices { found: 1 }
        );
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let coplanar: Vec<Point> = (0..10)
            .map(|i| Point::new([f64::from(i), f64::from(i * i % 7), 0.0]))
            .collect();
        assert!(matches!(
            Triangulation::new(&coplanar),
            Err(TriangulationError::GeometricDegeneracy { .. })
        ));

        let collinear: Vec<Point> = (0..6)
            .map(|i| Point::new([f64::from(i), 2.0 * f64::from(i), -f64::from(i)]))
            .collect();
        assert!(matches!(
            Triangulation::new(&collinear),
            Err(TriangulationError::GeometricDegeneracy { .. })
        ));

        let options = TriangulationOptionsBuilder::default()
            .remove_duplicates(false)
            .build()
            .unwrap();
        let coincident = vec![Point::new([0.5, 0.5, 0.5]); 5];
        assert_eq!(
            Triangulation::with_options(&coincident, &options).unwrap_err(),
            TriangulationError::GeometricDegeneracy {
                message: "all points coincide".to_string()
            }
        );
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let mut points = unit_tetrahedron();
        points.push(Point::new([0.1, f64::NAN, 0.1]));
        assert_eq!(
            Triangulation::new(&points).unwrap_err(),
            TriangulationError::NonFiniteCoordinate { index: 4 }
        );
    }

    #[test]
    fn options_builder_rejects_zero_steps() {
        assert!(
            TriangulationOptionsBuilder::default()
                .max_walk_steps(0)
                .build()
                .is_err()
        );
        assert_eq!(
            TriangulationOptionsBuilder::default().build().unwrap(),
            TriangulationOptions::default()
        );
    }

    #[test]
    fn bounding_box_contains_with_margin() {
        let tri = Triangulation::new(&unit_tetrahedron()).unwrap();
        let bounds = tri.bounding_box();
        assert_eq!(bounds.min, [0.0; 3]);
        assert_eq!(bounds.max, [1.0; 3]);
        assert!(bounds.contains(&Point::new([1.0, 1.0, 1.0]), 0.0));
        assert!(!bounds.contains(&Point::new([1.1, 0.0, 0.0]), 0.0));
        assert!(bounds.contains(&Point::new([1.1, 0.0, 0.0]), 0.2));
    }

    #[test]
    fn statistics_serialize() {
        let tri = Triangulation::new(&unit_tetrahedron()).unwrap();
        let json = serde_json::to_string(tri.statistics()).unwrap();
        let back: ConstructionStatistics = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, tri.statistics());
    }
}
