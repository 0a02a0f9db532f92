//! Bowyer–Watson vertex insertion.
//!
//! Inserting a vertex `q` removes every cell whose circumsphere strictly
//! contains `q` (the *conflict region* or cavity) and re-triangulates the
//! cavity by connecting `q` to each of its boundary facets. The cavity is
//! always star-shaped from `q`, so the new cells are positively oriented and
//! the result is again Delaunay.
//!
//! Infinite cells take part in the cavity like any other: an infinite cell is
//! in conflict when `q` lies strictly outside its hull facet, or on the
//! facet's plane and inside the circumsphere of the finite cell behind it.
//! Points outside the current hull are therefore inserted without a separate
//! hull-extension step.
//!
//! Insertion is split into three phases. The cavity is found first, then the
//! replacement cells are planned and validated, and only then is the cell
//! storage modified. A failed insertion leaves the triangulation untouched.

use crate::core::algorithms::locate::{LocateError, WalkRng, visibility_walk};
use crate::core::cell::{Cell, CellKey, FacetHandle, VertexRef};
use crate::core::collections::{
    CellKeyBuffer, CellKeySet, FacetIndex, FacetKey, FacetToCellMap, FastHashMap, StorageMap,
};
use crate::core::triangulation::Triangulation;
use crate::geometry::point::Point;
use crate::geometry::predicates::{InSphere, Orientation, insphere, orientation};
use thiserror::Error;
use tracing::trace;

/// Errors raised while inserting a single vertex.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InsertionError {
    /// The walk to the new vertex failed.
    #[error("Point location failed: {source}")]
    Locate {
        /// The underlying location error
        #[from]
        source: LocateError,
    },

    /// The cell reached by the walk does not conflict with the vertex.
    ///
    /// This happens when the vertex coincides with an existing one.
    #[error("Vertex {vertex} is not in conflict with the cell containing it (duplicate point?)")]
    SeedNotInConflict {
        /// The vertex being inserted
        vertex: usize,
    },

    /// A replacement cell would be flat or inverted.
    #[error("Inserting vertex {vertex} would create a non-positive cell")]
    InvertedCell {
        /// The vertex being inserted
        vertex: usize,
    },

    /// A facet inside the re-triangulated cavity is not shared by exactly two cells.
    #[error("Cavity facet of vertex {vertex} is shared by {count} new cells instead of 2")]
    UnpairedCavityFacet {
        /// The vertex being inserted
        vertex: usize,
        /// Number of new cells sharing the facet
        count: usize,
    },

    /// A cell is missing a neighbour link or its neighbour does not link back.
    #[error("Broken neighbor link at cell {cell:?}")]
    BrokenNeighborLink {
        /// The cell whose link is broken
        cell: CellKey,
    },
}

/// Summary of a single insertion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertionReport {
    /// Cells removed.
    pub cavity_size: usize,
    /// Cells created.
    pub cells_created: usize,
    /// Steps taken by the location walk.
    pub walk_steps: usize,
}

/// A facet on the cavity boundary, seen from the cavity side.
#[derive(Clone, Copy, Debug)]
struct BoundaryFacet {
    cavity_cell: CellKey,
    facet: usize,
    outside: CellKey,
    back_slot: usize,
}

struct Cavity {
    cells: CellKeyBuffer,
    boundary: Vec<BoundaryFacet>,
}

/// Returns `true` when `point` conflicts with cell `key`.
pub(crate) fn in_conflict(tri: &Triangulation, key: CellKey, point: &Point) -> bool {
    let Some(cell) = tri.cell(key) else {
        return false;
    };

    match cell.infinite_vertex_index() {
        None => tri
            .points_of(cell.vertices())
            .is_some_and(|[a, b, c, d]| insphere(&a, &b, &c, &d, point) == InSphere::INSIDE),
        Some(slot) => {
            let Some([a, b, c, d]) = tri.points_with_substitute(cell.vertices(), slot, point)
            else {
                return false;
            };
            match orientation(&a, &b, &c, &d) {
                Orientation::POSITIVE => true,
                Orientation::NEGATIVE => false,
                Orientation::DEGENERATE => cell
                    .neighbor(slot)
                    .and_then(|finite| tri.tetrahedron(finite))
                    .is_some_and(|[a, b, c, d]| insphere(&a, &b, &c, &d, point) == InSphere::INSIDE),
            }
        }
    }
}

fn find_cavity(
    tri: &Triangulation,
    seed: CellKey,
    point: &Point,
) -> Result<Cavity, InsertionError> {
    let mut cells = CellKeyBuffer::new();
    let mut members = CellKeySet::default();
    let mut conflicts: FastHashMap<CellKey, bool> = FastHashMap::default();
    let mut boundary = Vec::new();
    let mut stack = vec![seed];
    members.insert(seed);

    while let Some(key) = stack.pop() {
        cells.push(key);
        let cell = tri
            .cell(key)
            .ok_or(InsertionError::BrokenNeighborLink { cell: key })?;

        for facet in 0..4 {
            let neighbor = cell
                .neighbor(facet)
                .ok_or(InsertionError::BrokenNeighborLink { cell: key })?;
            if members.contains(&neighbor) {
                continue;
            }
            let conflicting = *conflicts
                .entry(neighbor)
                .or_insert_with(|| in_conflict(tri, neighbor, point));
            if conflicting {
                members.insert(neighbor);
                stack.push(neighbor);
            } else {
                let back_slot = tri
                    .cell(neighbor)
                    .and_then(|outside| outside.neighbor_index(key))
                    .ok_or(InsertionError::BrokenNeighborLink { cell: neighbor })?;
                boundary.push(BoundaryFacet {
                    cavity_cell: key,
                    facet,
                    outside: neighbor,
                    back_slot,
                });
            }
        }
    }

    Ok(Cavity { cells, boundary })
}

/// Builds the replacement cells and checks them before anything is modified.
fn plan_cells(
    tri: &Triangulation,
    cavity: &Cavity,
    vertex: usize,
    point: &Point,
) -> Result<Vec<(Cell, BoundaryFacet)>, InsertionError> {
    let apex = tri
        .vertices()
        .get(vertex)
        .and(u32::try_from(vertex).ok())
        .map(VertexRef::Finite)
        .ok_or(InsertionError::InvertedCell { vertex })?;

    let mut planned = Vec::with_capacity(cavity.boundary.len());
    let mut internal: FastHashMap<FacetKey, usize> = FastHashMap::default();

    for facet in &cavity.boundary {
        let old = tri
            .cell(facet.cavity_cell)
            .ok_or(InsertionError::BrokenNeighborLink {
                cell: facet.cavity_cell,
            })?;
        let mut vertices = *old.vertices();
        vertices[facet.facet] = apex;
        let cell = Cell::new(vertices);

        if let Some([a, b, c, d]) = tri.points_with_substitute(&vertices, facet.facet, point) {
            if orientation(&a, &b, &c, &d) != Orientation::POSITIVE {
                return Err(InsertionError::InvertedCell { vertex });
            }
        }

        for i in (0..4).filter(|i| *i != facet.facet) {
            *internal.entry(cell.facet_key(i)).or_insert(0) += 1;
        }
        planned.push((cell, *facet));
    }

    if let Some(count) = internal.values().copied().find(|count| *count != 2) {
        return Err(InsertionError::UnpairedCavityFacet { vertex, count });
    }
    Ok(planned)
}

fn commit(
    tri: &mut Triangulation,
    cavity: &Cavity,
    planned: Vec<(Cell, BoundaryFacet)>,
) -> Vec<CellKey> {
    let cells = tri.cells_mut();
    let mut created = Vec::with_capacity(planned.len());

    for (mut cell, facet) in planned {
        cell.set_neighbor(facet.facet, Some(facet.outside));
        let key = cells.insert(cell);
        if let Some(outside) = cells.get_mut(facet.outside) {
            outside.set_neighbor(facet.back_slot, Some(key));
        }
        created.push(key);
    }
    for key in &cavity.cells {
        cells.remove(*key);
    }
    wire_neighbors(cells, &created);

    let hint = created
        .iter()
        .copied()
        .find(|key| cells.get(*key).is_some_and(|cell| !cell.is_infinite()))
        .or_else(|| {
            cells
                .iter()
                .find(|(_, cell)| !cell.is_infinite())
                .map(|(key, _)| key)
        });
    tri.set_hint(hint);
    created
}

/// Links the unset neighbour slots of `keys` by matching facet keys.
///
/// Each facet key is expected to occur on exactly two of the given cells.
pub(crate) fn wire_neighbors(cells: &mut StorageMap<CellKey, Cell>, keys: &[CellKey]) {
    let mut open = FacetToCellMap::default();
    for &key in keys {
        for facet in 0..4 as FacetIndex {
            let Some(cell) = cells.get(key) else {
                continue;
            };
            if cell.neighbor(usize::from(facet)).is_some() {
                continue;
            }
            let facet_key = cell.facet_key(usize::from(facet));
            match open.remove(&facet_key) {
                Some(other) => {
                    if let Some(cell) = cells.get_mut(key) {
                        cell.set_neighbor(usize::from(facet), Some(other.cell_key()));
                    }
                    if let Some(cell) = cells.get_mut(other.cell_key()) {
                        cell.set_neighbor(other.facet_index(), Some(key));
                    }
                }
                None => {
                    open.insert(facet_key, FacetHandle::new(key, facet));
                }
            }
        }
    }
}

/// Inserts vertex `vertex` (an index into the triangulation's vertex list).
///
/// # Errors
///
/// Returns `InsertionError` if the walk fails or the cavity cannot be
/// re-triangulated consistently; the triangulation is unchanged in that case.
pub(crate) fn insert_vertex(
    tri: &mut Triangulation,
    vertex: usize,
    rng: &mut WalkRng,
    max_steps: usize,
) -> Result<InsertionReport, InsertionError> {
    let point = *tri
        .vertices()
        .get(vertex)
        .ok_or(InsertionError::SeedNotInConflict { vertex })?;
    let start = tri.hint_cell().ok_or(LocateError::EmptyTriangulation)?;

    let (seed, walk_steps) = match visibility_walk(tri, start, &point, rng, max_steps) {
        Ok(walk) => (Some(walk.cell), walk.steps),
        Err(LocateError::CycleDetected { steps }) => {
            trace!(vertex, steps, "walk step limit reached, scanning for a conflicting cell");
            (scan_for_conflict(tri, &point), steps)
        }
        Err(e) => return Err(e.into()),
    };
    let seed = seed
        .filter(|key| in_conflict(tri, *key, &point))
        .ok_or(InsertionError::SeedNotInConflict { vertex })?;

    let cavity = find_cavity(tri, seed, &point)?;
    let planned = plan_cells(tri, &cavity, vertex, &point)?;
    let cells_created = planned.len();
    let cavity_size = cavity.cells.len();
    commit(tri, &cavity, planned);

    trace!(vertex, cavity_size, cells_created, steps = walk_steps, "vertex inserted");
    Ok(InsertionReport {
        cavity_size,
        cells_created,
        walk_steps,
    })
}

/// Any cell in conflict with `point`; the conflict region is connected, so
/// each of its cells seeds the same cavity.
fn scan_for_conflict(tri: &Triangulation, point: &Point) -> Option<CellKey> {
    tri.cells()
        .map(|(key, _)| key)
        .find(|key| in_conflict(tri, *key, point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::triangulation::TriangulationOptionsBuilder;

    fn tetrahedron() -> Triangulation {
        Triangulation::new(&[
            Point::new([0.0, 0.0, 0.0]),
            Point::new([1.0, 0.0, 0.0]),
            Point::new([0.0, 1.0, 0.0]),
            Point::new([0.0, 0.0, 1.0]),
        ])
        .unwrap()
    }

    #[test]
    fn interior_point_conflicts_only_with_finite_cell() {
        let tri = tetrahedron();
        let q = Point::new([0.1, 0.1, 0.1]);
        for (key, cell) in tri.cells() {
            assert_eq!(in_conflict(&tri, key, &q), !cell.is_infinite());
        }
    }

    #[test]
    fn exterior_point_conflicts_with_visible_hull_facet() {
        let tri = tetrahedron();
        // Beyond the facet x + y + z = 1 only.
        let q = Point::new([0.6, 0.6, 0.6]);
        let visible: Vec<CellKey> = tri
            .cells()
            .filter(|(_, cell)| cell.is_infinite())
            .map(|(key, _)| key)
            .filter(|key| in_conflict(&tri, *key, &q))
            .collect();
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn coplanar_exterior_point_defers_to_finite_neighbor() {
        let tri = tetrahedron();
        let inside_circle = Point::new([0.6, 0.6, 0.0]);
        let far_away = Point::new([5.0, 5.0, 0.0]);
        let count = |q: &Point| {
            tri.cells()
                .filter(|(key, cell)| cell.is_infinite() && in_conflict(&tri, *key, q))
                .count()
        };
        // z = 0 facet plane: conflicting only within the circumsphere of the
        // finite cell, plus the facet x + y + z = 1 which it is beyond.
        assert_eq!(count(&inside_circle), 2);
        assert_eq!(count(&far_away), 1);
    }

    #[test]
    fn exhausted_walk_falls_back_to_conflict_scan() {
        let mut points = Vec::new();
        for i in 0..60_u32 {
            let t = f64::from(i);
            points.push(Point::new([(t * 0.9).sin(), (t * 1.7).cos(), (t * 0.23).sin()]));
        }
        let walking = Triangulation::new(&points).unwrap();
        for max_walk_steps in [1, 2, 4] {
            let options = TriangulationOptionsBuilder::default()
                .max_walk_steps(max_walk_steps)
                .build()
                .unwrap();
            let scanning = Triangulation::with_options(&points, &options).unwrap();
            assert!(scanning.is_valid().is_ok());
            assert!(scanning.is_delaunay().is_ok());
            assert_eq!(scanning.number_of_vertices(), walking.number_of_vertices());
            assert!((scanning.volume() - walking.volume()).abs() < 1e-12);
        }
    }

    #[test]
    fn wire_neighbors_pairs_shared_facets() {
        let mut cells: StorageMap<CellKey, Cell> = StorageMap::with_key();
        let finite = [0, 1, 2, 3].map(VertexRef::Finite);
        let mut keys = vec![cells.insert(Cell::new(finite))];
        for i in 0..4 {
            let mut vertices = finite;
            vertices[i] = VertexRef::Infinite;
            vertices.swap((i + 1) % 4, (i + 2) % 4);
            keys.push(cells.insert(Cell::new(vertices)));
        }
        wire_neighbors(&mut cells, &keys);

        for key in &keys {
            let cell = &cells[*key];
            for facet in 0..4 {
                let neighbor = cell.neighbor(facet).unwrap();
                let back = cells[neighbor].neighbor_index(*key).unwrap();
                assert_eq!(cells[neighbor].facet_key(back), cell.facet_key(facet));
            }
        }
    }

    #[test]
    fn construction_statistics_balance() {
        let mut points = Vec::new();
        for i in 0..40_u32 {
            let t = f64::from(i);
            points.push(Point::new([
                (t * 0.7).sin(),
                (t * 1.3).cos(),
                (t * 0.37).sin() * (t * 0.11).cos(),
            ]));
        }
        let tri = Triangulation::new(&points).unwrap();
        let stats = tri.statistics();
        // Five cells for the initial tetrahedron and its hull.
        assert_eq!(
            5 + stats.cells_created,
            tri.cells().count() + stats.cells_removed
        );
        assert!(tri.is_valid().is_ok());
        assert!(tri.is_delaunay().is_ok());
    }
}
