//! Tetrahedral cells of a triangulation.
//!
//! A [`Cell`] stores four vertex references and the four neighbouring cells,
//! with neighbour `i` lying across the facet opposite vertex `i`. The
//! triangulation is closed with a single symbolic vertex at infinity
//! ([`VertexRef::Infinite`]): every convex hull facet is shared with an
//! *infinite* cell, so every cell always has exactly four neighbours.
//!
//! Finite cells are positively oriented. An infinite cell is oriented so that
//! substituting a finite point `q` for its infinite vertex yields a positive
//! tetrahedron exactly when `q` lies strictly outside the hull facet.

use crate::core::collections::{FacetIndex, FacetKey};
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    /// Key type for accessing cells in the cell storage.
    pub struct CellKey;
}

/// Reference to a triangulation vertex.
///
/// Finite vertices are indices into the triangulation's vertex list. The
/// ordering places every finite vertex before the infinite one, which makes
/// sorted facet keys deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VertexRef {
    /// Index into the vertex list.
    Finite(u32),
    /// The symbolic vertex at infinity.
    Infinite,
}

impl VertexRef {
    /// Returns `true` for the vertex at infinity.
    #[inline]
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Vertex list index of a finite vertex.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Finite(i) => Some(i as usize),
            Self::Infinite => None,
        }
    }
}

impl fmt::Display for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(i) => write!(f, "{i}"),
            Self::Infinite => write!(f, "∞"),
        }
    }
}

/// A facet addressed through one of its two incident cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FacetHandle {
    cell: CellKey,
    facet: FacetIndex,
}

impl FacetHandle {
    /// Creates a handle for facet `facet` (opposite vertex `facet`) of `cell`.
    #[inline]
    #[must_use]
    pub const fn new(cell: CellKey, facet: FacetIndex) -> Self {
        Self { cell, facet }
    }

    /// The cell the facet is addressed through.
    #[inline]
    #[must_use]
    pub const fn cell_key(&self) -> CellKey {
        self.cell
    }

    /// Index of the facet within the cell.
    #[inline]
    #[must_use]
    pub const fn facet_index(&self) -> usize {
        self.facet as usize
    }
}

/// A tetrahedron with neighbour links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    vertices: [VertexRef; 4],
    neighbors: [Option<CellKey>; 4],
}

impl Cell {
    /// Creates a cell with no neighbours assigned.
    #[must_use]
    pub const fn new(vertices: [VertexRef; 4]) -> Self {
        Self {
            vertices,
            neighbors: [None; 4],
        }
    }

    /// The four vertices, in orientation order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &[VertexRef; 4] {
        &self.vertices
    }

    /// The four neighbours; neighbour `i` is opposite vertex `i`.
    #[inline]
    #[must_use]
    pub const fn neighbors(&self) -> &[Option<CellKey>; 4] {
        &self.neighbors
    }

    /// Neighbour across the facet opposite vertex `i`.
    #[inline]
    #[must_use]
    pub fn neighbor(&self, i: usize) -> Option<CellKey> {
        self.neighbors.get(i).copied().flatten()
    }

    pub(crate) fn set_neighbor(&mut self, i: usize, neighbor: Option<CellKey>) {
        self.neighbors[i] = neighbor;
    }

    /// Returns `true` when one of the vertices is the vertex at infinity.
    #[inline]
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.vertices.iter().any(|v| v.is_infinite())
    }

    /// Position of the infinite vertex, if any.
    #[inline]
    #[must_use]
    pub fn infinite_vertex_index(&self) -> Option<usize> {
        self.vertices.iter().position(|v| v.is_infinite())
    }

    /// Position of `neighbor` among this cell's neighbours.
    #[inline]
    #[must_use]
    pub fn neighbor_index(&self, neighbor: CellKey) -> Option<usize> {
        self.neighbors.iter().position(|n| *n == Some(neighbor))
    }

    /// Returns `true` when `vertex` is one of the cell's vertices.
    #[inline]
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexRef) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Sorted key of the facet opposite vertex `i`.
    #[must_use]
    pub fn facet_key(&self, i: usize) -> FacetKey {
        let mut key = [VertexRef::Infinite; 3];
        let mut slot = 0;
        for (j, v) in self.vertices.iter().enumerate() {
            if j != i {
                key[slot] = *v;
                slot += 1;
            }
        }
        key.sort_unstable();
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn finite(indices: [u32; 4]) -> Cell {
        Cell::new(indices.map(VertexRef::Finite))
    }

    #[test]
    fn vertex_ref_ordering_places_infinite_last() {
        let mut refs = vec![VertexRef::Infinite, VertexRef::Finite(3), VertexRef::Finite(1)];
        refs.sort_unstable();
        assert_eq!(
            refs,
            vec![VertexRef::Finite(1), VertexRef::Finite(3), VertexRef::Infinite]
        );
        assert_eq!(VertexRef::Finite(7).index(), Some(7));
        assert_eq!(VertexRef::Infinite.index(), None);
        assert_eq!(VertexRef::Infinite.to_string(), "∞");
    }

    #[test]
    fn facet_key_is_sorted_and_skips_opposite_vertex() {
        let cell = finite([5, 2, 9, 0]);
        assert_eq!(
            cell.facet_key(0),
            [VertexRef::Finite(0), VertexRef::Finite(2), VertexRef::Finite(9)]
        );
        assert_eq!(
            cell.facet_key(3),
            [VertexRef::Finite(2), VertexRef::Finite(5), VertexRef::Finite(9)]
        );
    }

    #[test]
    fn infinite_cells_report_their_infinite_slot() {
        let cell = Cell::new([
            VertexRef::Finite(0),
            VertexRef::Infinite,
            VertexRef::Finite(2),
            VertexRef::Finite(1),
        ]);
        assert!(cell.is_infinite());
        assert_eq!(cell.infinite_vertex_index(), Some(1));
        assert!(!finite([0, 1, 2, 3]).is_infinite());
        assert_eq!(finite([0, 1, 2, 3]).infinite_vertex_index(), None);
    }

    #[test]
    fn neighbor_bookkeeping() {
        let mut storage: SlotMap<CellKey, ()> = SlotMap::with_key();
        let a = storage.insert(());
        let b = storage.insert(());

        let mut cell = finite([0, 1, 2, 3]);
        assert_eq!(cell.neighbor(2), None);
        cell.set_neighbor(2, Some(a));
        cell.set_neighbor(0, Some(b));
        assert_eq!(cell.neighbor(2), Some(a));
        assert_eq!(cell.neighbor_index(b), Some(0));
        assert_eq!(cell.neighbor(7), None);
        assert!(cell.contains_vertex(VertexRef::Finite(3)));
        assert!(!cell.contains_vertex(VertexRef::Infinite));

        let handle = FacetHandle::new(a, 3);
        assert_eq!(handle.cell_key(), a);
        assert_eq!(handle.facet_index(), 3);
    }
}
