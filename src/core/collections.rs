//! Collection types used by the triangulation and the caches.
//!
//! Hash maps use `FxHash` through `rustc-hash`; the keys hashed here are small
//! integers and slotmap keys, for which `FxHash` is considerably faster than
//! the default SipHash. Short-lived buffers whose size is usually bounded use
//! `SmallVec` to stay on the stack.

use crate::core::cell::{CellKey, FacetHandle, VertexRef};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

#[cfg(not(feature = "dense-slotmap"))]
use slotmap::SlotMap;

#[cfg(feature = "dense-slotmap")]
use slotmap::DenseSlotMap;

// =============================================================================
// STORAGE BACKEND
// =============================================================================

/// Storage backend for triangulation cells.
///
/// `DenseSlotMap` by default (the `dense-slotmap` feature); `SlotMap` when
/// built with `--no-default-features`.
#[cfg(not(feature = "dense-slotmap"))]
pub type StorageMap<K, V> = SlotMap<K, V>;

/// Storage backend for triangulation cells.
///
/// `DenseSlotMap` by default (the `dense-slotmap` feature); `SlotMap` when
/// built with `--no-default-features`.
#[cfg(feature = "dense-slotmap")]
pub type StorageMap<K, V> = DenseSlotMap<K, V>;

// =============================================================================
// CORE OPTIMIZED TYPES
// =============================================================================

/// Hash map using `FxHash`.
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Hash set using `FxHash`.
pub type FastHashSet<T> = FxHashSet<T>;

/// Stack-first vector that spills to the heap past `N` elements.
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

// =============================================================================
// SEMANTIC SIZE CONSTANTS AND TYPE ALIASES
// =============================================================================

/// Typical upper bound on the number of cells in an insertion cavity.
pub const CAVITY_BUFFER_SIZE: usize = 64;

/// Index of a facet within a tetrahedron (`0..4`, the facet opposite vertex `i`).
pub type FacetIndex = u8;

/// Sorted vertex triple identifying a facet independently of the cell it belongs to.
pub type FacetKey = [VertexRef; 3];

/// Cell keys collected while growing a cavity.
pub type CellKeyBuffer = SmallBuffer<CellKey, CAVITY_BUFFER_SIZE>;

/// Set of cell keys.
pub type CellKeySet = FastHashSet<CellKey>;

/// Map from facet keys to the single cell facet seen so far, used to pair
/// facets when wiring neighbours.
pub type FacetToCellMap = FastHashMap<FacetKey, FacetHandle>;
