//! # macadam
//!
//! Colour-volume membership tests against the MacAdam limits, together with
//! the colorimetry they rest on.
//!
//! The *optimal colour stimuli* of an illuminant are the most saturated
//! surface colours physically realizable under it. They bound a convex solid
//! in CIE XYZ (the MacAdam limits). This crate decides whether CIE xyY colours
//! fall inside that solid by tetrahedralizing the tabulated stimuli once per
//! illuminant and locating query points in the tetrahedralization.
//!
//! # Features
//!
//! - Optimal colour stimuli tables for illuminants `A`, `C` and `D65`
//! - Lazily built, shared per-illuminant caches of stimuli and triangulations
//! - Exact-predicate 3D Delaunay triangulation (incremental Bowyer–Watson)
//! - Barycentric point location with a configurable boundary tolerance
//! - CIE xyY/XYZ conversions, illuminant chromaticities, RGB colourspaces
//!   and transfer functions (ITU-R BT.2020, S-Log, sRGB)
//! - Serialization/Deserialization of options and geometry with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use macadam::prelude::*;
//!
//! // A single colour yields a single answer...
//! assert!(is_within_macadam_limits(&[0.4476, 0.4075, 0.5], "A", None).unwrap());
//!
//! // ...and a batch yields one answer per colour, in order.
//! let batch = [[0.3205, 0.4131, 0.51], [0.0005, 0.0031, 0.001]];
//! assert_eq!(is_within_macadam_limits(&batch, "A", None).unwrap(), [true, false]);
//!
//! // Unknown illuminants are errors, never `false`.
//! assert!(matches!(
//!     is_within_macadam_limits(&[0.3, 0.3, 0.3], "D50", None),
//!     Err(VolumeError::NotFound { .. })
//! ));
//! ```
//!
//! # Tolerance
//!
//! A colour is within the limits when it lies in some tetrahedron of the
//! triangulation, every barycentric coordinate being at least `-tolerance`.
//! The default, [`DEFAULT_TOLERANCE`](core::algorithms::locate::DEFAULT_TOLERANCE),
//! absorbs rounding for colours on the boundary; larger tolerances admit
//! colours slightly outside and never reject colours admitted by a smaller one.
//!
//! # Caching
//!
//! The free functions in [`volume::macadam_limits`] share one process-wide
//! [`MacAdamLimits`](volume::macadam_limits::MacAdamLimits). Its caches are
//! filled on the first request for an illuminant and never evicted;
//! [`reset_macadam_limits_caches`](volume::macadam_limits::reset_macadam_limits_caches)
//! empties them. Independent instances with their own dataset and caches can
//! be created with [`MacAdamLimits::new`](volume::macadam_limits::MacAdamLimits::new).
//!
//! # Triangulation Invariants
//!
//! [`Triangulation::is_valid`](core::triangulation::Triangulation::is_valid) and
//! [`Triangulation::is_delaunay`](core::triangulation::Triangulation::is_delaunay) check:
//!
//! - **Neighbor consistency**: every cell has four mutual neighbours that
//!   share the facet they are linked across.
//! - **Orientation**: every finite cell is positively oriented.
//! - **Delaunay property**: no vertex lies strictly inside the circumsphere of
//!   an adjacent cell.

#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// Triangulation data structures and algorithms.
pub mod core {
    /// Construction and query algorithms
    pub mod algorithms {
        /// Incremental Bowyer–Watson insertion
        pub mod incremental_insertion;
        /// Point location (visibility and barycentric walks)
        pub mod locate;
    }
    /// Lazily built keyed caches
    pub mod cache;
    pub mod cell;
    /// Collection types used by the triangulation
    pub mod collections;
    pub mod triangulation;
    /// Traits at the geometry backend seam
    pub mod traits {
        pub mod point_location;
        pub use point_location::*;
    }
    /// Utility functions
    pub mod util {
        pub mod deduplication;
        pub use deduplication::*;
    }
    pub use cell::*;
    pub use triangulation::*;
}

/// Geometric primitives and predicates.
pub mod geometry {
    pub mod matrix;
    pub mod point;
    pub mod predicates;
    /// Exact orientation and insphere predicates
    pub mod robust_predicates;
    pub use point::*;
    pub use predicates::*;
}

/// Colorimetric reference data.
pub mod colorimetry {
    pub mod illuminants;
    pub use illuminants::*;
}

/// Colour models and colourspaces.
pub mod models {
    pub mod cie_xyy;
    /// RGB colourspaces
    pub mod rgb {
        pub mod colourspace;
        pub mod dataset;
        pub mod transfer_functions;
        pub use colourspace::*;
        pub use dataset::*;
        pub use transfer_functions::*;
    }
    pub use cie_xyy::*;
}

/// Colour volumes: the MacAdam limits.
pub mod volume {
    pub mod dataset;
    /// Tabulated reference data
    pub mod datasets {
        pub mod optimal_colour_stimuli;
    }
    pub mod macadam_limits;
    pub use dataset::*;
    pub use macadam_limits::*;
}

/// A prelude module that re-exports commonly used types and functions.
pub mod prelude {
    pub use crate::core::algorithms::locate::{
        DEFAULT_TOLERANCE, LocateError, LocateOptions, LocateOptionsBuilder, LocateResult,
        locate_containing_cell, locate_points,
    };
    pub use crate::core::cache::BuildCache;
    pub use crate::core::cell::{Cell, CellKey, VertexRef};
    pub use crate::core::traits::point_location::{DelaunayLocator, PointLocation};
    pub use crate::core::triangulation::{
        ConstructionStatistics, Triangulation, TriangulationError, TriangulationOptions,
        TriangulationOptionsBuilder,
    };

    pub use crate::geometry::point::Point;
    pub use crate::geometry::predicates::{
        InSphere, Orientation, barycentric_coordinates, insphere, orientation,
    };

    pub use crate::colorimetry::illuminants::{IlluminantError, illuminant_chromaticity};
    pub use crate::models::cie_xyy::{
        xy_to_xyy, xy_to_xyz, xyy_to_xy, xyy_to_xyz, xyy_to_xyz_batch, xyz_to_xyy,
        xyz_to_xyy_batch,
    };
    pub use crate::models::rgb::{
        ColourspaceError, RgbColourspace, TransferFunction, normalised_primary_matrix,
        rgb_colourspace,
    };

    pub use crate::volume::dataset::OptimalColourStimuliDataset;
    pub use crate::volume::macadam_limits::{
        MacAdamLimits, VolumeError, XyyQuery, is_within_macadam_limits, macadam_limits,
        optimal_colour_stimuli_triangulation, reset_macadam_limits_caches,
        xyz_optimal_colour_stimuli,
    };
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::is_normal;

    #[test]
    fn normal_types() {
        assert!(is_normal::<Point>());
        assert!(is_normal::<Cell>());
        assert!(is_normal::<Triangulation>());
        assert!(is_normal::<DelaunayLocator>());
        assert!(is_normal::<BuildCache<Triangulation>>());
        assert!(is_normal::<MacAdamLimits>());
        assert!(is_normal::<RgbColourspace>());
    }

    #[test]
    fn prelude_exports_conversions_and_colourspaces() {
        let xyz = xyy_to_xyz([0.25, 0.5, 1.0]);
        assert_eq!(xyz, [0.5, 1.0, 0.5]);
        assert!(rgb_colourspace("sRGB").is_ok());
        assert!(illuminant_chromaticity("D65").is_ok());
    }
}
