//! Property-based tests for triangulation invariants.
//!
//! This module uses proptest to verify structural properties of the Delaunay
//! tetrahedralizations built over random point sets, including:
//! - Neighbor symmetry and positive orientation (`is_valid`)
//! - The empty circumsphere property (`is_delaunay`)
//! - Every input point is located, and points far outside are not
//! - Larger tolerances never reject points admitted by smaller ones

use macadam::core::algorithms::locate::{LocateOptions, LocateOptionsBuilder, LocateResult};
use macadam::core::triangulation::{Triangulation, TriangulationError};
use macadam::geometry::point::Point;
use proptest::prelude::*;

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

/// Strategy for generating finite f64 coordinates in a reasonable range
fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

/// Strategy for generating 3D points
fn point_3d() -> impl Strategy<Value = Point> {
    prop::array::uniform3(finite_coordinate()).prop_map(Point::new)
}

/// Strategy for generating a small point set (6-40 points)
fn small_point_set() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point_3d(), 6..=40)
}

/// Strategy for generating points on a coarse integer lattice, which produces
/// many cospherical and coplanar configurations.
fn lattice_point_set() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        prop::array::uniform3(0i32..4).prop_map(|c| Point::new(c.map(f64::from))),
        8..=30,
    )
}

fn build(points: &[Point]) -> Option<Triangulation> {
    match Triangulation::new(points) {
        Ok(tri) => Some(tri),
        // Random sets can be flat or too small after deduplication.
        Err(
            TriangulationError::GeometricDegeneracy { .. }
            | TriangulationError::InsufficientVertices { .. },
        ) => None,
        Err(e) => panic!("unexpected construction failure: {e}"),
    }
}

// =============================================================================
// STRUCTURAL PROPERTIES
// =============================================================================

proptest! {
    /// Property: triangulations of random points are valid and Delaunay.
    #[test]
    fn prop_triangulation_is_valid_and_delaunay(points in small_point_set()) {
        if let Some(tri) = build(&points) {
            prop_assert!(tri.is_valid().is_ok(), "invalid: {:?}", tri.is_valid());
            prop_assert!(tri.is_delaunay().is_ok(), "not Delaunay: {:?}", tri.is_delaunay());
            prop_assert!(tri.number_of_cells() > 0);
            prop_assert!(tri.volume() > 0.0);
        }
    }

    /// Property: lattice points with heavy degeneracy still triangulate correctly.
    #[test]
    fn prop_lattice_triangulation_is_valid_and_delaunay(points in lattice_point_set()) {
        if let Some(tri) = build(&points) {
            prop_assert!(tri.is_valid().is_ok(), "invalid: {:?}", tri.is_valid());
            prop_assert!(tri.is_delaunay().is_ok(), "not Delaunay: {:?}", tri.is_delaunay());
        }
    }

    /// Property: the vertex count equals the number of distinct input points.
    #[test]
    fn prop_vertex_count_matches_distinct_points(points in lattice_point_set()) {
        if let Some(tri) = build(&points) {
            let stats = tri.statistics();
            prop_assert_eq!(stats.input_points, points.len());
            prop_assert_eq!(
                tri.number_of_vertices(),
                stats.input_points - stats.duplicates_removed
            );
        }
    }

    /// Property: the same input yields the same triangulation.
    #[test]
    fn prop_construction_is_deterministic(points in small_point_set()) {
        if let (Some(a), Some(b)) = (build(&points), build(&points)) {
            prop_assert_eq!(a.number_of_cells(), b.number_of_cells());
            prop_assert_eq!(a.statistics(), b.statistics());
            prop_assert_eq!(a.volume().to_bits(), b.volume().to_bits());
        }
    }
}

// =============================================================================
// POINT LOCATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: every vertex lies in some cell of its triangulation.
    #[test]
    fn prop_every_vertex_is_located(points in small_point_set()) {
        if let Some(tri) = build(&points) {
            // Weights of a vertex in a sliver carry rounding well above the default slack.
            let options = LocateOptionsBuilder::default().tolerance(1e-6).build().unwrap();
            for p in tri.vertices() {
                let result = tri.locate(p, &options, None).unwrap();
                prop_assert!(result.is_inside(), "vertex {} not located", p);
            }
        }
    }

    /// Property: points beyond the bounding box are outside.
    #[test]
    fn prop_far_points_are_outside(points in small_point_set(), q in point_3d()) {
        if let Some(tri) = build(&points) {
            let far = Point::new(q.coords().map(|c| c + 1000.0));
            let result = tri.locate(&far, &LocateOptions::default(), None).unwrap();
            prop_assert_eq!(result, LocateResult::Outside);
        }
    }

    /// Property: a located cell really contains the query within tolerance.
    #[test]
    fn prop_located_cell_contains_point(points in small_point_set(), q in point_3d()) {
        if let Some(tri) = build(&points) {
            let options = LocateOptions::default();
            if let LocateResult::InsideCell(key) = tri.locate(&q, &options, None).unwrap() {
                let tet = tri.tetrahedron(key).unwrap();
                let weights =
                    macadam::geometry::predicates::barycentric_coordinates(&tet, &q).unwrap();
                prop_assert!(weights.iter().all(|w| *w >= -options.tolerance));
            }
        }
    }

    /// Property: a larger tolerance never rejects a point a smaller one admits.
    #[test]
    fn prop_tolerance_is_monotone(
        points in small_point_set(),
        q in point_3d(),
        small in 0.0..1e-3f64,
        extra in 0.0..1e-1f64,
    ) {
        if let Some(tri) = build(&points) {
            let tight = LocateOptionsBuilder::default().tolerance(small).build().unwrap();
            let loose = LocateOptionsBuilder::default().tolerance(small + extra).build().unwrap();
            let inside_tight = tri.locate(&q, &tight, None).unwrap().is_inside();
            let inside_loose = tri.locate(&q, &loose, None).unwrap().is_inside();
            prop_assert!(!inside_tight || inside_loose);
        }
    }

    /// Property: hints change the walk but never the answer.
    #[test]
    fn prop_hint_does_not_change_membership(points in small_point_set(), q in point_3d()) {
        if let Some(tri) = build(&points) {
            let options = LocateOptions::default();
            let cold = tri.locate(&q, &options, None).unwrap().is_inside();
            for key in tri.finite_cell_keys().take(5) {
                let warm = tri.locate(&q, &options, Some(key)).unwrap().is_inside();
                prop_assert_eq!(cold, warm);
            }
        }
    }
}
