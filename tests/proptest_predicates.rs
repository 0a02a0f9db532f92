//! Property-based tests for geometric predicates.
//!
//! This module uses proptest to verify properties of the exact predicates
//! that must hold for every input, including:
//! - Orientation sign flips under transpositions and is kept under even permutations
//! - Insphere results swap with the orientation of the reference tetrahedron
//! - Barycentric coordinates are consistent with the orientation predicate

use macadam::geometry::point::Point;
use macadam::geometry::predicates::{
    InSphere, Orientation, barycentric_coordinates, insphere, orientation, orientation_value,
};
use proptest::prelude::*;

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

/// Strategy for generating finite f64 coordinates in a reasonable range
fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-1000.0..1000.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

/// Strategy for generating 3D points
fn point_3d() -> impl Strategy<Value = Point> {
    prop::array::uniform3(finite_coordinate()).prop_map(Point::new)
}

/// Strategy for generating tristimulus-like points in the unit cube
fn unit_point() -> impl Strategy<Value = Point> {
    prop::array::uniform3(0.0..1.0f64).prop_map(Point::new)
}

const fn flipped(o: Orientation) -> Orientation {
    match o {
        Orientation::POSITIVE => Orientation::NEGATIVE,
        Orientation::NEGATIVE => Orientation::POSITIVE,
        Orientation::DEGENERATE => Orientation::DEGENERATE,
    }
}

const fn swapped(s: InSphere) -> InSphere {
    match s {
        InSphere::INSIDE => InSphere::OUTSIDE,
        InSphere::OUTSIDE => InSphere::INSIDE,
        InSphere::BOUNDARY => InSphere::BOUNDARY,
    }
}

// =============================================================================
// ORIENTATION PROPERTY TESTS
// =============================================================================

proptest! {
    /// Property: swapping two vertices flips the orientation sign.
    #[test]
    fn prop_orientation_sign_flip(
        p0 in point_3d(),
        p1 in point_3d(),
        p2 in point_3d(),
        p3 in point_3d(),
    ) {
        let o = orientation(&p0, &p1, &p2, &p3);
        prop_assert_eq!(orientation(&p0, &p1, &p3, &p2), flipped(o));
        prop_assert_eq!(orientation(&p1, &p0, &p2, &p3), flipped(o));
        prop_assert_eq!(orientation(&p3, &p1, &p2, &p0), flipped(o));
    }

    /// Property: even permutations preserve the orientation.
    #[test]
    fn prop_orientation_even_permutation_invariance(
        p0 in point_3d(),
        p1 in point_3d(),
        p2 in point_3d(),
        p3 in point_3d(),
    ) {
        let o = orientation(&p0, &p1, &p2, &p3);
        prop_assert_eq!(orientation(&p1, &p2, &p0, &p3), o);
        prop_assert_eq!(orientation(&p1, &p0, &p3, &p2), o);
        prop_assert_eq!(orientation(&p2, &p3, &p0, &p1), o);
    }

    /// Property: a repeated vertex is always degenerate.
    #[test]
    fn prop_orientation_repeated_vertex_is_degenerate(
        p0 in point_3d(),
        p1 in point_3d(),
        p2 in point_3d(),
    ) {
        prop_assert_eq!(orientation(&p0, &p1, &p2, &p0), Orientation::DEGENERATE);
        prop_assert_eq!(orientation(&p0, &p1, &p1, &p2), Orientation::DEGENERATE);
    }

    /// Property: a tetrahedron with three collinear vertices is degenerate.
    #[test]
    fn prop_orientation_collinear_edge_is_degenerate(
        p0 in unit_point(),
        p1 in unit_point(),
        p2 in unit_point(),
    ) {
        // The origin, p0 and 2 * p0 are exactly collinear.
        let origin = Point::new([0.0, 0.0, 0.0]);
        let doubled = Point::new(p0.coords().map(|c| c * 2.0));
        prop_assert_eq!(orientation(&origin, &doubled, &p1, &p0), Orientation::DEGENERATE);
        prop_assert_eq!(orientation(&origin, &p0, &p2, &doubled), Orientation::DEGENERATE);
    }
}

// =============================================================================
// INSPHERE PROPERTY TESTS
// =============================================================================

proptest! {
    /// Property: the vertices of a tetrahedron lie on its circumsphere.
    #[test]
    fn prop_insphere_vertices_on_boundary(
        p0 in point_3d(),
        p1 in point_3d(),
        p2 in point_3d(),
        p3 in point_3d(),
    ) {
        prop_assume!(orientation(&p0, &p1, &p2, &p3) != Orientation::DEGENERATE);
        for v in [&p0, &p1, &p2, &p3] {
            prop_assert_eq!(insphere(&p0, &p1, &p2, &p3, v), InSphere::BOUNDARY);
        }
    }

    /// Property: reversing the orientation of the tetrahedron swaps inside and outside.
    #[test]
    fn prop_insphere_orientation_swap(
        p0 in point_3d(),
        p1 in point_3d(),
        p2 in point_3d(),
        p3 in point_3d(),
        q in point_3d(),
    ) {
        prop_assume!(orientation(&p0, &p1, &p2, &p3) != Orientation::DEGENERATE);
        let s = insphere(&p0, &p1, &p2, &p3, &q);
        prop_assert_eq!(insphere(&p1, &p0, &p2, &p3, &q), swapped(s));
    }

    /// Property: points inside a positively oriented tetrahedron are inside its circumsphere.
    #[test]
    fn prop_insphere_contains_centroid(
        p0 in point_3d(),
        p1 in point_3d(),
        p2 in point_3d(),
        p3 in point_3d(),
    ) {
        let o = orientation(&p0, &p1, &p2, &p3);
        prop_assume!(o != Orientation::DEGENERATE);
        let (a, b) = if o == Orientation::POSITIVE { (p0, p1) } else { (p1, p0) };
        let centroid = Point::new(std::array::from_fn(|i| {
            (p0.coords()[i] + p1.coords()[i] + p2.coords()[i] + p3.coords()[i]) / 4.0
        }));
        // Rounding can push the centroid of a sliver onto its boundary.
        prop_assume!(
            barycentric_coordinates(&[a, b, p2, p3], &centroid)
                .is_some_and(|w| w.iter().all(|x| *x > 1e-6))
        );
        prop_assert_eq!(insphere(&a, &b, &p2, &p3, &centroid), InSphere::INSIDE);
    }
}

// =============================================================================
// BARYCENTRIC PROPERTY TESTS
// =============================================================================

proptest! {
    /// Property: barycentric coordinates exist exactly for positive volumes and sum to one.
    #[test]
    fn prop_barycentric_coordinates_partition_unity(
        p0 in unit_point(),
        p1 in unit_point(),
        p2 in unit_point(),
        p3 in unit_point(),
        q in unit_point(),
    ) {
        let volume = orientation_value(&p0, &p1, &p2, &p3);
        match barycentric_coordinates(&[p0, p1, p2, p3], &q) {
            Some(weights) => {
                prop_assert!(volume > 0.0);
                // Slivers amplify rounding in every weight.
                prop_assume!(volume > 1e-6);
                let sum: f64 = weights.iter().sum();
                let scale = weights.iter().map(|w| w.abs()).fold(1.0, f64::max);
                prop_assert!((sum - 1.0).abs() <= 1e-9 * scale, "sum {} of {:?}", sum, weights);
            }
            None => prop_assert!(volume <= 0.0),
        }
    }

    /// Property: a vertex has unit weight on itself and none on the others.
    #[test]
    fn prop_barycentric_coordinates_of_vertices(
        p0 in unit_point(),
        p1 in unit_point(),
        p2 in unit_point(),
        p3 in unit_point(),
    ) {
        prop_assume!(orientation_value(&p0, &p1, &p2, &p3) > 1e-6);
        let weights = barycentric_coordinates(&[p0, p1, p2, p3], &p2).unwrap();
        prop_assert_eq!(weights[2], 1.0);
        for i in [0, 1, 3] {
            prop_assert!(weights[i].abs() < 1e-9, "weight {} is {}", i, weights[i]);
        }
    }
}
