//! Geometric predicates on tetrahedra.
//!
//! [`orientation`] and [`insphere`] are exact: they are evaluated through the
//! adaptive filters in [`crate::geometry::robust_predicates`], so the
//! triangulation's combinatorial decisions never depend on rounding.
//! [`orientation_value`] and [`barycentric_coordinates`] are plain
//! floating-point measurements used for tolerance-based containment queries.

#![forbid(unsafe_code)]

use crate::geometry::point::Point;
use crate::geometry::robust_predicates;
use std::cmp::Ordering;

/// Represents the position of a point relative to a circumsphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InSphere {
    /// The point is outside the circumsphere
    OUTSIDE,
    /// The point is exactly on the circumsphere
    BOUNDARY,
    /// The point is inside the circumsphere
    INSIDE,
}

impl std::fmt::Display for InSphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Represents the orientation of a tetrahedron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The tetrahedron has negative orientation (determinant < 0)
    NEGATIVE,
    /// The four points are coplanar (determinant == 0)
    DEGENERATE,
    /// The tetrahedron has positive orientation (determinant > 0)
    POSITIVE,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

impl From<Ordering> for Orientation {
    fn from(sign: Ordering) -> Self {
        match sign {
            Ordering::Less => Self::NEGATIVE,
            Ordering::Equal => Self::DEGENERATE,
            Ordering::Greater => Self::POSITIVE,
        }
    }
}

impl From<Ordering> for InSphere {
    fn from(sign: Ordering) -> Self {
        match sign {
            Ordering::Less => Self::OUTSIDE,
            Ordering::Equal => Self::BOUNDARY,
            Ordering::Greater => Self::INSIDE,
        }
    }
}

/// Exact orientation of the tetrahedron `(a, b, c, d)`.
///
/// The orientation is the sign of
///
/// ```text
/// | bx-ax  by-ay  bz-az |
/// | cx-ax  cy-ay  cz-az |
/// | dx-ax  dy-ay  dz-az |
/// ```
///
/// # Example
///
/// ```
/// use macadam::geometry::point::Point;
/// use macadam::geometry::predicates::{orientation, Orientation};
///
/// let a = Point::new([0.0, 0.0, 0.0]);
/// let b = Point::new([1.0, 0.0, 0.0]);
/// let c = Point::new([0.0, 1.0, 0.0]);
/// let d = Point::new([0.0, 0.0, 1.0]);
/// assert_eq!(orientation(&a, &b, &c, &d), Orientation::POSITIVE);
/// assert_eq!(orientation(&b, &a, &c, &d), Orientation::NEGATIVE);
/// ```
#[inline]
#[must_use]
pub fn orientation(a: &Point, b: &Point, c: &Point, d: &Point) -> Orientation {
    robust_predicates::orient3d(a, b, c, d).into()
}

/// Exact position of `e` relative to the circumsphere of `(a, b, c, d)`.
///
/// The tetrahedron must be positively oriented; for a negatively oriented
/// tetrahedron `INSIDE` and `OUTSIDE` are swapped.
///
/// # Example
///
/// ```
/// use macadam::geometry::point::Point;
/// use macadam::geometry::predicates::{insphere, InSphere};
///
/// let a = Point::new([0.0, 0.0, 0.0]);
/// let b = Point::new([1.0, 0.0, 0.0]);
/// let c = Point::new([0.0, 1.0, 0.0]);
/// let d = Point::new([0.0, 0.0, 1.0]);
/// let inside = Point::new([0.25, 0.25, 0.25]);
/// assert_eq!(insphere(&a, &b, &c, &d, &inside), InSphere::INSIDE);
/// ```
#[inline]
#[must_use]
pub fn insphere(a: &Point, b: &Point, c: &Point, d: &Point, e: &Point) -> InSphere {
    robust_predicates::insphere(a, b, c, d, e).into()
}

/// Floating-point value of the orientation determinant (six times the signed volume).
#[inline]
#[must_use]
pub fn orientation_value(a: &Point, b: &Point, c: &Point, d: &Point) -> f64 {
    let [bx, by, bz] = b.sub(a);
    let [cx, cy, cz] = c.sub(a);
    let [dx, dy, dz] = d.sub(a);
    bx * (cy * dz - cz * dy) - by * (cx * dz - cz * dx) + bz * (cx * dy - cy * dx)
}

/// Barycentric coordinates of `p` with respect to a tetrahedron.
///
/// Coordinate `i` is the weight of vertex `i`; the coordinates sum to one.
/// Returns `None` when the tetrahedron's floating-point volume is not
/// positive, since no stable coordinates exist for such a cell.
///
/// # Example
///
/// ```
/// use macadam::geometry::point::Point;
/// use macadam::geometry::predicates::barycentric_coordinates;
///
/// let tet = [
///     Point::new([0.0, 0.0, 0.0]),
///     Point::new([1.0, 0.0, 0.0]),
///     Point::new([0.0, 1.0, 0.0]),
///     Point::new([0.0, 0.0, 1.0]),
/// ];
/// let weights = barycentric_coordinates(&tet, &Point::new([0.25, 0.25, 0.25])).unwrap();
/// assert!(weights.iter().all(|w| (w - 0.25).abs() < 1e-12));
/// ```
#[must_use]
pub fn barycentric_coordinates(tetrahedron: &[Point; 4], p: &Point) -> Option<[f64; 4]> {
    let [a, b, c, d] = tetrahedron;
    let total = orientation_value(a, b, c, d);
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    Some([
        orientation_value(p, b, c, d) / total,
        orientation_value(a, p, c, d) / total,
        orientation_value(a, b, p, d) / total,
        orientation_value(a, b, c, p) / total,
    ])
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_tetrahedron() -> [Point; 4] {
        [
            Point::new([0.0, 0.0, 0.0]),
            Point::new([1.0, 0.0, 0.0]),
            Point::new([0.0, 1.0, 0.0]),
            Point::new([0.0, 0.0, 1.0]),
        ]
    }

    #[test]
    fn orientation_display() {
        assert_eq!(Orientation::POSITIVE.to_string(), "POSITIVE");
        assert_eq!(InSphere::BOUNDARY.to_string(), "BOUNDARY");
    }

    #[test]
    fn orientation_degenerate_for_coplanar_points() {
        let [a, b, c, _] = unit_tetrahedron();
        let d = Point::new([0.5, 0.5, 0.0]);
        assert_eq!(orientation(&a, &b, &c, &d), Orientation::DEGENERATE);
    }

    #[test]
    fn orientation_value_is_six_times_volume() {
        let [a, b, c, d] = unit_tetrahedron();
        assert_relative_eq!(orientation_value(&a, &b, &c, &d), 1.0);
        assert_relative_eq!(orientation_value(&a, &c, &b, &d), -1.0);
    }

    #[test]
    fn insphere_classifies_points() {
        let [a, b, c, d] = unit_tetrahedron();
        assert_eq!(
            insphere(&a, &b, &c, &d, &Point::new([0.9, 0.9, 0.9])),
            InSphere::INSIDE
        );
        assert_eq!(
            insphere(&a, &b, &c, &d, &Point::new([1.0, 1.0, 1.0])),
            InSphere::BOUNDARY
        );
        assert_eq!(
            insphere(&a, &b, &c, &d, &Point::new([-1.0, 0.0, 0.0])),
            InSphere::OUTSIDE
        );
    }

    #[test]
    fn barycentric_coordinates_of_vertices_and_outside_points() {
        let tet = unit_tetrahedron();
        let at_b = barycentric_coordinates(&tet, &tet[1]).unwrap();
        assert_relative_eq!(at_b[0], 0.0);
        assert_relative_eq!(at_b[1], 1.0);
        assert_relative_eq!(at_b[2], 0.0);
        assert_relative_eq!(at_b[3], 0.0);

        let outside = barycentric_coordinates(&tet, &Point::new([1.0, 1.0, 1.0])).unwrap();
        assert_relative_eq!(outside[0], -2.0);
        assert_relative_eq!(outside.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn barycentric_coordinates_reject_flat_and_inverted_cells() {
        let [a, b, c, _] = unit_tetrahedron();
        let flat = [a, b, c, Point::new([0.2, 0.2, 0.0])];
        assert!(barycentric_coordinates(&flat, &a).is_none());
        let inverted = [b, a, c, Point::new([0.0, 0.0, 1.0])];
        assert!(barycentric_coordinates(&inverted, &a).is_none());
    }
}
