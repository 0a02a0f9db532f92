//! Three-dimensional points in tristimulus space.
//!
//! Points are plain `f64` triplets. They are immutable once created and carry
//! no identity of their own; triangulations refer to them by index.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// POINT STRUCT DEFINITION
// =============================================================================

/// A point in three-dimensional space.
///
/// # Examples
///
/// ```rust
/// use macadam::geometry::point::Point;
///
/// let p = Point::new([0.25, 0.5, 0.75]);
/// assert_eq!(p.coords(), &[0.25, 0.5, 0.75]);
/// assert!(p.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coords: [f64; 3],
}

impl Point {
    /// Creates a point from its three coordinates.
    #[inline]
    #[must_use]
    pub const fn new(coords: [f64; 3]) -> Self {
        Self { coords }
    }

    /// The coordinates of the point.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &[f64; 3] {
        &self.coords
    }

    /// First coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.coords[0]
    }

    /// Second coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.coords[1]
    }

    /// Third coordinate.
    #[inline]
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Returns `true` when no coordinate is NaN or infinite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Component-wise difference `self - other`.
    #[inline]
    #[must_use]
    pub fn sub(&self, other: &Self) -> [f64; 3] {
        [
            self.coords[0] - other.coords[0],
            self.coords[1] - other.coords[1],
            self.coords[2] - other.coords[2],
        ]
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn squared_distance(&self, other: &Self) -> f64 {
        let [dx, dy, dz] = self.sub(other);
        dz.mul_add(dz, dx.mul_add(dx, dy * dy))
    }

    /// Bit-level key with `-0.0` folded onto `0.0`, used for exact duplicate detection.
    #[inline]
    #[must_use]
    pub(crate) fn exact_key(&self) -> [u64; 3] {
        self.coords.map(|c| if c == 0.0 { 0 } else { c.to_bits() })
    }
}

impl From<[f64; 3]> for Point {
    #[inline]
    fn from(coords: [f64; 3]) -> Self {
        Self::new(coords)
    }
}

impl From<Point> for [f64; 3] {
    #[inline]
    fn from(point: Point) -> Self {
        point.coords
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.coords[0], self.coords[1], self.coords[2]
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_accessors_and_conversions() {
        let p = Point::from([1.0, -2.0, 3.5]);
        assert_relative_eq!(p.x(), 1.0);
        assert_relative_eq!(p.y(), -2.0);
        assert_relative_eq!(p.z(), 3.5);
        let back: [f64; 3] = p.into();
        assert_eq!(back, [1.0, -2.0, 3.5]);
        assert_eq!(p.to_string(), "(1, -2, 3.5)");
    }

    #[test]
    fn point_finiteness() {
        assert!(Point::new([0.0, 1.0, 2.0]).is_finite());
        assert!(!Point::new([f64::NAN, 1.0, 2.0]).is_finite());
        assert!(!Point::new([0.0, f64::INFINITY, 2.0]).is_finite());
    }

    #[test]
    fn point_squared_distance() {
        let a = Point::new([0.0, 0.0, 0.0]);
        let b = Point::new([1.0, 2.0, 2.0]);
        assert_relative_eq!(a.squared_distance(&b), 9.0);
        assert_eq!(b.sub(&a), [1.0, 2.0, 2.0]);
    }

    #[test]
    fn exact_key_folds_signed_zero() {
        let a = Point::new([0.0, 1.0, 2.0]);
        let b = Point::new([-0.0, 1.0, 2.0]);
        assert_eq!(a.exact_key(), b.exact_key());
        assert_ne!(a.exact_key(), Point::new([0.0, 1.0, 2.000_000_1]).exact_key());
    }

    #[test]
    fn point_serde_roundtrip() {
        let p = Point::new([0.1, 0.2, 0.3]);
        let json = serde_json::to_string(&p).unwrap();
        let q: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, q);
    }
}
