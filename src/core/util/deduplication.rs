//! Point deduplication utilities.

#![forbid(unsafe_code)]

use crate::core::collections::FastHashSet;
use crate::geometry::point::Point;

/// Filters points to remove exact coordinate duplicates.
///
/// Coordinates are compared bit for bit, except that `+0.0` and `-0.0` are
/// treated as equal. The first occurrence of each unique point is kept and
/// the input order is otherwise preserved.
///
/// # Complexity
///
/// O(n) expected, using a hash set of coordinate bit patterns.
///
/// # Examples
///
/// ```
/// use macadam::core::util::deduplication::dedup_points_exact;
/// use macadam::geometry::point::Point;
///
/// let points = [
///     Point::new([0.0, 0.0, 0.0]),
///     Point::new([1.0, 0.0, 0.0]),
///     Point::new([-0.0, 0.0, 0.0]), // Duplicate of the first point
/// ];
/// let unique = dedup_points_exact(&points);
/// assert_eq!(unique.len(), 2);
/// ```
#[must_use]
pub fn dedup_points_exact(points: &[Point]) -> Vec<Point> {
    let mut seen: FastHashSet<[u64; 3]> = FastHashSet::default();
    seen.reserve(points.len());
    points
        .iter()
        .filter(|p| seen.insert(p.exact_key()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let points = [
            Point::new([0.5, 0.5, 0.5]),
            Point::new([0.0, 0.0, 0.0]),
            Point::new([0.5, 0.5, 0.5]),
            Point::new([1.0, 1.0, 1.0]),
            Point::new([0.0, 0.0, 0.0]),
        ];
        let unique = dedup_points_exact(&points);
        assert_eq!(
            unique,
            vec![
                Point::new([0.5, 0.5, 0.5]),
                Point::new([0.0, 0.0, 0.0]),
                Point::new([1.0, 1.0, 1.0]),
            ]
        );
    }

    #[test]
    fn dedup_does_not_merge_nearby_points() {
        let points = [
            Point::new([0.1, 0.2, 0.3]),
            Point::new([0.1, 0.2, 0.3 + f64::EPSILON]),
        ];
        assert_eq!(dedup_points_exact(&points).len(), 2);
        assert!(dedup_points_exact(&[]).is_empty());
    }
}
