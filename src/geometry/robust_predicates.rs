//! Adaptive exact geometric predicates.
//!
//! Both predicates first evaluate their determinant in plain floating point and
//! compare the magnitude against a static forward error bound derived from the
//! permanent of the same expression (Shewchuk's "stage A" filter). Only when the
//! result is inside the uncertainty band is the determinant recomputed exactly
//! with floating-point expansion arithmetic.
//!
//! An *expansion* is a sum of non-overlapping `f64` components stored in order of
//! increasing magnitude, with zero components eliminated. The sign of an
//! expansion is the sign of its largest component, and the empty expansion is
//! zero.
//!
//! # References
//!
//! - J. R. Shewchuk, "Adaptive Precision Floating-Point Arithmetic and Fast
//!   Robust Geometric Predicates", Discrete & Computational Geometry 18, 1997.

#![forbid(unsafe_code)]
// Fused multiply-adds would invalidate the static error bounds below.
#![allow(clippy::suboptimal_flops)]

use crate::core::collections::SmallBuffer;
use crate::geometry::point::Point;
use std::cmp::Ordering;

/// Exact multi-component floating-point value.
pub(crate) type Expansion = SmallBuffer<f64, 16>;

/// Unit roundoff for `f64` (half an ulp of 1.0).
const EPSILON: f64 = f64::EPSILON * 0.5;

/// Relative error bound for the filtered orientation determinant.
const ORIENT3D_ERROR_BOUND: f64 = (7.0 + 56.0 * EPSILON) * EPSILON;

/// Relative error bound for the filtered insphere determinant.
const INSPHERE_ERROR_BOUND: f64 = (16.0 + 224.0 * EPSILON) * EPSILON;

// =============================================================================
// ERROR-FREE TRANSFORMATIONS
// =============================================================================

/// `a + b` as an exact `(sum, roundoff)` pair.
#[inline]
pub(crate) fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    let a_virtual = x - b_virtual;
    let b_roundoff = b - b_virtual;
    let a_roundoff = a - a_virtual;
    (x, a_roundoff + b_roundoff)
}

/// Like [`two_sum`], valid only when `|a| >= |b|`.
#[inline]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let b_virtual = x - a;
    (x, b - b_virtual)
}

/// `a - b` as an exact `(difference, roundoff)` pair.
#[inline]
pub(crate) fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let x = a - b;
    let b_virtual = a - x;
    let a_virtual = x + b_virtual;
    let b_roundoff = b_virtual - b;
    let a_roundoff = a - a_virtual;
    (x, a_roundoff + b_roundoff)
}

/// `a * b` as an exact `(product, roundoff)` pair, using a fused multiply-add.
#[inline]
pub(crate) fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    (x, a.mul_add(b, -x))
}

// =============================================================================
// EXPANSION ARITHMETIC
// =============================================================================

fn from_pair((high, low): (f64, f64)) -> Expansion {
    let mut e = Expansion::new();
    if low != 0.0 {
        e.push(low);
    }
    if high != 0.0 {
        e.push(high);
    }
    e
}

/// Exact difference `a - b` of two doubles.
#[inline]
fn difference(a: f64, b: f64) -> Expansion {
    from_pair(two_diff(a, b))
}

/// Sum of two expansions (Shewchuk's `fast_expansion_sum_zeroelim`).
pub(crate) fn expansion_sum(e: &[f64], f: &[f64]) -> Expansion {
    if e.is_empty() {
        return f.iter().copied().collect();
    }
    if f.is_empty() {
        return e.iter().copied().collect();
    }

    let mut ei = 0;
    let mut fi = 0;
    let mut next = || {
        let take_e = match (e.get(ei), f.get(fi)) {
            (Some(a), Some(b)) => a.abs() <= b.abs(),
            (Some(_), None) => true,
            _ => false,
        };
        if take_e {
            ei += 1;
            e[ei - 1]
        } else {
            fi += 1;
            f[fi - 1]
        }
    };

    let total = e.len() + f.len();
    let mut h = Expansion::with_capacity(total);
    let mut q = next();
    let (sum, roundoff) = fast_two_sum(next(), q);
    q = sum;
    if roundoff != 0.0 {
        h.push(roundoff);
    }
    for _ in 2..total {
        let (sum, roundoff) = two_sum(q, next());
        q = sum;
        if roundoff != 0.0 {
            h.push(roundoff);
        }
    }
    if q != 0.0 {
        h.push(q);
    }
    h
}

/// Product of an expansion and a double (`scale_expansion_zeroelim`).
pub(crate) fn scale_expansion(e: &[f64], b: f64) -> Expansion {
    let mut h = Expansion::with_capacity(2 * e.len());
    let Some((&first, rest)) = e.split_first() else {
        return h;
    };
    if b == 0.0 {
        return h;
    }

    let (mut q, roundoff) = two_product(first, b);
    if roundoff != 0.0 {
        h.push(roundoff);
    }
    for &component in rest {
        let (product_high, product_low) = two_product(component, b);
        let (sum, roundoff) = two_sum(q, product_low);
        if roundoff != 0.0 {
            h.push(roundoff);
        }
        let (next_q, roundoff) = fast_two_sum(product_high, sum);
        if roundoff != 0.0 {
            h.push(roundoff);
        }
        q = next_q;
    }
    if q != 0.0 {
        h.push(q);
    }
    h
}

/// Product of two expansions.
pub(crate) fn expansion_product(e: &[f64], f: &[f64]) -> Expansion {
    f.iter().fold(Expansion::new(), |acc, &component| {
        expansion_sum(&acc, &scale_expansion(e, component))
    })
}

/// Difference of two expansions.
pub(crate) fn expansion_diff(e: &[f64], f: &[f64]) -> Expansion {
    let negated: Expansion = f.iter().map(|c| -c).collect();
    expansion_sum(e, &negated)
}

/// Sign of an expansion, compared against zero.
#[inline]
pub(crate) fn expansion_sign(e: &[f64]) -> Ordering {
    e.last()
        .and_then(|largest| largest.partial_cmp(&0.0))
        .unwrap_or(Ordering::Equal)
}

/// `a * b - c * d` for expansions.
fn cross_term(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> Expansion {
    expansion_diff(&expansion_product(a, b), &expansion_product(c, d))
}

/// Exact coordinate differences `p - origin`.
fn exact_offsets(p: &Point, origin: &Point) -> [Expansion; 3] {
    [
        difference(p.x(), origin.x()),
        difference(p.y(), origin.y()),
        difference(p.z(), origin.z()),
    ]
}

// =============================================================================
// ORIENTATION
// =============================================================================

/// Sign of `det[b - a, c - a, d - a]`, computed adaptively and exactly.
///
/// The sign is `Greater` when `d` lies on the side of the plane `abc` that
/// the right-hand rule assigns to `(b - a) × (c - a)`.
#[must_use]
pub fn orient3d(a: &Point, b: &Point, c: &Point, d: &Point) -> Ordering {
    let [ux, uy, uz] = b.sub(a);
    let [vx, vy, vz] = c.sub(a);
    let [wx, wy, wz] = d.sub(a);

    let m0 = vy * wz - vz * wy;
    let m1 = vx * wz - vz * wx;
    let m2 = vx * wy - vy * wx;
    let det = ux * m0 - uy * m1 + uz * m2;

    let permanent = ux.abs() * ((vy * wz).abs() + (vz * wy).abs())
        + uy.abs() * ((vx * wz).abs() + (vz * wx).abs())
        + uz.abs() * ((vx * wy).abs() + (vy * wx).abs());
    let bound = ORIENT3D_ERROR_BOUND * permanent;
    if det > bound || -det > bound {
        return det.partial_cmp(&0.0).unwrap_or(Ordering::Equal);
    }

    orient3d_exact(a, b, c, d)
}

/// Exact sign of `det[b - a, c - a, d - a]` without the floating-point filter.
#[must_use]
pub fn orient3d_exact(a: &Point, b: &Point, c: &Point, d: &Point) -> Ordering {
    let [ux, uy, uz] = exact_offsets(b, a);
    let [vx, vy, vz] = exact_offsets(c, a);
    let [wx, wy, wz] = exact_offsets(d, a);

    let m0 = cross_term(&vy, &wz, &vz, &wy);
    let m1 = cross_term(&vx, &wz, &vz, &wx);
    let m2 = cross_term(&vx, &wy, &vy, &wx);

    let det = expansion_sum(
        &cross_term(&ux, &m0, &uy, &m1),
        &expansion_product(&uz, &m2),
    );
    expansion_sign(&det)
}

// =============================================================================
// INSPHERE
// =============================================================================

/// Sign of the lifted insphere determinant of `e` against the sphere through
/// `a, b, c, d`, computed adaptively and exactly.
///
/// For a tetrahedron with `orient3d(a, b, c, d) == Greater` the result is
/// `Greater` when `e` lies strictly inside the circumsphere, `Less` when it lies
/// strictly outside and `Equal` when it is cospherical.
#[must_use]
pub fn insphere(a: &Point, b: &Point, c: &Point, d: &Point, e: &Point) -> Ordering {
    // The lifted determinant below is positive-inside for the mirrored
    // orientation, so the first two vertices are exchanged.
    lifted_insphere(b, a, c, d, e)
}

/// Exact variant of [`insphere`] without the floating-point filter.
#[must_use]
pub fn insphere_exact(a: &Point, b: &Point, c: &Point, d: &Point, e: &Point) -> Ordering {
    lifted_insphere_exact(b, a, c, d, e)
}

#[allow(clippy::similar_names, clippy::many_single_char_names)]
fn lifted_insphere(pa: &Point, pb: &Point, pc: &Point, pd: &Point, pe: &Point) -> Ordering {
    let [aex, aey, aez] = pa.sub(pe);
    let [bex, bey, bez] = pb.sub(pe);
    let [cex, cey, cez] = pc.sub(pe);
    let [dex, dey, dez] = pd.sub(pe);

    let ab = aex * bey - bex * aey;
    let bc = bex * cey - cex * bey;
    let cd = cex * dey - dex * cey;
    let da = dex * aey - aex * dey;
    let ac = aex * cey - cex * aey;
    let bd = bex * dey - dex * bey;

    let abc = aez * bc - bez * ac + cez * ab;
    let bcd = bez * cd - cez * bd + dez * bc;
    let cda = cez * da + dez * ac + aez * cd;
    let dab = dez * ab + aez * bd + bez * da;

    let alift = aex * aex + aey * aey + aez * aez;
    let blift = bex * bex + bey * bey + bez * bez;
    let clift = cex * cex + cey * cey + cez * cez;
    let dlift = dex * dex + dey * dey + dez * dez;

    let det = (dlift * abc - clift * dab) + (blift * cda - alift * bcd);

    let p_ab = (aex * bey).abs() + (bex * aey).abs();
    let p_bc = (bex * cey).abs() + (cex * bey).abs();
    let p_cd = (cex * dey).abs() + (dex * cey).abs();
    let p_da = (dex * aey).abs() + (aex * dey).abs();
    let p_ac = (aex * cey).abs() + (cex * aey).abs();
    let p_bd = (bex * dey).abs() + (dex * bey).abs();
    let (az, bz, cz, dz) = (aez.abs(), bez.abs(), cez.abs(), dez.abs());

    let permanent = (p_cd * bz + p_bd * cz + p_bc * dz) * alift
        + (p_da * cz + p_ac * dz + p_cd * az) * blift
        + (p_ab * dz + p_bd * az + p_da * bz) * clift
        + (p_bc * az + p_ac * bz + p_ab * cz) * dlift;
    let bound = INSPHERE_ERROR_BOUND * permanent;
    if det > bound || -det > bound {
        return det.partial_cmp(&0.0).unwrap_or(Ordering::Equal);
    }

    lifted_insphere_exact(pa, pb, pc, pd, pe)
}

#[allow(clippy::similar_names, clippy::many_single_char_names)]
fn lifted_insphere_exact(pa: &Point, pb: &Point, pc: &Point, pd: &Point, pe: &Point) -> Ordering {
    let [aex, aey, aez] = exact_offsets(pa, pe);
    let [bex, bey, bez] = exact_offsets(pb, pe);
    let [cex, cey, cez] = exact_offsets(pc, pe);
    let [dex, dey, dez] = exact_offsets(pd, pe);

    let ab = cross_term(&aex, &bey, &bex, &aey);
    let bc = cross_term(&bex, &cey, &cex, &bey);
    let cd = cross_term(&cex, &dey, &dex, &cey);
    let da = cross_term(&dex, &aey, &aex, &dey);
    let ac = cross_term(&aex, &cey, &cex, &aey);
    let bd = cross_term(&bex, &dey, &dex, &bey);

    let abc = expansion_sum(&cross_term(&aez, &bc, &bez, &ac), &expansion_product(&cez, &ab));
    let bcd = expansion_sum(&cross_term(&bez, &cd, &cez, &bd), &expansion_product(&dez, &bc));
    let cda = expansion_sum(
        &expansion_sum(&expansion_product(&cez, &da), &expansion_product(&dez, &ac)),
        &expansion_product(&aez, &cd),
    );
    let dab = expansion_sum(
        &expansion_sum(&expansion_product(&dez, &ab), &expansion_product(&aez, &bd)),
        &expansion_product(&bez, &da),
    );

    let lift = |x: &[f64], y: &[f64], z: &[f64]| {
        expansion_sum(
            &expansion_sum(&expansion_product(x, x), &expansion_product(y, y)),
            &expansion_product(z, z),
        )
    };
    let alift = lift(&aex, &aey, &aez);
    let blift = lift(&bex, &bey, &bez);
    let clift = lift(&cex, &cey, &cez);
    let dlift = lift(&dex, &dey, &dez);

    let det = expansion_sum(
        &cross_term(&dlift, &abc, &clift, &dab),
        &cross_term(&blift, &cda, &alift, &bcd),
    );
    expansion_sign(&det)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tetrahedron() -> [Point; 4] {
        [
            Point::new([0.0, 0.0, 0.0]),
            Point::new([1.0, 0.0, 0.0]),
            Point::new([0.0, 1.0, 0.0]),
            Point::new([0.0, 0.0, 1.0]),
        ]
    }

    fn value(e: &[f64]) -> f64 {
        e.iter().sum()
    }

    #[test]
    fn two_sum_recovers_lost_bits() {
        let (s, r) = two_sum(1.0, 1e-20);
        assert_eq!(s, 1.0);
        assert_eq!(r, 1e-20);
        let (d, r) = two_diff(1.0, 1e-20);
        assert_eq!(d, 1.0);
        assert_eq!(r, -1e-20);
    }

    #[test]
    fn two_product_is_exact() {
        let a = 1.0 + f64::EPSILON;
        let (p, r) = two_product(a, a);
        // (1 + e)^2 = 1 + 2e + e^2, the e^2 term is lost in `p`.
        assert_eq!(p, 1.0 + 2.0 * f64::EPSILON);
        assert_eq!(r, f64::EPSILON * f64::EPSILON);
    }

    #[test]
    fn expansion_sum_and_sign() {
        let big = from_pair(two_sum(1.0, 1e-30));
        let small = from_pair(two_sum(-1.0, 0.0));
        let total = expansion_sum(&big, &small);
        assert_eq!(expansion_sign(&total), Ordering::Greater);
        assert_eq!(value(&total), 1e-30);

        let negated = expansion_diff(&small, &big);
        assert_eq!(expansion_sign(&negated), Ordering::Less);
        assert_eq!(expansion_sign(&expansion_diff(&big, &big)), Ordering::Equal);
    }

    #[test]
    fn expansion_product_matches_small_integers() {
        let a = from_pair(two_sum(3.0, 0.0));
        let b = from_pair(two_sum(-7.0, 0.0));
        let p = expansion_product(&a, &b);
        assert_eq!(value(&p), -21.0);
        assert_eq!(scale_expansion(&a, 0.0).len(), 0);
    }

    #[test]
    fn orient3d_signs() {
        let [a, b, c, d] = unit_tetrahedron();
        assert_eq!(orient3d(&a, &b, &c, &d), Ordering::Greater);
        assert_eq!(orient3d(&b, &a, &c, &d), Ordering::Less);
        let coplanar = Point::new([0.3, 0.3, 0.0]);
        assert_eq!(orient3d(&a, &b, &c, &coplanar), Ordering::Equal);
    }

    #[test]
    fn orient3d_exact_resolves_near_coplanar_points() {
        let a = Point::new([0.0, 0.0, 0.0]);
        let b = Point::new([1.0, 0.0, 0.0]);
        let c = Point::new([0.0, 1.0, 0.0]);
        let above = Point::new([0.1, 0.1, 1e-300]);
        let below = Point::new([0.1, 0.1, -1e-300]);
        assert_eq!(orient3d(&a, &b, &c, &above), Ordering::Greater);
        assert_eq!(orient3d(&a, &b, &c, &below), Ordering::Less);
        assert_eq!(orient3d_exact(&a, &b, &c, &above), Ordering::Greater);
    }

    #[test]
    fn orient3d_exact_agrees_on_rounded_collinear_configuration() {
        // 0.1 + 0.2 is not 0.3 in binary; the filter must defer to the exact path.
        let a = Point::new([0.1, 0.1, 0.1]);
        let b = Point::new([0.2, 0.2, 0.2]);
        let c = Point::new([0.3, 0.3, 0.3]);
        let d = Point::new([0.7, 0.1, 0.9]);
        assert_eq!(orient3d(&a, &b, &c, &d), orient3d_exact(&a, &b, &c, &d));
    }

    #[test]
    fn insphere_signs() {
        let [a, b, c, d] = unit_tetrahedron();
        let inside = Point::new([0.25, 0.25, 0.25]);
        let outside = Point::new([2.0, 2.0, 2.0]);
        let cospherical = Point::new([1.0, 1.0, 1.0]);
        assert_eq!(insphere(&a, &b, &c, &d, &inside), Ordering::Greater);
        assert_eq!(insphere(&a, &b, &c, &d, &outside), Ordering::Less);
        assert_eq!(insphere(&a, &b, &c, &d, &cospherical), Ordering::Equal);
        assert_eq!(insphere_exact(&a, &b, &c, &d, &cospherical), Ordering::Equal);
        assert_eq!(insphere_exact(&a, &b, &c, &d, &inside), Ordering::Greater);
    }
}
