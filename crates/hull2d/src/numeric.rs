//! Compensated arithmetic and tolerance comparisons.
//!
//! Purpose
//! - `linear_combination` evaluates `a1*b1 + a2*b2` with error-free
//!   transformations so signed cross products stay trustworthy near zero.
//! - `compare_with_tolerance` turns a signed magnitude into a three-way sign
//!   with a collinearity band of width `eps`.
//!
//! References
//! - Ogita, Rump, Oishi (2005), "Accurate sum and dot product" (TwoSum, TwoProduct).
//! - Code cross-refs: `Vector2D::{dot_product, cross_product}`, `ConvexHull2D` validation.

use std::cmp::Ordering;

/// Exact product split: `a*b = p + e` with `p = fl(a*b)`.
#[inline]
fn two_product(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

/// Exact sum split: `a+b = s + e` with `s = fl(a+b)`.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Compensated `a1*b1 + a2*b2`.
///
/// Falls back to the naive expression when the compensated terms are not
/// finite (infinite operands turn the error terms into NaN).
pub fn linear_combination(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    let (p1, e1) = two_product(a1, b1);
    let (p2, e2) = two_product(a2, b2);
    let (s, es) = two_sum(p1, p2);
    let result = s + (e1 + e2 + es);
    if result.is_nan() {
        a1 * b1 + a2 * b2
    } else {
        result
    }
}

/// Three-way comparison of `x` against `y`, treating `|x - y| <= eps` as equal.
///
/// NaN never compares equal and reports `Greater`.
#[inline]
pub fn compare_with_tolerance(x: f64, y: f64, eps: f64) -> Ordering {
    if (y - x).abs() <= eps {
        Ordering::Equal
    } else if x < y {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
