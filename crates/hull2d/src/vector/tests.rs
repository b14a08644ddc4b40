use super::*;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::f64::consts::PI;

fn hash_of(v: &Vector2D) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

fn small() -> impl Strategy<Value = f64> {
    (-1_000_000i32..1_000_000).prop_map(f64::from)
}

fn nonzero_vec() -> impl Strategy<Value = Vector2D> {
    (-1e3..1e3f64, -1e3..1e3f64)
        .prop_filter("nonzero", |(x, y)| x.abs() + y.abs() > 1e-6)
        .prop_map(|(x, y)| Vector2D::new(x, y))
}

#[test]
fn constructors() {
    assert_eq!(Vector2D::from_slice(&[1.0, 2.0]).unwrap(), Vector2D::new(1.0, 2.0));
    assert_eq!(
        Vector2D::from_slice(&[1.0, 2.0, 3.0]),
        Err(GeomError::DimensionMismatch { got: 3 })
    );
    let empty: &[f64] = &[];
    assert_eq!(
        Vector2D::try_from(empty),
        Err(GeomError::DimensionMismatch { got: 0 })
    );
    let u = Vector2D::new(1.0, 2.0);
    let v = Vector2D::new(-3.0, 0.5);
    assert_eq!(Vector2D::scaled(2.0, u), Vector2D::new(2.0, 4.0));
    assert_eq!(Vector2D::linear2(1.0, u, 2.0, v), Vector2D::new(-5.0, 3.0));
    assert_eq!(
        Vector2D::linear3(1.0, u, 2.0, v, -1.0, u),
        Vector2D::new(-6.0, 1.0)
    );
    assert_eq!(
        Vector2D::linear4(1.0, u, 1.0, v, 1.0, u, 1.0, v),
        Vector2D::new(-4.0, 5.0)
    );
    assert_eq!(u.to_array(), [1.0, 2.0]);
    assert_eq!(Vector2D::from((1.0, 2.0)), u);
    assert_eq!(Vector2D::from([1.0, 2.0]), u);
}

#[test]
fn nalgebra_round_trip() {
    let v = Vector2D::new(0.25, -4.0);
    let n: nalgebra::Vector2<f64> = v.into();
    assert_eq!(n, nalgebra::Vector2::new(0.25, -4.0));
    assert_eq!(Vector2D::from(n), v);
}

#[test]
fn norms() {
    let v = Vector2D::new(3.0, -4.0);
    assert_eq!(v.norm(), 5.0);
    assert_eq!(v.norm1(), 7.0);
    assert_eq!(v.norm_inf(), 4.0);
    assert_eq!(v.norm_sq(), 25.0);
    assert_eq!(Vector2D::ZERO.norm(), 0.0);
}

#[test]
fn arithmetic() {
    let a = Vector2D::new(1.0, 2.0);
    let b = Vector2D::new(3.0, -1.0);
    assert_eq!(a.add(b), Vector2D::new(4.0, 1.0));
    assert_eq!(a.add_scaled(2.0, b), Vector2D::new(7.0, 0.0));
    assert_eq!(a.subtract(b), Vector2D::new(-2.0, 3.0));
    assert_eq!(a.subtract_scaled(2.0, b), Vector2D::new(-5.0, 4.0));
    assert_eq!(a.scalar_multiply(-2.0), Vector2D::new(-2.0, -4.0));
    assert_eq!(a.negate(), Vector2D::new(-1.0, -2.0));
    assert_eq!(a + b, a.add(b));
    assert_eq!(a - b, a.subtract(b));
    assert_eq!(-a, a.negate());
    assert_eq!(a * 3.0, 3.0 * a);
}

#[test]
fn normalize_unit_and_zero() {
    let v = Vector2D::new(0.0, -2.0).normalize().unwrap();
    assert_eq!(v, Vector2D::new(0.0, -1.0));
    assert_eq!(Vector2D::ZERO.normalize(), Err(GeomError::ZeroNorm));
}

#[test]
fn dot_and_cross() {
    let a = Vector2D::new(2.0, 3.0);
    let b = Vector2D::new(-1.0, 4.0);
    assert_eq!(a.dot_product(b), 10.0);
    let p1 = Vector2D::new(0.0, 0.0);
    let p2 = Vector2D::new(1.0, 0.0);
    assert!(Vector2D::new(0.0, 1.0).cross_product(p1, p2) > 0.0);
    assert!(Vector2D::new(0.0, -1.0).cross_product(p1, p2) < 0.0);
    assert_eq!(Vector2D::new(5.0, 0.0).cross_product(p1, p2), 0.0);
    assert_eq!(Vector2D::new(0.5, 2.0).cross_product(p1, p2), 2.0);
}

#[test]
fn angle_cases() {
    let x = Vector2D::new(1.0, 0.0);
    let y = Vector2D::new(0.0, 2.0);
    assert!((Vector2D::angle(x, y).unwrap() - PI / 2.0).abs() < 1e-15);
    assert_eq!(Vector2D::angle(x, x).unwrap(), 0.0);
    assert!((Vector2D::angle(x, x.negate()).unwrap() - PI).abs() < 1e-15);
    // Nearly aligned: the sine branch keeps the tiny angle accurate.
    let tiny: f64 = 1e-10;
    let z = Vector2D::new(tiny.cos(), tiny.sin());
    assert!((Vector2D::angle(x, z).unwrap() - tiny).abs() < 1e-20);
    assert_eq!(Vector2D::angle(Vector2D::ZERO, x), Err(GeomError::ZeroNorm));
    assert_eq!(Vector2D::angle(x, Vector2D::ZERO), Err(GeomError::ZeroNorm));
}

#[test]
fn nan_and_infinite_classification() {
    assert!(Vector2D::NAN.is_nan());
    assert!(Vector2D::new(f64::NAN, 1.0).is_nan());
    assert!(!Vector2D::NAN.is_infinite());
    assert!(!Vector2D::new(f64::NAN, f64::INFINITY).is_infinite());
    assert!(Vector2D::new(1.0, f64::NEG_INFINITY).is_infinite());
    assert!(Vector2D::POSITIVE_INFINITY.is_infinite());
    assert!(Vector2D::NEGATIVE_INFINITY.is_infinite());
    assert!(!Vector2D::ZERO.is_nan() && !Vector2D::ZERO.is_infinite());
}

#[test]
fn nan_collapses_for_equality_and_hash() {
    let a = Vector2D::new(f64::NAN, 3.0);
    let b = Vector2D::new(-7.0, f64::NAN);
    assert_eq!(a, Vector2D::NAN);
    assert_eq!(b, Vector2D::NAN);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&Vector2D::NAN));
    assert_eq!(hash_of(&b), hash_of(&Vector2D::NAN));
    assert_ne!(Vector2D::NAN, Vector2D::ZERO);
    let set: HashSet<Vector2D> = [a, b, Vector2D::NAN, Vector2D::ZERO].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn equality_is_bitwise_for_finite_values() {
    assert_eq!(Vector2D::new(1.0, 2.0), Vector2D::new(1.0, 2.0));
    assert_ne!(Vector2D::new(1.0, 2.0), Vector2D::new(1.0, 2.000_000_1));
    assert_ne!(Vector2D::new(0.0, 0.0), Vector2D::new(-0.0, 0.0));
    assert_eq!(
        hash_of(&Vector2D::new(1.5, -2.0)),
        hash_of(&Vector2D::new(1.5, -2.0))
    );
}

#[test]
fn display_format() {
    assert_eq!(Vector2D::new(1.5, -2.0).to_string(), "{1.5; -2}");
}

#[test]
fn distances() {
    let p = Vector2D::new(1.0, 1.0);
    let q = Vector2D::new(4.0, -3.0);
    assert_eq!(p.distance(q), 5.0);
    assert_eq!(p.distance1(q), 7.0);
    assert_eq!(p.distance_inf(q), 4.0);
    assert_eq!(p.distance_sq(q), 25.0);
    assert_eq!(Vector2D::distance1_between(p, q), 7.0);
    assert_eq!(Vector2D::distance_inf_between(p, q), 4.0);
}

#[test]
fn mean_of_points() {
    let pts = [
        Vector2D::new(0.0, 0.0),
        Vector2D::new(2.0, 0.0),
        Vector2D::new(2.0, 2.0),
        Vector2D::new(0.0, 2.0),
    ];
    assert_eq!(mean(&pts), Some(Vector2D::new(1.0, 1.0)));
    assert_eq!(mean::<Vector2D>(&[]), None);
}

proptest! {
    #[test]
    fn add_then_subtract_is_identity(ax in small(), ay in small(), bx in small(), by in small()) {
        let a = Vector2D::new(ax, ay);
        let b = Vector2D::new(bx, by);
        prop_assert_eq!(a.add(b).subtract(b), a);
    }

    #[test]
    fn distance_is_symmetric(p in nonzero_vec(), q in nonzero_vec()) {
        prop_assert_eq!(p.distance(q), q.distance(p));
        prop_assert_eq!(Vector2D::distance_between(p, q), p.distance(q));
        prop_assert_eq!(Vector2D::distance_sq_between(p, q), p.distance_sq(q));
        let d = p.distance(q);
        prop_assert!((p.distance_sq(q) - d * d).abs() <= 1e-9 * (1.0 + d * d));
    }

    #[test]
    fn angle_with_self_and_opposite(v in nonzero_vec()) {
        prop_assert_eq!(Vector2D::angle(v, v).unwrap(), 0.0);
        prop_assert!((Vector2D::angle(v, v.negate()).unwrap() - PI).abs() < 1e-12);
    }

    #[test]
    fn angle_is_in_range_and_symmetric(a in nonzero_vec(), b in nonzero_vec()) {
        let t = Vector2D::angle(a, b).unwrap();
        prop_assert!((0.0..=PI).contains(&t));
        prop_assert!((t - Vector2D::angle(b, a).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn any_nan_coordinate_equals_canonical_nan(x in any::<f64>()) {
        let v = Vector2D::new(x, f64::NAN);
        let w = Vector2D::new(f64::NAN, x);
        prop_assert_eq!(v, Vector2D::NAN);
        prop_assert_eq!(w, Vector2D::NAN);
        prop_assert_eq!(hash_of(&v), hash_of(&Vector2D::NAN));
        prop_assert_eq!(hash_of(&w), hash_of(&Vector2D::NAN));
    }

    #[test]
    fn normalized_has_unit_norm(v in nonzero_vec()) {
        let u = v.normalize().unwrap();
        prop_assert!((u.norm() - 1.0).abs() < 1e-12);
    }
}
