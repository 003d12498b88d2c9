//! Contract-level tests: engine algorithms see every coefficient ring
//! through the same trait, so the properties here are checked
//! polymorphically over both machine-precision rings.

use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use rug::rand::RandState;
use rug::{Float, Integer};

use coeff_rings::{CoefficientRing, Complex, ComplexField, RealField, RingError, RingKind};

fn assert_close<R>(ring: &R, got: &R::Element, want: &R::Element)
where
    R: CoefficientRing<Magnitude = f64>,
{
    let err = ring.abs(&ring.sub(got, want));
    let scale = 1.0 + ring.abs(want);
    assert!(err <= 1e-12 * scale, "got {:?}, want {:?}", got, want);
}

fn check_field_contract<R>(ring: &R, samples: &[R::Element])
where
    R: CoefficientRing<Magnitude = f64>,
{
    assert_eq!(ring.characteristic(), 0);
    assert_eq!(ring.precision(), 53);

    let one = ring.one();
    assert!(ring.is_unit(&one));
    assert!(ring.is_zero(&ring.zero()));
    assert!(!ring.is_unit(&ring.zero()));
    assert!(ring.is_equal(&ring.variable(0), &one));

    for a in samples {
        assert!(ring.is_equal(a, a));
        assert_eq!(ring.cmp_elements(a, a), Ordering::Equal);
        assert_eq!(ring.hash_value(a), ring.hash_value(a));

        let handle = ring.to_elem(a);
        assert_eq!(handle.ring_kind(), ring.kind());
        let back = ring.from_elem(&handle).unwrap();
        assert!(ring.is_equal(a, &back));

        assert!(ring.is_equal(&ring.pow(a, 0), &one));
        assert!(ring.is_equal(&ring.pow_big(a, &(Integer::from(1) << 96)), &one));

        if ring.is_zero(a) {
            continue;
        }

        assert!(ring.is_unit(a));
        assert_close(ring, &ring.mul(&ring.inv(a), a), &one);
        assert_close(ring, &ring.inv(&ring.inv(a)), a);
        assert_close(
            ring,
            &ring.mul(&ring.pow(a, 2), &ring.pow(a, 3)),
            &ring.pow(a, 5),
        );

        for b in samples {
            if ring.is_zero(b) {
                continue;
            }
            let q = ring.div(a, b);
            assert_close(ring, &ring.mul(&q, b), a);

            let (x, y) = ring.syzygy(a, b);
            assert!(ring.is_equal(&x, &one));
            let combo = ring.add(&ring.mul(&x, a), &ring.mul(&y, b));
            let err = ring.abs(&combo);
            assert!(err <= 1e-12 * (1.0 + ring.abs(a)));
        }
    }
}

fn real_samples() -> Vec<f64> {
    vec![0.0, 1.0, -2.5, 0.125, 3.75]
}

fn complex_samples() -> Vec<Complex> {
    vec![
        Complex::new(0.0, 0.0),
        Complex::new(1.0, 0.0),
        Complex::new(-2.5, 0.5),
        Complex::new(0.125, -4.0),
        Complex::new(3.0, 4.0),
    ]
}

#[test]
fn real_field_honors_the_contract() {
    check_field_contract(&RealField, &real_samples());
}

#[test]
fn complex_field_honors_the_contract() {
    check_field_contract(&ComplexField::new(), &complex_samples());
}

#[test]
fn magnitudes_land_in_the_sibling_real_ring() {
    let cc = ComplexField::new();
    let rr = cc.real_ring();
    let m = cc.abs(&Complex::new(3.0, 4.0));
    assert!(rr.is_equal(&m, &5.0));
    assert!(rr.is_unit(&m));
}

#[test]
fn handles_route_back_to_their_producing_ring() {
    let rr = RealField;
    let cc = ComplexField::new();

    let from_rr = rr.to_elem(&1.5);
    let from_cc = cc.to_elem(&Complex::new(1.5, 0.0));

    assert_eq!(rr.from_elem(&from_rr).unwrap(), 1.5);
    assert_eq!(
        cc.from_elem(&from_rr),
        Err(RingError::ElementKind {
            expected: RingKind::Complex53,
            actual: RingKind::Real53,
        })
    );
    assert_eq!(
        rr.from_elem(&from_cc),
        Err(RingError::ElementKind {
            expected: RingKind::Real53,
            actual: RingKind::Complex53,
        })
    );
}

#[test]
fn strict_total_order_sorts_and_deduplicates() {
    let cc = ComplexField::new();
    let mut elems = vec![
        Complex::new(2.0, -1.0),
        Complex::new(1.0, 5.0),
        Complex::new(1.0, -3.0),
        Complex::new(2.0, -1.0),
        Complex::new(-7.0, 0.0),
    ];
    elems.sort_by(|a, b| cc.cmp_elements(a, b));
    elems.dedup_by(|a, b| cc.is_equal(a, b));
    assert_eq!(
        elems,
        vec![
            Complex::new(-7.0, 0.0),
            Complex::new(1.0, -3.0),
            Complex::new(1.0, 5.0),
            Complex::new(2.0, -1.0),
        ]
    );
}

#[test]
fn seeded_generator_drives_both_rings_deterministically() {
    let rr = RealField;
    let cc = ComplexField::new();
    let seed = Integer::from(424242);

    let mut rng = RandState::new();
    rng.seed(&seed);
    let x = rr.random(&mut rng);
    let z = cc.random(&mut rng);

    let mut replay = RandState::new();
    replay.seed(&seed);
    assert_eq!(rr.random(&mut replay), x);
    assert_eq!(cc.random(&mut replay), z);

    assert!((0.0..1.0).contains(&x));
    assert!((0.0..1.0).contains(&z.re));
    assert!((0.0..1.0).contains(&z.im));
}

#[test]
fn zeroize_tiny_respects_the_threshold_across_rings() {
    let rr = RealField;
    let cc = ComplexField::new();
    let eps = Float::with_val(53, 1e-6);

    let mut x = -1e-9;
    rr.zeroize_tiny(&eps, &mut x);
    assert_eq!(x, 0.0);

    let mut z = Complex::new(1e-9, 2.0);
    cc.zeroize_tiny(&eps, &mut z);
    assert_eq!(z, Complex::new(0.0, 2.0));
}
