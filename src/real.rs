//! Approximate reals at machine precision: one IEEE-754 double per
//! element. Sibling of [`crate::complex::ComplexField`], which composes it
//! for magnitude results and precision queries.

use std::any::Any;
use std::cmp::Ordering;

use rug::rand::RandState;
use rug::{Complex as BigComplex, Float, Integer, Rational};

use crate::element::{CoefficientValue, RingElem};
use crate::error::{Result, RingError};
use crate::ring::{CoefficientRing, RingKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealField;

impl CoefficientValue for f64 {
    fn ring_kind(&self) -> RingKind {
        RingKind::Real53
    }

    fn clone_boxed(&self) -> Box<dyn CoefficientValue> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl CoefficientRing for RealField {
    type Element = f64;
    type Magnitude = f64;

    fn kind(&self) -> RingKind {
        RingKind::Real53
    }

    fn characteristic(&self) -> u64 {
        0
    }

    fn precision(&self) -> u32 {
        53
    }

    fn describe(&self, out: &mut String) {
        out.push_str(self.kind().name());
    }

    fn is_zero(&self, a: &f64) -> bool {
        *a == 0.0
    }

    fn is_unit(&self, a: &f64) -> bool {
        !self.is_zero(a)
    }

    fn is_equal(&self, a: &f64, b: &f64) -> bool {
        a == b
    }

    fn cmp_elements(&self, a: &f64, b: &f64) -> Ordering {
        // NaN falls through to Equal, as with the componentwise order on
        // the complex sibling.
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn hash_value(&self, a: &f64) -> u64 {
        (12347.0 * a).floor() as i64 as u64
    }

    fn zero(&self) -> f64 {
        0.0
    }

    fn one(&self) -> f64 {
        1.0
    }

    fn from_int(&self, n: i64) -> f64 {
        n as f64
    }

    fn variable(&self, _index: usize) -> f64 {
        1.0
    }

    fn from_integer(&self, n: &Integer) -> f64 {
        n.to_f64()
    }

    fn from_rational(&self, q: &Rational) -> f64 {
        q.to_f64()
    }

    fn from_big_real(&self, x: &Float) -> f64 {
        x.to_f64()
    }

    fn from_big_complex(&self, z: &BigComplex) -> f64 {
        // Narrowing into the reals keeps the real part.
        z.real().to_f64()
    }

    fn neg(&self, a: &f64) -> f64 {
        -a
    }

    fn add(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn sub(&self, a: &f64, b: &f64) -> f64 {
        a - b
    }

    fn mul(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn inv(&self, a: &f64) -> f64 {
        1.0 / a
    }

    fn div(&self, a: &f64, b: &f64) -> f64 {
        a / b
    }

    fn abs(&self, a: &f64) -> f64 {
        a.abs()
    }

    fn random(&self, rng: &mut RandState) -> f64 {
        Float::with_val(53, Float::random_bits(rng)).to_f64()
    }

    fn zeroize_tiny(&self, epsilon: &Float, a: &mut f64) {
        if *epsilon > a.abs() {
            *a = 0.0;
        }
    }

    fn to_elem(&self, a: &f64) -> RingElem {
        RingElem::new(Box::new(*a))
    }

    fn from_elem(&self, e: &RingElem) -> Result<f64> {
        e.downcast_ref::<f64>().copied().ok_or(RingError::ElementKind {
            expected: RingKind::Real53,
            actual: e.ring_kind(),
        })
    }
}
