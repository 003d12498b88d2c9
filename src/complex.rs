//! Approximate complexes at machine precision: two IEEE-754 doubles per
//! element. The field of characteristic zero the engine reaches for when a
//! computation drops from exact coefficients to floating point.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use rug::rand::RandState;
use rug::{Complex as BigComplex, Float, Integer, Rational};

use crate::element::{CoefficientValue, RingElem};
use crate::error::{Result, RingError};
use crate::printer::{append_complex, PrintStyle};
use crate::real::RealField;
use crate::ring::{CoefficientRing, RingKind};

/// One complex scalar, `re + im*ii`. Plain value type; IEEE Inf/NaN
/// propagate through arithmetic like any other bit pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        append_complex(&mut out, self, PrintStyle::default())?;
        f.write_str(&out)
    }
}

impl CoefficientValue for Complex {
    fn ring_kind(&self) -> RingKind {
        RingKind::Complex53
    }

    fn clone_boxed(&self) -> Box<dyn CoefficientValue> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The double-precision complex coefficient ring. Composes the sibling
/// real ring for magnitude results and precision queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexField {
    real: RealField,
}

impl ComplexField {
    pub fn new() -> Self {
        ComplexField { real: RealField }
    }

    /// The real ring at the same precision.
    pub fn real_ring(&self) -> &RealField {
        &self.real
    }
}

impl CoefficientRing for ComplexField {
    type Element = Complex;
    type Magnitude = f64;

    fn kind(&self) -> RingKind {
        RingKind::Complex53
    }

    fn characteristic(&self) -> u64 {
        0
    }

    fn precision(&self) -> u32 {
        self.real.precision()
    }

    fn describe(&self, out: &mut String) {
        out.push_str(self.kind().name());
    }

    fn is_zero(&self, a: &Complex) -> bool {
        a.re == 0.0 && a.im == 0.0
    }

    fn is_unit(&self, a: &Complex) -> bool {
        !self.is_zero(a)
    }

    fn is_equal(&self, a: &Complex, b: &Complex) -> bool {
        a.re == b.re && a.im == b.im
    }

    fn cmp_elements(&self, a: &Complex, b: &Complex) -> Ordering {
        // Real parts first, imaginary parts break ties. NaN components
        // fall through to Equal.
        if a.re < b.re {
            Ordering::Less
        } else if a.re > b.re {
            Ordering::Greater
        } else if a.im < b.im {
            Ordering::Less
        } else if a.im > b.im {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn hash_value(&self, a: &Complex) -> u64 {
        (12347.0 * a.re + 865800.0 * a.im).floor() as i64 as u64
    }

    fn zero(&self) -> Complex {
        Complex::new(0.0, 0.0)
    }

    fn one(&self) -> Complex {
        Complex::new(1.0, 0.0)
    }

    fn from_int(&self, n: i64) -> Complex {
        Complex::new(n as f64, 0.0)
    }

    fn variable(&self, _index: usize) -> Complex {
        self.one()
    }

    fn from_integer(&self, n: &Integer) -> Complex {
        Complex::new(n.to_f64(), 0.0)
    }

    fn from_rational(&self, q: &Rational) -> Complex {
        Complex::new(q.to_f64(), 0.0)
    }

    fn from_big_real(&self, x: &Float) -> Complex {
        Complex::new(x.to_f64(), 0.0)
    }

    fn from_big_complex(&self, z: &BigComplex) -> Complex {
        Complex::new(z.real().to_f64(), z.imag().to_f64())
    }

    fn neg(&self, a: &Complex) -> Complex {
        Complex::new(-a.re, -a.im)
    }

    fn add(&self, a: &Complex, b: &Complex) -> Complex {
        Complex::new(a.re + b.re, a.im + b.im)
    }

    fn sub(&self, a: &Complex, b: &Complex) -> Complex {
        Complex::new(a.re - b.re, a.im - b.im)
    }

    fn mul(&self, a: &Complex, b: &Complex) -> Complex {
        Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
    }

    // Smith's magnitude-scaling inversion: factor out the larger
    // component so neither re*re + im*im nor its reciprocal is ever
    // formed, which would overflow or underflow at extreme magnitudes.
    fn inv(&self, a: &Complex) -> Complex {
        if a.re.abs() >= a.im.abs() {
            let p = a.im / a.re;
            let denom = a.re + p * a.im;
            Complex::new(1.0 / denom, -p / denom)
        } else {
            let p = a.re / a.im;
            let denom = a.im + p * a.re;
            Complex::new(p / denom, -1.0 / denom)
        }
    }

    // Smith's algorithm applied directly to a/b rather than a * inv(b),
    // to avoid compounding rounding twice.
    fn div(&self, a: &Complex, b: &Complex) -> Complex {
        if b.re.abs() >= b.im.abs() {
            let p = b.im / b.re;
            let denom = b.re + p * b.im;
            Complex::new((a.re + p * a.im) / denom, (a.im - p * a.re) / denom)
        } else {
            let p = b.re / b.im;
            let denom = b.im + p * b.re;
            Complex::new((a.im + p * a.re) / denom, (p * a.im - a.re) / denom)
        }
    }

    fn abs(&self, a: &Complex) -> f64 {
        (a.re * a.re + a.im * a.im).sqrt()
    }

    fn random(&self, rng: &mut RandState) -> Complex {
        // Two independent draws, not one joint complex draw.
        let re = self.real.random(rng);
        let im = self.real.random(rng);
        Complex::new(re, im)
    }

    fn zeroize_tiny(&self, epsilon: &Float, a: &mut Complex) {
        if *epsilon > a.re.abs() {
            a.re = 0.0;
        }
        if *epsilon > a.im.abs() {
            a.im = 0.0;
        }
    }

    fn to_elem(&self, a: &Complex) -> RingElem {
        RingElem::new(Box::new(*a))
    }

    fn from_elem(&self, e: &RingElem) -> Result<Complex> {
        e.downcast_ref::<Complex>()
            .copied()
            .ok_or(RingError::ElementKind {
                expected: RingKind::Complex53,
                actual: e.ring_kind(),
            })
    }
}
