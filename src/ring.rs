//! The ring capability contract every coefficient ring implements.

use std::cmp::Ordering;
use std::fmt;

use rug::rand::RandState;
use rug::{Complex as BigComplex, Float, Integer, Rational};

use crate::element::RingElem;
use crate::error::Result;

/// Runtime identifier distinguishing sibling coefficient-ring
/// implementations. Engine code selects a ring dynamically by this tag,
/// and boxed elements carry it so unboxing can be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingKind {
    /// Approximate reals, one IEEE-754 double per element.
    Real53,
    /// Approximate complexes, two IEEE-754 doubles per element.
    Complex53,
}

impl RingKind {
    pub fn name(self) -> &'static str {
        match self {
            RingKind::Real53 => "RR_53",
            RingKind::Complex53 => "CC_53",
        }
    }
}

impl fmt::Display for RingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map between rings, applied coefficient-wise by the engine's evaluation
/// machinery. Rings only see it through [`CoefficientRing::evaluate`].
pub trait RingMap {
    fn target(&self) -> RingKind;
}

/// The capability contract: a stateless strategy object whose operations
/// act on externally-owned elements.
///
/// Every operation that returns an element returns a fully usable value.
/// Arithmetic is total over the declared domain: dividing or inverting an
/// exact zero propagates IEEE Inf/NaN rather than reporting an error, and
/// narrowing conversions always succeed, discarding precision (or
/// magnitude) silently.
pub trait CoefficientRing {
    type Element: Clone + fmt::Debug;
    /// Element type of the sibling ring that carries magnitude results.
    type Magnitude;

    fn kind(&self) -> RingKind;
    fn characteristic(&self) -> u64;
    /// Working precision in significant bits.
    fn precision(&self) -> u32;
    /// Append a textual description of the ring itself.
    fn describe(&self, out: &mut String);

    fn is_zero(&self, a: &Self::Element) -> bool;
    /// In a field every nonzero element is invertible.
    fn is_unit(&self, a: &Self::Element) -> bool;
    /// Exact componentwise equality, no tolerance.
    fn is_equal(&self, a: &Self::Element, b: &Self::Element) -> bool;
    /// Strict total order used by the engine for sorting and
    /// deduplication only; it carries no mathematical meaning.
    fn cmp_elements(&self, a: &Self::Element, b: &Self::Element) -> Ordering;
    /// Cheap deterministic hash. Collisions are expected and fine.
    fn hash_value(&self, a: &Self::Element) -> u64;

    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    fn from_int(&self, n: i64) -> Self::Element;
    /// A scalar ring has no indeterminates; every "variable" collapses to
    /// the multiplicative identity.
    fn variable(&self, index: usize) -> Self::Element;
    fn from_integer(&self, n: &Integer) -> Self::Element;
    fn from_rational(&self, q: &Rational) -> Self::Element;
    fn from_big_real(&self, x: &Float) -> Self::Element;
    fn from_big_complex(&self, z: &BigComplex) -> Self::Element;

    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    /// Multiplicative inverse. The caller guarantees `a != 0`; an exact
    /// zero yields IEEE Inf/NaN, not an error.
    fn inv(&self, a: &Self::Element) -> Self::Element;
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `acc -= a * b`, composed as multiply then subtract. No fused
    /// multiply-add guarantee.
    fn sub_mul_assign(&self, acc: &mut Self::Element, a: &Self::Element, b: &Self::Element) {
        let ab = self.mul(a, b);
        *acc = self.sub(acc, &ab);
    }

    /// Binary exponentiation, O(log |n|) multiplications. `n == 0` yields
    /// the identity for every base, including zero; a negative exponent
    /// inverts the base first.
    fn pow(&self, a: &Self::Element, n: i64) -> Self::Element {
        let mut result = self.one();
        if n == 0 {
            return result;
        }
        let mut base = if n < 0 { self.inv(a) } else { a.clone() };
        let mut e = n.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(&result, &base);
            }
            base = self.mul(&base, &base);
            e >>= 1;
        }
        result
    }

    /// Exponentiation by an arbitrary-precision integer. Valid only when
    /// the exponent fits a machine integer; otherwise the range violation
    /// is reported on the log channel and the identity is returned so the
    /// caller can continue with a well-formed element.
    fn pow_big(&self, a: &Self::Element, n: &Integer) -> Self::Element {
        match n.to_i64() {
            Some(n) => self.pow(a, n),
            None => {
                log::error!("{}: exponent {} does not fit a machine integer", self.kind(), n);
                self.one()
            }
        }
    }

    /// Magnitude of an element, as the sibling real ring's element type.
    fn abs(&self, a: &Self::Element) -> Self::Magnitude;

    /// For nonzero `a`, `b`: produce `(x, y)` with `x*a + y*b == 0` and
    /// `x` the identity. The field specialization of the generic Bezout
    /// relation the engine requests from every ring kind.
    fn syzygy(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        let x = self.one();
        let y = if self.is_zero(b) {
            self.zero()
        } else {
            self.neg(&self.div(a, b))
        };
        (x, y)
    }

    /// Draw an element from the shared arbitrary-precision uniform
    /// generator, one independent sample per component.
    fn random(&self, rng: &mut RandState) -> Self::Element;

    /// Componentwise threshold snap: any component with absolute value
    /// below `epsilon` becomes exactly 0.0.
    fn zeroize_tiny(&self, epsilon: &Float, a: &mut Self::Element);

    /// Ring-map evaluation hook. Scalar rings leave this to the engine.
    fn evaluate(
        &self,
        _map: &dyn RingMap,
        _f: &Self::Element,
        _first_var: usize,
    ) -> Option<RingElem> {
        None
    }

    /// Box one element into the engine's uniform opaque handle. Exactly
    /// one allocation; the handle never aliases another boxing.
    fn to_elem(&self, a: &Self::Element) -> RingElem;
    /// Unbox a handle produced by this ring. A handle from a sibling ring
    /// is rejected by its kind tag.
    fn from_elem(&self, e: &RingElem) -> Result<Self::Element>;
}
