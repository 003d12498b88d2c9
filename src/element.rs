//! The engine's uniform opaque element handle.
//!
//! Polynomial and Groebner machinery stores coefficients from different
//! rings behind one handle type. A handle wraps exactly one boxed scalar
//! and carries the producing ring's kind tag, so unboxing is a checked
//! downcast instead of a blind reinterpretation.

use std::any::Any;
use std::fmt;

use crate::ring::RingKind;

/// A scalar that can travel through the uniform element container.
pub trait CoefficientValue: fmt::Debug + Send + Sync {
    /// Kind of the ring this value belongs to.
    fn ring_kind(&self) -> RingKind;

    /// Clone into a fresh box; the copy never aliases the original.
    fn clone_boxed(&self) -> Box<dyn CoefficientValue>;

    /// Reference as `Any` for checked downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Type-erased wrapper around one boxed [`CoefficientValue`].
#[derive(Debug)]
pub struct RingElem {
    inner: Box<dyn CoefficientValue>,
}

impl RingElem {
    pub fn new(value: Box<dyn CoefficientValue>) -> Self {
        RingElem { inner: value }
    }

    /// Kind tag of the ring that produced this handle.
    pub fn ring_kind(&self) -> RingKind {
        self.inner.ring_kind()
    }

    /// Attempt to downcast to a concrete scalar type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

impl Clone for RingElem {
    fn clone(&self) -> Self {
        RingElem {
            inner: self.inner.clone_boxed(),
        }
    }
}

impl PartialEq for RingElem {
    fn eq(&self, other: &Self) -> bool {
        // Kind tag first; concrete scalars are small Copy types whose
        // debug form is a faithful value rendering.
        self.ring_kind() == other.ring_kind()
            && format!("{:?}", self.inner) == format!("{:?}", other.inner)
    }
}

impl fmt::Display for RingElem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[...]", self.ring_kind())
    }
}
