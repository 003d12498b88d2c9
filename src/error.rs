use thiserror::Error;

use crate::ring::RingKind;

pub type Result<T> = std::result::Result<T, RingError>;

/// Errors surfaced by the ring layer.
///
/// Ring arithmetic itself is total: divide-by-zero propagates IEEE Inf/NaN
/// and narrowing conversions silently lose precision. The only fallible
/// surface is handle unboxing, where the kind tag catches a handle routed
/// to the wrong ring.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RingError {
    #[error("element belongs to {actual}, not {expected}")]
    ElementKind {
        expected: RingKind,
        actual: RingKind,
    },
}
