//! Machine-precision coefficient rings for a symbolic-computation engine.
//!
//! Engine algorithms are written generically over "any coefficient ring";
//! this crate supplies the two machine-precision members of that family:
//! [`RealField`] over `f64` and [`ComplexField`] over pairs of `f64`. Both
//! implement the [`CoefficientRing`] capability contract and can travel
//! through the engine's uniform element container as [`RingElem`] handles.

pub mod complex;
pub mod element;
pub mod error;
pub mod printer;
pub mod real;
pub mod ring;

pub use complex::{Complex, ComplexField};
pub use element::{CoefficientValue, RingElem};
pub use error::{Result, RingError};
pub use printer::PrintStyle;
pub use real::RealField;
pub use ring::{CoefficientRing, RingKind, RingMap};
