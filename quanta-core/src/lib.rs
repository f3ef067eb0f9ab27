//! Quanta Core - Fundamental types
//!
//! This crate provides the algebra shared by every quantity:
//! - `Exponents`: dimension as a vector of rational base-dimension powers
//! - `Ratio`: exact `num/den · 10^exp` unit scale
//! - `Representation`: numeric storage kinds and their promotion table
//! - `RatioError`, `ExponentError`, `QuantityError`: runtime numeric faults

mod exponent;
mod ratio;
mod rep;
mod error;

pub use exponent::{BaseDimension, Exponent, Exponents};
pub use ratio::Ratio;
pub use rep::{Representation, Promote, Promoted};
pub use error::{ExponentError, QuantityError, RatioError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BaseDimension, Exponent, Exponents, Ratio};
    pub use crate::{Representation, Promote, Promoted};
}
