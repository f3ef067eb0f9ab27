//! Quanta Units - Dimension-checked quantities
//!
//! Provides quantities whose dimension and unit are part of the type:
//! - Dimensions: exponent vectors over the 7 base dimensions, defined with
//!   `base_dimension!` / `derived_dimension!`
//! - Units: exact ratios to the coherent unit, defined with
//!   `coherent_unit!` / `named_unit!` / `prefix!`
//! - Quantity: `+ - * /` and comparison, checked while building
//! - Casts between units, representations and dimension spellings
//! - A runtime registry for naming dimensions
//!
//! ```
//! use quanta_units::{base_dimension, coherent_unit, named_unit, Quantity};
//!
//! base_dimension!(DimLength = Length, "length", coherent Metre);
//! coherent_unit!(Metre: DimLength, "m");
//! named_unit!(Kilometre: DimLength = 1000 * Metre, "km");
//!
//! let total = Quantity::<DimLength, Kilometre, i64>::new(1) + Quantity::<DimLength, Metre, i64>::new(500);
//! assert_eq!(total.value(), 1500);
//! assert_eq!(total.to_string(), "1500 m");
//! ```

mod dimension;
mod unit;
mod prefix;
mod quantity;
mod cast;
mod text;
mod registry;
mod macros;

pub use dimension::{
    same_dimension, Dimension, Dimensionless, DimInverse, DimPower, DimProduct, DimQuotient, DimRoot,
};
pub use unit::{same_unit, Common, Inverse, One, Power, Product, Quotient, Root, Scaled, Term, Unit};
pub use prefix::{Prefix, Prefixed};
pub use quantity::Quantity;
pub use text::{dimension_text, format_terms, unit_text};
pub use registry::{DimensionDef, DimensionRegistry, Recipe, RegistryError};

pub use quanta_core::{
    BaseDimension, Exponent, Exponents, Promote, Promoted, QuantityError, Ratio, RatioError,
    Representation,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Dimension, Unit, Prefix, Quantity, Representation};
    pub use crate::{unit_text, dimension_text};
}
