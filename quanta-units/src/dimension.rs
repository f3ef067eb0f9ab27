//! Dimensional analysis types
//!
//! A dimension is a zero-sized marker type whose `EXPONENTS` constant is its
//! expansion over the 7 base dimensions. Derived dimensions compute that
//! constant from the dimensions they are defined with, so the expansion is
//! evaluated once per definition by the compiler. A cyclic definition cannot
//! be evaluated and fails the build.

use std::marker::PhantomData;
use quanta_core::Exponents;
use crate::unit::{Unit, One, Product, Quotient, Power, Root};

/// A physical dimension
pub trait Dimension: 'static {
    /// Expansion over the base dimensions
    const EXPONENTS: Exponents;

    /// Registered name for named dimensions ("velocity", "force", ...)
    const NAME: Option<&'static str> = None;

    /// The coherent reference unit, whose ratio is exactly one
    type Coherent: Unit;
}

/// Whether two dimensions are the same physical dimension
///
/// Only the exponent vectors are compared, so `Length / Time` and
/// `Frequency * Length` are the same dimension.
pub const fn same_dimension<A: Dimension, B: Dimension>() -> bool {
    A::EXPONENTS.equals(&B::EXPONENTS)
}

/// Dimension of pure numbers
#[derive(Debug)]
pub enum Dimensionless {}

impl Dimension for Dimensionless {
    const EXPONENTS: Exponents = Exponents::DIMENSIONLESS;
    const NAME: Option<&'static str> = Some("dimensionless");
    type Coherent = One;
}

/// Dimension `A · B`
#[derive(Debug)]
pub struct DimProduct<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Dimension, B: Dimension> Dimension for DimProduct<A, B> {
    const EXPONENTS: Exponents = A::EXPONENTS.multiply(B::EXPONENTS);
    type Coherent = Product<A::Coherent, B::Coherent>;
}

/// Dimension `A / B`
#[derive(Debug)]
pub struct DimQuotient<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Dimension, B: Dimension> Dimension for DimQuotient<A, B> {
    const EXPONENTS: Exponents = A::EXPONENTS.divide(B::EXPONENTS);
    type Coherent = Quotient<A::Coherent, B::Coherent>;
}

/// Dimension `A^N`
#[derive(Debug)]
pub struct DimPower<A, const N: i32>(PhantomData<fn() -> A>);

impl<A: Dimension, const N: i32> Dimension for DimPower<A, N> {
    const EXPONENTS: Exponents = A::EXPONENTS.pow(N);
    type Coherent = Power<A::Coherent, N>;
}

/// Dimension `A^(1/N)`
#[derive(Debug)]
pub struct DimRoot<A, const N: i32>(PhantomData<fn() -> A>);

impl<A: Dimension, const N: i32> Dimension for DimRoot<A, N> {
    const EXPONENTS: Exponents = A::EXPONENTS.root(N);
    type Coherent = Root<A::Coherent, N>;
}

/// Dimension `1 / D`
pub type DimInverse<D> = DimQuotient<Dimensionless, D>;

#[cfg(test)]
mod tests {
    use super::*;
    use quanta_core::{BaseDimension, Exponent};
    use crate::{base_dimension, coherent_unit, derived_dimension};

    base_dimension!(DimLength = Length, "length", coherent Metre);
    base_dimension!(DimTime = Time, "time", coherent Second);
    coherent_unit!(Metre: DimLength, "m");
    coherent_unit!(Second: DimTime, "s");

    derived_dimension!(DimVelocity = DimLength / DimTime, "velocity", coherent Quotient<Metre, Second>);
    derived_dimension!(DimFrequency = DimInverse<DimTime>, "frequency", coherent Quotient<One, Second>);
    derived_dimension!(DimArea = DimLength ^ 2, "area", coherent Power<Metre, 2>);

    #[test]
    fn test_named_dimensions() {
        assert_eq!(DimLength::NAME, Some("length"));
        assert_eq!(DimVelocity::EXPONENTS, Exponents::from_integers([1, 0, -1, 0, 0, 0, 0]));
        assert_eq!(DimArea::EXPONENTS, Exponents::from_integers([2, 0, 0, 0, 0, 0, 0]));
        assert_eq!(<DimQuotient<DimLength, DimTime>>::NAME, None);
    }

    #[test]
    fn test_structural_equality() {
        assert!(same_dimension::<DimVelocity, DimQuotient<DimLength, DimTime>>());
        assert!(same_dimension::<DimVelocity, DimProduct<DimFrequency, DimLength>>());
        assert!(same_dimension::<DimLength, DimQuotient<DimArea, DimLength>>());
        assert!(!same_dimension::<DimLength, DimTime>());
    }

    #[test]
    fn test_root() {
        let root = <DimRoot<DimArea, 2>>::EXPONENTS;
        assert!(same_dimension::<DimRoot<DimArea, 2>, DimLength>());
        assert_eq!(
            <DimRoot<DimLength, 2>>::EXPONENTS.get(BaseDimension::Length),
            Exponent::new(1, 2)
        );
        assert_eq!(root, DimLength::EXPONENTS);
    }

    #[test]
    fn test_dimensionless_quotient() {
        assert!(same_dimension::<DimQuotient<DimVelocity, DimVelocity>, Dimensionless>());
    }
}
