//! Unit representation with exact scale factors
//!
//! A unit is a zero-sized marker type carrying its dimension and its
//! `Ratio` to the coherent unit of that dimension. Compound units built by
//! arithmetic (`Product`, `Quotient`, `Power`, `Common`) are anonymous: they
//! carry only dimension, ratio and the named terms they were built from.
//! Nothing renames a compound unit to a named one; that takes a cast.

use std::borrow::Cow;
use std::marker::PhantomData;
use quanta_core::{Exponent, Ratio};
use crate::dimension::{
    same_dimension, Dimension, Dimensionless, DimPower, DimProduct, DimQuotient, DimRoot,
};
use crate::text::format_terms;

/// A measurement unit
pub trait Unit: 'static {
    /// Dimension measured by this unit
    type Dim: Dimension;

    /// Scale relative to the coherent unit of `Dim`
    const RATIO: Ratio;

    /// Named constituents and their exponents, e.g. `km¹ h⁻¹`
    fn terms() -> Vec<Term>;

    /// Display symbol derived from `terms`
    fn symbol() -> String {
        format_terms(&Self::terms())
    }
}

/// One named constituent of a unit symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub symbol: Cow<'static, str>,
    pub exponent: Exponent,
}

impl Term {
    /// A named unit to the first power
    pub fn named(symbol: impl Into<Cow<'static, str>>) -> Self {
        Term { symbol: symbol.into(), exponent: Exponent::ONE }
    }

    fn raised(self, exponent: Exponent) -> Self {
        Term { symbol: self.symbol, exponent }
    }
}

/// Whether two units measure the same dimension at the same scale
///
/// Symbols play no part: `N/m²` and `Pa` are the same unit.
pub const fn same_unit<A: Unit, B: Unit>() -> bool {
    same_dimension::<A::Dim, B::Dim>() && A::RATIO.equals(&B::RATIO)
}

/// Terms of a unit that exists only as a scale of another one, e.g. `[1000 m]`
fn scaled_terms(ratio: Ratio, base: Vec<Term>) -> Vec<Term> {
    if ratio.is_one() {
        return base;
    }
    let base = format_terms(&base);
    let symbol = if base.is_empty() {
        format!("[{}]", ratio)
    } else {
        format!("[{} {}]", ratio, base)
    };
    vec![Term::named(symbol)]
}

/// The unit of pure numbers
#[derive(Debug)]
pub enum One {}

impl Unit for One {
    type Dim = Dimensionless;
    const RATIO: Ratio = Ratio::ONE;

    fn terms() -> Vec<Term> {
        Vec::new()
    }
}

/// Unit `A · B`
#[derive(Debug)]
pub struct Product<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Unit, B: Unit> Unit for Product<A, B> {
    type Dim = DimProduct<A::Dim, B::Dim>;
    const RATIO: Ratio = A::RATIO.multiply(B::RATIO);

    fn terms() -> Vec<Term> {
        let mut terms = A::terms();
        terms.extend(B::terms());
        terms
    }
}

/// Unit `A / B`
#[derive(Debug)]
pub struct Quotient<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Unit, B: Unit> Unit for Quotient<A, B> {
    type Dim = DimQuotient<A::Dim, B::Dim>;
    const RATIO: Ratio = A::RATIO.divide(B::RATIO);

    fn terms() -> Vec<Term> {
        let mut terms = A::terms();
        terms.extend(B::terms().into_iter().map(|t| {
            let exponent = t.exponent.negate();
            t.raised(exponent)
        }));
        terms
    }
}

/// Unit `U^N`
#[derive(Debug)]
pub struct Power<U, const N: i32>(PhantomData<fn() -> U>);

impl<U: Unit, const N: i32> Unit for Power<U, N> {
    type Dim = DimPower<U::Dim, N>;
    const RATIO: Ratio = U::RATIO.pow(N);

    fn terms() -> Vec<Term> {
        U::terms()
            .into_iter()
            .map(|t| {
                let exponent = t.exponent.times(N);
                t.raised(exponent)
            })
            .collect()
    }
}

/// Unit `U^(1/N)`; only builds when the root of the ratio is exact
#[derive(Debug)]
pub struct Root<U, const N: i32>(PhantomData<fn() -> U>);

impl<U: Unit, const N: i32> Unit for Root<U, N> {
    type Dim = DimRoot<U::Dim, N>;
    const RATIO: Ratio = U::RATIO.root(N);

    fn terms() -> Vec<Term> {
        U::terms()
            .into_iter()
            .map(|t| {
                let exponent = t.exponent.over(N);
                t.raised(exponent)
            })
            .collect()
    }
}

/// Unit `U` scaled by `NUM/DEN · 10^EXP`, without a name of its own
#[derive(Debug)]
pub struct Scaled<U, const NUM: i64, const DEN: i64 = 1, const EXP: i32 = 0>(PhantomData<fn() -> U>);

impl<U: Unit, const NUM: i64, const DEN: i64, const EXP: i32> Unit for Scaled<U, NUM, DEN, EXP> {
    type Dim = U::Dim;
    const RATIO: Ratio = U::RATIO.multiply(Ratio::new_exp(NUM, DEN, EXP));

    fn terms() -> Vec<Term> {
        scaled_terms(Ratio::new_exp(NUM, DEN, EXP), U::terms())
    }
}

/// Unit in which quantities of `A` and `B` are added and compared
///
/// This is the finer of the two operand units, `A` on a tie. Integral
/// quantities additionally require it to divide the coarser unit exactly;
/// that is checked where the expression is built.
#[derive(Debug)]
pub struct Common<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Unit, B: Unit> Unit for Common<A, B> {
    type Dim = A::Dim;
    const RATIO: Ratio = Ratio::common(A::RATIO, B::RATIO);

    fn terms() -> Vec<Term> {
        if Self::RATIO.equals(&A::RATIO) {
            A::terms()
        } else {
            B::terms()
        }
    }
}

/// Unit `1 / U`
pub type Inverse<U> = Quotient<One, U>;
