//! Metric prefixes applied to units

use std::marker::PhantomData;
use quanta_core::{Exponent, Ratio};
use crate::text::format_terms;
use crate::unit::{Term, Unit};

/// A decimal scale with a symbol, e.g. `k` for 10³
pub trait Prefix: 'static {
    const SYMBOL: &'static str;
    const RATIO: Ratio;
}

/// Unit `U` scaled by prefix `P`: `Prefixed<Kilo, Metre>` is `km`
///
/// The dimension is that of `U`. A prefixed single named unit fuses into one
/// symbol; anything else is wrapped, e.g. `k(m/s)`.
#[derive(Debug)]
pub struct Prefixed<P, U>(PhantomData<fn() -> (P, U)>);

impl<P: Prefix, U: Unit> Unit for Prefixed<P, U> {
    type Dim = U::Dim;
    const RATIO: Ratio = U::RATIO.multiply(P::RATIO);

    fn terms() -> Vec<Term> {
        let terms = U::terms();
        match terms.as_slice() {
            [term] if term.exponent.equals(Exponent::ONE) => {
                vec![Term::named(format!("{}{}", P::SYMBOL, term.symbol))]
            }
            _ => vec![Term::named(format!("{}({})", P::SYMBOL, format_terms(&terms)))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{same_unit, Power, Quotient};
    use crate::{base_dimension, coherent_unit, named_unit, prefix};

    base_dimension!(DimLength = Length, "length", coherent Metre);
    base_dimension!(DimTime = Time, "time", coherent Second);
    coherent_unit!(Metre: DimLength, "m");
    coherent_unit!(Second: DimTime, "s");
    named_unit!(Kilometre: DimLength = 1000 * Metre, "km");
    prefix!(Kilo, "k", 3);
    prefix!(Milli, "m", -3);

    #[test]
    fn test_prefixed_ratio() {
        assert_eq!(<Prefixed<Kilo, Metre>>::RATIO, Ratio::exp10(3));
        assert_eq!(<Prefixed<Milli, Second>>::RATIO, Ratio::exp10(-3));
        assert!(same_unit::<Prefixed<Kilo, Metre>, Kilometre>());
        assert!(same_unit::<Prefixed<Milli, Prefixed<Kilo, Metre>>, Metre>());
    }

    #[test]
    fn test_prefixed_symbol() {
        assert_eq!(<Prefixed<Kilo, Metre>>::symbol(), "km");
        assert_eq!(<Prefixed<Milli, Second>>::symbol(), "ms");
        assert_eq!(<Power<Prefixed<Kilo, Metre>, 2>>::symbol(), "km²");
        assert_eq!(<Prefixed<Kilo, Quotient<Metre, Second>>>::symbol(), "k(m/s)");
    }
}
