//! Unit and dimension text
//!
//! Symbols are derived from the structure of a unit: named terms with equal
//! symbols are merged, positive powers go before the slash and negative
//! powers after it (`kg·m/s²`, `N/m`, `1/s`).

use crate::dimension::Dimension;
use crate::unit::{Term, Unit};

/// Display symbol of a unit
pub fn unit_text<U: Unit>() -> String {
    U::symbol()
}

/// Exponent-vector text of a dimension, e.g. `L·T⁻¹`
pub fn dimension_text<D: Dimension>() -> String {
    D::EXPONENTS.to_string()
}

/// Render a list of terms as a unit symbol
pub fn format_terms(terms: &[Term]) -> String {
    let mut merged: Vec<Term> = Vec::with_capacity(terms.len());
    for term in terms {
        match merged.iter_mut().find(|m| m.symbol == term.symbol) {
            Some(existing) => existing.exponent = existing.exponent.plus(term.exponent),
            None => merged.push(term.clone()),
        }
    }
    merged.retain(|t| !t.exponent.is_zero());

    let numerator: Vec<String> = merged
        .iter()
        .filter(|t| !t.exponent.is_negative())
        .map(|t| format!("{}{}", t.symbol, t.exponent.to_superscript()))
        .collect();
    let denominator: Vec<String> = merged
        .iter()
        .filter(|t| t.exponent.is_negative())
        .map(|t| format!("{}{}", t.symbol, t.exponent.negate().to_superscript()))
        .collect();

    let denominator = match denominator.len() {
        0 => return numerator.join("·"),
        1 => denominator[0].clone(),
        _ => format!("({})", denominator.join("·")),
    };

    if numerator.is_empty() {
        format!("1/{}", denominator)
    } else {
        format!("{}/{}", numerator.join("·"), denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanta_core::Exponent;

    fn term(symbol: &'static str, exponent: i32) -> Term {
        Term { symbol: symbol.into(), exponent: Exponent::integer(exponent) }
    }

    #[test]
    fn test_simple() {
        assert_eq!(format_terms(&[]), "");
        assert_eq!(format_terms(&[term("m", 1)]), "m");
        assert_eq!(format_terms(&[term("m", 3)]), "m³");
    }

    #[test]
    fn test_quotients() {
        assert_eq!(format_terms(&[term("m", 1), term("s", -1)]), "m/s");
        assert_eq!(format_terms(&[term("m", 1), term("s", -2)]), "m/s²");
        assert_eq!(format_terms(&[term("s", -1)]), "1/s");
        assert_eq!(format_terms(&[term("kg", 1), term("s", -2), term("A", -1)]), "kg/(s²·A)");
    }

    #[test]
    fn test_merging() {
        assert_eq!(format_terms(&[term("N", 1), term("m", 1)]), "N·m");
        assert_eq!(format_terms(&[term("m", 1), term("s", -1), term("s", 1)]), "m");
        assert_eq!(format_terms(&[term("m", 1), term("m", 1)]), "m²");
    }
}
