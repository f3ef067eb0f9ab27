//! Dimension exponent vectors
//!
//! Each physical dimension is a product of powers of the 7 base dimensions:
//! [length, mass, time, current, temperature, substance, luminous intensity].
//! Exponents are rational so that roots of dimensions stay representable.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::ExponentError;

/// The 7 base dimensions of the International System of Quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    ThermodynamicTemperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions, in exponent-vector order
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::ElectricCurrent,
        BaseDimension::ThermodynamicTemperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this base dimension in an exponent vector
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Dimension symbol (L, M, T, I, Θ, N, J)
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::ElectricCurrent => "I",
            BaseDimension::ThermodynamicTemperature => "Θ",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::ElectricCurrent => "electric current",
            BaseDimension::ThermodynamicTemperature => "thermodynamic temperature",
            BaseDimension::AmountOfSubstance => "amount of substance",
            BaseDimension::LuminousIntensity => "luminous intensity",
        }
    }
}

const fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[derive(Deserialize)]
struct RawExponent {
    num: i32,
    den: i32,
}

impl TryFrom<RawExponent> for Exponent {
    type Error = ExponentError;

    fn try_from(raw: RawExponent) -> Result<Self, Self::Error> {
        Exponent::try_new(raw.num, raw.den)
    }
}

/// A rational exponent, always in lowest terms with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawExponent")]
pub struct Exponent {
    num: i32,
    den: i32,
}

impl Exponent {
    pub const ZERO: Exponent = Exponent { num: 0, den: 1 };
    pub const ONE: Exponent = Exponent { num: 1, den: 1 };

    /// Create a rational exponent `num/den`
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero. In a constant context this is a build error.
    pub const fn new(num: i32, den: i32) -> Self {
        match Self::try_new(num, den) {
            Ok(exponent) => exponent,
            Err(_) => panic!("exponent denominator must not be zero"),
        }
    }

    /// Create `num/den`, reporting a zero denominator
    pub const fn try_new(num: i32, den: i32) -> Result<Self, ExponentError> {
        if den == 0 {
            return Err(ExponentError::ZeroDenominator);
        }
        if num == 0 {
            return Ok(Self::ZERO);
        }
        let sign = if den < 0 { -1 } else { 1 };
        let g = gcd(num, den);
        Ok(Exponent { num: sign * num / g, den: sign * den / g })
    }

    pub const fn integer(n: i32) -> Self {
        Exponent { num: n, den: 1 }
    }

    pub const fn numerator(self) -> i32 {
        self.num
    }

    pub const fn denominator(self) -> i32 {
        self.den
    }

    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    pub const fn plus(self, other: Exponent) -> Self {
        Self::new(self.num * other.den + other.num * self.den, self.den * other.den)
    }

    pub const fn minus(self, other: Exponent) -> Self {
        self.plus(other.negate())
    }

    pub const fn negate(self) -> Self {
        Exponent { num: -self.num, den: self.den }
    }

    /// Multiply by an integer (raising a dimension to a power)
    pub const fn times(self, n: i32) -> Self {
        Self::new(self.num * n, self.den)
    }

    /// Divide by an integer (taking a root of a dimension)
    pub const fn over(self, n: i32) -> Self {
        Self::new(self.num, self.den * n)
    }

    pub const fn equals(self, other: Exponent) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// Render as a superscript suffix: `""` for 1, `"²"`, `"⁻¹"`, `"^(1/2)"`
    pub fn to_superscript(self) -> String {
        if self.equals(Self::ONE) {
            return String::new();
        }
        if !self.is_integer() {
            return format!("^({})", self);
        }
        self.num
            .to_string()
            .chars()
            .map(|c| match c {
                '-' => '⁻',
                '0' => '⁰',
                '1' => '¹',
                '2' => '²',
                '3' => '³',
                '4' => '⁴',
                '5' => '⁵',
                '6' => '⁶',
                '7' => '⁷',
                '8' => '⁸',
                _ => '⁹',
            })
            .collect()
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Exponent vector over the base dimensions
///
/// Two dimensions are the same physical dimension exactly when their
/// exponent vectors are equal, no matter how they were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exponents {
    powers: [Exponent; 7],
}

impl Exponents {
    /// All exponents zero
    pub const DIMENSIONLESS: Exponents = Exponents { powers: [Exponent::ZERO; 7] };

    /// The vector of a single base dimension
    pub const fn base(base: BaseDimension) -> Self {
        Self::DIMENSIONLESS.with(base, Exponent::ONE)
    }

    /// Create from integer exponents in base-dimension order
    pub const fn from_integers(exponents: [i32; 7]) -> Self {
        let mut powers = [Exponent::ZERO; 7];
        let mut i = 0;
        while i < 7 {
            powers[i] = Exponent::integer(exponents[i]);
            i += 1;
        }
        Exponents { powers }
    }

    /// Replace the exponent of one base dimension
    pub const fn with(self, base: BaseDimension, exponent: Exponent) -> Self {
        let mut powers = self.powers;
        powers[base.index()] = exponent;
        Exponents { powers }
    }

    pub const fn get(&self, base: BaseDimension) -> Exponent {
        self.powers[base.index()]
    }

    /// Multiply dimensions (add exponents)
    pub const fn multiply(self, other: Exponents) -> Self {
        let mut powers = self.powers;
        let mut i = 0;
        while i < 7 {
            powers[i] = powers[i].plus(other.powers[i]);
            i += 1;
        }
        Exponents { powers }
    }

    /// Divide dimensions (subtract exponents)
    pub const fn divide(self, other: Exponents) -> Self {
        self.multiply(other.invert())
    }

    pub const fn invert(self) -> Self {
        self.pow(-1)
    }

    /// Raise to integer power (multiply exponents)
    pub const fn pow(self, n: i32) -> Self {
        let mut powers = self.powers;
        let mut i = 0;
        while i < 7 {
            powers[i] = powers[i].times(n);
            i += 1;
        }
        Exponents { powers }
    }

    /// Take the n-th root (divide exponents)
    pub const fn root(self, n: i32) -> Self {
        assert!(n > 0, "root degree must be positive");
        let mut powers = self.powers;
        let mut i = 0;
        while i < 7 {
            powers[i] = powers[i].over(n);
            i += 1;
        }
        Exponents { powers }
    }

    pub const fn equals(&self, other: &Exponents) -> bool {
        let mut i = 0;
        while i < 7 {
            if !self.powers[i].equals(other.powers[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Self::DIMENSIONLESS)
    }

    /// Non-zero entries in base-dimension order
    pub fn iter(&self) -> impl Iterator<Item = (BaseDimension, Exponent)> + '_ {
        BaseDimension::ALL
            .into_iter()
            .zip(self.powers)
            .filter(|(_, exponent)| !exponent.is_zero())
    }
}

impl Default for Exponents {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl fmt::Display for Exponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(base, exponent)| format!("{}{}", base.symbol(), exponent.to_superscript()))
            .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join("·"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENGTH: Exponents = Exponents::base(BaseDimension::Length);
    const TIME: Exponents = Exponents::base(BaseDimension::Time);
    const MASS: Exponents = Exponents::base(BaseDimension::Mass);

    #[test]
    fn test_exponent_normalization() {
        assert_eq!(Exponent::new(2, 4), Exponent::new(1, 2));
        assert_eq!(Exponent::new(1, -2), Exponent::new(-1, 2));
        assert_eq!(Exponent::new(0, 5), Exponent::ZERO);
        assert_eq!(Exponent::new(1, 2).plus(Exponent::new(1, 2)), Exponent::ONE);
    }

    #[test]
    fn test_velocity_from_two_paths() {
        let direct = LENGTH.divide(TIME);
        let frequency = Exponents::DIMENSIONLESS.divide(TIME);
        let via_frequency = frequency.multiply(LENGTH);
        assert!(direct.equals(&via_frequency));
        assert_eq!(direct, Exponents::from_integers([1, 0, -1, 0, 0, 0, 0]));
    }

    #[test]
    fn test_force() {
        let acceleration = LENGTH.divide(TIME.pow(2));
        let force = MASS.multiply(acceleration);
        assert_eq!(force, Exponents::from_integers([1, 1, -2, 0, 0, 0, 0]));
    }

    #[test]
    fn test_root_is_rational() {
        let root_length = LENGTH.root(2);
        assert_eq!(root_length.get(BaseDimension::Length), Exponent::new(1, 2));
        assert!(root_length.pow(2).equals(&LENGTH));
    }

    #[test]
    fn test_dimensionless() {
        assert!(Exponents::DIMENSIONLESS.is_dimensionless());
        assert!(LENGTH.divide(LENGTH).is_dimensionless());
        assert!(!LENGTH.is_dimensionless());
    }

    #[test]
    fn test_display() {
        assert_eq!(Exponents::DIMENSIONLESS.to_string(), "1");
        assert_eq!(LENGTH.to_string(), "L");
        assert_eq!(LENGTH.divide(TIME).to_string(), "L·T⁻¹");
        assert_eq!(LENGTH.pow(-1).multiply(MASS).divide(TIME.pow(2)).to_string(), "L⁻¹·M·T⁻²");
        assert_eq!(LENGTH.root(2).to_string(), "L^(1/2)");
    }

    #[test]
    fn test_serde_roundtrip() {
        let velocity = LENGTH.divide(TIME);
        let json = serde_json::to_string(&velocity).unwrap();
        let back: Exponents = serde_json::from_str(&json).unwrap();
        assert_eq!(back, velocity);
    }

    #[test]
    fn test_deserialize_exponent_canonicalizes() {
        let half: Exponent = serde_json::from_str(r#"{"num":-2,"den":-4}"#).unwrap();
        assert_eq!(half, Exponent::new(1, 2));
        assert!(serde_json::from_str::<Exponent>(r#"{"num":1,"den":0}"#).is_err());
        assert_eq!(Exponent::try_new(3, 0), Err(ExponentError::ZeroDenominator));
    }
}
