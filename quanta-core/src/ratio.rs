//! Exact rational scale factors
//!
//! A `Ratio` is `num/den · 10^exp`, always positive. It is kept in a
//! canonical form so that equal values have equal fields:
//! - `gcd(num, den) == 1`
//! - `den` has no factor 2 or 5 (they are moved into `num` and `exp`)
//! - `num` is not a multiple of 10
//!
//! All operations are `const fn` so unit scales are resolved during
//! constant evaluation. An overflow there fails the build; the `checked_*`
//! variants report it as a `RatioError` instead.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::RatioError;

/// `?` for `Result` inside `const fn`
macro_rules! try_const {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => return Err(e),
        }
    };
}

/// Checked i128 multiplication that reports `RatioError::Overflow`
macro_rules! mul_const {
    ($a:expr, $b:expr) => {
        match ($a as i128).checked_mul($b as i128) {
            Some(v) => v,
            None => return Err(RatioError::Overflow),
        }
    };
}

const fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn pow10(n: i32) -> Result<i128, RatioError> {
    match 10i128.checked_pow(n as u32) {
        Some(v) => Ok(v),
        None => Err(RatioError::Overflow),
    }
}

/// Largest `r` with `r^n <= x`
const fn integer_root(x: i128, n: i32) -> i128 {
    let (mut lo, mut hi) = (0i128, x);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        match mid.checked_pow(n as u32) {
            Some(p) if p <= x => lo = mid,
            _ => hi = mid - 1,
        }
    }
    lo
}

/// `n / 10^k` rounded down, for `n >= 0`
const fn floor_div_pow10(n: i128, k: i64) -> i128 {
    let (mut n, mut k) = (n, k);
    while k > 0 && n > 0 {
        n /= 10;
        k -= 1;
    }
    n
}

/// `n / 10^k` rounded up, for `n >= 0`
const fn ceil_div_pow10(n: i128, k: i64) -> i128 {
    if n == 0 {
        return 0;
    }
    floor_div_pow10(n - 1, k) + 1
}

/// Exact positive rational scale `num/den · 10^exp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRatio")]
pub struct Ratio {
    num: i64,
    den: i64,
    exp: i32,
}

impl Ratio {
    /// The coherent scale
    pub const ONE: Ratio = Ratio { num: 1, den: 1, exp: 0 };

    /// Create `num/den`
    ///
    /// # Panics
    ///
    /// Panics if either term is not positive. In a constant context this is
    /// a build error.
    pub const fn new(num: i64, den: i64) -> Self {
        Self::new_exp(num, den, 0)
    }

    /// Create `num/den · 10^exp`
    pub const fn new_exp(num: i64, den: i64, exp: i32) -> Self {
        Self::unwrap_const(Self::try_new(num, den, exp))
    }

    /// Create a power of ten, as used by metric prefixes
    pub const fn exp10(exp: i32) -> Self {
        Ratio { num: 1, den: 1, exp }
    }

    /// Create `num/den · 10^exp`, reporting non-positive terms or overflow
    pub const fn try_new(num: i64, den: i64, exp: i32) -> Result<Self, RatioError> {
        Self::normalize(num as i128, den as i128, exp)
    }

    const fn unwrap_const(result: Result<Ratio, RatioError>) -> Ratio {
        match result {
            Ok(ratio) => ratio,
            Err(RatioError::Overflow) => panic!("ratio overflow: scale does not fit in i64"),
            Err(RatioError::NonPositive) => panic!("ratio terms must be positive"),
            Err(RatioError::InexactRoot(_)) => panic!("ratio has no exact root"),
        }
    }

    const fn normalize(num: i128, den: i128, exp: i32) -> Result<Self, RatioError> {
        if num <= 0 || den <= 0 {
            return Err(RatioError::NonPositive);
        }
        let (mut num, mut den, mut exp) = (num, den, exp);

        while den % 10 == 0 {
            den /= 10;
            exp -= 1;
        }
        while den % 2 == 0 {
            den /= 2;
            num = mul_const!(num, 5);
            exp -= 1;
        }
        while den % 5 == 0 {
            den /= 5;
            num = mul_const!(num, 2);
            exp -= 1;
        }

        let g = gcd(num, den);
        num /= g;
        den /= g;

        while num % 10 == 0 {
            num /= 10;
            exp += 1;
        }

        if num > i64::MAX as i128 || den > i64::MAX as i128 {
            return Err(RatioError::Overflow);
        }
        Ok(Ratio { num: num as i64, den: den as i64, exp })
    }

    /// Canonical numerator
    pub const fn numerator(&self) -> i64 {
        self.num
    }

    /// Canonical denominator, free of factors 2 and 5
    pub const fn denominator(&self) -> i64 {
        self.den
    }

    /// Power-of-ten exponent
    pub const fn exponent(&self) -> i32 {
        self.exp
    }

    /// Whether this is the coherent scale
    pub const fn is_one(&self) -> bool {
        self.equals(&Self::ONE)
    }

    /// `==` usable in constant evaluation
    pub const fn equals(&self, other: &Ratio) -> bool {
        self.num == other.num && self.den == other.den && self.exp == other.exp
    }

    /// Product of two scales, or `Overflow`
    pub const fn checked_multiply(self, other: Ratio) -> Result<Self, RatioError> {
        let num = mul_const!(self.num, other.num);
        let den = mul_const!(self.den, other.den);
        Self::normalize(num, den, self.exp + other.exp)
    }

    /// Product of two scales
    ///
    /// # Panics
    ///
    /// Panics on overflow. In a constant context this is a build error.
    pub const fn multiply(self, other: Ratio) -> Self {
        Self::unwrap_const(self.checked_multiply(other))
    }

    /// Quotient of two scales, or `Overflow`
    pub const fn checked_divide(self, other: Ratio) -> Result<Self, RatioError> {
        self.checked_multiply(other.invert())
    }

    /// Quotient of two scales; panics on overflow like `multiply`
    pub const fn divide(self, other: Ratio) -> Self {
        Self::unwrap_const(self.checked_divide(other))
    }

    /// Reciprocal scale
    pub const fn invert(self) -> Self {
        Self::unwrap_const(Self::normalize(self.den as i128, self.num as i128, -self.exp))
    }

    /// Integer power, negative exponents invert first
    pub const fn checked_pow(self, n: i32) -> Result<Self, RatioError> {
        let base = if n < 0 { self.invert() } else { self };
        let mut result = Self::ONE;
        let mut i = 0;
        while i < n.unsigned_abs() {
            result = try_const!(result.checked_multiply(base));
            i += 1;
        }
        Ok(result)
    }

    /// Integer power; panics on overflow
    pub const fn pow(self, n: i32) -> Self {
        Self::unwrap_const(self.checked_pow(n))
    }

    /// Exact n-th root; fails when the root is not rational
    pub const fn checked_root(self, n: i32) -> Result<Self, RatioError> {
        if n <= 0 || self.exp % n != 0 {
            return Err(RatioError::InexactRoot(n));
        }
        let num = integer_root(self.num as i128, n);
        let den = integer_root(self.den as i128, n);
        let num_back = match num.checked_pow(n as u32) {
            Some(v) => v,
            None => return Err(RatioError::Overflow),
        };
        let den_back = match den.checked_pow(n as u32) {
            Some(v) => v,
            None => return Err(RatioError::Overflow),
        };
        if num_back != self.num as i128 || den_back != self.den as i128 {
            return Err(RatioError::InexactRoot(n));
        }
        Self::normalize(num, den, self.exp / n)
    }

    /// Exact n-th root; panics when there is none
    pub const fn root(self, n: i32) -> Self {
        Self::unwrap_const(self.checked_root(n))
    }

    /// The finer of `a` and `b`, when it divides the coarser one exactly
    ///
    /// Metre and centimetre give centimetre. km/h and m/s give `None`:
    /// neither is a whole multiple of the other.
    pub const fn checked_common(a: Ratio, b: Ratio) -> Option<Ratio> {
        let (fine, coarse) = if b.less_than(&a) { (b, a) } else { (a, b) };
        if fine.divides(&coarse) {
            Some(fine)
        } else {
            None
        }
    }

    /// The finer of `a` and `b`, whether or not it divides the other
    ///
    /// Integral arithmetic additionally requires `checked_common` to succeed.
    pub const fn common(a: Ratio, b: Ratio) -> Ratio {
        if b.less_than(&a) {
            b
        } else {
            a
        }
    }

    /// Whether `other` is a whole multiple of `self`
    pub const fn divides(&self, other: &Ratio) -> bool {
        match other.checked_divide(*self) {
            Ok(quotient) => quotient.den == 1 && quotient.exp >= 0,
            Err(_) => false,
        }
    }

    /// Exact ordering, without rounding through `f64`
    pub const fn less_than(&self, other: &Ratio) -> bool {
        // self < other  <=>  x · 10^shift < y
        let x = self.num as i128 * other.den as i128;
        let y = other.num as i128 * self.den as i128;
        let shift = self.exp as i64 - other.exp as i64;
        if shift >= 0 {
            x < ceil_div_pow10(y, shift)
        } else {
            floor_div_pow10(x, -shift) < y
        }
    }

    /// Nearest `f64`; powers of ten up to 10^22 are exact
    pub const fn to_f64(&self) -> f64 {
        let mut scale = 1.0f64;
        let mut i = 0;
        while i < self.exp.unsigned_abs() {
            scale *= 10.0;
            i += 1;
        }
        let value = self.num as f64 / self.den as f64;
        if self.exp < 0 {
            value / scale
        } else {
            value * scale
        }
    }

    /// The ratio as a plain fraction, when it fits in i128
    pub fn as_fraction(&self) -> Option<(i128, i128)> {
        let scale = pow10(self.exp.abs()).ok()?;
        let (num, den) = if self.exp >= 0 {
            ((self.num as i128).checked_mul(scale)?, self.den as i128)
        } else {
            (self.num as i128, (self.den as i128).checked_mul(scale)?)
        };
        let g = gcd(num, den);
        Some((num / g, den / g))
    }
}

/// Serialized fields of a `Ratio`, canonicalized on the way in
#[derive(Deserialize)]
struct RawRatio {
    num: i64,
    den: i64,
    #[serde(default)]
    exp: i32,
}

impl TryFrom<RawRatio> for Ratio {
    type Error = RatioError;

    fn try_from(raw: RawRatio) -> Result<Self, Self::Error> {
        Ratio::try_new(raw.num, raw.den, raw.exp)
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_fraction() {
            Some((num, 1)) => write!(f, "{}", num),
            Some((num, den)) => write!(f, "{}/{}", num, den),
            None if self.den == 1 => write!(f, "{}e{}", self.num, self.exp),
            None => write!(f, "{}/{}e{}", self.num, self.den, self.exp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KILO: Ratio = Ratio::exp10(3);
    const CENTI: Ratio = Ratio::exp10(-2);
    const HOUR: Ratio = Ratio::new(3600, 1);

    #[test]
    fn test_canonical_form() {
        assert_eq!(Ratio::new(1000, 1), KILO);
        assert_eq!(Ratio::new(1, 100), CENTI);
        assert_eq!(Ratio::new(2, 5), Ratio::new_exp(4, 1, -1));
        assert_eq!(Ratio::new(6, 4), Ratio::new(3, 2));
        assert_eq!(Ratio::new(1, 1), Ratio::ONE);
    }

    #[test]
    fn test_multiply_divide() {
        assert_eq!(KILO.multiply(CENTI), Ratio::new(10, 1));
        assert_eq!(KILO.divide(HOUR), Ratio::new(5, 18));
        assert_eq!(KILO.divide(KILO), Ratio::ONE);
        assert_eq!(HOUR.invert().multiply(HOUR), Ratio::ONE);
    }

    #[test]
    fn test_pow_and_root() {
        assert_eq!(KILO.pow(2), Ratio::exp10(6));
        assert_eq!(KILO.pow(-1), Ratio::exp10(-3));
        assert_eq!(Ratio::exp10(6).root(2), KILO);
        assert_eq!(Ratio::new(4, 9).root(2), Ratio::new(2, 3));
        assert_eq!(Ratio::new(2, 1).checked_root(2), Err(RatioError::InexactRoot(2)));
        assert_eq!(Ratio::exp10(3).checked_root(2), Err(RatioError::InexactRoot(2)));
    }

    #[test]
    fn test_common_picks_finer() {
        assert_eq!(Ratio::common(Ratio::ONE, CENTI), CENTI);
        assert_eq!(Ratio::common(KILO, Ratio::ONE), Ratio::ONE);
        assert_eq!(Ratio::common(Ratio::new(60, 1), HOUR), Ratio::new(60, 1));
    }

    #[test]
    fn test_common_of_incommensurable_scales() {
        // km/h against m/s: neither divides the other
        let kmph = KILO.divide(HOUR);
        assert_eq!(Ratio::checked_common(kmph, Ratio::ONE), None);
        assert_eq!(Ratio::common(kmph, Ratio::ONE), kmph);
        assert_eq!(Ratio::common(Ratio::ONE, kmph), kmph);

        // inch against centimetre: the finer one, never a smaller third scale
        let inch = Ratio::new_exp(254, 1, -4);
        assert_eq!(Ratio::checked_common(inch, CENTI), None);
        assert_eq!(Ratio::common(inch, CENTI), CENTI);
    }

    #[test]
    fn test_checked_common_divisible() {
        assert_eq!(Ratio::checked_common(Ratio::ONE, CENTI), Some(CENTI));
        assert_eq!(Ratio::checked_common(HOUR, Ratio::new(60, 1)), Some(Ratio::new(60, 1)));
        assert_eq!(Ratio::checked_common(KILO, KILO), Some(KILO));
        let huge = Ratio::new(i64::MAX, 1);
        let tiny = Ratio::new_exp(1, 3, -30);
        assert_eq!(Ratio::checked_common(huge, tiny), None);
        assert_eq!(Ratio::common(huge, tiny), tiny);
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Ratio::new(i64::MAX, 1);
        assert_eq!(big.checked_multiply(Ratio::new(3, 1)), Err(RatioError::Overflow));
        assert_eq!(Ratio::try_new(0, 1, 0), Err(RatioError::NonPositive));
    }

    #[test]
    fn test_ordering() {
        assert!(CENTI.less_than(&Ratio::ONE));
        assert!(!KILO.less_than(&KILO));
        assert!(Ratio::new(5, 18).less_than(&Ratio::ONE));
        assert!(!Ratio::ONE.less_than(&Ratio::new(5, 18)));
        assert!(Ratio::exp10(-40).less_than(&Ratio::new_exp(1, 3, -39)));
    }

    #[test]
    fn test_ordering_of_near_equal_large_ratios() {
        // both round to the same f64
        let a = Ratio::new(i64::MAX - 1, 1);
        let b = Ratio::new(i64::MAX, 1);
        assert_eq!(a.to_f64(), b.to_f64());
        assert!(a.less_than(&b));
        assert!(!b.less_than(&a));

        let c = Ratio::new_exp(i64::MAX - 1, 3, 20);
        let d = Ratio::new_exp(i64::MAX, 3, 20);
        assert!(c.less_than(&d));
        assert!(!d.less_than(&c));
    }

    #[test]
    fn test_deserialize_canonicalizes() {
        let ratio: Ratio = serde_json::from_str(r#"{"num":10,"den":1,"exp":0}"#).unwrap();
        assert_eq!(ratio, Ratio::exp10(1));
        let ratio: Ratio = serde_json::from_str(r#"{"num":6,"den":4,"exp":0}"#).unwrap();
        assert_eq!(ratio, Ratio::new(3, 2));
        let json = serde_json::to_string(&Ratio::new(5, 18)).unwrap();
        assert_eq!(serde_json::from_str::<Ratio>(&json).unwrap(), Ratio::new(5, 18));
    }

    #[test]
    fn test_deserialize_rejects_invalid_terms() {
        assert!(serde_json::from_str::<Ratio>(r#"{"num":0,"den":0,"exp":0}"#).is_err());
        assert!(serde_json::from_str::<Ratio>(r#"{"num":1,"den":-2,"exp":0}"#).is_err());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(KILO.to_f64(), 1000.0);
        assert_eq!(CENTI.to_f64(), 0.01);
        assert_eq!(Ratio::new(1, 4).to_f64(), 0.25);
    }

    #[test]
    fn test_display() {
        assert_eq!(KILO.to_string(), "1000");
        assert_eq!(Ratio::new(5, 18).to_string(), "5/18");
        assert_eq!(CENTI.to_string(), "1/100");
        assert_eq!(Ratio::exp10(40).to_string(), "1e40");
    }
}
