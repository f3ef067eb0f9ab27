//! Numeric representations of quantity values
//!
//! A quantity stores one value of a `Representation`: a signed integer
//! (i8, i16, i32, i64) or a float (f32, f64). Mixed-representation
//! arithmetic goes through `Promote`, a total table that never narrows:
//! - integer with integer gives the wider integer
//! - f64 with anything gives f64
//! - f32 with f32, i8 or i16 gives f32
//! - f32 with i32 or i64 gives f64

use std::fmt::{Debug, Display};
use num_traits::{Num, NumCast};
use crate::{QuantityError, Ratio};

/// A numeric type that can hold a quantity value
pub trait Representation:
    Copy + Debug + Display + PartialEq + PartialOrd + Num + NumCast + Send + Sync + 'static
{
    /// Whether rescaling is inexact-but-total (floats) rather than truncating
    const IS_FLOAT: bool;

    /// Type name used in diagnostics
    const NAME: &'static str;

    /// Multiply by `ratio`, or `None` when the result does not fit
    ///
    /// Integral representations truncate toward zero.
    fn checked_rescale(self, ratio: Ratio) -> Option<Self>;

    /// Multiply by `ratio`; a ratio of one is an exact identity
    ///
    /// # Panics
    ///
    /// Panics when an integral result does not fit, like integer overflow
    /// in debug builds.
    fn rescale(self, ratio: Ratio) -> Self {
        if ratio.is_one() {
            return self;
        }
        match self.checked_rescale(ratio) {
            Some(value) => value,
            None => panic!("attempt to rescale {} by {} with overflow", Self::NAME, ratio),
        }
    }

    /// Same as `checked_rescale`, reporting the failure as an error value
    fn try_rescale(self, ratio: Ratio) -> Result<Self, QuantityError> {
        self.checked_rescale(ratio).ok_or_else(|| QuantityError::RescaleOverflow {
            value: self.to_string(),
            ratio,
            target: Self::NAME,
        })
    }

    /// Convert from another representation, truncating floats toward zero
    fn try_from_rep<S: Representation>(value: S) -> Result<Self, QuantityError> {
        <Self as NumCast>::from(value).ok_or_else(|| QuantityError::OutOfRange {
            value: value.to_string(),
            target: Self::NAME,
        })
    }
}

macro_rules! impl_integer_rep {
    ($($t:ty),*) => { $(
        impl Representation for $t {
            const IS_FLOAT: bool = false;
            const NAME: &'static str = stringify!($t);

            fn checked_rescale(self, ratio: Ratio) -> Option<Self> {
                let scale = 10i128.checked_pow(ratio.exponent().unsigned_abs())?;
                let (up, down) = if ratio.exponent() >= 0 { (scale, 1) } else { (1, scale) };
                let wide = (self as i128)
                    .checked_mul(ratio.numerator() as i128)?
                    .checked_mul(up)?;
                let down = (ratio.denominator() as i128).checked_mul(down)?;
                <$t>::try_from(wide / down).ok()
            }
        }
    )* };
}

macro_rules! impl_float_rep {
    ($($t:ty),*) => { $(
        impl Representation for $t {
            const IS_FLOAT: bool = true;
            const NAME: &'static str = stringify!($t);

            fn checked_rescale(self, ratio: Ratio) -> Option<Self> {
                // Powers of ten up to 10^22 are exact in f64, so dividing
                // for negative exponents keeps 1000 mm -> 1 m exact.
                let scale = 10f64.powi(ratio.exponent().abs());
                let value = self as f64 * ratio.numerator() as f64 / ratio.denominator() as f64;
                let value = if ratio.exponent() >= 0 { value * scale } else { value / scale };
                Some(value as $t)
            }
        }
    )* };
}

impl_integer_rep!(i8, i16, i32, i64);
impl_float_rep!(f32, f64);

/// Result representation of combining `Self` with `Rhs`
pub trait Promote<Rhs: Representation>: Representation {
    type Output: Representation;

    fn promote(self) -> <Self as Promote<Rhs>>::Output;
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Shorthand for the promoted representation of `A` and `B`
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! promote {
    ($($a:ty, $b:ty => $out:ty;)*) => { $(
        impl Promote<$b> for $a {
            type Output = $out;

            fn promote(self) -> $out {
                self as $out
            }

            fn promote_rhs(rhs: $b) -> $out {
                rhs as $out
            }
        }
    )* };
}

promote! {
    i8, i8 => i8;     i8, i16 => i16;   i8, i32 => i32;   i8, i64 => i64;   i8, f32 => f32;   i8, f64 => f64;
    i16, i8 => i16;   i16, i16 => i16;  i16, i32 => i32;  i16, i64 => i64;  i16, f32 => f32;  i16, f64 => f64;
    i32, i8 => i32;   i32, i16 => i32;  i32, i32 => i32;  i32, i64 => i64;  i32, f32 => f64;  i32, f64 => f64;
    i64, i8 => i64;   i64, i16 => i64;  i64, i32 => i64;  i64, i64 => i64;  i64, f32 => f64;  i64, f64 => f64;
    f32, i8 => f32;   f32, i16 => f32;  f32, i32 => f64;  f32, i64 => f64;  f32, f32 => f32;  f32, f64 => f64;
    f64, i8 => f64;   f64, i16 => f64;  f64, i32 => f64;  f64, i64 => f64;  f64, f32 => f64;  f64, f64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promoted<A: Promote<B>, B: Representation>(a: A, b: B) -> (Promoted<A, B>, Promoted<A, B>) {
        (a.promote(), A::promote_rhs(b))
    }

    #[test]
    fn test_integer_rescale() {
        assert_eq!(5i64.rescale(Ratio::exp10(3)), 5000);
        assert_eq!(5000i64.rescale(Ratio::exp10(-3)), 5);
        assert_eq!(1999i32.rescale(Ratio::exp10(-3)), 1);
        assert_eq!((-1999i32).rescale(Ratio::exp10(-3)), -1);
        assert_eq!(36i64.rescale(Ratio::new(5, 18)), 10);
    }

    #[test]
    fn test_float_rescale() {
        assert_eq!(1000.0f64.rescale(Ratio::exp10(-3)), 1.0);
        assert_eq!(2.0f64.rescale(Ratio::new(3600, 1)), 7200.0);
        assert_eq!(1.5f32.rescale(Ratio::exp10(2)), 150.0);
    }

    #[test]
    fn test_rescale_by_one_is_identity() {
        let value = 0.1f64 + 0.2;
        assert_eq!(value.rescale(Ratio::ONE).to_bits(), value.to_bits());
    }

    #[test]
    fn test_rescale_overflow() {
        assert_eq!(100i8.checked_rescale(Ratio::exp10(1)), None);
        assert!(matches!(
            100i8.try_rescale(Ratio::exp10(1)),
            Err(QuantityError::RescaleOverflow { target: "i8", .. })
        ));
    }

    #[test]
    #[should_panic(expected = "with overflow")]
    fn test_rescale_overflow_panics() {
        let _ = i16::MAX.rescale(Ratio::exp10(2));
    }

    #[test]
    fn test_promotion_table() {
        assert_eq!(promoted(1i8, 2i64), (1i64, 2i64));
        assert_eq!(promoted(1i32, 2.5f32), (1.0f64, 2.5f64));
        assert_eq!(promoted(3i16, 0.5f32), (3.0f32, 0.5f32));
        assert_eq!(promoted(1.5f32, 2.0f64), (1.5f64, 2.0f64));
    }

    #[test]
    fn test_try_from_rep() {
        assert_eq!(i32::try_from_rep(2.9f64), Ok(2));
        assert_eq!(i32::try_from_rep(-2.9f64), Ok(-2));
        assert!(matches!(
            i8::try_from_rep(300i64),
            Err(QuantityError::OutOfRange { target: "i8", .. })
        ));
    }
}
