//! Quantity type - a value tagged with a dimension and a unit
//!
//! Dimension and unit are type parameters, so every compatibility check
//! happens while the program is built. The only runtime data is the value.
//!
//! Addition, subtraction and comparison require operands of the same
//! physical dimension and work in the common unit of both operands:
//!
//! ```compile_fail
//! use quanta_units::{base_dimension, coherent_unit, Quantity};
//!
//! base_dimension!(DimLength = Length, "length", coherent Metre);
//! base_dimension!(DimTime = Time, "time", coherent Second);
//! coherent_unit!(Metre: DimLength, "m");
//! coherent_unit!(Second: DimTime, "s");
//!
//! let length = Quantity::<DimLength, Metre>::new(1.0);
//! let time = Quantity::<DimTime, Second>::new(1.0);
//! let _ = length + time;
//! ```
//!
//! The result is expressed in the finer of the two operand units. Integral
//! quantities also need the finer unit to divide the coarser one exactly,
//! so km/h and m/s cannot be mixed in `i64`:
//!
//! ```compile_fail
//! use quanta_units::{base_dimension, coherent_unit, named_unit, Quantity, Quotient};
//!
//! base_dimension!(DimLength = Length, "length", coherent Metre);
//! base_dimension!(DimTime = Time, "time", coherent Second);
//! coherent_unit!(Metre: DimLength, "m");
//! coherent_unit!(Second: DimTime, "s");
//! named_unit!(Kilometre: DimLength = 1000 * Metre, "km");
//! named_unit!(Hour: DimTime = 3600 * Second, "h");
//!
//! let a = Quantity::<DimLength, Kilometre, i64>::new(36) / Quantity::<DimTime, Hour, i64>::new(1);
//! let b = Quantity::<DimLength, Metre, i64>::new(10) / Quantity::<DimTime, Second, i64>::new(1);
//! let _ = a + b;
//! ```
//!
//! and comparing them does not build either:
//!
//! ```compile_fail
//! use quanta_units::{base_dimension, coherent_unit, named_unit, Quantity, Quotient};
//!
//! base_dimension!(DimLength = Length, "length", coherent Metre);
//! base_dimension!(DimTime = Time, "time", coherent Second);
//! coherent_unit!(Metre: DimLength, "m");
//! coherent_unit!(Second: DimTime, "s");
//! named_unit!(Kilometre: DimLength = 1000 * Metre, "km");
//! named_unit!(Hour: DimTime = 3600 * Second, "h");
//!
//! let a = Quantity::<DimLength, Kilometre, i64>::new(36) / Quantity::<DimTime, Hour, i64>::new(1);
//! let b = Quantity::<DimLength, Metre, i64>::new(10) / Quantity::<DimTime, Second, i64>::new(1);
//! let _ = a == b;
//! ```
//!
//! The same sum in floating point is fine and lands in km/h:
//!
//! ```
//! use quanta_units::{base_dimension, coherent_unit, named_unit, Quantity};
//!
//! base_dimension!(DimLength = Length, "length", coherent Metre);
//! base_dimension!(DimTime = Time, "time", coherent Second);
//! coherent_unit!(Metre: DimLength, "m");
//! coherent_unit!(Second: DimTime, "s");
//! named_unit!(Kilometre: DimLength = 1000 * Metre, "km");
//! named_unit!(Hour: DimTime = 3600 * Second, "h");
//!
//! let a = Quantity::<DimLength, Kilometre>::new(3.6) / Quantity::<DimTime, Hour>::new(1.0);
//! let b = Quantity::<DimLength, Metre>::new(1.0) / Quantity::<DimTime, Second>::new(1.0);
//! assert_eq!((a + b).to_string(), "7.2 km/h");
//! ```
//!
//! Multiplication and division accept any dimensions and carry the unit
//! ratio in the result unit instead of rescaling the value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::cmp::Ordering;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use quanta_core::{Exponents, Promote, Promoted, Ratio, Representation};
use crate::dimension::{same_dimension, DimInverse, DimProduct, DimQuotient, Dimension};
use crate::unit::{Common, Inverse, Product, Quotient, Unit};
use crate::text::unit_text;

/// A physical quantity: one value of representation `R`, measured in unit `U`
/// of dimension `D`
pub struct Quantity<D, U, R = f64> {
    value: R,
    _marker: PhantomData<fn() -> (D, U)>,
}

impl<D: Dimension, U: Unit, R: Representation> Quantity<D, U, R> {
    /// Create a new quantity
    ///
    /// The unit must measure `D`; anything else fails the build.
    pub const fn new(value: R) -> Self {
        const {
            assert!(
                same_dimension::<D, U::Dim>(),
                "unit does not measure the dimension of this quantity"
            )
        };
        Quantity { value, _marker: PhantomData }
    }

    /// Zero in this unit
    pub fn zero() -> Self {
        Self::new(R::zero())
    }

    /// The stored value, expressed in `U`
    pub const fn value(&self) -> R {
        self.value
    }

    /// Exponent vector of the quantity's dimension
    pub const fn exponents() -> Exponents {
        D::EXPONENTS
    }

    /// Scale of the quantity's unit relative to the coherent unit
    pub const fn ratio() -> Ratio {
        U::RATIO
    }
}

/// Both operand values, promoted and rescaled to `Common<U1, U2>`
fn to_common<D1, U1, R1, D2, U2, R2>(
    lhs: Quantity<D1, U1, R1>,
    rhs: Quantity<D2, U2, R2>,
) -> (Promoted<R1, R2>, Promoted<R1, R2>)
where
    D1: Dimension,
    U1: Unit,
    R1: Promote<R2>,
    D2: Dimension,
    U2: Unit,
    R2: Representation,
{
    let (lhs_scale, rhs_scale) = const {
        assert!(
            same_dimension::<D1, D2>(),
            "dimension mismatch: operands measure different physical dimensions"
        );
        assert!(
            <Promoted<R1, R2> as Representation>::IS_FLOAT
                || Ratio::checked_common(U1::RATIO, U2::RATIO).is_some(),
            "integral operands need a finer unit that divides the coarser one"
        );
        let common = <Common<U1, U2> as Unit>::RATIO;
        (U1::RATIO.divide(common), U2::RATIO.divide(common))
    };
    (
        lhs.value.promote().rescale(lhs_scale),
        R1::promote_rhs(rhs.value).rescale(rhs_scale),
    )
}

// ========== Value semantics ==========

impl<D, U, R: Copy> Clone for Quantity<D, U, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, U, R: Copy> Copy for Quantity<D, U, R> {}

impl<D: Dimension, U: Unit, R: Representation> Default for Quantity<D, U, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D, U: Unit, R: fmt::Debug> fmt::Debug for Quantity<D, U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &unit_text::<U>())
            .finish()
    }
}

impl<D, U: Unit, R: fmt::Display> fmt::Display for Quantity<D, U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = unit_text::<U>();
        if symbol.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, symbol)
        }
    }
}

impl<D, U, R: Hash> Hash for Quantity<D, U, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Serialized as the bare value; the unit is part of the type
impl<D, U, R: Serialize> Serialize for Quantity<D, U, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, D: Dimension, U: Unit, R: Representation + Deserialize<'de>> Deserialize<'de>
    for Quantity<D, U, R>
{
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        R::deserialize(deserializer).map(Self::new)
    }
}

// ========== Addition and subtraction ==========

impl<D1, U1, R1, D2, U2, R2> Add<Quantity<D2, U2, R2>> for Quantity<D1, U1, R1>
where
    D1: Dimension,
    U1: Unit,
    R1: Promote<R2>,
    D2: Dimension,
    U2: Unit,
    R2: Representation,
{
    type Output = Quantity<D1, Common<U1, U2>, Promoted<R1, R2>>;

    fn add(self, rhs: Quantity<D2, U2, R2>) -> Self::Output {
        let (lhs, rhs) = to_common(self, rhs);
        Quantity::new(lhs + rhs)
    }
}

impl<D1, U1, R1, D2, U2, R2> Sub<Quantity<D2, U2, R2>> for Quantity<D1, U1, R1>
where
    D1: Dimension,
    U1: Unit,
    R1: Promote<R2>,
    D2: Dimension,
    U2: Unit,
    R2: Representation,
{
    type Output = Quantity<D1, Common<U1, U2>, Promoted<R1, R2>>;

    fn sub(self, rhs: Quantity<D2, U2, R2>) -> Self::Output {
        let (lhs, rhs) = to_common(self, rhs);
        Quantity::new(lhs - rhs)
    }
}

impl<D: Dimension, U: Unit, R: Representation> AddAssign for Quantity<D, U, R> {
    fn add_assign(&mut self, rhs: Self) {
        self.value = self.value + rhs.value;
    }
}

impl<D: Dimension, U: Unit, R: Representation> SubAssign for Quantity<D, U, R> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = self.value - rhs.value;
    }
}

impl<D: Dimension, U: Unit, R: Representation + Neg<Output = R>> Neg for Quantity<D, U, R> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

// ========== Multiplication and division ==========

impl<D1, U1, R1, D2, U2, R2> Mul<Quantity<D2, U2, R2>> for Quantity<D1, U1, R1>
where
    D1: Dimension,
    U1: Unit,
    R1: Promote<R2>,
    D2: Dimension,
    U2: Unit,
    R2: Representation,
{
    type Output = Quantity<DimProduct<D1, D2>, Product<U1, U2>, Promoted<R1, R2>>;

    fn mul(self, rhs: Quantity<D2, U2, R2>) -> Self::Output {
        Quantity::new(self.value.promote() * R1::promote_rhs(rhs.value))
    }
}

/// Division by a zero integral value panics; floats follow IEEE-754
impl<D1, U1, R1, D2, U2, R2> Div<Quantity<D2, U2, R2>> for Quantity<D1, U1, R1>
where
    D1: Dimension,
    U1: Unit,
    R1: Promote<R2>,
    D2: Dimension,
    U2: Unit,
    R2: Representation,
{
    type Output = Quantity<DimQuotient<D1, D2>, Quotient<U1, U2>, Promoted<R1, R2>>;

    fn div(self, rhs: Quantity<D2, U2, R2>) -> Self::Output {
        Quantity::new(self.value.promote() / R1::promote_rhs(rhs.value))
    }
}

/// Raw scalar operands: `q * s`, `q / s`, `s * q`, `s / q`
macro_rules! impl_scalar_ops {
    ($($s:ty),*) => { $(
        impl<D: Dimension, U: Unit, R: Promote<$s>> Mul<$s> for Quantity<D, U, R> {
            type Output = Quantity<D, U, Promoted<R, $s>>;

            fn mul(self, rhs: $s) -> Self::Output {
                Quantity::new(self.value.promote() * R::promote_rhs(rhs))
            }
        }

        impl<D: Dimension, U: Unit, R: Promote<$s>> Div<$s> for Quantity<D, U, R> {
            type Output = Quantity<D, U, Promoted<R, $s>>;

            fn div(self, rhs: $s) -> Self::Output {
                Quantity::new(self.value.promote() / R::promote_rhs(rhs))
            }
        }

        impl<D: Dimension, U: Unit, R: Representation> Mul<Quantity<D, U, R>> for $s
        where
            $s: Promote<R>,
        {
            type Output = Quantity<D, U, Promoted<$s, R>>;

            fn mul(self, rhs: Quantity<D, U, R>) -> Self::Output {
                Quantity::new(self.promote() * <$s>::promote_rhs(rhs.value))
            }
        }

        impl<D: Dimension, U: Unit, R: Representation> Div<Quantity<D, U, R>> for $s
        where
            $s: Promote<R>,
        {
            type Output = Quantity<DimInverse<D>, Inverse<U>, Promoted<$s, R>>;

            fn div(self, rhs: Quantity<D, U, R>) -> Self::Output {
                Quantity::new(self.promote() / <$s>::promote_rhs(rhs.value))
            }
        }

        impl<D: Dimension, U: Unit> MulAssign<$s> for Quantity<D, U, $s> {
            fn mul_assign(&mut self, rhs: $s) {
                self.value = self.value * rhs;
            }
        }

        impl<D: Dimension, U: Unit> DivAssign<$s> for Quantity<D, U, $s> {
            fn div_assign(&mut self, rhs: $s) {
                self.value = self.value / rhs;
            }
        }
    )* };
}

impl_scalar_ops!(i8, i16, i32, i64, f32, f64);

// ========== Comparison ==========

impl<D1, U1, R1, D2, U2, R2> PartialEq<Quantity<D2, U2, R2>> for Quantity<D1, U1, R1>
where
    D1: Dimension,
    U1: Unit,
    R1: Promote<R2>,
    D2: Dimension,
    U2: Unit,
    R2: Representation,
{
    fn eq(&self, other: &Quantity<D2, U2, R2>) -> bool {
        let (lhs, rhs) = to_common(*self, *other);
        lhs == rhs
    }
}

impl<D1, U1, R1, D2, U2, R2> PartialOrd<Quantity<D2, U2, R2>> for Quantity<D1, U1, R1>
where
    D1: Dimension,
    U1: Unit,
    R1: Promote<R2>,
    D2: Dimension,
    U2: Unit,
    R2: Representation,
{
    fn partial_cmp(&self, other: &Quantity<D2, U2, R2>) -> Option<Ordering> {
        let (lhs, rhs) = to_common(*self, *other);
        lhs.partial_cmp(&rhs)
    }
}
