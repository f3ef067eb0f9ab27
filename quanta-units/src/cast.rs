//! Explicit conversions between units and representations
//!
//! Casting never changes the physical dimension. Converting a length to a
//! duration does not build:
//!
//! ```compile_fail
//! use quanta_units::{base_dimension, coherent_unit, Quantity};
//!
//! base_dimension!(DimLength = Length, "length", coherent Metre);
//! base_dimension!(DimTime = Time, "time", coherent Second);
//! coherent_unit!(Metre: DimLength, "m");
//! coherent_unit!(Second: DimTime, "s");
//!
//! let _ = Quantity::<DimLength, Metre>::new(1.0).cast::<Second>();
//! ```

use quanta_core::{QuantityError, Ratio, Representation};
use crate::dimension::{same_dimension, Dimension};
use crate::quantity::Quantity;
use crate::unit::Unit;

impl<D: Dimension, U: Unit, R: Representation> Quantity<D, U, R> {
    /// The same quantity expressed in unit `T`
    ///
    /// Integral values truncate toward zero: 1999 m cast to km is 1 km.
    /// Casting to a unit of equal ratio returns the value unchanged.
    pub fn cast<T: Unit>(self) -> Quantity<D, T, R> {
        let scale = const {
            assert!(
                same_dimension::<D, T::Dim>(),
                "cast to a unit of another dimension"
            );
            U::RATIO.divide(T::RATIO)
        };
        Quantity::new(self.value().rescale(scale))
    }

    /// The raw value expressed in unit `T`
    pub fn in_unit<T: Unit>(self) -> R {
        self.cast::<T>().value()
    }

    /// The same quantity stored in representation `S`
    ///
    /// # Panics
    ///
    /// Panics when the value does not fit in `S`.
    pub fn cast_rep<S: Representation>(self) -> Quantity<D, U, S> {
        match self.try_cast_rep() {
            Ok(quantity) => quantity,
            Err(err) => panic!("{}", err),
        }
    }

    /// Same as `cast_rep`, reporting values outside the range of `S`
    pub fn try_cast_rep<S: Representation>(self) -> Result<Quantity<D, U, S>, QuantityError> {
        S::try_from_rep(self.value()).map(Quantity::new)
    }

    /// Full conversion to another dimension type, unit and representation
    ///
    /// `D2` may spell the dimension differently (`Mass · Acceleration` to
    /// `Force`) but must have the same exponents. The value is rescaled in
    /// whichever representation is floating, so it is truncated at most once.
    ///
    /// # Panics
    ///
    /// Panics when the value does not fit in `R2`.
    pub fn cast_to<D2: Dimension, U2: Unit, R2: Representation>(self) -> Quantity<D2, U2, R2> {
        match self.try_cast_to() {
            Ok(quantity) => quantity,
            Err(err) => panic!("{}", err),
        }
    }

    /// Same as `cast_to`, reporting values outside the range of `R2`
    pub fn try_cast_to<D2: Dimension, U2: Unit, R2: Representation>(
        self,
    ) -> Result<Quantity<D2, U2, R2>, QuantityError> {
        let scale: Ratio = const {
            assert!(
                same_dimension::<D, D2>(),
                "cast to a quantity of another dimension"
            );
            U::RATIO.divide(U2::RATIO)
        };
        let value = if R2::IS_FLOAT {
            R2::try_from_rep(self.value())?.try_rescale(scale)?
        } else if R::IS_FLOAT {
            R2::try_from_rep(self.value().rescale(scale))?
        } else {
            let wide = i64::try_from_rep(self.value())?.try_rescale(scale)?;
            R2::try_from_rep(wide)?
        };
        Ok(Quantity::new(value))
    }

    /// Plain number held by a dimensionless quantity, at ratio one
    ///
    /// `10 km / 5 m` gives 2000.
    pub fn number(self) -> R {
        const {
            assert!(
                D::EXPONENTS.is_dimensionless(),
                "number() of a quantity with a dimension"
            )
        };
        self.value().rescale(U::RATIO)
    }
}

#[cfg(test)]
mod tests {
    use crate::{base_dimension, coherent_unit, derived_dimension, named_unit};
    use crate::dimension::DimProduct;
    use crate::unit::{Product, Quotient};
    use super::*;

    base_dimension!(DimLength = Length, "length", coherent Metre);
    base_dimension!(DimMass = Mass, "mass", coherent Kilogram);
    base_dimension!(DimTime = Time, "time", coherent Second);
    derived_dimension!(DimVelocity = DimLength / DimTime, "velocity", coherent Quotient<Metre, Second>);
    derived_dimension!(DimAcceleration = DimVelocity / DimTime, "acceleration", coherent MetrePerSecondSquared);
    derived_dimension!(DimForce = DimMass * DimAcceleration, "force", coherent Newton);
    coherent_unit!(Metre: DimLength, "m");
    coherent_unit!(Kilogram: DimMass, "kg");
    coherent_unit!(Second: DimTime, "s");
    coherent_unit!(Newton: DimForce, "N");
    named_unit!(MetrePerSecondSquared: DimAcceleration = Quotient<Quotient<Metre, Second>, Second>, "m/s²");
    named_unit!(Kilometre: DimLength = 1000 * Metre, "km");
    named_unit!(Millimetre: DimLength = 1 / 1000 * Metre, "mm");
    named_unit!(Hour: DimTime = 3600 * Second, "h");
    named_unit!(KilometrePerHour: DimVelocity = Quotient<Kilometre, Hour>, "km/h");

    type Length<U, R = f64> = Quantity<DimLength, U, R>;

    #[test]
    fn test_cast_units() {
        assert_eq!(Length::<Kilometre, i64>::new(2).cast::<Metre>().value(), 2000);
        assert_eq!(Length::<Millimetre>::new(1000.0).cast::<Metre>().value(), 1.0);
        assert_eq!(Length::<Metre, i32>::new(1999).cast::<Kilometre>().value(), 1);
        assert_eq!(Length::<Metre, i32>::new(-1999).cast::<Kilometre>().value(), -1);
    }

    #[test]
    fn test_cast_same_ratio_is_identity() {
        let value = 0.1 + 0.2;
        let q = Length::<Metre>::new(value);
        assert_eq!(q.cast::<Metre>().value().to_bits(), value.to_bits());
    }

    #[test]
    fn test_cast_compound_to_named() {
        let v = Length::<Kilometre>::new(36.0) / Quantity::<DimTime, Hour>::new(1.0);
        assert_eq!(v.cast::<KilometrePerHour>().value(), 36.0);
        assert_eq!(v.in_unit::<Quotient<Metre, Second>>(), 10.0);
    }

    #[test]
    fn test_cast_rep() {
        let q = Length::<Metre>::new(2.9);
        assert_eq!(q.cast_rep::<i32>().value(), 2);
        assert_eq!(Length::<Metre, i64>::new(300).cast_rep::<f32>().value(), 300.0);
        assert!(matches!(
            Length::<Metre, i64>::new(300).try_cast_rep::<i8>(),
            Err(QuantityError::OutOfRange { target: "i8", .. })
        ));
    }

    #[test]
    #[should_panic(expected = "out of range for i8")]
    fn test_cast_rep_panics() {
        let _ = Length::<Metre, i64>::new(300).cast_rep::<i8>();
    }

    #[test]
    fn test_cast_to_rewrites_dimension() {
        let mass = Quantity::<DimMass, Kilogram, i32>::new(10);
        let acceleration = Quantity::<DimAcceleration, MetrePerSecondSquared, i32>::new(10);
        let product: Quantity<DimProduct<DimMass, DimAcceleration>, Product<Kilogram, MetrePerSecondSquared>, i32> =
            mass * acceleration;
        let force = product.cast_to::<DimForce, Newton, i32>();
        assert_eq!(force.value(), 100);
        assert_eq!(force.to_string(), "100 N");
    }

    #[test]
    fn test_cast_to_truncates_once() {
        let q = Length::<Millimetre>::new(1999.9);
        assert_eq!(q.cast_to::<DimLength, Metre, i32>().value(), 1);
        let k = Length::<Metre, i64>::new(1500);
        assert_eq!(k.cast_to::<DimLength, Kilometre, f64>().value(), 1.5);
        assert_eq!(k.cast_to::<DimLength, Kilometre, i16>().value(), 1);
        assert!(Length::<Kilometre, i64>::new(40)
            .try_cast_to::<DimLength, Metre, i8>()
            .is_err());
    }

    #[test]
    fn test_number() {
        let ratio = Length::<Kilometre, i64>::new(10) / Length::<Kilometre, i64>::new(5);
        assert_eq!(ratio.number(), 2);
        let mixed = Length::<Kilometre, i64>::new(10) / Length::<Metre, i64>::new(5);
        assert_eq!(mixed.number(), 2000);
        let fraction = Length::<Millimetre>::new(5.0) / Length::<Metre>::new(1.0);
        assert_eq!(fraction.number(), 0.005);
    }
}
