//! Centimetre-gram-second system
//!
//! CGS dimensions are types of their own, but they expand to the same
//! exponents as their SI counterparts, so CGS and SI quantities add,
//! compare and cast freely. Ratios stay relative to the SI coherent units.

use quanta_units::{base_dimension, derived_dimension, named_unit, Quantity, Representation};
use crate::units::{Centimetre, Gram, Joule, Kilogram, Metre, Newton, Pascal, Second};
use crate::units::{MetrePerSecond, MetrePerSecondSquared, SquareCentimetre, SquareMetre};

base_dimension!(pub DimLength = Length, "length", coherent Metre);
base_dimension!(pub DimMass = Mass, "mass", coherent Kilogram);
base_dimension!(pub DimTime = Time, "time", coherent Second);
derived_dimension!(pub DimArea = DimLength ^ 2, "area", coherent SquareMetre);
derived_dimension!(pub DimVelocity = DimLength / DimTime, "velocity", coherent MetrePerSecond);
derived_dimension!(pub DimAcceleration = DimVelocity / DimTime, "acceleration", coherent MetrePerSecondSquared);
derived_dimension!(pub DimForce = DimMass * DimAcceleration, "force", coherent Newton);
derived_dimension!(pub DimEnergy = DimForce * DimLength, "energy", coherent Joule);
derived_dimension!(pub DimPressure = DimForce / DimArea, "pressure", coherent Pascal);

named_unit!(pub Gal: DimAcceleration = 1 / 100 * MetrePerSecondSquared, "Gal");
named_unit!(pub Dyne: DimForce = 1 / 100_000 * Newton, "dyn");
named_unit!(pub Erg: DimEnergy = 1 / 10_000_000 * Joule, "erg");
named_unit!(pub Barye: DimPressure = 1 / 10 * Pascal, "Ba");

pub type Length<U = Centimetre, R = f64> = Quantity<DimLength, U, R>;
pub type Mass<U = Gram, R = f64> = Quantity<DimMass, U, R>;
pub type Time<U = Second, R = f64> = Quantity<DimTime, U, R>;
pub type Area<U = SquareCentimetre, R = f64> = Quantity<DimArea, U, R>;
pub type Acceleration<U = Gal, R = f64> = Quantity<DimAcceleration, U, R>;
pub type Force<U = Dyne, R = f64> = Quantity<DimForce, U, R>;
pub type Energy<U = Erg, R = f64> = Quantity<DimEnergy, U, R>;
pub type Pressure<U = Barye, R = f64> = Quantity<DimPressure, U, R>;

/// Square centimetres
pub fn square_centimetres<R: Representation>(value: R) -> Area<SquareCentimetre, R> {
    Quantity::new(value)
}

/// Dynes
pub fn dynes<R: Representation>(value: R) -> Force<Dyne, R> {
    Quantity::new(value)
}

/// Ergs
pub fn ergs<R: Representation>(value: R) -> Energy<Erg, R> {
    Quantity::new(value)
}
