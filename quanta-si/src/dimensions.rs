//! SI dimensions and quantity aliases
//!
//! Every derived dimension is defined from other dimensions; its exponents
//! are worked out by the compiler from that definition.

use quanta_units::{base_dimension, derived_dimension, DimInverse, Quantity};
use crate::units::*;

// ========== Base dimensions ==========

base_dimension!(pub DimLength = Length, "length", coherent Metre);
base_dimension!(pub DimMass = Mass, "mass", coherent Kilogram);
base_dimension!(pub DimTime = Time, "time", coherent Second);
base_dimension!(pub DimElectricCurrent = ElectricCurrent, "electric_current", coherent Ampere);
base_dimension!(
    pub DimThermodynamicTemperature = ThermodynamicTemperature,
    "thermodynamic_temperature",
    coherent Kelvin
);
base_dimension!(pub DimAmountOfSubstance = AmountOfSubstance, "amount_of_substance", coherent Mole);
base_dimension!(pub DimLuminousIntensity = LuminousIntensity, "luminous_intensity", coherent Candela);

// ========== Derived dimensions ==========

derived_dimension!(pub DimFrequency = DimInverse<DimTime>, "frequency", coherent Hertz);
derived_dimension!(pub DimArea = DimLength ^ 2, "area", coherent SquareMetre);
derived_dimension!(pub DimVolume = DimLength ^ 3, "volume", coherent CubicMetre);
derived_dimension!(pub DimVelocity = DimLength / DimTime, "velocity", coherent MetrePerSecond);
derived_dimension!(pub DimAcceleration = DimVelocity / DimTime, "acceleration", coherent MetrePerSecondSquared);
derived_dimension!(pub DimForce = DimMass * DimAcceleration, "force", coherent Newton);
derived_dimension!(pub DimPressure = DimForce / DimArea, "pressure", coherent Pascal);
derived_dimension!(pub DimEnergy = DimForce * DimLength, "energy", coherent Joule);
derived_dimension!(pub DimPower = DimEnergy / DimTime, "power", coherent Watt);
derived_dimension!(pub DimElectricCharge = DimElectricCurrent * DimTime, "electric_charge", coherent Coulomb);
derived_dimension!(pub DimVoltage = DimPower / DimElectricCurrent, "voltage", coherent Volt);
derived_dimension!(pub DimCapacitance = DimElectricCharge / DimVoltage, "capacitance", coherent Farad);
derived_dimension!(pub DimSurfaceTension = DimForce / DimLength, "surface_tension", coherent NewtonPerMetre);

// ========== Quantity aliases ==========

pub type Length<U, R = f64> = Quantity<DimLength, U, R>;
pub type Mass<U, R = f64> = Quantity<DimMass, U, R>;
pub type Time<U, R = f64> = Quantity<DimTime, U, R>;
pub type ElectricCurrent<U, R = f64> = Quantity<DimElectricCurrent, U, R>;
pub type ThermodynamicTemperature<U, R = f64> = Quantity<DimThermodynamicTemperature, U, R>;
pub type AmountOfSubstance<U, R = f64> = Quantity<DimAmountOfSubstance, U, R>;
pub type LuminousIntensity<U, R = f64> = Quantity<DimLuminousIntensity, U, R>;
pub type Frequency<U, R = f64> = Quantity<DimFrequency, U, R>;
pub type Area<U, R = f64> = Quantity<DimArea, U, R>;
pub type Volume<U, R = f64> = Quantity<DimVolume, U, R>;
pub type Velocity<U, R = f64> = Quantity<DimVelocity, U, R>;
pub type Acceleration<U, R = f64> = Quantity<DimAcceleration, U, R>;
pub type Force<U, R = f64> = Quantity<DimForce, U, R>;
pub type Pressure<U, R = f64> = Quantity<DimPressure, U, R>;
pub type Energy<U, R = f64> = Quantity<DimEnergy, U, R>;
pub type Power<U, R = f64> = Quantity<DimPower, U, R>;
pub type ElectricCharge<U, R = f64> = Quantity<DimElectricCharge, U, R>;
pub type Voltage<U, R = f64> = Quantity<DimVoltage, U, R>;
pub type Capacitance<U, R = f64> = Quantity<DimCapacitance, U, R>;
pub type SurfaceTension<U, R = f64> = Quantity<DimSurfaceTension, U, R>;
