//! Unit definitions organized by dimension
//!
//! Named units get their own marker type. Prefixed units and units that
//! are plain combinations of others are aliases, so `Kilometre` is
//! `Prefixed<Kilo, Metre>` and `MetrePerSecond` is `Quotient<Metre, Second>`.

use quanta_units::{coherent_unit, named_unit, Inverse, Power, Prefixed, Quotient};
use crate::dimensions::*;
use crate::prefixes::*;

// ========== Length ==========

coherent_unit!(pub Metre: DimLength, "m");
pub type Nanometre = Prefixed<Nano, Metre>;
pub type Micrometre = Prefixed<Micro, Metre>;
pub type Millimetre = Prefixed<Milli, Metre>;
pub type Centimetre = Prefixed<Centi, Metre>;
pub type Decimetre = Prefixed<Deci, Metre>;
pub type Hectometre = Prefixed<Hecto, Metre>;
pub type Kilometre = Prefixed<Kilo, Metre>;
named_unit!(pub AstronomicalUnit: DimLength = 149_597_870_700 * Metre, "au");

// Imperial length, exact by definition
named_unit!(pub Inch: DimLength = 254 / 10_000 * Metre, "in");
named_unit!(pub Foot: DimLength = 12 * Inch, "ft");
named_unit!(pub Yard: DimLength = 3 * Foot, "yd");
named_unit!(pub Mile: DimLength = 1760 * Yard, "mi");

// ========== Mass ==========

coherent_unit!(pub Kilogram: DimMass, "kg");
named_unit!(pub Gram: DimMass = 1 / 1000 * Kilogram, "g");
pub type Microgram = Prefixed<Micro, Gram>;
pub type Milligram = Prefixed<Milli, Gram>;
named_unit!(pub Tonne: DimMass = 1000 * Kilogram, "t");
named_unit!(pub Pound: DimMass = 45_359_237 / 100_000_000 * Kilogram, "lb");
named_unit!(pub Ounce: DimMass = 1 / 16 * Pound, "oz");

// ========== Time ==========

coherent_unit!(pub Second: DimTime, "s");
pub type Nanosecond = Prefixed<Nano, Second>;
pub type Microsecond = Prefixed<Micro, Second>;
pub type Millisecond = Prefixed<Milli, Second>;
named_unit!(pub Minute: DimTime = 60 * Second, "min");
named_unit!(pub Hour: DimTime = 60 * Minute, "h");
named_unit!(pub Day: DimTime = 24 * Hour, "d");
named_unit!(pub Week: DimTime = 7 * Day, "wk");

// ========== Other base dimensions ==========

coherent_unit!(pub Ampere: DimElectricCurrent, "A");
pub type Milliampere = Prefixed<Milli, Ampere>;
coherent_unit!(pub Kelvin: DimThermodynamicTemperature, "K");
coherent_unit!(pub Mole: DimAmountOfSubstance, "mol");
pub type Millimole = Prefixed<Milli, Mole>;
coherent_unit!(pub Candela: DimLuminousIntensity, "cd");

// ========== Frequency ==========

coherent_unit!(pub Hertz: DimFrequency, "Hz");
pub type Millihertz = Prefixed<Milli, Hertz>;
pub type Kilohertz = Prefixed<Kilo, Hertz>;
pub type Megahertz = Prefixed<Mega, Hertz>;
pub type Gigahertz = Prefixed<Giga, Hertz>;
pub type Terahertz = Prefixed<Tera, Hertz>;
pub type PerSecond = Inverse<Second>;

// ========== Area and volume ==========

pub type SquareMetre = Power<Metre, 2>;
pub type SquareKilometre = Power<Kilometre, 2>;
pub type SquareCentimetre = Power<Centimetre, 2>;
named_unit!(pub Hectare: DimArea = 10_000 * SquareMetre, "ha");

pub type CubicMetre = Power<Metre, 3>;
pub type CubicKilometre = Power<Kilometre, 3>;
pub type CubicDecimetre = Power<Decimetre, 3>;
pub type CubicCentimetre = Power<Centimetre, 3>;
named_unit!(pub Litre: DimVolume = CubicDecimetre, "l");
pub type Millilitre = Prefixed<Milli, Litre>;

// ========== Velocity and acceleration ==========

pub type MetrePerSecond = Quotient<Metre, Second>;
named_unit!(pub KilometrePerHour: DimVelocity = Quotient<Kilometre, Hour>, "km/h");
named_unit!(pub MilePerHour: DimVelocity = Quotient<Mile, Hour>, "mph");
pub type MetrePerSecondSquared = Quotient<MetrePerSecond, Second>;

// ========== Mechanics ==========

coherent_unit!(pub Newton: DimForce, "N");
pub type Kilonewton = Prefixed<Kilo, Newton>;
coherent_unit!(pub Pascal: DimPressure, "Pa");
pub type Kilopascal = Prefixed<Kilo, Pascal>;
named_unit!(pub Bar: DimPressure = 100_000 * Pascal, "bar");

coherent_unit!(pub Joule: DimEnergy, "J");
pub type Millijoule = Prefixed<Milli, Joule>;
pub type Kilojoule = Prefixed<Kilo, Joule>;
pub type Megajoule = Prefixed<Mega, Joule>;
pub type Gigajoule = Prefixed<Giga, Joule>;

coherent_unit!(pub Watt: DimPower, "W");
pub type Milliwatt = Prefixed<Milli, Watt>;
pub type Kilowatt = Prefixed<Kilo, Watt>;
pub type Megawatt = Prefixed<Mega, Watt>;
pub type Gigawatt = Prefixed<Giga, Watt>;

pub type NewtonPerMetre = Quotient<Newton, Metre>;

// ========== Electromagnetism ==========

coherent_unit!(pub Coulomb: DimElectricCharge, "C");
coherent_unit!(pub Volt: DimVoltage, "V");
pub type Millivolt = Prefixed<Milli, Volt>;
pub type Kilovolt = Prefixed<Kilo, Volt>;
coherent_unit!(pub Farad: DimCapacitance, "F");
pub type Microfarad = Prefixed<Micro, Farad>;

#[cfg(test)]
mod tests {
    use super::*;
    use quanta_units::{same_unit, unit_text, Product, Ratio, Unit};

    #[test]
    fn test_symbols() {
        assert_eq!(unit_text::<Millimetre>(), "mm");
        assert_eq!(unit_text::<Centimetre>(), "cm");
        assert_eq!(unit_text::<Decimetre>(), "dm");
        assert_eq!(unit_text::<Kilometre>(), "km");
        assert_eq!(unit_text::<Kilogram>(), "kg");
        assert_eq!(unit_text::<Nanosecond>(), "ns");
        assert_eq!(unit_text::<Microsecond>(), "µs");
        assert_eq!(unit_text::<Millisecond>(), "ms");
        assert_eq!(unit_text::<Millihertz>(), "mHz");
        assert_eq!(unit_text::<Terahertz>(), "THz");
        assert_eq!(unit_text::<Gigajoule>(), "GJ");
        assert_eq!(unit_text::<Megawatt>(), "MW");
    }

    #[test]
    fn test_structural_symbols() {
        assert_eq!(unit_text::<MetrePerSecond>(), "m/s");
        assert_eq!(unit_text::<MetrePerSecondSquared>(), "m/s²");
        assert_eq!(unit_text::<SquareMetre>(), "m²");
        assert_eq!(unit_text::<CubicMetre>(), "m³");
        assert_eq!(unit_text::<SquareKilometre>(), "km²");
        assert_eq!(unit_text::<NewtonPerMetre>(), "N/m");
        assert_eq!(unit_text::<Product<Newton, Metre>>(), "N·m");
        assert_eq!(unit_text::<KilometrePerHour>(), "km/h");
        assert_eq!(unit_text::<PerSecond>(), "1/s");
    }

    #[test]
    fn test_ratios() {
        assert_eq!(AstronomicalUnit::RATIO, Ratio::new(149_597_870_700, 1));
        assert_eq!(Day::RATIO, Ratio::new(86_400, 1));
        assert_eq!(Mile::RATIO, Ratio::new_exp(1_609_344, 1, -3));
        assert_eq!(KilometrePerHour::RATIO, Ratio::new(5, 18));
        assert_eq!(Ounce::RATIO, Ratio::new_exp(45_359_237, 16, -8));
    }

    #[test]
    fn test_equivalent_units() {
        assert!(same_unit::<Litre, CubicDecimetre>());
        assert!(same_unit::<Prefixed<crate::prefixes::Kilo, Gram>, Kilogram>());
        assert!(same_unit::<Quotient<Newton, SquareMetre>, Pascal>());
        assert!(same_unit::<Product<Newton, Metre>, Joule>());
        assert!(same_unit::<Inverse<Millisecond>, Kilohertz>());
        assert!(!same_unit::<Joule, Product<Newton, Kilometre>>());
    }
}
