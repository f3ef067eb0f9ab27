//! Named constructors, one per unit
//!
//! Each function takes any representation: `kilometres(1)` holds an `i32`,
//! `kilometres(1.5)` an `f64`.

use quanta_units::{Quantity, Representation};
use crate::dimensions::*;
use crate::units::*;

macro_rules! constructors {
    ($($name:ident => $quantity:ident<$unit:ty>;)*) => { $(
        #[doc = concat!("Quantity in `", stringify!($unit), "`")]
        pub fn $name<R: Representation>(value: R) -> $quantity<$unit, R> {
            Quantity::new(value)
        }
    )* };
}

constructors! {
    // length
    nanometres => Length<Nanometre>;
    micrometres => Length<Micrometre>;
    millimetres => Length<Millimetre>;
    centimetres => Length<Centimetre>;
    decimetres => Length<Decimetre>;
    metres => Length<Metre>;
    hectometres => Length<Hectometre>;
    kilometres => Length<Kilometre>;
    astronomical_units => Length<AstronomicalUnit>;
    inches => Length<Inch>;
    feet => Length<Foot>;
    yards => Length<Yard>;
    miles => Length<Mile>;

    // mass
    micrograms => Mass<Microgram>;
    milligrams => Mass<Milligram>;
    grams => Mass<Gram>;
    kilograms => Mass<Kilogram>;
    tonnes => Mass<Tonne>;
    pounds => Mass<Pound>;
    ounces => Mass<Ounce>;

    // time
    nanoseconds => Time<Nanosecond>;
    microseconds => Time<Microsecond>;
    milliseconds => Time<Millisecond>;
    seconds => Time<Second>;
    minutes => Time<Minute>;
    hours => Time<Hour>;
    days => Time<Day>;
    weeks => Time<Week>;

    // other base dimensions
    milliamperes => ElectricCurrent<Milliampere>;
    amperes => ElectricCurrent<Ampere>;
    kelvins => ThermodynamicTemperature<Kelvin>;
    millimoles => AmountOfSubstance<Millimole>;
    moles => AmountOfSubstance<Mole>;
    candelas => LuminousIntensity<Candela>;

    // frequency
    millihertz => Frequency<Millihertz>;
    hertz => Frequency<Hertz>;
    kilohertz => Frequency<Kilohertz>;
    megahertz => Frequency<Megahertz>;
    gigahertz => Frequency<Gigahertz>;
    terahertz => Frequency<Terahertz>;

    // area and volume
    square_centimetres => Area<SquareCentimetre>;
    square_metres => Area<SquareMetre>;
    square_kilometres => Area<SquareKilometre>;
    hectares => Area<Hectare>;
    cubic_centimetres => Volume<CubicCentimetre>;
    cubic_decimetres => Volume<CubicDecimetre>;
    cubic_metres => Volume<CubicMetre>;
    cubic_kilometres => Volume<CubicKilometre>;
    millilitres => Volume<Millilitre>;
    litres => Volume<Litre>;

    // kinematics
    metres_per_second => Velocity<MetrePerSecond>;
    kilometres_per_hour => Velocity<KilometrePerHour>;
    miles_per_hour => Velocity<MilePerHour>;
    metres_per_second_squared => Acceleration<MetrePerSecondSquared>;

    // mechanics
    newtons => Force<Newton>;
    kilonewtons => Force<Kilonewton>;
    pascals => Pressure<Pascal>;
    kilopascals => Pressure<Kilopascal>;
    bars => Pressure<Bar>;
    millijoules => Energy<Millijoule>;
    joules => Energy<Joule>;
    kilojoules => Energy<Kilojoule>;
    megajoules => Energy<Megajoule>;
    gigajoules => Energy<Gigajoule>;
    milliwatts => Power<Milliwatt>;
    watts => Power<Watt>;
    kilowatts => Power<Kilowatt>;
    megawatts => Power<Megawatt>;
    gigawatts => Power<Gigawatt>;
    newtons_per_metre => SurfaceTension<NewtonPerMetre>;

    // electromagnetism
    coulombs => ElectricCharge<Coulomb>;
    millivolts => Voltage<Millivolt>;
    volts => Voltage<Volt>;
    kilovolts => Voltage<Kilovolt>;
    microfarads => Capacitance<Microfarad>;
    farads => Capacitance<Farad>;
}
