//! The SI dimension table

use std::sync::LazyLock;
use quanta_units::{BaseDimension, Dimension, DimensionDef, DimensionRegistry};

/// Named SI dimensions, each defined from base or earlier dimensions
pub const SI_DIMENSIONS: &[DimensionDef] = &[
    DimensionDef::base("length", BaseDimension::Length),
    DimensionDef::base("mass", BaseDimension::Mass),
    DimensionDef::base("time", BaseDimension::Time),
    DimensionDef::base("electric_current", BaseDimension::ElectricCurrent),
    DimensionDef::base("thermodynamic_temperature", BaseDimension::ThermodynamicTemperature),
    DimensionDef::base("amount_of_substance", BaseDimension::AmountOfSubstance),
    DimensionDef::base("luminous_intensity", BaseDimension::LuminousIntensity),
    DimensionDef::power("frequency", "time", -1),
    DimensionDef::power("area", "length", 2),
    DimensionDef::power("volume", "length", 3),
    DimensionDef::quotient("velocity", "length", "time"),
    DimensionDef::quotient("acceleration", "velocity", "time"),
    DimensionDef::product("force", "mass", "acceleration"),
    DimensionDef::quotient("pressure", "force", "area"),
    DimensionDef::product("energy", "force", "length"),
    DimensionDef::quotient("power", "energy", "time"),
    DimensionDef::product("electric_charge", "electric_current", "time"),
    DimensionDef::quotient("voltage", "power", "electric_current"),
    DimensionDef::quotient("capacitance", "electric_charge", "voltage"),
    DimensionDef::quotient("surface_tension", "force", "length"),
];

/// Registry built from `SI_DIMENSIONS` on first use
pub static SI: LazyLock<DimensionRegistry> = LazyLock::new(|| {
    match DimensionRegistry::new(SI_DIMENSIONS) {
        Ok(registry) => registry,
        Err(err) => panic!("invalid SI dimension table: {}", err),
    }
});

/// SI name of a dimension type, e.g. "pressure" for `N/m²` quantities
pub fn dimension_name<D: Dimension>() -> Option<&'static str> {
    SI.name_of_dimension::<D>()
}
