//! Runtime dimension registry
//!
//! A declarative table of named dimensions, expanded once into exponent
//! vectors. The table is checked as a whole when the registry is built:
//! duplicate names, references to undefined dimensions and cyclic
//! definitions are rejected up front, never per lookup.

use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, trace};
use quanta_core::{BaseDimension, Exponents};
use crate::dimension::Dimension;

/// How a named dimension is formed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    Base(BaseDimension),
    Product(&'static str, &'static str),
    Quotient(&'static str, &'static str),
    Power(&'static str, i32),
    Root(&'static str, i32),
}

/// One row of a dimension table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionDef {
    pub name: &'static str,
    pub recipe: Recipe,
}

impl DimensionDef {
    pub const fn base(name: &'static str, base: BaseDimension) -> Self {
        DimensionDef { name, recipe: Recipe::Base(base) }
    }

    pub const fn product(name: &'static str, a: &'static str, b: &'static str) -> Self {
        DimensionDef { name, recipe: Recipe::Product(a, b) }
    }

    pub const fn quotient(name: &'static str, a: &'static str, b: &'static str) -> Self {
        DimensionDef { name, recipe: Recipe::Quotient(a, b) }
    }

    pub const fn power(name: &'static str, a: &'static str, n: i32) -> Self {
        DimensionDef { name, recipe: Recipe::Power(a, n) }
    }

    pub const fn root(name: &'static str, a: &'static str, n: i32) -> Self {
        DimensionDef { name, recipe: Recipe::Root(a, n) }
    }
}

/// Error type for dimension tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Dimension '{0}' is defined more than once")]
    Duplicate(String),

    #[error("Dimension '{name}' refers to undefined dimension '{missing}'")]
    Unknown { name: String, missing: String },

    #[error("Cyclic dimension definition: {}", .0.join(" → "))]
    Cycle(Vec<String>),

    #[error("Dimension '{name}' takes a root of degree {degree}")]
    InvalidRoot { name: String, degree: i32 },
}

/// Named dimensions and their expansions, in definition order
#[derive(Debug, Clone)]
pub struct DimensionRegistry {
    entries: Vec<(&'static str, Exponents)>,
    index: HashMap<&'static str, usize>,
}

impl DimensionRegistry {
    /// Expand every definition of the table
    pub fn new(defs: &[DimensionDef]) -> Result<Self, RegistryError> {
        let mut recipes = HashMap::with_capacity(defs.len());
        for def in defs {
            if recipes.insert(def.name, def.recipe).is_some() {
                return Err(RegistryError::Duplicate(def.name.to_string()));
            }
        }

        let mut expander = Expander {
            recipes: &recipes,
            expanded: HashMap::with_capacity(defs.len()),
            path: Vec::new(),
        };
        let mut entries = Vec::with_capacity(defs.len());
        let mut index = HashMap::with_capacity(defs.len());
        for def in defs {
            let exponents = expander.expand(def.name)?;
            index.insert(def.name, entries.len());
            entries.push((def.name, exponents));
        }

        debug!(dimensions = entries.len(), "dimension registry populated");
        Ok(DimensionRegistry { entries, index })
    }

    /// Exponent vector of a named dimension
    pub fn expand(&self, name: &str) -> Option<Exponents> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    /// First registered name with these exponents
    pub fn name_of(&self, exponents: &Exponents) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, e)| e == exponents)
            .map(|(name, _)| *name)
    }

    /// First registered name of a dimension type
    pub fn name_of_dimension<D: Dimension>(&self) -> Option<&'static str> {
        self.name_of(&D::EXPONENTS)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names and expansions in definition order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Exponents)> + '_ {
        self.entries.iter().copied()
    }
}

/// Depth-first expansion with memoization; `path` holds the definitions
/// currently being expanded
struct Expander<'a> {
    recipes: &'a HashMap<&'static str, Recipe>,
    expanded: HashMap<&'static str, Exponents>,
    path: Vec<&'static str>,
}

impl Expander<'_> {
    fn expand(&mut self, name: &'static str) -> Result<Exponents, RegistryError> {
        if let Some(exponents) = self.expanded.get(name) {
            return Ok(*exponents);
        }
        if let Some(start) = self.path.iter().position(|n| *n == name) {
            let mut cycle: Vec<String> = self.path[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            return Err(RegistryError::Cycle(cycle));
        }
        let recipe = match self.recipes.get(name) {
            Some(recipe) => *recipe,
            None => {
                return Err(RegistryError::Unknown {
                    name: self.path.last().copied().unwrap_or(name).to_string(),
                    missing: name.to_string(),
                })
            }
        };

        self.path.push(name);
        let exponents = match recipe {
            Recipe::Base(base) => Exponents::base(base),
            Recipe::Product(a, b) => self.expand(a)?.multiply(self.expand(b)?),
            Recipe::Quotient(a, b) => self.expand(a)?.divide(self.expand(b)?),
            Recipe::Power(a, n) => self.expand(a)?.pow(n),
            Recipe::Root(_, n) if n <= 0 => {
                return Err(RegistryError::InvalidRoot { name: name.to_string(), degree: n })
            }
            Recipe::Root(a, n) => self.expand(a)?.root(n),
        };
        self.path.pop();

        trace!(dimension = name, exponents = %exponents, "expanded dimension");
        self.expanded.insert(name, exponents);
        Ok(exponents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanta_core::Exponent;

    const TABLE: &[DimensionDef] = &[
        DimensionDef::base("length", BaseDimension::Length),
        DimensionDef::base("mass", BaseDimension::Mass),
        DimensionDef::base("time", BaseDimension::Time),
        DimensionDef::quotient("velocity", "length", "time"),
        DimensionDef::quotient("acceleration", "velocity", "time"),
        DimensionDef::product("force", "mass", "acceleration"),
        DimensionDef::power("area", "length", 2),
        DimensionDef::quotient("pressure", "force", "area"),
        DimensionDef::quotient("surface_tension", "force", "length"),
        DimensionDef::quotient("stiffness", "force", "length"),
        DimensionDef::root("sqrt_length", "length", 2),
    ];

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_expand_table() {
        init_tracing();
        let registry = DimensionRegistry::new(TABLE).unwrap();
        assert_eq!(registry.len(), TABLE.len());
        assert_eq!(
            registry.expand("pressure"),
            Some(Exponents::from_integers([-1, 1, -2, 0, 0, 0, 0]))
        );
        assert_eq!(
            registry.expand("sqrt_length").map(|e| e.get(BaseDimension::Length)),
            Some(Exponent::new(1, 2))
        );
        assert_eq!(registry.expand("volume"), None);
    }

    #[test]
    fn test_name_of() {
        let registry = DimensionRegistry::new(TABLE).unwrap();
        let force = Exponents::from_integers([1, 1, -2, 0, 0, 0, 0]);
        assert_eq!(registry.name_of(&force), Some("force"));
        // surface tension and stiffness share M·T⁻²
        let tension = registry.expand("surface_tension").unwrap();
        assert_eq!(registry.expand("stiffness"), Some(tension));
        assert_eq!(registry.name_of(&tension), Some("surface_tension"));
        assert_eq!(registry.name_of(&Exponents::base(BaseDimension::ElectricCurrent)), None);
    }

    #[test]
    fn test_iteration_order() {
        let registry = DimensionRegistry::new(TABLE).unwrap();
        let names: Vec<_> = registry.iter().map(|(name, _)| name).take(4).collect();
        assert_eq!(names, ["length", "mass", "time", "velocity"]);
        assert!(registry.contains("area"));
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate() {
        let table = [
            DimensionDef::base("length", BaseDimension::Length),
            DimensionDef::base("length", BaseDimension::Mass),
        ];
        assert_eq!(
            DimensionRegistry::new(&table).unwrap_err(),
            RegistryError::Duplicate("length".to_string())
        );
    }

    #[test]
    fn test_unknown_reference() {
        let table = [
            DimensionDef::base("length", BaseDimension::Length),
            DimensionDef::quotient("velocity", "length", "time"),
        ];
        let err = DimensionRegistry::new(&table).unwrap_err();
        assert_eq!(err.to_string(), "Dimension 'velocity' refers to undefined dimension 'time'");
    }

    #[test]
    fn test_cycle() {
        init_tracing();
        let table = [
            DimensionDef::base("length", BaseDimension::Length),
            DimensionDef::product("a", "length", "b"),
            DimensionDef::power("b", "c", 2),
            DimensionDef::quotient("c", "a", "length"),
        ];
        let err = DimensionRegistry::new(&table).unwrap_err();
        assert_eq!(
            err,
            RegistryError::Cycle(vec!["a".into(), "b".into(), "c".into(), "a".into()])
        );
        assert_eq!(err.to_string(), "Cyclic dimension definition: a → b → c → a");
    }

    #[test]
    fn test_self_reference() {
        let table = [DimensionDef::power("a", "a", 2)];
        assert_eq!(
            DimensionRegistry::new(&table).unwrap_err(),
            RegistryError::Cycle(vec!["a".into(), "a".into()])
        );
    }

    #[test]
    fn test_invalid_root() {
        let table = [
            DimensionDef::base("length", BaseDimension::Length),
            DimensionDef::root("bad", "length", 0),
        ];
        assert!(matches!(
            DimensionRegistry::new(&table),
            Err(RegistryError::InvalidRoot { degree: 0, .. })
        ));
    }
}
