//! Quanta SI - The SI unit catalogue
//!
//! Dimensions, units, prefixes and named constructors for the International
//! System of Units, plus the CGS mechanical units.
//!
//! ```
//! use quanta_si::literals::*;
//! use quanta_si::units::{Metre, Pascal};
//!
//! let distance = kilometres_per_hour(2.0) * minutes(15.0);
//! assert_eq!(distance, metres(500.0));
//! assert_eq!(distance.in_unit::<Metre>(), 500.0);
//!
//! let pressure = newtons(10) / square_metres(10);
//! assert_eq!(pressure.cast::<Pascal>().to_string(), "1 Pa");
//! ```
//!
//! A length cannot become a duration:
//!
//! ```compile_fail
//! use quanta_si::literals::kilometres;
//! use quanta_si::units::Second;
//!
//! let _ = kilometres(1).cast::<Second>();
//! ```
//!
//! nor be added to one:
//!
//! ```compile_fail
//! use quanta_si::literals::{kilometres, seconds};
//!
//! let _ = kilometres(1) + seconds(1);
//! ```
//!
//! and comparing them does not build either:
//!
//! ```compile_fail
//! use quanta_si::literals::{metres, seconds};
//!
//! let _ = metres(1.0) < seconds(1.0);
//! ```
//!
//! Integral quantities only meet in a unit that both operands are whole
//! multiples of. 2 km/h for 15 min is 50/3 m, which metres cannot hold:
//!
//! ```compile_fail
//! use quanta_si::literals::{kilometres_per_hour, metres, minutes};
//!
//! let _ = kilometres_per_hour(2i64) * minutes(15i64) == metres(500i64);
//! ```
//!
//! and km/h against m/s has no such unit:
//!
//! ```compile_fail
//! use quanta_si::literals::{kilometres_per_hour, metres_per_second};
//!
//! let _ = kilometres_per_hour(36i64) + metres_per_second(10i64);
//! ```
//!
//! In floating point the finer unit is used and the sum stays in km/h:
//!
//! ```
//! use quanta_si::literals::{kilometres_per_hour, metres_per_second};
//!
//! let sum = kilometres_per_hour(3.6) + metres_per_second(1.0);
//! assert_eq!(sum.to_string(), "7.2 km/h");
//! ```

pub mod prefixes;
pub mod dimensions;
pub mod units;
pub mod cgs;
pub mod literals;
pub mod registry;

pub use dimensions::*;
pub use registry::{dimension_name, SI, SI_DIMENSIONS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::dimensions::*;
    pub use crate::units::*;
    pub use crate::literals::*;
    pub use quanta_units::prelude::*;
}
