//! Definition macros for dimensions, units and prefixes
//!
//! Each macro declares a zero-sized marker type and implements the matching
//! trait for it. Consistency checks run as item-level constant assertions,
//! so a bad definition fails the build where it is written.
//!
//! A dimension defined in terms of itself cannot be expanded:
//!
//! ```compile_fail
//! use quanta_units::{derived_dimension, One};
//!
//! derived_dimension!(DimA = DimB * DimB, "a", coherent One);
//! derived_dimension!(DimB = DimA / DimA, "b", coherent One);
//!
//! let _ = <DimA as quanta_units::Dimension>::EXPONENTS;
//! ```

/// Define a base dimension and its coherent unit
///
/// ```
/// use quanta_units::{base_dimension, coherent_unit, Dimension};
///
/// base_dimension!(pub DimLength = Length, "length", coherent Metre);
/// coherent_unit!(pub Metre: DimLength, "m");
///
/// assert_eq!(DimLength::NAME, Some("length"));
/// ```
#[macro_export]
macro_rules! base_dimension {
    ($(#[$meta:meta])* $vis:vis $name:ident = $base:ident, $label:literal, coherent $unit:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::Dimension for $name {
            const EXPONENTS: $crate::Exponents =
                $crate::Exponents::base($crate::BaseDimension::$base);
            const NAME: ::std::option::Option<&'static str> = ::std::option::Option::Some($label);
            type Coherent = $unit;
        }

        $crate::__check_coherent!($name, $label, $unit);
    };
}

/// Define a named derived dimension
///
/// The recipe is `A * B`, `A / B`, `A ^ N`, or any dimension type.
///
/// ```
/// use quanta_units::{base_dimension, coherent_unit, derived_dimension, Dimension, Quotient};
///
/// base_dimension!(DimLength = Length, "length", coherent Metre);
/// base_dimension!(DimTime = Time, "time", coherent Second);
/// coherent_unit!(Metre: DimLength, "m");
/// coherent_unit!(Second: DimTime, "s");
/// derived_dimension!(DimVelocity = DimLength / DimTime, "velocity", coherent Quotient<Metre, Second>);
///
/// assert_eq!(DimVelocity::EXPONENTS.to_string(), "L·T⁻¹");
/// ```
#[macro_export]
macro_rules! derived_dimension {
    (@define [$($meta:tt)*] $vis:vis $name:ident, $recipe:ty, $label:literal, $unit:ty) => {
        $($meta)*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::Dimension for $name {
            const EXPONENTS: $crate::Exponents = <$recipe as $crate::Dimension>::EXPONENTS;
            const NAME: ::std::option::Option<&'static str> = ::std::option::Option::Some($label);
            type Coherent = $unit;
        }

        $crate::__check_coherent!($name, $label, $unit);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident = $a:ident * $b:ident, $label:literal, coherent $unit:ty) => {
        $crate::derived_dimension!(@define [$(#[$meta])*] $vis $name, $crate::DimProduct<$a, $b>, $label, $unit);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident = $a:ident / $b:ident, $label:literal, coherent $unit:ty) => {
        $crate::derived_dimension!(@define [$(#[$meta])*] $vis $name, $crate::DimQuotient<$a, $b>, $label, $unit);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident = $a:ident ^ $n:literal, $label:literal, coherent $unit:ty) => {
        $crate::derived_dimension!(@define [$(#[$meta])*] $vis $name, $crate::DimPower<$a, $n>, $label, $unit);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident = $recipe:ty, $label:literal, coherent $unit:ty) => {
        $crate::derived_dimension!(@define [$(#[$meta])*] $vis $name, $recipe, $label, $unit);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_coherent {
    ($name:ident, $label:literal, $unit:ty) => {
        const _: () = {
            ::std::assert!(
                $crate::same_dimension::<$name, <$unit as $crate::Unit>::Dim>(),
                ::std::concat!("coherent unit of ", $label, " measures another dimension"),
            );
            ::std::assert!(
                <$unit as $crate::Unit>::RATIO.is_one(),
                ::std::concat!("coherent unit of ", $label, " must have a ratio of one"),
            );
        };
    };
}

/// Define a named unit with ratio one
///
/// The unit may belong to a base or a derived dimension: `Newton` is the
/// coherent unit of force just like `Metre` is of length.
#[macro_export]
macro_rules! coherent_unit {
    ($(#[$meta:meta])* $vis:vis $name:ident : $dim:ty, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::Unit for $name {
            type Dim = $dim;
            const RATIO: $crate::Ratio = $crate::Ratio::ONE;

            fn terms() -> ::std::vec::Vec<$crate::Term> {
                ::std::vec![$crate::Term::named($symbol)]
            }
        }
    };
}

/// Define a named unit as a multiple of another unit
///
/// ```
/// use quanta_units::{base_dimension, coherent_unit, named_unit, Ratio, Unit};
///
/// base_dimension!(DimTime = Time, "time", coherent Second);
/// coherent_unit!(Second: DimTime, "s");
/// named_unit!(Minute: DimTime = 60 * Second, "min");
/// named_unit!(Hour: DimTime = 60 * Minute, "h");
/// named_unit!(Centisecond: DimTime = 1 / 100 * Second, "cs");
///
/// assert_eq!(Hour::RATIO, Ratio::new(3600, 1));
/// assert_eq!(Hour::symbol(), "h");
/// ```
///
/// The base unit must measure the declared dimension:
///
/// ```compile_fail
/// use quanta_units::{base_dimension, coherent_unit, named_unit};
///
/// base_dimension!(DimLength = Length, "length", coherent Metre);
/// base_dimension!(DimTime = Time, "time", coherent Second);
/// coherent_unit!(Metre: DimLength, "m");
/// coherent_unit!(Second: DimTime, "s");
/// named_unit!(Minute: DimLength = 60 * Second, "min");
/// ```
#[macro_export]
macro_rules! named_unit {
    ($(#[$meta:meta])* $vis:vis $name:ident : $dim:ty = $num:literal / $den:literal * $base:ty, $symbol:literal) => {
        $crate::named_unit!(@define [$(#[$meta])*] $vis $name, $dim, $crate::Ratio::new($num, $den), $base, $symbol);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident : $dim:ty = $num:literal * $base:ty, $symbol:literal) => {
        $crate::named_unit!(@define [$(#[$meta])*] $vis $name, $dim, $crate::Ratio::new($num, 1), $base, $symbol);
    };
    ($(#[$meta:meta])* $vis:vis $name:ident : $dim:ty = $base:ty, $symbol:literal) => {
        $crate::named_unit!(@define [$(#[$meta])*] $vis $name, $dim, $crate::Ratio::ONE, $base, $symbol);
    };
    (@define [$($meta:tt)*] $vis:vis $name:ident, $dim:ty, $ratio:expr, $base:ty, $symbol:literal) => {
        $($meta)*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::Unit for $name {
            type Dim = $dim;
            const RATIO: $crate::Ratio = $ratio.multiply(<$base as $crate::Unit>::RATIO);

            fn terms() -> ::std::vec::Vec<$crate::Term> {
                ::std::vec![$crate::Term::named($symbol)]
            }
        }

        const _: () = ::std::assert!(
            $crate::same_dimension::<$dim, <$base as $crate::Unit>::Dim>(),
            ::std::concat!("unit ", $symbol, " is defined from a unit of another dimension"),
        );
    };
}

/// Define a metric prefix as a power of ten
#[macro_export]
macro_rules! prefix {
    ($(#[$meta:meta])* $vis:vis $name:ident, $symbol:literal, $exp:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {}

        impl $crate::Prefix for $name {
            const SYMBOL: &'static str = $symbol;
            const RATIO: $crate::Ratio = $crate::Ratio::exp10($exp);
        }
    };
}
