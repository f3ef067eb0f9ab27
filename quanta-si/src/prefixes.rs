//! SI prefixes from 10⁻¹⁸ to 10¹⁸

use quanta_units::prefix;

prefix!(pub Atto, "a", -18);
prefix!(pub Femto, "f", -15);
prefix!(pub Pico, "p", -12);
prefix!(pub Nano, "n", -9);
prefix!(pub Micro, "µ", -6);
prefix!(pub Milli, "m", -3);
prefix!(pub Centi, "c", -2);
prefix!(pub Deci, "d", -1);
prefix!(pub Deca, "da", 1);
prefix!(pub Hecto, "h", 2);
prefix!(pub Kilo, "k", 3);
prefix!(pub Mega, "M", 6);
prefix!(pub Giga, "G", 9);
prefix!(pub Tera, "T", 12);
prefix!(pub Peta, "P", 15);
prefix!(pub Exa, "E", 18);
