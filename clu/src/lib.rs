//! CLU - Conversion between length units
//!
//! Free functions over the process-wide unit registry:
//!
//! ```
//! use clu::{make_length, parse_length, register_unit};
//!
//! register_unit("ft", "feet", 0.3048).unwrap();
//! let parsed = parse_length("4 yd 2 ft 2 in").unwrap();
//! assert_eq!(parsed, make_length(170.0, "in").unwrap());
//! assert_eq!(make_length(6.0, "m").unwrap().convert_to("yd").unwrap().to_display_string(), "6.562 yd");
//! ```
//!
//! Callers that want an isolated set of units build their own
//! `UnitRegistry` and use its `length`, `convert` and `parse` methods.

pub use clu_core::{codes, format_fixed, format_quantity, LengthError, DISPLAY_PRECISION};
pub use clu_units::{with_units, with_units_mut, Length, UnitDefinition, UnitRegistry, Value};

/// Add or replace a unit in the process-wide registry.
///
/// The definition is validated first; an existing unit with the same
/// symbol is replaced.
pub fn register_unit(symbol: &str, name: &str, metres_per_unit: f64) -> Result<(), LengthError> {
    let unit = UnitDefinition::try_new(symbol, name, metres_per_unit)?;
    register(unit);
    Ok(())
}

/// Add or replace an already-built unit. Always succeeds.
pub fn register(unit: UnitDefinition) {
    with_units_mut(|units| {
        units.register(unit);
    });
}

pub fn lookup_unit(symbol: &str) -> Result<UnitDefinition, LengthError> {
    with_units(|units| units.lookup(symbol).cloned())
}

pub fn make_length(magnitude: f64, symbol: &str) -> Result<Length, LengthError> {
    with_units(|units| units.length(magnitude, symbol))
}

/// Parse a mixed-unit expression such as `"4 yd 2 ft 2 in"`
pub fn parse_length(text: &str) -> Result<Length, LengthError> {
    with_units(|units| units.parse(text))
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        lookup_unit, make_length, parse_length, register_unit,
        Length, LengthError, UnitDefinition, UnitRegistry, Value,
    };
}
