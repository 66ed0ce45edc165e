//! Unit representation with its conversion factor to metres

use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};
use clu_core::LengthError;

/// A unit of length: symbol, display name and size in metres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// The unit symbol (e.g., "m", "in", "yd")
    pub symbol: String,
    /// The display name (e.g., "metres", "inches")
    pub name: String,
    /// Factor to convert to metres (value_m = value * metres_per_unit)
    pub metres_per_unit: f64,
}

impl UnitDefinition {
    /// Symbol of the base unit every factor is relative to
    pub const BASE_SYMBOL: &'static str = "m";

    /// Create a new unit
    pub fn new(symbol: &str, name: &str, metres_per_unit: f64) -> Self {
        UnitDefinition {
            symbol: symbol.to_string(),
            name: name.to_string(),
            metres_per_unit,
        }
    }

    /// Create a unit, rejecting definitions no length could be built from
    pub fn try_new(symbol: &str, name: &str, metres_per_unit: f64) -> Result<Self, LengthError> {
        if symbol.is_empty() {
            return Err(LengthError::invalid_definition(symbol, "symbol is empty"));
        }
        if symbol.chars().any(char::is_whitespace) {
            return Err(LengthError::invalid_definition(symbol, "symbol contains whitespace"));
        }
        if !metres_per_unit.is_finite() || metres_per_unit <= 0.0 {
            return Err(LengthError::invalid_definition(
                symbol,
                format!("metres per unit must be positive and finite, got {}", metres_per_unit),
            ));
        }
        Ok(Self::new(symbol, name, metres_per_unit))
    }

    /// Check if this is the base unit
    pub fn is_base(&self) -> bool {
        self.symbol == Self::BASE_SYMBOL
    }

    /// True when this unit is strictly smaller than `other`
    pub fn is_smaller_unit_than(&self, other: &UnitDefinition) -> bool {
        self.metres_per_unit < other.metres_per_unit
    }

    /// Order two units by physical size
    pub fn compare_size(&self, other: &UnitDefinition) -> Ordering {
        self.metres_per_unit.total_cmp(&other.metres_per_unit)
    }

    /// Convert a value in this unit to metres
    pub fn to_metres(&self, value: f64) -> f64 {
        value * self.metres_per_unit
    }

    /// Convert a value in metres to this unit
    pub fn from_metres(&self, metres: f64) -> f64 {
        metres / self.metres_per_unit
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}
