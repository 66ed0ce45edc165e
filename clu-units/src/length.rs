//! Length type - a magnitude with an associated unit of length

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use clu_core::{format_quantity, LengthError};
use crate::{UnitDefinition, Value};
use crate::units::with_units;

/// An immutable length: a real magnitude expressed in a resolved unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Length {
    magnitude: f64,
    unit: UnitDefinition,
}

impl Length {
    /// Create a length from an already-resolved unit
    pub fn new(magnitude: f64, unit: UnitDefinition) -> Self {
        Length { magnitude, unit }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &UnitDefinition {
        &self.unit
    }

    pub fn symbol(&self) -> &str {
        &self.unit.symbol
    }

    /// The magnitude expressed in metres
    pub fn base_magnitude(&self) -> f64 {
        self.unit.to_metres(self.magnitude)
    }

    /// Rescale into `target`
    pub fn to_unit(&self, target: &UnitDefinition) -> Length {
        Length::new(target.from_metres(self.base_magnitude()), target.clone())
    }

    /// Rescale into the unit named by `symbol` in the process-wide registry
    pub fn convert_to(&self, symbol: &str) -> Result<Length, LengthError> {
        with_units(|units| units.convert(self, symbol))
    }

    /// Add a length expressed in a strictly smaller unit.
    ///
    /// The result is in `other`'s unit. Adding a same-sized or larger unit
    /// fails with `InvalidUnitOrder`.
    pub fn add(&self, other: &Length) -> Result<Length, LengthError> {
        if !other.unit.is_smaller_unit_than(&self.unit) {
            return Err(LengthError::invalid_order(&self.unit.symbol, &other.unit.symbol));
        }
        let carried = self.to_unit(&other.unit);
        Ok(Length::new(carried.magnitude + other.magnitude, other.unit.clone()))
    }

    /// Compare against any value; only lengths can be compared.
    pub fn equals(&self, other: &Value) -> Result<bool, LengthError> {
        match other {
            Value::Length(length) => Ok(self.same_length(length)),
            other => Err(LengthError::type_mismatch(other.type_name())),
        }
    }

    /// Equal when both render identically in metres
    pub fn same_length(&self, other: &Length) -> bool {
        format_quantity(self.base_magnitude()) == format_quantity(other.base_magnitude())
    }

    /// The magnitude rendered with display precision
    pub fn format_quantity(&self) -> String {
        format_quantity(self.magnitude)
    }

    /// e.g. `"6.562 yd"`
    pub fn to_display_string(&self) -> String {
        format!("{} {}", self.format_quantity(), self.unit.symbol)
    }

    /// e.g. `"3 yards"`
    pub fn to_long_display_string(&self) -> String {
        format!("{} {}", self.format_quantity(), self.unit.name)
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.same_length(other)
    }
}

impl fmt::Display for Length {
    /// `{}` renders the symbol form, `{:#}` the long form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_long_display_string())
        } else {
            write!(f, "{}", self.to_display_string())
        }
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        with_units(|units| units.parse(s))
    }
}
