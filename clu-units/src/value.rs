//! Comparison operands
//!
//! `Length::equals` accepts any of these and refuses everything that is not
//! a length, rather than quietly answering `false`.

use serde::{Deserialize, Serialize};
use crate::{Length, UnitDefinition};

/// A value a length may be compared against
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Length(Length),
    Unit(UnitDefinition),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_length(&self) -> Option<&Length> {
        match self {
            Value::Length(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&UnitDefinition> {
        match self {
            Value::Unit(u) => Some(u),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Length(_) => "length",
            Value::Unit(_) => "unit",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
        }
    }
}

impl From<Length> for Value {
    fn from(length: Length) -> Self {
        Value::Length(length)
    }
}

impl From<UnitDefinition> for Value {
    fn from(unit: UnitDefinition) -> Self {
        Value::Unit(unit)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
