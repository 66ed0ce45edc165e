//! Structured errors for length operations
//!
//! Every failure is surfaced to the caller at the point of the offending
//! operation. Nothing is retried or masked, and no operation leaves a partial
//! result behind.

use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INVALID_UNIT_ORDER: &str = "INVALID_UNIT_ORDER";
    pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
    pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
    pub const INVALID_DEFINITION: &str = "INVALID_DEFINITION";
}

/// Error type for registry, conversion, comparison and parsing operations
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LengthError {
    /// Symbol is not present in the unit registry
    #[error("unknown unit: {symbol}")]
    UnknownUnit { symbol: String },

    /// Addend unit is not strictly smaller than the accumulator unit
    #[error("units must be strictly decreasing: cannot add {addend} to {accumulator}")]
    InvalidUnitOrder { accumulator: String, addend: String },

    /// Text does not have the `<number> <symbol> ...` shape
    #[error("malformed length '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    /// Equality attempted against something that is not a length
    #[error("only lengths can be compared for equality: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Unit definition can never take part in a valid length
    #[error("invalid unit definition '{symbol}': {reason}")]
    InvalidDefinition { symbol: String, reason: String },
}

impl LengthError {
    pub fn unknown_unit(symbol: impl Into<String>) -> Self {
        LengthError::UnknownUnit {
            symbol: symbol.into(),
        }
    }

    pub fn invalid_order(accumulator: impl Into<String>, addend: impl Into<String>) -> Self {
        LengthError::InvalidUnitOrder {
            accumulator: accumulator.into(),
            addend: addend.into(),
        }
    }

    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        LengthError::MalformedInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn type_mismatch(found: &'static str) -> Self {
        LengthError::TypeMismatch {
            expected: "length",
            found,
        }
    }

    pub fn invalid_definition(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        LengthError::InvalidDefinition {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            LengthError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            LengthError::InvalidUnitOrder { .. } => codes::INVALID_UNIT_ORDER,
            LengthError::MalformedInput { .. } => codes::MALFORMED_INPUT,
            LengthError::TypeMismatch { .. } => codes::TYPE_MISMATCH,
            LengthError::InvalidDefinition { .. } => codes::INVALID_DEFINITION,
        }
    }
}
