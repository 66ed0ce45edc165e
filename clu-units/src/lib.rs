//! CLU Units - Lengths and the units they are measured in
//!
//! Provides an extensible registry of length units and an immutable
//! `Length` value with conversion, restricted addition, precision-tolerant
//! equality and mixed-unit parsing.
//!
//! Built-in units:
//! - `in` (inches, 0.0254 m)
//! - `m` (metres, the base unit)
//! - `yd` (yards, 0.9144 m)

mod unit;
mod units;
mod length;
mod parse;
mod value;

pub use unit::UnitDefinition;
pub use units::{with_units, with_units_mut, UnitRegistry};
pub use length::Length;
pub use value::Value;
