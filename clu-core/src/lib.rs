//! CLU Core - Fundamental types
//!
//! This crate provides the pieces shared by every CLU crate:
//! - `LengthError`: structured errors with machine-readable codes
//! - `format_quantity`: the fixed-precision rendering used for display and equality

mod error;
mod format;

pub use error::{codes, LengthError};
pub use format::{format_fixed, format_quantity, DISPLAY_PRECISION};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{format_quantity, LengthError};
    pub use crate::error::codes;
}
