//! Fixed-precision rendering of magnitudes
//!
//! The same rendering drives both display and equality, so two lengths are
//! equal exactly when they print the same in metres.

/// Fractional digits kept when rendering a magnitude
pub const DISPLAY_PRECISION: usize = 3;

/// Render a magnitude with `DISPLAY_PRECISION` fractional digits, trimmed.
///
/// `6.5620` -> `6.562`, `90.0` -> `90`, `0.0833333` -> `0.083`
pub fn format_quantity(value: f64) -> String {
    format_fixed(value, DISPLAY_PRECISION)
}

/// Render with exactly `places` fractional digits, then drop trailing zeros
/// and a dangling decimal point.
pub fn format_fixed(value: f64, places: usize) -> String {
    let rendered = format!("{:.*}", places, value);
    if !rendered.contains('.') {
        return normalize_zero(rendered);
    }

    let trimmed = rendered.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

    let result = if let Some(rest) = trimmed.strip_prefix('.') {
        format!("0.{}", rest)
    } else if let Some(rest) = trimmed.strip_prefix("-.") {
        format!("-0.{}", rest)
    } else {
        trimmed.to_string()
    };

    normalize_zero(result)
}

// Small negatives round to "-0", which must compare equal to "0".
fn normalize_zero(s: String) -> String {
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
