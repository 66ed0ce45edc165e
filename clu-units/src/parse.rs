//! Mixed-unit length parsing - expressions like "4 yd 2 ft 2 in"
//!
//! Grammar: `<number> <symbol> (<number> <symbol>)*`, tokens separated by
//! single spaces. The first pair starts the running total and every later
//! pair is added to it, so each unit must be strictly smaller than the one
//! before it.

use clu_core::LengthError;
use crate::{Length, UnitRegistry};

/// Parse `text` against `registry`
pub(crate) fn parse_with(registry: &UnitRegistry, text: &str) -> Result<Length, LengthError> {
    let result = parse_pairs(registry, text);
    if let Err(e) = &result {
        tracing::debug!(code = e.code(), input = text, "rejected length expression");
    }
    result
}

fn parse_pairs(registry: &UnitRegistry, text: &str) -> Result<Length, LengthError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(LengthError::malformed(text, "empty input"));
    }

    let tokens: Vec<&str> = trimmed.split(' ').collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(LengthError::malformed(text, "tokens must be separated by single spaces"));
    }
    if tokens.len() % 2 != 0 {
        return Err(LengthError::malformed(
            text,
            format!("expected <number> <unit> pairs, found {} tokens", tokens.len()),
        ));
    }

    let mut total: Option<Length> = None;
    for pair in tokens.chunks_exact(2) {
        let magnitude = parse_magnitude(text, pair[0])?;
        let next = registry.length(magnitude, pair[1])?;
        tracing::trace!(magnitude, symbol = pair[1], "parsed length pair");

        total = Some(match total {
            None => next,
            Some(so_far) => so_far.add(&next)?,
        });
    }

    total.ok_or_else(|| LengthError::malformed(text, "no <number> <unit> pairs"))
}

fn parse_magnitude(text: &str, token: &str) -> Result<f64, LengthError> {
    let value: f64 = token.parse()
        .map_err(|_| LengthError::malformed(text, format!("invalid number: {}", token)))?;
    if !value.is_finite() {
        return Err(LengthError::malformed(text, format!("magnitude must be finite: {}", token)));
    }
    Ok(value)
}
