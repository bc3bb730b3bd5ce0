//! Parse-or-default handling for raw form values.
//!
//! Parsing follows the browser's `parseFloat`: leading whitespace is skipped
//! and the longest numeric prefix wins, so `"12.5 cm"` reads as `12.5`. On top
//! of that, anything that is not a finite, non-negative number is rejected
//! and callers fall back to 0.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("no numeric value in {0:?}")]
    NotANumber(String),
    #[error("{0:?} is not a finite number")]
    NotFinite(String),
    #[error("{0} is negative")]
    Negative(f64),
}

/// Parse a measurement, rejecting NaN, infinities and negative values.
pub fn parse_measure(raw: &str) -> Result<f64, MeasureError> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with("Infinity") {
        return Err(MeasureError::NotFinite(raw.to_string()));
    }

    let prefix = numeric_prefix(trimmed);
    if prefix.is_empty() {
        return Err(MeasureError::NotANumber(raw.to_string()));
    }
    let value: f64 = prefix
        .parse()
        .map_err(|_| MeasureError::NotANumber(raw.to_string()))?;

    if !value.is_finite() {
        return Err(MeasureError::NotFinite(raw.to_string()));
    }
    if value < 0.0 {
        return Err(MeasureError::Negative(value));
    }
    // -0 would otherwise print as "-0" in labels.
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// [`parse_measure`], falling back to 0 on any error.
pub fn parse_or_zero(raw: &str) -> f64 {
    parse_measure(raw).unwrap_or_else(|err| {
        log::debug!("[measure] {err}; using 0");
        0.0
    })
}

/// Longest prefix of `s` matching `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?`
/// with at least one mantissa digit. Empty if there is none.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &s[..end]
}
