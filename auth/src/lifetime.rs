//! Token lifetime configuration.
//!
//! Lifetimes are configured as duration strings such as `"60m"`, `"1.5h"` or
//! `"1h30m"`: a sequence of decimal numbers, each with an optional fraction
//! and a unit suffix (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`), optionally
//! preceded by a sign.

use chrono::Duration;
use thiserror::Error;

/// Lifetime applied when none is configured.
pub const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 60;

const UNITS: [(&str, i128); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
];

/// Error type for duration parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("Invalid duration: {0:?}")]
    Invalid(String),

    #[error("Missing unit in duration: {0:?}")]
    MissingUnit(String),

    #[error("Unknown unit {unit:?} in duration: {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("Duration out of range: {0:?}")]
    Overflow(String),
}

/// Resolve the token lifetime from an optional configured value.
///
/// Unset or blank values fall back to [`DEFAULT_TOKEN_LIFETIME_MINUTES`].
///
/// # Errors
/// * `DurationError` - The value is present but malformed
pub fn token_lifetime(configured: Option<&str>) -> Result<Duration, DurationError> {
    match configured.map(str::trim) {
        None | Some("") => Ok(Duration::minutes(DEFAULT_TOKEN_LIFETIME_MINUTES)),
        Some(value) => parse_duration(value),
    }
}

/// Parse a duration string such as `"60m"` or `"1h30m"`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: i128 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_part, tail) = rest.split_at(int_len);

        let (frac_part, tail) = match tail.strip_prefix('.') {
            Some(after) => {
                let frac_len = after.bytes().take_while(u8::is_ascii_digit).count();
                after.split_at(frac_len)
            }
            None => ("", tail),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);

        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }

        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)
            .ok_or_else(|| DurationError::UnknownUnit {
                unit: unit.to_string(),
                input: input.to_string(),
            })?;

        let whole: i128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| overflow())?
        };
        let mut component = whole.checked_mul(scale).ok_or_else(overflow)?;

        if !frac_part.is_empty() {
            // Digits past nanosecond precision cannot change the result.
            let digits = &frac_part[..frac_part.len().min(18)];
            let fraction: i128 = digits.parse().map_err(|_| invalid())?;
            let fraction = fraction.checked_mul(scale).ok_or_else(overflow)?
                / 10_i128.pow(digits.len() as u32);
            component = component.checked_add(fraction).ok_or_else(overflow)?;
        }

        total = total.checked_add(component).ok_or_else(overflow)?;
        if total > i64::MAX as i128 {
            return Err(overflow());
        }

        rest = tail;
    }

    let nanos = i64::try_from(total).map_err(|_| overflow())?;
    Ok(Duration::nanoseconds(if negative { -nanos } else { nanos }))
}
