//! Field decoders for Argo profile variables
//!
//! Two conventions of the Argo format need decoding before a value is usable:
//! fixed-width character arrays (e.g. `PLATFORM_NUMBER`) and Julian day
//! offsets (`JULD`, fractional days since 1950-01-01T00:00:00 UTC).

use crate::errors::{ExplorerError, Result};
use chrono::{DateTime, TimeDelta, Utc};

/// `JULD` values at or above this are fill values.
pub const JULIAN_FILL_THRESHOLD: f64 = 999_999.0;

const MICROSECONDS_PER_DAY: f64 = 86_400_000_000.0;

/// Days between 1950-01-01 and 1970-01-01.
const EPOCH_OFFSET_DAYS: i64 = 7305;

/// A fixed-width character array as stored in a profile file.
///
/// Text variables arrive either as single-byte characters (NetCDF `char`
/// or byte variables) or, from in-memory fixtures, as already decoded
/// characters. Anything else is kept as its numeric values and rendered
/// with a plain string conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum CharArray {
    Bytes(Vec<u8>),
    Text(Vec<char>),
    Numeric(Vec<f64>),
}

impl From<&[u8]> for CharArray {
    fn from(bytes: &[u8]) -> Self {
        CharArray::Bytes(bytes.to_vec())
    }
}

impl From<&str> for CharArray {
    fn from(text: &str) -> Self {
        CharArray::Text(text.chars().collect())
    }
}

impl From<Vec<char>> for CharArray {
    fn from(chars: Vec<char>) -> Self {
        CharArray::Text(chars)
    }
}

/// Decodes a character array into a trimmed string.
///
/// Each byte is decoded as UTF-8 on its own, so a byte outside the ASCII
/// range is an error rather than being replaced. Leading and trailing
/// whitespace and NUL padding are stripped.
///
/// # Errors
///
/// Returns [`ExplorerError::InvalidCharacter`] for a byte that is not a
/// complete UTF-8 character.
pub fn decode_char_array(array: &CharArray) -> Result<String> {
    let joined = match array {
        CharArray::Bytes(bytes) => {
            let mut text = String::with_capacity(bytes.len());
            for (position, byte) in bytes.iter().enumerate() {
                let decoded = std::str::from_utf8(std::slice::from_ref(byte)).map_err(|_| {
                    ExplorerError::InvalidCharacter {
                        byte: *byte,
                        position,
                    }
                })?;
                text.push_str(decoded);
            }
            text
        }
        CharArray::Text(chars) => chars.iter().collect(),
        CharArray::Numeric(values) => return Ok(numeric_to_string(values)),
    };

    Ok(joined
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string())
}

fn numeric_to_string(values: &[f64]) -> String {
    match values {
        [single] => single.to_string(),
        many => {
            let parts: Vec<String> = many.iter().map(|v| v.to_string()).collect();
            format!("[{}]", parts.join(" "))
        }
    }
}

/// The reference epoch of the Argo time axis, 1950-01-01T00:00:00 UTC.
pub fn reference_epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH - TimeDelta::days(EPOCH_OFFSET_DAYS)
}

/// Converts a Julian day offset to a UTC timestamp.
///
/// Returns `None` for fill values (`>= 999999`), NaN, and offsets that
/// fall outside the representable calendar range. Fractional days are
/// resolved to the nearest microsecond.
pub fn decode_julian_day(days: f64) -> Option<DateTime<Utc>> {
    if days.is_nan() || days >= JULIAN_FILL_THRESHOLD {
        return None;
    }
    let micros = (days * MICROSECONDS_PER_DAY).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return None;
    }
    reference_epoch().checked_add_signed(TimeDelta::microseconds(micros as i64))
}

/// Converts a sequence of Julian day offsets, preserving length and order.
pub fn decode_julian_days(days: &[f64]) -> Vec<Option<DateTime<Utc>>> {
    days.iter().copied().map(decode_julian_day).collect()
}

/// Inverse of [`decode_julian_day`]: fractional days since the reference epoch.
pub fn encode_julian_day(timestamp: DateTime<Utc>) -> f64 {
    let delta = timestamp - reference_epoch();
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / MICROSECONDS_PER_DAY,
        None => delta.num_milliseconds() as f64 / (MICROSECONDS_PER_DAY / 1000.0),
    }
}
