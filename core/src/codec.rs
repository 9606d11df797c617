//! Wire codec for event records.
//!
//! An event record travels as an ordered 7-element JSON array:
//!
//! ```text
//! [sport, title, ticketsLeft, ticketsSold, date, description, venue]
//! ```
//!
//! The three integer fields are rendered as decimal text so that counts
//! exceeding native JSON number precision survive transport intact.
//! Decoding is lenient on that point and also accepts plain JSON numbers.

use crate::details::EventDetails;
use serde_json::{json, Value};
use thiserror::Error;

/// Number of positional fields in an encoded event record.
const RECORD_LEN: usize = 7;

/// Failures while decoding a wire record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The value is not a 7-element array, or a text field is not a string.
    #[error("malformed event record: {0}")]
    MalformedRecord(String),

    /// An integer field does not hold a valid non-negative decimal literal.
    #[error("invalid integer for {field}: {value}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },
}

/// Encode details into the positional wire array.
#[must_use]
pub fn encode(details: &EventDetails) -> Value {
    json!([
        details.sport,
        details.title,
        details.tickets_left.to_string(),
        details.tickets_sold.to_string(),
        details.date.to_string(),
        details.description,
        details.venue,
    ])
}

/// Decode a wire value back into event details.
///
/// # Errors
///
/// Returns [`CodecError::MalformedRecord`] if `value` is not an array of
/// exactly seven elements or a text field is not a string, and
/// [`CodecError::InvalidNumber`] if an integer field fails to parse.
pub fn decode(value: &Value) -> Result<EventDetails, CodecError> {
    let Some(parts) = value.as_array() else {
        return Err(CodecError::MalformedRecord(format!(
            "expected an array, got {}",
            type_name(value)
        )));
    };
    if parts.len() != RECORD_LEN {
        return Err(CodecError::MalformedRecord(format!(
            "expected {RECORD_LEN} fields, got {}",
            parts.len()
        )));
    }
    Ok(EventDetails {
        sport: string_field(&parts[0], "sport")?,
        title: string_field(&parts[1], "title")?,
        tickets_left: int_field(&parts[2], "ticketsLeft")?,
        tickets_sold: int_field(&parts[3], "ticketsSold")?,
        date: int_field(&parts[4], "date")?,
        description: string_field(&parts[5], "description")?,
        venue: string_field(&parts[6], "venue")?,
    })
}

fn string_field(value: &Value, field: &'static str) -> Result<String, CodecError> {
    value.as_str().map(str::to_owned).ok_or_else(|| {
        CodecError::MalformedRecord(format!("{field} must be a string, got {}", type_name(value)))
    })
}

fn int_field(value: &Value, field: &'static str) -> Result<u128, CodecError> {
    let invalid = || CodecError::InvalidNumber {
        field,
        value: value.to_string(),
    };
    match value {
        Value::String(text) => text.parse().map_err(|_| invalid()),
        Value::Number(num) => num.as_u64().map(u128::from).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
