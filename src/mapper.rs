//! Response mapper.
//!
//! Pure functions turning decoded JSON into the typed records of
//! [`crate::domain::models`]. Each record shape has one decoder; nested
//! sequences are decoded element-wise with the same absence rules. A decoder
//! either returns the complete record or a [`MappingError`].

mod fields;
mod monitoring;
mod verification;
mod webhook;

pub use fields::parse_datetime;
pub use monitoring::{decode_monitoring_detail, decode_monitoring_record};
pub use verification::{
    decode_create_response, decode_extended_reference, decode_extracted_field, decode_indicator,
    decode_list_entry, decode_verification_list, decode_verification_result,
};
pub use webhook::{
    decode_monitoring_webhook, decode_verification_webhook, parse_monitoring_webhook,
    parse_verification_webhook,
};

use serde_json::Value;

use crate::error::MappingError;

/// Parses a response body, treating an empty body as JSON `null`.
pub fn parse_body(body: &[u8]) -> Result<Value, MappingError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}

/// `null`, `{}` and `[]` all mean the server has nothing to report.
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Decodes `value` unless it is absent.
pub fn decode_optional<T, F>(value: &Value, decode: F) -> Result<Option<T>, MappingError>
where
    F: FnOnce(&Value) -> Result<T, MappingError>,
{
    if is_absent(value) {
        Ok(None)
    } else {
        decode(value).map(Some)
    }
}
