//! Field extraction rules shared by every decoder.
//!
//! Absent and `null` keys are unset, sequences default to empty, dates are
//! parsed only from non-empty strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::error::MappingError;

pub(crate) type Object = Map<String, Value>;

type Result<T> = std::result::Result<T, MappingError>;

/// Formats accepted for timestamps without an offset; they are read as UTC.
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn object<'a>(value: &'a Value, field: &str) -> Result<&'a Object> {
    value
        .as_object()
        .ok_or_else(|| MappingError::unexpected(field, "object"))
}

fn present<'a>(obj: &'a Object, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

pub(crate) fn string(obj: &Object, key: &str) -> Result<Option<String>> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(_) => Err(MappingError::unexpected(key, "string")),
    }
}

pub(crate) fn required_string(obj: &Object, key: &str) -> Result<String> {
    string(obj, key)?.ok_or_else(|| MappingError::missing(key))
}

pub(crate) fn boolean(obj: &Object, key: &str) -> Result<Option<bool>> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(MappingError::unexpected(key, "boolean")),
    }
}

pub(crate) fn datetime(obj: &Object, key: &str) -> Result<Option<DateTime<Utc>>> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => {
            parse_datetime(s)
                .map(Some)
                .map_err(|source| MappingError::InvalidDate {
                    field: key.to_string(),
                    value: s.clone(),
                    source,
                })
        }
        Some(_) => Err(MappingError::unexpected(key, "date string")),
    }
}

/// Passes the value through untouched.
pub(crate) fn opaque(obj: &Object, key: &str) -> Option<Value> {
    present(obj, key).cloned()
}

/// Decodes every element of an array field, keeping the received order.
pub(crate) fn sequence<T, F>(obj: &Object, key: &str, decode: F) -> Result<Vec<T>>
where
    F: Fn(&Value) -> Result<T>,
{
    match present(obj, key) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode(item).map_err(|e| e.within(&format!("{key}[{i}]"))))
            .collect(),
        Some(_) => Err(MappingError::unexpected(key, "array")),
    }
}

/// Parses an API timestamp.
///
/// RFC 3339 with an offset is preferred. Local date-times and plain dates are
/// accepted as UTC.
pub fn parse_datetime(raw: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    let rfc_err = match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => return Ok(parsed.with_timezone(&Utc)),
        Err(e) => e,
    };

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight.and_utc());
    }

    Err(rfc_err)
}
