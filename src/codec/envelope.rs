//! Reserved metadata fields on the wire.
//!
//! ```text
//! {
//!   "<user-field>": ...,
//!   "__migratable_type": "<family display name>",
//!   "__migratable_version": <integer>
//! }
//! ```
//!
//! The reserved keys are stripped before a factory sees the fields and
//! re-added by the writer. User fields that collide with them are not
//! guarded against.

use serde_json::{Map, Number, Value};

use crate::config::WireConfig;
use crate::errors::{RegistryError, RegistryResult};
use crate::token::Registration;

/// Type and version tags as found in a record, before resolution.
///
/// The version tag must be a non-negative integer. Integral floats such as
/// `2.0` are accepted; `2.5`, negative numbers and strings are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub tag: String,
    pub version: u64,
}

/// Split a parsed record into its header and the remaining user fields.
///
/// Runs before any registry lookup, so a record missing either reserved key
/// is [`MalformedRecord`](RegistryError::MalformedRecord) even when its type
/// tag names a registered family.
pub fn split(value: Value, config: &WireConfig) -> RegistryResult<(RecordHeader, Map<String, Value>)> {
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(RegistryError::MalformedRecord(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            )));
        }
    };

    let tag = match fields.remove(&config.type_key) {
        Some(Value::String(tag)) => tag,
        Some(other) => {
            return Err(RegistryError::MalformedRecord(format!(
                "'{}' must be a string, found {}",
                config.type_key,
                kind_of(&other)
            )));
        }
        None => {
            return Err(RegistryError::MalformedRecord(format!(
                "missing '{}'",
                config.type_key
            )));
        }
    };

    let version = match fields.remove(&config.version_key) {
        Some(Value::Number(number)) => version_tag(&number).ok_or_else(|| {
            RegistryError::MalformedRecord(format!(
                "'{}' must be a non-negative integer, found {number}",
                config.version_key
            ))
        })?,
        Some(other) => {
            return Err(RegistryError::MalformedRecord(format!(
                "'{}' must be an integer, found {}",
                config.version_key,
                kind_of(&other)
            )));
        }
        None => {
            return Err(RegistryError::MalformedRecord(format!(
                "missing '{}' on '{tag}'",
                config.version_key
            )));
        }
    };

    Ok((RecordHeader { tag, version }, fields))
}

fn version_tag(number: &Number) -> Option<u64> {
    if let Some(version) = number.as_u64() {
        return Some(version);
    }
    // u64::MAX as f64 rounds up to 2^64, which is already out of range.
    number
        .as_f64()
        .filter(|float| float.fract() == 0.0 && *float >= 0.0 && *float < u64::MAX as f64)
        .map(|float| float as u64)
}

/// Add the reserved fields for `registration` to a field map.
pub fn attach(
    mut fields: Map<String, Value>,
    registration: Registration,
    config: &WireConfig,
) -> Map<String, Value> {
    fields.insert(
        config.type_key.clone(),
        Value::String(registration.token.name().to_string()),
    );
    fields.insert(
        config.version_key.clone(),
        Value::from(registration.version),
    );
    fields
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
