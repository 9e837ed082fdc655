//! JSON locale files.
//!
//! Nested objects flatten into dotted keys, so
//! `{"Mailbox": {"Notification": "..."}}` yields `Mailbox.Notification`.

use std::io::Read;

use serde_json::Value;

use super::LocaleReader;
use crate::error::ReaderError;
use crate::store::TranslationMap;

/// Reader for `.json` locale files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReader;

impl LocaleReader for JsonReader {
    fn name(&self) -> &str {
        "json"
    }

    fn parse(&self, stream: &mut dyn Read) -> Result<Option<TranslationMap>, ReaderError> {
        let value: Value = serde_json::from_reader(stream)?;
        flatten_document(value)
    }
}

/// Flatten a parsed document into a translation map.
///
/// The root must be an object or `null`.
pub(super) fn flatten_document(value: Value) -> Result<Option<TranslationMap>, ReaderError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => {
            let mut map = TranslationMap::new();
            flatten_into(&mut map, None, value)?;
            Ok(Some(map))
        },
        other => Err(format!("expected an object at the root, found {}", kind(&other)).into()),
    }
}

fn flatten_into(
    map: &mut TranslationMap,
    prefix: Option<&str>,
    value: Value,
) -> Result<(), ReaderError> {
    let key = || prefix.unwrap_or_default().to_string();
    match value {
        Value::Object(entries) => {
            for (name, child) in entries {
                let path = match prefix {
                    Some(prefix) => format!("{prefix}.{name}"),
                    None => name,
                };
                flatten_into(map, Some(&path), child)?;
            }
        },
        Value::String(s) => insert(map, key(), s)?,
        Value::Number(n) => insert(map, key(), n.to_string())?,
        Value::Bool(b) => insert(map, key(), b.to_string())?,
        Value::Null => insert(map, key(), String::new())?,
        Value::Array(_) => return Err(format!("'{}': arrays are not supported", key()).into()),
    }
    Ok(())
}

fn insert(map: &mut TranslationMap, key: String, value: String) -> Result<(), ReaderError> {
    if map.contains_key(&key) {
        return Err(format!("duplicate key '{key}' after flattening").into());
    }
    map.insert(key, value);
    Ok(())
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
