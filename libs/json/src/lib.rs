//! Conversions between JSON data and typeoracle values
//!
//! Parsing follows the semantics of `JSON.parse`, with objects and arrays created in the
//! provided [Realm]. Serializing follows `JSON.stringify`: dates are rendered as ISO 8601
//! timestamps, boxed primitives are unwrapped, and functions, symbols and `undefined` are
//! dropped from objects (or replaced with `null` in arrays).

use chrono::{DateTime, SecondsFormat};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};
use thiserror::Error;
use typeoracle_runtime::{Object, ObjectKind, Realm, Value};

/// The different error types that can occur while converting JSON data
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("error while parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("a BigInt can't be serialized to JSON")]
    BigInt,
    #[error("a cyclic value can't be serialized to JSON")]
    Cyclic,
    #[error("a value of type '{0}' can't be serialized to JSON")]
    Unrepresentable(&'static str),
}

/// The Result type returned by the JSON conversion functions
pub type Result<T> = std::result::Result<T, Error>;

/// Converts JSON data into a value, creating objects and arrays in the given realm
pub fn json_to_value(realm: &Realm, value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        JsonValue::String(s) => Value::Str(s.as_str().into()),
        JsonValue::Array(elements) => realm
            .array(elements.iter().map(|element| json_to_value(realm, element)))
            .into(),
        JsonValue::Object(entries) => {
            let object = realm.object();
            for (key, value) in entries.iter() {
                object.set(key, json_to_value(realm, value));
            }
            object.into()
        }
    }
}

/// Parses a JSON string into a value
pub fn from_str(realm: &Realm, input: &str) -> Result<Value> {
    let json = serde_json::from_str(input)?;
    Ok(json_to_value(realm, &json))
}

/// Converts a value into JSON data
///
/// An error is returned if the value can't be represented as JSON at the top level (e.g.
/// `undefined` or a function), if it contains a BigInt, or if it contains a cycle.
pub fn value_to_json(value: &Value) -> Result<JsonValue> {
    let mut serializer = Serializer::default();
    serializer
        .serialize(value)?
        .ok_or(Error::Unrepresentable(value.type_of().as_str()))
}

/// Serializes a value as a JSON string
pub fn to_string(value: &Value) -> Result<String> {
    let json = value_to_json(value)?;
    Ok(json.to_string())
}

#[derive(Default)]
struct Serializer {
    // The objects that are currently being serialized, used to detect cycles
    ancestors: Vec<Object>,
}

impl Serializer {
    // Returns None for values that JSON can't represent, which are dropped by the caller
    fn serialize(&mut self, value: &Value) -> Result<Option<JsonValue>> {
        let result = match value {
            Value::Undefined | Value::Symbol(_) => None,
            Value::Null => Some(JsonValue::Null),
            Value::Bool(b) => Some(JsonValue::Bool(*b)),
            Value::Number(n) => Some(number_to_json(*n)),
            Value::BigInt(_) => return Err(Error::BigInt),
            Value::Str(s) => Some(JsonValue::String(s.to_string())),
            Value::Object(object) => self.serialize_object(object)?,
        };

        Ok(result)
    }

    fn serialize_object(&mut self, object: &Object) -> Result<Option<JsonValue>> {
        let kind = object.kind().clone();
        let result = match kind {
            ObjectKind::Boolean(b) => JsonValue::Bool(b),
            ObjectKind::Number(n) => number_to_json(n),
            ObjectKind::String(s) => JsonValue::String(s.to_string()),
            ObjectKind::Date(time) => date_to_json(time),
            ObjectKind::Function(_) => return Ok(None),
            ObjectKind::Array(elements) => {
                self.enter(object)?;
                let mut result = Vec::with_capacity(elements.len());
                for element in elements.iter() {
                    let element = self.serialize(element)?.unwrap_or_else(|| {
                        tracing::trace!(?element, "replacing unrepresentable array element with null");
                        JsonValue::Null
                    });
                    result.push(element);
                }
                self.ancestors.pop();
                JsonValue::Array(result)
            }
            _ => {
                self.enter(object)?;
                let mut result = JsonMap::new();
                for key in object.own_keys() {
                    let value = object.get(&key);
                    match self.serialize(&value)? {
                        Some(json) => {
                            result.insert(key.to_string(), json);
                        }
                        None => tracing::trace!(%key, "dropping unrepresentable property"),
                    }
                }
                self.ancestors.pop();
                JsonValue::Object(result)
            }
        };

        Ok(Some(result))
    }

    fn enter(&mut self, object: &Object) -> Result<()> {
        if self
            .ancestors
            .iter()
            .any(|ancestor| Object::ptr_eq(ancestor, object))
        {
            return Err(Error::Cyclic);
        }
        self.ancestors.push(object.clone());
        Ok(())
    }
}

fn number_to_json(n: f64) -> JsonValue {
    // Integral values are stored as integers so that they're rendered without a fraction
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        JsonValue::Number(JsonNumber::from(n as i64))
    } else {
        JsonNumber::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
    }
}

fn date_to_json(time: f64) -> JsonValue {
    if time.is_nan() {
        return JsonValue::Null;
    }

    match DateTime::from_timestamp_millis(time as i64) {
        Some(date) => JsonValue::String(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => JsonValue::Null,
    }
}
