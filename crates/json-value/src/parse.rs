//! Conversion between JSON text / `serde_json` documents and [`Value`].

use serde_json::{Map, Number};

use crate::error::Result;
use crate::object::Object;
use crate::value::Value;

impl Value<'static> {
    /// Parses a JSON document.
    ///
    /// Every parsed object is stored as a populated [`Object`], including
    /// `{}`; it still compares equal to a default-constructed value.
    ///
    /// ```
    /// use docval::Value;
    ///
    /// let parsed = Value::parse("{}").unwrap();
    /// assert_eq!(parsed, Value::default());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(text).map_err(|err| {
            log::debug!("rejecting document at line {} column {}: {err}", err.line(), err.column());
            err
        })?;
        let value = Value::from(json);
        log::trace!("parsed document of kind {}", value.kind());
        Ok(value)
    }
}

impl From<serde_json::Value> for Value<'static> {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(map_to_object(map)),
        }
    }
}

fn number_to_value(n: &Number) -> Value<'static> {
    if let Some(u) = n.as_u64() {
        Value::Uint(u)
    } else if let Some(i) = n.as_i64() {
        Value::Int(i)
    } else {
        Value::Double(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn map_to_object(map: Map<String, serde_json::Value>) -> Object<'static> {
    let mut object = Object::with_capacity(map.len());
    for (key, value) in map {
        object.insert(key, Value::from(value));
    }
    object
}

impl Value<'_> {
    /// Renders the effective content as a `serde_json` document.
    ///
    /// Byte strings become arrays of numbers. Non-finite doubles become
    /// `null`, as JSON has no spelling for them.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Uint(u) => serde_json::Value::from(*u),
            Value::Double(d) => Number::from_f64(*d).map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => serde_json::Value::Array(b.iter().map(|byte| serde_json::Value::from(*byte)).collect()),
            Value::Array(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::EmptyObject => serde_json::Value::Object(Map::new()),
            Value::Object(object) => serde_json::Value::Object(
                object.iter().map(|(k, v)| (k.to_owned(), v.to_json())).collect(),
            ),
            Value::Alias(referent) => referent.to_json(),
        }
    }
}
