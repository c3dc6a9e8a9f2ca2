//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! JSON numbers that fit in `i64` become [`Value::Int`]; all others become
//! [`Value::Float`]. Going the other way, non-finite floats have no JSON
//! representation and become `null`.

use crate::{Doc, Resolved, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Doc(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Doc>(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Doc(doc) => serde_json::Value::Object(
                doc.iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl Value {
    /// Parses a JSON document.
    ///
    /// # Errors
    /// Returns [`Error::Json`](crate::Error::Json) on malformed input.
    pub fn from_json_str(input: &str) -> crate::Result<Self> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(json.into())
    }

    /// Renders this value as compact JSON.
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(self).to_string()
    }
}

impl Resolved<'_> {
    /// Renders the resolved value as JSON, or `None` when nothing was found.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Resolved::NotFound => None,
            Resolved::One(value) => Some(serde_json::Value::from(*value)),
            Resolved::Many(hits) => Some(serde_json::Value::Array(
                hits.iter().map(|hit| serde_json::Value::from(*hit)).collect(),
            )),
        }
    }
}
