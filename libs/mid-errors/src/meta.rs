//! Supplementary data attached to a recorded error.
//!
//! The shape of the metadata decides how it shows up in the rendered JSON:
//! a mapping is merged into `{"error": ...}`, a record replaces it, and any
//! other value is nested under a `"meta"` key.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Metadata attached to an [`crate::ErrorMsg`].
#[derive(Debug, Clone, PartialEq)]
pub enum Meta {
    /// Key/value pairs merged over the base `{"error": ...}` object.
    Map(Map<String, Value>),
    /// A whole structured record rendered verbatim in place of the error.
    Record(Value),
    /// Any other payload, rendered under the `"meta"` key.
    Value(Value),
}

impl Meta {
    /// Serializes `value` into an opaque record.
    ///
    /// # Errors
    /// Returns the `serde_json` error when `value` cannot be represented as JSON
    /// (for example a map with non-string keys).
    pub fn record<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Record)
    }

    /// `None` for a JSON `null` payload, which counts as no metadata.
    #[must_use]
    pub fn non_null(self) -> Option<Self> {
        match self {
            Self::Record(Value::Null) | Self::Value(Value::Null) => None,
            other => Some(other),
        }
    }

    /// The JSON value held by this metadata, regardless of its shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Map(map) => Value::Object(map.clone()),
            Self::Record(value) | Self::Value(value) => value.clone(),
        }
    }
}

/// Objects become [`Meta::Map`], everything else [`Meta::Value`].
impl From<Value> for Meta {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Map(map),
            other => Self::Value(other),
        }
    }
}

impl From<Map<String, Value>> for Meta {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl From<&str> for Meta {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_owned()))
    }
}

impl From<String> for Meta {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}

/// Strings print bare; every other shape prints as compact JSON.
impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(Value::String(s)) | Self::Value(Value::String(s)) => f.write_str(s),
            Self::Map(map) => write!(f, "{}", Value::Object(map.clone())),
            Self::Record(value) | Self::Value(value) => write!(f, "{value}"),
        }
    }
}
