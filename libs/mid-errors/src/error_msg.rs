//! A single recorded failure.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error_type::ErrorType;
use crate::meta::Meta;

/// Boxed error accepted by the constructors.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// One failure recorded during a request: the underlying cause, its
/// [`ErrorType`] and optional [`Meta`].
///
/// The cause is shared, so filtering a list clones cheaply.
#[derive(Debug, Clone)]
pub struct ErrorMsg {
    cause: Arc<dyn StdError + Send + Sync + 'static>,
    error_type: ErrorType,
    meta: Option<Meta>,
}

impl ErrorMsg {
    /// Wraps `cause` with the given type and no metadata.
    #[must_use]
    pub fn new(cause: impl Into<BoxError>, error_type: ErrorType) -> Self {
        Self {
            cause: Arc::from(cause.into()),
            error_type,
            meta: None,
        }
    }

    /// The message of the wrapped cause.
    #[must_use]
    pub fn message(&self) -> String {
        self.cause.to_string()
    }

    #[must_use]
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    #[must_use]
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    #[must_use]
    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// True when the message's type overlaps `mask`.
    #[must_use]
    pub fn is_type(&self, mask: ErrorType) -> bool {
        self.error_type.intersects(mask)
    }

    /// Overwrites the type. The mask is stored as given.
    pub fn set_type(&mut self, error_type: ErrorType) -> &mut Self {
        self.error_type = error_type;
        self
    }

    /// Replaces the metadata. A JSON `null` leaves the message without meta.
    pub fn set_meta(&mut self, meta: impl Into<Meta>) -> &mut Self {
        self.meta = meta.into().non_null();
        self
    }

    pub fn clear_meta(&mut self) -> &mut Self {
        self.meta = None;
        self
    }

    #[must_use]
    pub fn with_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = error_type;
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: impl Into<Meta>) -> Self {
        self.meta = meta.into().non_null();
        self
    }

    /// Client-facing JSON for this message.
    ///
    /// - no meta: `{"error": message}`
    /// - [`Meta::Map`]: the base object with every meta key laid over it; a
    ///   meta `"error"` key replaces the message in place
    /// - [`Meta::Record`]: the record itself, without an `"error"` key
    /// - [`Meta::Value`]: `{"error": message, "meta": value}`
    #[must_use]
    pub fn json(&self) -> Value {
        if let Some(Meta::Record(record)) = &self.meta {
            return record.clone();
        }

        let mut obj = Map::new();
        obj.insert("error".to_owned(), Value::String(self.message()));
        match &self.meta {
            None | Some(Meta::Record(_)) => {}
            Some(Meta::Map(meta)) => {
                for (key, value) in meta {
                    obj.insert(key.clone(), value.clone());
                }
            }
            Some(Meta::Value(value)) => {
                obj.insert("meta".to_owned(), value.clone());
            }
        }
        Value::Object(obj)
    }
}

impl fmt::Display for ErrorMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

/// Transparent over the cause: `Display` already prints it, so the chain
/// continues from the cause's own source.
impl StdError for ErrorMsg {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.source()
    }
}

impl Serialize for ErrorMsg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json().serialize(serializer)
    }
}
