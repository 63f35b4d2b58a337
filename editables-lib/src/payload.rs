//! Fetched payload shapes

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::LoadError;
use crate::validator::type_name;

/// A JSON object.
pub type Record = Map<String, Value>;

/// Data returned by the transport client, before any projection.
///
/// The shape is classified once, when the response is decoded, so the rest
/// of the pipeline never has to probe JSON types again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawPayload {
    /// A single object.
    Single(Record),
    /// A list of objects.
    Many(Vec<Record>),
}

impl RawPayload {
    /// Classifies a JSON value.
    ///
    /// `null` is an empty payload; scalars and arrays containing anything but
    /// objects are rejected.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Null => Err(LoadError::EmptyPayload),
            Value::Object(record) => Ok(Self::Single(record)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Ok(record),
                    other => Err(LoadError::UnexpectedShape {
                        found: type_name(&other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many),
            other => Err(LoadError::UnexpectedShape {
                found: type_name(&other),
            }),
        }
    }

    /// Returns `true` for an object without keys or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(record) => record.is_empty(),
            Self::Many(records) => records.is_empty(),
        }
    }

    /// Fails with [`LoadError::EmptyPayload`] if the payload is empty.
    pub fn ensure_not_empty(self) -> Result<Self, LoadError> {
        if self.is_empty() {
            Err(LoadError::EmptyPayload)
        } else {
            Ok(self)
        }
    }

    /// Number of records in the payload.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    /// Converts the payload back into a JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Single(record) => Value::Object(record),
            Self::Many(records) => Value::Array(records.into_iter().map(Value::Object).collect()),
        }
    }
}

impl TryFrom<Value> for RawPayload {
    type Error = LoadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
