//! Load sequence error types

use super::HttpError;
use super::RenderError;

/// Errors that end a load sequence in the failed state.
///
/// These never reach the caller directly; the engine converts them into
/// `http-error` or `error` notifications.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The transport call failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The fetched payload was empty or missing.
    #[error("The fetched payload is empty")]
    EmptyPayload,

    /// The declared sub-property is missing from a record.
    #[error("Could not find {property} in the object")]
    PropertyNotFound { property: String },

    /// The payload (or an extracted value) is not an object or a list of objects.
    #[error("Expected an object or an array of objects, got {found}")]
    UnexpectedShape { found: &'static str },

    /// A record's row identifier is missing or cannot be stringified.
    #[error("Row {index}: `{row_id}` cannot be used as a row identity")]
    InvalidRowId { row_id: String, index: usize },

    /// The table surface refused the rendered rows.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl LoadError {
    /// Creates a property not found error.
    pub fn property_not_found(property: impl Into<String>) -> Self {
        Self::PropertyNotFound {
            property: property.into(),
        }
    }

    /// Creates an invalid row identity error.
    pub fn invalid_row_id(row_id: impl Into<String>, index: usize) -> Self {
        Self::InvalidRowId {
            row_id: row_id.into(),
            index,
        }
    }
}
