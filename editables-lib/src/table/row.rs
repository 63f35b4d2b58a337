//! Table rows.

use serde::Serialize;

/// A row of display values, optionally tagged with an identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: Option<String>,
    pub cells: Vec<String>,
}

impl Row {
    /// Creates an untagged row.
    pub fn new(cells: Vec<String>) -> Self {
        Self { id: None, cells }
    }

    /// Creates a row tagged with `id`.
    pub fn with_id(id: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            id: Some(id.into()),
            cells,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
