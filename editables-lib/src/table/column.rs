//! Column declarations.

use serde::Deserialize;
use serde::Serialize;

use crate::field::Field;
use crate::field::FieldType;

/// How a column's values are meant to be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    String,
    Number,
    Boolean,
    Html,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Html => "html",
        }
    }
}

impl From<FieldType> for ColumnType {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::String => Self::String,
            FieldType::Number => Self::Number,
        }
    }
}

/// A requested column, before the table assigns its key.
///
/// # Examples
///
/// ```
/// use editables_lib::table::{ColumnSpec, ColumnType};
///
/// let columns = vec![
///     ColumnSpec::new("ID").key("id"),
///     ColumnSpec::new("Price").column_type(ColumnType::Number),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header text.
    pub name: String,
    /// Requested key; the table suffixes it with the column position.
    pub key: Option<String>,
    /// Display type, `string` when unset.
    pub column_type: Option<ColumnType>,
}

impl ColumnSpec {
    /// Creates a column with the given header.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: None,
            column_type: None,
        }
    }

    /// Sets the requested key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the display type.
    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    /// Resolves into a column placed at `index`.
    ///
    /// The key becomes `"{key}-{index}"` when one was requested and
    /// `"{index}"` otherwise.
    pub fn resolve(self, index: usize) -> Column {
        let key = match self.key {
            Some(key) if !key.is_empty() => format!("{}-{}", key, index),
            _ => index.to_string(),
        };
        Column {
            name: self.name,
            key,
            column_type: self.column_type.unwrap_or_default(),
        }
    }
}

impl From<&Field> for ColumnSpec {
    fn from(field: &Field) -> Self {
        ColumnSpec::new(field.name())
            .key(field.name())
            .column_type(field.field_type().into())
    }
}

/// A column placed in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Header text.
    pub name: String,
    /// Unique key within the table.
    pub key: String,
    /// Display type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}
