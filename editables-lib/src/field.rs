//! Field schema declarations

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::validator::validate_string;

/// The data type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Number,
}

impl FieldType {
    /// Returns the lowercase name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// Unvalidated field options, as written in a binding configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldOptions {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
}

impl FieldOptions {
    /// Creates options for a field with the given name and the default type.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            field_type: None,
        }
    }

    /// Sets the field type.
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }
}

/// A named, typed data field.
///
/// The name selects which source property participates in rendering. Fields
/// cannot be changed once built.
///
/// # Example
///
/// ```
/// use editables_lib::{Field, FieldOptions, FieldType};
///
/// let title = Field::named("title").unwrap();
/// assert_eq!(title.field_type(), FieldType::String);
///
/// let price = Field::new(FieldOptions::named("price").field_type(FieldType::Number)).unwrap();
/// assert_eq!(price.name(), "price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    name: String,
    field_type: FieldType,
}

impl Field {
    /// Builds a field from options.
    ///
    /// Fails with [`ConfigError::MissingRequiredField`] when `name` is absent or blank.
    pub fn new(options: FieldOptions) -> Result<Self, ConfigError> {
        let name = options
            .name
            .filter(|name| validate_string(name))
            .ok_or(ConfigError::missing("name"))?;

        Ok(Self {
            name,
            field_type: options.field_type.unwrap_or_default(),
        })
    }

    /// Builds a string field with the given name.
    pub fn named(name: impl Into<String>) -> Result<Self, ConfigError> {
        Self::new(FieldOptions::named(name))
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

impl TryFrom<FieldOptions> for Field {
    type Error = ConfigError;

    fn try_from(options: FieldOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}
