//! Binding options

use serde::Deserialize;

use crate::error::ConfigError;
use crate::field::Field;
use crate::field::FieldOptions;
use crate::source::DataSrc;
use crate::source::DataSrcInput;
use crate::validator::validate_string;

/// Validated options for an [`Editables`](crate::Editables) instance.
///
/// # Example
///
/// ```
/// use editables_lib::{BindingOptions, DataSrcSpec, Field};
///
/// let source = DataSrcSpec::get("https://dummyjson.com/products").prop("products");
/// let options = BindingOptions::new(source)
///     .field(Field::named("title").unwrap())
///     .field(Field::named("description").unwrap())
///     .row_id("id");
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BindingOptions {
    /// Where the data comes from.
    pub data_src: DataSrc,
    /// Fields to render, in column order.
    pub fields: Vec<Field>,
    /// Property used as the row identity.
    pub row_id: Option<String>,
}

impl BindingOptions {
    /// Creates options with no fields and no row identity.
    pub fn new(data_src: impl Into<DataSrc>) -> Self {
        Self {
            data_src: data_src.into(),
            fields: Vec::new(),
            row_id: None,
        }
    }

    /// Appends a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Replaces the field list.
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Sets the row identity property.
    pub fn row_id(mut self, row_id: impl Into<String>) -> Self {
        self.row_id = Some(row_id.into());
        self
    }

    /// Checks the options against the schema.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.data_src.validate()?;
        if let Some(row_id) = &self.row_id
            && !validate_string(row_id)
        {
            return Err(ConfigError::invalid_options("The `rowId` must not be blank"));
        }
        Ok(())
    }
}

/// Unvalidated options, as written in a binding configuration file.
///
/// ```json
/// {
///   "dataSrc": { "source": "https://dummyjson.com/products", "prop": "products" },
///   "fields": [{ "name": "title" }, { "name": "price", "type": "number" }],
///   "rowId": "id"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    pub data_src: Option<DataSrcInput>,
    pub fields: Option<Vec<FieldOptions>>,
    pub row_id: Option<String>,
}

impl TryFrom<InitOptions> for BindingOptions {
    type Error = ConfigError;

    fn try_from(init: InitOptions) -> Result<Self, Self::Error> {
        let data_src = init
            .data_src
            .ok_or_else(|| ConfigError::invalid_options("The `dataSrc` property is required"))?;
        let fields = init.fields.ok_or_else(|| {
            ConfigError::invalid_options("The `fields` in `options` does not respect the schema")
        })?;

        let options = BindingOptions {
            data_src: DataSrc::try_from(data_src)?,
            fields: fields
                .into_iter()
                .map(Field::new)
                .collect::<Result<Vec<_>, _>>()?,
            row_id: init.row_id,
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::field::FieldType;

    fn parse(value: serde_json::Value) -> Result<BindingOptions, ConfigError> {
        let init: InitOptions = serde_json::from_value(value).unwrap();
        BindingOptions::try_from(init)
    }

    #[test]
    fn test_parse_full_options() {
        let options = parse(json!({
            "dataSrc": {"source": "https://api.example/items", "prop": "items"},
            "fields": [{"name": "title"}, {"name": "price", "type": "number"}],
            "rowId": "id"
        }))
        .unwrap();

        assert_eq!(options.data_src.prop(), "items");
        assert_eq!(options.fields.len(), 2);
        assert_eq!(options.fields[1].field_type(), FieldType::Number);
        assert_eq!(options.row_id.as_deref(), Some("id"));
    }

    #[test]
    fn test_missing_data_src_fails() {
        let err = parse(json!({"fields": []})).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptions(_)));
    }

    #[test]
    fn test_missing_fields_fails() {
        let err = parse(json!({"dataSrc": "https://api.example/items"})).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptions(_)));
    }

    #[test]
    fn test_empty_fields_allowed() {
        let options = parse(json!({"dataSrc": "https://api.example/items", "fields": []})).unwrap();
        assert!(options.fields.is_empty());
    }

    #[test]
    fn test_nameless_field_fails() {
        let err =
            parse(json!({"dataSrc": "https://api.example/items", "fields": [{}]})).unwrap_err();
        assert_eq!(err, ConfigError::MissingRequiredField { field: "name" });
    }

    #[test]
    fn test_blank_row_id_fails() {
        let options = BindingOptions::new("https://api.example/items").row_id(" ");
        assert!(options.validate().is_err());
    }
}
