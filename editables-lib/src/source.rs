//! Data source descriptions

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use url::Url;

use crate::error::ConfigError;
use crate::validator::validate_string;

/// HTTP method used to fetch the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// How a POST body is encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentFormat {
    /// `application/json`.
    #[default]
    Json,
    /// `multipart/form-data`, one text part per top-level key.
    FormData,
}

/// A fully specified data source.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSrcSpec {
    /// Endpoint URL.
    pub source: String,
    /// Request method.
    pub method: HttpMethod,
    /// Property to extract from the response. Empty means the whole response.
    pub prop: String,
    /// Request body, sent with POST only.
    pub body: Option<Map<String, Value>>,
    /// Body encoding, meaningful with POST only.
    pub format: ContentFormat,
}

impl DataSrcSpec {
    /// Creates a GET source for the given endpoint.
    pub fn get(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            method: HttpMethod::Get,
            prop: String::new(),
            body: None,
            format: ContentFormat::Json,
        }
    }

    /// Creates a POST source for the given endpoint.
    pub fn post(source: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::get(source)
        }
    }

    /// Sets the property to extract from the response.
    pub fn prop(mut self, prop: impl Into<String>) -> Self {
        self.prop = prop.into();
        self
    }

    /// Sets the request body.
    pub fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the body encoding.
    pub fn format(mut self, format: ContentFormat) -> Self {
        self.format = format;
        self
    }
}

/// Where the table data comes from.
///
/// Either a bare endpoint (GET, no body, no extraction) or a structured
/// description.
///
/// # Example
///
/// ```
/// use editables_lib::{DataSrc, DataSrcSpec};
///
/// let bare = DataSrc::from("https://dummyjson.com/products");
/// let nested =
///     DataSrc::Structured(DataSrcSpec::get("https://dummyjson.com/products").prop("products"));
///
/// assert_eq!(bare.prop(), "");
/// assert_eq!(nested.prop(), "products");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DataSrc {
    Endpoint(String),
    Structured(DataSrcSpec),
}

impl DataSrc {
    /// Returns the endpoint URL.
    pub fn source(&self) -> &str {
        match self {
            Self::Endpoint(source) => source,
            Self::Structured(spec) => &spec.source,
        }
    }

    /// Returns the request method.
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::Endpoint(_) => HttpMethod::Get,
            Self::Structured(spec) => spec.method,
        }
    }

    /// Returns the property to extract, empty for none.
    pub fn prop(&self) -> &str {
        match self {
            Self::Endpoint(_) => "",
            Self::Structured(spec) => &spec.prop,
        }
    }

    /// Returns the request body.
    pub fn body(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Endpoint(_) => None,
            Self::Structured(spec) => spec.body.as_ref(),
        }
    }

    /// Returns the body encoding.
    pub fn format(&self) -> ContentFormat {
        match self {
            Self::Endpoint(_) => ContentFormat::Json,
            Self::Structured(spec) => spec.format,
        }
    }

    /// Checks that the source is a non-empty absolute URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let source = self.source();
        if !validate_string(source) {
            return Err(ConfigError::invalid_options(
                "The `source` property in `dataSrc` is required",
            ));
        }
        Url::parse(source).map_err(|e| {
            ConfigError::invalid_options(format!("`{}` is not a valid URL: {}", source, e))
        })?;
        Ok(())
    }
}

impl From<&str> for DataSrc {
    fn from(source: &str) -> Self {
        Self::Endpoint(source.to_string())
    }
}

impl From<String> for DataSrc {
    fn from(source: String) -> Self {
        Self::Endpoint(source)
    }
}

impl From<DataSrcSpec> for DataSrc {
    fn from(spec: DataSrcSpec) -> Self {
        Self::Structured(spec)
    }
}

/// Unvalidated data source, as written in a binding configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DataSrcInput {
    Endpoint(String),
    Structured {
        source: Option<String>,
        method: Option<HttpMethod>,
        prop: Option<String>,
        body: Option<Map<String, Value>>,
        format: Option<ContentFormat>,
    },
}

impl TryFrom<DataSrcInput> for DataSrc {
    type Error = ConfigError;

    fn try_from(input: DataSrcInput) -> Result<Self, Self::Error> {
        let src = match input {
            DataSrcInput::Endpoint(source) => DataSrc::Endpoint(source),
            DataSrcInput::Structured {
                source,
                method,
                prop,
                body,
                format,
            } => {
                let source = source.ok_or_else(|| {
                    ConfigError::invalid_options("The `source` property in `dataSrc` is required")
                })?;
                DataSrc::Structured(DataSrcSpec {
                    source,
                    method: method.unwrap_or_default(),
                    prop: prop.unwrap_or_default(),
                    body,
                    format: format.unwrap_or_default(),
                })
            }
        };
        src.validate()?;
        Ok(src)
    }
}
