//! Request body encoding

use reqwest::multipart::Form;
use serde::Serialize;
use serde_json::Value;

use crate::error::HttpError;
use crate::source::ContentFormat;
use crate::validator::type_name;

/// An encoded request body, ready to attach to a request.
pub enum EncodedBody {
    /// Serialized JSON text.
    Json(Vec<u8>),
    /// Multipart form with one text part per top-level key.
    Form(Form),
}

impl EncodedBody {
    /// Returns the `Content-Type` this body is sent with.
    ///
    /// Multipart bodies get their boundary appended by the transport.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Form(_) => "multipart/form-data",
        }
    }
}

impl std::fmt::Debug for EncodedBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(bytes) => f.debug_tuple("Json").field(&bytes.len()).finish(),
            Self::Form(form) => f.debug_tuple("Form").field(&form.boundary()).finish(),
        }
    }
}

/// Encodes `body` in the given format.
///
/// JSON bodies fail with [`HttpError::BodyEncoding`] when the value cannot be
/// serialized. Form bodies must serialize to an object; strings are sent
/// verbatim and every other value as its JSON text.
pub fn encode_body<B: Serialize + ?Sized>(
    body: &B,
    format: ContentFormat,
) -> Result<EncodedBody, HttpError> {
    match format {
        ContentFormat::Json => serde_json::to_vec(body)
            .map(EncodedBody::Json)
            .map_err(HttpError::BodyEncoding),
        ContentFormat::FormData => {
            let fields = form_fields(body)?;
            let form = fields
                .into_iter()
                .fold(Form::new(), |form, (key, value)| form.text(key, value));
            Ok(EncodedBody::Form(form))
        }
    }
}

/// Flattens a body into `(name, text)` form fields.
pub fn form_fields<B: Serialize + ?Sized>(body: &B) -> Result<Vec<(String, String)>, HttpError> {
    match serde_json::to_value(body).map_err(HttpError::BodyEncoding)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect()),
        Value::Null => Ok(Vec::new()),
        other => Err(HttpError::BodyEncoding(serde::ser::Error::custom(format!(
            "form bodies must be objects, got {}",
            type_name(&other)
        )))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_encode_json() {
        let body = encode_body(&json!({"id": 300}), ContentFormat::Json).unwrap();
        assert_eq!(body.content_type(), "application/json");
        match body {
            EncodedBody::Json(bytes) => assert_eq!(bytes, br#"{"id":300}"#),
            EncodedBody::Form(_) => panic!("expected JSON"),
        }
    }

    #[test]
    fn test_encode_json_failure() {
        // Non-string map keys cannot be written as JSON object keys.
        let mut body = HashMap::new();
        body.insert(vec![1u8], 1);
        let err = encode_body(&body, ContentFormat::Json).unwrap_err();
        assert!(matches!(err, HttpError::BodyEncoding(_)));
    }

    #[test]
    fn test_form_fields_stringify_values() {
        let fields = form_fields(&json!({"name": "A", "id": 3, "tags": ["x"]})).unwrap();
        let fields: HashMap<_, _> = fields.into_iter().collect();
        assert_eq!(fields["name"], "A");
        assert_eq!(fields["id"], "3");
        assert_eq!(fields["tags"], r#"["x"]"#);
    }

    #[test]
    fn test_form_requires_object() {
        let err = form_fields(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, HttpError::BodyEncoding(_)));
        assert!(err.to_string().contains("got array"));

        let err = encode_body(&json!("text"), ContentFormat::FormData).unwrap_err();
        assert!(matches!(err, HttpError::BodyEncoding(_)));
        assert!(form_fields(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_encode_form() {
        let body = encode_body(&json!({"id": 1}), ContentFormat::FormData).unwrap();
        assert!(matches!(body, EncodedBody::Form(_)));
        assert_eq!(body.content_type(), "multipart/form-data");
    }
}
