//! HTTP client bound to one endpoint

use std::sync::Arc;

use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::EncodedBody;
use super::encode_body;
use crate::error::ConfigError;
use crate::error::HttpError;
use crate::source::ContentFormat;

/// An HTTP client that talks to a single, fixed URL.
///
/// Every call is exactly one round trip: no retries and no timeout. Cheap to
/// clone.
///
/// # Example
///
/// ```ignore
/// use editables_lib::http::HttpClient;
///
/// let client = HttpClient::builder()
///     .url("https://dummyjson.com/products".parse()?)
///     .build();
///
/// let products: serde_json::Value = client.get().await?;
/// ```
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

struct HttpClientInner {
    base_url: Url,
    http_client: Client,
}

impl HttpClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> HttpClientBuilder<Missing> {
        HttpClientBuilder::new()
    }

    /// Creates a client for the given URL with a default HTTP stack.
    pub fn new(url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(url).map_err(|e| {
            ConfigError::invalid_options(format!("`{}` is not a valid URL: {}", url, e))
        })?;
        Ok(Self::builder().url(url).build())
    }

    /// Returns the URL every request is sent to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Issues a GET request without a body and decodes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        let request = self.inner.http_client.get(self.inner.base_url.clone());
        self.send(request).await
    }

    /// Issues a POST request with `body` encoded as `format` and decodes the
    /// JSON response.
    pub async fn post<T, B>(&self, body: &B, format: ContentFormat) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.inner.http_client.post(self.inner.base_url.clone());
        let encoded = encode_body(body, format)?;
        let content_type = encoded.content_type();
        let request = match encoded {
            EncodedBody::Json(bytes) => request.header(CONTENT_TYPE, content_type).body(bytes),
            EncodedBody::Form(form) => request.multipart(form),
        };
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, HttpError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(HttpError::response(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                response.url().as_str(),
            ));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| HttpError::transport(format!("Malformed response body: {}", e)))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for a missing required builder field.
pub struct Missing;

/// Marker type for a set builder field.
pub struct Set<T>(T);

/// Builder for constructing an [`HttpClient`].
///
/// The URL is required and enforced at compile time.
pub struct HttpClientBuilder<U> {
    url: U,
    http_client: Option<Client>,
}

impl HttpClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            http_client: None,
        }
    }

    /// Sets the URL every request is sent to.
    pub fn url(self, url: Url) -> HttpClientBuilder<Set<Url>> {
        HttpClientBuilder {
            url: Set(url),
            http_client: self.http_client,
        }
    }
}

impl Default for HttpClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> HttpClientBuilder<U> {
    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl HttpClientBuilder<Set<Url>> {
    /// Builds the [`HttpClient`].
    pub fn build(self) -> HttpClient {
        HttpClient {
            inner: Arc::new(HttpClientInner {
                base_url: self.url.0,
                http_client: self.http_client.unwrap_or_default(),
            }),
        }
    }
}
