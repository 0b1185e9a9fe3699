//! HTTP client for TestRail API communication.
//!
//! This module provides the [`ApiClient`] type for making authenticated
//! requests against the TestRail API v2.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::clients::errors::{ApiError, ApiResponseError, InvalidApiRequestError};
use crate::clients::http_request::{ApiRequest, HttpMethod, RequestBody};
use crate::clients::http_response::{ApiResponse, ResponseContent};
use crate::clients::multipart::encode_attachment;
use crate::config::{BaseUrl, Credentials, TestRailConfig};

/// Path segment between the installation URL and the endpoint name.
pub const API_PATH: &str = "/index.php?/api/v2/";

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the TestRail API.
///
/// The client handles:
/// - Endpoint URL construction (`{base_url}/index.php?/api/v2/{uri}`)
/// - Basic authentication when credentials are configured
/// - JSON, multipart upload and raw download bodies
/// - Mapping non-2xx responses to [`ApiResponseError`]
///
/// Every call is a single HTTP exchange; nothing is retried.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync` and immutable once built. Changing
/// credentials produces a new client value via [`ApiClient::with_credentials`].
///
/// # Example
///
/// ```rust,ignore
/// use testrail_api::{ApiClient, BaseUrl, Credentials, Password, TestRailConfig, Username};
///
/// let config = TestRailConfig::builder()
///     .base_url(BaseUrl::new("https://example.testrail.io").unwrap())
///     .credentials(Credentials::new(
///         Username::new("user@example.com").unwrap(),
///         Password::new("api-key").unwrap(),
///     ))
///     .build()
///     .unwrap();
///
/// let client = ApiClient::new(&config);
///
/// let case = client.send_get("get_case/1").await?;
/// let result = client
///     .send_post("add_result_for_case/12/1", r#"{"status_id": 1}"#)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Installation URL without a trailing slash.
    base_url: BaseUrl,
    /// Basic Auth credentials, if any.
    credentials: Option<Credentials>,
    /// Headers sent with every request.
    default_headers: HashMap<String, String>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &TestRailConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}TestRail API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        let api_client = Self {
            client,
            base_url: config.base_url().clone(),
            credentials: None,
            default_headers,
        };

        match config.credentials() {
            Some(credentials) => api_client.with_credentials(credentials.clone()),
            None => api_client,
        }
    }

    /// Returns a client that authenticates with `credentials`.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.default_headers.insert(
            "Authorization".to_string(),
            credentials.authorization_header(),
        );
        self.credentials = Some(credentials);
        self
    }

    /// Returns a client that sends no `Authorization` header.
    #[must_use]
    pub fn without_credentials(mut self) -> Self {
        self.default_headers.remove("Authorization");
        self.credentials = None;
        self
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for an endpoint.
    ///
    /// ```rust
    /// use testrail_api::{ApiClient, BaseUrl, TestRailConfig};
    ///
    /// let config = TestRailConfig::builder()
    ///     .base_url(BaseUrl::new("https://example.testrail.io/").unwrap())
    ///     .build()
    ///     .unwrap();
    /// let client = ApiClient::new(&config);
    ///
    /// assert_eq!(
    ///     client.endpoint_url("get_case/1"),
    ///     "https://example.testrail.io/index.php?/api/v2/get_case/1"
    /// );
    /// ```
    #[must_use]
    pub fn endpoint_url(&self, uri: &str) -> String {
        format!("{}{API_PATH}{uri}", self.base_url)
    }

    /// Sends a GET request and returns the parsed JSON body.
    ///
    /// An empty response body yields an empty JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] for non-2xx statuses,
    /// [`ApiError::Decode`] for a non-JSON body, and [`ApiError::Network`]
    /// for transport failures.
    pub async fn send_get(&self, uri: &str) -> Result<serde_json::Value, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Get, uri).build()?;
        let response = self.send(request).await?;
        Ok(response.into_json().unwrap_or_else(empty_object))
    }

    /// Sends a GET request and writes the raw body to `destination`.
    ///
    /// Used for `get_attachment/{id}`. An existing file is overwritten.
    /// Returns `destination` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the destination cannot be written, plus
    /// the errors of [`ApiClient::send_get`] other than `Decode`.
    pub async fn send_get_to_file(
        &self,
        uri: &str,
        destination: impl Into<PathBuf>,
    ) -> Result<PathBuf, ApiError> {
        let destination = destination.into();
        let request = ApiRequest::builder(HttpMethod::Get, uri)
            .destination(destination.clone())
            .build()?;
        self.send(request).await?;
        Ok(destination)
    }

    /// Sends a POST request and returns the parsed JSON body.
    ///
    /// `body` may be JSON text, a [`serde_json::Value`], or a path to upload
    /// as an attachment (see [`RequestBody`]).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if an attachment cannot be read, plus the
    /// errors of [`ApiClient::send_get`].
    pub async fn send_post(
        &self,
        uri: &str,
        body: impl Into<RequestBody>,
    ) -> Result<serde_json::Value, ApiError> {
        let request = ApiRequest::builder(HttpMethod::Post, uri)
            .body(body)
            .build()?;
        let response = self.send(request).await?;
        Ok(response.into_json().unwrap_or_else(empty_object))
    }

    /// Sends a POST request, uploading `text` as an attachment if it names an
    /// existing file and sending it as JSON text otherwise.
    ///
    /// See [`RequestBody::infer`] for the ambiguity this carries.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send_post`].
    pub async fn send_post_inferred(
        &self,
        uri: &str,
        text: impl Into<String>,
    ) -> Result<serde_json::Value, ApiError> {
        let body = RequestBody::infer(text).await;
        self.send_post(uri, body).await
    }

    /// Sends an API request.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Multipart encoding of attachment uploads
    /// - Response parsing or saving to the request's destination
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - An attachment cannot be read or a destination written (`Io`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx body is not valid JSON (`Decode`)
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request.verify()?;

        let url = self.endpoint_url(&request.uri);

        let headers = Self::merge_headers(&self.default_headers, &request)?;

        let req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        let mut req_builder = req_builder.headers(headers);

        match &request.body {
            Some(RequestBody::Json(text)) => {
                req_builder = req_builder.body(text.clone());
            }
            Some(RequestBody::Attachment(path)) => {
                req_builder = req_builder.body(Self::read_attachment(path).await?);
            }
            None => {}
        }

        tracing::debug!(method = %request.http_method, %url, "Sending TestRail API request");
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());

        if !res.status().is_success() {
            let body = res.bytes().await?;
            let message = ApiResponse::error_message(code, &body);
            tracing::warn!(
                uri = %request.uri,
                code,
                %message,
                "TestRail API request failed"
            );
            return Err(ApiResponseError { code, message }.into());
        }

        let content = match request.destination {
            Some(destination) => {
                Self::save_body(res, &destination).await?;
                ResponseContent::Saved(destination)
            }
            None => {
                let body = res.bytes().await?;
                if body.is_empty() {
                    ResponseContent::Json(empty_object())
                } else {
                    ResponseContent::Json(serde_json::from_slice(&body)?)
                }
            }
        };

        Ok(ApiResponse::new(code, res_headers, content))
    }

    /// Reads an upload source and wraps it in a multipart body.
    async fn read_attachment(path: &Path) -> Result<Vec<u8>, ApiError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "attachment".into(), |name| name.to_string_lossy());

        Ok(encode_attachment(&file_name, &bytes))
    }

    /// Builds the header map for one request.
    ///
    /// Extra headers replace defaults of the same name regardless of case.
    /// `Content-Type` always follows the body.
    fn merge_headers(
        defaults: &HashMap<String, String>,
        request: &ApiRequest,
    ) -> Result<HeaderMap, InvalidApiRequestError> {
        let extra = request.extra_headers.iter().flatten();

        let mut headers = HeaderMap::new();
        for (key, value) in defaults.iter().chain(extra) {
            let invalid = || InvalidApiRequestError::InvalidHeader { name: key.clone() };
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(name, value);
        }
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(request.data_type().as_content_type()),
        );
        Ok(headers)
    }

    /// Writes the response body to `destination`, replacing any existing file.
    ///
    /// The body is written to a sibling `.part` file first and renamed into
    /// place, so a failure leaves an existing destination untouched.
    async fn save_body(res: reqwest::Response, destination: &Path) -> Result<(), ApiError> {
        let body = res.bytes().await?;

        let mut staging = destination.as_os_str().to_owned();
        staging.push(".part");
        let staging = PathBuf::from(staging);

        let written = match tokio::fs::write(&staging, &body).await {
            Ok(()) => tokio::fs::rename(&staging, destination).await,
            Err(e) => Err(e),
        };
        if let Err(source) = written {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(ApiError::Io {
                path: destination.to_path_buf(),
                source,
            });
        }

        tracing::debug!(
            bytes = body.len(),
            path = %destination.display(),
            "Saved TestRail attachment"
        );
        Ok(())
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
