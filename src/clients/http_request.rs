//! HTTP request types for the TestRail API client.
//!
//! This module provides the [`ApiRequest`] type and its builder, along with
//! the [`RequestBody`] variants that distinguish inline JSON from attachment
//! uploads.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::clients::errors::InvalidApiRequestError;
use crate::clients::multipart::MULTIPART_CONTENT_TYPE;

/// HTTP methods supported by the TestRail API.
///
/// TestRail reads with GET and performs every write (add, update, close,
/// delete) with POST.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources and attachments.
    Get,
    /// HTTP POST method for all writes and attachment uploads.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Content type of an outgoing request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Multipart form data with the fixed attachment boundary.
    Multipart,
}

impl DataType {
    /// Returns the `Content-Type` header value for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Multipart => MULTIPART_CONTENT_TYPE,
        }
    }
}

/// The body of a POST request.
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use testrail_api::clients::{DataType, RequestBody};
///
/// let body = RequestBody::from(r#"{"title":"Login works"}"#);
/// assert_eq!(body.data_type(), DataType::Json);
///
/// let upload = RequestBody::from(PathBuf::from("screenshot.png"));
/// assert_eq!(upload.data_type(), DataType::Multipart);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// Literal JSON text sent as the request entity.
    Json(String),
    /// A file uploaded as the single part of a multipart body.
    Attachment(PathBuf),
}

impl RequestBody {
    /// Chooses a body variant from untyped text: text naming an existing
    /// regular file becomes an attachment upload, anything else is inline
    /// JSON.
    ///
    /// A JSON payload that happens to equal the name of a file in the
    /// working directory is sent as an upload. Prefer constructing the
    /// variant explicitly when the intent is known.
    pub async fn infer(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_file = tokio::fs::metadata(&text)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false);

        if is_file {
            Self::Attachment(PathBuf::from(text))
        } else {
            Self::Json(text)
        }
    }

    /// Returns the content type this body is sent with.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Json(_) => DataType::Json,
            Self::Attachment(_) => DataType::Multipart,
        }
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::Json(text)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        Self::Json(text.to_string())
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value.to_string())
    }
}

impl From<PathBuf> for RequestBody {
    fn from(path: PathBuf) -> Self {
        Self::Attachment(path)
    }
}

impl From<&Path> for RequestBody {
    fn from(path: &Path) -> Self {
        Self::Attachment(path.to_path_buf())
    }
}

/// A request to be sent to the TestRail API.
///
/// Use [`ApiRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use testrail_api::clients::{ApiRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = ApiRequest::builder(HttpMethod::Get, "get_case/1")
///     .build()
///     .unwrap();
///
/// let post_request = ApiRequest::builder(HttpMethod::Post, "add_result/1")
///     .body(json!({"status_id": 1}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The API endpoint suffix, e.g. `get_case/1`.
    pub uri: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// File the raw response body is written to instead of being parsed.
    pub destination: Option<PathBuf>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, uri: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, uri)
    }

    /// Returns the content type this request is sent with.
    ///
    /// Requests without a body are still announced as JSON.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.body.as_ref().map_or(DataType::Json, RequestBody::data_type)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidApiRequestError`] if:
    /// - `uri` is empty
    /// - `http_method` is `Post` but `body` is `None`
    /// - `http_method` is `Get` but `body` is `Some`
    /// - `destination` is set on a method other than `Get`
    pub fn verify(&self) -> Result<(), InvalidApiRequestError> {
        if self.uri.is_empty() {
            return Err(InvalidApiRequestError::EmptyUri);
        }

        match (self.http_method, &self.body) {
            (HttpMethod::Post, None) => {
                return Err(InvalidApiRequestError::MissingBody {
                    method: self.http_method.to_string(),
                });
            }
            (HttpMethod::Get, Some(_)) => {
                return Err(InvalidApiRequestError::UnexpectedBody {
                    method: self.http_method.to_string(),
                });
            }
            _ => {}
        }

        if self.destination.is_some() && self.http_method != HttpMethod::Get {
            return Err(InvalidApiRequestError::DestinationRequiresGet {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    http_method: HttpMethod,
    uri: String,
    body: Option<RequestBody>,
    destination: Option<PathBuf>,
    extra_headers: Option<HashMap<String, String>>,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, uri: impl Into<String>) -> Self {
        Self {
            http_method: method,
            uri: uri.into(),
            body: None,
            destination: None,
            extra_headers: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<RequestBody>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Saves the response body to `path` instead of parsing it as JSON.
    #[must_use]
    pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(path.into());
        self
    }

    /// Adds a single extra header.
    ///
    /// It replaces a client default of the same name in any case. A
    /// `Content-Type` given here is ignored; it always follows the body.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`ApiRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidApiRequestError`] if the request fails validation.
    pub fn build(self) -> Result<ApiRequest, InvalidApiRequestError> {
        let request = ApiRequest {
            http_method: self.http_method,
            uri: self.uri,
            body: self.body,
            destination: self.destination,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
