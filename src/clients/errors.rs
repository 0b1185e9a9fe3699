//! HTTP-specific error types for the TestRail API client.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`ApiResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidApiRequestError`]: When a request fails validation before sending
//! - [`ApiError`]: Unified error type, which also carries attachment file I/O
//!   failures, undecodable response bodies and transport errors
//!
//! # Example
//!
//! ```rust,ignore
//! use testrail_api::clients::{ApiClient, ApiError};
//!
//! match client.send_get("get_case/1").await {
//!     Ok(case) => println!("Case: {case}"),
//!     Err(ApiError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(ApiError::Io { path, source }) => println!("{}: {source}", path.display()),
//!     Err(other) => println!("Request failed: {other}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when the TestRail API answers with a non-2xx status.
///
/// The message names the status and, when the response body is a JSON object
/// with an `error` field, quotes that field.
///
/// # Example
///
/// ```rust
/// use testrail_api::clients::ApiResponseError;
///
/// let error = ApiResponseError {
///     code: 400,
///     message: r#"TestRail API returned HTTP 400 ("Field :project_id is a required field.")"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("project_id"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable error message.
    pub message: String,
}

/// Error returned when an API request fails validation.
///
/// Raised before anything is sent over the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidApiRequestError {
    /// The endpoint URI was empty.
    #[error("Cannot send a request without an API endpoint.")]
    EmptyUri,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A body was given for a method that does not send one.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that was given a body.
        method: String,
    },

    /// A download destination was given for a method other than GET.
    #[error("Cannot save the response of {method} to a file; only get supports a destination.")]
    DestinationRequiresGet {
        /// The HTTP method that was given a destination.
        method: String,
    },

    /// An extra header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all client operations.
///
/// Transport failures are passed through untouched in [`ApiError::Network`];
/// the client never retries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidApiRequestError),

    /// Reading an upload source or writing a download destination failed.
    #[error("Attachment I/O error on '{}': {source}", .path.display())]
    Io {
        /// The file that could not be read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A successful response carried a body that is not valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Returns the HTTP status code when the error came from an API response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
