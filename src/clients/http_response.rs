//! HTTP response types for the TestRail API client.
//!
//! This module provides the [`ApiResponse`] type and the rules for turning an
//! unsuccessful response body into a readable error message.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// What a successful request produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseContent {
    /// The parsed JSON body. An empty body is represented as `{}`.
    Json(serde_json::Value),
    /// The raw body was written to this file.
    Saved(PathBuf),
}

/// A successful response from the TestRail API.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use testrail_api::clients::{ApiResponse, ResponseContent};
///
/// let response = ApiResponse::new(
///     200,
///     HashMap::new(),
///     ResponseContent::Json(serde_json::json!({"id": 1})),
/// );
///
/// assert_eq!(response.code, 200);
/// assert_eq!(response.json().unwrap()["id"], 1);
/// ```
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed body or the file it was saved to.
    pub content: ResponseContent,
}

impl ApiResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        content: ResponseContent,
    ) -> Self {
        Self {
            code,
            headers,
            content,
        }
    }

    /// Returns the first value of the header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the parsed JSON body, or `None` if the body was saved to a file.
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        match &self.content {
            ResponseContent::Json(value) => Some(value),
            ResponseContent::Saved(_) => None,
        }
    }

    /// Returns the file the body was written to, if any.
    #[must_use]
    pub fn saved_path(&self) -> Option<&Path> {
        match &self.content {
            ResponseContent::Saved(path) => Some(path),
            ResponseContent::Json(_) => None,
        }
    }

    /// Consumes the response, returning the JSON body if there is one.
    #[must_use]
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self.content {
            ResponseContent::Json(value) => Some(value),
            ResponseContent::Saved(_) => None,
        }
    }

    /// Builds the message reported for an unsuccessful response.
    ///
    /// When `body` is a JSON object with a string `error` field the field is
    /// quoted; otherwise a fixed note is used.
    ///
    /// ```rust
    /// use testrail_api::clients::ApiResponse;
    ///
    /// assert_eq!(
    ///     ApiResponse::error_message(400, br#"{"error":"Field :title is required"}"#),
    ///     r#"TestRail API returned HTTP 400 ("Field :title is required")"#
    /// );
    /// assert_eq!(
    ///     ApiResponse::error_message(403, b""),
    ///     "TestRail API returned HTTP 403 (No additional error message received)"
    /// );
    /// ```
    #[must_use]
    pub fn error_message(code: u16, body: &[u8]) -> String {
        let error = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(String::from));

        match error {
            Some(error) => format!("TestRail API returned HTTP {code} (\"{error}\")"),
            None => {
                format!("TestRail API returned HTTP {code} (No additional error message received)")
            }
        }
    }
}
