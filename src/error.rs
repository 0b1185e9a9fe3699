//! Error types for the TestRail API client.
//!
//! This module contains the configuration and validation errors raised
//! before any request is made.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use testrail_api::{Username, ConfigError};
//!
//! let result = Username::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http(s) URL such as 'https://example.testrail.io'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide the TestRail user's email or login.")]
    EmptyUsername,

    /// Username contains the Basic auth separator.
    #[error("Username cannot contain ':'. Basic authentication uses it to separate the user from the password.")]
    ColonInUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide a TestRail password or API key.")]
    EmptyPassword,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
