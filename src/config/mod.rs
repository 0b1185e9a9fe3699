//! Configuration types for the TestRail API client.
//!
//! This module provides the configuration types used to point an
//! [`ApiClient`](crate::clients::ApiClient) at a TestRail installation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`TestRailConfig`]: The configuration struct holding all client settings
//! - [`TestRailConfigBuilder`]: A builder for constructing [`TestRailConfig`] instances
//! - [`BaseUrl`]: A validated installation URL
//! - [`Username`] and [`Password`]: Validated credential halves (the password is masked in debug output)
//! - [`Credentials`]: The pair sent with HTTP Basic authentication
//!
//! # Example
//!
//! ```rust
//! use testrail_api::{BaseUrl, Credentials, Password, TestRailConfig, Username};
//!
//! let config = TestRailConfig::builder()
//!     .base_url(BaseUrl::new("https://example.testrail.io").unwrap())
//!     .credentials(Credentials::new(
//!         Username::new("user@example.com").unwrap(),
//!         Password::new("api-key").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Credentials, Password, Username};

use crate::error::ConfigError;

/// Configuration for the TestRail API client.
///
/// # Thread Safety
///
/// `TestRailConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use testrail_api::{BaseUrl, TestRailConfig};
///
/// let config = TestRailConfig::builder()
///     .base_url(BaseUrl::new("https://example.testrail.io").unwrap())
///     .user_agent_prefix("Nightly/2.1")
///     .build()
///     .unwrap();
///
/// assert!(config.credentials().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct TestRailConfig {
    base_url: BaseUrl,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
}

impl TestRailConfig {
    /// Creates a new builder for constructing a `TestRailConfig`.
    #[must_use]
    pub fn builder() -> TestRailConfigBuilder {
        TestRailConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify TestRailConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TestRailConfig>();
};

/// Builder for constructing [`TestRailConfig`] instances.
///
/// `base_url` is required. Credentials and the user agent prefix default
/// to `None`; without credentials no `Authorization` header is sent.
#[derive(Debug, Default)]
pub struct TestRailConfigBuilder {
    base_url: Option<BaseUrl>,
    credentials: Option<Credentials>,
    user_agent_prefix: Option<String>,
}

impl TestRailConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the Basic Auth credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`TestRailConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<TestRailConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(TestRailConfig {
            base_url,
            credentials: self.credentials,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
