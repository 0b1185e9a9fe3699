//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use base64::prelude::*;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated TestRail installation URL.
///
/// The URL must use the `http` or `https` scheme and name a host. Any
/// trailing `/` is removed so that endpoint paths can be appended without
/// producing a double slash.
///
/// # Serialization
///
/// `BaseUrl` serializes to and deserializes from its normalized string form:
///
/// ```rust
/// use testrail_api::BaseUrl;
///
/// let url = BaseUrl::new("https://example.testrail.io/").unwrap();
/// let json = serde_json::to_string(&url).unwrap();
/// assert_eq!(json, r#""https://example.testrail.io""#);
/// ```
///
/// # Example
///
/// ```rust
/// use testrail_api::BaseUrl;
///
/// let url = BaseUrl::new("https://example.testrail.io/testrail/").unwrap();
/// assert_eq!(url.as_ref(), "https://example.testrail.io/testrail");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "example.testrail.io");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme, no host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        // Endpoint paths are appended verbatim, so nothing may follow the path.
        if host_end == host_start || remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated TestRail username (usually the account email).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty, or
    /// [`ConfigError::ColonInUsername`] if it contains `:`, which Basic
    /// authentication uses to separate the user from the password.
    pub fn new(user: impl Into<String>) -> Result<Self, ConfigError> {
        let user = user.into();
        if user.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        if user.contains(':') {
            return Err(ConfigError::ColonInUsername);
        }
        Ok(Self(user))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated TestRail password or API key.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `Password(*****)` instead of the actual password.
///
/// # Example
///
/// ```rust
/// use testrail_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// A username/password pair sent with HTTP Basic authentication.
///
/// # Example
///
/// ```rust
/// use testrail_api::{Credentials, Password, Username};
///
/// let credentials = Credentials::new(
///     Username::new("user").unwrap(),
///     Password::new("pass").unwrap(),
/// );
/// assert_eq!(credentials.authorization_header(), "Basic dXNlcjpwYXNz");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub const fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the `Authorization` header value, `Basic base64(user:password)`.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        let pair = format!("{}:{}", self.username.as_ref(), self.password.as_ref());
        format!("Basic {}", BASE64_STANDARD.encode(pair))
    }
}
