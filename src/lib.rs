//! # TestRail API Rust Client
//!
//! An async client for the TestRail REST API (v2), providing typed
//! configuration, HTTP Basic authentication, JSON payload exchange,
//! attachment upload/download and structured error reporting.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TestRailConfig`] and [`TestRailConfigBuilder`]
//! - Validated newtypes for the base URL and credentials
//! - [`ApiClient`] for GET/POST calls against `index.php?/api/v2/`
//! - Attachment uploads as `multipart/form-data` and downloads to a file
//! - A single [`ApiError`] type separating API, I/O and transport failures
//!
//! ## Quick Start
//!
//! ```rust
//! use testrail_api::{ApiClient, BaseUrl, Credentials, Password, TestRailConfig, Username};
//!
//! let config = TestRailConfig::builder()
//!     .base_url(BaseUrl::new("https://example.testrail.io").unwrap())
//!     .credentials(Credentials::new(
//!         Username::new("user@example.com").unwrap(),
//!         Password::new("api-key").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let client = ApiClient::new(&config);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use std::path::PathBuf;
//! use testrail_api::RequestBody;
//!
//! // JSON reads and writes
//! let case = client.send_get("get_case/1").await?;
//! let result = client
//!     .send_post("add_result/1", serde_json::json!({"status_id": 1}))
//!     .await?;
//!
//! // Attachments
//! client
//!     .send_post("add_attachment_to_result/7", PathBuf::from("screenshot.png"))
//!     .await?;
//! let saved = client.send_get_to_file("get_attachment/3", "out.png").await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Immutable clients**: Credentials change by building a new client value

pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, Credentials, Password, TestRailConfig, TestRailConfigBuilder, Username};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiClient, ApiError, ApiRequest, ApiRequestBuilder, ApiResponse, ApiResponseError, DataType,
    HttpMethod, InvalidApiRequestError, RequestBody, ResponseContent,
};
