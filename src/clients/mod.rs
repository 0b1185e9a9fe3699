//! HTTP client types for TestRail API communication.
//!
//! This module provides the client layer for making authenticated requests
//! to the TestRail API v2 and handling its JSON and attachment bodies.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiClient`]: The async client for API communication
//! - [`ApiRequest`]: A request to be sent to the API
//! - [`RequestBody`]: Inline JSON text or an attachment file to upload
//! - [`ApiResponse`]: A successful response, parsed or saved to a file
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`DataType`]: Content types for request bodies
//! - [`ApiError`]: Unified error type
//!
//! # Example
//!
//! ```rust,ignore
//! use testrail_api::{ApiClient, BaseUrl, TestRailConfig};
//! use testrail_api::clients::{ApiRequest, HttpMethod};
//!
//! let config = TestRailConfig::builder()
//!     .base_url(BaseUrl::new("https://example.testrail.io").unwrap())
//!     .build()
//!     .unwrap();
//! let client = ApiClient::new(&config);
//!
//! // Download an attachment
//! let request = ApiRequest::builder(HttpMethod::Get, "get_attachment/42")
//!     .destination("screenshot.png")
//!     .build()
//!     .unwrap();
//!
//! let response = client.send(request).await?;
//! ```
//!
//! # No Retries
//!
//! Every call performs exactly one HTTP exchange. Transport failures surface
//! as [`ApiError::Network`] and retry policy is left to the caller.

mod api_client;
mod errors;
mod http_request;
mod http_response;
pub mod multipart;

pub use api_client::{ApiClient, API_PATH, SDK_VERSION};
pub use errors::{ApiError, ApiResponseError, InvalidApiRequestError};
pub use http_request::{ApiRequest, ApiRequestBuilder, DataType, HttpMethod, RequestBody};
pub use http_response::{ApiResponse, ResponseContent};
