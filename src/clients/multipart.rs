//! Multipart encoding for attachment uploads.
//!
//! TestRail accepts attachments as a `multipart/form-data` body with a single
//! part named `attachment`. The boundary is fixed so the `Content-Type` header
//! is known before the body is built.

/// Boundary token separating the parts of an upload body.
pub const MULTIPART_BOUNDARY: &str = "TestRailAPIAttachmentBoundary";

/// `Content-Type` header value for attachment uploads.
pub const MULTIPART_CONTENT_TYPE: &str =
    "multipart/form-data; boundary=TestRailAPIAttachmentBoundary";

/// Encodes `bytes` as the single `attachment` part of a multipart body.
///
/// # Example
///
/// ```rust
/// use testrail_api::clients::multipart::encode_attachment;
///
/// let body = encode_attachment("log.txt", b"hello");
/// let text = String::from_utf8(body).unwrap();
/// assert!(text.starts_with("--TestRailAPIAttachmentBoundary\r\n"));
/// assert!(text.contains("filename=\"log.txt\""));
/// assert!(text.ends_with("\r\n--TestRailAPIAttachmentBoundary--\r\n"));
/// ```
#[must_use]
pub fn encode_attachment(file_name: &str, bytes: &[u8]) -> Vec<u8> {
    // Quotes would terminate the filename parameter early.
    let file_name = file_name.replace('"', "%22");

    let head = format!(
        "--{MULTIPART_BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"attachment\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\
         \r\n"
    );
    let tail = format!("\r\n--{MULTIPART_BOUNDARY}--\r\n");

    let mut body = Vec::with_capacity(head.len() + bytes.len() + tail.len());
    body.extend_from_slice(head.as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(tail.as_bytes());
    body
}
