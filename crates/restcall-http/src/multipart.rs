//! Multipart form body construction for uploads
//!
//! One part named "file", raw bytes appended directly between the textual
//! boundary framing. The part's Content-Type is the descriptor's MIME type.

use uuid::Uuid;

/// Fresh boundary token, unique per call
pub(crate) fn fresh_boundary() -> String {
    format!("Boundary-{}", Uuid::new_v4())
}

/// Render the multipart body for a single file part
pub(crate) fn encode_form(
    boundary: &str,
    file_name: &str,
    mime_type: &str,
    file_data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(file_data.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {mime_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(file_data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}
