//! Request descriptors
//!
//! A descriptor is an immutable value describing one HTTP call's shape.
//! The expected response type is carried as an associated type so it is
//! fixed where the descriptor is defined, never at the dispatch site.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::marker::PhantomData;

/// HTTP methods accepted by body requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Wire representation of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A plain (non-upload) API request
///
/// Implementors declare the endpoint, method, optional raw body bytes and
/// a header map. Duplicate header names are last-write-wins; the map keeps
/// one value per name.
pub trait ApiRequest {
    /// The type the response body decodes into on success
    type Response: DeserializeOwned;

    fn endpoint(&self) -> &str;
    fn method(&self) -> Method;
    fn body(&self) -> Option<&[u8]>;
    fn headers(&self) -> &HashMap<String, String>;
}

/// A multipart file-upload request
///
/// The MIME type is placed on the wire as the file part's `Content-Type`.
pub trait UploadRequest {
    /// The type the response body decodes into on success
    type Response: DeserializeOwned;

    fn endpoint(&self) -> &str;
    fn file_data(&self) -> &[u8];
    fn file_name(&self) -> &str;
    fn mime_type(&self) -> &str;
}

/// General request with a body: endpoint, any method, optional body bytes,
/// headers
///
/// # Example
///
/// ```rust,ignore
/// let request: BodyRequest<Created> = BodyRequest::post(
///     "https://api.example.com/items",
///     Some(br#"{"name":"x"}"#.to_vec()),
///     HashMap::new(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BodyRequest<T> {
    endpoint: String,
    method: Method,
    body: Option<Vec<u8>>,
    headers: HashMap<String, String>,
    _response: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> BodyRequest<T> {
    pub fn new(
        endpoint: impl Into<String>,
        method: Method,
        body: Option<Vec<u8>>,
        headers: HashMap<String, String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            body,
            headers,
            _response: PhantomData,
        }
    }

    /// POST descriptor, the most common body-request shape
    pub fn post(
        endpoint: impl Into<String>,
        body: Option<Vec<u8>>,
        headers: HashMap<String, String>,
    ) -> Self {
        Self::new(endpoint, Method::Post, body, headers)
    }
}

impl<T: DeserializeOwned> ApiRequest for BodyRequest<T> {
    type Response = T;

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn method(&self) -> Method {
        self.method
    }

    fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// No-body GET descriptor: endpoint only, default-empty header map
#[derive(Debug, Clone)]
pub struct GetRequest<T> {
    endpoint: String,
    headers: HashMap<String, String>,
    _response: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> GetRequest<T> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            _response: PhantomData,
        }
    }

    /// Replace the header map
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

impl<T: DeserializeOwned> ApiRequest for GetRequest<T> {
    type Response = T;

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    // GET is forced for this shape
    fn method(&self) -> Method {
        Method::Get
    }

    fn body(&self) -> Option<&[u8]> {
        None
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

/// File-upload descriptor: endpoint, raw file bytes, file name, MIME type
#[derive(Debug, Clone)]
pub struct FileUploadRequest<T> {
    endpoint: String,
    file_data: Vec<u8>,
    file_name: String,
    mime_type: String,
    _response: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> FileUploadRequest<T> {
    pub fn new(
        endpoint: impl Into<String>,
        file_data: Vec<u8>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            file_data,
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            _response: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> UploadRequest for FileUploadRequest<T> {
    type Response = T;

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn file_data(&self) -> &[u8] {
        &self.file_data
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_get_request_forces_get_and_no_body() {
        let request: GetRequest<bool> = GetRequest::new("https://example.com/a");
        assert_eq!(request.method(), Method::Get);
        assert!(request.body().is_none());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_body_request_keeps_last_duplicate_header() {
        let mut headers = HashMap::new();
        headers.insert("X-Tag".to_string(), "first".to_string());
        headers.insert("X-Tag".to_string(), "second".to_string());

        let request: BodyRequest<bool> =
            BodyRequest::post("https://example.com/b", None, headers);
        assert_eq!(request.headers().get("X-Tag").map(String::as_str), Some("second"));
    }
}
