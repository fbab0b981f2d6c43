//! # restcall Core
//!
//! Request descriptors and the error taxonomy for the restcall client.
//!
//! This crate provides:
//! - Trait-shaped request descriptors (`ApiRequest`, `UploadRequest`) with
//!   ready-made implementations for the common shapes
//! - The closed `ApiError` taxonomy every dispatch resolves into
//! - The `ErrorPayload` union for server-reported error bodies
//!
//! Descriptors are pure data: construction never fails, and URL validation
//! is deferred to the dispatch engine in `restcall-http`. The expected
//! response type is fixed at the descriptor's definition through an
//! associated type and cannot change afterwards.
//!
//! ## Example
//!
//! ```rust,ignore
//! use restcall_core::{ApiRequest, GetRequest};
//!
//! #[derive(serde::Deserialize)]
//! struct User { id: String }
//!
//! let request: GetRequest<User> = GetRequest::new("https://api.example.com/user/1");
//! assert_eq!(request.endpoint(), "https://api.example.com/user/1");
//! ```

pub mod error;
pub mod payload;
pub mod request;

// Re-exports for convenience
pub use error::{ApiError, BoxError};
pub use payload::{ErrorDetail, ErrorPayload};
pub use request::{ApiRequest, BodyRequest, FileUploadRequest, GetRequest, Method, UploadRequest};
