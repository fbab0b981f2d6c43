//! # restcall HTTP
//!
//! Reqwest-based dispatch engine for restcall typed requests.
//!
//! This crate provides:
//! - `Dispatcher`, the stateless engine executing request descriptors
//! - Await-style and callback-style entry points for fetch and upload
//! - A `MetricsSink` hook recording every received response
//!
//! One classification routine backs all four entry points: the response
//! status is matched against the 2xx/4xx/5xx ranges and resolved into a
//! decoded value or one `restcall_core::ApiError` variant, exactly once
//! per call.
//!
//! ## Example
//!
//! ```rust,ignore
//! use restcall_core::GetRequest;
//! use restcall_http::Dispatcher;
//!
//! #[derive(serde::Deserialize)]
//! struct User { id: String }
//!
//! let dispatcher = Dispatcher::new();
//! let request: GetRequest<User> = GetRequest::new("https://api.example.com/user/1");
//! let user = dispatcher.fetch(request).await?;
//! ```

mod client;
mod metrics;
mod multipart;
mod response;

pub use client::Dispatcher;
pub use metrics::{MetricsSink, NopSink, TracingSink};
