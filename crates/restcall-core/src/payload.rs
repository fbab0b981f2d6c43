//! Structured error payload
//!
//! Servers report errors in one of two body shapes:
//! a flat `{status, message, code}` object or a wrapped
//! `{errors: [{message, type}]}` list (the list may be absent or empty).
//! `ErrorPayload` unifies both behind one untagged union. Decoding is
//! best-effort at the dispatch layer: a body matching neither shape
//! degrades to an absent payload rather than escalating.

use serde::{Deserialize, Serialize};

/// One entry in the list-shaped payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub message: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Server-reported error body, in either of its two known shapes
///
/// The flat shape is tried first since it requires all three fields;
/// the list shape accepts an absent `errors` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorPayload {
    Status {
        status: String,
        message: String,
        code: i64,
    },
    List {
        errors: Option<Vec<ErrorDetail>>,
    },
}

impl ErrorPayload {
    /// Most specific human-readable message the payload carries, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorPayload::Status { message, .. } => Some(message),
            ErrorPayload::List { errors } => errors.as_ref()?.first()?.message.as_deref(),
        }
    }
}
