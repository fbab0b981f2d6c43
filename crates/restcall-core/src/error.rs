//! Error taxonomy
//!
//! Every dispatch resolves into exactly one `ApiError` variant on failure.
//! Underlying causes are carried as boxed `std::error::Error` values so
//! this crate stays free of transport types.

use thiserror::Error;

use crate::payload::ErrorPayload;

/// Boxed underlying cause, transport-agnostic
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures a dispatch call can resolve into
#[derive(Debug, Error)]
pub enum ApiError {
    /// The descriptor's endpoint did not parse as a URL
    #[error("invalid URL")]
    InvalidUrl,

    /// The transport failed before an HTTP response was received
    #[error("network request failed: {0}")]
    RequestFailed(#[source] BoxError),

    /// The response body could not be decoded
    #[error("failed to decode response data")]
    DecodingError,

    /// The response could not be interpreted as an HTTP response, or its
    /// status fell outside every classified range
    #[error("invalid response received")]
    InvalidResponse,

    /// The server answered 4xx; the payload is present when the body
    /// matched a known error shape
    #[error("failure response from server")]
    FailureResponse(Option<ErrorPayload>),

    /// A body was required but absent
    #[error("no data found")]
    NoData,

    /// An unexpected underlying error
    #[error("unknown error: {0}")]
    Unknown(#[source] BoxError),

    /// The server answered 5xx
    #[error("internal server error")]
    ServerError(#[source] Option<BoxError>),
}

impl ApiError {
    /// Short heading suitable for an alert title
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl => "URL Error!",
            ApiError::RequestFailed(_) => "Request Failure!",
            ApiError::NoData => "Data Error!",
            ApiError::ServerError(_) => "Server Error!",
            ApiError::DecodingError
            | ApiError::InvalidResponse
            | ApiError::FailureResponse(_)
            | ApiError::Unknown(_) => "Error!",
        }
    }

    /// Body text to pair with `title()`
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidUrl => "Invalid URL".to_string(),
            ApiError::RequestFailed(err) => format!("Network request failed: {err}"),
            ApiError::DecodingError => "Failed to decode response data.".to_string(),
            ApiError::InvalidResponse => "Invalid response received.".to_string(),
            ApiError::FailureResponse(payload) => payload
                .as_ref()
                .and_then(ErrorPayload::message)
                .unwrap_or_default()
                .to_string(),
            ApiError::NoData => "No Data Found".to_string(),
            ApiError::Unknown(err) => err.to_string(),
            ApiError::ServerError(Some(err)) => format!("Server Error: {err}"),
            ApiError::ServerError(None) => {
                "Internal server error occurred. Please try again after sometime.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_message_pairings() {
        assert_eq!(ApiError::InvalidUrl.title(), "URL Error!");
        assert_eq!(ApiError::InvalidUrl.message(), "Invalid URL");

        assert_eq!(ApiError::NoData.title(), "Data Error!");
        assert_eq!(ApiError::NoData.message(), "No Data Found");

        assert_eq!(ApiError::ServerError(None).title(), "Server Error!");
    }

    #[test]
    fn test_failure_response_message_comes_from_payload() {
        let payload = ErrorPayload::Status {
            status: "error".to_string(),
            message: "not found".to_string(),
            code: 404,
        };
        let err = ApiError::FailureResponse(Some(payload));
        assert_eq!(err.message(), "not found");

        let bare = ApiError::FailureResponse(None);
        assert_eq!(bare.message(), "");
    }

    #[test]
    fn test_request_failed_keeps_source() {
        let cause: BoxError = "connection refused".into();
        let err = ApiError::RequestFailed(cause);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("connection refused"));
    }
}
