//! Status-range classification
//!
//! The single routine behind every dispatch entry point. Ranges are
//! inclusive and disjoint; every status resolves to exactly one outcome.
//!
//! # Status Code Mapping
//!
//! - 200..=299 with a body -> decode as the expected type, or `Unknown`
//! - 200..=299 empty body  -> the JSON literal `true` decoded into the
//!   expected type; non-boolean targets fail closed with `NoData`
//! - 400..=499 with a body -> `FailureResponse(Some(payload))`, payload
//!   decode is best-effort and degrades to `FailureResponse(None)`
//! - 400..=499 empty body  -> `NoData`
//! - 500..=599             -> `ServerError`
//! - anything else         -> `InvalidResponse`

use restcall_core::{ApiError, ErrorPayload};
use serde::de::DeserializeOwned;

pub(crate) fn classify<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    match status {
        200..=299 => {
            if body.is_empty() {
                // No-content success stands in for a boolean `true`; any
                // expected type that cannot absorb it fails closed.
                serde_json::from_slice(b"true").map_err(|_| ApiError::NoData)
            } else {
                serde_json::from_slice(body).map_err(|err| ApiError::Unknown(Box::new(err)))
            }
        }
        400..=499 => {
            if body.is_empty() {
                Err(ApiError::NoData)
            } else {
                let payload = serde_json::from_slice::<ErrorPayload>(body).ok();
                Err(ApiError::FailureResponse(payload))
            }
        }
        500..=599 => Err(ApiError::ServerError(None)),
        _ => Err(ApiError::InvalidResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_success_body_decodes_into_expected_type() {
        let item: Item = classify(200, br#"{"id":"abc"}"#).unwrap();
        assert_eq!(item, Item { id: "abc".to_string() });
    }

    #[test]
    fn test_malformed_success_body_is_unknown() {
        let outcome = classify::<Item>(200, b"{not json");
        assert!(matches!(outcome, Err(ApiError::Unknown(_))));
    }

    #[test]
    fn test_empty_success_body_is_true_for_bool() {
        let value: bool = classify(204, b"").unwrap();
        assert!(value);
    }

    #[test]
    fn test_empty_success_body_fails_closed_for_non_bool() {
        let outcome = classify::<Item>(204, b"");
        assert!(matches!(outcome, Err(ApiError::NoData)));
    }

    #[test]
    fn test_client_error_carries_decoded_payload() {
        let body = br#"{"status":"error","message":"not found","code":404}"#;
        let outcome = classify::<Item>(404, body);
        match outcome {
            Err(ApiError::FailureResponse(Some(payload))) => {
                assert_eq!(payload.message(), Some("not found"));
            }
            other => panic!("expected FailureResponse with payload, got {other:?}"),
        }
    }

    #[test]
    fn test_client_error_payload_decode_is_best_effort() {
        let outcome = classify::<Item>(422, b"plain text, not a payload");
        assert!(matches!(outcome, Err(ApiError::FailureResponse(None))));
    }

    #[test]
    fn test_client_error_without_body_is_no_data() {
        let outcome = classify::<Item>(400, b"");
        assert!(matches!(outcome, Err(ApiError::NoData)));
    }

    #[test]
    fn test_server_error_ignores_body_content() {
        assert!(matches!(
            classify::<Item>(500, br#"{"id":"abc"}"#),
            Err(ApiError::ServerError(None))
        ));
        assert!(matches!(
            classify::<Item>(503, b""),
            Err(ApiError::ServerError(None))
        ));
    }

    #[test]
    fn test_unclassified_statuses_resolve_invalid_response() {
        for status in [100, 101, 301, 302, 304, 399] {
            assert!(
                matches!(classify::<Item>(status, b""), Err(ApiError::InvalidResponse)),
                "status {status} must resolve InvalidResponse"
            );
        }
    }

    #[test]
    fn test_range_edges() {
        assert!(classify::<bool>(200, b"").is_ok());
        assert!(classify::<bool>(299, b"").is_ok());
        assert!(matches!(classify::<bool>(400, b""), Err(ApiError::NoData)));
        assert!(matches!(
            classify::<bool>(499, b"x"),
            Err(ApiError::FailureResponse(None))
        ));
        assert!(matches!(
            classify::<bool>(599, b""),
            Err(ApiError::ServerError(None))
        ));
        assert!(matches!(
            classify::<bool>(600, b""),
            Err(ApiError::InvalidResponse)
        ));
    }
}
