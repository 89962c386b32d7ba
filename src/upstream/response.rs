//! Upstream reply classification.
//!
//! A 2xx reply must carry a non-empty, well-formed JSON body to be relayed;
//! anything else becomes an error envelope. The body is validated without
//! being deserialized into a tree so the pass-through stays byte-for-byte.

use axum::http::StatusCode;

use crate::error::ProxyError;

/// Classify an upstream reply into a relayable body or an error.
pub fn classify(status: StatusCode, body: String) -> Result<String, ProxyError> {
    if !status.is_success() {
        return Err(ProxyError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    if body.is_empty() {
        return Err(ProxyError::EmptyUpstreamBody);
    }

    if serde_json::from_str::<serde::de::IgnoredAny>(&body).is_err() {
        return Err(ProxyError::MalformedUpstreamBody { body });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_json_is_relayed_unchanged() {
        let body = r#"{"message":  "hi"  }"#;
        let relayed = classify(StatusCode::OK, body.to_string()).unwrap();
        // Exact text survives, whitespace included.
        assert_eq!(relayed, body);
    }

    #[test]
    fn test_non_2xx_becomes_upstream_error() {
        let err = classify(StatusCode::SERVICE_UNAVAILABLE, "overloaded".into()).unwrap_err();
        match err {
            ProxyError::Upstream { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_success_is_rejected() {
        let err = classify(StatusCode::OK, String::new()).unwrap_err();
        assert!(matches!(err, ProxyError::EmptyUpstreamBody));
    }

    #[test]
    fn test_malformed_success_is_rejected() {
        let err = classify(StatusCode::OK, "not json".into()).unwrap_err();
        assert!(matches!(err, ProxyError::MalformedUpstreamBody { .. }));
    }

    #[test]
    fn test_redirect_status_is_relayed_as_error() {
        let err = classify(StatusCode::SEE_OTHER, String::new()).unwrap_err();
        assert!(matches!(err, ProxyError::Upstream { status: 303, .. }));
    }
}
