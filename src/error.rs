//! Proxy error taxonomy and envelope rendering.
//!
//! # Responsibilities
//! - Classify every failure in the request path into one variant
//! - Map each variant to an HTTP status code
//! - Render the JSON error envelope `{ "error": ..., "details": ... }`
//!
//! # Design Decisions
//! - Errors are converted at the handler boundary; nothing reaches the
//!   transport layer as an unhandled fault
//! - `details` text sourced from an upstream body is truncated to 500
//!   characters, on a character boundary

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Maximum characters of upstream body echoed into `details`.
const DETAILS_LIMIT: usize = 500;

/// Errors that can occur while serving a proxied request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Pod identifier or API key missing from configuration.
    #[error("credentials not configured")]
    Credentials,

    /// Inbound body was not well-formed JSON.
    #[error("invalid JSON in request")]
    InvalidBody(#[from] serde_json::Error),

    /// Upstream answered with a non-2xx status.
    #[error("upstream API error ({status})")]
    Upstream { status: u16, body: String },

    /// Upstream did not answer within the configured deadline.
    #[error("upstream request timed out after {0}s")]
    UpstreamTimeout(u64),

    /// Upstream answered 2xx with an empty body.
    #[error("upstream returned empty successful response")]
    EmptyUpstreamBody,

    /// Upstream answered 2xx with a body that does not parse as JSON.
    #[error("malformed JSON from upstream")]
    MalformedUpstreamBody { body: String },

    /// Request origin rejected by the configured CORS policy.
    #[error("origin not allowed")]
    ForbiddenOrigin,

    /// Method other than POST or OPTIONS.
    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    /// Uncategorized failure (transport errors included).
    #[error("internal server error")]
    Internal(String),
}

impl ProxyError {
    /// HTTP status this error maps to.
    ///
    /// An upstream failure relays the upstream's own status; an
    /// out-of-range value degrades to 502.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Credentials | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::EmptyUpstreamBody | Self::MalformedUpstreamBody { .. } => {
                StatusCode::BAD_GATEWAY
            }
            Self::ForbiddenOrigin => StatusCode::FORBIDDEN,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::InvalidBody(err) => Some(err.to_string()),
            Self::Upstream { body, .. } | Self::MalformedUpstreamBody { body } => {
                Some(truncate(body, DETAILS_LIMIT))
            }
            Self::Internal(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// The JSON body returned to the caller.
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.to_string(),
            details: self.details(),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let mut response = (self.status(), Json(self.envelope())).into_response();
        if matches!(self, ProxyError::MethodNotAllowed(_)) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST, OPTIONS"));
        }
        response
    }
}

/// JSON error body returned to the browser.
///
/// `details` is free text (raw upstream body or an error message); callers
/// must not assume it is machine-parseable.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        text.chars().take(limit).collect()
    }
}
