//! Origin admission policy.
//!
//! # Responsibilities
//! - Decide whether a request origin is admitted under the configured mode
//! - Produce the CORS response headers for an admission decision
//!
//! # Design Decisions
//! - Pure functions of (origin, config); no I/O, no request state
//! - A present-but-disallowed origin is rejected by the dispatcher with an
//!   explicit 403 instead of being left to browser enforcement
//! - An absent origin is never an error (non-browser clients)
//! - No fallback to the first configured entry when membership fails: that
//!   would hand CORS approval to origins the list rejects

use axum::http::{header, HeaderMap, HeaderValue};

use crate::config::{CorsConfig, CorsMode};

/// Outcome of origin admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Echo this origin in `Access-Control-Allow-Origin`.
    Allow(String),
    /// Admit any caller with a literal `*`.
    Any,
    /// No origin on the request; emit no allow-origin header.
    Skip,
    /// Origin present but not admitted.
    Disallow,
}

/// Evaluate the configured policy against a request origin.
pub fn evaluate(config: &CorsConfig, origin: Option<&str>) -> OriginDecision {
    match config.mode {
        CorsMode::Wildcard => match origin {
            Some(origin) => OriginDecision::Allow(origin.to_string()),
            None => OriginDecision::Any,
        },
        CorsMode::AllowList => {
            let admits_any = config.allowed_origins.iter().any(|entry| entry == "*");
            match origin {
                Some(origin)
                    if admits_any
                        || config.allowed_origins.iter().any(|entry| entry == origin) =>
                {
                    OriginDecision::Allow(origin.to_string())
                }
                Some(_) => OriginDecision::Disallow,
                None if admits_any => OriginDecision::Any,
                None => OriginDecision::Skip,
            }
        }
        CorsMode::Pattern => match origin {
            Some(origin) if matches_pattern(config, origin) => {
                OriginDecision::Allow(origin.to_string())
            }
            Some(_) => OriginDecision::Disallow,
            None => OriginDecision::Skip,
        },
    }
}

/// Pattern mode: the production origin exactly, or an https origin ending
/// in the preview suffix.
fn matches_pattern(config: &CorsConfig, origin: &str) -> bool {
    if !config.production_origin.is_empty() && origin == config.production_origin {
        return true;
    }
    !config.preview_suffix.is_empty()
        && origin.starts_with("https://")
        && origin.ends_with(&config.preview_suffix)
}

/// CORS headers for a decision.
///
/// `Allow-Headers` carries the configured default; preflight handling
/// overrides it with the client's requested headers afterwards.
pub fn response_headers(config: &CorsConfig, decision: &OriginDecision) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    if let Ok(value) = HeaderValue::from_str(&config.allow_headers) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
    }
    if let Ok(value) = HeaderValue::from_str(&config.max_age_secs.to_string()) {
        headers.insert(header::ACCESS_CONTROL_MAX_AGE, value);
    }

    match decision {
        OriginDecision::Allow(origin) => {
            if let Ok(value) = HeaderValue::from_str(origin) {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }
        }
        OriginDecision::Any => {
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            );
        }
        OriginDecision::Skip | OriginDecision::Disallow => {}
    }

    // Every mode echoes the request origin when one is present, so caches
    // must key on it.
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));

    headers
}
