//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the CORS mode has the parameters it needs
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Missing credentials are NOT an error here: the forwarding handler
//!   answers 500 per request, and startup merely warns

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::{CorsMode, ProxyConfig};

/// A single semantic problem found in the configuration.
#[derive(Debug)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidUpstreamUrl(String),
    ZeroTimeout(&'static str),
    EmptyAllowList,
    MissingPatternOrigins,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address '{}' is not a socket address", addr)
            }
            ValidationError::InvalidUpstreamUrl(url) => {
                write!(f, "upstream target '{}' is not a valid URL", url)
            }
            ValidationError::ZeroTimeout(field) => {
                write!(f, "{} must be greater than zero", field)
            }
            ValidationError::EmptyAllowList => {
                write!(f, "cors.allowed_origins is empty in allow-list mode")
            }
            ValidationError::MissingPatternOrigins => write!(
                f,
                "pattern mode needs cors.production_origin or cors.preview_suffix"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Run all semantic checks, collecting every failure.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    // Substitute a placeholder pod id so an unconfigured template still
    // gets checked for shape.
    let probe = {
        let mut upstream = config.upstream.clone();
        if upstream.pod_id.is_empty() {
            upstream.pod_id = "pod".to_string();
        }
        upstream.chat_url()
    };
    if Url::parse(&probe).is_err() {
        errors.push(ValidationError::InvalidUpstreamUrl(probe));
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.timeout_secs"));
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.connect_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    match config.cors.mode {
        CorsMode::AllowList if config.cors.allowed_origins.is_empty() => {
            errors.push(ValidationError::EmptyAllowList);
        }
        CorsMode::Pattern
            if config.cors.production_origin.is_empty()
                && config.cors.preview_suffix.is_empty() =>
        {
            errors.push(ValidationError::MissingPatternOrigins);
        }
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
