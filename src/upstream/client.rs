//! HTTP client for the configured inference pod.
//!
//! # Responsibilities
//! - Resolve the chat endpoint URL from the host template
//! - Inject the bearer credential and JSON content negotiation headers
//! - Enforce connect and total deadlines on the single upstream attempt
//!
//! # Design Decisions
//! - One attempt per inbound request; no retry loop
//! - The body is read as raw text so a valid reply can be relayed without
//!   re-encoding
//! - The API key must never appear in any tracing event

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::config::UpstreamConfig;
use crate::error::ProxyError;
use crate::upstream::response;

/// Client for the chat endpoint of the configured pod.
///
/// Cheap to clone; the underlying reqwest client shares one connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Build a client with the configured deadlines.
    pub fn new(config: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Forward the parsed chat payload and return the validated raw body.
    pub async fn forward(&self, payload: &serde_json::Value) -> Result<String, ProxyError> {
        let url = self.config.chat_url();

        let reply = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|err| self.classify_transport(err))?;

        let status = reply.status();
        let body = reply
            .text()
            .await
            .map_err(|err| self.classify_transport(err))?;

        tracing::debug!(status = %status, bytes = body.len(), "upstream replied");

        response::classify(status, body)
    }

    fn classify_transport(&self, err: reqwest::Error) -> ProxyError {
        if err.is_timeout() {
            ProxyError::UpstreamTimeout(self.config.timeout_secs)
        } else {
            ProxyError::Internal(err.to_string())
        }
    }
}
