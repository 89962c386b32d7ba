//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the chat proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream pod target and credential.
    pub upstream: UpstreamConfig,

    /// CORS origin policy.
    pub cors: CorsConfig,

    /// Inbound timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Security hardening settings.
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream pod configuration.
///
/// The pod identifier and API key default to empty; the forwarding handler
/// refuses POSTs with a 500 until both are set. Startup only warns, so the
/// proxy can still answer preflights while credentials are being rotated.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// RunPod pod identifier substituted into the host template.
    pub pod_id: String,

    /// Bearer token injected on the outbound leg. Never logged.
    pub api_key: String,

    /// Host template with a `{pod_id}` substitution point.
    pub host_template: String,

    /// Path of the chat endpoint appended to the resolved host.
    pub chat_path: String,

    /// Total deadline for one upstream attempt in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pod_id: String::new(),
            api_key: String::new(),
            host_template: "https://{pod_id}-11434.proxy.runpod.net".to_string(),
            chat_path: "/api/chat".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }
}

impl UpstreamConfig {
    /// Resolve the chat endpoint URL for the configured pod.
    pub fn chat_url(&self) -> String {
        let host = self.host_template.replace("{pod_id}", &self.pod_id);
        format!("{}{}", host, self.chat_path)
    }

    /// Whether both the pod identifier and the API key are present.
    pub fn has_credentials(&self) -> bool {
        !self.pod_id.is_empty() && !self.api_key.is_empty()
    }
}

/// Origin admission mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorsMode {
    /// Admit any origin, echoing it back (`*` when absent).
    Wildcard,
    /// Exact membership in `allowed_origins`; a literal `*` entry admits all.
    AllowList,
    /// Exact production origin, or an `https://` origin ending in the
    /// preview suffix.
    Pattern,
}

/// CORS policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Admission mode.
    pub mode: CorsMode,

    /// Exact origins admitted in `allow-list` mode.
    pub allowed_origins: Vec<String>,

    /// The production frontend origin admitted in `pattern` mode.
    pub production_origin: String,

    /// Preview deployment suffix admitted in `pattern` mode
    /// (e.g., ".chat-preview.pages.dev"). Scheme must be `https://`.
    pub preview_suffix: String,

    /// Default `Access-Control-Allow-Headers` value; preflights echo the
    /// client's requested headers instead when present.
    pub allow_headers: String,

    /// `Access-Control-Max-Age` in seconds.
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            mode: CorsMode::Pattern,
            allowed_origins: Vec::new(),
            production_origin: "https://runllm.pages.dev".to_string(),
            preview_suffix: String::new(),
            allow_headers: "Content-Type".to_string(),
            max_age_secs: 86_400,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    /// Must exceed the upstream deadline or the inbound side gives up first.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url_substitutes_pod_id() {
        let upstream = UpstreamConfig {
            pod_id: "abc123".into(),
            ..Default::default()
        };
        assert_eq!(
            upstream.chat_url(),
            "https://abc123-11434.proxy.runpod.net/api/chat"
        );
    }

    #[test]
    fn test_chat_url_without_placeholder_is_used_verbatim() {
        let upstream = UpstreamConfig {
            pod_id: "abc123".into(),
            host_template: "http://127.0.0.1:9000".into(),
            ..Default::default()
        };
        assert_eq!(upstream.chat_url(), "http://127.0.0.1:9000/api/chat");
    }

    #[test]
    fn test_credentials_require_both_fields() {
        let mut upstream = UpstreamConfig::default();
        assert!(!upstream.has_credentials());
        upstream.pod_id = "abc123".into();
        assert!(!upstream.has_credentials());
        upstream.api_key = "key".into();
        assert!(upstream.has_credentials());
    }

    #[test]
    fn test_cors_mode_deserializes_kebab_case() {
        let cors: CorsConfig = toml::from_str(r#"mode = "allow-list""#).unwrap();
        assert_eq!(cors.mode, CorsMode::AllowList);
    }
}
