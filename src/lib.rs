//! CORS-normalizing reverse proxy for a RunPod chat pod.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                 CHAT PROXY                    │
//!                      │                                               │
//!     Browser request  │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!     ─────────────────┼─▶│  http   │───▶│   cors   │───▶│ upstream│──┼──▶ RunPod pod
//!                      │  │ server  │    │  policy  │    │ client  │  │    (/api/chat)
//!                      │  └─────────┘    └──────────┘    └────┬────┘  │
//!                      │                                      │       │
//!     Browser response │  ┌──────────────────────────────┐    │       │
//!     ◀────────────────┼──│ relay / error envelope + CORS│◀───┘       │
//!                      │  └──────────────────────────────┘            │
//!                      │                                               │
//!                      │  Cross-cutting: config, tracing, request IDs  │
//!                      └───────────────────────────────────────────────┘
//! ```
//!
//! The proxy accepts `OPTIONS` (CORS preflight) and `POST` (an opaque chat
//! payload), injects the pod bearer credential on the outbound leg, and
//! normalizes every outcome into either a raw pass-through of the upstream
//! JSON or a JSON error envelope. Nothing is retried, cached, or persisted.

// Core subsystems
pub mod config;
pub mod cors;
pub mod http;
pub mod upstream;

// Cross-cutting concerns
pub mod error;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
