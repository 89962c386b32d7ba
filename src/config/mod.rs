//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides for secrets)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc to the handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; it is constructed exactly once at
//!   startup and passed by reference, never read as ambient global state
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_sources, load_config, ConfigError};
pub use schema::{
    CorsConfig, CorsMode, ListenerConfig, ProxyConfig, SecurityConfig, TimeoutConfig,
    UpstreamConfig,
};
