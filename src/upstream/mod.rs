//! Outbound leg of the proxy.
//!
//! # Data Flow
//! ```text
//! parsed chat payload
//!     → client.rs (resolve pod URL, inject bearer credential, POST)
//!     → upstream status + raw text body
//!     → response.rs (classify: relay / empty / malformed / error)
//! ```

pub mod client;
pub mod response;

pub use client::UpstreamClient;
