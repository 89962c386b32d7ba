//! CORS origin admission and response-header normalization.
//!
//! # Data Flow
//! ```text
//! Origin header (optional)
//!     → policy.rs (evaluate against configured mode)
//!     → OriginDecision (allow / any / skip / disallow)
//!     → response_headers (allow-origin + fixed preflight headers)
//!     → merged onto every response by the dispatcher
//! ```

pub mod policy;

pub use policy::{evaluate, response_headers, OriginDecision};
