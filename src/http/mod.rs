//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware layers)
//!     → request.rs (add request ID)
//!     → handler.rs (method dispatch, CORS admission, forwarding)
//!     → response with CORS headers
//! ```

pub mod handler;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
