//! Request dispatch: preflight, forwarding, method rejection.
//!
//! # Responsibilities
//! - Branch on method: OPTIONS → preflight, POST → forward, other → 405
//! - Reject disallowed origins with an explicit 403 before any forwarding
//! - Attach the CORS headers to every response except that 403
//!
//! # Design Decisions
//! - Dispatch is on method alone; the upstream chat endpoint is fixed, so
//!   the inbound path is ignored entirely
//! - Failures surface as `ProxyError` and are rendered at this boundary

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::cors::{self, OriginDecision};
use crate::error::ProxyError;
use crate::http::server::AppState;

/// Catch-all handler for every method and path.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let decision = cors::evaluate(&state.config.cors, origin.as_deref());

    tracing::debug!(method = %method, origin = ?origin, "request received");

    // Disallowed origins are rejected up front, before anything is parsed
    // or forwarded. The 403 deliberately carries no CORS headers.
    if decision == OriginDecision::Disallow {
        tracing::warn!(origin = ?origin, "origin rejected by CORS policy");
        return ProxyError::ForbiddenOrigin.into_response();
    }

    let mut response = if method == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else if method == Method::POST {
        forward(&state, &body).await.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "POST request failed");
            err.into_response()
        })
    } else {
        ProxyError::MethodNotAllowed(method.to_string()).into_response()
    };

    for (name, value) in cors::response_headers(&state.config.cors, &decision) {
        if let Some(name) = name {
            response.headers_mut().insert(name, value);
        }
    }

    // Preflight echoes whatever headers the browser asked permission for.
    if method == Method::OPTIONS {
        if let Some(requested) = headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
            response
                .headers_mut()
                .insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
        }
    }

    response
}

/// POST path: validate configuration, parse the body, forward upstream,
/// relay the classified reply.
async fn forward(state: &AppState, body: &Bytes) -> Result<Response, ProxyError> {
    if !state.config.upstream.has_credentials() {
        return Err(ProxyError::Credentials);
    }

    // Explicit fallible parse: a failure here is the client's 400, never
    // conflated with an internal 500.
    let payload: serde_json::Value = serde_json::from_slice(body)?;

    let raw = state.upstream.forward(&payload).await?;

    let mut response = (StatusCode::OK, raw).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(response)
}
