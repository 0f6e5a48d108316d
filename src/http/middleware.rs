//! Middleware for the option provider API
//!
//! Provides request logging with duration tracking and HTTP Basic
//! authentication for protected resources.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
        HeaderValue, Request,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{error, info, warn};

use crate::core::error::OptionsError;
use crate::core::services::Services;

/// Request logging middleware
///
/// Logs all incoming requests with method, URI, status code, and
/// duration. Successful requests are logged at INFO level, failed
/// requests at ERROR level.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_success() {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    } else {
        error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    response
}

/// HTTP Basic authentication middleware
///
/// Lets the request through when its credentials match a configured
/// user, otherwise answers 401 with a `WWW-Authenticate` challenge.
pub async fn require_basic_auth(
    State(services): State<Arc<Services>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let credentials = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(basic_credentials);

    match credentials {
        Some((username, password)) if services.config.auth.verify(&username, &password) => {
            next.run(request).await
        }
        credentials => {
            warn!(
                uri = %request.uri(),
                username = credentials.as_ref().map(|(u, _)| u.as_str()).unwrap_or("-"),
                "Rejected unauthenticated request"
            );
            challenge(&services.config.auth.realm)
        }
    }
}

/// Decode `Basic <base64(user:password)>`
fn basic_credentials(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

fn challenge(realm: &str) -> Response {
    let mut response = OptionsError::Unauthorized.into_response();
    if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{realm}\"")) {
        response.headers_mut().insert(WWW_AUTHENTICATE, value);
    }
    response
}
