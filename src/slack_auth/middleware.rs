//! Authentication middleware for Axum.
//!
//! Verifies the Slack v0 request signature before any handler (or body
//! parser) runs. The body is buffered here so the MAC covers the exact
//! bytes on the wire, then handed back to the router untouched.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::{AuthError, RejectReason};
use super::signature::{compute_signature, constant_time_eq, within_replay_window, SigningSecret};
use crate::gateway::state::AppState;

/// Slack header carrying the unix-seconds timestamp of the delivery.
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";
/// Slack header carrying the `v0=<hex>` signature.
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Slash-command payloads are tiny; anything larger is not a Slack request.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Verify one request against the signing secret.
///
/// Pure check over the raw body bytes and the two Slack headers; `now` is
/// injected so the replay window is testable. Returns the precise reject
/// reason; the HTTP boundary collapses all reasons into one generic 400.
pub fn authenticate(
    raw_body: &[u8],
    timestamp_header: Option<&str>,
    signature_header: Option<&str>,
    secret: &SigningSecret,
    now: i64,
) -> Result<(), AuthError> {
    // Step 1: timestamp present and inside the replay window. No nonce
    // tracking: a replay inside the window is an accepted tradeoff.
    let timestamp = match timestamp_header {
        Some(ts) if within_replay_window(ts, now) => ts,
        _ => return Err(AuthError::new(RejectReason::StaleOrMissingTimestamp)),
    };

    // Step 2: expected signature over the unparsed body bytes
    let expected = compute_signature(secret, timestamp, raw_body);

    // Step 3: constant-time compare against the provided header
    match signature_header {
        Some(provided) if constant_time_eq(&expected, provided) => Ok(()),
        _ => Err(AuthError::new(RejectReason::SignatureMismatch)),
    }
}

/// Axum middleware: buffer the raw body, authenticate, then replay the
/// request downstream with the buffered body.
pub async fn slack_auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    // Fail closed when no secret is configured
    let Some(secret) = state.signing_secret.as_ref() else {
        return Err(reject(RejectReason::SecretUnavailable));
    };

    let (parts, body) = request.into_parts();

    // A body that cannot be buffered (read error, over the size cap) is its
    // own reject reason in the logs; the caller still sees the generic 400.
    let raw_body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| reject(RejectReason::BodyUnreadable))?;

    let timestamp = header_str(&parts.headers, TIMESTAMP_HEADER);
    let signature = header_str(&parts.headers, SIGNATURE_HEADER);

    let now = unix_now_secs();
    authenticate(&raw_body, timestamp, signature, secret, now).map_err(|e| reject(e.reason))?;

    // Hand the buffered body back so the handler can parse it
    let request = Request::from_parts(parts, Body::from(raw_body));
    Ok(next.run(request).await)
}

fn header_str<'h>(headers: &'h axum::http::HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn unix_now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Log the internal reason, then return the generic error.
fn reject(reason: RejectReason) -> AuthError {
    tracing::warn!(reason = reason.name(), "rejected inbound slash command");
    AuthError::new(reason)
}
