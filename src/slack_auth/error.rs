//! Authentication error types.
//!
//! Rejections carry a precise internal reason for logging, but every reason
//! maps to the same generic HTTP response. The original bot returned a
//! different message per failure, which lets a caller distinguish "bad
//! timestamp" from "bad signature"; collapsing them closes that oracle.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Why a request failed authentication (internal use only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Timestamp header missing, non-numeric, or outside the replay window
    StaleOrMissingTimestamp,
    /// Signature header missing, wrong length, or HMAC mismatch
    SignatureMismatch,
    /// Request body could not be buffered (read error or over the size cap)
    BodyUnreadable,
    /// No signing secret configured; authentication fails closed
    SecretUnavailable,
}

impl RejectReason {
    /// Stable name for log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::StaleOrMissingTimestamp => "STALE_OR_MISSING_TIMESTAMP",
            Self::SignatureMismatch => "SIGNATURE_MISMATCH",
            Self::BodyUnreadable => "BODY_UNREADABLE",
            Self::SecretUnavailable => "SECRET_UNAVAILABLE",
        }
    }
}

/// Authentication rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthError {
    pub reason: RejectReason,
}

impl AuthError {
    pub fn new(reason: RejectReason) -> Self {
        Self { reason }
    }
}

/// Single generic body for every rejection. The reason never reaches the
/// caller; it is logged by the middleware before this conversion runs.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, "Request verification failed").into_response()
    }
}
