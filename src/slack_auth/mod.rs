//! Slack request authentication.
//!
//! Implements the Slack v0 signed-request scheme for slash commands:
//! HMAC-SHA256 over `v0:<timestamp>:<raw body>` with a shared signing
//! secret, a 5-minute replay window, and a constant-time signature compare.
//!
//! ## Components
//! - `signature`: MAC computation, constant-time compare, replay window
//! - `middleware`: Axum middleware that buffers the raw body and verifies it
//! - `error`: rejection reasons, all mapped to one generic 400

pub mod error;
pub mod middleware;
pub mod signature;

// Re-export for convenience
pub use error::{AuthError, RejectReason};
pub use middleware::{authenticate, slack_auth_middleware, SIGNATURE_HEADER, TIMESTAMP_HEADER};
pub use signature::{
    compute_signature, constant_time_eq, within_replay_window, SigningSecret, REPLAY_WINDOW_SECS,
};
