//! Slack v0 request signature verification.
//!
//! Slack signs each webhook delivery with
//! `v0=hex(HMAC-SHA256(secret, "v0:<timestamp>:<raw body>"))`. The MAC is
//! computed over the exact body bytes as received; parsing the body first
//! can alter the byte sequence and must happen after verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Replay window in seconds. Requests whose timestamp differs from server
/// time by more than this are rejected regardless of signature validity.
pub const REPLAY_WINDOW_SECS: i64 = 300;

/// Process-wide signing secret, loaded once at startup and never logged.
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// Keep the secret out of debug output
impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret(..)")
    }
}

/// Compute the expected signature string for a request.
///
/// Returns `"v0=" + hex digest` over `"v0:<timestamp>:<raw>"`.
pub fn compute_signature(secret: &SigningSecret, timestamp: &str, raw_body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(raw_body);
    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}

/// Constant-time string equality.
///
/// Execution time must not depend on where the first differing byte occurs;
/// ordinary `==` short-circuits and leaks the length of the matching prefix.
/// A length mismatch returns false immediately -- length is the one thing
/// this check is allowed to reveal, and it is never attacker-useful here
/// because the expected signature length is fixed.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check that `timestamp` parses and lies within the replay window of `now`
/// (both in unix seconds). Exactly `REPLAY_WINDOW_SECS` of skew is accepted.
///
/// The header is attacker-supplied, so the skew is computed with `abs_diff`,
/// which is total over all of `i64` -- `(now - ts).abs()` overflows for
/// timestamps near `i64::MIN`/`i64::MAX`.
pub fn within_replay_window(timestamp: &str, now: i64) -> bool {
    match timestamp.parse::<i64>() {
        Ok(ts) => now.abs_diff(ts) <= REPLAY_WINDOW_SECS as u64,
        Err(_) => false,
    }
}
