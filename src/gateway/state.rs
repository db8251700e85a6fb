use std::path::PathBuf;

use crate::slack_auth::SigningSecret;

/// Shared gateway state. Everything here is read-only after startup, so
/// concurrent requests need no locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Slack signing secret. `None` means authentication fails closed:
    /// every request is rejected until a secret is configured.
    pub signing_secret: Option<SigningSecret>,
    /// Path to the experts JSON file, re-read on every query.
    pub directory_path: PathBuf,
    /// Resolver similarity cutoff.
    pub threshold: f64,
}

impl AppState {
    pub fn new(
        signing_secret: Option<SigningSecret>,
        directory_path: impl Into<PathBuf>,
        threshold: f64,
    ) -> Self {
        Self {
            signing_secret,
            directory_path: directory_path.into(),
            threshold,
        }
    }
}
