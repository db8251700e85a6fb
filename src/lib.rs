//! SME Bot - Slack Subject Matter Expert lookup
//!
//! A Slack slash-command responder: signed webhook in, fuzzy-matched
//! expert reply out.
//!
//! # Modules
//!
//! - [`slack_auth`] - Slack v0 request signature verification
//! - [`resolver`] - Approximate matching of queries to directory keys
//! - [`directory`] - Expert directory file loading
//! - [`format`] - Reply text formatting (presentation only)
//! - [`gateway`] - Axum HTTP server and handlers
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - Tracing setup

pub mod config;
pub mod directory;
pub mod format;
pub mod gateway;
pub mod logging;
pub mod resolver;
pub mod slack_auth;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use directory::{DirectoryError, ExpertDirectory};
pub use gateway::state::AppState;
pub use resolver::{resolve, MatchResult, DEFAULT_THRESHOLD};
pub use slack_auth::{authenticate, AuthError, RejectReason, SigningSecret, REPLAY_WINDOW_SECS};
