//! Slash-command and health handlers.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::directory::ExpertDirectory;
use crate::format;
use crate::resolver;

/// Typed view of a Slack slash-command body. Slack sends many more fields;
/// only `text` matters here.
#[derive(Debug, Deserialize, PartialEq)]
pub struct SlashCommand {
    #[serde(default)]
    pub text: String,
}

/// Parse a URL-encoded slash-command body.
///
/// This runs strictly after authentication, which operated on the raw
/// bytes; parsing first could alter the byte sequence the MAC covers.
/// Returns `None` for bodies that do not decode.
pub fn parse_slash_command(raw: &str) -> Option<SlashCommand> {
    serde_urlencoded::from_str(raw).ok()
}

/// `POST /expert` -- resolve a domain query to its Subject Matter Expert.
///
/// Every resolution outcome (match, no-match, empty query, internal
/// failure) is a 200 with a user-facing text body; only authentication
/// rejects, in the middleware, produce a 4xx.
pub async fn resolve_expert(State(state): State<Arc<AppState>>, body: String) -> String {
    // Step 1: parse the (already authenticated) body. An undecodable body
    // is treated like an empty query.
    let text = parse_slash_command(&body)
        .map(|cmd| cmd.text)
        .unwrap_or_default();

    // Step 2: guard empty queries before the resolver sees them
    let query = text.trim();
    if query.is_empty() {
        return format::EMPTY_QUERY_PROMPT.to_string();
    }

    // Step 3: load the directory fresh, fail closed on any error
    let directory = match ExpertDirectory::load(&state.directory_path) {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!(error = %e, "failed to load expert directory");
            return format::INTERNAL_ERROR_REPLY.to_string();
        }
    };

    // Step 4: fuzzy-match against the key set
    let Some(result) = resolver::resolve(query, &directory.keys(), state.threshold) else {
        return format::build_no_match_reply(query);
    };

    // Step 5: look up the expert and format the reply. The key came from
    // this same in-memory snapshot, so the lookup cannot miss; the branch
    // below guards that invariant rather than any race with the file.
    match directory.get(&result.key) {
        Some(expert) => {
            tracing::info!(key = %result.key, score = result.score, "resolved expert");
            format::build_reply(&result.key, expert)
        }
        None => {
            tracing::error!(key = %result.key, "resolved key missing from directory");
            format::INTERNAL_ERROR_REPLY.to_string()
        }
    }
}

/// Health check response data
#[derive(Serialize)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    pub timestamp_ms: u64,
}

/// Health check endpoint. Always 200; there are no backing services to
/// probe beyond the process itself.
pub async fn health_check() -> Json<HealthResponse> {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    Json(HealthResponse {
        timestamp_ms: now_ms,
    })
}
