//! SME Bot - Slack Subject Matter Expert lookup
//!
//! Entry point. Architecture:
//!
//! ```text
//! ┌──────────┐    ┌────────────┐    ┌──────────┐    ┌──────────┐
//! │  Slack   │───▶│ slack_auth │───▶│ resolver │───▶│  format  │
//! │ (webhook)│    │ (HMAC gate)│    │ (fuzzy)  │    │ (reply)  │
//! └──────────┘    └────────────┘    └──────────┘    └──────────┘
//! ```

use std::sync::Arc;

use sme_bot::config::{load_signing_secret, AppConfig};
use sme_bot::gateway::{run_server, state::AppState};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _log_guard = sme_bot::logging::init_logging(&config);

    tracing::info!(
        "Starting SME bot in {} mode (build {})",
        env,
        env!("GIT_HASH")
    );

    let signing_secret = load_signing_secret();
    let state = Arc::new(AppState::new(
        signing_secret,
        &config.directory.path,
        config.resolver.threshold,
    ));

    let port = get_port_override().unwrap_or(config.gateway.port);
    run_server(&config.gateway.host, port, state).await;
    Ok(())
}
