pub mod handlers;
pub mod state;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::slack_auth::slack_auth_middleware;
use state::AppState;

/// Build the application router.
///
/// `/expert` sits behind the signature-verification middleware; the health
/// endpoint is open.
pub fn build_router(state: Arc<AppState>) -> Router {
    let command_routes = Router::new()
        .route("/expert", post(handlers::resolve_expert))
        .layer(from_fn_with_state(state.clone(), slack_auth_middleware));

    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .merge(command_routes)
        .with_state(state)
}

/// Start the HTTP gateway server.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) {
    if state.signing_secret.is_none() {
        tracing::warn!(
            "SLACK_SIGNING_SECRET not set: all slash commands will be rejected (fail closed)"
        );
    }

    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 SME bot listening on http://{}", addr);
    println!("🔒 Slash command: POST /expert (Slack signature required)");
    println!("💚 Health check:  GET  /api/v1/health");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
