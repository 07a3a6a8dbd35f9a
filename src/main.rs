mod api;
mod models;
mod out;
mod patterns;
mod stream;

use axum::{extract::Extension, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The pattern table is built once and shared by every handler.
    let app_state = Arc::new(AppState {
        patterns: patterns::PatternTable::new(),
    });

    let app = router(app_state);

    let port = port_from_env();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    out::ok("main", &format!("Server running on port {}", port));
    out::info("main", &format!("Test endpoint: http://localhost:{}/api/test", port));
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Clone)]
pub struct AppState {
    pub patterns: patterns::PatternTable,
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/test", get(api::test_endpoint))
        .route("/api/complete-code-stream", get(api::complete_code_stream))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}

fn port_from_env() -> u16 {
    match std::env::var("PORT") {
        Ok(value) => match value.parse() {
            Ok(port) => port,
            Err(_) => {
                out::warning(
                    "main",
                    &format!("Invalid PORT value '{}', falling back to {}", value, DEFAULT_PORT),
                );
                DEFAULT_PORT
            }
        },
        Err(_) => DEFAULT_PORT,
    }
}
