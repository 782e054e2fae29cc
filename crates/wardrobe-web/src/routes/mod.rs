pub mod chat;
pub mod outfit;
pub mod weather;

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;

use crate::error;
use crate::AppState;

/// Paths advertised by `/` and by the 404 handler.
pub const ENDPOINTS: &[&str] = &[
    "/chat",
    "/chat-history/{session_id}",
    "/analyze",
    "/ask",
    "/weather",
];

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(chat::routes())
        .merge(outfit::routes())
        .merge(weather::routes())
        .fallback(not_found)
}

/// The served application: routes plus body limit, panic, trace and CORS layers.
pub fn app(state: Arc<AppState>) -> Router {
    let body_limit = state.config.web.body_limit_bytes();
    router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(tower_http::catch_panic::CatchPanicLayer::custom(
            error::panic_response,
        ))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive())
}

async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": "Seasonal Wardrobe API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ENDPOINTS,
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "status": "ok",
        "weather_mode": state.weather.mode(),
        "sessions": state.sessions.session_count(),
    }))
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "error": "Endpoint not found",
            "available_endpoints": ENDPOINTS,
        })),
    )
}
