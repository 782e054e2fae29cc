use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use wardrobe_core::chat;
use wardrobe_core::model::ChatTurn;

use crate::error::ApiError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(post_chat))
        .route("/chat-history/{session_id}", get(chat_history))
}

// -- Request/Response types --

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub session_id: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub session_id: String,
    pub history: Vec<ChatTurn>,
}

// -- Handlers --

async fn post_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let message = req.message.unwrap_or_default();

    let exchange = chat::chat(&state.sessions, &message, req.session_id.as_deref());

    Ok(Json(ChatResponse {
        success: true,
        response: exchange.response,
        session_id: exchange.session_id,
        history: exchange.history,
    }))
}

async fn chat_history(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Json<HistoryResponse> {
    let history = state.sessions.history(&session_id);
    Json(HistoryResponse {
        success: true,
        session_id,
        history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const GREETING: &str =
        "Hello! I'm your Seasonal Wardrobe assistant. How can I help you with sustainable fashion today?";

    #[test]
    fn test_chat_request_serde_defaults() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_none());
        assert!(req.session_id.is_none());

        let req: ChatRequest =
            serde_json::from_str(r#"{"message": null, "session_id": "abc"}"#).unwrap();
        assert!(req.message.is_none());
        assert_eq!(req.session_id.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_chat_greeting() {
        let app = test_router();
        let req = post_json("/chat", serde_json::json!({ "message": "HeLLo there" }));
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp.into_body()).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["response"], GREETING);
        assert!(!json["session_id"].as_str().unwrap().is_empty());

        let history = json["history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["role"], "user");
        assert_eq!(history[0]["content"], "HeLLo there");
        assert_eq!(history[1]["role"], "assistant");
        assert_eq!(history[1]["content"], GREETING);
    }

    #[tokio::test]
    async fn test_chat_session_accumulates() {
        let app = test_router();

        let resp = app
            .clone()
            .oneshot(post_json("/chat", serde_json::json!({ "message": "hi" })))
            .await
            .unwrap();
        let json = body_json(resp.into_body()).await;
        let id = json["session_id"].as_str().unwrap().to_string();

        let mut last = serde_json::Value::Null;
        for msg in ["what should I wear", "winter plans"] {
            let body = serde_json::json!({ "message": msg, "session_id": id });
            let resp = app.clone().oneshot(post_json("/chat", body)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
            last = body_json(resp.into_body()).await;
        }

        assert_eq!(last["session_id"], id.as_str());
        let history = last["history"].as_array().unwrap();
        assert_eq!(history.len(), 6);
        assert_eq!(history[4]["content"], "winter plans");

        // History endpoint sees the same turns
        let resp = app
            .oneshot(get_request(&format!("/chat-history/{id}")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["history"].as_array().unwrap().len(), 6);
        assert_eq!(json["session_id"], id.as_str());
    }

    #[tokio::test]
    async fn test_chat_without_session_ids_are_distinct() {
        let app = test_router();
        let mut ids = Vec::new();
        for _ in 0..2 {
            let resp = app
                .clone()
                .oneshot(post_json("/chat", serde_json::json!({ "message": "hey" })))
                .await
                .unwrap();
            let json = body_json(resp.into_body()).await;
            ids.push(json["session_id"].as_str().unwrap().to_string());
        }
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn test_chat_missing_message_falls_back() {
        let app = test_router();
        let resp = app
            .oneshot(post_json("/chat", serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp.into_body()).await;
        let response = json["response"].as_str().unwrap();
        assert!(response.starts_with("That's an interesting question about ''"));
    }

    #[tokio::test]
    async fn test_chat_malformed_body_is_json_error() {
        let app = test_router();
        let req = Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_history_unknown_session_is_empty() {
        let app = test_router();
        let resp = app.oneshot(get_request("/chat-history/unknown")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp.into_body()).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["history"].as_array().unwrap().len(), 0);
    }
}
