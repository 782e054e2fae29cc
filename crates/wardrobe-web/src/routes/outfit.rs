use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::{Deserialize, Serialize};
use wardrobe_core::model::AnalysisResult;
use wardrobe_core::outfit;

use crate::error::ApiError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/ask", post(ask))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64-encoded photo, optionally a `data:` URL.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub success: bool,
    pub answer: String,
}

async fn analyze(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(req) = payload?;
    let analysis = outfit::analyze(req.image.as_deref().unwrap_or_default())?;
    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
    }))
}

async fn ask(
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(req) = payload?;
    let answer = outfit::answer(
        req.image.as_deref().unwrap_or_default(),
        req.question.as_deref().unwrap_or_default(),
    )?;
    Ok(Json(AskResponse {
        success: true,
        answer,
    }))
}
