use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use wardrobe_core::error::WardrobeError;
use wardrobe_core::model::{TipBundle, WeatherReading};
use wardrobe_core::tips;

use crate::error::ApiError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/weather", get(weather))
}

#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub success: bool,
    pub weather: WeatherReading,
    pub tips: TipBundle,
}

async fn weather(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let Query(pairs) = query?;
    // A repeated `city` uses its first value
    let city = pairs
        .into_iter()
        .find(|(key, _)| key == "city")
        .map(|(_, value)| value)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| state.config.weather.default_city.clone());

    let reading = state
        .weather
        .fetch_weather(&city)
        .await
        .map_err(|e| match e {
            WardrobeError::UpstreamUnavailable(_) => {
                tracing::error!(city = %city, "weather fetch failed: {e}");
                ApiError::internal("Could not fetch weather")
            }
            other => ApiError::from(other),
        })?;

    let tips = tips::generate_tips(&reading);

    Ok(Json(WeatherResponse {
        success: true,
        weather: reading,
        tips,
    }))
}
