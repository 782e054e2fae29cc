use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::WeatherConfig;
use crate::error::{Result, WardrobeError};
use crate::model::WeatherReading;

/// Current-conditions client for the OpenWeatherMap `/data/2.5/weather` API.
///
/// Without a credential the gateway runs in mock mode and never touches the
/// network. With one, each call makes exactly one request: a non-200 status is
/// an error, while transport or payload failures fall back to a fixed reading.
pub struct WeatherGateway {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl std::fmt::Debug for WeatherGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherGateway")
            .field("mode", &self.mode())
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
    wind: OwmWind,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Deserialize)]
struct OwmCondition {
    main: String,
    description: String,
}

#[derive(Deserialize)]
struct OwmWind {
    /// Meters per second with `units=metric`.
    speed: f64,
}

impl WeatherGateway {
    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        Self::new(
            config.resolve_api_key(),
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn new(api_key: Option<String>, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WardrobeError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Gateway with no credential; always returns the mock reading.
    pub fn mock() -> Result<Self> {
        Self::new(None, "", Duration::from_secs(5))
    }

    pub fn is_mock(&self) -> bool {
        self.api_key.is_none()
    }

    pub fn mode(&self) -> &'static str {
        if self.is_mock() {
            "mock"
        } else {
            "live"
        }
    }

    /// Current conditions for `city`.
    ///
    /// Errors only with [`WardrobeError::UpstreamUnavailable`] when the provider
    /// answers with a non-200 status.
    pub async fn fetch_weather(&self, city: &str) -> Result<WeatherReading> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(mock_reading(city));
        };

        match self.fetch_live(city, api_key).await {
            Ok(reading) => Ok(reading),
            Err(e @ WardrobeError::UpstreamUnavailable(_)) => Err(e),
            Err(e) => {
                tracing::warn!(city, "weather API error, using fallback reading: {e}");
                Ok(fallback_reading(city))
            }
        }
    }

    async fn fetch_live(&self, city: &str, api_key: &str) -> Result<WeatherReading> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(city, %status, "weather provider returned non-200");
            return Err(WardrobeError::UpstreamUnavailable(format!(
                "weather provider returned {status}"
            )));
        }

        let body = resp.text().await?;
        let data: OwmResponse = serde_json::from_str(&body)?;
        reading_from_response(city, data)
    }
}

fn reading_from_response(city: &str, data: OwmResponse) -> Result<WeatherReading> {
    let condition = data.weather.into_iter().next().ok_or_else(|| {
        <serde_json::Error as serde::de::Error>::custom("weather response has no conditions")
    })?;

    Ok(WeatherReading {
        city: city.to_string(),
        temperature: data.main.temp.round() as i32,
        feels_like: data.main.feels_like.round() as i32,
        condition: condition.main,
        humidity: data.main.humidity,
        wind_speed: (data.wind.speed * 3.6).round() as i32,
        description: condition.description,
    })
}

/// Reading returned when no provider credential is configured.
pub fn mock_reading(city: &str) -> WeatherReading {
    WeatherReading {
        city: city.to_string(),
        temperature: 18,
        feels_like: 16,
        condition: "Partly Cloudy".into(),
        humidity: 65,
        wind_speed: 12,
        description: "partly cloudy with mild temperatures".into(),
    }
}

/// Reading substituted when a live request fails in transport or parsing.
pub fn fallback_reading(city: &str) -> WeatherReading {
    WeatherReading {
        city: city.to_string(),
        temperature: 18,
        feels_like: 16,
        condition: "Clear".into(),
        humidity: 60,
        wind_speed: 10,
        description: "clear sky".into(),
    }
}
