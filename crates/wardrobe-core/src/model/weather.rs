use serde::{Deserialize, Serialize};

/// Current conditions for a city. Temperatures in °C, wind in km/h.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TipBundle {
    pub outfit_suggestions: Vec<String>,
    pub fabric_recommendations: Vec<String>,
    pub accessories: Vec<String>,
    pub sustainability_tip: String,
}
