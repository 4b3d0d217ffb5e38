use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coordinates as typed into the two input fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub latitude: String,
    pub longitude: String,
}

/// Weather record returned by the endpoint on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    pub temperature: f64,
    pub description: String,
    pub humidity: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: f64,
}

/// Body as received, before the status code decides which shape it has.
///
/// Every field is optional: a failure body only carries `error`, a success
/// body carries the weather fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeatherBody {
    pub city: Option<String>,
    pub temperature: Option<f64>,
    pub description: Option<String>,
    pub humidity: Option<f64>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<f64>,
    pub error: Option<String>,
}

impl RawWeatherBody {
    /// Returns the `error` field, treating an empty string as absent.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }

    /// Converts into a complete record, or `None` if any weather field is missing.
    pub fn into_response(self) -> Option<WeatherResponse> {
        Some(WeatherResponse {
            city: self.city?,
            temperature: self.temperature?,
            description: self.description?,
            humidity: self.humidity?,
            wind_speed: self.wind_speed?,
        })
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
