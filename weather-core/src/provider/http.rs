use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    error::FetchError,
    model::{HealthStatus, RawWeatherBody, WeatherRequest, WeatherResponse},
};

use super::WeatherProvider;

/// Talks to the weather backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    endpoint: String,
    http: Client,
}

impl HttpProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { endpoint, http: Client::new() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Coordinates go into the query string exactly as entered.
    pub fn weather_url(&self, request: &WeatherRequest) -> String {
        format!(
            "{}/weather?lat={}&lon={}",
            self.endpoint, request.latitude, request.longitude
        )
    }

    /// Queries `GET /health` and fails unless the backend reports itself healthy.
    pub async fn health(&self) -> anyhow::Result<HealthStatus> {
        let url = format!("{}/health", self.endpoint);
        debug!(%url, "checking weather service health");

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send health request to {url}"))?;

        let status = res.status();
        let body = res.text().await.context("Failed to read health response body")?;

        let parsed: HealthStatus = serde_json::from_str(&body).with_context(|| {
            format!("Failed to parse health response (status {status}): {}", truncate_body(&body))
        })?;

        if !status.is_success() || !parsed.is_healthy() {
            return Err(anyhow!(
                "Weather service is unhealthy (status {}): {}",
                status,
                parsed.error.as_deref().unwrap_or("no details given"),
            ));
        }

        Ok(parsed)
    }
}

#[async_trait]
impl WeatherProvider for HttpProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse, FetchError> {
        let url = self.weather_url(request);
        debug!(%url, "requesting weather");

        let res = self.http.get(&url).send().await.inspect_err(|err| {
            warn!(error = %err, "weather request failed");
        })?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, body = %truncate_body(&body), "weather response received");

        // The body is decoded before the status is looked at: failure bodies carry the message.
        let parsed: RawWeatherBody = serde_json::from_str(&body).map_err(FetchError::Malformed)?;

        if !status.is_success() {
            return Err(FetchError::server(parsed.error_message()));
        }

        parsed.into_response().ok_or(FetchError::Incomplete)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(lat: &str, lon: &str) -> WeatherRequest {
        WeatherRequest { latitude: lat.to_string(), longitude: lon.to_string() }
    }

    #[test]
    fn weather_url_interpolates_coordinates_verbatim() {
        let provider = HttpProvider::new("http://localhost:8080");
        assert_eq!(
            provider.weather_url(&request("48.85", "2.35")),
            "http://localhost:8080/weather?lat=48.85&lon=2.35"
        );
        assert_eq!(
            provider.weather_url(&request("north", "-0")),
            "http://localhost:8080/weather?lat=north&lon=-0"
        );
    }

    #[test]
    fn trailing_slash_is_dropped_from_endpoint() {
        let provider = HttpProvider::new("http://example.test:9000/");
        assert_eq!(provider.endpoint(), "http://example.test:9000");
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
        let long = "é".repeat(250);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }
}
