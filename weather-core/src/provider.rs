use crate::{FetchError, WeatherRequest, WeatherResponse};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

pub use http::HttpProvider;

/// Anything that can answer a weather lookup for a pair of coordinates.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse, FetchError>;
}
