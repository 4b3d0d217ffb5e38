//! Core library for the `weather` lookup client.
//!
//! This crate defines:
//! - Configuration (the weather service endpoint)
//! - The HTTP fetcher behind the `WeatherProvider` trait
//! - A typed view model plus the renderer and error reporter that write to it
//! - The request/render handler tying them together
//!
//! It is used by `weather-cli`, but can also be driven by other hosts.

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod provider;
pub mod render;
pub mod view;

pub use config::{Config, DEFAULT_ENDPOINT};
pub use error::FetchError;
pub use handler::get_weather;
pub use model::{HealthStatus, WeatherRequest, WeatherResponse};
pub use provider::{HttpProvider, WeatherProvider};
pub use view::{Element, ElementId, WeatherPage};
