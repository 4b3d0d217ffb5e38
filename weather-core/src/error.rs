use thiserror::Error;

pub const MISSING_INPUT_MESSAGE: &str = "Please enter both latitude and longitude";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch weather data";

/// Everything that can end a weather lookup.
///
/// The `Display` text is exactly what ends up on the error surface.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Please enter both latitude and longitude")]
    MissingInput,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Server(String),

    #[error("Failed to fetch weather data")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to fetch weather data")]
    Incomplete,
}

impl FetchError {
    /// Server failure using the body's message, or the generic fallback.
    pub fn server(message: Option<&str>) -> Self {
        FetchError::Server(message.unwrap_or(GENERIC_FAILURE_MESSAGE).to_string())
    }
}
