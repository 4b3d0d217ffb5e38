use tracing::debug;

use crate::{
    error::FetchError,
    model::WeatherRequest,
    provider::WeatherProvider,
    render::{display_weather, show_error},
    view::WeatherPage,
};

/// Runs one lookup for the coordinates currently in `page` and renders the outcome.
///
/// On success the result panel is shown and the error surface hidden; on any
/// failure the error surface shows the message and the result panel is hidden.
/// Returns the failure as well, for hosts that want to act on it.
pub async fn get_weather(
    page: &mut WeatherPage,
    provider: &dyn WeatherProvider,
) -> Result<(), FetchError> {
    let latitude = page.latitude.text().to_string();
    let longitude = page.longitude.text().to_string();

    if latitude.is_empty() || longitude.is_empty() {
        show_error(page, &FetchError::MissingInput.to_string());
        return Err(FetchError::MissingInput);
    }

    let request = WeatherRequest { latitude, longitude };

    match provider.get_weather(&request).await {
        Ok(data) => {
            display_weather(page, &data);
            page.error.hide();
            Ok(())
        }
        Err(err) => {
            debug!(error = %err, "weather lookup failed");
            show_error(page, &err.to_string());
            page.weather_result.hide();
            Err(err)
        }
    }
}
