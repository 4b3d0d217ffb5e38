use crate::{model::WeatherResponse, view::WeatherPage};

/// Writes a successful lookup into the result panel and shows it.
pub fn display_weather(page: &mut WeatherPage, data: &WeatherResponse) {
    page.city.set_text(data.city.as_str());
    page.temperature.set_text(format!("{}°C", data.temperature));
    page.description.set_text(data.description.as_str());
    page.humidity.set_text(format!("{}%", data.humidity));
    page.wind_speed.set_text(format!("{} m/s", data.wind_speed));

    page.weather_result.show();
}

/// Puts `message` on the error surface and shows it. Overwrites any previous message.
pub fn show_error(page: &mut WeatherPage, message: &str) {
    page.error.set_text(message);
    page.error.show();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> WeatherResponse {
        WeatherResponse {
            city: "Paris".to_string(),
            temperature: 20.0,
            description: "Clear".to_string(),
            humidity: 50.0,
            wind_speed: 3.0,
        }
    }

    #[test]
    fn display_weather_fills_fields_and_shows_panel() {
        let mut page = WeatherPage::default();
        display_weather(&mut page, &paris());

        assert!(page.weather_result.is_visible());
        assert_eq!(page.city.text(), "Paris");
        assert_eq!(page.temperature.text(), "20°C");
        assert_eq!(page.description.text(), "Clear");
        assert_eq!(page.humidity.text(), "50%");
        assert_eq!(page.wind_speed.text(), "3 m/s");
    }

    #[test]
    fn fractional_values_are_interpolated_as_is() {
        let mut page = WeatherPage::default();
        let data = WeatherResponse { temperature: 18.37, wind_speed: 4.12, ..paris() };
        display_weather(&mut page, &data);

        assert_eq!(page.temperature.text(), "18.37°C");
        assert_eq!(page.wind_speed.text(), "4.12 m/s");
    }

    #[test]
    fn show_error_keeps_only_latest_message() {
        let mut page = WeatherPage::default();
        show_error(&mut page, "first");
        show_error(&mut page, "second");

        assert!(page.error.is_visible());
        assert_eq!(page.visible_error(), Some("second"));
    }
}
