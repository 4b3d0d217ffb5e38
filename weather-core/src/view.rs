//! Typed view model standing in for the page the client renders into.
//!
//! Each display surface is a field of [`WeatherPage`]; [`ElementId`] maps
//! them to their stable string names for hosts that need them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Latitude,
    Longitude,
    Error,
    WeatherResult,
    City,
    Temperature,
    Description,
    Humidity,
    WindSpeed,
}

impl ElementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::Latitude => "latitude",
            ElementId::Longitude => "longitude",
            ElementId::Error => "error",
            ElementId::WeatherResult => "weather-result",
            ElementId::City => "city",
            ElementId::Temperature => "temperature",
            ElementId::Description => "description",
            ElementId::Humidity => "humidity",
            ElementId::WindSpeed => "windSpeed",
        }
    }

    pub const fn all() -> &'static [ElementId] {
        &[
            ElementId::Latitude,
            ElementId::Longitude,
            ElementId::Error,
            ElementId::WeatherResult,
            ElementId::City,
            ElementId::Temperature,
            ElementId::Description,
            ElementId::Humidity,
            ElementId::WindSpeed,
        ]
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ElementId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        ElementId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == value)
            .ok_or_else(|| anyhow::anyhow!("Unknown element '{value}'"))
    }
}

/// A single display surface: some text and a visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    text: String,
    hidden: bool,
}

impl Element {
    pub fn hidden() -> Self {
        Self { text: String::new(), hidden: true }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }
}

/// All surfaces of the weather page.
///
/// The result panel and the error surface start hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherPage {
    pub latitude: Element,
    pub longitude: Element,
    pub error: Element,
    pub weather_result: Element,
    pub city: Element,
    pub temperature: Element,
    pub description: Element,
    pub humidity: Element,
    pub wind_speed: Element,
}

impl Default for WeatherPage {
    fn default() -> Self {
        Self {
            latitude: Element::default(),
            longitude: Element::default(),
            error: Element::hidden(),
            weather_result: Element::hidden(),
            city: Element::default(),
            temperature: Element::default(),
            description: Element::default(),
            humidity: Element::default(),
            wind_speed: Element::default(),
        }
    }
}

impl WeatherPage {
    /// Page with both coordinate inputs filled in.
    pub fn with_inputs(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        let mut page = Self::default();
        page.latitude.set_text(latitude);
        page.longitude.set_text(longitude);
        page
    }

    pub fn element(&self, id: ElementId) -> &Element {
        match id {
            ElementId::Latitude => &self.latitude,
            ElementId::Longitude => &self.longitude,
            ElementId::Error => &self.error,
            ElementId::WeatherResult => &self.weather_result,
            ElementId::City => &self.city,
            ElementId::Temperature => &self.temperature,
            ElementId::Description => &self.description,
            ElementId::Humidity => &self.humidity,
            ElementId::WindSpeed => &self.wind_speed,
        }
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        match id {
            ElementId::Latitude => &mut self.latitude,
            ElementId::Longitude => &mut self.longitude,
            ElementId::Error => &mut self.error,
            ElementId::WeatherResult => &mut self.weather_result,
            ElementId::City => &mut self.city,
            ElementId::Temperature => &mut self.temperature,
            ElementId::Description => &mut self.description,
            ElementId::Humidity => &mut self.humidity,
            ElementId::WindSpeed => &mut self.wind_speed,
        }
    }

    /// Message currently on the error surface, if it is shown.
    pub fn visible_error(&self) -> Option<&str> {
        self.error.is_visible().then_some(self.error.text())
    }
}
