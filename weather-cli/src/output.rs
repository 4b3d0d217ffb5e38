use std::io::{self, Write};

use weather_core::{ElementId, WeatherPage};

const ROWS: &[(&str, ElementId)] = &[
    ("City:", ElementId::City),
    ("Temperature:", ElementId::Temperature),
    ("Conditions:", ElementId::Description),
    ("Humidity:", ElementId::Humidity),
    ("Wind:", ElementId::WindSpeed),
];

/// Prints the result panel, if it is visible.
pub fn write_result(out: &mut impl Write, page: &WeatherPage) -> io::Result<()> {
    if !page.weather_result.is_visible() {
        return Ok(());
    }

    for (label, id) in ROWS {
        writeln!(out, "{label:<13}{}", page.element(*id).text())?;
    }

    Ok(())
}
