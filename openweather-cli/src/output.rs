use openweather_core::{CurrentConditions, WeatherReport};
use serde_json::Number;

pub fn display(report: &WeatherReport) {
    print!("{}", render(report));
}

/// Render the report block. Split from [`display`] so the layout stays
/// testable.
pub fn render(report: &WeatherReport) -> String {
    match report {
        WeatherReport::Unavailable { error } => format!("Error: {error}\n"),
        WeatherReport::Current(conditions) => render_current(conditions),
    }
}

fn render_current(conditions: &CurrentConditions) -> String {
    let mut out = String::new();

    out.push_str("\n========== WEATHER REPORT ==========\n");
    out.push_str(&format!("Location: {}\n", conditions.location));
    // Suffixes assume a metric query.
    // TODO: pick suffixes from the requested unit system.
    out.push_str(&format!("Temperature: {}°C\n", number_or_na(conditions.temperature.as_ref())));
    out.push_str(&format!("Feels like: {}°C\n", number_or_na(conditions.feels_like.as_ref())));
    out.push_str(&format!("Weather: {}\n", capitalize(&conditions.weather)));
    out.push_str(&format!("Humidity: {}%\n", number_or_na(conditions.humidity.as_ref())));
    out.push_str(&format!("Pressure: {} hPa\n", number_or_na(conditions.pressure.as_ref())));
    out.push_str(&format!("Wind speed: {} m/s\n", number_or_na(conditions.wind.speed.as_ref())));
    out.push_str("====================================\n\n");

    out
}

fn number_or_na(value: Option<&Number>) -> String {
    value.map(Number::to_string).unwrap_or_else(|| "n/a".to_string())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
