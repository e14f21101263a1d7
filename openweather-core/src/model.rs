use anyhow::{Result, ensure};
use std::convert::TryFrom;

/// Raw body returned by the weather endpoint. No shape is guaranteed beyond
/// being valid JSON; field extraction happens in [`crate::report`].
pub type RawWeatherResponse = serde_json::Value;

/// Unit system passed through to the API as the `units` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial, Units::Standard]
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            "standard" => Ok(Units::Standard),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported values: metric, imperial, standard."
            )),
        }
    }
}

/// A single current-weather lookup.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
    pub units: Units,
}

impl WeatherQuery {
    /// Build a query, rejecting empty city names.
    pub fn new(city: impl Into<String>, units: Units) -> Result<Self> {
        let city = city.into().trim().to_string();
        ensure!(!city.is_empty(), "City name must not be empty");

        Ok(Self { city, units })
    }
}
