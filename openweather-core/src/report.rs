use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::error;

use crate::model::RawWeatherResponse;

/// Flattened, display-ready result of one query.
///
/// Serializes either as `{"error": "..."}` or as the full conditions object;
/// numeric fields carry the source values unchanged, so integers stay
/// integers in the output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherReport {
    Unavailable { error: String },
    Current(CurrentConditions),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location: String,
    pub temperature: Option<Number>,
    pub feels_like: Option<Number>,
    pub humidity: Option<Number>,
    pub pressure: Option<Number>,
    pub weather: String,
    pub wind: Wind,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: Option<Number>,
    pub direction: Option<Number>,
}

impl WeatherReport {
    /// Flatten a raw response into a report.
    ///
    /// `None` means the fetch produced nothing. A value that is valid JSON
    /// but carries the wrong type at an expected path is logged and turned
    /// into an error record; extraction itself never fails.
    pub fn from_raw(raw: Option<RawWeatherResponse>) -> Self {
        let Some(value) = raw else {
            return WeatherReport::Unavailable { error: "No data available".to_string() };
        };

        match serde_json::from_value::<OwObservation>(value) {
            Ok(observation) => WeatherReport::Current(observation.into()),
            Err(err) => {
                error!(category = "extract", error = %err, "failed to extract weather fields");
                WeatherReport::Unavailable {
                    error: "Failed to process weather data".to_string(),
                }
            }
        }
    }
}

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct OwObservation {
    name: Option<String>,
    #[serde(default)]
    sys: OwSys,
    #[serde(default)]
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    dt: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    temp: Option<Number>,
    feels_like: Option<Number>,
    humidity: Option<Number>,
    pressure: Option<Number>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    speed: Option<Number>,
    deg: Option<Number>,
}

impl From<OwObservation> for CurrentConditions {
    fn from(observation: OwObservation) -> Self {
        let name = observation.name.unwrap_or_else(|| UNKNOWN.to_string());
        let country = observation.sys.country.unwrap_or_else(|| UNKNOWN.to_string());

        let weather = observation
            .weather
            .into_iter()
            .next()
            .and_then(|entry| entry.description)
            .unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            location: format!("{name}, {country}"),
            temperature: observation.main.temp,
            feels_like: observation.main.feels_like,
            humidity: observation.main.humidity,
            pressure: observation.main.pressure,
            weather,
            wind: Wind { speed: observation.wind.speed, direction: observation.wind.deg },
            timestamp: observation.dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> RawWeatherResponse {
        json!({
            "name": "Nairobi",
            "sys": {"country": "KE"},
            "main": {
                "temp": 24.93,
                "feels_like": 24.63,
                "humidity": 44,
                "pressure": 1012
            },
            "weather": [{"description": "broken clouds"}],
            "wind": {"speed": 4.63, "deg": 70},
            "dt": 1742827568
        })
    }

    fn current(report: WeatherReport) -> CurrentConditions {
        match report {
            WeatherReport::Current(conditions) => conditions,
            WeatherReport::Unavailable { error } => panic!("unexpected error record: {error}"),
        }
    }

    #[test]
    fn full_response_maps_all_fields() {
        let conditions = current(WeatherReport::from_raw(Some(sample_response())));

        assert_eq!(conditions.location, "Nairobi, KE");
        assert_eq!(conditions.temperature, Some(Number::from_f64(24.93).unwrap()));
        assert_eq!(conditions.feels_like, Some(Number::from_f64(24.63).unwrap()));
        assert_eq!(conditions.humidity, Some(Number::from(44)));
        assert_eq!(conditions.pressure, Some(Number::from(1012)));
        assert_eq!(conditions.weather, "broken clouds");
        assert_eq!(conditions.wind.speed, Some(Number::from_f64(4.63).unwrap()));
        assert_eq!(conditions.wind.direction, Some(Number::from(70)));
        assert_eq!(conditions.timestamp, Some(1742827568));
    }

    #[test]
    fn missing_sections_default() {
        let conditions = current(WeatherReport::from_raw(Some(json!({"name": "Nairobi"}))));

        assert_eq!(conditions.location, "Nairobi, Unknown");
        assert_eq!(conditions.temperature, None);
        assert_eq!(conditions.humidity, None);
        assert_eq!(conditions.weather, "Unknown");
        assert_eq!(conditions.wind.speed, None);
        assert_eq!(conditions.wind.direction, None);
        assert_eq!(conditions.timestamp, None);
    }

    #[test]
    fn empty_response_is_all_sentinels() {
        let conditions = current(WeatherReport::from_raw(Some(json!({}))));

        assert_eq!(conditions.location, "Unknown, Unknown");
        assert_eq!(conditions.weather, "Unknown");
    }

    #[test]
    fn empty_weather_list_defaults() {
        let mut raw = sample_response();
        raw["weather"] = json!([]);

        let conditions = current(WeatherReport::from_raw(Some(raw)));

        assert_eq!(conditions.weather, "Unknown");
    }

    #[test]
    fn no_result_yields_error_record() {
        let report = WeatherReport::from_raw(None);

        assert_eq!(
            report,
            WeatherReport::Unavailable { error: "No data available".to_string() }
        );
    }

    #[test]
    fn wrong_type_yields_error_record() {
        let report = WeatherReport::from_raw(Some(json!({"name": "Nairobi", "main": "hot"})));

        assert_eq!(
            report,
            WeatherReport::Unavailable { error: "Failed to process weather data".to_string() }
        );
    }

    #[test]
    fn report_serializes_with_null_placeholders() {
        let report = WeatherReport::from_raw(Some(json!({"name": "Nairobi"})));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "location": "Nairobi, Unknown",
                "temperature": null,
                "feels_like": null,
                "humidity": null,
                "pressure": null,
                "weather": "Unknown",
                "wind": {"speed": null, "direction": null},
                "timestamp": null
            })
        );
    }

    #[test]
    fn error_record_serializes_to_error_key_only() {
        let report = WeatherReport::from_raw(None);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value, json!({"error": "No data available"}));
    }

    #[test]
    fn report_roundtrips_through_json() {
        let report = WeatherReport::from_raw(Some(sample_response()));

        let text = serde_json::to_string(&report).unwrap();
        let parsed: WeatherReport = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, report);
    }
}
