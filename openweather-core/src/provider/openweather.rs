use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

use crate::{
    error::FetchError,
    model::{RawWeatherResponse, WeatherQuery},
};

use super::WeatherProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest client");

        Self { api_key, base_url, http }
    }

    /// Single attempt against the current-weather endpoint.
    async fn request(&self, query: &WeatherQuery) -> Result<RawWeatherResponse, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", query.units.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let raw = serde_json::from_str(&body)?;

        Ok(raw)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Option<RawWeatherResponse> {
        info!(city = %query.city, units = %query.units, "fetching current weather");

        match self.request(query).await {
            Ok(raw) => Some(raw),
            Err(err) => {
                error!(category = err.category(), error = %err, "weather request failed");
                None
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
