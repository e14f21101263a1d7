use crate::{
    Config,
    model::{RawWeatherResponse, WeatherQuery},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather observations.
///
/// Implementations perform a single request per call and absorb their own
/// failures: any transport or decoding problem is logged and surfaced as
/// `None`, never as an error.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Option<RawWeatherResponse>;
}

/// Construct the provider from config.
///
/// Fails when no API key is configured, before any request is issued.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.credential()?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned(), config.base_url.clone())))
}
