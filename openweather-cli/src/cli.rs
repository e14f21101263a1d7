use anyhow::{Context, Result, ensure};
use clap::{ArgAction, Parser, Subcommand};
use inquire::{Password, Text};
use std::path::{Path, PathBuf};

use openweather_core::{Config, Units, WeatherQuery, WeatherReport, provider_from_config, store};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "openweather", version, about = "OpenWeatherMap CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// Fetch, display and save the current weather for a city.
    Show {
        /// City name; prompted for interactively when omitted.
        city: Option<String>,

        /// Unit system: metric, imperial or standard.
        #[arg(long, default_value = "metric")]
        units: String,

        /// File the JSON report is written to.
        #[arg(long, default_value = store::DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city, units, output }) => show(city, &units, &output).await,
            // Bare invocation behaves like `show` with all defaults.
            None => show(None, "metric", Path::new(store::DEFAULT_OUTPUT_FILE)).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    let api_key = api_key.trim();
    ensure!(!api_key.is_empty(), "API key must not be empty");

    config.api_key = Some(api_key.to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: Option<String>, units: &str, path: &Path) -> Result<()> {
    let units = Units::try_from(units)?;

    let config = Config::load_with_env()?;
    let provider = provider_from_config(&config)?;

    let city = match city {
        Some(city) => city,
        None => Text::new("Enter city name:").prompt().context("Failed to read city name")?,
    };
    let query = WeatherQuery::new(city, units)?;

    let Some(raw) = provider.current_weather(&query).await else {
        println!("Failed to fetch weather data. Check the logs for details.");
        return Ok(());
    };

    let report = WeatherReport::from_raw(Some(raw));
    output::display(&report);
    store::save_report(&report, path);

    Ok(())
}
