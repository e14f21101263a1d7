use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::{fs, path::Path};
use tracing::{error, info};

use crate::report::WeatherReport;

/// File written next to the working directory when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "weather_data.json";

/// Write the report as indented JSON, replacing any existing file.
///
/// Failures are logged and reported as `false`; this never errors out of the
/// pipeline.
pub fn save_report(report: &WeatherReport, path: &Path) -> bool {
    match try_save(report, path) {
        Ok(()) => {
            info!(path = %path.display(), "weather report saved");
            true
        }
        Err(err) => {
            error!(category = "io", error = %err, "failed to save weather report");
            false
        }
    }
}

fn try_save(report: &WeatherReport, path: &Path) -> Result<()> {
    let bytes = to_pretty_json(report).context("Failed to serialize weather report")?;

    fs::write(path, bytes)
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    Ok(())
}

// 4-space indentation; serde_json's default pretty printer uses 2.
fn to_pretty_json(report: &WeatherReport) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    report.serialize(&mut serializer)?;

    Ok(buf)
}
