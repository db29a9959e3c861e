//! Grant/price file loading and vest-event output.

use crate::error::{CliError, Result};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use vesting_models::grants::Grant;
use vesting_models::pricing::{PricePoint, PriceSeries};
use vesting_models::schedules::VestEvent;

/// Reads a JSON array of grant records.
pub fn load_grants(path: &str) -> Result<Vec<Grant>> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let grants: Vec<Grant> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    Ok(grants)
}

/// Reads a JSON array of `{date, price}` valuation points.
pub fn load_prices(path: &str) -> Result<PriceSeries> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let points: Vec<PricePoint> = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    Ok(PriceSeries::from_points(points))
}

/// Vest-event output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array.
    Json,
    /// CSV with one row per event.
    Csv,
    /// Human-readable aligned table.
    Table,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "table" => Ok(OutputFormat::Table),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown output format: {}. Supported: json, csv, table",
                other
            ))),
        }
    }
}

/// Writes events in the chosen format.
pub fn write_events(events: &[VestEvent], format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, events)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for event in events {
                writer.serialize(event)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "{:>8}  {:<12}  {:>10}  {:>10}", "grant", "vest date", "shares", "price")?;
            for event in events {
                let price = event
                    .price_at_vest()
                    .map_or_else(|| "-".to_string(), |p| format!("{:.2}", p));
                writeln!(
                    out,
                    "{:>8}  {:<12}  {:>10}  {:>10}",
                    event.grant_id(),
                    event.date().to_string(),
                    event.shares(),
                    price
                )?;
            }
        }
    }
    Ok(())
}
