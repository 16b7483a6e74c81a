//! Moonphase CLI
//!
//! Prints tonight's phase report as pretty JSON.
//!
//! # Usage
//!
//! ```bash
//! # Tonight's report
//! cargo run --bin moonphase-tonight
//!
//! # Report for a specific date
//! MOONPHASE_DATE=2000-01-06 cargo run --bin moonphase-tonight
//! ```
//!
//! # Environment Variables
//!
//! - `MOONPHASE_CONFIG`: path to a TOML config file (default: search for
//!   `moonphase.toml`, then built-in defaults)
//! - `MOONPHASE_DATE`: compute the report for noon on this `YYYY-MM-DD`
//!   date instead of tonight
//! - `RUST_LOG`: log level (default: info)

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use moonphase::clock::SystemClock;
use moonphase::config::Config;
use moonphase::models::CalendarDateTime;
use moonphase::services::{report_for, tonight_report};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = match env::var("MOONPHASE_CONFIG") {
        Ok(path) => Config::from_file(&path)?,
        Err(_) => Config::from_default_locations(),
    };
    info!("using assets from {}", config.assets.dir.display());

    let report = match env::var("MOONPHASE_DATE") {
        Ok(raw) => {
            let date = parse_civil_date(&raw)?;
            report_for(date.to_julian_date(), &config.assets)?
        }
        Err(_) => tonight_report(&SystemClock, &config.assets)?,
    };
    info!("the moon is {}", report.phase);

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Parse a `YYYY-MM-DD` string into a noon calendar instant.
fn parse_civil_date(raw: &str) -> anyhow::Result<CalendarDateTime> {
    let mut parts = raw.splitn(3, '-');
    let year = parts
        .next()
        .context("missing year")?
        .parse()
        .context("invalid year")?;
    let month = parts
        .next()
        .context("missing month")?
        .parse()
        .context("invalid month")?;
    let day = parts
        .next()
        .context("missing day")?
        .parse()
        .context("invalid day")?;
    Ok(CalendarDateTime::new(year, month, day, 12, 0, 0)?)
}
