//! Tonight's phase report.
//!
//! Combines the phase calculation with the flavor-text assets into the
//! JSON-ready payload.

use chrono::Datelike;
use log::debug;

use crate::api::PhaseReport;
use crate::clock::Clock;
use crate::config::AssetsConfig;
use crate::error::Result;
use crate::models::{JulianDate, LunarPhase};
use crate::services::flavor;

/// Julian Date used for "tonight": noon on the civil day after the clock's
/// current date.
///
/// The successor date rolls over month and year boundaries.
pub fn julian_date_tonight(clock: &dyn Clock) -> JulianDate {
    let today = clock.today_utc();
    // succ_opt is None only at NaiveDate::MAX.
    let tomorrow = today.succ_opt().unwrap_or(today);
    JulianDate::from_civil(tomorrow.month(), tomorrow.day(), tomorrow.year(), 12, 0, 0)
}

/// Phase of the Moon for tonight.
pub fn phase_tonight(clock: &dyn Clock) -> LunarPhase {
    let jd = julian_date_tonight(clock);
    let phase = LunarPhase::from_julian_date(jd);
    debug!("tonight's phase is {} at JD {}", phase, jd.value());
    phase
}

/// Assemble the report payload for an arbitrary Julian Date.
///
/// # Arguments
///
/// * `jd` - Instant to compute the phase for
/// * `assets` - Locations of the flavor-text files
///
/// # Returns
///
/// The payload with phase name, icon stem, and one random line from each
/// flavor asset.
pub fn report_for(jd: JulianDate, assets: &AssetsConfig) -> Result<PhaseReport> {
    let phase = LunarPhase::from_julian_date(jd);
    let exclamation = flavor::random_line(&assets.exclamations_path())?;
    let quote = flavor::random_line(&assets.quotes_path())?;

    Ok(PhaseReport {
        phase: phase.name().to_string(),
        icon: phase.icon_name().to_string(),
        exclamation,
        quote,
        julian_date: jd.value(),
    })
}

/// Assemble the report payload for tonight.
pub fn tonight_report(clock: &dyn Clock, assets: &AssetsConfig) -> Result<PhaseReport> {
    report_for(julian_date_tonight(clock), assets)
}
