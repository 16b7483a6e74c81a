use std::fmt;

use serde::{Deserialize, Serialize};

use super::time::JulianDate;

/// Julian Date of the reference new moon (2000-01-06).
pub const BASE_NEW_MOON_DATE: f64 = 2451549.5;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Upper bounds, in days into the cycle, for buckets 0 through 7 in
/// ascending order. Ages past the last bound close the cycle in bucket 8.
/// Buckets 0 and 8 both denote a new moon and together span one
/// eighth-cycle interval across the wrap point.
const BUCKET_BOUNDS: [f64; 8] = [
    1.84566, 5.53699, 9.22831, 12.91963, 16.61096, 20.30228, 23.99361, 27.86493,
];

/// Classify a Julian Date into one of nine phase buckets (`0..=8`).
///
/// The date's offset from the reference new moon is reduced modulo the
/// synodic month; dates before the reference epoch wrap into the prior
/// cycle rather than failing.
pub fn phase_bucket(jd: JulianDate) -> u8 {
    let mut difference = jd.value() - BASE_NEW_MOON_DATE;
    if difference < 0.0 {
        difference += SYNODIC_MONTH;
    }
    // rem_euclid keeps the age in [0, SYNODIC_MONTH) however far back the
    // input reaches.
    let age = difference.rem_euclid(SYNODIC_MONTH);
    BUCKET_BOUNDS
        .iter()
        .position(|bound| age < *bound)
        .unwrap_or(BUCKET_BOUNDS.len()) as u8
}

/// The eight principal phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhase {
    /// Map a phase bucket to its phase.
    ///
    /// Total over all inputs: bucket 8 closes the cycle back onto the new
    /// moon, and any unrecognized value falls back to `NewMoon` as well.
    pub fn from_bucket(bucket: u8) -> Self {
        match bucket {
            1 => Self::WaxingCrescent,
            2 => Self::FirstQuarter,
            3 => Self::WaxingGibbous,
            4 => Self::Full,
            5 => Self::WaningGibbous,
            6 => Self::LastQuarter,
            7 => Self::WaningCrescent,
            _ => Self::NewMoon,
        }
    }

    /// Phase of the Moon at a Julian Date.
    pub fn from_julian_date(jd: JulianDate) -> Self {
        Self::from_bucket(phase_bucket(jd))
    }

    /// Human-readable phase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Stem of the icon asset for this phase.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::NewMoon => "new-moon",
            Self::WaxingCrescent => "waxing-crescent",
            Self::FirstQuarter => "first-quarter",
            Self::WaxingGibbous => "waxing-gibbous",
            Self::Full => "full-moon",
            Self::WaningGibbous => "waning-gibbous",
            Self::LastQuarter => "last-quarter",
            Self::WaningCrescent => "waning-crescent",
        }
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
