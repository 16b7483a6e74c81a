use chrono::Datelike;
use serde::*;

use crate::error::{Error, Result};

/// Days in each month of a common year, January first.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Convert a civil (Gregorian) calendar date to its Julian Day Number.
///
/// January and February count as months 13 and 14 of the previous year, so
/// the leap day is the last day of the shifted year. The anchor is March 1,
/// 4800 BCE in the proleptic calendar, with Gregorian leap corrections and
/// the epoch constant 32045. All divisions are floor divisions: the formula
/// relies on truncation, not rounding.
pub fn julian_day_number(month: u32, day: u32, year: i32) -> i64 {
    let a = (14 - month as i64).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64
        + (153 * m + 2).div_euclid(5)
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Gregorian leap rule: every fourth year, except centuries not divisible
/// by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of a month in the proleptic Gregorian calendar. Months outside
/// 1..=12 have no days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Julian Date representation.
/// Continuous day count with a fractional time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Create a new Julian Date value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw Julian Date value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Attach a time of day to a whole Julian Day Number.
    ///
    /// The fraction is `hour/24 + minute/1440 + second/86400`, computed in
    /// floating point.
    pub fn at_time_on_day(jdn: i64, hour: u32, minute: u32, second: u32) -> Self {
        Self(
            jdn as f64
                + hour as f64 / 24.0
                + minute as f64 / 1440.0
                + second as f64 / 86400.0,
        )
    }

    /// Julian Date for a civil date and time of day.
    ///
    /// Total over its inputs: out-of-range components are folded through
    /// the day-number arithmetic unchecked. Use [`CalendarDateTime`] for a
    /// validated path to the same value.
    pub fn from_civil(month: u32, day: u32, year: i32, hour: u32, minute: u32, second: u32) -> Self {
        Self::at_time_on_day(julian_day_number(month, day, year), hour, minute, second)
    }
}

impl From<f64> for JulianDate {
    fn from(v: f64) -> Self {
        JulianDate::new(v)
    }
}

/// Immutable civil date-time value, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarDateTime {
    /// Build a civil date-time, rejecting values outside the natural
    /// calendar range (including day-of-month against the month's true
    /// length for the year).
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidDate { year, month, day });
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidTime { hour, minute, second });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Build from a chrono date with an explicit time of day.
    pub fn from_date(date: chrono::NaiveDate, hour: u32, minute: u32, second: u32) -> Result<Self> {
        Self::new(date.year(), date.month(), date.day(), hour, minute, second)
    }

    /// Julian Date of this instant.
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::from_civil(
            self.month,
            self.day,
            self.year,
            self.hour,
            self.minute,
            self.second,
        )
    }
}
