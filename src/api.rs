//! Public API surface for the phase report.
//!
//! This file consolidates the DTO types for the JSON payload.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Payload describing tonight's moon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseReport {
    /// Human-readable phase name
    pub phase: String,
    /// Icon asset stem for the phase
    pub icon: String,
    /// Random exclamation line from the flavor assets
    pub exclamation: String,
    /// Random quote line from the flavor assets
    pub quote: String,
    /// Julian Date the phase was computed for
    pub julian_date: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_to_json() {
        let report = PhaseReport {
            phase: "Full Moon".to_string(),
            icon: "full-moon".to_string(),
            exclamation: "Behold!".to_string(),
            quote: "We ran as if to meet the moon.".to_string(),
            julian_date: 2451564.5,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["phase"], "Full Moon");
        assert_eq!(json["icon"], "full-moon");
        assert_eq!(json["julian_date"], 2451564.5);
    }

    #[test]
    fn test_report_roundtrip() {
        let report = PhaseReport {
            phase: "New Moon".to_string(),
            icon: "new-moon".to_string(),
            exclamation: "Wow!".to_string(),
            quote: "q".to_string(),
            julian_date: 2451549.5,
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: PhaseReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, report.phase);
        assert_eq!(back.julian_date, report.julian_date);
    }
}
