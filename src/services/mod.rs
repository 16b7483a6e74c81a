//! Service layer for report assembly and flavor text.
//!
//! Services orchestrate the phase models, the clock, and the text assets
//! into the payload the presentation layer consumes.

pub mod flavor;

pub mod report;

pub use flavor::{random_line, reservoir_sample};
pub use report::{julian_date_tonight, phase_tonight, report_for, tonight_report};
