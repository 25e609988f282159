//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - csv: one row per move, for spreadsheets and follow-up tooling

pub mod csv;
pub mod human;
pub mod json;

use crate::detector::SwapDetector;
use crate::error::SwapError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from swap resolution results
    fn generate_report(&self, detector: &SwapDetector) -> Result<String, SwapError>;
}

pub use self::csv::CsvReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
