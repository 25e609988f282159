//! CSV report generation
//!
//! One row per move, in the same column naming as the request file so the
//! output can be fed straight into spreadsheets.

use serde::Serialize;

use super::ReportGenerator;
use crate::core::BuildingId;
use crate::detector::SwapDetector;
use crate::error::SwapError;

#[derive(Serialize)]
struct MoveRow<'a> {
    group: usize,
    position: usize,
    #[serde(rename = "EmployeeID")]
    employee: &'a str,
    #[serde(rename = "buildingFrom")]
    from: BuildingId,
    #[serde(rename = "buildingTo")]
    to: BuildingId,
}

pub struct CsvReportGenerator;

impl Default for CsvReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for CsvReportGenerator {
    fn generate_report(&self, detector: &SwapDetector) -> Result<String, SwapError> {
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        let csv_error = |source| SwapError::Csv {
            path: "<report>".into(),
            source,
        };

        // Written by hand so an empty report still carries the header row
        writer
            .write_record(["group", "position", "EmployeeID", "buildingFrom", "buildingTo"])
            .map_err(csv_error)?;

        for (group_index, group) in detector.swap_groups().iter().enumerate() {
            for (position, request) in group.moves().iter().enumerate() {
                writer
                    .serialize(MoveRow {
                        group: group_index + 1,
                        position: position + 1,
                        employee: request.employee.as_str(),
                        from: request.from,
                        to: request.to,
                    })
                    .map_err(csv_error)?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SwapError::Io(e.into_error()))?;
        report_text(bytes)
    }
}

fn report_text(bytes: Vec<u8>) -> Result<String, SwapError> {
    String::from_utf8(bytes)
        .map_err(|e| SwapError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
