//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::detector::SwapDetector;
use crate::error::SwapError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &SwapDetector) -> Result<String, SwapError> {
        // Groups keep discovery order; it is part of the result
        let groups: Vec<_> = detector
            .swap_groups()
            .iter()
            .map(|group| {
                json!({
                    "employees": group.employees(),
                    "moves": group.moves(),
                })
            })
            .collect();

        let report = json!({
            "has_swaps": detector.has_swaps(),
            "group_count": detector.group_count(),
            "groups": groups,
            "unmatched": detector.unmatched(),
        });

        serde_json::to_string_pretty(&report).map_err(SwapError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::test_support::detector_with_groups;

    #[test]
    fn test_json_report_no_swaps() {
        let report = JsonReportGenerator::new()
            .generate_report(&SwapDetector::new())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_swaps"], false);
        assert_eq!(json["group_count"], 0);
        assert_eq!(json["groups"].as_array().unwrap().len(), 0);
        assert_eq!(json["unmatched"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_groups() {
        let report = JsonReportGenerator::new()
            .generate_report(&detector_with_groups())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_swaps"], true);
        assert_eq!(json["group_count"], 2);
        assert_eq!(json["groups"][0]["employees"], json!(["E1", "E2"]));
        assert_eq!(json["groups"][1]["employees"], json!(["E3", "E4", "E5"]));
        assert_eq!(
            json["groups"][1]["moves"][2],
            json!({"employee": "E5", "from": 5, "to": 3})
        );
        assert_eq!(
            json["unmatched"],
            json!([{"employee": "E6", "from": 7, "to": 8}])
        );
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let report = JsonReportGenerator
            .generate_report(&SwapDetector::new())
            .unwrap();
        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
