//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::SwapDetector;
use crate::error::SwapError;
use crate::utils::string::{join_display, pluralize};

pub struct HumanReportGenerator {
    max_groups: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_groups: Option<usize>) -> Self {
        Self { max_groups }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &SwapDetector) -> Result<String, SwapError> {
        let mut output = String::new();

        if !detector.has_swaps() {
            write!(
                output,
                "\n{} No swap groups found: no set of requests closes into a cycle.\n",
                style("ℹ").blue().bold()
            )?;
        } else {
            write!(
                output,
                "\n{} Found {} swap {}:\n\n",
                style("✅").green().bold(),
                style(detector.group_count()).green().bold(),
                pluralize("group", detector.group_count())
            )?;

            let limit = self.max_groups.unwrap_or(usize::MAX);
            for (i, group) in detector.swap_groups().iter().take(limit).enumerate() {
                writeln!(
                    output,
                    "{} Group #{} ({} {})",
                    style("🔁").yellow(),
                    i + 1,
                    group.len(),
                    pluralize("employee", group.len())
                )?;
                for request in group.moves() {
                    writeln!(
                        output,
                        "    {} {}: building {} → building {}",
                        style("•").dim(),
                        style(&request.employee).bold(),
                        style(request.from).cyan(),
                        style(request.to).cyan()
                    )?;
                }
                writeln!(
                    output,
                    "    {} {}\n",
                    style("employees:").dim(),
                    join_display(&group.employees(), ", ")
                )?;
            }

            let total = detector.group_count();
            if self.max_groups.is_some_and(|limit| limit < total) {
                writeln!(
                    output,
                    "{} Showing {} of {} groups. Use --max-groups to see more.\n",
                    style("ℹ").blue(),
                    style(limit).yellow(),
                    style(total).yellow()
                )?;
            }
        }

        if !detector.unmatched().is_empty() {
            let count = detector.unmatched().len();
            writeln!(
                output,
                "{} {} {} cannot be matched with a swap partner:",
                style("⏸").dim(),
                count,
                pluralize("request", count)
            )?;
            for request in detector.unmatched() {
                writeln!(
                    output,
                    "    {} {}: building {} → building {}",
                    style("·").dim(),
                    request.employee,
                    request.from,
                    request.to
                )?;
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use predicates::prelude::*;

    use super::*;
    use crate::reports::test_support::detector_with_groups;

    fn plain(report: String) -> String {
        console::strip_ansi_codes(&report).into_owned()
    }

    #[test]
    fn test_human_report_no_swaps() {
        let report = plain(
            HumanReportGenerator::new(None)
                .generate_report(&SwapDetector::new())
                .unwrap(),
        );
        assert!(predicate::str::contains("No swap groups found").eval(&report));
        assert!(!report.contains("cannot be matched"));
    }

    #[test]
    fn test_human_report_lists_groups_in_order() {
        let report = plain(
            HumanReportGenerator::new(None)
                .generate_report(&detector_with_groups())
                .unwrap(),
        );

        assert!(report.contains("Found 2 swap groups"));
        let first = report.find("Group #1 (2 employees)").unwrap();
        let second = report.find("Group #2 (3 employees)").unwrap();
        assert!(first < second);
        assert!(report.contains("E3: building 3 → building 4"));
        assert!(report.contains("employees: E3, E4, E5"));
        assert!(report.contains("1 request cannot be matched"));
        assert!(report.contains("E6: building 7 → building 8"));
    }

    #[test]
    fn test_human_report_respects_max_groups() {
        let report = plain(
            HumanReportGenerator::new(Some(1))
                .generate_report(&detector_with_groups())
                .unwrap(),
        );

        assert!(report.contains("Group #1"));
        assert!(!report.contains("Group #2"));
        assert!(report.contains("ℹ Showing 1 of 2 groups"));
        assert!(!report.contains('\u{FE0F}'));
    }
}
