//! Resolve command executor

use console::style;
use miette::{Result, WrapErr};

use super::{load_requests, write_output};
use crate::cli::OutputFormat;
use crate::config::ResolveConfig;
use crate::detector::SwapDetector;
use crate::executors::CommandExecutor;
use crate::graph::SwapGraph;
use crate::progress::ProgressReporter;
use crate::reports::{
    CsvReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};

pub struct ResolveExecutor;

impl CommandExecutor for ResolveExecutor {
    type Config = ResolveConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Resolving building swap requests...\n", style("🔁").cyan());

        let mut progress = ProgressReporter::for_terminal();

        let requests = load_requests(&config.input, progress.as_mut())
            .wrap_err("Failed to load move requests")?;

        if requests.is_empty() {
            eprintln!("{} No move requests found to resolve", style("ℹ").blue());
        }

        if let Some(p) = progress.as_mut() {
            p.start_resolution();
        }

        let mut detector = SwapDetector::new();
        detector
            .detect_swaps(SwapGraph::from_requests(&requests), progress.as_ref())
            .wrap_err("Failed to resolve swap groups")?;

        if let Some(p) = progress.as_mut() {
            p.finish_resolution(detector.group_count(), detector.unmatched().len());
        }

        let report = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_groups).generate_report(&detector)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&detector),
            OutputFormat::Csv => CsvReportGenerator::new().generate_report(&detector),
        }
        .wrap_err("Failed to generate report")?;

        write_output(&report, config.output.as_deref())?;

        if config.fail_on_unmatched && !detector.unmatched().is_empty() {
            std::process::exit(1);
        }

        Ok(())
    }
}
