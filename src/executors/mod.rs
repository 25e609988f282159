//! Command executors that handle the actual logic for each command

pub mod graph;
pub mod resolve;
pub mod validate;

use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::core::RequestSet;
use crate::progress::ProgressReporter;
use crate::request_loader::RequestLoader;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the request file, reporting progress on interactive terminals
fn load_requests(input: &Path, progress: Option<&mut ProgressReporter>) -> Result<RequestSet> {
    eprintln!(
        "{} Reading move requests from {}",
        style("📄").cyan(),
        style(input.display()).bold()
    );

    match progress {
        Some(p) => {
            p.start_loading(input);
            let requests = RequestLoader::load(input);
            let (count, buildings) = requests
                .as_ref()
                .map_or((0, 0), |set| (set.len(), set.buildings().len()));
            p.finish_loading(count, buildings);
            requests
        }
        None => RequestLoader::load(input),
    }
}

/// Write rendered output to `output`, or stdout when none is given
fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {}",
                style("✓").green(),
                style(path.display()).bold()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
