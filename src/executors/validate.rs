//! Validate command executor

use console::style;
use miette::{Result, WrapErr};

use super::load_requests;
use crate::config::ValidateConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::utils::string::pluralize;

pub struct ValidateExecutor;

impl CommandExecutor for ValidateExecutor {
    type Config = ValidateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::for_terminal();
        let requests = load_requests(&config.input, progress.as_mut())
            .wrap_err("Request file failed validation")?;

        println!(
            "{} {} is valid: {} {} between {} {}",
            style("✅").green(),
            config.input.display(),
            requests.len(),
            pluralize("request", requests.len()),
            requests.buildings().len(),
            pluralize("building", requests.buildings().len())
        );
        Ok(())
    }
}
