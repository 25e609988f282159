//! Resolve command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ResolveConfig;
use crate::error::SwapError;

impl FromCommand for ResolveConfig {
    fn from_command(command: Commands) -> Result<Self, SwapError> {
        match command {
            Commands::Resolve {
                common,
                format,
                max_groups,
                output,
                fail_on_unmatched,
            } => ResolveConfig::builder()
                .with_input(common.get_input())
                .with_format(format.format)
                .with_max_groups(max_groups)
                .with_output(output)
                .with_fail_on_unmatched(fail_on_unmatched)
                .build(),
            _ => Err(SwapError::ConfigurationError {
                message: "Invalid command type for ResolveConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ResolveConfig);

/// Execute the resolve command for finding swap groups
pub fn execute_resolve_command(command: Commands) -> Result<()> {
    let config = ResolveConfig::from_command(command)
        .wrap_err("Failed to parse resolve command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::resolve::ResolveExecutor;
    ResolveExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::{CommonArgs, FormatArgs};

    #[test]
    fn test_config_from_resolve_command() {
        let command = Commands::Resolve {
            common: CommonArgs {
                input: Some(PathBuf::from("moves.csv")),
            },
            format: FormatArgs {
                format: OutputFormat::Csv,
            },
            max_groups: Some(2),
            output: None,
            fail_on_unmatched: false,
        };

        let config = ResolveConfig::try_from(command).unwrap();
        assert_eq!(config.input, PathBuf::from("moves.csv"));
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.max_groups, Some(2));
    }

    #[test]
    fn test_config_from_wrong_command() {
        let command = Commands::Validate {
            common: CommonArgs { input: None },
        };
        assert!(ResolveConfig::from_command(command).is_err());
    }
}
