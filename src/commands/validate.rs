//! Validate command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ValidateConfig;
use crate::error::SwapError;

impl FromCommand for ValidateConfig {
    fn from_command(command: Commands) -> Result<Self, SwapError> {
        match command {
            Commands::Validate { common } => ValidateConfig::builder()
                .with_input(common.get_input())
                .build(),
            _ => Err(SwapError::ConfigurationError {
                message: "Invalid command type for ValidateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ValidateConfig);

pub fn execute_validate_command(command: Commands) -> Result<()> {
    let config = ValidateConfig::from_command(command)
        .wrap_err("Failed to parse validate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::validate::ValidateExecutor;
    ValidateExecutor::execute(config)
}
