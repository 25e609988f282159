//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::error::SwapError;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Request file to read (CSV, TOML or JSON; defaults to request.csv)
    #[arg(value_name = "INPUT", env = "BUILDING_SWAP_INPUT")]
    pub input: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "BUILDING_SWAP_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl CommonArgs {
    /// Get the input path, using the default request file if none provided
    pub fn get_input(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::constants::input::DEFAULT_FILE))
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, SwapError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, SwapError>;
}

/// Unwrap a builder field, reporting its name when it was never set
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, SwapError> {
    value.ok_or_else(|| SwapError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    })
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::SwapError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
