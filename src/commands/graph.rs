//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::SwapError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, SwapError> {
        match command {
            Commands::Graph {
                common,
                format,
                output,
                highlight_groups,
            } => GraphOptions::builder()
                .with_input(common.get_input())
                .with_format(format)
                .with_output(output)
                .with_highlight_groups(highlight_groups)
                .build(),
            _ => Err(SwapError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command for rendering the request graph
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let options = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(options)
}
