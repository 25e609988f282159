//! Command implementations for the building-swap CLI
//!
//! This module contains the implementations for each CLI command:
//! - resolve: find every swap group in a request file
//! - graph: render the request graph
//! - validate: check a request file without resolving it

pub mod graph;
pub mod resolve;
pub mod validate;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Resolve { .. } => resolve::execute_resolve_command(command),
        Commands::Graph { .. } => graph::execute_graph_command(command),
        Commands::Validate { .. } => validate::execute_validate_command(command),
    }
}
