//! # Configuration Module
//!
//! This module provides configuration structures for all building-swap
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **ResolveConfig**: Configuration for the `resolve` command that finds
//!   swap groups
//! - **GraphOptions**: Configuration for the `graph` command that renders the
//!   request graph
//! - **ValidateConfig**: Configuration for the `validate` command
//!
//! ## Example
//!
//! ```
//! use building_swap::cli::{GraphFormat, OutputFormat};
//! use building_swap::common::ConfigBuilder;
//! use building_swap::config::{GraphOptions, ResolveConfig};
//!
//! # fn main() -> Result<(), building_swap::error::SwapError> {
//! let resolve = ResolveConfig::builder()
//!     .with_input("request.csv".into())
//!     .with_format(OutputFormat::Human)
//!     .with_max_groups(None)
//!     .with_output(None)
//!     .with_fail_on_unmatched(false)
//!     .build()?;
//! assert_eq!(resolve.format, OutputFormat::Human);
//!
//! let graph = GraphOptions::builder()
//!     .with_input("request.csv".into())
//!     .with_format(GraphFormat::Dot)
//!     .build()?;
//! assert!(graph.highlight_groups);
//! # Ok(())
//! # }
//! ```

pub mod graph;
pub mod resolve;
pub mod validate;

pub use graph::GraphOptions;
pub use resolve::ResolveConfig;
pub use validate::ValidateConfig;
