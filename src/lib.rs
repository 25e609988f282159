//! # Building Swap - Find Groups of Employees Who Can Trade Buildings
//!
//! Employees file requests to move from one building to another. A request
//! can only be granted if someone else leaves the destination building, so
//! requests are granted in closed chains: A moves into B's building, B into
//! C's, and C into A's. building-swap models requests as a directed
//! multigraph between buildings and extracts such chains (swap groups) until
//! none is left.
//!
//! ## Main Components
//!
//! - **Core**: request, building and swap group types plus input validation
//! - **Graph**: the swap graph the resolver runs on, and DOT/Mermaid
//!   rendering of requests
//! - **Detector**: the repeat-until-acyclic swap resolution driver
//! - **Reports**: human, JSON and CSV output
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use building_swap::detector::SwapDetector;
//! use building_swap::reports::{HumanReportGenerator, ReportGenerator};
//! use building_swap::request_loader::RequestLoader;
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Load and validate the requests
//! let requests = RequestLoader::load(Path::new("request.csv"))?;
//!
//! // Step 2: Resolve them into swap groups
//! let mut detector = SwapDetector::new();
//! detector.detect_in_requests(&requests)?;
//!
//! // Step 3: Report
//! for group in detector.swap_groups() {
//!     println!("{:?}", group.employees());
//! }
//! println!("{}", HumanReportGenerator::new(None).generate_report(&detector)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Resolving In-Memory Requests
//!
//! ```
//! use building_swap::core::{EmployeeId, MoveRequest, RequestSet};
//! use building_swap::find_swap_groups;
//!
//! # fn main() -> miette::Result<()> {
//! let requests = RequestSet::from_requests(vec![
//!     MoveRequest::new("E1", 1, 2),
//!     MoveRequest::new("E2", 2, 1),
//!     MoveRequest::new("E3", 1, 2),
//!     MoveRequest::new("E4", 2, 1),
//! ])?;
//!
//! let groups = find_swap_groups(&requests)?;
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].employees(), vec![EmployeeId::new("E1"), EmployeeId::new("E2")]);
//! assert_eq!(groups[1].employees(), vec![EmployeeId::new("E3"), EmployeeId::new("E4")]);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;
pub mod request_loader;
pub mod validation;

pub use common::ConfigBuilder;

use crate::core::{RequestSet, SwapGroup};

/// Resolve a validated request set into its swap groups, in discovery order
pub fn find_swap_groups(requests: &RequestSet) -> miette::Result<Vec<SwapGroup>> {
    let mut detector = detector::SwapDetector::new();
    detector.detect_in_requests(requests)?;
    Ok(detector.swap_groups().to_vec())
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    execute_command(cli.command)
}
