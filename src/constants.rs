//! Configuration constants for building-swap
//!
//! Defaults used when neither a command-line flag nor the matching
//! `BUILDING_SWAP_*` environment variable is given.

use std::time::Duration;

/// Request file configuration
pub mod input {
    /// Request file read when no path is given
    pub const DEFAULT_FILE: &str = "request.csv";

    /// Required CSV header row, in order
    pub const CSV_HEADERS: [&str; 3] = ["EmployeeID", "buildingFrom", "buildingTo"];
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames; the last one is shown when the spinner finishes
    pub const SPINNER_FRAMES: &[&str] = &["🔁 ", "🏢→", "🏢⇄", "🏢←", "🔁 ", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "dot";
}

/// Logging configuration
pub mod logging {
    /// Filter directive used when neither RUST_LOG nor --log-level is set
    pub const DEFAULT_LEVEL: &str = "warn";
}
