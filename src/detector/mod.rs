//! # Swap Detection Module
//!
//! This module drives swap resolution over the request graph.
//!
//! ## Algorithm
//!
//! Each pass runs a depth-first search with white/gray/black colouring over
//! every building, stopping at the first back edge. The closed walk that
//! back edge completes is one swap group: the oldest unconsumed request on
//! each of its edges is assigned to the group and removed from the graph.
//! Passes repeat on the shrunken graph until it is acyclic. Every pass removes
//! at least two requests, so resolution ends after at most `requests / 2 + 1`
//! passes.
//!
//! ## Example
//!
//! ```
//! use building_swap::core::{MoveRequest, RequestSet};
//! use building_swap::detector::SwapDetector;
//!
//! # fn main() -> miette::Result<()> {
//! let requests = RequestSet::from_requests(vec![
//!     MoveRequest::new("E1", 1, 2),
//!     MoveRequest::new("E2", 2, 3),
//!     MoveRequest::new("E3", 3, 1),
//!     MoveRequest::new("E4", 4, 5),
//! ])?;
//!
//! let mut detector = SwapDetector::new();
//! detector.detect_in_requests(&requests)?;
//!
//! assert_eq!(detector.group_count(), 1);
//! assert_eq!(detector.swap_groups()[0].len(), 3);
//! assert_eq!(detector.unmatched().len(), 1);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
