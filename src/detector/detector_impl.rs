use miette::{Result, WrapErr};
use tracing::{debug, info};

use crate::core::{MoveRequest, RequestSet, SwapGroup};
use crate::error::SwapError;
use crate::graph::{SwapGraph, cyclic_segment};
use crate::progress::ProgressReporter;

/// Finds every swap group in a request graph
///
/// Repeats a full detection pass over the remaining graph, consuming the
/// first cycle found each time, until no cycle is left.
pub struct SwapDetector {
    groups: Vec<SwapGroup>,
    unmatched: Vec<MoveRequest>,
    passes: usize,
}

impl Default for SwapDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapDetector {
    /// Create a new swap detector
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            unmatched: Vec::new(),
            passes: 0,
        }
    }

    /// Build the graph for `requests` and resolve it
    pub fn detect_in_requests(&mut self, requests: &RequestSet) -> Result<()> {
        self.detect_swaps(SwapGraph::from_requests(requests), None)
    }

    /// Consume `graph`, collecting swap groups until it is acyclic
    ///
    /// Requests left in the graph afterwards cannot be part of any swap and
    /// are kept as unmatched; they are not an error.
    pub fn detect_swaps(
        &mut self,
        mut graph: SwapGraph,
        progress: Option<&ProgressReporter>,
    ) -> Result<()> {
        debug!(
            buildings = graph.vertex_count(),
            requests = graph.edge_count(),
            "resolving swap groups"
        );

        while let Some(path) = graph.detect_cycle() {
            self.passes += 1;

            let cycle = cyclic_segment(&path)
                .ok_or_else(|| SwapError::GraphError {
                    message: format!("detection pass {} returned an open path", self.passes),
                })?
                .to_vec();

            let group = graph
                .materialize_swap_group(&cycle)
                .wrap_err("Failed to map cycle to employees")?;
            let before = graph.edge_count();
            graph
                .remove_cycle_edges(&cycle)
                .wrap_err("Failed to remove swapped requests")?;

            debug!(
                pass = self.passes,
                size = group.len(),
                remaining = graph.edge_count(),
                "found swap group"
            );
            debug_assert!(graph.edge_count() < before);

            if let Some(p) = progress {
                p.found_swap_group(self.groups.len() + 1, group.len());
            }
            self.groups.push(group);
        }
        // The final pass finds nothing but still walks the whole graph
        self.passes += 1;

        self.unmatched = graph.remaining_requests();
        info!(
            groups = self.groups.len(),
            unmatched = self.unmatched.len(),
            passes = self.passes,
            "swap resolution finished"
        );

        Ok(())
    }

    /// Swap groups in discovery order
    pub fn swap_groups(&self) -> &[SwapGroup] {
        &self.groups
    }

    /// Check if any swap group was found
    pub fn has_swaps(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Requests that are not part of any swap group, in arrival order
    pub fn unmatched(&self) -> &[MoveRequest] {
        &self.unmatched
    }

    /// Number of detection passes run, including the final empty one
    pub fn pass_count(&self) -> usize {
        self.passes
    }

    /// Add a swap group to the detector (used by report fixtures)
    #[cfg(test)]
    pub(crate) fn add_group(&mut self, group: SwapGroup) {
        self.groups.push(group);
    }

    /// Record an unmatched request (used by report fixtures)
    #[cfg(test)]
    pub(crate) fn add_unmatched(&mut self, request: MoveRequest) {
        self.unmatched.push(request);
    }
}
