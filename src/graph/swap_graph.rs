use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::core::{BuildingId, EmployeeId, MoveRequest, RequestSet, SwapGroup};
use crate::error::SwapError;

/// Position of a building in the graph's vertex arena
pub type VertexIndex = usize;

/// Position of a request in the graph's edge arena
type RequestIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not reached yet in this pass
    White,
    /// On the current descent path
    Gray,
    /// Fully explored, no cycle through it
    Black,
}

/// Directed multigraph of move requests between buildings
///
/// Buildings and requests live in index-addressed arenas. For every vertex the
/// successor list keeps arrival order, and every (source, destination) pair
/// keeps a FIFO of the requests still unconsumed on it. The two structures are
/// co-indexed: the first occurrence of `to` in `successors[from]` always
/// corresponds to the front of `labels[(from, to)]`.
#[derive(Debug, Clone, Default)]
pub struct SwapGraph {
    buildings: Vec<BuildingId>,
    indices: HashMap<BuildingId, VertexIndex>,
    successors: Vec<Vec<VertexIndex>>,
    labels: HashMap<(VertexIndex, VertexIndex), VecDeque<RequestIndex>>,
    requests: Vec<MoveRequest>,
    edge_count: usize,
}

impl SwapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for a validated request set
    ///
    /// Vertices are seeded in [`RequestSet::buildings`] order, which decides
    /// the order in which detection picks its roots.
    pub fn from_requests(requests: &RequestSet) -> Self {
        let mut graph = Self::new();
        for building in requests.buildings() {
            graph.add_vertex(building);
        }
        for request in requests.requests() {
            graph.add_edge(request.employee.clone(), request.from, request.to);
        }
        graph
    }

    /// Register a building, returning its existing index if already present
    pub fn add_vertex(&mut self, building: BuildingId) -> VertexIndex {
        if let Some(&index) = self.indices.get(&building) {
            return index;
        }
        let index = self.buildings.len();
        self.buildings.push(building);
        self.successors.push(Vec::new());
        self.indices.insert(building, index);
        index
    }

    /// Add one employee-labelled request edge
    ///
    /// Parallel edges between the same buildings are kept in arrival order.
    pub fn add_edge(&mut self, employee: EmployeeId, from: BuildingId, to: BuildingId) {
        let source = self.add_vertex(from);
        let destination = self.add_vertex(to);

        let request = self.requests.len();
        self.requests.push(MoveRequest { employee, from, to });

        self.successors[source].push(destination);
        self.labels
            .entry((source, destination))
            .or_default()
            .push_back(request);
        self.edge_count += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.buildings.len()
    }

    /// Number of requests not yet consumed by a swap group
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn building(&self, vertex: VertexIndex) -> Option<BuildingId> {
        self.buildings.get(vertex).copied()
    }

    pub fn vertex_of(&self, building: BuildingId) -> Option<VertexIndex> {
        self.indices.get(&building).copied()
    }

    /// Run one depth-first detection pass
    ///
    /// Returns the ancestor path of the first back edge found, walking roots
    /// in vertex order and successors in arrival order: the vertices of the
    /// current descent followed by the gray vertex the back edge reaches.
    /// Returns `None` once the remaining graph is acyclic.
    pub fn detect_cycle(&self) -> Option<Vec<VertexIndex>> {
        let mut color = vec![Color::White; self.buildings.len()];
        // (vertex, next successor to try)
        let mut stack: Vec<(VertexIndex, usize)> = Vec::new();

        for root in 0..self.buildings.len() {
            if color[root] != Color::White {
                continue;
            }
            color[root] = Color::Gray;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (vertex, cursor) = *frame;
                let Some(&next) = self.successors[vertex].get(cursor) else {
                    color[vertex] = Color::Black;
                    stack.pop();
                    continue;
                };
                frame.1 += 1;

                match color[next] {
                    Color::Gray => {
                        let mut path: Vec<VertexIndex> = stack.iter().map(|&(v, _)| v).collect();
                        path.push(next);
                        return Some(path);
                    }
                    Color::White => {
                        color[next] = Color::Gray;
                        stack.push((next, 0));
                    }
                    Color::Black => {}
                }
            }
        }

        None
    }

    /// Map a cycle's consecutive vertex pairs to the oldest request on each
    pub fn materialize_swap_group(&self, cycle: &[VertexIndex]) -> Result<SwapGroup, SwapError> {
        let moves = cycle
            .windows(2)
            .map(|pair| {
                let request = self.front_request(pair[0], pair[1])?;
                Ok(self.requests[request].clone())
            })
            .collect::<Result<Vec<_>, SwapError>>()?;

        Ok(SwapGroup::new(moves))
    }

    /// Consume the oldest request on every edge of the cycle
    pub fn remove_cycle_edges(&mut self, cycle: &[VertexIndex]) -> Result<(), SwapError> {
        for pair in cycle.windows(2) {
            let (source, destination) = (pair[0], pair[1]);

            let position = self.successors[source]
                .iter()
                .position(|&v| v == destination)
                .ok_or_else(|| missing_edge(&self.buildings, source, destination))?;
            self.successors[source].remove(position);

            let labels = self
                .labels
                .get_mut(&(source, destination))
                .ok_or_else(|| missing_edge(&self.buildings, source, destination))?;
            let consumed = labels.pop_front();
            if labels.is_empty() {
                self.labels.remove(&(source, destination));
            }
            self.edge_count -= 1;

            if let Some(request) = consumed {
                trace!(
                    employee = %self.requests[request].employee,
                    from = %self.buildings[source],
                    to = %self.buildings[destination],
                    "consumed request"
                );
            }
        }
        Ok(())
    }

    /// Requests never consumed by a swap group, in arrival order
    pub fn remaining_requests(&self) -> Vec<MoveRequest> {
        let mut remaining: Vec<RequestIndex> = self.labels.values().flatten().copied().collect();
        remaining.sort_unstable();
        remaining
            .into_iter()
            .map(|request| self.requests[request].clone())
            .collect()
    }

    fn front_request(
        &self,
        source: VertexIndex,
        destination: VertexIndex,
    ) -> Result<RequestIndex, SwapError> {
        self.labels
            .get(&(source, destination))
            .and_then(|labels| labels.front().copied())
            .ok_or_else(|| missing_edge(&self.buildings, source, destination))
    }
}

/// Isolate the closed walk at the end of an ancestor path
///
/// The segment starts at the first occurrence of the path's final vertex, so
/// its first and last elements are the same building.
pub fn cyclic_segment(path: &[VertexIndex]) -> Option<&[VertexIndex]> {
    let last = path.last()?;
    let start = path.iter().position(|v| v == last)?;
    let segment = &path[start..];
    (segment.len() > 1).then_some(segment)
}

fn missing_edge(buildings: &[BuildingId], source: VertexIndex, destination: VertexIndex) -> SwapError {
    let name = |v: VertexIndex| {
        buildings
            .get(v)
            .map_or_else(|| format!("#{v}"), BuildingId::to_string)
    };
    SwapError::GraphError {
        message: format!(
            "no unconsumed request from building {} to building {}",
            name(source),
            name(destination)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(edges: &[(&str, u64, u64)]) -> SwapGraph {
        let mut graph = SwapGraph::new();
        for &(employee, from, to) in edges {
            graph.add_edge(
                EmployeeId::new(employee),
                BuildingId::new(from),
                BuildingId::new(to),
            );
        }
        graph
    }

    fn buildings_of(graph: &SwapGraph, path: &[VertexIndex]) -> Vec<u64> {
        path.iter()
            .map(|&v| graph.building(v).unwrap().get())
            .collect()
    }

    #[test]
    fn test_add_edge_keeps_parallel_edges() {
        let graph = graph_of(&[("E1", 1, 2), ("E2", 1, 2), ("E3", 2, 1)]);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 3);
        let one = graph.vertex_of(BuildingId::new(1)).unwrap();
        assert_eq!(graph.successors[one].len(), 2);
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = SwapGraph::new();
        let first = graph.add_vertex(BuildingId::new(7));
        let second = graph.add_vertex(BuildingId::new(7));
        assert_eq!(first, second);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_detect_cycle_none_when_acyclic() {
        let graph = graph_of(&[("E1", 1, 2), ("E2", 2, 3), ("E3", 1, 3)]);
        assert!(graph.detect_cycle().is_none());
    }

    #[test]
    fn test_detect_cycle_path_ends_with_back_edge_target() {
        let graph = graph_of(&[("E1", 1, 2), ("E2", 2, 3), ("E3", 3, 2)]);
        let path = graph.detect_cycle().unwrap();

        assert_eq!(buildings_of(&graph, &path), vec![1, 2, 3, 2]);
        let cycle = cyclic_segment(&path).unwrap();
        assert_eq!(buildings_of(&graph, cycle), vec![2, 3, 2]);
    }

    #[test]
    fn test_detect_cycle_skips_explored_branches() {
        // 1 -> 3 is a dead end explored before 1 -> 2 -> 1 closes
        let graph = graph_of(&[("E1", 1, 3), ("E2", 1, 2), ("E3", 2, 1)]);
        let path = graph.detect_cycle().unwrap();

        assert_eq!(buildings_of(&graph, &path), vec![1, 2, 1]);
    }

    #[test]
    fn test_detect_cycle_reports_first_in_adjacency_order() {
        let graph = graph_of(&[
            ("E1", 1, 2),
            ("E2", 1, 3),
            ("E3", 3, 1),
            ("E4", 2, 1),
        ]);
        let path = graph.detect_cycle().unwrap();

        assert_eq!(buildings_of(&graph, &path), vec![1, 2, 1]);
    }

    #[test]
    fn test_cyclic_segment_edge_cases() {
        assert_eq!(cyclic_segment(&[]), None);
        assert_eq!(cyclic_segment(&[4]), None);
        assert_eq!(cyclic_segment(&[0, 1, 2, 1]), Some(&[1, 2, 1][..]));
    }

    #[test]
    fn test_materialize_takes_oldest_request() {
        let graph = graph_of(&[("E1", 1, 2), ("E2", 2, 1), ("E3", 1, 2)]);
        let path = graph.detect_cycle().unwrap();
        let group = graph
            .materialize_swap_group(cyclic_segment(&path).unwrap())
            .unwrap();

        assert_eq!(group.employees(), vec![EmployeeId::new("E1"), EmployeeId::new("E2")]);
        assert!(group.is_closed());
    }

    #[test]
    fn test_remove_cycle_edges_consumes_one_request_per_pair() {
        let mut graph = graph_of(&[("E1", 1, 2), ("E2", 2, 1), ("E3", 1, 2)]);
        let path = graph.detect_cycle().unwrap();
        let cycle = cyclic_segment(&path).unwrap().to_vec();

        graph.remove_cycle_edges(&cycle).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.remaining_requests(), vec![MoveRequest::new("E3", 1, 2)]);
        assert!(graph.detect_cycle().is_none());
    }

    #[test]
    fn test_remove_missing_edge_is_graph_error() {
        let mut graph = graph_of(&[("E1", 1, 2)]);
        let err = graph.remove_cycle_edges(&[1, 0]).unwrap_err();
        assert!(matches!(err, SwapError::GraphError { .. }));
    }

    #[test]
    fn test_remaining_requests_in_arrival_order() {
        let graph = graph_of(&[("E1", 4, 5), ("E2", 1, 2), ("E3", 4, 6)]);
        let remaining: Vec<String> = graph
            .remaining_requests()
            .into_iter()
            .map(|r| r.employee.to_string())
            .collect();
        assert_eq!(remaining, vec!["E1", "E2", "E3"]);
    }
}
