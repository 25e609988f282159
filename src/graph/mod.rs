//! # Swap Graph and Rendering Module
//!
//! This module holds the directed multigraph that swap resolution runs on,
//! and renderers for visualizing the request graph.
//!
//! ## Components
//!
//! ### Resolution graph
//! - **SwapGraph**: buildings as vertices, one employee-labelled edge per
//!   request; detects cycles, materializes swap groups and removes consumed
//!   edges
//! - **cyclic_segment**: isolates the closed walk at the end of an ancestor
//!   path
//!
//! ### Rendering
//! - **GraphRenderer**: renders the request graph as DOT or Mermaid,
//!   highlighting requests that belong to a swap group
//!
//! ## Example
//!
//! ```
//! use building_swap::core::{BuildingId, EmployeeId};
//! use building_swap::graph::{SwapGraph, cyclic_segment};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = SwapGraph::new();
//! graph.add_edge(EmployeeId::new("E1"), BuildingId::new(1), BuildingId::new(2));
//! graph.add_edge(EmployeeId::new("E2"), BuildingId::new(2), BuildingId::new(1));
//!
//! let path = graph.detect_cycle().expect("1 -> 2 -> 1 is a cycle");
//! let cycle = cyclic_segment(&path).expect("path closes on itself").to_vec();
//!
//! let group = graph.materialize_swap_group(&cycle)?;
//! assert_eq!(group.employees(), vec![EmployeeId::new("E1"), EmployeeId::new("E2")]);
//!
//! graph.remove_cycle_edges(&cycle)?;
//! assert_eq!(graph.edge_count(), 0);
//! # Ok(())
//! # }
//! ```

mod renderer;
mod swap_graph;

pub use renderer::{GraphRenderer, RequestGraph, request_graph};
pub use swap_graph::{SwapGraph, VertexIndex, cyclic_segment};
