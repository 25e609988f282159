use std::collections::HashMap;
use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::core::{BuildingId, EmployeeId, MoveRequest, RequestSet, SwapGroup};
use crate::error::SwapError;

mod colors {
    pub const NODE_FILL: &str = "#E3F2FD";
    pub const NODE_STROKE: &str = "#1976D2";
    pub const SWAP_NODE_FILL: &str = "#FFF3E0";
    pub const SWAP_NODE_STROKE: &str = "#F57C00";
    pub const UNMATCHED_EDGE: &str = "#90A4AE";
    /// Cycled through by swap group index
    pub const GROUP_EDGES: &[&str] = &["#FF6500", "#2E7D32", "#6A1B9A", "#C62828", "#00838F"];
}

macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(SwapError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(SwapError::from)
    };
}

/// Request graph as rendered: buildings as nodes, one edge per request
pub type RequestGraph = DiGraph<BuildingId, MoveRequest>;

/// Build the petgraph view of a request set, nodes in first-appearance order
pub fn request_graph(requests: &RequestSet) -> RequestGraph {
    let mut graph = DiGraph::new();
    let mut nodes: HashMap<BuildingId, NodeIndex> = HashMap::new();
    for building in requests.buildings() {
        nodes.insert(building, graph.add_node(building));
    }
    for request in requests.requests() {
        graph.add_edge(nodes[&request.from], nodes[&request.to], request.clone());
    }
    graph
}

pub struct GraphRenderer {
    highlight_groups: bool,
}

impl GraphRenderer {
    pub fn new(highlight_groups: bool) -> Self {
        Self { highlight_groups }
    }

    fn group_lookup<'a>(&self, groups: &'a [SwapGroup]) -> HashMap<&'a EmployeeId, usize> {
        if !self.highlight_groups {
            return HashMap::new();
        }
        groups
            .iter()
            .enumerate()
            .flat_map(|(i, group)| group.moves().iter().map(move |m| (&m.employee, i)))
            .collect()
    }

    pub fn render_dot(
        &self,
        graph: &RequestGraph,
        groups: &[SwapGroup],
        output: &mut dyn Write,
    ) -> Result<()> {
        let lookup = self.group_lookup(groups);

        writeln_out!(output, "digraph requests {{")?;
        writeln_out!(output, "  rankdir=LR;")?;
        writeln_out!(
            output,
            "  node [shape=box, style=\"rounded,filled\", fillcolor=\"{}\", color=\"{}\"];",
            colors::NODE_FILL,
            colors::NODE_STROKE
        )?;

        for node in graph.node_indices() {
            let building = graph[node];
            let in_swap = graph
                .edges(node)
                .any(|edge| lookup.contains_key(&edge.weight().employee));
            if in_swap {
                writeln_out!(
                    output,
                    "  b{building} [label=\"Building {building}\", fillcolor=\"{}\", color=\"{}\"];",
                    colors::SWAP_NODE_FILL,
                    colors::SWAP_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "  b{building} [label=\"Building {building}\"];")?;
            }
        }

        for edge in graph.edge_references() {
            let request = edge.weight();
            let from = graph[edge.source()];
            let to = graph[edge.target()];
            match lookup.get(&request.employee) {
                Some(&group) => writeln_out!(
                    output,
                    "  b{from} -> b{to} [label=\"{} (group {})\", color=\"{}\", penwidth=2];",
                    dot_escape(request.employee.as_str()),
                    group + 1,
                    group_color(group)
                )?,
                None => writeln_out!(
                    output,
                    "  b{from} -> b{to} [label=\"{}\", color=\"{}\", style=dashed];",
                    dot_escape(request.employee.as_str()),
                    colors::UNMATCHED_EDGE
                )?,
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &RequestGraph,
        groups: &[SwapGroup],
        output: &mut dyn Write,
    ) -> Result<()> {
        let lookup = self.group_lookup(groups);

        writeln_out!(output, "graph LR")?;
        for node in graph.node_indices() {
            let building = graph[node];
            writeln_out!(output, "    b{building}[\"Building {building}\"]")?;
        }

        // Mermaid addresses link styles by declaration order
        let mut link_styles = Vec::new();
        for (link, edge) in graph.edge_references().enumerate() {
            let request = edge.weight();
            let from = graph[edge.source()];
            let to = graph[edge.target()];
            let label = mermaid_label(request.employee.as_str());
            match lookup.get(&request.employee) {
                Some(&group) => {
                    writeln_out!(output, "    b{from} ==>|{label}| b{to}")?;
                    link_styles.push((link, group_color(group), 3));
                }
                None => {
                    writeln_out!(output, "    b{from} -.->|{label}| b{to}")?;
                    link_styles.push((link, colors::UNMATCHED_EDGE, 1));
                }
            }
        }

        if self.highlight_groups && !groups.is_empty() {
            writeln_out!(
                output,
                "    classDef swap fill:{},stroke:{},stroke-width:2px",
                colors::SWAP_NODE_FILL,
                colors::SWAP_NODE_STROKE
            )?;
            let mut swap_nodes: Vec<BuildingId> = groups
                .iter()
                .flat_map(|group| group.moves().iter().map(|m| m.from))
                .collect();
            swap_nodes.sort();
            swap_nodes.dedup();
            let names: Vec<String> = swap_nodes.iter().map(|b| format!("b{b}")).collect();
            writeln_out!(output, "    class {} swap", names.join(","))?;
        }

        for (link, color, width) in link_styles {
            writeln_out!(
                output,
                "    linkStyle {link} stroke:{color},stroke-width:{width}px"
            )?;
        }

        Ok(())
    }
}

/// Escape text for a double-quoted DOT string
fn dot_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Quoted Mermaid link text, with delimiters replaced by entity codes
fn mermaid_label(text: &str) -> String {
    let mut label = String::with_capacity(text.len() + 2);
    label.push('"');
    for c in text.chars() {
        match c {
            '#' => label.push_str("#35;"),
            '"' => label.push_str("#quot;"),
            '|' => label.push_str("#124;"),
            '<' => label.push_str("#lt;"),
            '>' => label.push_str("#gt;"),
            '\n' => label.push(' '),
            _ => label.push(c),
        }
    }
    label.push('"');
    label
}

fn group_color(group: usize) -> &'static str {
    colors::GROUP_EDGES[group % colors::GROUP_EDGES.len()]
}
