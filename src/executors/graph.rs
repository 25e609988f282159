//! Graph command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{load_requests, write_output};
use crate::cli::GraphFormat;
use crate::config::GraphOptions;
use crate::detector::SwapDetector;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, SwapGraph, request_graph};
use crate::progress::ProgressReporter;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(options: Self::Config) -> Result<()> {
        eprintln!("{} Rendering request graph...\n", style("📊").cyan());

        let mut progress = ProgressReporter::for_terminal();
        let requests = load_requests(&options.input, progress.as_mut())
            .wrap_err("Failed to load move requests")?;

        let mut detector = SwapDetector::new();
        if options.highlight_groups {
            detector
                .detect_swaps(SwapGraph::from_requests(&requests), progress.as_ref())
                .wrap_err("Failed to resolve swap groups for highlighting")?;
        }

        let graph = request_graph(&requests);
        let renderer = GraphRenderer::new(options.highlight_groups);
        let mut rendered = Vec::new();
        match options.format {
            GraphFormat::Dot => {
                renderer.render_dot(&graph, detector.swap_groups(), &mut rendered)?
            }
            GraphFormat::Mermaid => {
                renderer.render_mermaid(&graph, detector.swap_groups(), &mut rendered)?
            }
        }

        let rendered = String::from_utf8(rendered)
            .into_diagnostic()
            .wrap_err("Rendered graph is not valid UTF-8")?;
        write_output(&rendered, options.output.as_deref())
    }
}
