use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "building-swap",
    about = "🔁 Find groups of employees who can swap building assignments",
    long_about = "building-swap reads employee move requests, models them as a directed graph \
                  between buildings and extracts every closed chain of requests. Each chain is a \
                  swap group: its moves can be carried out together without leaving any \
                  building short of or over its allocation.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "building_swap=trace")
    #[arg(
        long,
        global = true,
        default_value = crate::constants::logging::DEFAULT_LEVEL,
        env = "BUILDING_SWAP_LOG"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every swap group in a request file
    ///
    /// Repeatedly extracts a cycle of requests from the building graph until
    /// none is left. Requests that are not part of any cycle are listed as
    /// unmatched.
    #[command(
        long_about = "Load move requests, validate them and resolve them into swap groups. Each \
                      group is reported in cycle order: every employee moves into the building \
                      the next employee leaves. When several employees request the same move, \
                      the earliest request is matched first."
    )]
    Resolve {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Maximum number of swap groups to display (shows all by default)
        #[arg(long, env = "BUILDING_SWAP_MAX_GROUPS")]
        max_groups: Option<usize>,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "BUILDING_SWAP_OUTPUT")]
        output: Option<PathBuf>,

        /// Exit with error code if some requests cannot be matched
        #[arg(long, env = "BUILDING_SWAP_FAIL_ON_UNMATCHED")]
        fail_on_unmatched: bool,
    },

    /// Render the request graph
    ///
    /// Draws one edge per request between buildings and highlights the
    /// requests that end up in a swap group.
    Graph {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "BUILDING_SWAP_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "BUILDING_SWAP_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight swap groups in the graph
        #[arg(
            long,
            default_value = "true",
            action = clap::ArgAction::Set,
            env = "BUILDING_SWAP_HIGHLIGHT_GROUPS"
        )]
        highlight_groups: bool,
    },

    /// Check a request file without resolving it
    Validate {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Mermaid,
}
