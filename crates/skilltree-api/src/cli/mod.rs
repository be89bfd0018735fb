//! CLI command definitions for the `skilltree` binary.
//!
//! Uses clap derive macros for argument parsing. Every command reads the
//! same graph, built once in `AppState::init`.

pub mod check;
pub mod query;
pub mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Explore and rank a hierarchical skill taxonomy.
#[derive(Parser)]
#[command(name = "skilltree", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of report lines.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logging on stderr (-v for verbose, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Skills document (JSON, YAML or TOML). Overrides `skills_file` in settings.
    #[arg(long, global = true, env = "SKILLTREE_SKILLS")]
    pub skills: Option<PathBuf>,

    /// Settings file. Defaults to `$SKILLTREE_HOME/skilltree.toml`.
    #[arg(long, global = true, env = "SKILLTREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the direct children of a skill.
    Children {
        /// Skill key.
        name: String,
    },

    /// Print the full tree below a skill.
    Tree {
        /// Skill key to start from.
        root: String,
    },

    /// Rank every skill by love level, highest first.
    Rank {
        /// Only show the top N skills.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single skill and how it is classified.
    Show {
        /// Skill key.
        name: String,
    },

    /// Validate the skills document: build the graph and walk every node.
    Check,

    /// Print the configured children, tree and ranking sections.
    Report,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
