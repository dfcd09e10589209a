use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::toggle::ToggleArg;

/// checktree - parent/child checkbox filter engine
#[derive(Parser, Debug)]
#[command(name = "checktree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of rendered trees
    #[arg(long, global = true)]
    pub json: bool,

    /// Use ASCII icons instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render every filter of a definition with nothing checked
    Show {
        /// Filter definition (TOML)
        definition: PathBuf,
    },

    /// Apply toggles in order and print the result
    Toggle {
        /// Filter definition (TOML)
        definition: PathBuf,

        /// Starting record as JSON, e.g. '{"animals":{"child":["LAB"]}}'
        #[arg(long)]
        initial: Option<String>,

        /// Toggle to apply: group:PARENT[/CHILD]=on|off, or group:VALUE=on|off
        /// for a standalone checkbox
        #[arg(short, long = "toggle", required = true)]
        toggles: Vec<ToggleArg>,
    },

    /// Load and validate a definition, reporting unknown keys
    Validate {
        /// Filter definition (TOML)
        definition: PathBuf,
    },
}
