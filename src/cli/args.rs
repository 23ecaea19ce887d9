//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Read options from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::skeletal::schema::{BoneType, Division, Region};

/// osteo - Query the skeletal reference store
#[derive(Parser, Debug)]
#[command(name = "osteo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read options from this config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one bone
    #[command(
        name = "show",
        long_about = "Show one bone with its classification, an explanation and its key facts.\n\n\
            The explanation tier runs from 1 (child) to 5 (clinician). Without --level \
            the tier configured under [display] is used.",
        after_help = "\
EXAMPLES:
    osteo show frontal
    osteo show scaphoid-left --level 5
    osteo show femur-right --json"
    )]
    Show {
        /// Bone id (kebab-case)
        id: String,

        /// Explanation tier, 1-5
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: Option<u8>,

        /// Print the full record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find a bone by name or Latin name
    #[command(
        name = "find",
        long_about = "Find a bone by its English or Latin name, ignoring case.\n\n\
            With --search, list every bone whose name or Latin name contains the query.",
        after_help = "\
EXAMPLES:
    osteo find \"frontal bone\"
    osteo find \"OS FRONTALE\"
    osteo find cuneiform --search"
    )]
    Find {
        /// Name to look up
        name: String,

        /// Substring match instead of exact lookup
        #[arg(long, short)]
        search: bool,
    },

    /// Look up a bone by FMA id
    Fma {
        /// FMA code, e.g. FMA:52734
        fma_id: String,
    },

    /// List bone summaries
    List {
        /// Only bones of this division
        #[arg(long)]
        division: Option<Division>,

        /// Only bones of this type
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<BoneType>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the region table, or the bones of one region
    #[command(
        name = "region",
        after_help = "\
EXAMPLES:
    osteo region
    osteo region upper-limb-hand"
    )]
    Region {
        /// Region id, e.g. lower-limb-foot
        region: Option<Region>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show bone counts by division, region and type
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a bone's related bones and joints
    Related {
        /// Bone id (kebab-case)
        id: String,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash
    osteo completion bash > ~/.local/share/bash-completion/completions/osteo

    # Zsh
    osteo completion zsh > ~/.zfunc/_osteo

    # Fish
    osteo completion fish > ~/.config/fish/completions/osteo.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
