//! CLI argument definitions using clap
//!
//! Commands:
//! - dbdict watch --root <dir> --pattern <glob> [--name-regex <re>]
//! - dbdict dump  --root <dir> --pattern <glob> [--name-regex <re>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dbdict - a live, queryable catalog of database schema definitions
#[derive(Parser, Debug)]
#[command(name = "dbdict")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Watch schema-definition files and stream change notifications
    Watch {
        /// Directory to observe recursively
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// File-name glob, relative to the root
        #[arg(long, default_value = "**/*.def")]
        pattern: String,

        /// Namespace-naming expression; capture group 1 is the namespace
        #[arg(long)]
        name_regex: Option<String>,
    },

    /// Load all matching files once and print the catalog as JSON
    Dump {
        /// Directory to scan recursively
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// File-name glob, relative to the root
        #[arg(long, default_value = "**/*.def")]
        pattern: String,

        /// Namespace-naming expression; capture group 1 is the namespace
        #[arg(long)]
        name_regex: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
