//! CLI module for dbdict
//!
//! Provides the command-line interface:
//! - watch: attach an engine and stream change notifications
//! - dump: one-shot scan, print the catalog as JSON

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
