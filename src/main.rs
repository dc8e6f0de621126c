//! dbdict CLI entry point
//!
//! A minimal entrypoint that parses arguments and dispatches via cli::run,
//! printing errors to stderr and exiting non-zero on failure. All logic is
//! delegated to the CLI module.

use dbdict::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
