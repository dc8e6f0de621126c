//! CLI command implementations.
//!
//! `watch` attaches an engine and streams change notifications to stdout
//! until interrupted; `dump` builds the catalog once and prints it as JSON.

use std::path::PathBuf;

use tokio::sync::broadcast::error::RecvError;

use crate::sync::{scan_once, SyncEngine, WatchConfig};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        match cli.command {
            Command::Watch {
                root,
                pattern,
                name_regex,
            } => watch(config(root, pattern, name_regex)).await,
            Command::Dump {
                root,
                pattern,
                name_regex,
            } => dump(config(root, pattern, name_regex)).await,
        }
    })
}

fn config(root: PathBuf, pattern: String, name_regex: Option<String>) -> WatchConfig {
    let mut config = WatchConfig::new(root, pattern);
    config.name_regex = name_regex;
    config
}

/// Attaches the engine and prints one line per change notification until
/// Ctrl-C.
async fn watch(config: WatchConfig) -> CliResult<()> {
    let engine = SyncEngine::attach(config)?;
    let mut changes = engine.subscribe();

    loop {
        tokio::select! {
            interrupted = tokio::signal::ctrl_c() => {
                interrupted?;
                break;
            }
            changed = changes.recv() => match changed {
                Ok(namespace) => {
                    let tables = engine.collection(Some(&namespace)).len();
                    println!("{namespace} ({tables} tables)");
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    }

    engine.shutdown().await;
    Ok(())
}

/// Scans once and prints the catalog as pretty JSON.
async fn dump(config: WatchConfig) -> CliResult<()> {
    let records = scan_once(&config).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
