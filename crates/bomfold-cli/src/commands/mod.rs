//! Command dispatch and handler modules.

mod check;
mod deps;
mod resolve;

use std::path::PathBuf;

use miette::Result;

use bomfold_core::config::GlobalConfig;
use bomfold_util::errors::BomfoldError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = bomfold_ops::ops_setup::load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Check { path } => check::exec(&config, path),
        Command::Resolve {
            path,
            format,
            output,
        } => resolve::exec(&config, path, format.as_deref(), output),
        Command::Deps { path } => deps::exec(&config, path),
    }
}

/// Locate the manifest relative to the current directory.
fn manifest_path(config: &GlobalConfig, path: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(BomfoldError::Io)?;
    let manifest_path = bomfold_ops::ops_setup::locate_manifest(&cwd, path.as_deref(), config)?;
    tracing::debug!("Using manifest {}", manifest_path.display());
    Ok(manifest_path)
}
