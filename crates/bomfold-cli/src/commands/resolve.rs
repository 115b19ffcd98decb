//! Handler for `bomfold resolve`.

use std::path::PathBuf;

use miette::Result;

use bomfold_core::config::{GlobalConfig, OutputFormat};
use bomfold_ops::ops_resolve::{self, ResolveOptions};
use bomfold_util::errors::BomfoldError;

pub fn exec(
    config: &GlobalConfig,
    path: Option<PathBuf>,
    format: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let manifest_path = super::manifest_path(config, path)?;

    let format = match format {
        Some(name) => OutputFormat::from_name(name).ok_or_else(|| BomfoldError::Generic {
            message: format!("Unknown output format '{name}' (expected text or json)"),
        })?,
        None => config.output.format,
    };

    let opts = ResolveOptions { format, output };
    ops_resolve::resolve(&manifest_path, config, &opts)
}
