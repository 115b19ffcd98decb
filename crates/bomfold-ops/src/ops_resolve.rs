//! Operation: resolve inherited versions and emit the manifest.

use std::path::{Path, PathBuf};

use bomfold_core::config::{GlobalConfig, OutputFormat};
use bomfold_core::resolve::ResolvedManifest;
use bomfold_util::errors::{BomfoldError, BomfoldResult};
use bomfold_util::progress::status;

use crate::ops_setup;

/// Options for `bomfold resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    pub format: OutputFormat,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
}

/// Resolve the manifest and write it in the requested format.
pub fn resolve(
    manifest_path: &Path,
    config: &GlobalConfig,
    opts: &ResolveOptions,
) -> BomfoldResult<()> {
    let manifest = ops_setup::load_manifest(manifest_path, config)?;
    let resolved = manifest.resolve_versions()?;
    let rendered = render(&resolved, opts.format)?;

    match &opts.output {
        Some(out) => {
            bomfold_util::fs::write_with_parents(out, &rendered).map_err(BomfoldError::Io)?;
            status(
                "Resolved",
                &format!(
                    "{} -> {}",
                    ops_setup::display_name(manifest_path),
                    out.display()
                ),
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Render a resolved manifest; text output ends with a newline.
pub fn render(
    resolved: &ResolvedManifest,
    format: OutputFormat,
) -> BomfoldResult<String> {
    match format {
        OutputFormat::Text => {
            let mut out = resolved.serialize().join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = resolved.to_json().map_err(|e| BomfoldError::Output {
                message: format!("Failed to render JSON: {e}"),
            })?;
            out.push('\n');
            Ok(out)
        }
    }
}
