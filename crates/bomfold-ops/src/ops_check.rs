//! Operation: validate a manifest without producing output.

use std::path::Path;

use bomfold_core::config::GlobalConfig;
use bomfold_util::errors::BomfoldResult;
use bomfold_util::progress::{status, status_warn};

use crate::ops_setup;

/// Load, validate and resolve the manifest, then print a summary.
pub fn check(manifest_path: &Path, config: &GlobalConfig) -> BomfoldResult<()> {
    let manifest = ops_setup::load_manifest(manifest_path, config)?;
    let resolved = manifest.resolve_versions()?;

    for bom in resolved.unused_boms() {
        status_warn("Unused", &format!("platform-bom {bom} supplies no versions"));
    }

    status(
        "Checked",
        &format!(
            "{}: {} flags, {} dependencies, {} platforms, {} plugins",
            ops_setup::display_name(manifest_path),
            resolved.flags().len(),
            resolved.dependencies().count(),
            resolved.platforms().count(),
            resolved.plugins().count(),
        ),
    );
    Ok(())
}
