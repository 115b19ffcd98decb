//! Operation: list resolved runtime dependencies with their version origin.

use std::path::Path;

use bomfold_core::config::GlobalConfig;
use bomfold_core::resolve::{ResolvedDependency, VersionOrigin};
use bomfold_util::errors::BomfoldResult;
use bomfold_util::progress::status_info;

use crate::ops_setup;

/// Print one line per runtime dependency, in declaration order.
pub fn deps(manifest_path: &Path, config: &GlobalConfig) -> BomfoldResult<()> {
    let manifest = ops_setup::load_manifest(manifest_path, config)?;
    let resolved = manifest.resolve_versions()?;

    for bom in resolved.platforms() {
        status_info("Platform", &format!("{}@{}", bom.coordinate, bom.version));
    }

    let mut any = false;
    for dep in resolved.dependencies() {
        println!("{}", format_dependency(dep));
        any = true;
    }
    if !any {
        println!("No dependencies.");
    }
    Ok(())
}

/// `coordinate version (origin)`.
pub fn format_dependency(dep: &ResolvedDependency) -> String {
    let origin = match &dep.origin {
        VersionOrigin::Explicit => "explicit".to_string(),
        VersionOrigin::Bom { coordinate } => format!("from {coordinate}"),
    };
    format!("{} {} ({origin})", dep.coordinate, dep.version)
}
