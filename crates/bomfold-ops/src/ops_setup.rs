//! Configuration and manifest discovery shared by every operation.

use std::path::{Path, PathBuf};

use bomfold_core::config::GlobalConfig;
use bomfold_core::manifest::Manifest;
use bomfold_core::source;
use bomfold_util::errors::{BomfoldError, BomfoldResult};
use bomfold_util::fs::find_ancestor_with;

/// Load the global config.
///
/// An explicit path must exist and parse. The default `~/.bomfold/config.toml`
/// is best-effort: failures fall back to defaults with a warning.
pub fn load_config(explicit: Option<&Path>) -> BomfoldResult<GlobalConfig> {
    if let Some(path) = explicit {
        return GlobalConfig::load_from(path);
    }
    match GlobalConfig::load() {
        Ok(c) => Ok(c),
        Err(e) => {
            tracing::warn!("Failed to load global config, using defaults: {e}");
            Ok(GlobalConfig::default())
        }
    }
}

/// Find the manifest to operate on.
///
/// An explicit path is taken relative to `cwd`. Otherwise the config's
/// `manifest.default-file` is searched for in `cwd` and its ancestors.
pub fn locate_manifest(
    cwd: &Path,
    explicit: Option<&Path>,
    config: &GlobalConfig,
) -> BomfoldResult<PathBuf> {
    if let Some(path) = explicit {
        let path = cwd.join(path);
        if !path.is_file() {
            return Err(BomfoldError::Manifest {
                message: format!("Could not find {}", path.display()),
            }
            .into());
        }
        return Ok(path);
    }

    let name = &config.manifest.default_file;
    let dir = find_ancestor_with(cwd, name).ok_or_else(|| BomfoldError::Manifest {
        message: format!(
            "Could not find {name} in {} or any parent directory",
            cwd.display()
        ),
    })?;
    Ok(dir.join(name))
}

/// Read and validate the manifest at `path` using the config's load options.
pub fn load_manifest(path: &Path, config: &GlobalConfig) -> BomfoldResult<Manifest> {
    let entries = source::read_entries(path, &config.manifest.env_file)?;
    let manifest = Manifest::load_with(entries, &config.load_options())?;
    Ok(manifest)
}

/// The manifest's file name for status lines.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn locate_default_manifest_in_ancestor() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("deps.manifest"), "").unwrap();
        let nested = tmp.path().join("app");
        std::fs::create_dir_all(&nested).unwrap();

        let found = locate_manifest(&nested, None, &GlobalConfig::default()).unwrap();
        assert_eq!(found, tmp.path().join("deps.manifest"));
    }

    #[test]
    fn locate_missing_default_manifest_fails() {
        let tmp = TempDir::new().unwrap();
        let err = locate_manifest(tmp.path(), None, &GlobalConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Could not find deps.manifest"));
    }

    #[test]
    fn locate_explicit_manifest_relative_to_cwd() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("other.toml"), "").unwrap();
        let found = locate_manifest(
            tmp.path(),
            Some(Path::new("other.toml")),
            &GlobalConfig::default(),
        )
        .unwrap();
        assert_eq!(found, tmp.path().join("other.toml"));
    }
}
