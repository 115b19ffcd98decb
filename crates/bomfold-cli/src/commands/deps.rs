//! Handler for `bomfold deps`.

use std::path::PathBuf;

use miette::Result;

use bomfold_core::config::GlobalConfig;

pub fn exec(config: &GlobalConfig, path: Option<PathBuf>) -> Result<()> {
    let manifest_path = super::manifest_path(config, path)?;
    bomfold_ops::ops_deps::deps(&manifest_path, config)
}
