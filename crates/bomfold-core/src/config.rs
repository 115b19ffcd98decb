use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use bomfold_util::errors::BomfoldError;

use crate::manifest::{BomPolicy, LoadOptions};

/// Global user configuration loaded from `~/.bomfold/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Manifest discovery settings from `[manifest]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_file", rename = "default-file")]
    pub default_file: String,
    #[serde(default = "default_env_file", rename = "env-file")]
    pub env_file: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            default_file: default_manifest_file(),
            env_file: default_env_file(),
        }
    }
}

fn default_manifest_file() -> String {
    "deps.manifest".to_string()
}

fn default_env_file() -> String {
    ".bomfold.env".to_string()
}

/// Resolution settings from `[resolve]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default, rename = "bom-policy")]
    pub bom_policy: BomPolicy,
}

/// Output settings from `[output]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering of a resolved manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per entry.
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl GlobalConfig {
    /// Load the global configuration from `~/.bomfold/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        let path = Self::default_path();
        if path.is_file() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BomfoldError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content)
    }

    /// Parse configuration TOML.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            BomfoldError::Config {
                message: format!("Failed to parse config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            bom_policy: self.resolve.bom_policy,
        }
    }
}

/// Returns the path to the bomfold data directory (`~/.bomfold/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".bomfold")
}
