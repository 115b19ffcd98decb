use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::dependency::{DependencyDeclaration, DependencyScope};
use crate::entry::RawEntry;
use crate::error::ManifestError;
use crate::flag::ConfigFlag;
use crate::plugin::PluginActivation;

/// How many platform BOMs a manifest may declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BomPolicy {
    /// Any number of BOMs; a versionless dependency inherits from the
    /// closest BOM declared above it.
    #[default]
    Nearest,
    /// At most one BOM per manifest.
    Single,
}

/// Knobs for [`Manifest::load_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub bom_policy: BomPolicy,
}

/// A validated manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Entry {
    Flag(ConfigFlag),
    Dependency(DependencyDeclaration),
    Plugin(PluginActivation),
}

/// A validated, immutable dependency manifest in declaration order.
///
/// The only way to obtain one is [`Manifest::load`] / [`Manifest::load_with`],
/// so every instance satisfies:
/// - flag keys, plugin ids and dependency coordinates are unique;
/// - every platform BOM carries a version;
/// - every versionless dependency is preceded by at least one BOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    entries: Vec<Entry>,
}

impl Manifest {
    /// Validate raw entries with the default [`LoadOptions`].
    pub fn load(entries: impl IntoIterator<Item = RawEntry>) -> Result<Self, ManifestError> {
        Self::load_with(entries, &LoadOptions::default())
    }

    /// Validate raw entries into a manifest, failing on the first invalid one.
    pub fn load_with(
        entries: impl IntoIterator<Item = RawEntry>,
        options: &LoadOptions,
    ) -> Result<Self, ManifestError> {
        let mut flag_keys = BTreeSet::new();
        let mut plugin_ids = BTreeSet::new();
        let mut coordinates = BTreeSet::new();
        let mut first_bom: Option<String> = None;
        let mut validated = Vec::new();

        for raw in entries {
            let entry = match raw {
                RawEntry::Flag { key, value } => {
                    require_flag_key(&key)?;
                    if !flag_keys.insert(key.clone()) {
                        return Err(ManifestError::DuplicateKey { kind: "flag", key });
                    }
                    Entry::Flag(ConfigFlag { key, value })
                }
                RawEntry::Plugin { id } => {
                    require_token("plugin id", &id, &[])?;
                    if !plugin_ids.insert(id.clone()) {
                        return Err(ManifestError::DuplicateKey {
                            kind: "plugin",
                            key: id,
                        });
                    }
                    Entry::Plugin(PluginActivation { id })
                }
                RawEntry::Dependency {
                    scope,
                    coordinate,
                    version,
                } => {
                    require_token("dependency coordinate", &coordinate, &['@'])?;
                    let Some(parsed) = DependencyScope::from_token(&scope) else {
                        return Err(ManifestError::UnknownScope {
                            token: scope,
                            coordinate,
                        });
                    };
                    if let Some(version) = &version {
                        require_token(
                            &format!("version of '{coordinate}'"),
                            version,
                            &['@', '(', ')'],
                        )?;
                    }
                    if !coordinates.insert(coordinate.clone()) {
                        return Err(ManifestError::DuplicateKey {
                            kind: "dependency",
                            key: coordinate,
                        });
                    }

                    match parsed {
                        DependencyScope::PlatformBom => {
                            if version.is_none() {
                                return Err(ManifestError::UnresolvedVersion { coordinate });
                            }
                            if let Some(first) = &first_bom {
                                if options.bom_policy == BomPolicy::Single {
                                    return Err(ManifestError::ConflictingBom {
                                        first: first.clone(),
                                        second: coordinate,
                                    });
                                }
                            } else {
                                first_bom = Some(coordinate.clone());
                            }
                        }
                        DependencyScope::Runtime => {
                            if version.is_none() && first_bom.is_none() {
                                return Err(ManifestError::MissingBom { coordinate });
                            }
                        }
                    }

                    Entry::Dependency(DependencyDeclaration {
                        coordinate,
                        version,
                        scope: parsed,
                    })
                }
            };
            validated.push(entry);
        }

        tracing::debug!(
            "Loaded manifest: {} flags, {} dependencies, {} plugins",
            flag_keys.len(),
            coordinates.len(),
            plugin_ids.len()
        );

        Ok(Self { entries: validated })
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn flags(&self) -> impl Iterator<Item = &ConfigFlag> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Flag(f) => Some(f),
            _ => None,
        })
    }

    /// Dependency declarations of both scopes, BOMs included.
    pub fn dependencies(&self) -> impl Iterator<Item = &DependencyDeclaration> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Dependency(d) => Some(d),
            _ => None,
        })
    }

    pub fn plugins(&self) -> impl Iterator<Item = &PluginActivation> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Plugin(p) => Some(p),
            _ => None,
        })
    }
}

/// Flag keys must survive a trip through the text format, where
/// `plugin` and scope tokens introduce other entry kinds.
fn require_flag_key(key: &str) -> Result<(), ManifestError> {
    require_token("flag key", key, &[':'])?;
    if key == "plugin" || DependencyScope::from_token(key).is_some() {
        return Err(ManifestError::InvalidEntry {
            message: format!("flag key '{key}' is reserved for dependency and plugin entries"),
        });
    }
    if key.starts_with('#') || key.starts_with("//") {
        return Err(ManifestError::InvalidEntry {
            message: format!("flag key '{key}' would be read as a comment"),
        });
    }
    Ok(())
}

/// Names and versions are written verbatim into `key: value` lines, so they
/// must be non-empty, already trimmed and free of line breaks and `forbidden`.
fn require_token(what: &str, value: &str, forbidden: &[char]) -> Result<(), ManifestError> {
    let invalid =
        |message: String| -> Result<(), ManifestError> { Err(ManifestError::InvalidEntry { message }) };
    if value.trim().is_empty() {
        return invalid(format!("{what} must not be empty"));
    }
    if value.trim() != value {
        return invalid(format!("{what} '{value}' has leading or trailing whitespace"));
    }
    if let Some(c) = value
        .chars()
        .find(|&c| matches!(c, '\n' | '\r') || forbidden.contains(&c))
    {
        return invalid(format!(
            "{what} '{}' must not contain '{}'",
            value.escape_debug(),
            c.escape_debug()
        ));
    }
    Ok(())
}
