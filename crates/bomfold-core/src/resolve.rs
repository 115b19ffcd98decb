//! BOM version resolution and serialization of the resolved manifest.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::dependency::DependencyScope;
use crate::error::ManifestError;
use crate::flag::ConfigFlag;
use crate::manifest::{Entry, Manifest};
use crate::plugin::PluginActivation;

/// Where a resolved version came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum VersionOrigin {
    /// Written on the declaration itself.
    Explicit,
    /// Inherited from the named platform BOM.
    Bom { coordinate: String },
}

/// A dependency declaration with a concrete version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub coordinate: String,
    pub version: String,
    pub scope: DependencyScope,
    pub origin: VersionOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResolvedEntry {
    Flag(ConfigFlag),
    Dependency(ResolvedDependency),
    Plugin(PluginActivation),
}

impl ResolvedEntry {
    /// Render this entry as one line of the text manifest format.
    pub fn to_line(&self) -> String {
        match self {
            Self::Flag(flag) => format!("{}: {}", flag.key, flag.value),
            Self::Dependency(dep) => format!(
                "{}: {}@{}",
                dep.scope.line_key(),
                dep.coordinate,
                dep.version
            ),
            Self::Plugin(plugin) => format!("plugin: {}", plugin.id),
        }
    }
}

/// A manifest in which every dependency carries a concrete version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedManifest {
    entries: Vec<ResolvedEntry>,
}

impl Manifest {
    /// Assign versions to versionless dependencies.
    ///
    /// Walking in declaration order, each platform BOM becomes the active
    /// one; a versionless runtime dependency takes the active BOM's version,
    /// while an explicit version is always kept as written.
    pub fn resolve_versions(&self) -> Result<ResolvedManifest, ManifestError> {
        let mut active_bom: Option<(&str, &str)> = None;
        let mut entries = Vec::with_capacity(self.entries().len());

        for entry in self.entries() {
            let resolved = match entry {
                Entry::Flag(flag) => ResolvedEntry::Flag(flag.clone()),
                Entry::Plugin(plugin) => ResolvedEntry::Plugin(plugin.clone()),
                Entry::Dependency(dep) => {
                    let (version, origin) = match (&dep.version, dep.scope) {
                        (Some(version), DependencyScope::PlatformBom) => {
                            active_bom = Some((dep.coordinate.as_str(), version.as_str()));
                            (version.clone(), VersionOrigin::Explicit)
                        }
                        (Some(version), DependencyScope::Runtime) => {
                            if let Some((bom, _)) = active_bom {
                                tracing::debug!(
                                    "{} keeps explicit version {version} over {bom}",
                                    dep.coordinate
                                );
                            }
                            (version.clone(), VersionOrigin::Explicit)
                        }
                        (None, DependencyScope::Runtime) => {
                            let Some((bom, bom_version)) = active_bom else {
                                return Err(ManifestError::UnresolvedVersion {
                                    coordinate: dep.coordinate.clone(),
                                });
                            };
                            tracing::debug!(
                                "{} inherits {bom_version} from {bom}",
                                dep.coordinate
                            );
                            (
                                bom_version.to_string(),
                                VersionOrigin::Bom {
                                    coordinate: bom.to_string(),
                                },
                            )
                        }
                        (None, DependencyScope::PlatformBom) => {
                            return Err(ManifestError::UnresolvedVersion {
                                coordinate: dep.coordinate.clone(),
                            });
                        }
                    };
                    ResolvedEntry::Dependency(ResolvedDependency {
                        coordinate: dep.coordinate.clone(),
                        version,
                        scope: dep.scope,
                        origin,
                    })
                }
            };
            entries.push(resolved);
        }

        Ok(ResolvedManifest { entries })
    }
}

impl ResolvedManifest {
    /// All entries in declaration order.
    pub fn entries(&self) -> &[ResolvedEntry] {
        &self.entries
    }

    /// Runtime dependencies in declaration order (platform BOMs excluded).
    pub fn dependencies(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.resolved_dependencies()
            .filter(|d| d.scope == DependencyScope::Runtime)
    }

    /// Platform BOMs in declaration order.
    pub fn platforms(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.resolved_dependencies()
            .filter(|d| d.scope == DependencyScope::PlatformBom)
    }

    pub fn flags(&self) -> BTreeMap<&str, bool> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                ResolvedEntry::Flag(f) => Some((f.key.as_str(), f.value)),
                _ => None,
            })
            .collect()
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags().get(key).copied()
    }

    pub fn plugins(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            ResolvedEntry::Plugin(p) => Some(p.id.as_str()),
            _ => None,
        })
    }

    /// Platform BOMs that no dependency inherited a version from.
    pub fn unused_boms(&self) -> Vec<&str> {
        let used: BTreeSet<&str> = self
            .dependencies()
            .filter_map(|d| match &d.origin {
                VersionOrigin::Bom { coordinate } => Some(coordinate.as_str()),
                VersionOrigin::Explicit => None,
            })
            .collect();
        self.platforms()
            .map(|b| b.coordinate.as_str())
            .filter(|c| !used.contains(c))
            .collect()
    }

    /// Emit one text-format line per entry, in declaration order.
    pub fn serialize(&self) -> Vec<String> {
        self.entries.iter().map(ResolvedEntry::to_line).collect()
    }

    /// Render the resolved manifest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn resolved_dependencies(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.entries.iter().filter_map(|e| match e {
            ResolvedEntry::Dependency(d) => Some(d),
            _ => None,
        })
    }
}
