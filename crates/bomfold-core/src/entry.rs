use serde::{Deserialize, Serialize};

/// An untyped manifest entry as read from a source, before validation.
///
/// Dependency scopes are still raw tokens here; [`crate::manifest::Manifest::load`]
/// is where they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RawEntry {
    Flag {
        key: String,
        value: bool,
    },
    Dependency {
        scope: String,
        coordinate: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        version: Option<String>,
    },
    Plugin {
        id: String,
    },
}

impl RawEntry {
    pub fn flag(key: impl Into<String>, value: bool) -> Self {
        Self::Flag {
            key: key.into(),
            value,
        }
    }

    /// A `platform-bom` declaration with its version.
    pub fn bom(coordinate: impl Into<String>, version: impl Into<String>) -> Self {
        Self::Dependency {
            scope: "platform-bom".to_string(),
            coordinate: coordinate.into(),
            version: Some(version.into()),
        }
    }

    /// A runtime dependency; `None` means the version is inherited from a BOM.
    pub fn dependency(coordinate: impl Into<String>, version: Option<&str>) -> Self {
        Self::Dependency {
            scope: "dependency".to_string(),
            coordinate: coordinate.into(),
            version: version.map(str::to_string),
        }
    }

    pub fn plugin(id: impl Into<String>) -> Self {
        Self::Plugin { id: id.into() }
    }
}
