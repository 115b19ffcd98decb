use serde::{Deserialize, Serialize};
use std::fmt;

/// How a dependency participates in the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyScope {
    /// A regular library linked into the application.
    Runtime,
    /// A version manifest that supplies versions to later declarations.
    PlatformBom,
}

impl DependencyScope {
    /// Parse a scope token as written in a manifest source.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "dependency" | "runtime" | "implementation" => Some(Self::Runtime),
            "platform-bom" | "platform" => Some(Self::PlatformBom),
            _ => None,
        }
    }

    /// The key used for this scope when writing the text format.
    pub fn line_key(self) -> &'static str {
        match self {
            Self::Runtime => "dependency",
            Self::PlatformBom => "platform-bom",
        }
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runtime => write!(f, "runtime"),
            Self::PlatformBom => write!(f, "platform-bom"),
        }
    }
}

/// A validated reference to an external package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyDeclaration {
    pub coordinate: String,
    /// `None` when the version is governed by a platform BOM.
    pub version: Option<String>,
    pub scope: DependencyScope,
}

impl DependencyDeclaration {
    pub fn is_bom(&self) -> bool {
        self.scope == DependencyScope::PlatformBom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_tokens() {
        assert_eq!(
            DependencyScope::from_token("implementation"),
            Some(DependencyScope::Runtime)
        );
        assert_eq!(
            DependencyScope::from_token("platform"),
            Some(DependencyScope::PlatformBom)
        );
        assert_eq!(DependencyScope::from_token("compileOnly"), None);
    }

    #[test]
    fn line_key_is_accepted_token() {
        for scope in [DependencyScope::Runtime, DependencyScope::PlatformBom] {
            assert_eq!(DependencyScope::from_token(scope.line_key()), Some(scope));
        }
    }
}
