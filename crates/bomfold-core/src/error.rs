use miette::Diagnostic;
use thiserror::Error;

/// Validation and parse failures of a dependency manifest.
///
/// Every variant is raised before a [`crate::manifest::Manifest`] exists;
/// no partially validated manifest is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ManifestError {
    /// Two entries of the same kind share a key (flag key, dependency
    /// coordinate or plugin id).
    #[error("Duplicate {kind} '{key}'")]
    #[diagnostic(
        code(bomfold::manifest::duplicate_key),
        help("Each {kind} may be declared only once; remove the repeated entry")
    )]
    DuplicateKey { kind: &'static str, key: String },

    /// A versionless dependency was declared before any platform BOM.
    #[error("Dependency '{coordinate}' has no version and no platform-bom precedes it")]
    #[diagnostic(
        code(bomfold::manifest::missing_bom),
        help("Declare a platform-bom above it or give the dependency an explicit version")
    )]
    MissingBom { coordinate: String },

    /// A dependency entry used a scope token that is not recognized.
    #[error("Unknown scope '{token}' for '{coordinate}'")]
    #[diagnostic(
        code(bomfold::manifest::unknown_scope),
        help("Use one of: dependency, runtime, implementation, platform-bom, platform")
    )]
    UnknownScope { token: String, coordinate: String },

    /// A version could not be determined for a declaration.
    #[error("No version can be resolved for '{coordinate}'")]
    #[diagnostic(code(bomfold::manifest::unresolved_version))]
    UnresolvedVersion { coordinate: String },

    /// A second platform BOM was declared while only one is allowed.
    #[error("platform-bom '{second}' conflicts with earlier platform-bom '{first}'")]
    #[diagnostic(
        code(bomfold::manifest::conflicting_bom),
        help("Set `bom-policy = \"nearest\"` under [resolve] to allow several BOMs")
    )]
    ConflictingBom { first: String, second: String },

    /// An entry is structurally empty or malformed.
    #[error("Invalid entry: {message}")]
    #[diagnostic(code(bomfold::manifest::invalid_entry))]
    InvalidEntry { message: String },

    /// The manifest source could not be parsed into entries.
    #[error("Syntax error on line {line}: {message}")]
    #[diagnostic(code(bomfold::manifest::syntax))]
    Syntax { line: usize, message: String },
}
