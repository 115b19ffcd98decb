use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for tool-level bomfold failures.
///
/// Validation failures of the manifest model itself live in
/// `bomfold_core::error::ManifestError`; this type covers everything around it.
#[derive(Debug, Error, Diagnostic)]
pub enum BomfoldError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest file could not be located or read.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Pass the manifest path explicitly or run from its directory"))]
    Manifest { message: String },

    /// The global configuration file is missing or malformed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.bomfold/config.toml for syntax errors"))]
    Config { message: String },

    /// Rendering resolved output failed.
    #[error("Output error: {message}")]
    Output { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type BomfoldResult<T> = miette::Result<T>;
