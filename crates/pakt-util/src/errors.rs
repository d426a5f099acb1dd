use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pakt operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PaktError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Pakt.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Pakt.toml for syntax errors"))]
    Manifest { message: String },

    /// Invalid version, constraint, or dependency text.
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Dependency resolution failed.
    #[error("Dependency resolution failed: {message}")]
    Resolution { message: String },

    /// Global configuration could not be read or written.
    #[error("Config error: {message}")]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PaktResult<T> = miette::Result<T>;
