//! Error types for theme loading and querying.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`ThemeError`].
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Top-level error type for all theme errors.
///
/// Every error is raised at load time or at query time; nothing is
/// deferred to rendering.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Failed to read a theme or configuration file.
    #[error("Failed to read file '{}': {source}", path.display())]
    Io {
        /// Path to the file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Theme file is not valid JSON.
    #[error("Invalid json file '{}' at line {line}, column {column}: {message}", file.display())]
    Parse {
        /// Path to the theme file.
        file: PathBuf,
        /// Line of the syntax error (1-based).
        line: usize,
        /// Column of the syntax error (1-based).
        column: usize,
        /// Parser message.
        message: String,
    },

    /// No theme directory with the given name exists.
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    /// A required key is absent.
    #[error("Missing key: {path}")]
    MissingKey {
        /// Theme path of the missing key.
        path: String,
    },

    /// A value has the wrong type or arity.
    #[error("Malformed value at '{path}': expected {expected}")]
    MalformedValue {
        /// Theme path of the offending value.
        path: String,
        /// Description of the expected shape.
        expected: String,
    },

    /// A referenced image or font file does not exist.
    #[error("Asset not found for '{key}': {}", file.display())]
    AssetNotFound {
        /// Theme path that references the asset.
        key: String,
        /// Resolved file path.
        file: PathBuf,
    },

    /// A theme path could not be parsed.
    #[error("Invalid theme path: {0}")]
    InvalidPath(String),

    /// Theme data parsed but violates an invariant.
    #[error("Validation failed for theme '{theme}': {errors:?}")]
    Validation {
        /// Theme that failed validation.
        theme: String,
        /// List of validation errors.
        errors: Vec<String>,
    },

    /// Loader configuration could not be parsed.
    #[error("Failed to parse config '{}': {message}", path.display())]
    Config {
        /// Path to the configuration file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl ThemeError {
    /// Shorthand for a [`ThemeError::MissingKey`].
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        Self::MissingKey { path: path.into() }
    }

    /// Shorthand for a [`ThemeError::MalformedValue`].
    pub(crate) fn malformed(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::MalformedValue {
            path: path.into(),
            expected: expected.into(),
        }
    }
}
