//! # TD Theme Tools
//!
//! Command-line tools for theme authors:
//! - Theme validation
//! - Path queries against a theme
//! - Layout dumps

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

use std::path::{Path, PathBuf};

use td_theme::config::LoaderConfig;
use td_theme::error::ThemeError;
use thiserror::Error;

pub mod inspect;
pub mod validate;

/// Errors surfaced by the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A theme operation failed.
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// The themes root holds no themes.
    #[error("No themes found in {}", .0.display())]
    NoThemes(PathBuf),

    /// One or more themes failed validation.
    #[error("{failed} of {total} themes failed validation")]
    ValidationFailed {
        /// Number of failing themes.
        failed: usize,
        /// Number of themes checked.
        total: usize,
    },

    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Build the loader configuration from an optional RON file and CLI
/// overrides.
pub fn resolve_config(
    config_file: Option<&Path>,
    root: Option<PathBuf>,
    verify_assets: Option<bool>,
) -> ToolResult<LoaderConfig> {
    let mut config = match config_file {
        Some(path) => LoaderConfig::load(path)?,
        None => LoaderConfig::default(),
    };

    if let Some(root) = root {
        config.themes_root = root;
    }
    if let Some(verify) = verify_assets {
        config.verify_assets = verify;
    }

    tracing::debug!(
        "Themes root {}, verify assets: {}",
        config.themes_root.display(),
        config.verify_assets
    );
    Ok(config)
}
