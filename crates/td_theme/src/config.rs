//! Loader configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Where themes live and how strictly they are checked.
///
/// # Example RON
///
/// ```ron
/// LoaderConfig(
///     themes_root: "data/themes",
///     default_theme: "default",
///     verify_assets: true,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory whose subdirectories are themes.
    #[serde(default = "default_themes_root")]
    pub themes_root: PathBuf,

    /// Theme selected when none is requested.
    #[serde(default = "default_theme_name")]
    pub default_theme: String,

    /// Fail loading when a referenced image or font is missing.
    #[serde(default = "default_verify_assets")]
    pub verify_assets: bool,

    /// Name of the definition file inside a theme directory.
    #[serde(default = "default_theme_file")]
    pub theme_file: String,
}

fn default_themes_root() -> PathBuf {
    PathBuf::from("data/themes")
}

fn default_theme_name() -> String {
    "default".to_string()
}

const fn default_verify_assets() -> bool {
    true
}

fn default_theme_file() -> String {
    "theme.js".to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            themes_root: default_themes_root(),
            default_theme: default_theme_name(),
            verify_assets: default_verify_assets(),
            theme_file: default_theme_file(),
        }
    }
}

impl LoaderConfig {
    /// Configuration rooted at `themes_root`, other fields default.
    #[must_use]
    pub fn with_root(themes_root: impl Into<PathBuf>) -> Self {
        Self {
            themes_root: themes_root.into(),
            ..Self::default()
        }
    }

    /// Load from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&contents).map_err(|e| match e {
            ThemeError::Config { message, .. } => ThemeError::Config {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse from a RON string.
    pub fn from_ron_str(ron: &str) -> Result<Self> {
        ron::from_str(ron).map_err(|e| ThemeError::Config {
            path: PathBuf::from("<string>"),
            message: e.to_string(),
        })
    }

    /// Directory of the named theme.
    #[must_use]
    pub fn theme_dir(&self, name: &str) -> PathBuf {
        self.themes_root.join(name)
    }

    /// Definition file of the named theme.
    #[must_use]
    pub fn theme_file_path(&self, name: &str) -> PathBuf {
        self.theme_dir(name).join(&self.theme_file)
    }
}
