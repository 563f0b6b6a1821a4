//! Test fixtures and helpers.
//!
//! The default theme shipped with the game and throwaway themes roots on
//! disk for loader tests.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use td_theme::config::LoaderConfig;
use td_theme::data::ThemeData;
use td_theme::loader::ThemeLoader;

/// The shipped default theme definition.
pub const DEFAULT_THEME_JSON: &str = include_str!("../../td_theme/assets/themes/default/theme.js");

/// Directory of the shipped themes, relative to the workspace root.
pub const SHIPPED_THEMES_ROOT: &str = "crates/td_theme/assets/themes";

/// The default theme as a JSON value.
///
/// Tests mutate the returned value to build broken themes.
#[must_use]
pub fn default_theme_value() -> Value {
    serde_json::from_str(DEFAULT_THEME_JSON).expect("default theme is valid JSON")
}

/// The default theme as typed data.
#[must_use]
pub fn default_theme_data() -> ThemeData {
    serde_json::from_str(DEFAULT_THEME_JSON).expect("default theme matches the schema")
}

/// Locate the shipped themes root whether tests run from the workspace
/// root or from a crate directory.
#[must_use]
pub fn shipped_themes_root() -> PathBuf {
    let candidates = [
        PathBuf::from(SHIPPED_THEMES_ROOT),
        PathBuf::from("assets/themes"),
        PathBuf::from("../td_theme/assets/themes"),
    ];

    for path in &candidates {
        if path.is_dir() {
            return path.clone();
        }
    }

    panic!("Could not find shipped themes. Tried: {candidates:?}");
}

/// A temporary themes root. Deleted on drop.
pub struct ThemeFixture {
    root: TempDir,
}

impl ThemeFixture {
    /// Create an empty themes root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp themes root"),
        }
    }

    /// Path of the themes root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write a theme definition under `name`. Returns the theme directory.
    pub fn add_theme(&self, name: &str, json: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        std::fs::create_dir_all(&dir).expect("create theme dir");
        std::fs::write(dir.join("theme.js"), json).expect("write theme.js");
        dir
    }

    /// Write a theme definition from a JSON value.
    pub fn add_theme_value(&self, name: &str, value: &Value) -> PathBuf {
        let json = serde_json::to_string_pretty(value).expect("serialize theme");
        self.add_theme(name, &json)
    }

    /// Write the default theme under `name`.
    pub fn add_default_theme(&self, name: &str) -> PathBuf {
        self.add_theme(name, DEFAULT_THEME_JSON)
    }

    /// Create an empty file for every asset the theme references.
    ///
    /// The theme must already have been added and must match the schema.
    pub fn touch_assets(&self, name: &str) {
        let dir = self.root.path().join(name);
        let json = std::fs::read_to_string(dir.join("theme.js")).expect("read theme.js");
        let data: ThemeData = serde_json::from_str(&json).expect("theme matches the schema");

        for asset in data.asset_references() {
            let file = dir.join(&asset.file);
            if let Some(parent) = file.parent() {
                std::fs::create_dir_all(parent).expect("create asset dir");
            }
            std::fs::write(&file, b"").expect("write placeholder asset");
            tracing::trace!("Placeholder asset {}", file.display());
        }
    }

    /// Loader configuration rooted here.
    #[must_use]
    pub fn config(&self, verify_assets: bool) -> LoaderConfig {
        LoaderConfig {
            verify_assets,
            ..LoaderConfig::with_root(self.root.path())
        }
    }

    /// Loader rooted here.
    #[must_use]
    pub fn loader(&self, verify_assets: bool) -> ThemeLoader {
        ThemeLoader::new(self.config(verify_assets))
    }
}

impl Default for ThemeFixture {
    fn default() -> Self {
        Self::new()
    }
}
