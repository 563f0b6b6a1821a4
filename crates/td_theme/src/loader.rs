//! Theme loading.
//!
//! A theme is a directory under the themes root holding a JSON definition
//! file and the images and fonts it references. Loading parses the file,
//! checks its structure, builds the typed [`ThemeData`] and optionally
//! verifies that every referenced asset exists. All validation happens at
//! load time.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::LoaderConfig;
use crate::data::{AssetRef, ThemeData};
use crate::document::ThemeDocument;
use crate::error::{Result, ThemeError};
use crate::schema::check_document;

/// A loaded theme. Read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    dir: PathBuf,
    document: ThemeDocument,
    data: ThemeData,
}

impl Theme {
    /// Theme name (its directory name).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory that asset paths are resolved against.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Typed theme data.
    #[must_use]
    pub fn data(&self) -> &ThemeData {
        &self.data
    }

    /// Raw document for path queries.
    #[must_use]
    pub fn document(&self) -> &ThemeDocument {
        &self.document
    }

    /// Resolve the file named by the string at `path` against the theme
    /// directory.
    pub fn file_name(&self, path: &str, idx: Option<usize>) -> Result<PathBuf> {
        let file = self.document.string(path, idx)?;
        Ok(self.dir.join(file))
    }

    /// Full path of the main font.
    #[must_use]
    pub fn main_font_path(&self) -> PathBuf {
        self.dir.join(&self.data.main_font)
    }

    /// Referenced assets that do not exist on disk, with their resolved
    /// paths.
    #[must_use]
    pub fn missing_assets(&self) -> Vec<(AssetRef, PathBuf)> {
        self.data
            .asset_references()
            .into_iter()
            .map(|asset| {
                let file = self.dir.join(&asset.file);
                (asset, file)
            })
            .filter(|(_, file)| !file.is_file())
            .collect()
    }

    /// Check that every referenced asset exists.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::AssetNotFound`] for the first missing file.
    pub fn verify_assets(&self) -> Result<()> {
        match self.missing_assets().into_iter().next() {
            Some((asset, file)) => Err(ThemeError::AssetNotFound {
                key: asset.key,
                file,
            }),
            None => Ok(()),
        }
    }

    /// Re-serialize the theme as pretty-printed JSON.
    ///
    /// Writes the document as read, so unknown keys at every depth survive
    /// in their original order.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self.document.root())
            .map_err(|e| ThemeError::malformed("<root>", e.to_string()))
    }
}

/// Loads themes from a themes root directory.
#[derive(Debug, Clone, Default)]
pub struct ThemeLoader {
    config: LoaderConfig,
}

impl ThemeLoader {
    /// Create a loader with the given configuration.
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load the named theme from disk.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::ThemeNotFound`] if the theme directory does not exist.
    /// - [`ThemeError::Io`] if the definition file cannot be read.
    /// - Any error of [`ThemeLoader::load_from_str`].
    pub fn load(&self, name: &str) -> Result<Theme> {
        let dir = self.config.theme_dir(name);
        if !dir.is_dir() {
            return Err(ThemeError::ThemeNotFound(name.to_string()));
        }

        let file = self.config.theme_file_path(name);
        let contents = std::fs::read_to_string(&file).map_err(|source| ThemeError::Io {
            path: file.clone(),
            source,
        })?;

        self.parse(name, dir, &file, &contents)
    }

    /// Load a theme from an in-memory definition.
    ///
    /// Asset paths resolve against `dir`.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::Parse`] if `json` is not valid JSON.
    /// - [`ThemeError::MissingKey`] / [`ThemeError::MalformedValue`] from the
    ///   structural check.
    /// - [`ThemeError::Validation`] if the data is inconsistent.
    /// - [`ThemeError::AssetNotFound`] if asset verification is enabled and a
    ///   file is missing.
    pub fn load_from_str(&self, name: &str, dir: impl Into<PathBuf>, json: &str) -> Result<Theme> {
        let dir = dir.into();
        let file = dir.join(&self.config.theme_file);
        self.parse(name, dir, &file, json)
    }

    fn parse(&self, name: &str, dir: PathBuf, file: &Path, json: &str) -> Result<Theme> {
        let value: Value = serde_json::from_str(json).map_err(|e| ThemeError::Parse {
            file: file.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

        let document = ThemeDocument::from_value(value)?;
        check_document(&document)?;

        let data: ThemeData = serde_json::from_value(document.root().clone())
            .map_err(|e| ThemeError::malformed("<root>", e.to_string()))?;

        let errors = data.validate();
        if !errors.is_empty() {
            return Err(ThemeError::Validation {
                theme: name.to_string(),
                errors,
            });
        }

        let theme = Theme {
            name: name.to_string(),
            dir,
            document,
            data,
        };

        if self.config.verify_assets {
            theme.verify_assets()?;
        }

        tracing::info!(
            "Loaded theme '{}' with {} buttons, {} tower buttons, {} text fields, {} decorations",
            theme.name,
            theme.data.buttons.len(),
            theme.data.tower_buttons.len(),
            theme.data.text.len(),
            theme.data.decorations.len()
        );
        for key in theme.data.unknown_keys() {
            tracing::debug!("Theme '{}' carries unknown key '{}'", theme.name, key);
        }

        Ok(theme)
    }

    /// Names of all themes under the themes root, sorted.
    ///
    /// A theme is a subdirectory that contains the definition file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the themes root cannot be read.
    pub fn available_themes(&self) -> Result<Vec<String>> {
        let root = &self.config.themes_root;
        let entries = std::fs::read_dir(root).map_err(|source| ThemeError::Io {
            path: root.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ThemeError::Io {
                path: root.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if !path.join(&self.config.theme_file).is_file() {
                tracing::warn!(
                    "Skipping '{}': no {} inside",
                    path.display(),
                    self.config.theme_file
                );
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

/// Holds the currently selected theme.
///
/// Selecting the theme that is already current does not touch the disk.
#[derive(Debug, Default)]
pub struct ThemeStore {
    loader: ThemeLoader,
    current: Option<Theme>,
}

impl ThemeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(loader: ThemeLoader) -> Self {
        Self {
            loader,
            current: None,
        }
    }

    /// The loader used for selection.
    #[must_use]
    pub fn loader(&self) -> &ThemeLoader {
        &self.loader
    }

    /// The selected theme, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Theme> {
        self.current.as_ref()
    }

    /// Select a theme by name.
    ///
    /// Returns `true` if the theme was loaded, `false` if it was already
    /// current. On error the previous theme stays selected.
    pub fn select(&mut self, name: &str) -> Result<bool> {
        if self.current.as_ref().is_some_and(|t| t.name() == name) {
            tracing::debug!("Theme '{name}' already selected");
            return Ok(false);
        }

        let theme = self.loader.load(name)?;
        self.current = Some(theme);
        Ok(true)
    }

    /// Select the configured default theme.
    pub fn select_default(&mut self) -> Result<bool> {
        let name = self.loader.config().default_theme.clone();
        self.select(&name)
    }

    /// Reload the current theme from disk, e.g. after editing it.
    ///
    /// Does nothing when no theme is selected.
    pub fn reload(&mut self) -> Result<()> {
        let Some(name) = self.current.as_ref().map(|t| t.name().to_string()) else {
            return Ok(());
        };
        let theme = self.loader.load(&name)?;
        self.current = Some(theme);
        Ok(())
    }
}
