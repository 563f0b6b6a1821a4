//! Theme validation.

use serde::Serialize;

use td_theme::config::LoaderConfig;
use td_theme::loader::ThemeLoader;

use crate::{ToolError, ToolResult};

/// Outcome of validating one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeReport {
    /// Theme name.
    pub theme: String,
    /// Load error, if the theme could not be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Missing assets as `key -> file`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_assets: Vec<String>,
    /// Top-level keys the loader ignored.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_keys: Vec<String>,
    /// Whether the theme counts as valid under the configuration.
    pub passed: bool,
}

/// Validate one theme.
///
/// Unlike loading, this collects every missing asset instead of stopping at
/// the first. Missing assets only fail the theme when the configuration
/// asks for asset verification.
#[must_use]
pub fn validate_theme(config: &LoaderConfig, name: &str) -> ThemeReport {
    let lenient = ThemeLoader::new(LoaderConfig {
        verify_assets: false,
        ..config.clone()
    });

    let theme = match lenient.load(name) {
        Ok(theme) => theme,
        Err(e) => {
            return ThemeReport {
                theme: name.to_string(),
                error: Some(e.to_string()),
                missing_assets: Vec::new(),
                unknown_keys: Vec::new(),
                passed: false,
            }
        }
    };

    let missing_assets: Vec<String> = theme
        .missing_assets()
        .into_iter()
        .map(|(asset, file)| format!("{} -> {}", asset.key, file.display()))
        .collect();
    let unknown_keys = theme.data().unknown_keys().map(str::to_string).collect();
    let passed = !config.verify_assets || missing_assets.is_empty();

    ThemeReport {
        theme: name.to_string(),
        error: None,
        missing_assets,
        unknown_keys,
        passed,
    }
}

/// Validate the named themes, or every theme under the root when `names`
/// is empty.
///
/// # Errors
///
/// Returns [`ToolError::NoThemes`] if there is nothing to validate, or an
/// IO error if the themes root cannot be listed.
pub fn validate_themes(config: &LoaderConfig, names: &[String]) -> ToolResult<Vec<ThemeReport>> {
    let names = if names.is_empty() {
        ThemeLoader::new(config.clone()).available_themes()?
    } else {
        names.to_vec()
    };

    if names.is_empty() {
        return Err(ToolError::NoThemes(config.themes_root.clone()));
    }

    let reports: Vec<ThemeReport> = names
        .iter()
        .map(|name| {
            let report = validate_theme(config, name);
            if let Some(error) = &report.error {
                tracing::error!("Theme '{}': {}", name, error);
            }
            for missing in &report.missing_assets {
                if config.verify_assets {
                    tracing::error!("Theme '{}': missing asset {}", name, missing);
                } else {
                    tracing::warn!("Theme '{}': missing asset {}", name, missing);
                }
            }
            for key in &report.unknown_keys {
                tracing::info!("Theme '{}': ignoring unknown key '{}'", name, key);
            }
            report
        })
        .collect();

    Ok(reports)
}

/// Turn reports into an overall result.
///
/// # Errors
///
/// Returns [`ToolError::ValidationFailed`] if any report failed.
pub fn summarize(reports: &[ThemeReport]) -> ToolResult<()> {
    let failed = reports.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        return Err(ToolError::ValidationFailed {
            failed,
            total: reports.len(),
        });
    }
    Ok(())
}
