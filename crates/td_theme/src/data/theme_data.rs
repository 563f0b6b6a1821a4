//! The complete theme document.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::screen_data::{EndScreenSpec, LevelPickerSpec, MainMenuSpec, TooltipSpec};
use super::widget_data::{ButtonSpec, DecorationSpec, TextSpec, TowerButtonSpec};
use crate::color::ColorSpec;

/// Name of the upgrade button in `buttons`.
pub const UPGRADE_BUTTON: &str = "upgrade";

/// Name of the sell button in `buttons`.
pub const SELL_BUTTON: &str = "sell";

/// Text fields the in-game HUD always draws.
pub const HUD_TEXT: &[&str] = &["level-name", "lives", "countdown", "money"];

/// Top-level keys this version understands.
pub const KNOWN_KEYS: &[&str] = &[
    "main-font",
    "top-panel",
    "bottom-panel",
    "buttons",
    "tower-buttons",
    "text",
    "decorations",
    "win",
    "loose",
    "main-menu",
    "level-picker",
    "tooltip",
];

/// Complete theme definition.
///
/// Loaded once when a theme is selected and read-only afterwards. Unknown
/// top-level keys land in [`ThemeData::extra`] and are written back on
/// serialization.
///
/// # Example JSON
///
/// ```json
/// {
///     "main-font": "segoepr.ttf",
///     "top-panel": "top_bar.png",
///     "bottom-panel": "bottom_panel.png",
///     "buttons": { "upgrade": {...}, "sell": {...} },
///     "tower-buttons": [...],
///     "text": { "lives": {...} },
///     "decorations": [...],
///     "win": { "background": "Win.png" },
///     "loose": { "background": "Loose.png" },
///     "main-menu": {...},
///     "level-picker": {...}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeData {
    /// Font file used for all text.
    pub main_font: String,

    /// Image of the bar at the top of the game screen.
    pub top_panel: String,

    /// Image of the panel at the bottom of the game screen.
    pub bottom_panel: String,

    /// Named buttons of the game screen (`upgrade`, `sell`).
    pub buttons: BTreeMap<String, ButtonSpec>,

    /// Build bar buttons, in display order.
    pub tower_buttons: Vec<TowerButtonSpec>,

    /// Named text fields of the game screen.
    pub text: BTreeMap<String, TextSpec>,

    /// Sprites drawn over the panels.
    pub decorations: Vec<DecorationSpec>,

    /// Victory screen.
    pub win: EndScreenSpec,

    /// Defeat screen.
    pub loose: EndScreenSpec,

    /// Main menu screen.
    pub main_menu: MainMenuSpec,

    /// Level picker screen.
    pub level_picker: LevelPickerSpec,

    /// Tower tooltip layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipSpec>,

    /// Top-level keys this version does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A file referenced by the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Theme path of the referencing key, e.g. `tower-buttons[0]/image`.
    pub key: String,
    /// File path relative to the theme directory.
    pub file: String,
}

impl AssetRef {
    fn new(key: impl Into<String>, file: &str) -> Self {
        Self {
            key: key.into(),
            file: file.to_string(),
        }
    }
}

impl ThemeData {
    /// The upgrade button, if defined.
    #[must_use]
    pub fn upgrade_button(&self) -> Option<&ButtonSpec> {
        self.buttons.get(UPGRADE_BUTTON)
    }

    /// The sell button, if defined.
    #[must_use]
    pub fn sell_button(&self) -> Option<&ButtonSpec> {
        self.buttons.get(SELL_BUTTON)
    }

    /// Find the build bar button for a tower type.
    #[must_use]
    pub fn tower_button(&self, tower: u32) -> Option<&TowerButtonSpec> {
        self.tower_buttons.iter().find(|b| b.tower == tower)
    }

    /// Find a text field by name.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&TextSpec> {
        self.text.get(name)
    }

    /// Top-level keys this version does not interpret.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.extra.keys().map(String::as_str)
    }

    /// Every image and font file the theme references, in document order.
    #[must_use]
    pub fn asset_references(&self) -> Vec<AssetRef> {
        let mut refs = vec![
            AssetRef::new("main-font", &self.main_font),
            AssetRef::new("top-panel", &self.top_panel),
            AssetRef::new("bottom-panel", &self.bottom_panel),
        ];

        for (name, button) in &self.buttons {
            refs.push(AssetRef::new(format!("buttons/{name}/image"), &button.image));
        }
        for (i, button) in self.tower_buttons.iter().enumerate() {
            refs.push(AssetRef::new(
                format!("tower-buttons[{i}]/image"),
                &button.button.image,
            ));
        }
        for (i, deco) in self.decorations.iter().enumerate() {
            refs.push(AssetRef::new(format!("decorations[{i}]/image"), &deco.image));
        }

        refs.push(AssetRef::new("win/background", &self.win.background));
        refs.push(AssetRef::new("loose/background", &self.loose.background));
        refs.push(AssetRef::new(
            "main-menu/background",
            &self.main_menu.background,
        ));
        for (i, image) in self.main_menu.buttons.iter().enumerate() {
            refs.push(AssetRef::new(format!("main-menu/buttons[{i}]"), image));
        }

        let picker = &self.level_picker;
        refs.push(AssetRef::new("level-picker/background", &picker.background));
        refs.push(AssetRef::new(
            "level-picker/level-buttons/red",
            &picker.level_buttons.red,
        ));
        refs.push(AssetRef::new(
            "level-picker/level-buttons/green",
            &picker.level_buttons.green,
        ));
        if let Some(gray) = &picker.level_buttons.gray {
            refs.push(AssetRef::new("level-picker/level-buttons/gray", gray));
        }
        if let Some(back) = &picker.back_button {
            refs.push(AssetRef::new("level-picker/back-button/image", &back.image));
        }

        if let Some(tooltip) = &self.tooltip {
            refs.push(AssetRef::new("tooltip/coin/image", &tooltip.coin.image));
        }

        refs
    }

    /// Every color the theme declares, with its theme path.
    fn color_references(&self) -> Vec<(String, &ColorSpec)> {
        let mut colors = Vec::new();

        for (name, text) in &self.text {
            if let Some(color) = &text.color {
                colors.push((format!("text/{name}/color"), color));
            }
        }

        let picker = &self.level_picker;
        colors.push((
            "level-picker/level-buttons/color".to_string(),
            &picker.level_buttons.color,
        ));
        if let Some(color) = &picker.level_buttons.color_gray {
            colors.push(("level-picker/level-buttons/color-gray".to_string(), color));
        }
        if let Some(color) = &picker.name.color {
            colors.push(("level-picker/name/color".to_string(), color));
        }
        if let Some(color) = &picker.desc.color {
            colors.push(("level-picker/desc/color".to_string(), color));
        }

        if let Some(tooltip) = &self.tooltip {
            if let Some(color) = &tooltip.title.color {
                colors.push(("tooltip/title/color".to_string(), color));
            }
            if let Some(color) = &tooltip.cost.color {
                colors.push(("tooltip/cost/color".to_string(), color));
            }
            colors.push(("tooltip/color/buy".to_string(), &tooltip.color.buy));
            colors.push(("tooltip/color/sell".to_string(), &tooltip.color.sell));
        }

        colors
    }

    /// Validate internal consistency of theme data.
    ///
    /// Checks for:
    /// - Required `upgrade` and `sell` buttons
    /// - Required HUD text fields ([`HUD_TEXT`])
    /// - Empty file references
    /// - Unknown color names
    /// - Duplicate tower ids in the build bar
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for name in [UPGRADE_BUTTON, SELL_BUTTON] {
            if !self.buttons.contains_key(name) {
                errors.push(format!("Button '{name}' is not defined"));
            }
        }

        for name in HUD_TEXT {
            if !self.text.contains_key(*name) {
                errors.push(format!("Text '{name}' is not defined"));
            }
        }

        for asset in self.asset_references() {
            if asset.file.trim().is_empty() {
                errors.push(format!("'{}' references an empty file name", asset.key));
            }
        }

        for (key, color) in self.color_references() {
            if color.resolve().is_err() {
                errors.push(format!("'{key}' has unknown color {color:?}"));
            }
        }

        let mut seen = HashSet::new();
        for button in &self.tower_buttons {
            if !seen.insert(button.tower) {
                errors.push(format!(
                    "Tower {} has more than one build button",
                    button.tower
                ));
            }
        }

        errors
    }
}
