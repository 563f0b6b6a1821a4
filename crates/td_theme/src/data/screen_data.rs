//! Full-screen layouts: end screens, main menu, level picker and tooltip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::widget_data::{ButtonSpec, DecorationSpec, FontSize, TextSpec};
use crate::color::ColorSpec;
use crate::geometry::{compact_f32, Position};

/// A screen that only shows a background image (win, loss).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndScreenSpec {
    /// Background image path.
    pub background: String,

    /// Keys this version does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Main menu layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainMenuSpec {
    /// Background image path.
    pub background: String,

    /// Button images from top to bottom (start, options, quit).
    pub buttons: Vec<String>,

    /// Keys this version does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Level list layout inside the level picker.
///
/// Row `i` is placed at `start + line_offset * i`; its label is shifted
/// further by `text_offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LevelButtonsSpec {
    /// Position of the first row.
    pub start: Position,
    /// Offset between consecutive rows.
    pub line_offset: Position,
    /// Offset of the label relative to its row.
    pub text_offset: Position,
    /// Clickable width of a row.
    #[serde(with = "compact_f32")]
    pub line_width: f32,
    /// Label font size.
    pub font_size: FontSize,
    /// Label color for playable levels.
    pub color: ColorSpec,
    /// Image for unlocked, not yet won levels.
    pub red: String,
    /// Image for won levels.
    pub green: String,
    /// Image for locked levels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gray: Option<String>,
    /// Label color for locked levels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_gray: Option<ColorSpec>,
}

/// Where the level pack preview image is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSpec {
    /// Top-left corner of the preview.
    pub position: Position,
}

/// Level picker screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LevelPickerSpec {
    /// Background image path.
    pub background: String,
    /// Level list layout.
    pub level_buttons: LevelButtonsSpec,
    /// Level pack name label.
    pub name: TextSpec,
    /// Level pack description label.
    pub desc: TextSpec,
    /// Level pack preview image.
    pub preview: PreviewSpec,
    /// Button returning to the main menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_button: Option<ButtonSpec>,

    /// Keys this version does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cost colors used by the tower tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipColors {
    /// Cost color when buying or upgrading.
    pub buy: ColorSpec,
    /// Cost color when selling.
    pub sell: ColorSpec,
}

/// Tower tooltip layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipSpec {
    /// Tower name label.
    pub title: TextSpec,
    /// Cost label.
    pub cost: TextSpec,
    /// Coin icon next to the cost.
    pub coin: DecorationSpec,
    /// Cost colors.
    pub color: TooltipColors,
}
