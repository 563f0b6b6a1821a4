//! Placement descriptors for individual UI elements.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::color::ColorSpec;
use crate::geometry::Position;

/// A clickable control: where it sits and which image it shows.
///
/// # Example JSON
///
/// ```json
/// "upgrade": { "position": [340, 520], "image": "button/ButtonUpgrade.png" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonSpec {
    /// Top-left corner on screen.
    pub position: Position,
    /// Image path relative to the theme directory.
    pub image: String,
}

/// A button in the build bar that places a tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerButtonSpec {
    /// Placement and art.
    #[serde(flatten)]
    pub button: ButtonSpec,
    /// Index of the tower type this button builds.
    pub tower: u32,
}

/// Font size in points. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontSize(NonZeroU32);

impl FontSize {
    /// Create a font size, rejecting zero.
    #[must_use]
    pub fn new(points: u32) -> Option<Self> {
        NonZeroU32::new(points).map(Self)
    }

    /// Size in points.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// A text field: anchor position, size and optional color.
///
/// A missing `color` means "use the engine default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TextSpec {
    /// Anchor position on screen.
    pub position: Position,
    /// Font size in points.
    pub font_size: FontSize,
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
}

/// A non-interactive sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationSpec {
    /// Image path relative to the theme directory.
    pub image: String,
    /// Top-left corner on screen.
    pub position: Position,
}
