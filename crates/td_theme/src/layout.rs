//! Concrete placements derived from theme data.
//!
//! The theme describes layouts declaratively; these helpers compute what
//! goes where so the renderer only draws.

use crate::color::Color;
use crate::data::{
    ButtonSpec, FontSize, LevelButtonsSpec, LevelPickerSpec, TextSpec, ThemeData,
    SELL_BUTTON, UPGRADE_BUTTON,
};
use crate::geometry::Position;

/// Top-left corner of the top panel.
pub const TOP_PANEL_POSITION: Position = Position::new(0.0, 0.0);

/// Top-left corner of the bottom panel.
pub const BOTTOM_PANEL_POSITION: Position = Position::new(0.0, 500.0);

/// A sprite at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    /// Image path relative to the theme directory.
    pub image: String,
    /// Top-left corner.
    pub position: Position,
}

impl From<&ButtonSpec> for PlacedImage {
    fn from(spec: &ButtonSpec) -> Self {
        Self {
            image: spec.image.clone(),
            position: spec.position,
        }
    }
}

/// A build bar button and the tower it builds.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTowerButton {
    /// Tower type index.
    pub tower: u32,
    /// Button sprite.
    pub sprite: PlacedImage,
}

/// A named text field.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    /// Field name, e.g. `lives`.
    pub name: String,
    /// Anchor position.
    pub position: Position,
    /// Font size in points.
    pub font_size: FontSize,
    /// Color, `None` for the engine default.
    pub color: Option<Color>,
}

impl PlacedText {
    fn from_spec(name: &str, spec: &TextSpec) -> Self {
        Self {
            name: name.to_string(),
            position: spec.position,
            font_size: spec.font_size,
            color: spec.color.as_ref().and_then(|c| c.resolve().ok()),
        }
    }
}

/// Everything the in-game HUD draws.
#[derive(Debug, Clone, PartialEq)]
pub struct HudLayout {
    /// Top bar.
    pub top_panel: PlacedImage,
    /// Bottom panel.
    pub bottom_panel: PlacedImage,
    /// Build bar, in declaration order.
    pub tower_buttons: Vec<PlacedTowerButton>,
    /// Upgrade button of the selected tower.
    pub upgrade: Option<PlacedImage>,
    /// Sell button of the selected tower.
    pub sell: Option<PlacedImage>,
    /// Decorations, in declaration order.
    pub decorations: Vec<PlacedImage>,
    /// Text fields, sorted by name.
    pub text: Vec<PlacedText>,
}

impl HudLayout {
    /// Build the HUD layout. Unknown theme keys play no part.
    #[must_use]
    pub fn from_theme(theme: &ThemeData) -> Self {
        Self {
            top_panel: PlacedImage {
                image: theme.top_panel.clone(),
                position: TOP_PANEL_POSITION,
            },
            bottom_panel: PlacedImage {
                image: theme.bottom_panel.clone(),
                position: BOTTOM_PANEL_POSITION,
            },
            tower_buttons: theme
                .tower_buttons
                .iter()
                .map(|b| PlacedTowerButton {
                    tower: b.tower,
                    sprite: PlacedImage::from(&b.button),
                })
                .collect(),
            upgrade: theme.buttons.get(UPGRADE_BUTTON).map(PlacedImage::from),
            sell: theme.buttons.get(SELL_BUTTON).map(PlacedImage::from),
            decorations: theme
                .decorations
                .iter()
                .map(|d| PlacedImage {
                    image: d.image.clone(),
                    position: d.position,
                })
                .collect(),
            text: theme
                .text
                .iter()
                .map(|(name, spec)| PlacedText::from_spec(name, spec))
                .collect(),
        }
    }

    /// Find a text field by name.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&PlacedText> {
        self.text.iter().find(|t| t.name == name)
    }
}

/// Progress state of one level in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelButtonState {
    /// Already beaten.
    Won,
    /// Playable, not yet beaten.
    Unlocked,
    /// Not yet playable.
    Locked,
}

impl LevelButtonState {
    /// Whether the level can be started.
    #[must_use]
    pub fn is_playable(self) -> bool {
        !matches!(self, Self::Locked)
    }
}

/// State of level `index` given the last level won in the pack.
///
/// Levels up to `last_won` are won, the one after it is unlocked, the rest
/// are locked. A disabled pack locks everything.
#[must_use]
pub fn level_button_state(
    index: usize,
    pack_enabled: bool,
    last_won: Option<usize>,
) -> LevelButtonState {
    if !pack_enabled {
        return LevelButtonState::Locked;
    }
    let next = last_won.map_or(0, |won| won + 1);
    if last_won.is_some_and(|won| index <= won) {
        LevelButtonState::Won
    } else if index == next {
        LevelButtonState::Unlocked
    } else {
        LevelButtonState::Locked
    }
}

/// One row of the level list.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelRow {
    /// Level index within the pack.
    pub index: usize,
    /// Progress state.
    pub state: LevelButtonState,
    /// Button image.
    pub image: String,
    /// Button top-left corner.
    pub button_position: Position,
    /// Label position.
    pub text_position: Position,
    /// Label color, `None` if the theme's color name is unknown.
    pub text_color: Option<Color>,
    /// Label font size.
    pub font_size: FontSize,
    /// Clickable width of the row.
    pub active_width: f32,
}

/// Layout of the level picker screen for one level pack.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPickerLayout {
    /// Background image.
    pub background: String,
    /// Pack name label.
    pub name: PlacedText,
    /// Pack description label.
    pub desc: PlacedText,
    /// Top-left corner of the preview image.
    pub preview: Position,
    /// Back button, if the theme defines one.
    pub back_button: Option<PlacedImage>,
    /// Level rows, first level first.
    pub rows: Vec<LevelRow>,
}

impl LevelPickerLayout {
    /// Lay out a pack of `level_count` levels.
    #[must_use]
    pub fn new(
        spec: &LevelPickerSpec,
        level_count: usize,
        pack_enabled: bool,
        last_won: Option<usize>,
    ) -> Self {
        Self {
            background: spec.background.clone(),
            name: PlacedText::from_spec("name", &spec.name),
            desc: PlacedText::from_spec("desc", &spec.desc),
            preview: spec.preview.position,
            back_button: spec.back_button.as_ref().map(PlacedImage::from),
            rows: Self::level_rows(&spec.level_buttons, level_count, pack_enabled, last_won),
        }
    }

    /// Compute the level rows alone.
    ///
    /// Row `i` sits at `start + line_offset * i` with its label at
    /// `start + text_offset + line_offset * i`. Locked rows use the `gray`
    /// image and `color-gray` label color, falling back to `red` and
    /// `color` when the theme omits them.
    #[must_use]
    pub fn level_rows(
        spec: &LevelButtonsSpec,
        level_count: usize,
        pack_enabled: bool,
        last_won: Option<usize>,
    ) -> Vec<LevelRow> {
        let playable_color = spec.color.resolve().ok();
        let locked_color = spec
            .color_gray
            .as_ref()
            .map_or(playable_color, |c| c.resolve().ok());

        (0..level_count)
            .map(|index| {
                let state = level_button_state(index, pack_enabled, last_won);
                let image = match state {
                    LevelButtonState::Won => &spec.green,
                    LevelButtonState::Unlocked => &spec.red,
                    LevelButtonState::Locked => spec.gray.as_ref().unwrap_or(&spec.red),
                };
                let offset = spec.line_offset * index as f32;

                LevelRow {
                    index,
                    state,
                    image: image.clone(),
                    button_position: spec.start + offset,
                    text_position: spec.start + spec.text_offset + offset,
                    text_color: if state.is_playable() {
                        playable_color
                    } else {
                        locked_color
                    },
                    font_size: spec.font_size,
                    active_width: spec.line_width,
                }
            })
            .collect()
    }
}
