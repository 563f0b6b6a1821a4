//! Data structures for theme configuration.
//!
//! This module contains pure data structures that describe the game's UI
//! layout. All structs are deserialized from the theme's JSON file.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by [`crate::loader`].

mod screen_data;
mod theme_data;
mod widget_data;

pub use screen_data::{
    EndScreenSpec, LevelButtonsSpec, LevelPickerSpec, MainMenuSpec, PreviewSpec, TooltipColors,
    TooltipSpec,
};
pub use theme_data::{AssetRef, ThemeData, HUD_TEXT, KNOWN_KEYS, SELL_BUTTON, UPGRADE_BUTTON};
pub use widget_data::{ButtonSpec, DecorationSpec, FontSize, TextSpec, TowerButtonSpec};
