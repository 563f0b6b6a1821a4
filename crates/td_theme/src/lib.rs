//! # TD Theme
//!
//! Theme subsystem for the tower-defense game.
//!
//! A theme is a directory holding a JSON definition (`theme.js`) and the
//! images and fonts it names. This crate covers everything between that
//! directory and the renderer:
//! - Typed schema for the definition file
//! - Path-based queries (`buttons/upgrade/position`, `tower-buttons[]/tower`)
//! - Load-time validation: missing keys, malformed values, missing assets
//! - Layout helpers for the HUD and the level picker
//!
//! It does no rendering and decodes no images.
//!
//! ## Crate Structure
//!
//! - [`data`] - Schema types deserialized from the theme file
//! - [`document`] - Raw document and path queries
//! - [`schema`] - Structural check of a document
//! - [`loader`] - Loading themes from disk, theme selection
//! - [`layout`] - Placements computed from theme data
//! - [`config`] - Loader configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod color;
pub mod config;
pub mod data;
pub mod document;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod loader;
pub mod schema;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::color::{Color, ColorSpec};
    pub use crate::config::LoaderConfig;
    pub use crate::data::{
        ButtonSpec, DecorationSpec, FontSize, LevelButtonsSpec, LevelPickerSpec, TextSpec,
        ThemeData, TowerButtonSpec,
    };
    pub use crate::document::ThemeDocument;
    pub use crate::error::{Result, ThemeError};
    pub use crate::geometry::Position;
    pub use crate::layout::{HudLayout, LevelButtonState, LevelPickerLayout};
    pub use crate::loader::{Theme, ThemeLoader, ThemeStore};
}
