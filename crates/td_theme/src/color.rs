//! Text colors as written in theme files.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Opaque cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Look up a color by name, ignoring case.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "magenta" => Self::MAGENTA,
            "cyan" => Self::CYAN,
            "transparent" => Self::TRANSPARENT,
            _ => return None,
        };
        Some(color)
    }
}

/// A color as written in a theme: a name or a channel array.
///
/// ```json
/// "color": "black"
/// "color": [255, 201, 15]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// A named color such as `"black"`.
    Named(String),
    /// An opaque `[r, g, b]` color.
    Rgb([u8; 3]),
    /// An `[r, g, b, a]` color.
    Rgba([u8; 4]),
}

impl ColorSpec {
    /// Resolve to a concrete color.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MalformedValue`] for unknown names. The error
    /// carries no theme path; callers that know one substitute it.
    pub fn resolve(&self) -> Result<Color> {
        match self {
            Self::Named(name) => Color::named(name).ok_or_else(|| {
                ThemeError::malformed("<color>", format!("a known color name, found '{name}'"))
            }),
            Self::Rgb([r, g, b]) => Ok(Color::rgb(*r, *g, *b)),
            Self::Rgba([r, g, b, a]) => Ok(Color::rgba(*r, *g, *b, *a)),
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        if color.a == 255 {
            Self::Rgb([color.r, color.g, color.b])
        } else {
            Self::Rgba([color.r, color.g, color.b, color.a])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_lookup_ignores_case() {
        assert_eq!(Color::named("black"), Some(Color::BLACK));
        assert_eq!(Color::named("Yellow"), Some(Color::YELLOW));
        assert_eq!(Color::named("chartreuse"), None);
    }

    #[test]
    fn test_spec_from_name() {
        let spec: ColorSpec = serde_json::from_str(r#""black""#).unwrap();
        assert_eq!(spec, ColorSpec::Named("black".to_string()));
        assert_eq!(spec.resolve().unwrap(), Color::BLACK);
    }

    #[test]
    fn test_spec_from_rgb() {
        let spec: ColorSpec = serde_json::from_str("[255, 201, 15]").unwrap();
        assert_eq!(spec, ColorSpec::Rgb([255, 201, 15]));
        assert_eq!(spec.resolve().unwrap(), Color::rgb(255, 201, 15));
    }

    #[test]
    fn test_spec_from_rgba() {
        let spec: ColorSpec = serde_json::from_str("[0, 0, 255, 32]").unwrap();
        assert_eq!(spec.resolve().unwrap(), Color::rgba(0, 0, 255, 32));
    }

    #[test]
    fn test_spec_rejects_bad_shapes() {
        assert!(serde_json::from_str::<ColorSpec>("[1, 2]").is_err());
        assert!(serde_json::from_str::<ColorSpec>("[256, 0, 0]").is_err());
        assert!(serde_json::from_str::<ColorSpec>("12").is_err());
    }

    #[test]
    fn test_unknown_name_does_not_resolve() {
        let spec = ColorSpec::Named("octarine".to_string());
        match spec.resolve() {
            Err(ThemeError::MalformedValue { expected, .. }) => {
                assert!(expected.contains("octarine"));
            }
            other => panic!("expected malformed color, got {other:?}"),
        }
    }
}
