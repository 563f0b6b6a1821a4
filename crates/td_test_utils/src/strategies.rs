//! Proptest strategies for theme values.

use proptest::prelude::*;
use serde_json::{json, Value};

use td_theme::color::ColorSpec;
use td_theme::data::{ButtonSpec, DecorationSpec, FontSize, TextSpec};
use td_theme::geometry::Position;

/// Screen positions with whole or half-pixel coordinates.
pub fn position() -> impl Strategy<Value = Position> {
    (-4000i32..4000, -4000i32..4000, any::<bool>()).prop_map(|(x, y, half)| {
        let frac = if half { 0.5 } else { 0.0 };
        Position::new(x as f32 + frac, y as f32 + frac)
    })
}

/// Valid font sizes.
pub fn font_size() -> impl Strategy<Value = FontSize> {
    (1u32..200).prop_map(|p| FontSize::new(p).expect("range excludes zero"))
}

/// Named and RGB colors that resolve.
pub fn color_spec() -> impl Strategy<Value = ColorSpec> {
    prop_oneof![
        prop::sample::select(vec!["black", "white", "red", "Yellow", "cyan"])
            .prop_map(|n| ColorSpec::Named(n.to_string())),
        any::<[u8; 3]>().prop_map(ColorSpec::Rgb),
        any::<[u8; 4]>().prop_map(ColorSpec::Rgba),
    ]
}

/// Relative image paths.
pub fn image_path() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(/[A-Za-z]{1,12})?\\.png"
}

/// Text fields with and without colors.
pub fn text_spec() -> impl Strategy<Value = TextSpec> {
    (position(), font_size(), proptest::option::of(color_spec())).prop_map(
        |(position, font_size, color)| TextSpec {
            position,
            font_size,
            color,
        },
    )
}

/// Buttons.
pub fn button_spec() -> impl Strategy<Value = ButtonSpec> {
    (position(), image_path()).prop_map(|(position, image)| ButtonSpec { position, image })
}

/// Decorations.
pub fn decoration_spec() -> impl Strategy<Value = DecorationSpec> {
    (image_path(), position()).prop_map(|(image, position)| DecorationSpec { image, position })
}

/// JSON values that are not a valid `[x, y]` position.
pub fn malformed_position() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!([])),
        any::<i32>().prop_map(|x| json!([x])),
        (any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(x, y, z)| json!([x, y, z])),
        "[a-z]{0,6}".prop_map(|s| json!([s, 0])),
        any::<i32>().prop_map(|x| json!({ "x": x })),
    ]
}

/// JSON values that are not a valid font size.
pub fn malformed_font_size() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(0)),
        (i64::MIN..0).prop_map(|n| json!(n)),
        (0.1f64..100.0).prop_filter("fractional", |f| f.fract() != 0.0).prop_map(|f| json!(f)),
        "[0-9]{1,3}".prop_map(|s| json!(s)),
    ]
}
