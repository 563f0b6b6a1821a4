//! Property-based tests for value shapes accepted by the loader.

use serde_json::json;
use td_test_utils::fixtures::default_theme_value;
use td_test_utils::proptest::prelude::*;
use td_test_utils::strategies::{
    button_spec, color_spec, decoration_spec, font_size, malformed_font_size,
    malformed_position, position, text_spec,
};
use td_theme::config::LoaderConfig;
use td_theme::error::ThemeError;
use td_theme::loader::ThemeLoader;

fn loader() -> ThemeLoader {
    ThemeLoader::new(LoaderConfig {
        verify_assets: false,
        ..LoaderConfig::default()
    })
}

proptest! {
    /// Any two numbers form a position the path API and the typed data agree on.
    #[test]
    fn prop_positions_load(pos in position()) {
        let mut value = default_theme_value();
        value["buttons"]["sell"]["position"] = serde_json::to_value(pos).unwrap();

        let theme = loader()
            .load_from_str("prop", "themes/prop", &value.to_string())
            .unwrap();
        prop_assert_eq!(theme.data().sell_button().unwrap().position, pos);
        prop_assert_eq!(theme.document().position("buttons/sell/position", None).unwrap(), pos);
    }

    /// Anything other than a two-element numeric array is rejected.
    #[test]
    fn prop_malformed_positions_rejected(bad in malformed_position()) {
        let mut value = default_theme_value();
        value["decorations"][1]["position"] = bad;

        let err = loader()
            .load_from_str("prop", "themes/prop", &value.to_string())
            .unwrap_err();
        let is_malformed = matches!(
            err,
            ThemeError::MalformedValue { ref path, .. } if path == "decorations[1]/position"
        );
        prop_assert!(is_malformed, "unexpected error: {}", err);
    }

    /// Positive integer font sizes load unchanged.
    #[test]
    fn prop_font_sizes_load(size in font_size()) {
        let mut value = default_theme_value();
        value["text"]["money"]["font-size"] = json!(size.get());

        let theme = loader()
            .load_from_str("prop", "themes/prop", &value.to_string())
            .unwrap();
        prop_assert_eq!(theme.data().text("money").unwrap().font_size, size);
    }

    /// Zero, negative, fractional and string font sizes are rejected.
    #[test]
    fn prop_malformed_font_sizes_rejected(bad in malformed_font_size()) {
        let mut value = default_theme_value();
        value["level-picker"]["desc"]["font-size"] = bad;

        let err = loader()
            .load_from_str("prop", "themes/prop", &value.to_string())
            .unwrap_err();
        let is_malformed = matches!(
            err,
            ThemeError::MalformedValue { ref path, .. } if path == "level-picker/desc/font-size"
        );
        prop_assert!(is_malformed, "unexpected error: {}", err);
    }

    /// Named and RGB colors resolve identically through both APIs.
    #[test]
    fn prop_colors_resolve(color in color_spec()) {
        let mut value = default_theme_value();
        value["level-picker"]["name"]["color"] = serde_json::to_value(&color).unwrap();

        let theme = loader()
            .load_from_str("prop", "themes/prop", &value.to_string())
            .unwrap();
        let typed = theme.data().level_picker.name.color.as_ref().and_then(|c| c.resolve().ok());
        let queried = theme.document().color("level-picker/name/color", None).unwrap();
        prop_assert_eq!(typed, Some(queried));
    }

    /// Re-serializing a theme with generated widgets yields the same theme.
    #[test]
    fn prop_round_trip(
        button in button_spec(),
        text in text_spec(),
        deco in decoration_spec(),
    ) {
        let mut value = default_theme_value();
        value["buttons"]["pause"] = serde_json::to_value(&button).unwrap();
        value["text"]["wave"] = serde_json::to_value(&text).unwrap();
        value["decorations"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::to_value(&deco).unwrap());

        let loader = loader();
        let theme = loader
            .load_from_str("prop", "themes/prop", &value.to_string())
            .unwrap();
        let again = loader
            .load_from_str("prop", "themes/prop", &theme.to_json_string_pretty().unwrap())
            .unwrap();

        prop_assert_eq!(again.data(), theme.data());
        prop_assert_eq!(again.document().root(), theme.document().root());
    }
}
