//! Tests against the shipped default theme.
//!
//! The default theme is the reference layout; these tests pin the values
//! the HUD and level picker depend on.

use std::path::Path;

use td_test_utils::fixtures::shipped_themes_root;
use td_theme::color::{Color, ColorSpec};
use td_theme::config::LoaderConfig;
use td_theme::geometry::Position;
use td_theme::layout::{HudLayout, LevelButtonState, LevelPickerLayout};
use td_theme::loader::{Theme, ThemeLoader};

fn load_default() -> Theme {
    let config = LoaderConfig {
        verify_assets: false,
        ..LoaderConfig::with_root(shipped_themes_root())
    };
    ThemeLoader::new(config)
        .load("default")
        .expect("default theme loads")
}

// ==========================================================================
// Typed data
// ==========================================================================

#[test]
fn test_upgrade_button() {
    let theme = load_default();
    let upgrade = theme.data().upgrade_button().expect("upgrade button");
    assert_eq!(upgrade.position, Position::new(340.0, 520.0));
    assert_eq!(upgrade.image, "button/ButtonUpgrade.png");
}

#[test]
fn test_tower_buttons_in_order() {
    let theme = load_default();
    let towers: Vec<u32> = theme.data().tower_buttons.iter().map(|b| b.tower).collect();
    assert_eq!(towers, vec![0, 1, 2]);
    assert_eq!(
        theme.data().tower_button(1).unwrap().button.image,
        "button/ButtonCanon.png"
    );
}

#[test]
fn test_level_buttons() {
    let theme = load_default();
    let buttons = &theme.data().level_picker.level_buttons;
    assert!((buttons.line_width - 350.0).abs() < f32::EPSILON);
    assert_eq!(buttons.color, ColorSpec::Named("black".to_string()));
    assert_eq!(buttons.font_size.get(), 25);
}

#[test]
fn test_text_fields() {
    let theme = load_default();
    let data = theme.data();
    assert_eq!(data.text.len(), 4);
    assert_eq!(data.text("level-name").unwrap().font_size.get(), 28);
    assert_eq!(data.text("money").unwrap().position, Position::new(690.0, 48.0));
    assert!(data.text("lives").unwrap().color.is_none());
}

#[test]
fn test_screens() {
    let theme = load_default();
    let data = theme.data();
    assert_eq!(data.win.background, "Win.png");
    assert_eq!(data.loose.background, "Loose.png");
    assert_eq!(data.main_menu.buttons.len(), 3);
    assert_eq!(
        data.level_picker.name.color.as_ref().and_then(|c| c.resolve().ok()),
        Some(Color::rgb(255, 201, 15))
    );
    assert!(data.tooltip.is_none());
    assert_eq!(data.unknown_keys().count(), 0);
}

#[test]
fn test_all_font_sizes_positive() {
    let theme = load_default();
    let data = theme.data();
    let sizes = data
        .text
        .values()
        .map(|t| t.font_size.get())
        .chain([
            data.level_picker.level_buttons.font_size.get(),
            data.level_picker.name.font_size.get(),
            data.level_picker.desc.font_size.get(),
        ]);
    for size in sizes {
        assert!(size > 0);
    }
}

// ==========================================================================
// Path queries
// ==========================================================================

#[test]
fn test_path_queries_match_typed_data() {
    let theme = load_default();
    let doc = theme.document();

    assert_eq!(
        doc.position("buttons/upgrade/position", None).unwrap(),
        Position::new(340.0, 520.0)
    );
    assert_eq!(doc.array_len("tower-buttons", None).unwrap(), 3);
    for i in 0..3 {
        let tower = doc.int("tower-buttons[]/tower", Some(i)).unwrap();
        assert_eq!(tower, i64::try_from(i).unwrap());
    }
    assert_eq!(
        doc.color("level-picker/level-buttons/color", None).unwrap(),
        Color::BLACK
    );
    assert!((doc.float("level-picker/level-buttons/line-width", None).unwrap() - 350.0).abs()
        < f32::EPSILON);
    assert!(!doc.key_exists("level-picker/level-buttons/gray", None).unwrap());
}

#[test]
fn test_file_names_resolve_in_theme_dir() {
    let theme = load_default();
    let file = theme.file_name("decorations[]/image", Some(2)).unwrap();
    assert!(file.ends_with(Path::new("default/Heart.png")));
    assert!(theme.main_font_path().ends_with("default/segoepr.ttf"));
}

// ==========================================================================
// Layout
// ==========================================================================

#[test]
fn test_hud_layout() {
    let theme = load_default();
    let hud = HudLayout::from_theme(theme.data());

    assert_eq!(hud.bottom_panel.position, Position::new(0.0, 500.0));
    assert_eq!(hud.tower_buttons.len(), 3);
    assert_eq!(hud.tower_buttons[2].sprite.position, Position::new(200.0, 520.0));
    assert_eq!(hud.sell.as_ref().unwrap().image, "button/ButtonSell.png");
    assert_eq!(hud.decorations.len(), 4);

    let names: Vec<_> = hud.text.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["countdown", "level-name", "lives", "money"]);
}

#[test]
fn test_level_picker_layout() {
    let theme = load_default();
    let layout = LevelPickerLayout::new(&theme.data().level_picker, 4, true, Some(1));

    assert_eq!(layout.preview, Position::new(447.0, 124.0));
    assert!(layout.back_button.is_none());

    let states: Vec<_> = layout.rows.iter().map(|r| r.state).collect();
    assert_eq!(
        states,
        vec![
            LevelButtonState::Won,
            LevelButtonState::Won,
            LevelButtonState::Unlocked,
            LevelButtonState::Locked,
        ]
    );
    assert_eq!(layout.rows[0].image, "picker/DiamondButtonGreen.png");
    assert_eq!(layout.rows[2].image, "picker/DiamondButtonRed.png");
    assert_eq!(layout.rows[3].button_position, Position::new(110.0, 355.0));
    assert_eq!(layout.rows[3].text_position, Position::new(175.0, 365.0));
}

// ==========================================================================
// Serialization
// ==========================================================================

#[test]
fn test_round_trip() {
    let theme = load_default();
    let json = theme.to_json_string_pretty().unwrap();

    let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(&reparsed, theme.document().root());

    let reloaded = ThemeLoader::new(LoaderConfig {
        verify_assets: false,
        ..LoaderConfig::default()
    })
    .load_from_str("default", theme.dir(), &json)
    .unwrap();
    assert_eq!(reloaded.data(), theme.data());
}
