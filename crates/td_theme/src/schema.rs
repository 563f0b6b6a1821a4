//! Structural check of a theme document.
//!
//! Walks every key the game reads, through the same path API the engine
//! uses, so a theme that passes here cannot fail a lookup at render time.
//! The first problem found rejects the whole theme.

use crate::data::{HUD_TEXT, KNOWN_KEYS, SELL_BUTTON, UPGRADE_BUTTON};
use crate::document::ThemeDocument;
use crate::error::{Result, ThemeError};

fn check_button(doc: &ThemeDocument, prefix: &str, idx: Option<usize>) -> Result<()> {
    doc.position(&format!("{prefix}/position"), idx)?;
    doc.string(&format!("{prefix}/image"), idx)?;
    Ok(())
}

fn check_text(doc: &ThemeDocument, prefix: &str) -> Result<()> {
    doc.position(&format!("{prefix}/position"), None)?;
    doc.font_size(&format!("{prefix}/font-size"), None)?;
    check_optional_color(doc, &format!("{prefix}/color"))
}

fn check_optional_color(doc: &ThemeDocument, path: &str) -> Result<()> {
    if doc.key_exists(path, None)? {
        doc.color(path, None)?;
    }
    Ok(())
}

fn check_optional_string(doc: &ThemeDocument, path: &str) -> Result<()> {
    if doc.key_exists(path, None)? {
        doc.string(path, None)?;
    }
    Ok(())
}

fn check_game_screen(doc: &ThemeDocument) -> Result<()> {
    doc.string("main-font", None)?;
    doc.string("top-panel", None)?;
    doc.string("bottom-panel", None)?;

    // Both are required even though `buttons` may hold more.
    for name in [UPGRADE_BUTTON, SELL_BUTTON] {
        check_button(doc, &format!("buttons/{name}"), None)?;
    }
    for name in doc.object_keys("buttons", None)? {
        check_button(doc, &format!("buttons/{name}"), None)?;
    }

    for i in 0..doc.array_len("tower-buttons", None)? {
        check_button(doc, "tower-buttons[]", Some(i))?;
        let tower = doc.int("tower-buttons[]/tower", Some(i))?;
        if u32::try_from(tower).is_err() {
            return Err(ThemeError::malformed(
                format!("tower-buttons[{i}]/tower"),
                "a non-negative tower id",
            ));
        }
    }

    // The HUD draws these on every frame.
    for name in HUD_TEXT {
        check_text(doc, &format!("text/{name}"))?;
    }
    for name in doc.object_keys("text", None)? {
        check_text(doc, &format!("text/{name}"))?;
    }

    for i in 0..doc.array_len("decorations", None)? {
        check_button(doc, "decorations[]", Some(i))?;
    }

    Ok(())
}

fn check_screens(doc: &ThemeDocument) -> Result<()> {
    doc.string("win/background", None)?;
    doc.string("loose/background", None)?;

    doc.string("main-menu/background", None)?;
    for i in 0..doc.array_len("main-menu/buttons", None)? {
        doc.string("main-menu/buttons[]", Some(i))?;
    }

    doc.string("level-picker/background", None)?;
    doc.position("level-picker/level-buttons/start", None)?;
    doc.position("level-picker/level-buttons/line-offset", None)?;
    doc.position("level-picker/level-buttons/text-offset", None)?;
    doc.float("level-picker/level-buttons/line-width", None)?;
    doc.font_size("level-picker/level-buttons/font-size", None)?;
    doc.color("level-picker/level-buttons/color", None)?;
    doc.string("level-picker/level-buttons/red", None)?;
    doc.string("level-picker/level-buttons/green", None)?;
    check_optional_string(doc, "level-picker/level-buttons/gray")?;
    check_optional_color(doc, "level-picker/level-buttons/color-gray")?;

    check_text(doc, "level-picker/name")?;
    check_text(doc, "level-picker/desc")?;
    doc.position("level-picker/preview/position", None)?;

    if doc.key_exists("level-picker/back-button", None)? {
        check_button(doc, "level-picker/back-button", None)?;
    }

    Ok(())
}

fn check_tooltip(doc: &ThemeDocument) -> Result<()> {
    if !doc.key_exists("tooltip", None)? {
        return Ok(());
    }

    check_text(doc, "tooltip/title")?;
    check_text(doc, "tooltip/cost")?;
    check_button(doc, "tooltip/coin", None)?;
    doc.color("tooltip/color/buy", None)?;
    doc.color("tooltip/color/sell", None)?;
    Ok(())
}

/// Check that every key the game reads is present and well-formed.
///
/// Optional keys (`color` on text fields, `gray`, `color-gray`,
/// `back-button`, `tooltip`) are checked only when present. Unknown keys are
/// ignored.
///
/// # Errors
///
/// Returns the first [`ThemeError::MissingKey`] or
/// [`ThemeError::MalformedValue`] found.
pub fn check_document(doc: &ThemeDocument) -> Result<()> {
    check_game_screen(doc)?;
    check_screens(doc)?;
    check_tooltip(doc)?;

    if let Some(root) = doc.root().as_object() {
        for key in root.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            tracing::debug!("Ignoring unknown theme key '{key}'");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn minimal() -> Value {
        json!({
            "main-font": "font.ttf",
            "top-panel": "top.png",
            "bottom-panel": "bottom.png",
            "buttons": {
                "upgrade": { "position": [340, 520], "image": "up.png" },
                "sell": { "position": [440, 520], "image": "sell.png" }
            },
            "tower-buttons": [ { "image": "a.png", "position": [40, 520], "tower": 0 } ],
            "text": {
                "level-name": { "position": [400, 50], "font-size": 28 },
                "lives": { "position": [690, 18], "font-size": 24 },
                "countdown": { "position": [250, 18], "font-size": 24 },
                "money": { "position": [520, 18], "font-size": 24 }
            },
            "decorations": [ { "image": "heart.png", "position": [660, 22] } ],
            "win": { "background": "win.png" },
            "loose": { "background": "loose.png" },
            "main-menu": { "background": "menu.png", "buttons": ["start.png"] },
            "level-picker": {
                "background": "picker.png",
                "level-buttons": {
                    "start": [110, 190],
                    "line-offset": [0, 55],
                    "text-offset": [65, 10],
                    "line-width": 350,
                    "font-size": 25,
                    "color": "black",
                    "red": "red.png",
                    "green": "green.png"
                },
                "name": { "position": [230, 185], "font-size": 28, "color": [255, 201, 15] },
                "desc": { "position": [425, 300], "font-size": 20 },
                "preview": { "position": [447, 124] }
            }
        })
    }

    fn check(value: Value) -> Result<()> {
        check_document(&ThemeDocument::from_value(value).unwrap())
    }

    fn expect_missing(value: Value, expected: &str) {
        match check(value) {
            Err(ThemeError::MissingKey { path }) => assert_eq!(path, expected),
            other => panic!("expected missing '{expected}', got {other:?}"),
        }
    }

    fn expect_malformed(value: Value, expected: &str) {
        match check(value) {
            Err(ThemeError::MalformedValue { path, .. }) => assert_eq!(path, expected),
            other => panic!("expected malformed '{expected}', got {other:?}"),
        }
    }

    #[test]
    fn test_minimal_theme_passes() {
        check(minimal()).unwrap();
    }

    #[test]
    fn test_missing_required_keys() {
        let mut value = minimal();
        value.as_object_mut().unwrap().remove("main-font");
        expect_missing(value, "main-font");

        let mut value = minimal();
        value["buttons"].as_object_mut().unwrap().remove("sell");
        expect_missing(value, "buttons/sell");

        let mut value = minimal();
        value["level-picker"]["level-buttons"]
            .as_object_mut()
            .unwrap()
            .remove("line-width");
        expect_missing(value, "level-picker/level-buttons/line-width");
    }

    #[test]
    fn test_missing_hud_text() {
        for name in HUD_TEXT {
            let mut value = minimal();
            value["text"].as_object_mut().unwrap().remove(*name);
            expect_missing(value, &format!("text/{name}"));
        }

        let mut value = minimal();
        value["text"]["money"].as_object_mut().unwrap().remove("font-size");
        expect_missing(value, "text/money/font-size");
    }

    #[test]
    fn test_malformed_position() {
        let mut value = minimal();
        value["tower-buttons"][0]["position"] = json!([40, 520, 3]);
        expect_malformed(value, "tower-buttons[0]/position");
    }

    #[test]
    fn test_malformed_font_size() {
        let mut value = minimal();
        value["text"]["lives"]["font-size"] = json!(0);
        expect_malformed(value, "text/lives/font-size");

        let mut value = minimal();
        value["text"]["lives"]["font-size"] = json!(-4);
        expect_malformed(value, "text/lives/font-size");
    }

    #[test]
    fn test_malformed_color() {
        let mut value = minimal();
        value["level-picker"]["desc"]["color"] = json!([1, 2]);
        expect_malformed(value, "level-picker/desc/color");

        let mut value = minimal();
        value["level-picker"]["level-buttons"]["color"] = json!("octarine");
        expect_malformed(value, "level-picker/level-buttons/color");
    }

    #[test]
    fn test_negative_tower_id() {
        let mut value = minimal();
        value["tower-buttons"][0]["tower"] = json!(-1);
        expect_malformed(value, "tower-buttons[0]/tower");
    }

    #[test]
    fn test_optional_sections_checked_when_present() {
        let mut value = minimal();
        value["tooltip"] = json!({ "title": { "position": [0, 0], "font-size": 12 } });
        expect_missing(value, "tooltip/cost");

        let mut value = minimal();
        value["level-picker"]["back-button"] = json!({ "position": [10, 10] });
        expect_missing(value, "level-picker/back-button/image");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut value = minimal();
        value["sound-pack"] = json!({ "click": "click.ogg" });
        check(value).unwrap();
    }
}
