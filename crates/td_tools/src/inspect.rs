//! Read-only views of a loaded theme: queries, dumps and layouts.

use td_theme::color::Color;
use td_theme::layout::{HudLayout, LevelButtonState, LevelPickerLayout, PlacedImage, PlacedText};
use td_theme::loader::Theme;

use crate::ToolResult;

/// Pretty-printed JSON value at `path`.
pub fn query(theme: &Theme, path: &str, index: Option<usize>) -> ToolResult<String> {
    let value = theme.document().value(path, index)?;
    Ok(serde_json::to_string_pretty(value)?)
}

/// The whole theme re-serialized.
pub fn dump(theme: &Theme) -> ToolResult<String> {
    Ok(theme.to_json_string_pretty()?)
}

fn color_label(color: Option<Color>) -> String {
    match color {
        Some(c) if c.a == 255 => format!("rgb({}, {}, {})", c.r, c.g, c.b),
        Some(c) => format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a),
        None => "default".to_string(),
    }
}

fn state_label(state: LevelButtonState) -> &'static str {
    match state {
        LevelButtonState::Won => "won",
        LevelButtonState::Unlocked => "unlocked",
        LevelButtonState::Locked => "locked",
    }
}

fn image_line(label: &str, image: &PlacedImage) -> String {
    format!("  {label:<14} {:<16} {}\n", image.position.to_string(), image.image)
}

fn text_line(text: &PlacedText) -> String {
    format!(
        "  {:<14} {:<16} size {} color {}\n",
        text.name,
        text.position.to_string(),
        text.font_size.get(),
        color_label(text.color)
    )
}

/// Human-readable HUD and level picker layout.
///
/// `levels` rows are laid out for the picker with `last_won` as progress.
#[must_use]
pub fn render_layout(theme: &Theme, levels: usize, last_won: Option<usize>) -> String {
    let hud = HudLayout::from_theme(theme.data());
    let mut out = format!("Theme '{}' ({})\nHUD:\n", theme.name(), theme.dir().display());

    out.push_str(&image_line("top-panel", &hud.top_panel));
    out.push_str(&image_line("bottom-panel", &hud.bottom_panel));
    for button in &hud.tower_buttons {
        out.push_str(&image_line(&format!("tower {}", button.tower), &button.sprite));
    }
    if let Some(upgrade) = &hud.upgrade {
        out.push_str(&image_line("upgrade", upgrade));
    }
    if let Some(sell) = &hud.sell {
        out.push_str(&image_line("sell", sell));
    }
    for deco in &hud.decorations {
        out.push_str(&image_line("decoration", deco));
    }
    for text in &hud.text {
        out.push_str(&text_line(text));
    }

    let picker = LevelPickerLayout::new(&theme.data().level_picker, levels, true, last_won);
    out.push_str(&format!("Level picker ({levels} levels):\n"));
    out.push_str(&format!("  {:<14} {}\n", "background", picker.background));
    out.push_str(&text_line(&picker.name));
    out.push_str(&text_line(&picker.desc));
    out.push_str(&format!("  {:<14} {}\n", "preview", picker.preview));
    if let Some(back) = &picker.back_button {
        out.push_str(&image_line("back", back));
    }
    for row in &picker.rows {
        out.push_str(&format!(
            "  level {:<8} {:<16} {:<9} {} text {} color {}\n",
            row.index,
            row.button_position.to_string(),
            state_label(row.state),
            row.image,
            row.text_position,
            color_label(row.text_color)
        ));
    }

    out
}
