use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Theme {
    /// Light palette (the default)
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF7, 0xF7, 0xFA),
            panel: Color::Rgb(0xE6, 0xE8, 0xF0),
            text: Color::Rgb(0x33, 0x36, 0x4A),
            text_bright: Color::Rgb(0x0C, 0x0C, 0x14),
            highlight: Color::Rgb(0x5B, 0x4B, 0xDB),
            dim: Color::Rgb(0x8A, 0x8D, 0xA3),
            red: Color::Rgb(0xC6, 0x28, 0x28),
            green: Color::Rgb(0x2E, 0x7D, 0x32),
            selection_bg: Color::Rgb(0xDD, 0xD8, 0xFA),
            input_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            panel: Color::Rgb(0x1A, 0x0B, 0x2E),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            input_bg: Color::Rgb(0x14, 0x06, 0x26),
        }
    }

    /// Palette for the theme flag, with `[ui.light]` / `[ui.dark]` overrides applied
    pub fn for_mode(dark: bool, ui: &UiConfig) -> Self {
        if dark {
            Theme::dark().with_overrides(&ui.dark)
        } else {
            Theme::light().with_overrides(&ui.light)
        }
    }

    fn with_overrides(mut self, colors: &HashMap<String, String>) -> Self {
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut self.background,
                "panel" => &mut self.panel,
                "text" => &mut self.text,
                "text_bright" => &mut self.text_bright,
                "highlight" => &mut self.highlight,
                "dim" => &mut self.dim,
                "red" => &mut self.red,
                "green" => &mut self.green,
                "selection_bg" => &mut self.selection_bg,
                "input_bg" => &mut self.input_bg,
                _ => continue,
            };
            *slot = color;
        }
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
