//! Token resolution: color names, hex strings and line style shorthands.

use crate::core::{Color, LineStyle};
use crate::{PlotError, Result};
use error_stack::Report;

const NAMED_COLORS: &[(&str, Color)] = &[
    ("white", Color::WHITE),
    ("black", Color::BLACK),
    ("gray", Color::GRAY),
    ("grey", Color::GRAY),
    ("lightgray", Color::LIGHT_GRAY),
    ("lightgrey", Color::LIGHT_GRAY),
    ("darkgray", Color::DARK_GRAY),
    ("darkgrey", Color::DARK_GRAY),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("cyan", Color::CYAN),
    ("magenta", Color::MAGENTA),
    ("yellow", Color::YELLOW),
    ("orange", Color::ORANGE),
    ("purple", Color::PURPLE),
    ("transparent", Color::TRANSPARENT),
];

/// Resolve a color token: a known name, `#RRGGBB` or `#RRGGBBAA`.
pub fn resolve(token: &str) -> Result<Color> {
    if let Some(hex) = token.strip_prefix('#') {
        return from_hex(hex).ok_or_else(|| invalid_color(token));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, color)| *color)
        .ok_or_else(|| invalid_color(token))
}

fn invalid_color(token: &str) -> Report<PlotError> {
    Report::new(PlotError::InvalidColorToken(token.to_string()))
        .attach("expected a color name or a #RRGGBB / #RRGGBBAA hex string")
}

fn from_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

/// Resolve a line style token (`-`, `--`, `:`, `-.` or their long names).
pub fn resolve_line_style(token: &str) -> Result<LineStyle> {
    match token.to_ascii_lowercase().as_str() {
        "-" | "solid" => Ok(LineStyle::Solid),
        "--" | "dashed" => Ok(LineStyle::Dashed),
        ":" | "dotted" => Ok(LineStyle::Dotted),
        "-." | "dashdot" => Ok(LineStyle::DashDot),
        _ => Err(Report::new(PlotError::InvalidLineStyle(token.to_string()))),
    }
}
