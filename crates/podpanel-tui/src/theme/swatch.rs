//! Swatch colors for variant chips.
//!
//! A variant's color name is matched case-insensitively against a small set
//! of known names; anything else, including "Heather Grey", gets the neutral
//! fallback.

use ratatui::style::Color;

/// Swatch for names that match no known color
pub const FALLBACK: Color = Color::Rgb(0xd8, 0xdc, 0xe6);

const KNOWN: &[(&str, Color)] = &[
    ("black", Color::Rgb(0x0f, 0x11, 0x15)),
    ("white", Color::Rgb(0xff, 0xff, 0xff)),
    ("navy", Color::Rgb(0x1f, 0x2a, 0x5a)),
    ("red", Color::Rgb(0xd1, 0x1a, 0x2a)),
    ("blue", Color::Rgb(0x1f, 0x60, 0xdc)),
    ("green", Color::Rgb(0x1a, 0x8d, 0x51)),
    ("yellow", Color::Rgb(0xe6, 0xc7, 0x00)),
    ("orange", Color::Rgb(0xe1, 0x7e, 0x1c)),
    ("pink", Color::Rgb(0xd5, 0x6a, 0x97)),
    ("purple", Color::Rgb(0x7d, 0x51, 0xc2)),
    ("gray", Color::Rgb(0x7b, 0x87, 0x99)),
    ("grey", Color::Rgb(0x7b, 0x87, 0x99)),
];

/// Map a whole color name to its swatch
pub fn swatch_color(name: &str) -> Color {
    let name = name.to_lowercase();
    KNOWN
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK)
}
