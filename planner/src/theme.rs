//! Theme palettes and colour normalisation.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Named colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Default,
    Soft,
    Vibrant,
    Slate,
}

const SOFT: &[&str] = &[
    "#A36361", "#D3A29D", "#E8B298", "#EECC8C", "#BDD1C5", "#9EABA2", "#F2B8B5", "#F5D0C5", "#F7E2B7", "#DCEBDD",
    "#C8E1DC", "#EAD7F1",
];
const VIBRANT: &[&str] = &["#2563eb", "#10b981", "#f43f5e", "#f59e0b", "#22d3ee", "#8b5cf6", "#ef4444", "#0ea5e9"];
const SLATE: &[&str] = &["#475569", "#0ea5e9", "#64748b", "#94a3b8", "#334155", "#1e293b"];
const DEFAULT: &[&str] = &["#ffc800", "#58dda1", "#474747", "#000000", "#ffffff"];

/// Palette index used for simulators created from the PRO AM template.
pub const SIM_COLOR_INDEX_PRO_AM: usize = 5;

/// Palette index used for simulators created from the PRO template.
pub const SIM_COLOR_INDEX_PRO: usize = 0;

/// Ordered colours for `theme`. An absent theme uses the soft palette.
#[must_use]
pub fn palette(theme: Option<ThemeName>) -> &'static [&'static str] {
    match theme {
        Some(ThemeName::Vibrant) => VIBRANT,
        Some(ThemeName::Slate) => SLATE,
        Some(ThemeName::Default) => DEFAULT,
        Some(ThemeName::Soft) | None => SOFT,
    }
}

/// Palette colour at `index`, clamped into the palette's range.
#[must_use]
pub fn resolve_color(theme: Option<ThemeName>, index: usize) -> &'static str {
    let colors = palette(theme);
    colors[index.min(colors.len() - 1)]
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let digits = raw.trim().strip_prefix('#')?.as_bytes();
    let nibble = |i: usize| hex_digit(digits[i]);
    match digits.len() {
        3 => {
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Some((r * 17, g * 17, b * 17))
        }
        6 => Some((
            (nibble(0)? << 4) | nibble(1)?,
            (nibble(2)? << 4) | nibble(3)?,
            (nibble(4)? << 4) | nibble(5)?,
        )),
        _ => None,
    }
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Normalise a colour to lowercase `#rrggbb`, using `fallback` when `value` does not parse.
#[must_use]
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let (r, g, b) = parse_hex_rgb(value)
        .or_else(|| parse_hex_rgb(fallback))
        .unwrap_or((0xE8, 0xB2, 0x98));
    format!("#{r:02x}{g:02x}{b:02x}")
}
