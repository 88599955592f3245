//! Shared color normalization helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use canvas::surface::Rgba;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Normalize a color to canonical lowercase `#rrggbb`.
pub fn normalize_hex_color(value: &str, fallback: &str) -> String {
    let fallback_rgb = parse_hex_rgb(fallback).unwrap_or((0, 0, 0));
    let (r, g, b) = parse_hex_rgb(value).unwrap_or(fallback_rgb);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Convert a hex color to the engine's color type. Unparseable input is black.
pub fn rgba_from_hex(value: &str) -> Rgba {
    let (r, g, b) = parse_hex_rgb(value).unwrap_or((0, 0, 0));
    Rgba::opaque(r, g, b)
}
