use super::*;

// =============================================================
// parse_hex_rgb
// =============================================================

#[test]
fn parses_six_digit_hex() {
    assert_eq!(parse_hex_rgb("#ff8000"), Some((255, 128, 0)));
    assert_eq!(parse_hex_rgb("#000000"), Some((0, 0, 0)));
}

#[test]
fn parses_three_digit_shorthand() {
    assert_eq!(parse_hex_rgb("#f80"), Some((255, 136, 0)));
    assert_eq!(parse_hex_rgb("#fff"), Some((255, 255, 255)));
}

#[test]
fn parses_uppercase_and_whitespace() {
    assert_eq!(parse_hex_rgb("  #FF00AA  "), Some((255, 0, 170)));
}

#[test]
fn rejects_missing_hash_and_bad_lengths() {
    assert_eq!(parse_hex_rgb("ff8000"), None);
    assert_eq!(parse_hex_rgb("#ff80"), None);
    assert_eq!(parse_hex_rgb("#gggggg"), None);
    assert_eq!(parse_hex_rgb(""), None);
}

// =============================================================
// normalize_hex_color
// =============================================================

#[test]
fn normalizes_to_lowercase_long_form() {
    assert_eq!(normalize_hex_color("#FF00AA", "#000000"), "#ff00aa");
    assert_eq!(normalize_hex_color("#f0a", "#000000"), "#ff00aa");
}

#[test]
fn falls_back_on_invalid_input() {
    assert_eq!(normalize_hex_color("garbage", "#112233"), "#112233");
    assert_eq!(normalize_hex_color("garbage", "also-garbage"), "#000000");
}

// =============================================================
// rgba_from_hex
// =============================================================

#[test]
fn converts_to_engine_color() {
    let rgba = rgba_from_hex("#ff8000");
    assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (255, 128, 0, 255));
}

#[test]
fn unparseable_color_is_black() {
    let rgba = rgba_from_hex("nope");
    assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0, 0, 0, 255));
}
