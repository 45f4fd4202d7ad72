//! Color values for `fill`, `stroke` and `stop-color`.
//!
//! Colors are parsed into opaque [`RGB8`] values; alpha always comes from the
//! opacity properties and is attached afterwards with [`with_alpha`].
//!
//! The accepted formats are tried in this order:
//!
//! * `#RGB`, where each digit is duplicated, so `#F46` is the same as `#FF4466`.
//! * `#RRGGBB`.
//! * `rgb(r, g, b)` with three integers.
//! * An SVG color keyword like `cornflowerblue`.  Keywords are case-sensitive.
//! * A bare hexadecimal number like `ff0000`.

use crate::error::ColorError;
use crate::number_list::{NumberList, NumberListLength};
use crate::util;

pub use rgb::alt::ARGB8;
pub use rgb::RGB8;

/// A color with its alpha channel, as handed to the renderer.
pub type Color = ARGB8;

pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Attaches an alpha value to an opaque color.
#[inline]
pub fn with_alpha(rgb: RGB8, alpha: u8) -> Color {
    ARGB8 {
        a: alpha,
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Packs a color as `0xAARRGGBB`.
#[inline]
pub fn color_to_u32(color: Color) -> u32 {
    (u32::from(color.a) << 24)
        | (u32::from(color.r) << 16)
        | (u32::from(color.g) << 8)
        | u32::from(color.b)
}

#[inline]
fn rgb_from_u32(v: u32) -> RGB8 {
    RGB8::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Hook to recolor every parsed color, for example to apply a theme.
pub trait ColorMapper {
    fn map_color(&self, color: RGB8) -> RGB8;
}

impl<F> ColorMapper for F
where
    F: Fn(RGB8) -> RGB8,
{
    fn map_color(&self, color: RGB8) -> RGB8 {
        self(color)
    }
}

/// Parses a color string without applying any [`ColorMapper`].
pub fn parse_color(s: &str) -> Result<RGB8, ColorError> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        parse_hash_color(hex.trim()).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    } else if let Some(args) = s.strip_prefix("rgb(") {
        parse_rgb_args(args).ok_or_else(|| ColorError::InvalidRgb(s.to_string()))
    } else if let Some(rgb) = color_keyword(s) {
        Ok(rgb)
    } else {
        parse_bare_hex(s).ok_or_else(|| ColorError::UnknownColor(s.to_string()))
    }
}

fn parse_hash_color(hex: &str) -> Option<RGB8> {
    // from_str_radix() would also accept a leading sign
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let v = u16::from_str_radix(hex, 16).ok()?;
            let r = ((v >> 8) & 0xf) as u8;
            let g = ((v >> 4) & 0xf) as u8;
            let b = (v & 0xf) as u8;

            Some(RGB8::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }

        6 => u32::from_str_radix(hex, 16).ok().map(rgb_from_u32),

        _ => None,
    }
}

/// Parses what comes after `rgb(`, up to the closing parenthesis.
fn parse_rgb_args(args: &str) -> Option<RGB8> {
    let end = args.find(')')?;
    let NumberList(components) =
        NumberList::<i32>::parse_str(&args[..end], NumberListLength::Unbounded).ok()?;

    match components[..] {
        [r, g, b] => Some(RGB8::new(channel(r), channel(g), channel(b))),
        _ => None,
    }
}

fn channel(v: i32) -> u8 {
    util::clamp(v, 0, 255) as u8
}

fn color_keyword(name: &str) -> Option<RGB8> {
    // SVG keywords are all lowercase, and unlike CSS we match them case-sensitively.
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }

    // CSS additions that are not in the SVG 1.1 keyword table
    if matches!(name, "transparent" | "rebeccapurple") {
        return None;
    }

    match cssparser::parse_color_keyword(name) {
        Ok(cssparser::Color::RGBA(rgba)) => Some(RGB8::new(rgba.red, rgba.green, rgba.blue)),
        _ => None,
    }
}

fn parse_bare_hex(s: &str) -> Option<RGB8> {
    if s.is_empty() || s.len() > 8 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(s, 16).ok().map(rgb_from_u32)
}

/// Color parser with an optional [`ColorMapper`].
#[derive(Default)]
pub struct ColorParser {
    mapper: Option<Box<dyn ColorMapper>>,
}

impl ColorParser {
    pub fn new() -> ColorParser {
        ColorParser::default()
    }

    pub fn with_mapper(mapper: Box<dyn ColorMapper>) -> ColorParser {
        ColorParser {
            mapper: Some(mapper),
        }
    }

    pub fn has_mapper(&self) -> bool {
        self.mapper.is_some()
    }

    /// Parses a color and passes it through the mapper.
    pub fn parse(&self, s: &str) -> Result<RGB8, ColorError> {
        parse_color(s).map(|rgb| self.map(rgb))
    }

    /// Parses a color, or falls back to `default` if there is no string or it does not
    /// parse.  The result goes through the mapper in both cases.
    pub fn parse_or(&self, s: Option<&str>, default: RGB8) -> RGB8 {
        match s.map(parse_color) {
            Some(Ok(rgb)) => self.map(rgb),
            _ => self.map(default),
        }
    }

    fn map(&self, rgb: RGB8) -> RGB8 {
        match self.mapper {
            Some(ref mapper) => mapper.map_color(rgb),
            None => rgb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_short_hex() {
        assert_eq!(parse_color("#F46"), Ok(RGB8::new(0xff, 0x44, 0x66)));
        assert_eq!(parse_color("#f46"), parse_color("#FF4466"));
        assert_eq!(parse_color("#000"), Ok(BLACK));
    }

    #[test]
    fn parses_long_hex() {
        assert_eq!(parse_color("#112233"), Ok(RGB8::new(0x11, 0x22, 0x33)));
        assert_eq!(parse_color("  # abcdef "), Ok(RGB8::new(0xab, 0xcd, 0xef)));
    }

    #[test]
    fn invalid_hex_yields_error() {
        assert!(matches!(parse_color("#"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_color("#12"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_color("#1234"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_color("#xyz"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_color("#+12"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_color("#12345g"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn parses_rgb() {
        assert_eq!(parse_color("rgb(255, 0, 128)"), Ok(RGB8::new(255, 0, 128)));
        assert_eq!(parse_color("rgb(255,0,128)"), Ok(RGB8::new(255, 0, 128)));
        assert_eq!(parse_color("rgb( 255 ,  0 ,128 )"), Ok(RGB8::new(255, 0, 128)));
        assert_eq!(parse_color("rgb(255 0 128)"), Ok(RGB8::new(255, 0, 128)));
    }

    #[test]
    fn clamps_rgb_components() {
        assert_eq!(parse_color("rgb(300, -5, 10)"), Ok(RGB8::new(255, 0, 10)));
    }

    #[test]
    fn invalid_rgb_yields_error() {
        assert!(matches!(parse_color("rgb(1, 2)"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(parse_color("rgb(1, 2, 3, 4)"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(parse_color("rgb(1, 2, 3"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(parse_color("rgb(10%, 2, 3)"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(parse_color("rgb(1.5, 2, 3)"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(parse_color("rgb()"), Err(ColorError::InvalidRgb(_))));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse_color("red"), Ok(RGB8::new(255, 0, 0)));
        assert_eq!(parse_color("cornflowerblue"), Ok(RGB8::new(100, 149, 237)));
        assert_eq!(parse_color(" navy "), Ok(RGB8::new(0, 0, 128)));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert!(matches!(parse_color("Red"), Err(ColorError::UnknownColor(_))));
        assert!(matches!(parse_color("RED"), Err(ColorError::UnknownColor(_))));
    }

    #[test]
    fn css_only_keywords_are_not_colors() {
        assert!(parse_color("transparent").is_err());
        assert!(parse_color("currentcolor").is_err());
        assert_eq!(
            parse_color("rebeccapurple"),
            Err(ColorError::UnknownColor("rebeccapurple".to_string()))
        );
    }

    #[test]
    fn falls_back_to_bare_hex() {
        assert_eq!(parse_color("ff0000"), Ok(RGB8::new(255, 0, 0)));
        assert_eq!(parse_color("bad"), Ok(RGB8::new(0x00, 0x0b, 0xad)));
        assert_eq!(parse_color("80ff0000"), Ok(RGB8::new(255, 0, 0)));
    }

    #[test]
    fn unknown_color_yields_error() {
        assert!(matches!(parse_color(""), Err(ColorError::UnknownColor(_))));
        assert!(matches!(parse_color("foo"), Err(ColorError::UnknownColor(_))));
        assert!(matches!(parse_color("-ff"), Err(ColorError::UnknownColor(_))));
        assert!(matches!(parse_color("123456789"), Err(ColorError::UnknownColor(_))));
        assert!(matches!(parse_color("url(#foo)"), Err(ColorError::UnknownColor(_))));
    }

    #[test]
    fn attaches_alpha() {
        let c = with_alpha(RGB8::new(0x11, 0x22, 0x33), 0x80);
        assert_eq!(c.a, 0x80);
        assert_eq!(color_to_u32(c), 0x8011_2233);
    }

    #[test]
    fn mapper_applies_to_parsed_colors() {
        let parser =
            ColorParser::with_mapper(Box::new(|c: RGB8| RGB8::new(c.b, c.g, c.r)));

        assert!(parser.has_mapper());
        assert_eq!(parser.parse("#102030"), Ok(RGB8::new(0x30, 0x20, 0x10)));
        assert!(parser.parse("nonsense").is_err());
    }

    #[test]
    fn parse_or_maps_the_default() {
        let parser = ColorParser::with_mapper(Box::new(|_: RGB8| RGB8::new(1, 2, 3)));
        assert_eq!(parser.parse_or(None, BLACK), RGB8::new(1, 2, 3));
        assert_eq!(parser.parse_or(Some("junk"), BLACK), RGB8::new(1, 2, 3));

        let parser = ColorParser::new();
        assert_eq!(parser.parse_or(None, BLACK), BLACK);
        assert_eq!(parser.parse_or(Some("blue"), BLACK), RGB8::new(0, 0, 255));
    }

    proptest! {
        #[test]
        fn short_hex_duplicates_each_digit(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
            let short = format!("#{:X}{:X}{:X}", r, g, b);
            let long = format!("#{:X}{:X}{:X}{:X}{:X}{:X}", r, r, g, g, b, b);

            prop_assert!(parse_color(&short).is_ok());
            prop_assert_eq!(parse_color(&short), parse_color(&long));
        }
    }
}
