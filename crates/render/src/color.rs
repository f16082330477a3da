//! Paint colors
//!
//! RGBA colors, hex/name parsing and coverage blending.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// Color for rendering (RGBA)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse a hex color string, with or without the leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Get a named color
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "black" => Some(Self::rgb(0, 0, 0)),
            "white" => Some(Self::rgb(255, 255, 255)),
            "red" => Some(Self::rgb(255, 0, 0)),
            "lime" => Some(Self::rgb(0, 255, 0)),
            "green" => Some(Self::rgb(0, 128, 0)),
            "blue" => Some(Self::rgb(0, 0, 255)),
            "navy" => Some(Self::rgb(0, 0, 128)),
            "yellow" => Some(Self::rgb(255, 255, 0)),
            "gold" => Some(Self::rgb(255, 215, 0)),
            "orange" => Some(Self::rgb(255, 165, 0)),
            "purple" => Some(Self::rgb(128, 0, 128)),
            "cyan" | "aqua" => Some(Self::rgb(0, 255, 255)),
            "magenta" | "fuchsia" => Some(Self::rgb(255, 0, 255)),
            "gray" | "grey" => Some(Self::rgb(128, 128, 128)),
            "silver" => Some(Self::rgb(192, 192, 192)),
            "maroon" => Some(Self::rgb(128, 0, 0)),
            "olive" => Some(Self::rgb(128, 128, 0)),
            "teal" => Some(Self::rgb(0, 128, 128)),
            _ => None,
        }
    }

    /// Parse either a hex color or a color name
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_hex(s).or_else(|| Self::from_name(s))
    }

    /// `#RRGGBB`, alpha dropped
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Source-over blend of `src` onto `self` at the given coverage (0..=255)
    pub fn blend(self, src: Rgba, coverage: u8) -> Rgba {
        let alpha = (coverage as u32 * src.a as u32 + 127) / 255;
        if alpha == 0 {
            return self;
        }
        let mix = |d: u8, s: u8| ((s as u32 * alpha + d as u32 * (255 - alpha) + 127) / 255) as u8;
        Rgba::new(
            mix(self.r, src.r),
            mix(self.g, src.g),
            mix(self.b, src.b),
            (alpha + self.a as u32 * (255 - alpha) / 255).min(255) as u8,
        )
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

impl FromStr for Rgba {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RenderError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(c: Rgba) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<image::Rgba<u8>> for Rgba {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(Rgba::from_hex("#2C3E50"), Some(Rgba::rgb(0x2C, 0x3E, 0x50)));
        assert_eq!(Rgba::from_hex("ecf0f1"), Some(Rgba::rgb(0xEC, 0xF0, 0xF1)));
        assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::white()));
        assert_eq!(Rgba::from_hex("#00000080"), Some(Rgba::new(0, 0, 0, 0x80)));
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_hex_rejects_signs() {
        assert_eq!(Rgba::from_hex("#+f+f+f"), None);
        assert_eq!(Rgba::from_hex("+fff"), None);
        assert_eq!(Rgba::from_hex("#-1-1-1"), None);
        assert!("#+f+f+f".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_parse_name_and_errors() {
        assert_eq!("Navy".parse::<Rgba>().unwrap(), Rgba::rgb(0, 0, 128));
        assert!(matches!(
            "notacolor".parse::<Rgba>(),
            Err(RenderError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::rgb(255, 215, 0).to_hex(), "#FFD700");
        assert_eq!(Rgba::rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_blend() {
        let bg = Rgba::white();
        assert_eq!(bg.blend(Rgba::black(), 0), bg);
        assert_eq!(bg.blend(Rgba::black(), 255), Rgba::black());

        let half = bg.blend(Rgba::black(), 128);
        assert!(half.r > 120 && half.r < 135);
        assert_eq!(half.a, 255);
    }
}
