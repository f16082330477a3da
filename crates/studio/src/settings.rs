//! Design settings
//!
//! The user-facing description of a banner, loadable from JSON.

use std::fs;
use std::path::Path;

use placard_render::{Align, BannerSpec, Rgba, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};

/// Accepted font sizes
pub const FONT_SIZE_RANGE: (u32, u32) = (40, 150);

/// Accepted padding
pub const PADDING_RANGE: (f32, f32) = (20.0, 150.0);

/// Accepted line spacing factors
pub const LINE_SPACING_RANGE: (f32, f32) = (1.0, 3.0);

/// Text shown before the user types anything
pub const DEFAULT_TEXT: &str = "DESIGN YOUR VISION";

/// Family selected before the user picks one
pub const DEFAULT_FONT: &str = "Arial Bold";

/// A banner design as the user describes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    pub text: String,
    pub font: String,
    pub font_size: u32,
    #[serde(with = "text_value")]
    pub background: Rgba,
    #[serde(with = "text_value")]
    pub foreground: Rgba,
    #[serde(with = "text_value")]
    pub align: Align,
    pub padding: f32,
    pub line_spacing: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            font: DEFAULT_FONT.to_string(),
            font_size: 72,
            background: Rgba::white(),
            foreground: Rgba::black(),
            align: Align::Left,
            padding: 50.0,
            line_spacing: 1.5,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl DesignSettings {
    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> StudioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> StudioResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the text and the slider ranges
    pub fn validate(&self) -> StudioResult<()> {
        if self.text.is_empty() {
            return Err(StudioError::EmptyText);
        }
        check_range("font size", self.font_size as f32, (FONT_SIZE_RANGE.0 as f32, FONT_SIZE_RANGE.1 as f32))?;
        check_range("padding", self.padding, PADDING_RANGE)?;
        check_range("line spacing", self.line_spacing, LINE_SPACING_RANGE)?;
        Ok(())
    }

    /// Validate and convert to a render spec
    pub fn banner_spec(&self) -> StudioResult<BannerSpec> {
        self.validate()?;
        let spec = BannerSpec {
            text: self.text.clone(),
            background: self.background,
            foreground: self.foreground,
            align: self.align,
            padding: self.padding,
            line_spacing: self.line_spacing,
            width: self.width,
            height: self.height,
        };
        spec.validate()?;
        Ok(spec)
    }
}

fn check_range(field: &'static str, value: f32, (min, max): (f32, f32)) -> StudioResult<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(StudioError::OutOfRange { field, value, min, max })
    }
}

/// Serialize through `Display`, deserialize through `FromStr`
mod text_value {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
