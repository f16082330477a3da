//! Quick-start templates

use std::fmt;
use std::str::FromStr;

use placard_render::Rgba;

use crate::error::StudioError;
use crate::settings::DesignSettings;

/// A named preset of colors, family and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Custom,
    ModernBusiness,
    CreativeArts,
    TechStartup,
    Elegant,
    BoldAndBright,
    LargeText,
}

/// Values a template sets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub background: Rgba,
    pub foreground: Rgba,
    pub font: &'static str,
    pub font_size: u32,
}

impl Template {
    pub const ALL: [Template; 7] = [
        Template::Custom,
        Template::ModernBusiness,
        Template::CreativeArts,
        Template::TechStartup,
        Template::Elegant,
        Template::BoldAndBright,
        Template::LargeText,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Template::Custom => "Custom",
            Template::ModernBusiness => "Modern Business",
            Template::CreativeArts => "Creative Arts",
            Template::TechStartup => "Tech Startup",
            Template::Elegant => "Elegant",
            Template::BoldAndBright => "Bold & Bright",
            Template::LargeText => "Large Text",
        }
    }

    /// The preset, or `None` for `Custom`
    pub fn preset(self) -> Option<Preset> {
        let preset = |bg: Rgba, fg: Rgba, font: &'static str, font_size: u32| Preset {
            background: bg,
            foreground: fg,
            font,
            font_size,
        };
        match self {
            Template::Custom => None,
            Template::ModernBusiness => Some(preset(
                Rgba::rgb(0x2C, 0x3E, 0x50),
                Rgba::rgb(0xEC, 0xF0, 0xF1),
                "Arial Bold",
                72,
            )),
            Template::CreativeArts => Some(preset(Rgba::rgb(0x9B, 0x59, 0xB6), Rgba::white(), "Impact", 68)),
            Template::TechStartup => Some(preset(Rgba::rgb(0x34, 0x98, 0xDB), Rgba::white(), "Courier New", 64)),
            Template::Elegant => Some(preset(
                Rgba::rgb(0x7F, 0x8C, 0x8D),
                Rgba::rgb(0xF7, 0xF9, 0xF9),
                "Georgia",
                70,
            )),
            Template::BoldAndBright => Some(preset(Rgba::rgb(0xE7, 0x4C, 0x3C), Rgba::white(), "Impact", 80)),
            Template::LargeText => Some(preset(Rgba::black(), Rgba::white(), "Arial Bold", 100)),
        }
    }

    /// Overwrite colors, family and size with the preset values
    pub fn apply(self, settings: &mut DesignSettings) {
        if let Some(preset) = self.preset() {
            settings.background = preset.background;
            settings.foreground = preset.foreground;
            settings.font = preset.font.to_string();
            settings.font_size = preset.font_size;
        }
    }
}

impl FromStr for Template {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = |name: &str| {
            name.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = key(s);
        Template::ALL
            .into_iter()
            .find(|t| key(t.name()) == wanted)
            .ok_or_else(|| StudioError::UnknownTemplate(s.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
