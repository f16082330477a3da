//! Local design advice and the remote analysis prompt

use std::fmt;

use crate::settings::DesignSettings;

/// Verdict on the chosen font size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeAdvice {
    /// Above 80px
    Great,
    /// Above 50px
    Good,
    Small,
}

impl SizeAdvice {
    pub fn for_size(font_size: u32) -> Self {
        if font_size > 80 {
            SizeAdvice::Great
        } else if font_size > 50 {
            SizeAdvice::Good
        } else {
            SizeAdvice::Small
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SizeAdvice::Great => "Great! Large font size is perfect for banners and headers.",
            SizeAdvice::Good => "Good size - clear and readable for most purposes.",
            SizeAdvice::Small => "Consider increasing the font size for better visibility.",
        }
    }
}

impl fmt::Display for SizeAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Prompt sent to the remote assistant for design feedback
pub fn analysis_prompt(settings: &DesignSettings) -> String {
    format!(
        "Design analysis for: '{}' with {}px {} font, {} background and {} text. Is the font size appropriate?",
        settings.text, settings.font_size, settings.font, settings.background, settings.foreground
    )
}
