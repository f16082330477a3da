//! Placard Studio
//!
//! Design settings, font catalog, templates and the design session.

mod advice;
mod catalog;
mod error;
mod palette;
mod session;
mod settings;
mod template;

pub use advice::{analysis_prompt, SizeAdvice};
pub use catalog::{families, lookup, resolve_family, FontCategory, FontFamily, FontFilter, FONT_CATALOG};
pub use error::{StudioError, StudioResult};
pub use palette::{
    pick_scheme, random_text, ColorScheme, SchemeKind, HIGH_CONTRAST_SCHEMES, RANDOM_TEXTS, SUGGESTED_SCHEMES,
};
pub use session::{Design, DesignSession};
pub use settings::{
    DesignSettings, DEFAULT_FONT, DEFAULT_TEXT, FONT_SIZE_RANGE, LINE_SPACING_RANGE, PADDING_RANGE,
};
pub use template::{Preset, Template};
