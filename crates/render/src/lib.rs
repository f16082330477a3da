//! Placard Render Engine
//!
//! Font resolution, text layout and banner rasterization.

mod banner;
mod color;
mod error;
mod font;
mod layout;
mod locate;

pub use banner::{
    draw_text, encode_png, render_banner, render_banner_png, render_placeholder, BannerSpec, DEFAULT_HEIGHT,
    DEFAULT_WIDTH, MAX_DIMENSION, MAX_LINE_SPACING,
};
pub use color::Rgba;
pub use error::{RenderError, RenderResult};
pub use font::{BannerFont, Glyph, MIN_FONT_SIZE};
pub use layout::{layout_lines, measure, Align, LayoutStyle, PlacedLine, TextExtent};
pub use locate::{candidate_files, resolve_font, system_font_dirs, FontLocator, FontSource, ResolvedFont};
