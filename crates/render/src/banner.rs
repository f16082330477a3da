//! Banner rasterization
//!
//! Draws laid-out text onto a solid canvas and encodes it as PNG.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::debug;

use crate::color::Rgba;
use crate::error::{RenderError, RenderResult};
use crate::font::BannerFont;
use crate::layout::{for_each_pen, layout_lines, Align, LayoutStyle};

/// Default canvas width
pub const DEFAULT_WIDTH: u32 = 800;

/// Default canvas height
pub const DEFAULT_HEIGHT: u32 = 500;

/// Largest accepted canvas side
pub const MAX_DIMENSION: u32 = 16_384;

/// Largest accepted line spacing factor
pub const MAX_LINE_SPACING: f32 = 10.0;

/// Everything needed to draw a banner, apart from the font
#[derive(Debug, Clone, PartialEq)]
pub struct BannerSpec {
    pub text: String,
    pub background: Rgba,
    pub foreground: Rgba,
    pub align: Align,
    pub padding: f32,
    pub line_spacing: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for BannerSpec {
    fn default() -> Self {
        Self {
            text: String::new(),
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

impl BannerSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn layout_style(&self) -> LayoutStyle {
        LayoutStyle {
            align: self.align,
            padding: self.padding,
            line_spacing: self.line_spacing,
        }
    }

    /// Check canvas and spacing parameters
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidSpec(format!(
                "canvas must not be empty ({}x{})",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(RenderError::InvalidSpec(format!(
                "canvas {}x{} exceeds {}px",
                self.width, self.height, MAX_DIMENSION
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(RenderError::InvalidSpec(format!("padding {}", self.padding)));
        }
        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 || self.line_spacing > MAX_LINE_SPACING {
            return Err(RenderError::InvalidSpec(format!(
                "line spacing {}",
                self.line_spacing
            )));
        }
        Ok(())
    }
}

/// Draw one line with its origin at (x, y), clipped to the canvas
pub fn draw_text(image: &mut RgbaImage, font: &mut BannerFont, text: &str, x: f32, y: f32, color: Rgba) {
    // i64 so far-off origins (huge padding) cannot overflow
    let (ox, oy) = (x.floor() as i64, y.floor() as i64);
    let (w, h) = (image.width() as i64, image.height() as i64);

    for_each_pen(font, text, |font, c, pen| {
        let glyph = font.rasterize(c);
        let gw = glyph.width as usize;
        if gw == 0 {
            return;
        }
        let gx = ox.saturating_add(pen as i64 + glyph.left as i64);
        let gy = oy.saturating_add(glyph.top as i64);
        let (right, bottom) = (gx.saturating_add(gw as i64), gy.saturating_add(glyph.height as i64));
        if gx >= w || gy >= h || right <= 0 || bottom <= 0 {
            return;
        }

        for (row, line) in glyph.coverage.chunks(gw).enumerate() {
            let py = gy + row as i64;
            if py < 0 || py >= h {
                continue;
            }
            for (col, &coverage) in line.iter().enumerate() {
                let px = gx + col as i64;
                if coverage == 0 || px < 0 || px >= w {
                    continue;
                }
                let pixel = image.get_pixel_mut(px as u32, py as u32);
                *pixel = Rgba::from(*pixel).blend(color, coverage).into();
            }
        }
    });
}

/// Rasterize a banner
pub fn render_banner(spec: &BannerSpec, font: &mut BannerFont) -> RenderResult<RgbaImage> {
    spec.validate()?;

    let mut image = RgbaImage::from_pixel(spec.width, spec.height, spec.background.into());
    let lines = layout_lines(font, &spec.text, &spec.layout_style(), spec.width, spec.height);
    debug!(
        "Rendering {} line(s) on {}x{} canvas",
        lines.len(),
        spec.width,
        spec.height
    );

    for line in &lines {
        draw_text(&mut image, font, &line.text, line.x, line.y, spec.foreground);
    }

    Ok(image)
}

/// Rasterize a banner and encode it as PNG
pub fn render_banner_png(spec: &BannerSpec, font: &mut BannerFont) -> RenderResult<Vec<u8>> {
    let image = render_banner(spec, font)?;
    encode_png(image)
}

/// Encode an image as an RGB PNG
pub fn encode_png(image: RgbaImage) -> RenderResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(image).to_rgb8();
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    debug!("Encoded {} PNG bytes", bytes.len());
    Ok(bytes)
}

/// Preview-area image shown before any design has been rendered
pub fn render_placeholder(family: &str, font: &mut BannerFont) -> RgbaImage {
    let background = Rgba::rgb(0xF0, 0xF2, 0xF6);
    let rows = [
        ("DESIGN PREVIEW AREA".to_string(), 150.0, Rgba::rgb(0x4A, 0x00, 0xE0)),
        ("Enter text and run".to_string(), 220.0, Rgba::rgb(0x66, 0x66, 0x66)),
        ("'placard render'".to_string(), 270.0, Rgba::rgb(0x8E, 0x2D, 0xE2)),
        (format!("Font: {}", family), 350.0, Rgba::rgb(0x88, 0x88, 0x88)),
    ];

    let mut image = RgbaImage::from_pixel(DEFAULT_WIDTH, DEFAULT_HEIGHT, background.into());
    for (text, y, color) in &rows {
        draw_text(&mut image, font, text, 100.0, *y, *color);
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> BannerFont {
        BannerFont::builtin(32.0, false)
    }

    fn count_pixels(image: &RgbaImage, color: Rgba) -> usize {
        let target: image::Rgba<u8> = color.into();
        image.pixels().filter(|p| **p == target).count()
    }

    #[test]
    fn test_background_only_for_blank_text() {
        let mut spec = BannerSpec::new("  \n\n");
        spec.background = Rgba::rgb(0x2C, 0x3E, 0x50);
        let image = render_banner(&spec, &mut font()).unwrap();

        assert_eq!(image.dimensions(), (800, 500));
        assert_eq!(count_pixels(&image, spec.background), 800 * 500);
    }

    #[test]
    fn test_text_is_drawn() {
        let spec = BannerSpec {
            foreground: Rgba::rgb(255, 0, 0),
            ..BannerSpec::new("DESIGN YOUR VISION")
        };
        let image = render_banner(&spec, &mut font()).unwrap();
        assert!(count_pixels(&image, spec.background) < 800 * 500);
        assert!(image.pixels().any(|p| p[0] > 200 && p[1] < 100));
    }

    #[test]
    fn test_left_alignment_respects_padding() {
        let spec = BannerSpec {
            padding: 120.0,
            ..BannerSpec::new("MMMM")
        };
        let image = render_banner(&spec, &mut font()).unwrap();
        let white: image::Rgba<u8> = Rgba::white().into();
        let first_ink = image
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != white)
            .map(|(x, _, _)| x)
            .min()
            .unwrap();
        assert!(first_ink >= 120);
    }

    #[test]
    fn test_overflowing_text_is_clipped() {
        let spec = BannerSpec {
            width: 40,
            height: 20,
            padding: 0.0,
            ..BannerSpec::new("A VERY LONG LINE THAT DOES NOT FIT")
        };
        let image = render_banner(&spec, &mut font()).unwrap();
        assert_eq!(image.dimensions(), (40, 20));
    }

    #[test]
    fn test_huge_padding_draws_off_canvas() {
        for align in [Align::Left, Align::Right] {
            let spec = BannerSpec {
                padding: 1.0e10,
                align,
                ..BannerSpec::new("HI")
            };
            spec.validate().unwrap();
            let image = render_banner(&spec, &mut font()).unwrap();
            assert_eq!(count_pixels(&image, spec.background), 800 * 500);
        }
    }

    #[test]
    fn test_draw_text_far_origin() {
        let mut image = RgbaImage::from_pixel(10, 10, Rgba::white().into());
        draw_text(&mut image, &mut font(), "XYZ", f32::MAX, f32::MIN, Rgba::black());
        draw_text(&mut image, &mut font(), "XYZ", -1.0e12, 0.0, Rgba::black());
        assert_eq!(count_pixels(&image, Rgba::white()), 100);
    }

    #[test]
    fn test_outline_font_banner() {
        let mut outline = BannerFont::from_bytes(crate::font::TEST_FONT_DATA, 72.0).unwrap();
        let spec = BannerSpec {
            align: Align::Center,
            ..BannerSpec::new("HELLO\nWORLD")
        };
        let image = render_banner(&spec, &mut outline).unwrap();

        let white: image::Rgba<u8> = Rgba::white().into();
        let inked: Vec<(u32, u32)> = image
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != white)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!inked.is_empty());

        // centered block stays clear of the canvas edges
        let min_x = inked.iter().map(|p| p.0).min().unwrap();
        let max_x = inked.iter().map(|p| p.0).max().unwrap();
        let min_y = inked.iter().map(|p| p.1).min().unwrap();
        let max_y = inked.iter().map(|p| p.1).max().unwrap();
        assert!(min_x > 100 && max_x < 700);
        assert!(min_y > 50 && max_y < 450);
    }

    #[test]
    fn test_invalid_specs() {
        let mut font = font();
        let zero = BannerSpec {
            width: 0,
            ..BannerSpec::new("x")
        };
        assert!(matches!(render_banner(&zero, &mut font), Err(RenderError::InvalidSpec(_))));

        let spacing = BannerSpec {
            line_spacing: 0.0,
            ..BannerSpec::new("x")
        };
        assert!(render_banner(&spacing, &mut font).is_err());

        let padding = BannerSpec {
            padding: f32::NAN,
            ..BannerSpec::new("x")
        };
        assert!(render_banner(&padding, &mut font).is_err());
    }

    #[test]
    fn test_png_output() {
        let bytes = render_banner_png(&BannerSpec::new("PNG"), &mut font()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 800);
        assert_eq!(decoded.height(), 500);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let spec = BannerSpec::new("SAME\nINPUT");
        let a = render_banner_png(&spec, &mut font()).unwrap();
        let b = render_banner_png(&spec, &mut font()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_placeholder_outline_rows_fit() {
        let mut outline = BannerFont::from_bytes(crate::font::TEST_FONT_DATA, 48.0).unwrap();
        let image = render_placeholder("Arial Bold", &mut outline);
        let background: image::Rgba<u8> = Rgba::rgb(0xF0, 0xF2, 0xF6).into();

        let inked: Vec<(u32, u32)> = image
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != background)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(inked.iter().all(|&(x, _)| x >= 100));
        // first row starts at 150, the last (350) ends well inside the canvas
        assert!(inked.iter().all(|&(_, y)| (150..450).contains(&y)));
        // 48px caps are taller than the 32px bitmap raster
        let first_row = inked.iter().filter(|p| p.1 < 210).map(|p| p.1);
        let (top, bottom) = first_row.fold((u32::MAX, 0), |(t, b), y| (t.min(y), b.max(y)));
        assert!(bottom - top > 30);
    }

    #[test]
    fn test_placeholder() {
        let image = render_placeholder("Arial Bold", &mut font());
        assert_eq!(image.dimensions(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert!(count_pixels(&image, Rgba::rgb(0xF0, 0xF2, 0xF6)) < 800 * 500);
    }
}
