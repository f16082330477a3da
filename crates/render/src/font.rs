//! Font rendering
//!
//! Glyph rasterization for outline fonts (fontdue) and the built-in
//! bitmap font (Noto Sans Mono bitmaps).

use std::fmt;

use fontdue::{Font, FontSettings};
use noto_sans_mono_bitmap::{get_raster, FontWeight, RasterHeight};
use rustc_hash::FxHashMap;

use crate::error::{RenderError, RenderResult};

/// Smallest pixel size accepted for outline fonts
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Raster heights shipped with the built-in font, ascending
const BITMAP_HEIGHTS: [RasterHeight; 4] = [
    RasterHeight::Size16,
    RasterHeight::Size20,
    RasterHeight::Size24,
    RasterHeight::Size32,
];

/// A rasterized glyph
///
/// `left` and `top` place the coverage bitmap relative to the pen position
/// on the line origin, which is the ascender line of the font.
#[derive(Debug, Clone, Default)]
pub struct Glyph {
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, one byte per pixel
    pub coverage: Vec<u8>,
    pub advance: f32,
    pub left: i32,
    pub top: i32,
}

impl Glyph {
    /// Whether any pixel of the glyph is inked
    pub fn has_ink(&self) -> bool {
        self.coverage.iter().any(|&c| c > 0)
    }

    /// Tight bounds of inked pixels as (min_x, min_y, max_x, max_y), exclusive max
    pub fn ink_bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let (w, h) = (self.width as usize, self.height as usize);
        if w == 0 || h == 0 {
            return None;
        }
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for (y, row) in self.coverage.chunks(w).take(h).enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c == 0 {
                    continue;
                }
                let (x, y) = (x as i32, y as i32);
                bounds = Some(match bounds {
                    None => (x, y, x + 1, y + 1),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1)),
                });
            }
        }
        bounds
    }
}

/// Where glyphs come from
enum Face {
    Outline { font: Font, size: f32 },
    Bitmap { weight: FontWeight, height: RasterHeight },
}

/// A font at a fixed pixel size, with a per-character glyph cache
pub struct BannerFont {
    face: Face,
    glyph_cache: FxHashMap<char, Glyph>,
}

impl BannerFont {
    /// Parse an outline font (TrueType/OpenType) at a pixel size
    pub fn from_bytes(data: &[u8], size: f32) -> RenderResult<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|e| RenderError::FontParse {
            path: "<memory>".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            face: Face::Outline {
                font,
                size: clamp_size(size),
            },
            glyph_cache: FxHashMap::default(),
        })
    }

    /// The built-in bitmap font at the raster height closest to `size`
    ///
    /// Bitmaps are never scaled: the largest height not above `size` is
    /// chosen, or the smallest one when `size` is below all of them.
    pub fn builtin(size: f32, bold: bool) -> Self {
        let height = BITMAP_HEIGHTS
            .iter()
            .rev()
            .copied()
            .find(|h| *h as usize as f32 <= size)
            .unwrap_or(BITMAP_HEIGHTS[0]);
        let weight = if bold { FontWeight::Bold } else { FontWeight::Regular };

        Self {
            face: Face::Bitmap { weight, height },
            glyph_cache: FxHashMap::default(),
        }
    }

    /// Whether this is the built-in bitmap font
    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Bitmap { .. })
    }

    /// Pixel size glyphs are produced at
    pub fn size(&self) -> f32 {
        match &self.face {
            Face::Outline { size, .. } => *size,
            Face::Bitmap { height, .. } => *height as usize as f32,
        }
    }

    /// Distance from the line origin to the baseline
    pub fn ascent(&self) -> f32 {
        match &self.face {
            Face::Outline { font, size } => match font.horizontal_line_metrics(*size) {
                Some(m) => m.ascent,
                None => size * 0.8,
            },
            Face::Bitmap { height, .. } => *height as usize as f32 * 0.8,
        }
    }

    /// Rasterize a character, caching the result
    pub fn rasterize(&mut self, c: char) -> &Glyph {
        if !self.glyph_cache.contains_key(&c) {
            let glyph = self.rasterize_uncached(c);
            self.glyph_cache.insert(c, glyph);
        }
        &self.glyph_cache[&c]
    }

    fn rasterize_uncached(&self, c: char) -> Glyph {
        match &self.face {
            Face::Outline { font, size } => {
                let (metrics, coverage) = font.rasterize(c, *size);
                let top = self.ascent().round() as i32 - (metrics.ymin + metrics.height as i32);
                Glyph {
                    width: metrics.width as u32,
                    height: metrics.height as u32,
                    coverage,
                    advance: metrics.advance_width,
                    left: metrics.xmin,
                    top,
                }
            }
            Face::Bitmap { weight, height } => {
                let Some(raster) =
                    get_raster(c, *weight, *height).or_else(|| get_raster('\u{fffd}', *weight, *height))
                else {
                    return Glyph::default();
                };
                let rows = raster.raster();
                Glyph {
                    width: raster.width() as u32,
                    height: raster.height() as u32,
                    coverage: rows.iter().flat_map(|row| row.iter().copied()).collect(),
                    advance: raster.width() as f32,
                    left: 0,
                    top: 0,
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn cached_glyphs(&self) -> usize {
        self.glyph_cache.len()
    }
}

/// Outline font fixture for tests
#[cfg(test)]
pub(crate) const TEST_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSans.ttf");

impl fmt::Debug for BannerFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_builtin() { "builtin" } else { "outline" };
        f.debug_struct("BannerFont")
            .field("kind", &kind)
            .field("size", &self.size())
            .finish()
    }
}

fn clamp_size(size: f32) -> f32 {
    if size.is_finite() {
        size.max(MIN_FONT_SIZE)
    } else {
        MIN_FONT_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_height_selection() {
        assert_eq!(BannerFont::builtin(72.0, false).size(), 32.0);
        assert_eq!(BannerFont::builtin(24.0, false).size(), 24.0);
        assert_eq!(BannerFont::builtin(21.5, true).size(), 20.0);
        assert_eq!(BannerFont::builtin(4.0, false).size(), 16.0);
    }

    #[test]
    fn test_rasterize_builtin() {
        let mut font = BannerFont::builtin(32.0, false);
        let glyph = font.rasterize('A');
        assert_eq!(glyph.height, 32);
        assert!(glyph.width > 0);
        assert_eq!(glyph.coverage.len(), (glyph.width * glyph.height) as usize);
        assert!(glyph.has_ink());
        assert_eq!(glyph.advance, glyph.width as f32);
    }

    #[test]
    fn test_space_has_no_ink() {
        let mut font = BannerFont::builtin(20.0, false);
        let glyph = font.rasterize(' ');
        assert!(!glyph.has_ink());
        assert!(glyph.ink_bounds().is_none());
        assert!(glyph.advance > 0.0);
    }

    #[test]
    fn test_missing_char_uses_replacement() {
        let mut font = BannerFont::builtin(20.0, false);
        let replacement = font.rasterize('\u{fffd}').coverage.clone();
        let missing = font.rasterize('\u{4e2d}').coverage.clone();
        assert_eq!(missing, replacement);
    }

    #[test]
    fn test_glyph_caching() {
        let mut font = BannerFont::builtin(20.0, false);
        font.rasterize('X');
        assert_eq!(font.cached_glyphs(), 1);
        font.rasterize('X');
        assert_eq!(font.cached_glyphs(), 1);
        font.rasterize('Y');
        assert_eq!(font.cached_glyphs(), 2);
    }

    #[test]
    fn test_outline_font() {
        let font = BannerFont::from_bytes(TEST_FONT_DATA, 72.0).unwrap();
        assert!(!font.is_builtin());
        assert_eq!(font.size(), 72.0);
        assert!(font.ascent() > 50.0 && font.ascent() < 72.0);
    }

    #[test]
    fn test_outline_glyph_sits_on_baseline() {
        let mut font = BannerFont::from_bytes(TEST_FONT_DATA, 72.0).unwrap();
        let baseline = font.ascent().round() as i32;
        let glyph = font.rasterize('H').clone();

        assert!(glyph.has_ink());
        assert!(glyph.top > 0);
        assert!((glyph.top + glyph.height as i32 - baseline).abs() <= 1);
        assert!(glyph.advance > glyph.width as f32 * 0.9);

        // descender reaches below the baseline
        let g = font.rasterize('g').clone();
        assert!(g.top + g.height as i32 > baseline + 5);
    }

    #[test]
    fn test_outline_space() {
        let mut font = BannerFont::from_bytes(TEST_FONT_DATA, 40.0).unwrap();
        let glyph = font.rasterize(' ');
        assert!(!glyph.has_ink());
        assert!(glyph.advance > 0.0);
    }

    #[test]
    fn test_invalid_outline_data() {
        let err = BannerFont::from_bytes(b"not a font", 40.0).unwrap_err();
        assert!(matches!(err, RenderError::FontParse { .. }));
    }

    #[test]
    fn test_clamp_size() {
        assert_eq!(clamp_size(-3.0), MIN_FONT_SIZE);
        assert_eq!(clamp_size(f32::NAN), MIN_FONT_SIZE);
        assert_eq!(clamp_size(72.0), 72.0);
    }
}
