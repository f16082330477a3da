//! Text Layout
//!
//! Ink extents and placement of banner lines on a fixed-size canvas.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;
use crate::font::BannerFont;

/// Horizontal alignment of banner lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Align {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" | "centre" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(RenderError::InvalidAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Align::Left => "Left",
            Align::Center => "Center",
            Align::Right => "Right",
        })
    }
}

/// Ink bounding box of a line drawn at origin (0, 0)
///
/// `top` and `bottom` are measured down from the line origin (the ascender
/// line), so `top` is usually positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextExtent {
    pub fn width(&self) -> f32 {
        (self.right - self.left) as f32
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top) as f32
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    fn union(self, other: TextExtent) -> TextExtent {
        if self.is_empty() {
            return other;
        }
        TextExtent {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Call `f` with the pen offset of each drawable character
pub(crate) fn for_each_pen<F>(font: &mut BannerFont, text: &str, mut f: F)
where
    F: FnMut(&mut BannerFont, char, i32),
{
    let mut pen = 0.0f32;
    for c in text.chars().filter(|c| !c.is_control()) {
        f(font, c, pen.floor() as i32);
        pen += font.rasterize(c).advance;
    }
}

/// Measure the ink extent of a single line
pub fn measure(font: &mut BannerFont, line: &str) -> TextExtent {
    let mut extent = TextExtent::default();
    for_each_pen(font, line, |font, c, pen| {
        let glyph = font.rasterize(c);
        if let Some((x0, y0, x1, y1)) = glyph.ink_bounds() {
            let (dx, dy) = (pen + glyph.left, glyph.top);
            extent = extent.union(TextExtent {
                left: dx + x0,
                top: dy + y0,
                right: dx + x1,
                bottom: dy + y1,
            });
        }
    });
    extent
}

/// Layout parameters that do not depend on the text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutStyle {
    pub align: Align,
    pub padding: f32,
    pub line_spacing: f32,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            align: Align::Left,
            padding: 50.0,
            line_spacing: 1.5,
        }
    }
}

/// A line positioned on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Line origin, top-left of the ascender line
    pub x: f32,
    pub y: f32,
    pub extent: TextExtent,
}

/// Place the lines of `text` on a `width` x `height` canvas
///
/// Blank lines (empty after trimming) take no vertical space and are not
/// returned. The block is centered vertically using the sum of
/// `line height * line_spacing` over drawn lines, so the spacing after the
/// last line counts toward the block height. When no line has any ink
/// height, the whole text is laid out as one line.
pub fn layout_lines(
    font: &mut BannerFont,
    text: &str,
    style: &LayoutStyle,
    width: u32,
    height: u32,
) -> Vec<PlacedLine> {
    let mut measured: Vec<(&str, TextExtent)> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| (line, measure(font, line)))
        .collect();

    let mut total: f32 = measured
        .iter()
        .map(|(_, extent)| extent.height() * style.line_spacing)
        .sum();

    if total == 0.0 {
        let extent = measure(font, text);
        total = extent.height() * style.line_spacing;
        measured = if text.trim().is_empty() {
            Vec::new()
        } else {
            vec![(text, extent)]
        };
    }

    let canvas_w = width as f32;
    let mut y = (height as f32 - total) / 2.0;

    measured
        .into_iter()
        .map(|(line, extent)| {
            let x = match style.align {
                Align::Left => style.padding,
                Align::Center => (canvas_w - extent.width()) / 2.0,
                Align::Right => canvas_w - extent.width() - style.padding,
            };
            let placed = PlacedLine {
                text: line.to_string(),
                x,
                y,
                extent,
            };
            y += extent.height() * style.line_spacing;
            placed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> BannerFont {
        BannerFont::builtin(32.0, false)
    }

    #[test]
    fn test_align_parse() {
        assert_eq!("Center".parse::<Align>().unwrap(), Align::Center);
        assert_eq!(" right ".parse::<Align>().unwrap(), Align::Right);
        assert!("justify".parse::<Align>().is_err());
        assert_eq!(Align::Left.to_string(), "Left");
    }

    #[test]
    fn test_measure_blank() {
        let mut font = font();
        assert!(measure(&mut font, "").is_empty());
        assert!(measure(&mut font, "   ").is_empty());
    }

    #[test]
    fn test_measure_grows_with_text() {
        let mut font = font();
        let one = measure(&mut font, "H");
        let two = measure(&mut font, "HH");
        assert!(one.width() > 0.0 && one.height() > 0.0);
        assert!(two.width() > one.width());
        assert_eq!(one.height(), two.height());
    }

    #[test]
    fn test_measure_outline_extent() {
        let mut font = BannerFont::from_bytes(crate::font::TEST_FONT_DATA, 72.0).unwrap();
        let ascent = font.ascent();
        let extent = measure(&mut font, "Hg");

        assert!(extent.left >= 0 && extent.left < 15);
        assert!(extent.top > 0);
        assert!((extent.top as f32) < ascent);
        // `g` descends below the baseline
        assert!(extent.bottom as f32 > ascent);
        assert!(extent.width() > 60.0 && extent.width() < 120.0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let mut font = font();
        let style = LayoutStyle::default();
        let lines = layout_lines(&mut font, "TOP\n\n  \nBOTTOM", &style, 800, 500);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "TOP");
        assert_eq!(lines[1].text, "BOTTOM");

        let step = lines[0].extent.height() * style.line_spacing;
        assert!((lines[1].y - lines[0].y - step).abs() < 1e-3);
    }

    #[test]
    fn test_vertical_centering_includes_trailing_spacing() {
        let mut font = font();
        let style = LayoutStyle {
            line_spacing: 2.0,
            ..LayoutStyle::default()
        };
        let lines = layout_lines(&mut font, "H", &style, 800, 500);
        let h = lines[0].extent.height();
        assert!((lines[0].y - (500.0 - h * 2.0) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_horizontal_alignment() {
        let mut font = font();
        let mut style = LayoutStyle {
            padding: 30.0,
            ..LayoutStyle::default()
        };

        let left = layout_lines(&mut font, "HELLO", &style, 800, 500);
        assert_eq!(left[0].x, 30.0);

        style.align = Align::Center;
        let center = layout_lines(&mut font, "HELLO", &style, 800, 500);
        let w = center[0].extent.width();
        assert!((center[0].x - (800.0 - w) / 2.0).abs() < 1e-3);

        style.align = Align::Right;
        let right = layout_lines(&mut font, "HELLO", &style, 800, 500);
        assert!((right[0].x - (800.0 - w - 30.0)).abs() < 1e-3);
    }

    #[test]
    fn test_whitespace_only_text_places_nothing() {
        let mut font = font();
        let lines = layout_lines(&mut font, " \n\t\n", &LayoutStyle::default(), 800, 500);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_overflow_starts_above_canvas() {
        let mut font = font();
        let text = vec!["LINE"; 20].join("\n");
        let lines = layout_lines(&mut font, &text, &LayoutStyle::default(), 800, 100);
        assert!(lines[0].y < 0.0);
    }
}
