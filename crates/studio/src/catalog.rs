//! Font catalog
//!
//! Display families offered to the user, the file stems tried for each,
//! and the category filters.

use std::fmt;
use std::str::FromStr;

use placard_render::{FontLocator, ResolvedFont};

use crate::error::StudioError;

/// Font category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontCategory {
    SansSerif,
    Serif,
    Monospace,
    Casual,
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFamily {
    pub name: &'static str,
    /// File stems in preference order; metric-compatible free fonts last
    pub stems: &'static [&'static str],
    pub category: FontCategory,
    pub bold: bool,
}

const fn family(
    name: &'static str,
    stems: &'static [&'static str],
    category: FontCategory,
    bold: bool,
) -> FontFamily {
    FontFamily {
        name,
        stems,
        category,
        bold,
    }
}

/// Every family offered, in display order
pub const FONT_CATALOG: &[FontFamily] = &[
    family("Arial", &["arial", "LiberationSans-Regular", "DejaVuSans"], FontCategory::SansSerif, false),
    family("Arial Bold", &["arialbd", "LiberationSans-Bold", "DejaVuSans-Bold"], FontCategory::SansSerif, true),
    family("Times New Roman", &["times", "LiberationSerif-Regular", "DejaVuSerif"], FontCategory::Serif, false),
    family("Georgia", &["georgia", "DejaVuSerif"], FontCategory::Serif, false),
    family("Verdana", &["verdana", "DejaVuSans"], FontCategory::SansSerif, false),
    family("Courier New", &["cour", "LiberationMono-Regular", "DejaVuSansMono"], FontCategory::Monospace, false),
    family("Trebuchet MS", &["trebuc"], FontCategory::SansSerif, false),
    family("Comic Sans MS", &["comic"], FontCategory::Casual, false),
    family("Impact", &["impact"], FontCategory::Casual, true),
    family("Tahoma", &["tahoma", "DejaVuSans"], FontCategory::SansSerif, false),
    family("Lucida Console", &["lucon", "DejaVuSansMono"], FontCategory::Monospace, false),
    family("Palatino", &["pala"], FontCategory::Serif, false),
    family("Garamond", &["gara"], FontCategory::Serif, false),
    family("Bookman", &["bookman"], FontCategory::Serif, false),
];

/// Families listed under the "Bold Fonts" filter
const BOLD_PICKS: &[&str] = &["Arial Bold", "Impact", "Georgia", "Times New Roman"];

/// Catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFilter {
    #[default]
    All,
    Category(FontCategory),
    Bold,
}

impl FromStr for FontFilter {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "all" | "allfonts" => Ok(FontFilter::All),
            "sansserif" | "sans" => Ok(FontFilter::Category(FontCategory::SansSerif)),
            "serif" => Ok(FontFilter::Category(FontCategory::Serif)),
            "monospace" | "mono" => Ok(FontFilter::Category(FontCategory::Monospace)),
            "casual" => Ok(FontFilter::Category(FontCategory::Casual)),
            "bold" | "boldfonts" => Ok(FontFilter::Bold),
            _ => Err(StudioError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontCategory::SansSerif => "Sans-serif",
            FontCategory::Serif => "Serif",
            FontCategory::Monospace => "Monospace",
            FontCategory::Casual => "Casual",
        })
    }
}

/// Find a family by display name, ignoring case
pub fn lookup(name: &str) -> Option<&'static FontFamily> {
    let name = name.trim();
    FONT_CATALOG.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Families matching a filter, in catalog order (bold picks in their own order)
pub fn families(filter: FontFilter) -> Vec<&'static FontFamily> {
    match filter {
        FontFilter::All => FONT_CATALOG.iter().collect(),
        FontFilter::Category(category) => FONT_CATALOG.iter().filter(|f| f.category == category).collect(),
        FontFilter::Bold => BOLD_PICKS.iter().filter_map(|name| lookup(name)).collect(),
    }
}

/// Resolve a catalog family, or treat an unknown name as a file name or path
pub fn resolve_family(locator: &mut FontLocator, name: &str, size: f32) -> ResolvedFont {
    match lookup(name) {
        Some(family) => locator.resolve_font(family.name, family.stems, size),
        None => locator.resolve_font(name.trim(), &[], size),
    }
}
