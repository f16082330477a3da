//! Font resolution
//!
//! Finds a usable font file for a family by trying an ordered list of
//! candidate file names, ending in the built-in bitmap font.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use walkdir::WalkDir;

use crate::font::BannerFont;

/// Generic last-resort outline font tried before the built-in font
const GENERIC_DEFAULT: &str = "arial.ttf";

/// Family-specific extra file names, tried after the stem variations
const FAMILY_EXTRAS: &[(&str, &[&str])] = &[
    ("Arial", &["arial.ttf", "Arial.ttf", "ARIAL.TTF"]),
    ("Times", &["times.ttf", "Times.ttf", "timesbd.ttf"]),
    ("Comic", &["comic.ttf", "Comic.ttf", "comicbd.ttf"]),
];

/// Where a resolved font came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

/// Result of font resolution
#[derive(Debug)]
pub struct ResolvedFont {
    pub font: BannerFont,
    pub source: FontSource,
    /// Set when resolution fell back to the built-in font
    pub warning: Option<String>,
}

impl ResolvedFont {
    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}

/// Build the ordered candidate file list for a family
///
/// For each stem: `stem.ttf`, `stem`, `STEM.ttf`, `Stem.ttf`; then the
/// family-specific extras; then the generic default. Duplicates keep their
/// first position.
pub fn candidate_files(family: &str, stems: &[&str]) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let mut push = |name: String| {
        if !name.is_empty() && !candidates.contains(&name) {
            candidates.push(name);
        }
    };

    for stem in stems {
        push(format!("{}.ttf", stem));
        push(stem.to_string());
        push(format!("{}.ttf", stem.to_uppercase()));
        push(format!("{}.ttf", capitalize(stem)));
    }

    for (needle, extras) in FAMILY_EXTRAS {
        if family.contains(needle) {
            for extra in *extras {
                push(extra.to_string());
            }
            break;
        }
    }

    push(GENERIC_DEFAULT.to_string());
    candidates
}

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Default font directories for the current platform
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("/System/Library/Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    if let Some(windir) = std::env::var_os("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    } else {
        dirs.push(PathBuf::from(r"C:\Windows\Fonts"));
    }
    dirs
}

/// Locates font files by exact file name across a set of directories
pub struct FontLocator {
    dirs: Vec<PathBuf>,
    /// File name -> first path seen, in directory order
    index: Option<FxHashMap<String, PathBuf>>,
}

impl FontLocator {
    /// Search only the given directories, in order
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs, index: None }
    }

    /// Search extra directories first, then the platform defaults
    pub fn with_extra_dirs(extra: Vec<PathBuf>) -> Self {
        let mut dirs = extra;
        dirs.extend(system_font_dirs());
        Self::new(dirs)
    }

    /// Search the platform default directories
    pub fn system() -> Self {
        Self::new(system_font_dirs())
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn index(&mut self) -> &FxHashMap<String, PathBuf> {
        let dirs = &self.dirs;
        self.index.get_or_insert_with(|| {
            let mut index = FxHashMap::default();
            for dir in dirs.iter().filter(|d| d.is_dir()) {
                for entry in WalkDir::new(dir).follow_links(true).into_iter().filter_map(Result::ok) {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    if let Some(name) = entry.file_name().to_str() {
                        index
                            .entry(name.to_string())
                            .or_insert_with(|| entry.path().to_path_buf());
                    }
                }
            }
            debug!("Indexed {} font files in {} directories", index.len(), dirs.len());
            index
        })
    }

    /// Find a candidate on disk
    ///
    /// Candidates containing a path separator are used as paths; bare
    /// names are looked up in the directory index.
    pub fn locate(&mut self, candidate: &str) -> Option<PathBuf> {
        let path = Path::new(candidate);
        if path.components().count() > 1 || path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        self.index().get(candidate).cloned()
    }

    /// Resolve a family to a font, never failing
    ///
    /// `stems` are the file stems registered for the family; when empty the
    /// family name itself is used as a candidate path or stem.
    pub fn resolve_font(&mut self, family: &str, stems: &[&str], size: f32) -> ResolvedFont {
        let owned;
        let stems = if stems.is_empty() {
            owned = [family];
            &owned[..]
        } else {
            stems
        };

        for candidate in candidate_files(family, stems) {
            let Some(path) = self.locate(&candidate) else {
                continue;
            };
            match fs::read(&path) {
                Ok(data) => match BannerFont::from_bytes(&data, size) {
                    Ok(font) => {
                        info!("Resolved font '{}' to {}", family, path.display());
                        return ResolvedFont {
                            font,
                            source: FontSource::File(path),
                            warning: None,
                        };
                    }
                    Err(e) => debug!("Skipping {}: {}", path.display(), e),
                },
                Err(e) => debug!("Skipping {}: {}", path.display(), e),
            }
        }

        let font = BannerFont::builtin(size, is_bold_family(family));
        let warning = format!(
            "Font '{}' not found; using the built-in bitmap font at {}px",
            family,
            font.size()
        );
        warn!("{}", warning);

        ResolvedFont {
            font,
            source: FontSource::Builtin,
            warning: Some(warning),
        }
    }
}

impl Default for FontLocator {
    fn default() -> Self {
        Self::system()
    }
}

/// Resolve a family against the platform font directories
pub fn resolve_font(family: &str, size: f32) -> ResolvedFont {
    FontLocator::system().resolve_font(family, &[], size)
}

fn is_bold_family(family: &str) -> bool {
    let lower = family.to_lowercase();
    lower.contains("bold") || lower.contains("impact") || lower.contains("black")
}
