//! Design session
//!
//! Renders designs with font resolution and numbers their output files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use placard_render::{render_banner_png, FontLocator, FontSource};

use crate::advice::SizeAdvice;
use crate::catalog::resolve_family;
use crate::error::StudioResult;
use crate::settings::DesignSettings;

/// A rendered design, ready to save
#[derive(Debug, Clone)]
pub struct Design {
    pub png: Vec<u8>,
    pub file_name: String,
    pub font_source: FontSource,
    /// Font fallback warning, if any
    pub warning: Option<String>,
    pub advice: SizeAdvice,
}

impl Design {
    /// Write the PNG into `dir` under its numbered file name
    pub fn save_in(&self, dir: &Path) -> StudioResult<PathBuf> {
        let path = dir.join(&self.file_name);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Write the PNG to an explicit path
    pub fn save_as(&self, path: &Path) -> StudioResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &self.png)?;
        info!("Saved {} ({} bytes)", path.display(), self.png.len());
        Ok(())
    }
}

/// Counts designs and owns the font locator
pub struct DesignSession {
    locator: FontLocator,
    count: u32,
}

impl DesignSession {
    pub fn new(locator: FontLocator) -> Self {
        Self { locator, count: 0 }
    }

    /// Continue numbering after the highest `design_N.png` already in `dir`
    ///
    /// A missing directory starts from zero.
    pub fn resume(dir: &Path, locator: FontLocator) -> StudioResult<Self> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new(locator)),
            Err(e) => return Err(e.into()),
        };

        let mut count = 0;
        for entry in entries {
            let entry = entry?;
            if let Some(n) = entry.file_name().to_str().and_then(design_number) {
                count = count.max(n);
            }
        }
        debug!("Resuming after {} existing design(s) in {}", count, dir.display());
        Ok(Self { locator, count })
    }

    /// Designs rendered so far
    pub fn count(&self) -> u32 {
        self.count
    }

    /// File name the next design will get
    pub fn next_file_name(&self) -> String {
        format!("design_{}.png", self.count.saturating_add(1))
    }

    pub fn locator_mut(&mut self) -> &mut FontLocator {
        &mut self.locator
    }

    /// Render a design; the counter only advances on success
    pub fn render(&mut self, settings: &DesignSettings) -> StudioResult<Design> {
        let spec = settings.banner_spec()?;
        let mut resolved = resolve_family(&mut self.locator, &settings.font, settings.font_size as f32);
        let png = render_banner_png(&spec, &mut resolved.font)?;

        let design = Design {
            png,
            file_name: self.next_file_name(),
            font_source: resolved.source,
            warning: resolved.warning,
            advice: SizeAdvice::for_size(settings.font_size),
        };
        self.count = self.count.saturating_add(1);
        Ok(design)
    }
}

/// `N` from a `design_N.png` file name
fn design_number(name: &str) -> Option<u32> {
    name.strip_prefix("design_")?.strip_suffix(".png")?.parse().ok()
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new(FontLocator::system())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StudioError;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("placard-session-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_render_numbers_designs() {
        let fonts = scratch_dir("fonts");
        let mut session = DesignSession::new(FontLocator::new(vec![fonts.clone()]));
        assert_eq!(session.next_file_name(), "design_1.png");

        let first = session.render(&DesignSettings::default()).unwrap();
        assert_eq!(first.file_name, "design_1.png");
        assert_eq!(first.font_source, FontSource::Builtin);
        assert!(first.warning.is_some());
        assert_eq!(first.advice, SizeAdvice::Good);
        assert_eq!(&first.png[..4], b"\x89PNG");

        let second = session.render(&DesignSettings::default()).unwrap();
        assert_eq!(second.file_name, "design_2.png");
        assert_eq!(session.count(), 2);

        fs::remove_dir_all(&fonts).ok();
    }

    #[test]
    fn test_failed_render_keeps_count() {
        let mut session = DesignSession::new(FontLocator::new(Vec::new()));
        let settings = DesignSettings {
            text: String::new(),
            ..DesignSettings::default()
        };
        assert!(matches!(session.render(&settings), Err(StudioError::EmptyText)));
        assert_eq!(session.count(), 0);
    }

    #[test]
    fn test_design_number() {
        assert_eq!(design_number("design_1.png"), Some(1));
        assert_eq!(design_number("design_42.png"), Some(42));
        assert_eq!(design_number("design_.png"), None);
        assert_eq!(design_number("design_x.png"), None);
        assert_eq!(design_number("design_3.jpg"), None);
        assert_eq!(design_number("placeholder.png"), None);
    }

    #[test]
    fn test_resume_continues_numbering() {
        let out = scratch_dir("resume");

        // each run starts a fresh session over the same directory
        for expected in ["design_1.png", "design_2.png"] {
            let mut session = DesignSession::resume(&out, FontLocator::new(Vec::new())).unwrap();
            let design = session.render(&DesignSettings::default()).unwrap();
            let path = design.save_in(&out).unwrap();
            assert_eq!(path, out.join(expected));
        }
        assert!(out.join("design_1.png").is_file());

        fs::write(out.join("design_9.png"), b"").unwrap();
        fs::write(out.join("notes.txt"), b"").unwrap();
        let session = DesignSession::resume(&out, FontLocator::new(Vec::new())).unwrap();
        assert_eq!(session.next_file_name(), "design_10.png");

        fs::remove_dir_all(&out).ok();
    }

    #[test]
    fn test_resume_missing_dir() {
        let missing = std::env::temp_dir().join(format!("placard-session-missing-{}", std::process::id()));
        let session = DesignSession::resume(&missing, FontLocator::new(Vec::new())).unwrap();
        assert_eq!(session.count(), 0);
        assert_eq!(session.next_file_name(), "design_1.png");
    }

    #[test]
    fn test_save_in() {
        let out = scratch_dir("out");
        let mut session = DesignSession::new(FontLocator::new(Vec::new()));
        let design = session.render(&DesignSettings::default()).unwrap();

        let path = design.save_in(&out.join("nested")).unwrap();
        assert_eq!(path.file_name().unwrap(), "design_1.png");
        assert_eq!(fs::read(&path).unwrap(), design.png);

        fs::remove_dir_all(&out).ok();
    }
}
