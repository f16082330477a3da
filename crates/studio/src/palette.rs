//! Color schemes and random banner text

use placard_render::Rgba;

/// Background and text color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Rgba,
    pub foreground: Rgba,
}

const fn scheme(background: Rgba, foreground: Rgba) -> ColorScheme {
    ColorScheme {
        background,
        foreground,
    }
}

/// Suggested pairs
pub const SUGGESTED_SCHEMES: &[ColorScheme] = &[
    scheme(Rgba::rgb(0x2C, 0x3E, 0x50), Rgba::white()),
    scheme(Rgba::black(), Rgba::rgb(0xFF, 0xD7, 0x00)),
    scheme(Rgba::white(), Rgba::rgb(0xFF, 0x00, 0x00)),
    scheme(Rgba::rgb(0x00, 0x00, 0x80), Rgba::white()),
    scheme(Rgba::rgb(0x00, 0x80, 0x00), Rgba::white()),
    scheme(Rgba::rgb(0x80, 0x00, 0x80), Rgba::white()),
];

/// High-contrast pairs
pub const HIGH_CONTRAST_SCHEMES: &[ColorScheme] = &[
    scheme(Rgba::black(), Rgba::white()),
    scheme(Rgba::white(), Rgba::black()),
    scheme(Rgba::rgb(0x00, 0x00, 0xFF), Rgba::rgb(0xFF, 0xFF, 0x00)),
    scheme(Rgba::rgb(0xFF, 0x00, 0x00), Rgba::rgb(0x00, 0xFF, 0x00)),
];

/// Phrases for the random-text action
pub const RANDOM_TEXTS: &[&str] = &[
    "INNOVATE. CREATE. INSPIRE.",
    "QUALITY IN EVERY DETAIL",
    "YOUR VISION, OUR MISSION",
    "DESIGN EXCELLENCE",
    "SIMPLE & EFFECTIVE",
    "THINK BIG. DESIGN BOLD.",
    "CREATIVE SOLUTIONS",
    "MAKE IT HAPPEN",
];

/// Which palette to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    Suggested,
    HighContrast,
}

impl SchemeKind {
    pub fn schemes(self) -> &'static [ColorScheme] {
        match self {
            SchemeKind::Suggested => SUGGESTED_SCHEMES,
            SchemeKind::HighContrast => HIGH_CONTRAST_SCHEMES,
        }
    }
}

/// splitmix64 step, so consecutive seeds spread over the table
fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn pick<T: Copy>(items: &[T], seed: u64) -> T {
    items[(mix(seed) % items.len() as u64) as usize]
}

/// A scheme chosen by seed
pub fn pick_scheme(kind: SchemeKind, seed: u64) -> ColorScheme {
    pick(kind.schemes(), seed)
}

/// A banner text chosen by seed
pub fn random_text(seed: u64) -> &'static str {
    pick(RANDOM_TEXTS, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_is_stable() {
        assert_eq!(random_text(42), random_text(42));
        assert_eq!(
            pick_scheme(SchemeKind::Suggested, 7),
            pick_scheme(SchemeKind::Suggested, 7)
        );
    }

    #[test]
    fn test_pick_from_table() {
        for seed in 0..32 {
            assert!(RANDOM_TEXTS.contains(&random_text(seed)));
            assert!(HIGH_CONTRAST_SCHEMES.contains(&pick_scheme(SchemeKind::HighContrast, seed)));
        }
    }

    #[test]
    fn test_seeds_cover_table() {
        let mut seen = std::collections::HashSet::new();
        for seed in 0..256 {
            seen.insert(random_text(seed));
        }
        assert_eq!(seen.len(), RANDOM_TEXTS.len());
    }

    #[test]
    fn test_schemes_have_contrast() {
        for scheme in SUGGESTED_SCHEMES.iter().chain(HIGH_CONTRAST_SCHEMES) {
            assert_ne!(scheme.background, scheme.foreground);
        }
    }
}
