//! Fallback suggestion bank
//!
//! Canned phrases keyed by category, used when no API credential is set.

/// Suggestions returned per request
pub const SUGGESTION_COUNT: usize = 3;

/// Category of a suggestion prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Business,
    Creative,
    Tech,
    General,
}

/// Keywords checked in order; the first category with a match wins
const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Business, &["business", "corporate", "professional", "company"]),
    (Category::Creative, &["creative", "art", "design", "color", "draw"]),
    (Category::Tech, &["tech", "digital", "software", "app", "code"]),
];

impl Category {
    /// Classify a prompt by case-insensitive substring match
    pub fn classify(prompt: &str) -> Self {
        let lower = prompt.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::General)
    }

    /// Phrases for this category
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Category::Business => &[
                "Professional Excellence",
                "Innovative Solutions",
                "Quality & Precision",
                "Business Growth",
                "Trusted Partnership",
            ],
            Category::Creative => &[
                "Creative Vision",
                "Artistic Expression",
                "Design Innovation",
                "Visual Storytelling",
                "Creative Minds",
            ],
            Category::Tech => &[
                "Tech Innovation",
                "Digital Solutions",
                "Future Ready",
                "Smart Technology",
                "Code & Create",
            ],
            Category::General => &[
                "Make It Happen",
                "Dream Big",
                "Create Impact",
                "Simple & Beautiful",
                "Design Matters",
            ],
        }
    }
}

/// FNV-1a, stable across runs and platforms
pub(crate) fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// Three distinct phrases for a prompt
///
/// The category bank is rotated by a hash of the normalized prompt, so a
/// prompt always gets the same answer.
pub fn fallback_suggestions(prompt: &str) -> Vec<String> {
    let phrases = Category::classify(prompt).phrases();
    let normalized = prompt.trim().to_lowercase();
    let offset = (fnv1a(&normalized) % phrases.len() as u64) as usize;

    phrases
        .iter()
        .cycle()
        .skip(offset)
        .take(SUGGESTION_COUNT.min(phrases.len()))
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Category::classify("Corporate TAGLINE"), Category::Business);
        assert_eq!(Category::classify("catchy slogan for an art fair"), Category::Creative);
        assert_eq!(Category::classify("mobile app launch"), Category::Tech);
        assert_eq!(Category::classify("bakery"), Category::General);
    }

    #[test]
    fn test_classify_order() {
        // business wins over tech
        assert_eq!(Category::classify("tech company"), Category::Business);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let a = fallback_suggestions("catchy slogan for bakery");
        let b = fallback_suggestions("  Catchy Slogan For Bakery ");
        assert_eq!(a, b);
        assert_eq!(a.len(), SUGGESTION_COUNT);
    }

    #[test]
    fn test_fallback_distinct_and_from_bank() {
        let suggestions = fallback_suggestions("software launch");
        let bank = Category::Tech.phrases();
        for s in &suggestions {
            assert!(bank.contains(&s.as_str()));
        }
        let unique: std::collections::HashSet<_> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
    }

    #[test]
    fn test_fnv1a_known_value() {
        assert_eq!(fnv1a(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a("a"), 0xaf63_dc4c_8601_ec8c);
    }
}
