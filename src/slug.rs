//! URL-friendly identifiers for organizations.
//!
//! Slugs are lowercase ASCII words joined by single hyphens, e.g.
//! `"Mon Club de Karaté"` becomes `"mon-club-de-karate"`.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Used by [`generate_unique_slug`] when the name has no usable characters.
pub const FALLBACK_SLUG: &str = "club";

/// Number of suggestions offered by the sign-up form.
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

pub const MIN_SLUG_LENGTH: usize = 2;
pub const MAX_SLUG_LENGTH: usize = 100;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("disallowed pattern is valid"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));
static VALID_SLUG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid")
});

/// Combining diacritical marks left behind by canonical decomposition.
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Converts free text into a slug.
///
/// Accents are folded to their base letter. Any other character outside
/// `[a-z0-9-]` separates words like whitespace does, and each separator
/// run becomes one hyphen. Returns an empty string when nothing usable
/// remains.
///
/// Letters without a canonical decomposition are separators too, so
/// `"Straße Gym"` becomes `"stra-e-gym"`.
pub fn generate_slug(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .collect();

    let kept = DISALLOWED.replace_all(&folded, " ");
    let hyphenated = WHITESPACE_RUN.replace_all(kept.trim(), "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");

    collapsed.trim_matches('-').to_string()
}

/// Generates a slug not present in `existing_slugs`.
///
/// A taken slug gets a numeric suffix starting at `-2`. An empty base
/// slug is replaced by [`FALLBACK_SLUG`] first.
pub fn generate_unique_slug<S: AsRef<str>>(text: &str, existing_slugs: &[S]) -> String {
    let mut base = generate_slug(text);
    if base.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("No slug characters in name, using fallback {:?}", FALLBACK_SLUG);
        base = FALLBACK_SLUG.to_string();
    }

    let is_taken = |candidate: &str| existing_slugs.iter().any(|s| s.as_ref() == candidate);

    if !is_taken(&base) {
        return base;
    }

    let mut counter: u64 = 2;
    loop {
        let candidate = format!("{base}-{counter}");
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Checks slug format and length.
pub fn is_valid_slug(slug: &str) -> bool {
    (MIN_SLUG_LENGTH..=MAX_SLUG_LENGTH).contains(&slug.len()) && VALID_SLUG.is_match(slug)
}

/// Suggests alternative slugs for an organization name.
///
/// Candidates, in order: the full slug, then for multi-word names the
/// first word, the last two words and the initials. Duplicates and
/// invalid slugs are dropped and at most `count` are returned.
pub fn suggest_slugs(text: &str, count: usize) -> Vec<String> {
    let mut candidates = vec![generate_slug(text)];

    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    if words.len() > 1 {
        candidates.push(generate_slug(words[0]));
        candidates.push(generate_slug(&words[words.len() - 2..].join(" ")));
        candidates.push(words.iter().filter_map(|w| w.chars().next()).collect());
    }

    let mut suggestions: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !suggestions.contains(&candidate) && is_valid_slug(&candidate) {
            suggestions.push(candidate);
        }
    }
    suggestions.truncate(count);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slug_accents() {
        assert_eq!(generate_slug("Mon Club de Karaté"), "mon-club-de-karate");
        assert_eq!(generate_slug("L'Équipe de Paris"), "l-equipe-de-paris");
        assert_eq!(generate_slug("Crème Brûlée Fitness"), "creme-brulee-fitness");
    }

    #[test]
    fn test_generate_slug_special_chars() {
        assert_eq!(generate_slug("  Club@Sport#2024  "), "club-sport-2024");
        assert_eq!(generate_slug("Fit&Fun (Lyon)"), "fit-fun-lyon");
        assert_eq!(generate_slug("Club @ Sport # 2024"), "club-sport-2024");
    }

    #[test]
    fn test_generate_slug_undecomposable_letters_split_words() {
        assert_eq!(generate_slug("Straße Gym"), "stra-e-gym");
        assert_eq!(generate_slug("Øresund Œuvre"), "resund-uvre");
    }

    #[test]
    fn test_generate_slug_collapses_separators() {
        assert_eq!(generate_slug("Yoga   \t Pilates"), "yoga-pilates");
        assert_eq!(generate_slug("--Yoga -- Pilates--"), "yoga-pilates");
        assert_eq!(generate_slug("a - b"), "a-b");
    }

    #[test]
    fn test_generate_slug_empty() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("🏋️ !!! 💪"), "");
        assert_eq!(generate_slug("---"), "");
    }

    #[test]
    fn test_generate_slug_idempotent() {
        for input in ["Mon Club de Karaté", "Club @ Sport # 2024", "ÀÉÎÕÜ 99", "x"] {
            let slug = generate_slug(input);
            assert_eq!(generate_slug(&slug), slug);
            if slug.len() >= MIN_SLUG_LENGTH {
                assert!(is_valid_slug(&slug), "{slug} should be valid");
            }
        }
    }

    #[test]
    fn test_generate_unique_slug() {
        assert_eq!(generate_unique_slug("Mon Club", &["other"]), "mon-club");
        assert_eq!(generate_unique_slug("Mon Club", &["mon-club"]), "mon-club-2");
        assert_eq!(
            generate_unique_slug("Mon Club", &["mon-club", "mon-club-2"]),
            "mon-club-3"
        );
        let empty: [&str; 0] = [];
        assert_eq!(generate_unique_slug("Mon Club", &empty), "mon-club");
    }

    #[test]
    fn test_generate_unique_slug_skips_gaps_in_order() {
        let existing = vec![
            "mon-club".to_string(),
            "mon-club-2".to_string(),
            "mon-club-4".to_string(),
        ];
        assert_eq!(generate_unique_slug("Mon Club", existing.as_slice()), "mon-club-3");
    }

    #[test]
    fn test_generate_unique_slug_fallback() {
        let empty: [&str; 0] = [];
        assert_eq!(generate_unique_slug("!!!", &empty), "club");
        assert_eq!(generate_unique_slug("💪", &["club"]), "club-2");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("mon-club"));
        assert!(is_valid_slug("ab"));
        assert!(is_valid_slug("club-2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("a"));
        assert!(!is_valid_slug("-club"));
        assert!(!is_valid_slug("club-"));
        assert!(!is_valid_slug("mon--club"));
        assert!(!is_valid_slug("Mon-Club"));
        assert!(!is_valid_slug("mon_club"));
        assert!(is_valid_slug(&"a".repeat(100)));
        assert!(!is_valid_slug(&"a".repeat(101)));
    }

    #[test]
    fn test_suggest_slugs() {
        assert_eq!(
            suggest_slugs("Mon Club de Karaté", DEFAULT_SUGGESTION_COUNT),
            vec!["mon-club-de-karate", "mon", "de-karate"]
        );
        assert_eq!(
            suggest_slugs("Mon Club de Karaté", 10),
            vec!["mon-club-de-karate", "mon", "de-karate", "mcdk"]
        );
    }

    #[test]
    fn test_suggest_slugs_deduplicates() {
        // last two words equal the full slug
        assert_eq!(
            suggest_slugs("Mon Club", DEFAULT_SUGGESTION_COUNT),
            vec!["mon-club", "mon", "mc"]
        );
    }

    #[test]
    fn test_suggest_slugs_single_word() {
        assert_eq!(suggest_slugs("Karaté", DEFAULT_SUGGESTION_COUNT), vec!["karate"]);
        assert!(suggest_slugs("!", DEFAULT_SUGGESTION_COUNT).is_empty());
    }

    #[test]
    fn test_suggest_slugs_filters_invalid() {
        // "a" and the accented initials "aéb" are not valid slugs
        assert_eq!(suggest_slugs("A Été Beau", 10), vec!["a-ete-beau", "ete-beau"]);
        assert!(suggest_slugs("Yoga Club", 0).is_empty());
    }
}
