//! Career-name extraction.
//!
//! Question fillers are stripped, then the remainder is scanned for a known
//! display name. When none is found the cleaned remainder is returned as a
//! raw search term so the caller can still attempt a fuzzy lookup.

use careerwise_catalog::Catalog;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::stemmer::occupation_stem;

static COUNSELOR_FILLERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(tell me about|what is|career in|being a|details about|information about)\b",
    )
    .expect("valid filler regex")
});

static RISK_VOCABULARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(warnings?|cautions?|risks?|challenges?|downsides?|stress|burnout|competition|market|job)\b",
    )
    .expect("valid risk vocabulary regex")
});

static PREPOSITIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(for|of|in|with|about|being a|becoming a)\b").expect("valid preposition regex")
});

static VERSUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(.+?)\s+(?:vs|versus|compared to|vs\.?)\s+(.+?)(?:\?|$)")
        .expect("valid versus regex")
});

/// Words of at most this many characters are never tried as partial names.
const MIN_PARTIAL_WORD: usize = 3;

/// Width of the sliding window used when no "vs" phrase is present.
const WINDOW: usize = 3;

/// Result of name extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameQuery {
    /// A display name from the catalog occurs in the message.
    Known(String),
    /// No known name; the cleaned remainder, to be used as a search term.
    Raw(String),
}

impl NameQuery {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(s) | Self::Raw(s) => s,
        }
    }
}

/// Counselor-side extraction against career display names.
pub fn extract_career_name(text: &str, catalog: &Catalog) -> Option<NameQuery> {
    let cleaned = collapse(&COUNSELOR_FILLERS.replace_all(text, ""));
    let lowered = cleaned.to_lowercase();

    if let Some(career) = catalog
        .careers()
        .iter()
        .find(|c| lowered.contains(&c.name.to_lowercase()))
    {
        debug!("Career name in query: {}", career.name);
        return Some(NameQuery::Known(career.name.clone()));
    }

    raw_or_none(cleaned)
}

/// Realist-side extraction against caution names.
///
/// Strips risk vocabulary and prepositions, scans caution names, then tries
/// each remaining word longer than three characters against the names,
/// verbatim and then by occupational stem.
pub fn extract_caution_name(text: &str, catalog: &Catalog) -> Option<NameQuery> {
    let without_risk = RISK_VOCABULARY.replace_all(text, "");
    let cleaned = collapse(&PREPOSITIONS.replace_all(&without_risk, ""));
    let lowered = cleaned.to_lowercase();

    let names: Vec<(String, &str)> = catalog
        .cautions()
        .iter()
        .map(|c| (c.career_name.to_lowercase(), c.career_name.as_str()))
        .collect();

    if let Some((_, name)) = names.iter().find(|(lower, _)| lowered.contains(lower.as_str())) {
        return Some(NameQuery::Known(name.to_string()));
    }

    for word in lowered.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.chars().count() <= MIN_PARTIAL_WORD {
            continue;
        }
        let stem = occupation_stem(word);
        let hit = names
            .iter()
            .find(|(lower, _)| lower.contains(word))
            .or_else(|| names.iter().find(|(lower, _)| lower.contains(stem)));
        if let Some((_, name)) = hit {
            debug!("Partial word {:?} matched caution {}", word, name);
            return Some(NameQuery::Known(name.to_string()));
        }
    }

    raw_or_none(cleaned)
}

/// Up to two career-name candidates for comparison.
///
/// An "A vs B" phrase wins when present. Otherwise a three-word window
/// slides over the message; a window contained in any display name is taken
/// and the cursor skips past it.
pub fn extract_multiple_career_names(text: &str, catalog: &Catalog) -> Vec<String> {
    if let Some(caps) = VERSUS.captures(text) {
        let pair: Vec<String> = [caps.get(1), caps.get(2)]
            .into_iter()
            .flatten()
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if pair.len() == 2 {
            return pair;
        }
    }

    let names: Vec<String> = catalog
        .careers()
        .iter()
        .map(|c| c.name.to_lowercase())
        .collect();
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let end = (i + WINDOW).min(words.len());
        let phrase = words[i..end].join(" ");
        let lowered = phrase.to_lowercase();
        if names.iter().any(|n| n.contains(&lowered)) {
            found.push(phrase);
            i += WINDOW;
        } else {
            i += 1;
        }
    }
    found
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn raw_or_none(cleaned: String) -> Option<NameQuery> {
    if cleaned.is_empty() {
        None
    } else {
        Some(NameQuery::Raw(cleaned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_career_name_known() {
        let q = extract_career_name("tell me about software engineer", &catalog());
        assert_eq!(q, Some(NameQuery::Known("Software Engineer".into())));
    }

    #[test]
    fn test_career_name_raw_remainder() {
        let q = extract_career_name("tell me about nonexistent career", &catalog());
        assert_eq!(q, Some(NameQuery::Raw("nonexistent career".into())));
    }

    #[test]
    fn test_career_name_only_fillers() {
        assert_eq!(extract_career_name("Tell me about", &catalog()), None);
        assert_eq!(extract_career_name("   ", &catalog()), None);
    }

    #[test]
    fn test_caution_name_partial_word() {
        let catalog = catalog();
        let q = extract_caution_name("what are the risks of becoming a doctor?", &catalog);
        assert_eq!(q, Some(NameQuery::Known("Medical Doctor (MBBS)".into())));

        let q = extract_caution_name("how stressful is being a nurse?", &catalog);
        assert_eq!(q, Some(NameQuery::Known("Registered Nurse".into())));
    }

    #[test]
    fn test_caution_name_by_stem() {
        let catalog = catalog();
        let q = extract_caution_name("how competitive is journalism?", &catalog);
        assert_eq!(q, Some(NameQuery::Known("Journalist".into())));
    }

    #[test]
    fn test_caution_name_full_name_first() {
        let q = extract_caution_name("how risky is software engineering?", &catalog());
        assert_eq!(q, Some(NameQuery::Known("Software Engineer".into())));
    }

    #[test]
    fn test_caution_name_unknown() {
        let q = extract_caution_name("what are the risks of becoming a unicorn trainer?", &catalog());
        assert_eq!(q, Some(NameQuery::Raw("what are the unicorn trainer?".into())));
        assert_eq!(extract_caution_name("risks for", &catalog()), None);
    }

    #[test]
    fn test_versus_phrase() {
        let names = extract_multiple_career_names("compare software engineer vs doctor", &catalog());
        assert_eq!(names, vec!["compare software engineer", "doctor"]);

        let names =
            extract_multiple_career_names("lawyer compared to journalist?", &catalog());
        assert_eq!(names, vec!["lawyer", "journalist"]);
    }

    #[test]
    fn test_sliding_window() {
        let names = extract_multiple_career_names(
            "hotel management professional and chef",
            &catalog(),
        );
        assert_eq!(names, vec!["hotel management professional", "chef"]);

        // Only full windows are tried until the tail, so a two-word name
        // in the middle of a sentence is missed.
        let names =
            extract_multiple_career_names("thinking about data scientist and architect", &catalog());
        assert_eq!(names, vec!["architect"]);
    }

    #[test]
    fn test_sliding_window_no_match() {
        assert!(extract_multiple_career_names("compare single career", &catalog()).is_empty());
    }
}
