//! Interest keyword vocabulary.

/// Fixed vocabulary, in match order.
pub const INTEREST_KEYWORDS: &[&str] = &[
    "technology",
    "tech",
    "computer",
    "programming",
    "coding",
    "medical",
    "doctor",
    "healthcare",
    "hospital",
    "business",
    "finance",
    "money",
    "accounting",
    "engineering",
    "design",
    "creative",
    "art",
    "teaching",
    "education",
    "research",
    "science",
    "sports",
    "fitness",
    "law",
    "legal",
    "marketing",
    "sales",
    "management",
    "entrepreneur",
];

/// Keywords occurring anywhere in `text` (expected lowercase), vocabulary order.
pub fn extract_interests(text: &str) -> Vec<&'static str> {
    INTEREST_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| text.contains(kw))
        .collect()
}
