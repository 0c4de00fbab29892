//! Suffix stripping for matching occupation words against career names
//! ("journalism" against "Journalist", "nursing" against "Nurse").

/// Suffixes checked longest first.
const SUFFIXES: &[&str] = &["ism", "ist", "ing", "ers", "er", "s"];

/// Minimum stem length; shorter stems match too much.
pub const MIN_STEM_LEN: usize = 4;

/// Strip one occupational suffix, keeping at least [`MIN_STEM_LEN`] chars.
pub fn occupation_stem(word: &str) -> &str {
    for suffix in SUFFIXES {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.chars().count() >= MIN_STEM_LEN {
                return stem;
            }
        }
    }
    word
}
