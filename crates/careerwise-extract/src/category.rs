//! Category detection.

use careerwise_catalog::Category;

/// First category (in [`Category::ALL`] order) whose lowercase name occurs
/// in `text`.
pub fn extract_category(text: &str) -> Option<Category> {
    Category::ALL
        .iter()
        .copied()
        .find(|c| text.contains(&c.as_str().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_found() {
        assert_eq!(extract_category("careers in technology"), Some(Category::Technology));
        assert_eq!(extract_category("jobs in aviation?"), Some(Category::Aviation));
    }

    #[test]
    fn test_every_store_category_is_recognised() {
        assert_eq!(extract_category("jobs in finance"), Some(Category::Finance));
        assert_eq!(extract_category("careers in design"), Some(Category::Design));
        assert_eq!(extract_category("media careers"), Some(Category::Media));
        assert_eq!(Category::ALL.len(), 15);
    }

    #[test]
    fn test_first_in_list_wins() {
        assert_eq!(
            extract_category("marketing or healthcare"),
            Some(Category::Healthcare)
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(extract_category("careers in unknown category"), None);
    }
}
