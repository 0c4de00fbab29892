//! Heuristic query extraction.
//!
//! Pure functions over a lowercased user utterance: interest keywords,
//! education streams, salary band, career names and category. Name
//! extraction consults the catalog; everything else is vocabulary and regex
//! matching.

pub mod budget;
pub mod category;
pub mod interests;
pub mod names;
pub mod stemmer;
pub mod streams;

pub use budget::{extract_budget, SalaryBand};
pub use category::extract_category;
pub use interests::extract_interests;
pub use names::{
    extract_career_name, extract_caution_name, extract_multiple_career_names, NameQuery,
};
pub use streams::extract_streams;

use careerwise_catalog::{Profile, Stream};
use serde::Serialize;

/// Everything the recommendation action pulls out of one message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecommendationQuery {
    pub interests: Vec<&'static str>,
    pub streams: Vec<Stream>,
    pub budget: Option<SalaryBand>,
}

impl RecommendationQuery {
    pub fn from_text(text: &str) -> Self {
        let text = text.to_lowercase();
        Self {
            interests: extract_interests(&text),
            streams: extract_streams(&text),
            budget: extract_budget(&text),
        }
    }

    pub fn to_profile(&self) -> Profile {
        Profile {
            streams: self.streams.clone(),
            interests: self.interests.iter().map(|s| s.to_string()).collect(),
            budget: self.budget.map(|b| (b.min, b.max)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_query() {
        let q = RecommendationQuery::from_text("I am in 12th PCM and interested in Technology");
        assert_eq!(q.streams, vec![Stream::Pcm]);
        assert!(q.interests.contains(&"technology"));
        assert!(q.budget.is_none());

        let profile = q.to_profile();
        assert!(profile.interests.contains(&"tech".to_string()));
    }
}
