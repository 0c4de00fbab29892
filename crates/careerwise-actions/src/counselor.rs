//! Counselor actions: recommendations, career details, comparisons and
//! category listings over the career store.

use careerwise_catalog::CareerRecord;
use careerwise_core::Result;
use careerwise_extract::{
    extract_career_name, extract_category, extract_multiple_career_names, RecommendationQuery,
};
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::format::{self, ambiguity_note};
use crate::types::{ActionKind, AgentRuntime, ExampleTurn};

const COUNSELOR: &str = "Eliza Career Counselor";
const USER: &str = "{{user1}}";

/// Suggestions offered when a career name does not resolve.
const MAX_SUGGESTIONS: usize = 3;

pub struct GetCareerRecommendations;

impl Action for GetCareerRecommendations {
    fn kind(&self) -> ActionKind {
        ActionKind::GetCareerRecommendations
    }

    fn similes(&self) -> &'static [&'static str] {
        &[
            "career suggestions",
            "what careers should I consider",
            "career options for me",
            "what jobs match my interests",
            "career advice",
        ]
    }

    fn description(&self) -> &'static str {
        "Provides personalized career recommendations based on student interests, subjects, and preferences"
    }

    fn examples(&self) -> &'static [&'static [ExampleTurn]] {
        &[&[
            ExampleTurn {
                user: USER,
                text: "I am in 12th PCM and interested in technology. What careers should I consider?",
            },
            ExampleTurn {
                user: COUNSELOR,
                text: "Based on your PCM stream and technology interest, here are some excellent career options...",
            },
        ]]
    }

    fn apology(&self) -> &'static str {
        "I apologize, but I encountered an error while fetching career recommendations. Please try again or provide more details about your interests."
    }

    fn respond(&self, runtime: &AgentRuntime, text: &str) -> Result<String> {
        let query = RecommendationQuery::from_text(text);
        debug!(
            "Recommendation query: streams={:?} interests={:?} budget={:?}",
            query.streams, query.interests, query.budget
        );
        let picks = runtime.catalog().recommend(&query.to_profile());
        info!("Recommending {} careers", picks.len());
        format::counselor::recommendations(&picks, &query.streams, &query.interests)
    }
}

pub struct GetCareerDetails;

impl Action for GetCareerDetails {
    fn kind(&self) -> ActionKind {
        ActionKind::GetCareerDetails
    }

    fn similes(&self) -> &'static [&'static str] {
        &[
            "tell me about",
            "what is a career in",
            "career information for",
            "details about being a",
            "what does a __ do",
        ]
    }

    fn description(&self) -> &'static str {
        "Provides detailed information about a specific career including salary, lifestyle, education requirements, and prospects"
    }

    fn examples(&self) -> &'static [&'static [ExampleTurn]] {
        &[&[
            ExampleTurn {
                user: USER,
                text: "Tell me about being a software engineer",
            },
            ExampleTurn {
                user: COUNSELOR,
                text: "Here are the details about Software Engineering career...",
            },
        ]]
    }

    fn apology(&self) -> &'static str {
        "I apologize, but I encountered an error while fetching career details. Please try again."
    }

    fn respond(&self, runtime: &AgentRuntime, text: &str) -> Result<String> {
        let catalog = runtime.catalog();
        let Some(name) = extract_career_name(&text.to_lowercase(), catalog) else {
            return Ok("I couldn't identify which career you're asking about. Could you please specify the career name?".to_string());
        };

        let Some(found) = catalog.resolve_career(name.as_str()) else {
            warn!("No career matches {:?}", name.as_str());
            let suggestions = suggest(runtime, name.as_str());
            return Ok(if suggestions.is_empty() {
                format!(
                    "I'm sorry, I don't have detailed information about \"{}\" in my database. Would you like me to suggest some similar careers or recommend popular options?",
                    name.as_str()
                )
            } else {
                format!(
                    "I couldn't find exact details for \"{}\". Did you mean: {}?",
                    name.as_str(),
                    suggestions.join(", ")
                )
            });
        };

        let mut out = format::counselor::details(found.record)?;
        if found.is_ambiguous() {
            out.push_str(&ambiguity_note(&found.record.name, &found.also_matched));
        }
        Ok(out)
    }
}

/// Up to [`MAX_SUGGESTIONS`] career names sharing a significant word with
/// `query`, in store order.
fn suggest<'a>(runtime: &'a AgentRuntime, query: &str) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for word in query.split_whitespace().filter(|w| w.chars().count() > 3) {
        for career in runtime.catalog().search_careers(word) {
            if names.len() == MAX_SUGGESTIONS {
                return names;
            }
            if !names.contains(&career.name.as_str()) {
                names.push(&career.name);
            }
        }
    }
    names
}

pub struct CompareCareers;

impl Action for CompareCareers {
    fn kind(&self) -> ActionKind {
        ActionKind::CompareCareers
    }

    fn similes(&self) -> &'static [&'static str] {
        &["compare careers", "which is better", "difference between", "versus", "vs"]
    }

    fn description(&self) -> &'static str {
        "Compares two or more careers based on salary, lifestyle, education requirements, and other factors"
    }

    fn examples(&self) -> &'static [&'static [ExampleTurn]] {
        &[&[
            ExampleTurn {
                user: USER,
                text: "Compare software engineer vs doctor",
            },
            ExampleTurn {
                user: COUNSELOR,
                text: "Let me compare Software Engineer and Doctor careers for you...",
            },
        ]]
    }

    fn apology(&self) -> &'static str {
        "I apologize, but I encountered an error while comparing careers. Please try again."
    }

    fn respond(&self, runtime: &AgentRuntime, text: &str) -> Result<String> {
        let catalog = runtime.catalog();
        let names = extract_multiple_career_names(&text.to_lowercase(), catalog);
        if names.len() < 2 {
            return Ok("To compare careers, please mention at least two career names. For example: \"compare software engineer vs doctor\"".to_string());
        }

        let mut careers: Vec<&CareerRecord> = Vec::new();
        let mut missing: Vec<&str> = Vec::new();
        for name in &names {
            match catalog.resolve_career(name) {
                Some(found) if careers.iter().any(|c| c.id == found.record.id) => {
                    debug!("{:?} resolved to {} again, skipping", name, found.record.name);
                }
                Some(found) => careers.push(found.record),
                None => missing.push(name),
            }
        }

        if careers.len() < 2 {
            let found: Vec<&str> = careers.iter().map(|c| c.name.as_str()).collect();
            let mut reply = format!("I could only find information for: {}.", found.join(", "));
            if !missing.is_empty() {
                reply.push_str(&format!(" I couldn't find: {}", missing.join(", ")));
            }
            return Ok(reply);
        }

        format::counselor::comparison(&careers)
    }
}

pub struct GetCareersByCategory;

impl Action for GetCareersByCategory {
    fn kind(&self) -> ActionKind {
        ActionKind::GetCareersByCategory
    }

    fn similes(&self) -> &'static [&'static str] {
        &["careers in", "jobs in", "options in", "careers for"]
    }

    fn description(&self) -> &'static str {
        "Lists all careers available in a specific category (Technology, Healthcare, Business, etc.)"
    }

    fn examples(&self) -> &'static [&'static [ExampleTurn]] {
        &[&[
            ExampleTurn {
                user: USER,
                text: "What are the careers in technology?",
            },
            ExampleTurn {
                user: COUNSELOR,
                text: "Here are the technology careers I can help you with...",
            },
        ]]
    }

    fn apology(&self) -> &'static str {
        "I apologize, but I encountered an error while fetching careers by category. Please try again."
    }

    fn respond(&self, runtime: &AgentRuntime, text: &str) -> Result<String> {
        let catalog = runtime.catalog();
        let available = catalog
            .categories()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let Some(category) = extract_category(&text.to_lowercase()) else {
            return Ok(format!(
                "I couldn't identify the category. Available categories are: {}. Which category interests you?",
                available
            ));
        };

        let careers = catalog.careers_by_category(category.as_str());
        if careers.is_empty() {
            warn!("No careers listed under {}", category);
            return Ok(format!(
                "I don't have careers listed under \"{}\". Available categories are: {}.",
                category, available
            ));
        }
        format::counselor::category_listing(category, &careers)
    }
}

/// The four Counselor actions in registration order.
pub fn actions() -> Vec<Box<dyn Action>> {
    vec![
        Box::new(GetCareerRecommendations),
        Box::new(GetCareerDetails),
        Box::new(CompareCareers),
        Box::new(GetCareersByCategory),
    ]
}
