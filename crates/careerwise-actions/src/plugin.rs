//! Plugin bundles: persona, registered actions and the descriptor route.

use serde::Serialize;
use tracing::info;

use crate::action::Action;
use crate::{counselor, realist};

/// Agent persona shipped with a plugin.
#[derive(Debug, Clone, Serialize)]
pub struct Character {
    pub name: &'static str,
    pub system: &'static str,
    pub bio: &'static [&'static str],
    pub topics: &'static [&'static str],
}

/// The single static GET endpoint a plugin exposes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Route {
    #[serde(rename = "endpoint")]
    pub path: &'static str,
    pub message: &'static str,
    pub description: &'static str,
}

pub struct Plugin {
    pub name: &'static str,
    pub description: &'static str,
    pub character: Character,
    pub actions: Vec<Box<dyn Action>>,
    pub route: Route,
}

impl Plugin {
    /// Look up a registered action by its identifier, case-insensitively.
    pub fn action(&self, name: &str) -> Option<&dyn Action> {
        self.actions
            .iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .map(|a| &**a)
    }

    pub fn action_names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.name()).collect()
    }

    pub fn descriptor(&self) -> PluginDescriptor<'_> {
        PluginDescriptor {
            name: self.name,
            description: self.description,
            character: &self.character,
            route: self.route.path,
            actions: self
                .actions
                .iter()
                .map(|a| ActionDescriptor {
                    name: a.name(),
                    description: a.description(),
                    similes: a.similes(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub similes: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct PluginDescriptor<'a> {
    pub name: &'static str,
    pub description: &'static str,
    pub character: &'a Character,
    pub route: &'static str,
    pub actions: Vec<ActionDescriptor>,
}

pub const COUNSELOR_CHARACTER: Character = Character {
    name: "Eliza Career Counselor",
    system: "You are Eliza Career Counselor, a friendly and knowledgeable career guidance expert specializing in helping Indian high school students (grades 11-12) explore career options. Your primary goal is to provide comprehensive career information including salary ranges, lifestyle implications, educational requirements, and personalized recommendations based on students' interests, subjects, and aspirations. Always consider the Indian context including regional differences, family expectations, and practical considerations. Be supportive, encouraging, and realistic about career prospects while helping students make informed decisions about their future.",
    bio: &[
        "Specialized career counselor for Indian high school students (grades 11-12)",
        "Provides comprehensive career guidance with salary, lifestyle, and education details",
        "Offers personalized career recommendations based on interests and subjects",
        "Considers Indian context including regional differences and family expectations",
        "Helps students make informed decisions about their future career paths",
        "Supports students through career exploration and decision-making process",
        "Provides realistic and practical career advice",
        "Encourages students to pursue their passions while being practical",
    ],
    topics: &[
        "career guidance and counseling",
        "educational pathways and requirements",
        "salary and compensation information",
        "career lifestyle and work environment",
        "subject choice and stream selection",
        "higher education options",
        "job market trends in India",
        "work-life balance considerations",
    ],
};

pub const REALIST_CHARACTER: Character = Character {
    name: "Eliza Career Realist",
    system: "You are Eliza Career Realist, a pragmatic and honest career advisor who provides realistic warnings and cautions about career choices. Your role is to balance optimism with practical realities, highlighting potential pitfalls, challenges, and sacrifices that students should consider before committing to a career path. You help students make informed decisions by discussing market saturation, burnout risks, financial realities, work-life balance challenges, and future viability concerns. Always be honest about the difficulties while acknowledging that overcoming challenges can lead to rewarding careers. Focus on evidence-based warnings while maintaining empathy and encouragement.",
    bio: &[
        "Career cautionary advisor providing realistic warnings about career choices",
        "Highlights potential pitfalls, challenges, and sacrifices in different professions",
        "Balances optimism with practical realities of job markets and work environments",
        "Helps students understand market saturation and competition levels",
        "Discusses burnout risks, work-life balance challenges, and financial realities",
        "Provides evidence-based warnings about career stability and future viability",
        "Maintains empathy while being honest about career challenges",
        "Encourages informed decision-making with full awareness of potential difficulties",
    ],
    topics: &[
        "career warnings and cautions",
        "market saturation concerns",
        "burnout risks and prevention",
        "financial realities of careers",
        "work-life balance challenges",
        "job market competition analysis",
        "career stability and future viability",
        "realistic career expectations",
        "educational debt and ROI concerns",
        "alternative career paths and backups",
    ],
};

pub fn counselor_plugin() -> Plugin {
    let plugin = Plugin {
        name: "career-counselor",
        description: "Career Counselor plugin providing career guidance for Indian high school students",
        character: COUNSELOR_CHARACTER,
        actions: counselor::actions(),
        route: Route {
            path: "/career-counselor",
            message: "Career Counselor API - Career guidance for Indian high school students",
            description: "Access career recommendations, details, comparisons and category listings",
        },
    };
    info!("Initialized {} plugin with {} actions", plugin.name, plugin.actions.len());
    plugin
}

pub fn realist_plugin() -> Plugin {
    let plugin = Plugin {
        name: "career-realist",
        description: "Career Realist plugin providing honest warnings and cautions about career choices",
        character: REALIST_CHARACTER,
        actions: realist::actions(),
        route: Route {
            path: "/cautions",
            message: "Career Realist API - Providing honest career warnings",
            description: "Access realistic warnings and cautions about career choices",
        },
    };
    info!("Initialized {} plugin with {} actions", plugin.name, plugin.actions.len());
    plugin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counselor_registration() {
        let plugin = counselor_plugin();
        assert_eq!(
            plugin.action_names(),
            vec![
                "GET_CAREER_RECOMMENDATIONS",
                "GET_CAREER_DETAILS",
                "COMPARE_CAREERS",
                "GET_CAREERS_BY_CATEGORY"
            ]
        );
    }

    #[test]
    fn test_realist_registration() {
        let names = realist_plugin().action_names();
        for name in [
            "GET_CAREER_WARNINGS",
            "GET_RISK_ASSESSMENT",
            "GET_BURNOUT_ANALYSIS",
            "GET_MARKET_REALITY_CHECK",
            "GET_TOP_RISK_CAREERS",
            "HELLO_WORLD_REALIST",
        ] {
            assert!(names.contains(&name), "missing {}", name);
        }
    }

    #[test]
    fn test_action_lookup_ignores_case() {
        let plugin = realist_plugin();
        assert!(plugin.action("get_career_warnings").is_some());
        assert!(plugin.action("GET_CAREER_DETAILS").is_none());
    }

    #[test]
    fn test_route_descriptor_shape() {
        let json = serde_json::to_value(realist_plugin().route).unwrap();
        assert_eq!(json["endpoint"], "/cautions");
        assert_eq!(json["message"], "Career Realist API - Providing honest career warnings");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_descriptor_includes_persona() {
        let plugin = counselor_plugin();
        let json = serde_json::to_value(plugin.descriptor()).unwrap();
        assert_eq!(json["character"]["name"], "Eliza Career Counselor");
        assert_eq!(json["actions"].as_array().unwrap().len(), 4);
    }
}
