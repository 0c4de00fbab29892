//! Handler contract types shared with the host runtime.

use std::collections::HashMap;
use std::sync::Arc;

use careerwise_catalog::Catalog;
use careerwise_core::CareerwiseConfig;
use serde::{Deserialize, Serialize};

/// Identifier of every action the two plugins expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    GetCareerRecommendations,
    GetCareerDetails,
    CompareCareers,
    GetCareersByCategory,
    GetCareerWarnings,
    GetRiskAssessment,
    GetBurnoutAnalysis,
    GetMarketRealityCheck,
    GetTopRiskCareers,
    HelloWorldRealist,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetCareerRecommendations => "GET_CAREER_RECOMMENDATIONS",
            Self::GetCareerDetails => "GET_CAREER_DETAILS",
            Self::CompareCareers => "COMPARE_CAREERS",
            Self::GetCareersByCategory => "GET_CAREERS_BY_CATEGORY",
            Self::GetCareerWarnings => "GET_CAREER_WARNINGS",
            Self::GetRiskAssessment => "GET_RISK_ASSESSMENT",
            Self::GetBurnoutAnalysis => "GET_BURNOUT_ANALYSIS",
            Self::GetMarketRealityCheck => "GET_MARKET_REALITY_CHECK",
            Self::GetTopRiskCareers => "GET_TOP_RISK_CAREERS",
            Self::HelloWorldRealist => "HELLO_WORLD_REALIST",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only payload a handler callback ever receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub text: String,
    pub action: ActionKind,
}

impl ActionResponse {
    pub fn new(action: ActionKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action,
        }
    }
}

/// Message body as delivered by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// An incoming message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: Content,
}

impl Memory {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            id: None,
            content: Content {
                text: text.into(),
                source: None,
            },
        }
    }
}

/// Conversation state passed through by the host. Not consulted by any
/// action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub values: HashMap<String, serde_json::Value>,
}

/// Per-call options passed through by the host. Not consulted by any action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandlerOptions {
    #[serde(default)]
    pub values: HashMap<String, serde_json::Value>,
}

/// What an action can reach while handling a message.
#[derive(Debug, Clone)]
pub struct AgentRuntime {
    pub catalog: Arc<Catalog>,
    /// Entries listed by the top-risk action.
    pub top_risk_limit: usize,
}

impl AgentRuntime {
    pub fn new(catalog: Arc<Catalog>, config: &CareerwiseConfig) -> Self {
        Self {
            catalog,
            top_risk_limit: config.top_risk_limit,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// One turn of a sample conversation shown to the host's intent router.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExampleTurn {
    pub user: &'static str,
    pub text: &'static str,
}
