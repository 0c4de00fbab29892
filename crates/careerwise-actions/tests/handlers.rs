//! Drives every action through the host handler contract.

use std::sync::Arc;

use careerwise_actions::{
    counselor_plugin, realist_plugin, Action, ActionKind, ActionResponse, AgentRuntime,
    HandlerOptions, Memory, State,
};
use careerwise_catalog::Catalog;

fn runtime() -> AgentRuntime {
    AgentRuntime {
        catalog: Arc::new(Catalog::builtin().unwrap()),
        top_risk_limit: 5,
    }
}

fn call(action: &dyn Action, text: &str) -> Vec<ActionResponse> {
    let mut calls = Vec::new();
    action.handle(
        &runtime(),
        &Memory::from_text(text),
        &State::default(),
        &HandlerOptions::default(),
        &mut |response| calls.push(response),
    );
    calls
}

fn single(plugin_action: &dyn Action, text: &str) -> ActionResponse {
    let mut calls = call(plugin_action, text);
    assert_eq!(calls.len(), 1, "{} called back {} times", plugin_action.name(), calls.len());
    calls.remove(0)
}

#[test]
fn test_recommendations_for_stream_and_interest() {
    let plugin = counselor_plugin();
    let action = plugin.action("GET_CAREER_RECOMMENDATIONS").unwrap();
    let response = single(action, "I am in PCM and interested in technology");
    assert_eq!(response.action, ActionKind::GetCareerRecommendations);
    assert!(response.text.contains("recommendations"));
    assert!(response.text.contains("Software Engineer"));
}

#[test]
fn test_recommendations_with_budget_only() {
    let plugin = counselor_plugin();
    let action = plugin.action("GET_CAREER_RECOMMENDATIONS").unwrap();
    let response = single(action, "careers with salary 5 to 10 lakh");
    assert!(response.text.contains("1. **"));
}

#[test]
fn test_details_for_known_career() {
    let plugin = counselor_plugin();
    let action = plugin.action("GET_CAREER_DETAILS").unwrap();
    let response = single(action, "tell me about software engineer");
    assert_eq!(response.action, ActionKind::GetCareerDetails);
    assert!(response.text.contains("Software Engineer"));
    assert!(response.text.contains("### Salary Information"));
}

#[test]
fn test_compare_two_careers() {
    let plugin = counselor_plugin();
    let action = plugin.action("COMPARE_CAREERS").unwrap();
    let response = single(action, "compare software engineer vs doctor");
    assert_eq!(response.action, ActionKind::CompareCareers);
    assert!(response.text.contains("comparison"));
    assert!(response.text.contains("Software Engineer"));
    assert!(response.text.contains("Medical Doctor (MBBS)"));
}

#[test]
fn test_compare_needs_two_names() {
    let plugin = counselor_plugin();
    let action = plugin.action("COMPARE_CAREERS").unwrap();
    let response = single(action, "compare single career");
    assert!(response.text.contains("at least two career names"));
}

#[test]
fn test_careers_by_category() {
    let plugin = counselor_plugin();
    let action = plugin.action("GET_CAREERS_BY_CATEGORY").unwrap();
    let response = single(action, "careers in technology");
    assert_eq!(response.action, ActionKind::GetCareersByCategory);
    assert!(response.text.contains("Technology Career Options"));
    assert!(response.text.contains("Data Scientist"));
}

#[test]
fn test_doctor_warnings() {
    let plugin = realist_plugin();
    let action = plugin.action("GET_CAREER_WARNINGS").unwrap();
    let response = single(action, "What are the risks of becoming a doctor?");
    assert_eq!(response.action, ActionKind::GetCareerWarnings);
    for needle in ["Medical career", "NEET", "burnout", "work-life balance", "educational debt"] {
        assert!(response.text.contains(needle), "missing {:?}", needle);
    }
}

#[test]
fn test_unknown_career_warnings() {
    let plugin = realist_plugin();
    let action = plugin.action("GET_CAREER_WARNINGS").unwrap();
    let response = single(action, "What are the risks of becoming a unicorn trainer?");
    assert!(response.text.contains("don't have specific cautionary information"));
    assert!(response.text.contains("Software Engineer"));
}

#[test]
fn test_risk_assessment_for_software_engineering() {
    let plugin = realist_plugin();
    let action = plugin.action("GET_RISK_ASSESSMENT").unwrap();
    let response = single(action, "How risky is software engineering?");
    assert_eq!(response.action, ActionKind::GetRiskAssessment);
    assert!(response.text.contains("Risk Assessment"));
    assert!(response.text.contains("Software Engineer"));
    assert!(response.text.contains("realistic"));
    assert!(response.text.contains("expectations"));
}

#[test]
fn test_burnout_analysis_for_nursing() {
    let plugin = realist_plugin();
    let action = plugin.action("GET_BURNOUT_ANALYSIS").unwrap();
    let response = single(action, "How stressful is being a nurse?");
    assert_eq!(response.action, ActionKind::GetBurnoutAnalysis);
    assert!(response.text.contains("Burnout Analysis"));
    assert!(response.text.contains("nursing"));
}

#[test]
fn test_market_reality_for_journalism() {
    let plugin = realist_plugin();
    let action = plugin.action("GET_MARKET_REALITY_CHECK").unwrap();
    let response = single(action, "How competitive is journalism?");
    assert_eq!(response.action, ActionKind::GetMarketRealityCheck);
    assert!(response.text.contains("Market Reality Check"));
    assert!(response.text.contains("journalism"));
}

#[test]
fn test_top_risk_careers() {
    let plugin = realist_plugin();
    let action = plugin.action("GET_TOP_RISK_CAREERS").unwrap();
    let response = single(action, "What are the riskiest careers?");
    assert_eq!(response.action, ActionKind::GetTopRiskCareers);
    for needle in ["Top Career Risks", "riskiest", "factors", "preparation", "backup"] {
        assert!(response.text.contains(needle), "missing {:?}", needle);
    }
}

#[test]
fn test_unknown_name_every_action_calls_back_once() {
    let counselor = counselor_plugin();
    let realist = realist_plugin();
    for action in counselor.actions.iter().chain(realist.actions.iter()) {
        let response = single(action.as_ref(), "tell me about the risks of unicorn trainer");
        assert!(!response.text.trim().is_empty(), "{} replied with empty text", action.name());
        assert_eq!(response.action, action.kind());
    }
}

#[test]
fn test_empty_message_every_action_calls_back_once() {
    let counselor = counselor_plugin();
    let realist = realist_plugin();
    for action in counselor.actions.iter().chain(realist.actions.iter()) {
        let response = single(action.as_ref(), "");
        assert!(!response.text.trim().is_empty());
        assert_eq!(response.action, action.kind());
    }
}

#[test]
fn test_validate_always_true() {
    let runtime = runtime();
    let message = Memory::from_text("test");
    for action in counselor_plugin().actions.iter().chain(realist_plugin().actions.iter()) {
        assert!(action.validate(&runtime, &message));
    }
}

#[test]
fn test_alternate_catalog_fixture() {
    let careers = r#"[{
        "id": "baker", "name": "Baker", "category": "Hospitality",
        "description": "Bakes bread", "salary": {"entry": 100, "mid": 200, "senior": 300},
        "lifestyle": {"workHours": "Early mornings", "workEnvironment": "Bakery",
            "stressLevel": "Low", "workLifeBalance": "Good", "travelRequired": false, "remoteWork": false},
        "education": {"stream": ["Any"], "degree": "None", "duration": "1 year"},
        "skills": ["Kneading"], "jobOutlook": "Stable", "pros": ["Bread"], "cons": ["Early"],
        "suitableFor": ["Early risers"], "alternatives": ["Chef"]
    }]"#;
    let catalog = Catalog::from_json(careers, "[]").unwrap();
    let runtime = AgentRuntime {
        catalog: Arc::new(catalog),
        top_risk_limit: 5,
    };
    let plugin = counselor_plugin();
    let response = plugin
        .action("GET_CAREER_DETAILS")
        .unwrap()
        .run(&runtime, &Memory::from_text("tell me about baker"));
    assert!(response.text.starts_with("## Baker"));
}
