//! Realist actions: per-career cautions over the caution store, the
//! top-risk ranking and the greeting.

use careerwise_catalog::CautionRecord;
use careerwise_core::Result;
use careerwise_extract::extract_caution_name;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::format::{self, ambiguity_note};
use crate::types::{ActionKind, AgentRuntime, ExampleTurn};

const REALIST: &str = "Eliza Career Realist";
const USER: &str = "{{user1}}";

pub const GREETING: &str = "Hello! I'm Eliza Career Realist. I provide honest, evidence-based warnings about career challenges. While I believe in pursuing your dreams, I also believe in being fully aware of the difficulties involved. What career are you considering?";

/// A lookup-and-render action over a single caution record.
///
/// The four per-career Realist actions differ only in their texts and
/// layout, so they share one implementation.
pub struct CautionAction {
    kind: ActionKind,
    similes: &'static [&'static str],
    description: &'static str,
    examples: &'static [&'static [ExampleTurn]],
    clarify: &'static str,
    apology: &'static str,
    unknown: fn(&str, &str) -> String,
    render: fn(&CautionRecord) -> Result<String>,
}

impl Action for CautionAction {
    fn kind(&self) -> ActionKind {
        self.kind
    }

    fn similes(&self) -> &'static [&'static str] {
        self.similes
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn examples(&self) -> &'static [&'static [ExampleTurn]] {
        self.examples
    }

    fn apology(&self) -> &'static str {
        self.apology
    }

    fn respond(&self, runtime: &AgentRuntime, text: &str) -> Result<String> {
        let catalog = runtime.catalog();
        let Some(name) = extract_caution_name(&text.to_lowercase(), catalog) else {
            return Ok(self.clarify.to_string());
        };
        debug!("{} extracted {:?}", self.kind, name);

        let Some(found) = catalog.find_caution(name.as_str()) else {
            warn!("No caution record for {:?}", name.as_str());
            let available = catalog.caution_names().join(", ");
            return Ok((self.unknown)(name.as_str(), &available));
        };

        let mut out = (self.render)(found.record)?;
        if found.is_ambiguous() {
            out.push_str(&ambiguity_note(&found.record.career_name, &found.also_matched));
        }
        Ok(out)
    }
}

pub fn career_warnings() -> CautionAction {
    CautionAction {
        kind: ActionKind::GetCareerWarnings,
        similes: &[
            "career risks",
            "career cautions",
            "what are the downsides",
            "career challenges",
            "realistic view of",
            "potential problems with",
            "career warnings for",
        ],
        description: "Provides realistic warnings and cautions about potential challenges, risks, and downsides of specific careers",
        examples: &[&[
            ExampleTurn {
                user: USER,
                text: "What are the risks of becoming a doctor?",
            },
            ExampleTurn {
                user: REALIST,
                text: "Medical career involves significant risks: extreme competition (5% success rate in NEET), high educational debt (₹50-100 lakh), severe burnout (70% of doctors affected), and poor work-life balance with 70-80 hour work weeks. Many doctors struggle with these challenges even after 10+ years.",
            },
        ]],
        clarify: "I need to know which career you're asking about to provide specific warnings. Could you please specify the career name?",
        apology: "I apologize, but I encountered an error while retrieving career warnings. Please try again.",
        unknown: |name, available| {
            format!(
                "I don't have specific cautionary information for \"{}\". I can provide warnings for these careers: {}. Which one interests you?",
                name, available
            )
        },
        render: format::realist::warnings,
    }
}

pub fn risk_assessment() -> CautionAction {
    CautionAction {
        kind: ActionKind::GetRiskAssessment,
        similes: &[
            "risk assessment",
            "career risk analysis",
            "how risky is",
            "danger level of",
            "stability of career",
            "job security for",
        ],
        description: "Provides comprehensive risk assessment including burnout potential, market saturation, and future viability concerns",
        examples: &[&[
            ExampleTurn {
                user: USER,
                text: "How risky is a career in journalism?",
            },
            ExampleTurn {
                user: REALIST,
                text: "Journalism carries HIGH risk: declining industry with significant job losses, very low starting salaries, high burnout from irregular hours and emotional toll, and poor job security with frequent layoffs.",
            },
        ]],
        clarify: "Please specify which career you'd like me to assess for risks.",
        apology: "I apologize, but I encountered an error during risk assessment. Please try again.",
        unknown: |name, available| {
            format!(
                "I don't have risk assessment data for \"{}\". Available careers: {}",
                name, available
            )
        },
        render: format::realist::risk_assessment,
    }
}

pub fn burnout_analysis() -> CautionAction {
    CautionAction {
        kind: ActionKind::GetBurnoutAnalysis,
        similes: &[
            "burnout risk",
            "stress level of",
            "work pressure in",
            "mental health concerns",
            "emotional toll of",
        ],
        description: "Analyzes burnout risks, work pressure, and mental health concerns for specific careers",
        examples: &[&[
            ExampleTurn {
                user: USER,
                text: "How stressful is being a doctor?",
            },
            ExampleTurn {
                user: REALIST,
                text: "Medical profession has VERY HIGH burnout risk: 70% of doctors experience burnout within 5 years, work 70-80 hours/week regularly, and face a high emotional toll from patient suffering.",
            },
        ]],
        clarify: "Which career would you like me to analyze for burnout risks?",
        apology: "I apologize, but I encountered an error during burnout analysis. Please try again.",
        unknown: |name, available| {
            format!(
                "I don't have burnout analysis data for \"{}\". Please specify a career from our database: {}",
                name, available
            )
        },
        render: format::realist::burnout_analysis,
    }
}

pub fn market_reality_check() -> CautionAction {
    CautionAction {
        kind: ActionKind::GetMarketRealityCheck,
        similes: &[
            "market reality",
            "job market for",
            "competition level",
            "demand for",
            "saturation in",
            "how hard to get job in",
        ],
        description: "Provides realistic assessment of job market conditions, competition levels, and employment challenges",
        examples: &[&[
            ExampleTurn {
                user: USER,
                text: "How competitive is the software engineering job market?",
            },
            ExampleTurn {
                user: REALIST,
                text: "Software engineering has VERY HIGH competition: thousands of applicants per job opening and 40% of fresh graduates unemployed for 6+ months.",
            },
        ]],
        clarify: "Which career would you like me to check for market realities?",
        apology: "I apologize, but I encountered an error during market analysis. Please try again.",
        unknown: |name, available| {
            format!(
                "I don't have market data for \"{}\". Please choose from available careers: {}",
                name, available
            )
        },
        render: format::realist::market_reality,
    }
}

pub struct GetTopRiskCareers;

impl Action for GetTopRiskCareers {
    fn kind(&self) -> ActionKind {
        ActionKind::GetTopRiskCareers
    }

    fn similes(&self) -> &'static [&'static str] {
        &[
            "riskiest careers",
            "most challenging careers",
            "careers with highest burnout",
            "most competitive fields",
            "hardest careers to break into",
        ]
    }

    fn description(&self) -> &'static str {
        "Provides list of careers with highest risks, challenges, and competition levels"
    }

    fn examples(&self) -> &'static [&'static [ExampleTurn]] {
        &[&[
            ExampleTurn {
                user: USER,
                text: "What are the riskiest career choices?",
            },
            ExampleTurn {
                user: REALIST,
                text: "Based on market saturation, burnout risk, and competition levels, here are the riskiest careers: Medical Doctor (High Risk), Journalist (High Risk), then the Medium-risk fields.",
            },
        ]]
    }

    fn apology(&self) -> &'static str {
        "I apologize, but I encountered an error retrieving risk data. Please try again."
    }

    fn respond(&self, runtime: &AgentRuntime, _text: &str) -> Result<String> {
        let risks = runtime.catalog().top_risks(runtime.top_risk_limit);
        info!("Listing {} top-risk careers", risks.len());
        format::realist::top_risks(&risks)
    }
}

pub struct HelloWorldRealist;

impl Action for HelloWorldRealist {
    fn kind(&self) -> ActionKind {
        ActionKind::HelloWorldRealist
    }

    fn similes(&self) -> &'static [&'static str] {
        &["GREET_REALIST", "SAY_HELLO_REALIST"]
    }

    fn description(&self) -> &'static str {
        "Responds with a realistic, cautionary greeting message"
    }

    fn examples(&self) -> &'static [&'static [ExampleTurn]] {
        &[&[
            ExampleTurn {
                user: USER,
                text: "Hello",
            },
            ExampleTurn {
                user: REALIST,
                text: GREETING,
            },
        ]]
    }

    fn apology(&self) -> &'static str {
        "Hello! I'm Eliza Career Realist. What career are you considering?"
    }

    fn respond(&self, _runtime: &AgentRuntime, _text: &str) -> Result<String> {
        info!("Handling {}", self.kind());
        Ok(GREETING.to_string())
    }
}

/// The Realist actions in registration order, greeting last.
pub fn actions() -> Vec<Box<dyn Action>> {
    vec![
        Box::new(career_warnings()),
        Box::new(risk_assessment()),
        Box::new(burnout_analysis()),
        Box::new(market_reality_check()),
        Box::new(GetTopRiskCareers),
        Box::new(HelloWorldRealist),
    ]
}
