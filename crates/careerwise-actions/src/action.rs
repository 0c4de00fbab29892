//! The action trait and its handler boundary.

use careerwise_core::Result;
use tracing::{debug, error};

use crate::types::{
    ActionKind, ActionResponse, AgentRuntime, ExampleTurn, HandlerOptions, Memory, State,
};

/// A host-routable action.
///
/// Implementors supply [`Action::respond`]; the provided [`Action::handle`]
/// turns its outcome into exactly one callback invocation. Only returned
/// errors are translated, so `respond` must report failures as `Err` and
/// never panic.
pub trait Action: Send + Sync {
    fn kind(&self) -> ActionKind;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Trigger phrases for the host's intent router.
    fn similes(&self) -> &'static [&'static str];

    fn description(&self) -> &'static str;

    fn examples(&self) -> &'static [&'static [ExampleTurn]];

    /// Reply used when [`Action::respond`] fails.
    fn apology(&self) -> &'static str;

    /// Every action accepts every message.
    fn validate(&self, _runtime: &AgentRuntime, _message: &Memory) -> bool {
        true
    }

    /// Produce the reply text for a message.
    fn respond(&self, runtime: &AgentRuntime, text: &str) -> Result<String>;

    /// Host entry point. Calls `callback` exactly once, provided `respond`
    /// returns rather than panics.
    fn handle(
        &self,
        runtime: &AgentRuntime,
        message: &Memory,
        _state: &State,
        _options: &HandlerOptions,
        callback: &mut dyn FnMut(ActionResponse),
    ) {
        debug!("{} handling {:?}", self.name(), message.content.text);
        let text = match self.respond(runtime, &message.content.text) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                error!("{} produced an empty reply", self.name());
                self.apology().to_string()
            }
            Err(e) => {
                error!("Error in {}: {}", self.name(), e);
                self.apology().to_string()
            }
        };
        callback(ActionResponse::new(self.kind(), text));
    }

    /// Convenience wrapper returning the single response instead of taking a
    /// callback.
    fn run(&self, runtime: &AgentRuntime, message: &Memory) -> ActionResponse {
        let mut reply = None;
        self.handle(
            runtime,
            message,
            &State::default(),
            &HandlerOptions::default(),
            &mut |response| reply = Some(response),
        );
        reply.unwrap_or_else(|| ActionResponse::new(self.kind(), self.apology()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use careerwise_catalog::Catalog;
    use careerwise_core::Error;

    struct Failing;

    impl Action for Failing {
        fn kind(&self) -> ActionKind {
            ActionKind::GetCareerDetails
        }
        fn similes(&self) -> &'static [&'static str] {
            &[]
        }
        fn description(&self) -> &'static str {
            "always fails"
        }
        fn examples(&self) -> &'static [&'static [ExampleTurn]] {
            &[]
        }
        fn apology(&self) -> &'static str {
            "sorry"
        }
        fn respond(&self, _runtime: &AgentRuntime, _text: &str) -> Result<String> {
            Err(Error::Internal("boom".into()))
        }
    }

    fn runtime() -> AgentRuntime {
        AgentRuntime {
            catalog: Arc::new(Catalog::builtin().unwrap()),
            top_risk_limit: 5,
        }
    }

    #[test]
    fn test_error_becomes_apology_once() {
        let mut calls = Vec::new();
        Failing.handle(
            &runtime(),
            &Memory::from_text("anything"),
            &State::default(),
            &HandlerOptions::default(),
            &mut |r| calls.push(r),
        );
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].text, "sorry");
        assert_eq!(calls[0].action, ActionKind::GetCareerDetails);
    }

    #[test]
    fn test_validate_accepts_everything() {
        assert!(Failing.validate(&runtime(), &Memory::from_text("")));
    }
}
