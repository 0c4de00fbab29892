//! Shared application state.

use std::sync::Arc;

use careerwise_actions::{
    counselor_plugin, realist_plugin, Action, ActionResponse, AgentRuntime, Memory, Plugin,
};
use careerwise_catalog::Catalog;
use careerwise_core::CareerwiseConfig;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: CareerwiseConfig,
    pub catalog: Arc<Catalog>,
    pub runtime: AgentRuntime,
    pub plugins: Vec<Plugin>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: CareerwiseConfig, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let runtime = AgentRuntime::new(catalog.clone(), &config);
        let plugins = vec![counselor_plugin(), realist_plugin()];
        info!(
            "Catalog ready: {} careers, {} cautions, {} plugins",
            catalog.careers().len(),
            catalog.cautions().len(),
            plugins.len()
        );
        Self {
            config,
            catalog,
            runtime,
            plugins,
            started_at: Utc::now(),
        }
    }

    /// Find an action by identifier across every registered plugin.
    pub fn find_action(&self, name: &str) -> Option<&dyn Action> {
        self.plugins.iter().find_map(|p| p.action(name))
    }

    /// Run an action through the handler contract. `None` when no plugin
    /// registers `name`.
    pub fn dispatch(&self, name: &str, message: &Memory) -> Option<ActionResponse> {
        let Some(action) = self.find_action(name) else {
            warn!("Unknown action requested: {}", name);
            return None;
        };
        Some(action.run(&self.runtime, message))
    }
}
