//! Plugin descriptor routes: the list of plugins and each plugin's own
//! static GET endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use careerwise_actions::Plugin;

use crate::state::AppState;

pub fn routes(plugins: &[Plugin]) -> Router<Arc<AppState>> {
    let mut router = Router::new()
        .route("/plugins", get(list_plugins))
        .route("/status", get(get_status));
    for plugin in plugins {
        let route = plugin.route;
        router = router.route(route.path, get(move || async move { Json(route) }));
    }
    router
}

/// GET /api/plugins: every registered plugin with its persona and actions.
async fn list_plugins(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let plugins: Vec<_> = state.plugins.iter().map(Plugin::descriptor).collect();
    Json(serde_json::json!({ "plugins": plugins }))
}

/// GET /api/status: catalog sizes and uptime.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let uptime = chrono::Utc::now() - state.started_at;
    Json(serde_json::json!({
        "status": "ok",
        "careers": state.catalog.careers().len(),
        "cautions": state.catalog.cautions().len(),
        "categories": state.catalog.categories(),
        "topRiskLimit": state.config.top_risk_limit,
        "startedAt": state.started_at.to_rfc3339(),
        "uptimeSeconds": uptime.num_seconds(),
    }))
}
