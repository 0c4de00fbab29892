//! Local action dispatch: runs one action through the handler contract.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use careerwise_actions::{Content, Memory};
use serde::Deserialize;
use tracing::debug;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/actions/{name}", post(run_action))
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub text: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// POST /api/actions/{name}
async fn run_action(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<ActionRequest>,
) -> impl IntoResponse {
    let id = uuid::Uuid::new_v4().to_string();
    let message = Memory {
        id: Some(id.clone()),
        content: Content {
            text: req.text,
            source: req.source,
        },
    };
    debug!("Dispatching {} for message {}", name, id);

    match state.dispatch(&name, &message) {
        Some(response) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "id": id,
                "action": response.action,
                "text": response.text,
                "createdAt": chrono::Utc::now().to_rfc3339(),
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("Unknown action: {}", name),
            })),
        ),
    }
}
