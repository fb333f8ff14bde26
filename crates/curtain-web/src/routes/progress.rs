//! Read-only views of the roster.

use axum::{extract::State, Json};
use curtain_core::ProgressSnapshot;

use crate::state::AppState;

/// GET /api/progress - current progress snapshot.
pub async fn get_progress(State(state): State<AppState>) -> Json<ProgressSnapshot> {
    Json(state.relay.snapshot())
}

/// GET /api/users - required users in display order.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.relay.required())
}
