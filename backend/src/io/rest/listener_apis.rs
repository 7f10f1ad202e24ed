use axum::{extract::State, response::Json};
use log::info;

use shared::OutsideClickListenersResponse;

use crate::AppState;

/// Overlays that want outside-click notifications right now
pub async fn get_active_listeners(State(state): State<AppState>) -> Json<OutsideClickListenersResponse> {
    info!("GET /api/listeners");

    let scopes = state
        .listeners
        .active_scopes()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(OutsideClickListenersResponse { scopes })
}
