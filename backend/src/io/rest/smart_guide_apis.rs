use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::info;

use shared::{SelectSmartLetterRequest, SmartGuideView};

use crate::io::rest::mappers::SmartGuideMapper;
use crate::{lock, AppState};

/// Create a router for the SMART guide
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_guide))
        .route("/select", post(select_letter))
        .route("/outside-click", post(outside_click))
}

fn guide_view(state: &AppState) -> SmartGuideView {
    let percentage = lock(&state.goal_service).summary().percentage;
    SmartGuideMapper::to_view(&lock(&state.smart_guide), percentage)
}

pub async fn get_guide(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/smart-guide");
    Json(guide_view(&state))
}

pub async fn select_letter(
    State(state): State<AppState>,
    Json(request): Json<SelectSmartLetterRequest>,
) -> impl IntoResponse {
    info!("POST /api/smart-guide/select - letter: {}", request.letter);
    lock(&state.smart_guide).select(request.letter);
    Json(guide_view(&state))
}

pub async fn outside_click(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/smart-guide/outside-click");
    lock(&state.smart_guide).outside_click();
    Json(guide_view(&state))
}
