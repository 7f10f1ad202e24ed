//! # REST API for Goal Management
//!
//! Endpoints for listing, adding, advancing and removing goals, plus the
//! "new goal" draft form.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use log::{error, info, warn};

use shared::{
    AddGoalRequest, AddGoalResponse, GoalListResponse, IncrementProgressResponse,
    RemoveGoalResponse, StepRepeatsRequest, SubmitGoalDraftResponse, UpdateGoalDraftRequest,
};

use crate::domain::commands::goal::AddGoalCommand;
use crate::io::rest::mappers::GoalMapper;
use crate::{lock, AppState};

/// Create a router for goal related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_goals).post(add_goal))
        .route("/progress", get(get_progress))
        .route("/:id", delete(remove_goal))
        .route("/:id/progress", post(increment_progress))
        .route("/draft", get(get_draft).put(update_draft))
        .route("/draft/focus", post(focus_draft))
        .route("/draft/repeats", post(step_draft_repeats))
        .route("/draft/repeats/expand", post(expand_draft_repeats))
        .route("/draft/submit", post(submit_draft))
}

/// List goals in display order with the overall progress
pub async fn list_goals(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/goals");

    let service = lock(&state.goal_service);
    let response = GoalListResponse {
        goals: GoalMapper::to_cards(service.goals(), service.today()),
        progress: GoalMapper::to_progress_dto(service.summary()),
    };
    (StatusCode::OK, Json(response))
}

pub async fn get_progress(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/goals/progress");

    let summary = lock(&state.goal_service).summary();
    Json(GoalMapper::to_progress_dto(summary))
}

/// Add a goal directly from a request body
pub async fn add_goal(
    State(state): State<AppState>,
    Json(request): Json<AddGoalRequest>,
) -> impl IntoResponse {
    info!("POST /api/goals - request: {:?}", request);

    let command = AddGoalCommand {
        text: request.text,
        target_date: request.target_date,
        total: request.total,
    };

    let mut service = lock(&state.goal_service);
    match service.add_goal(command) {
        Ok(goal) => {
            let response = AddGoalResponse {
                goal: GoalMapper::to_card(&goal, service.today()),
                success_message: "Goal added successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Rejected goal: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Mark one more repeat done
pub async fn increment_progress(
    State(state): State<AppState>,
    Path(goal_id): Path<u64>,
) -> impl IntoResponse {
    info!("POST /api/goals/{}/progress", goal_id);

    let mut service = lock(&state.goal_service);
    let outcome = service.increment_progress(goal_id);
    let today = service.today();

    let outcome = GoalMapper::to_outcome_dto(outcome);
    if !outcome.is_mutation() {
        warn!("Goal {} left unchanged: {:?}", goal_id, outcome);
    }

    let response = IncrementProgressResponse {
        outcome,
        goal: service
            .get_goal(goal_id)
            .map(|goal| GoalMapper::to_card(goal, today)),
        progress: GoalMapper::to_progress_dto(service.summary()),
    };
    Json(response)
}

pub async fn remove_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<u64>,
) -> impl IntoResponse {
    info!("DELETE /api/goals/{}", goal_id);

    let mut service = lock(&state.goal_service);
    let removed = service.remove_goal(goal_id);
    Json(RemoveGoalResponse {
        removed,
        progress: GoalMapper::to_progress_dto(service.summary()),
    })
}

pub async fn get_draft(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/goals/draft");
    let view = GoalMapper::to_draft_view(&lock(&state.goal_draft));
    Json(view)
}

/// Apply typed text and/or repeats input
pub async fn update_draft(
    State(state): State<AppState>,
    Json(request): Json<UpdateGoalDraftRequest>,
) -> impl IntoResponse {
    info!("PUT /api/goals/draft - request: {:?}", request);

    let mut draft = lock(&state.goal_draft);
    if let Some(text) = &request.text {
        draft.set_text(text);
    }
    if let Some(repeats) = &request.repeats {
        draft.set_repeats(repeats);
    }
    Json(GoalMapper::to_draft_view(&draft))
}

pub async fn focus_draft(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/goals/draft/focus");

    let mut draft = lock(&state.goal_draft);
    draft.focus();
    Json(GoalMapper::to_draft_view(&draft))
}

pub async fn step_draft_repeats(
    State(state): State<AppState>,
    Json(request): Json<StepRepeatsRequest>,
) -> impl IntoResponse {
    info!("POST /api/goals/draft/repeats - delta: {}", request.delta);

    let mut draft = lock(&state.goal_draft);
    draft.step_repeats(request.delta);
    Json(GoalMapper::to_draft_view(&draft))
}

pub async fn expand_draft_repeats(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/goals/draft/repeats/expand");

    let mut draft = lock(&state.goal_draft);
    draft.expand_repeats();
    Json(GoalMapper::to_draft_view(&draft))
}

/// Submit the draft to the goal store. On success the draft and the date
/// picker are both reset.
pub async fn submit_draft(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/goals/draft/submit");

    let command = lock(&state.goal_draft).to_command();

    let result = {
        let mut service = lock(&state.goal_service);
        let today = service.today();
        service
            .add_goal(command)
            .map(|goal| GoalMapper::to_card(&goal, today))
    };

    match result {
        Ok(card) => {
            lock(&state.date_picker).set_value("");
            let mut draft = lock(&state.goal_draft);
            draft.reset();

            let response = SubmitGoalDraftResponse {
                goal: Some(card),
                rejection: None,
                draft: GoalMapper::to_draft_view(&draft),
            };
            (StatusCode::CREATED, Json(response))
        }
        Err(e) => {
            error!("Failed to submit goal draft: {}", e);
            let response = SubmitGoalDraftResponse {
                goal: None,
                rejection: Some(e.to_string()),
                draft: GoalMapper::to_draft_view(&lock(&state.goal_draft)),
            };
            (StatusCode::BAD_REQUEST, Json(response))
        }
    }
}
