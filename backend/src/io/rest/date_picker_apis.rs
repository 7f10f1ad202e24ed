//! # REST API for the Date Picker
//!
//! Every intent answers with the picker view. Intents that emit a new value
//! also write it into the goal draft's target date.

use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::{get, post, put},
    Router,
};
use log::{info, warn};

use shared::{ChangeMonthRequest, DatePickerResponse, SelectDayRequest, SetDateValueRequest};

use crate::domain::date_selection::DateSelectionController;
use crate::io::rest::mappers::CalendarMapper;
use crate::{lock, AppState};

/// Create a router for date picker related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_picker))
        .route("/open", post(open_picker))
        .route("/close", post(close_picker))
        .route("/outside-click", post(outside_click))
        .route("/clear", post(clear_date))
        .route("/today", post(select_today))
        .route("/select-day", post(select_day))
        .route("/change-month", post(change_month))
        .route("/value", put(set_value))
}

/// Run one intent against the picker, then forward any emitted value to the
/// draft once the picker lock is released
fn apply<F>(state: &AppState, intent: F) -> DatePickerResponse
where
    F: FnOnce(&mut DateSelectionController) -> Result<Option<String>, String>,
{
    let (result, view) = {
        let mut picker = lock(&state.date_picker);
        let result = intent(&mut picker);
        (result, CalendarMapper::to_picker_view(&picker.snapshot()))
    };

    match result {
        Ok(emitted) => {
            if let Some(value) = &emitted {
                lock(&state.goal_draft).set_target_date(value.clone());
            }
            DatePickerResponse {
                view,
                emitted,
                rejection: None,
            }
        }
        Err(rejection) => DatePickerResponse {
            view,
            emitted: None,
            rejection: Some(rejection),
        },
    }
}

pub async fn get_picker(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/date-picker");
    Json(apply(&state, |_| Ok(None)))
}

pub async fn open_picker(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/date-picker/open");
    Json(apply(&state, |picker| {
        picker.open();
        Ok(None)
    }))
}

pub async fn close_picker(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/date-picker/close");
    Json(apply(&state, |picker| {
        picker.close();
        Ok(None)
    }))
}

pub async fn outside_click(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/date-picker/outside-click");
    Json(apply(&state, |picker| {
        picker.outside_click();
        Ok(None)
    }))
}

pub async fn clear_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/date-picker/clear");
    Json(apply(&state, |picker| Ok(Some(picker.clear()))))
}

pub async fn select_today(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/date-picker/today");
    Json(apply(&state, |picker| Ok(Some(picker.today()))))
}

/// Pick a day of the displayed month. A refused day is reported in
/// `rejection` and nothing is emitted.
pub async fn select_day(
    State(state): State<AppState>,
    Json(request): Json<SelectDayRequest>,
) -> impl IntoResponse {
    info!("POST /api/date-picker/select-day - day: {}", request.day);
    Json(apply(&state, |picker| {
        picker.select_day(request.day).map(Some).map_err(|e| {
            warn!("Day selection refused: {}", e);
            e.to_string()
        })
    }))
}

pub async fn change_month(
    State(state): State<AppState>,
    Json(request): Json<ChangeMonthRequest>,
) -> impl IntoResponse {
    info!("POST /api/date-picker/change-month - delta: {}", request.delta);
    Json(apply(&state, |picker| {
        picker.change_month(request.delta);
        Ok(None)
    }))
}

/// Value pushed in by the owning form
pub async fn set_value(
    State(state): State<AppState>,
    Json(request): Json<SetDateValueRequest>,
) -> impl IntoResponse {
    info!("PUT /api/date-picker/value - value: {:?}", request.value);
    let response = apply(&state, |picker| {
        picker.set_value(&request.value);
        Ok(None)
    });
    lock(&state.goal_draft).set_target_date(response.view.value.clone());
    Json(response)
}
