//! # REST API Interface Layer
//!
//! HTTP endpoints for the SMART goals tracker. Handlers are a translation
//! layer only: decode the request, call the domain, map the result.
//!
//! ## Status Codes
//!
//! - Goal validation failures are `400` with the reason
//! - Unknown goal ids are not errors; the response says nothing changed
//! - Refused date picks come back as `200` with a `rejection`

pub mod date_picker_apis;
pub mod goal_apis;
pub mod listener_apis;
pub mod logging_apis;
pub mod mappers;
pub mod smart_guide_apis;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Routes mounted under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/goals", goal_apis::router())
        .nest("/date-picker", date_picker_apis::router())
        .nest("/smart-guide", smart_guide_apis::router())
        .route("/listeners", get(listener_apis::get_active_listeners))
        .route("/logs", post(logging_apis::log_message))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::ServerConfig;
    use crate::domain::clock::FixedClock;
    use crate::domain::events::GoalEvent;
    use crate::{create_router, AppState};

    fn create_test_app() -> (Router, AppState) {
        create_test_app_with(&ServerConfig::default())
    }

    fn create_test_app_with(config: &ServerConfig) -> (Router, AppState) {
        let clock = Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()));
        let state = AppState::new(clock, config);
        let app = create_router(state.clone(), config).unwrap();
        (app, state)
    }

    async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send_raw(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_empty_goal_list() {
        let (app, _) = create_test_app();

        let (status, body) = send(&app, "GET", "/api/goals", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["goals"], json!([]));
        assert_eq!(body["progress"]["percentage"], 0.0);
    }

    #[tokio::test]
    async fn test_add_and_complete_goal() {
        let (app, state) = create_test_app();
        let mut celebrations = state.celebrations.subscribe();

        let (status, body) = send(
            &app,
            "POST",
            "/api/goals",
            Some(json!({"text": "Read 2 books", "target_date": "2025-03-26", "total": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["goal"]["due_label"], "Due: Mar 26, 2025 (12d remaining)");
        let id = body["goal"]["goal"]["id"].as_u64().unwrap();

        let uri = format!("/api/goals/{}/progress", id);
        let (_, body) = send(&app, "POST", &uri, None).await;
        assert_eq!(body["outcome"], "Advanced");
        assert_eq!(body["goal"]["count_label"], "1/2");

        let (_, body) = send(&app, "POST", &uri, None).await;
        assert_eq!(body["outcome"], "Completed");
        assert_eq!(body["goal"]["status_label"], "Completed");
        assert_eq!(body["progress"]["percentage"], 100.0);

        let (_, body) = send(&app, "POST", &uri, None).await;
        assert_eq!(body["outcome"], "AlreadyComplete");
        assert_eq!(body["goal"]["goal"]["current"], 2);

        assert_eq!(
            celebrations.try_recv().unwrap(),
            GoalEvent::Completed {
                goal_id: id,
                text: "Read 2 books".to_string()
            }
        );
        assert!(celebrations.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_add_goal_rejected() {
        let (app, _) = create_test_app();

        let (status, body) = send_raw(
            &app,
            "POST",
            "/api/goals",
            Some(json!({"text": "", "target_date": "2099-01-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(String::from_utf8(body).unwrap(), "Goal text cannot be empty");

        let (_, body) = send(&app, "GET", "/api/goals", None).await;
        assert_eq!(body["goals"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_goal_is_noop() {
        let (app, _) = create_test_app();

        let (status, body) = send(&app, "POST", "/api/goals/42/progress", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "NotFound");
        assert!(body["goal"].is_null());
    }

    #[tokio::test]
    async fn test_remove_goal_twice() {
        let (app, _) = create_test_app();
        let (_, body) = send(
            &app,
            "POST",
            "/api/goals",
            Some(json!({"text": "Run 5k", "target_date": "2099-01-01"})),
        )
        .await;
        let id = body["goal"]["goal"]["id"].as_u64().unwrap();
        let uri = format!("/api/goals/{}", id);

        let (_, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(body["removed"], true);
        let (_, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(body["removed"], false);
        assert_eq!(body["progress"]["total_count"], 0);
    }

    #[tokio::test]
    async fn test_draft_submission_through_date_picker() {
        let (app, state) = create_test_app();

        send(&app, "POST", "/api/goals/draft/focus", None).await;
        let (_, draft) = send(
            &app,
            "PUT",
            "/api/goals/draft",
            Some(json!({"text": "Meditate daily", "repeats": "3x"})),
        )
        .await;
        assert_eq!(draft["repeats"], "3");
        assert_eq!(draft["can_submit"], false);

        let (_, picker) = send(&app, "POST", "/api/date-picker/open", None).await;
        assert_eq!(picker["view"]["state"], "Open");
        assert_eq!(picker["view"]["calendar"]["month_label"], "March 2025");
        assert_eq!(state.listeners.active_count(), 1);

        let (_, picker) = send(&app, "POST", "/api/date-picker/select-day", Some(json!({"day": 20}))).await;
        assert_eq!(picker["emitted"], "2025-03-20");
        assert_eq!(picker["view"]["state"], "Closed");
        assert_eq!(picker["view"]["display_value"], "3/20/2025");
        assert_eq!(state.listeners.active_count(), 0);

        let (_, draft) = send(&app, "GET", "/api/goals/draft", None).await;
        assert_eq!(draft["target_date"], "2025-03-20");
        assert_eq!(draft["can_submit"], true);

        let (status, body) = send(&app, "POST", "/api/goals/draft/submit", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["goal"]["goal"]["total"], 3);
        assert_eq!(body["draft"]["text"], "");
        assert_eq!(body["draft"]["show_controls"], false);

        let (_, picker) = send(&app, "GET", "/api/date-picker", None).await;
        assert_eq!(picker["view"]["value"], "");
    }

    #[tokio::test]
    async fn test_expand_draft_repeats() {
        let (app, _) = create_test_app();

        let (_, draft) = send(&app, "GET", "/api/goals/draft", None).await;
        assert_eq!(draft["repeats_expanded"], false);

        let (status, draft) = send(&app, "POST", "/api/goals/draft/repeats/expand", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(draft["repeats_expanded"], true);
        assert_eq!(draft["repeats"], "");
    }

    #[tokio::test]
    async fn test_submit_incomplete_draft() {
        let (app, _) = create_test_app();
        send(&app, "PUT", "/api/goals/draft", Some(json!({"text": "Run 5k"}))).await;

        let (status, body) = send(&app, "POST", "/api/goals/draft/submit", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["rejection"], "A target date is required");
        assert_eq!(body["draft"]["text"], "Run 5k");
    }

    #[tokio::test]
    async fn test_past_day_is_refused() {
        let (app, _) = create_test_app();
        send(&app, "POST", "/api/date-picker/open", None).await;

        let (status, picker) = send(&app, "POST", "/api/date-picker/select-day", Some(json!({"day": 10}))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(picker["emitted"].is_null());
        assert_eq!(picker["rejection"], "2025-03-10 is in the past");
        assert_eq!(picker["view"]["state"], "Open");
        assert_eq!(picker["view"]["value"], "");
    }

    #[tokio::test]
    async fn test_month_navigation_and_today() {
        let (app, _) = create_test_app();
        send(&app, "POST", "/api/date-picker/open", None).await;

        let (_, picker) = send(&app, "POST", "/api/date-picker/change-month", Some(json!({"delta": 10}))).await;
        assert_eq!(picker["view"]["reference_month"], 1);
        assert_eq!(picker["view"]["reference_year"], 2026);

        let (_, picker) = send(&app, "POST", "/api/date-picker/today", None).await;
        assert_eq!(picker["emitted"], "2025-03-14");
        assert_eq!(picker["view"]["reference_month"], 3);

        let (_, picker) = send(&app, "POST", "/api/date-picker/clear", None).await;
        assert_eq!(picker["emitted"], "");

        let (_, draft) = send(&app, "GET", "/api/goals/draft", None).await;
        assert_eq!(draft["target_date"], "");
    }

    #[tokio::test]
    async fn test_set_value_reanchors_month() {
        let (app, _) = create_test_app();

        let (_, picker) = send(&app, "PUT", "/api/date-picker/value", Some(json!({"value": "2025-07-04"}))).await;
        assert_eq!(picker["view"]["reference_month"], 7);
        assert_eq!(picker["view"]["value"], "2025-07-04");

        let (_, draft) = send(&app, "GET", "/api/goals/draft", None).await;
        assert_eq!(draft["target_date"], "2025-07-04");
    }

    #[tokio::test]
    async fn test_smart_guide_toggle() {
        let (app, state) = create_test_app();

        let (_, guide) = send(&app, "POST", "/api/smart-guide/select", Some(json!({"letter": "S"}))).await;
        assert_eq!(guide["selected"]["title"], "Specific");
        assert_eq!(guide["letters"][0]["is_selected"], true);
        assert_eq!(state.listeners.active_count(), 1);

        let (_, guide) = send(&app, "POST", "/api/smart-guide/outside-click", None).await;
        assert!(guide["selected"].is_null());
        assert_eq!(guide["overall_progress"], 0.0);
        assert_eq!(state.listeners.active_count(), 0);
    }

    #[tokio::test]
    async fn test_date_placeholder_comes_from_config() {
        let (app, _) = create_test_app();
        let (_, picker) = send(&app, "GET", "/api/date-picker", None).await;
        assert_eq!(picker["view"]["placeholder"], "Choose a date to complete the goal");

        let config = ServerConfig {
            date_placeholder: "Pick a deadline".to_string(),
            ..ServerConfig::default()
        };
        let (app, _) = create_test_app_with(&config);
        let (_, picker) = send(&app, "GET", "/api/date-picker", None).await;
        assert_eq!(picker["view"]["placeholder"], "Pick a deadline");
    }

    #[tokio::test]
    async fn test_active_listeners() {
        let (app, _) = create_test_app();

        let (_, body) = send(&app, "GET", "/api/listeners", None).await;
        assert_eq!(body["scopes"], json!([]));

        send(&app, "POST", "/api/date-picker/open", None).await;
        send(&app, "POST", "/api/smart-guide/select", Some(json!({"letter": "M"}))).await;
        let (status, body) = send(&app, "GET", "/api/listeners", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scopes"], json!(["date-picker", "smart-guide"]));

        send(&app, "POST", "/api/date-picker/outside-click", None).await;
        let (_, body) = send(&app, "GET", "/api/listeners", None).await;
        assert_eq!(body["scopes"], json!(["smart-guide"]));
    }

    #[tokio::test]
    async fn test_log_forwarding() {
        let (app, _) = create_test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/logs",
            Some(json!({"level": "warn", "message": "slow render", "component": "calendar"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }
}
