//! # SMART Goals Backend
//!
//! Server side of the SMART goals tracker: the goal store, the date picker
//! controller and the form state behind the web frontend, exposed over a
//! JSON REST API.
//!
//! - **domain**: business logic, synchronous and UI-agnostic
//! - **io**: REST handlers and DTO mapping
//! - **config**: server settings

pub mod config;
pub mod domain;
pub mod io;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::date_selection::DateSelectionController;
use crate::domain::events::BroadcastEventSink;
use crate::domain::goal_form::GoalDraft;
use crate::domain::smart_guide::SmartGuide;
use crate::domain::subscription::OutsideClickRegistry;
use crate::domain::GoalService;

/// Shared state behind every handler. Each component sits behind its own
/// lock; handlers take one lock at a time.
#[derive(Clone)]
pub struct AppState {
    pub goal_service: Arc<Mutex<GoalService>>,
    pub goal_draft: Arc<Mutex<GoalDraft>>,
    pub date_picker: Arc<Mutex<DateSelectionController>>,
    pub smart_guide: Arc<Mutex<SmartGuide>>,
    pub listeners: Arc<OutsideClickRegistry>,
    pub celebrations: BroadcastEventSink,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>, config: &ServerConfig) -> Self {
        let listeners = Arc::new(OutsideClickRegistry::new());
        let celebrations = BroadcastEventSink::new(config.celebration_buffer);

        let goal_service = GoalService::new(clock.clone(), Arc::new(celebrations.clone()));
        let date_picker = DateSelectionController::new("", clock, listeners.clone())
            .with_placeholder(config.date_placeholder.clone());
        let smart_guide = SmartGuide::new(listeners.clone());

        Self {
            goal_service: Arc::new(Mutex::new(goal_service)),
            goal_draft: Arc::new(Mutex::new(GoalDraft::new())),
            date_picker: Arc::new(Mutex::new(date_picker)),
            smart_guide: Arc::new(Mutex::new(smart_guide)),
            listeners,
            celebrations,
        }
    }
}

/// Lock a component, recovering the state if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &ServerConfig) -> AppState {
    info!("Setting up domain model");
    let state = AppState::new(Arc::new(SystemClock), config);
    info!("Setting up application state");
    state
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin {}", config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let mut router = Router::new().nest("/api", io::rest::api_router());

    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {}", static_dir.display());
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    Ok(router.layer(cors).with_state(app_state))
}
