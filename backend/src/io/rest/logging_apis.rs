use axum::{extract::State, response::Json};
use log::{debug, error, info, warn};

use shared::{LogEntry, LogResponse};

use crate::AppState;

/// Forward a frontend log line into the server log
pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(entry): Json<LogEntry>,
) -> Json<LogResponse> {
    let component = entry.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, entry.message);

    match entry.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "warn" | "warning" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message),
    }

    Json(LogResponse { success: true })
}
