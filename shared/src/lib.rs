use serde::{Deserialize, Serialize};

/// Maximum goal text length in characters
pub const GOAL_TEXT_MAX_CHARS: usize = 250;

/// A tracked goal as exchanged with the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Creation-time identifier (epoch millis, bumped on collision)
    pub id: u64,
    /// Display text (1-250 characters)
    pub text: String,
    /// Due date, YYYY-MM-DD
    pub target_date: String,
    /// Repeats required to complete the goal
    pub total: u32,
    /// Repeats done so far (never above total)
    pub current: u32,
    /// Percentage derived from current/total
    pub progress: f64,
    pub completed: bool,
    /// RFC 3339 creation timestamp
    pub created_at: String,
}

/// A goal plus the labels the goal card renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCard {
    pub goal: Goal,
    /// "Completed" or "In Progress"
    pub status_label: String,
    /// e.g. "Progress: 40%"
    pub progress_label: String,
    /// e.g. "4/10"
    pub count_label: String,
    /// e.g. "Due: Mar 14, 2025 (12d remaining)"
    pub due_label: String,
    pub days_remaining: i64,
    /// False once the goal is completed
    pub can_mark_progress: bool,
}

/// Overall completion across all goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub completed_count: usize,
    pub total_count: usize,
    /// 0-100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalListResponse {
    pub goals: Vec<GoalCard>,
    pub progress: ProgressSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddGoalRequest {
    pub text: String,
    /// YYYY-MM-DD, empty string when no date was picked
    pub target_date: String,
    /// Defaults to 1 when absent
    #[serde(default)]
    pub total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddGoalResponse {
    pub goal: GoalCard,
    pub success_message: String,
}

/// Result of a "mark progress" click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IncrementOutcome {
    /// No goal with that id, nothing changed
    NotFound,
    /// Goal was already complete, nothing changed
    AlreadyComplete,
    /// Progress advanced by one without completing
    Advanced,
    /// Progress advanced by one and completed the goal
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncrementProgressResponse {
    pub outcome: IncrementOutcome,
    pub goal: Option<GoalCard>,
    pub progress: ProgressSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveGoalResponse {
    pub removed: bool,
    pub progress: ProgressSummary,
}

/// State of the new goal form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDraftView {
    pub text: String,
    /// e.g. "12/250"
    pub char_counter: String,
    pub repeats: String,
    pub target_date: String,
    pub show_controls: bool,
    pub repeats_expanded: bool,
    pub can_submit: bool,
}

/// Partial update of the new goal form; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateGoalDraftRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub repeats: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRepeatsRequest {
    /// Positive steps up, negative steps down
    pub delta: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitGoalDraftResponse {
    pub goal: Option<GoalCard>,
    /// Why the draft was refused, when it was
    pub rejection: Option<String>,
    pub draft: GoalDraftView,
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty placeholder before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A single cell in the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub day_type: CalendarDayType,
    /// Day of month, 0 for padding
    pub day: u32,
    /// YYYY-MM-DD, None for padding
    pub date: Option<String>,
    pub is_past: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// Past days cannot be picked
    pub is_disabled: bool,
}

/// Grid for the month shown in the picker overlay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    /// e.g. "March 2025"
    pub month_label: String,
    pub days_in_month: u32,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub weekday_labels: Vec<String>,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatePickerState {
    Closed,
    Open,
}

/// What the date field and its overlay render
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatePickerView {
    pub state: DatePickerState,
    /// YYYY-MM-DD or empty when unset
    pub value: String,
    /// e.g. "3/14/2025", empty when unset
    pub display_value: String,
    pub placeholder: String,
    pub reference_month: u32,
    pub reference_year: i32,
    /// Only present while the overlay is open
    pub calendar: Option<CalendarMonth>,
    pub outside_click_armed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatePickerResponse {
    pub view: DatePickerView,
    /// Value handed to the owner by this intent, if any ("" means cleared)
    pub emitted: Option<String>,
    /// Why a selection was refused, if it was
    pub rejection: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectDayRequest {
    pub day: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangeMonthRequest {
    pub delta: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetDateValueRequest {
    /// YYYY-MM-DD or empty to unset
    pub value: String,
}

/// Letter button shown on the progress banner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmartLetterButton {
    pub letter: char,
    pub is_selected: bool,
}

/// Popup content for one SMART letter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmartLetterDetail {
    pub letter: char,
    pub title: String,
    pub explanation: String,
    pub example_sentences: Vec<String>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SmartGuideView {
    pub letters: Vec<SmartLetterButton>,
    pub selected: Option<SmartLetterDetail>,
    /// Fill of the progress bar under the letters, 0-100
    pub overall_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectSmartLetterRequest {
    pub letter: char,
}

/// Log line forwarded by the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub component: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogResponse {
    pub success: bool,
}

/// Overlays currently listening for outside clicks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutsideClickListenersResponse {
    pub scopes: Vec<String>,
}

impl IncrementOutcome {
    /// Whether the goal list changed
    pub fn is_mutation(&self) -> bool {
        matches!(self, IncrementOutcome::Advanced | IncrementOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_goal_request_total_defaults_to_none() {
        let request: AddGoalRequest =
            serde_json::from_str(r#"{"text":"Run 5k","target_date":"2099-01-01"}"#).unwrap();
        assert_eq!(request.text, "Run 5k");
        assert_eq!(request.target_date, "2099-01-01");
        assert_eq!(request.total, None);
    }

    #[test]
    fn test_update_draft_request_partial() {
        let request: UpdateGoalDraftRequest = serde_json::from_str(r#"{"repeats":"3"}"#).unwrap();
        assert_eq!(request.text, None);
        assert_eq!(request.repeats.as_deref(), Some("3"));
    }

    #[test]
    fn test_increment_outcome_is_mutation() {
        assert!(IncrementOutcome::Advanced.is_mutation());
        assert!(IncrementOutcome::Completed.is_mutation());
        assert!(!IncrementOutcome::NotFound.is_mutation());
        assert!(!IncrementOutcome::AlreadyComplete.is_mutation());
    }

    #[test]
    fn test_calendar_day_wire_shape() {
        let day = CalendarDay {
            day_type: CalendarDayType::PaddingBefore,
            day: 0,
            date: None,
            is_past: false,
            is_today: false,
            is_selected: false,
            is_disabled: false,
        };
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["day_type"], "PaddingBefore");
        assert!(json["date"].is_null());
    }

    #[test]
    fn test_log_entry_component_optional() {
        let entry: LogEntry = serde_json::from_str(r#"{"level":"info","message":"hi"}"#).unwrap();
        assert_eq!(entry.component, None);
    }
}
