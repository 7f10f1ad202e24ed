//! In-progress "new goal" form state.
//!
//! Holds what the user has typed so far. Nothing here touches the goal
//! list; submission goes through [`GoalDraft::to_command`] and the store.

use shared::GOAL_TEXT_MAX_CHARS;

use super::commands::goal::AddGoalCommand;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    text: String,
    /// Digits only; empty means "not set"
    repeats: String,
    target_date: String,
    show_controls: bool,
    repeats_expanded: bool,
}

impl GoalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn repeats(&self) -> &str {
        &self.repeats
    }

    pub fn target_date(&self) -> &str {
        &self.target_date
    }

    pub fn show_controls(&self) -> bool {
        self.show_controls
    }

    pub fn repeats_expanded(&self) -> bool {
        self.repeats_expanded
    }

    /// Reveal the controls row under the text input
    pub fn focus(&mut self) {
        self.show_controls = true;
    }

    /// Replace the text, keeping at most the first 250 characters
    pub fn set_text(&mut self, raw: &str) {
        self.text = raw.chars().take(GOAL_TEXT_MAX_CHARS).collect();
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn char_counter_label(&self) -> String {
        format!("{}/{}", self.char_count(), GOAL_TEXT_MAX_CHARS)
    }

    /// Accept typed repeats input. Non-digits are dropped; the result is kept
    /// only when it is empty or a positive number.
    pub fn set_repeats(&mut self, raw: &str) {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        let accepted = digits.is_empty() || matches!(digits.parse::<u32>(), Ok(n) if n > 0);
        if accepted {
            self.repeats = digits;
        } else {
            log::debug!("Rejected repeats input {:?}", raw);
        }
    }

    fn parsed_repeats(&self) -> Option<u32> {
        self.repeats.parse().ok()
    }

    /// Click on the collapsed repeats field; the value is left alone
    pub fn expand_repeats(&mut self) {
        self.repeats_expanded = true;
    }

    /// Stepper buttons: up always adds one, down stops at 1
    pub fn step_repeats(&mut self, delta: i32) {
        self.repeats_expanded = true;
        let current = self.parsed_repeats().unwrap_or(0);

        if delta > 0 {
            self.repeats = current.saturating_add(1).to_string();
        } else if delta < 0 && current > 1 {
            self.repeats = (current - 1).to_string();
        }
    }

    pub fn set_target_date(&mut self, value: impl Into<String>) {
        self.target_date = value.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() && !self.target_date.is_empty()
    }

    pub fn to_command(&self) -> AddGoalCommand {
        AddGoalCommand {
            text: self.text.clone(),
            target_date: self.target_date.clone(),
            total: self.parsed_repeats(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
