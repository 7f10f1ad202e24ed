//! Goal store domain logic.
//!
//! Owns the in-memory goal list. Goals are only created through
//! [`GoalService::add_goal`], only advanced through
//! [`GoalService::increment_progress`] and only deleted through
//! [`GoalService::remove_goal`]; callers get shared references or clones.
//!
//! ## Business Rules
//!
//! - Text is trimmed, non-empty and at most 250 characters
//! - Target date is required and cannot be before today
//! - Repeat total defaults to 1
//! - Progress only moves forward, one repeat per call, and never past the total
//! - Insertion order is display order

use std::sync::Arc;

use log::{debug, info, warn};

use shared::GOAL_TEXT_MAX_CHARS;

use super::clock::Clock;
use super::commands::goal::AddGoalCommand;
use super::date_utils::parse_date_value;
use super::events::{GoalEvent, GoalEventSink};
use super::models::goal::{DomainGoal, GoalValidationError};
use super::progress::{self, ProgressSummary};

/// What a "mark progress" intent did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementOutcome {
    NotFound,
    AlreadyComplete,
    Advanced { current: u32, total: u32 },
    Completed,
}

pub struct GoalService {
    goals: Vec<DomainGoal>,
    last_issued_id: Option<u64>,
    clock: Arc<dyn Clock>,
    events: Arc<dyn GoalEventSink>,
}

impl GoalService {
    pub fn new(clock: Arc<dyn Clock>, events: Arc<dyn GoalEventSink>) -> Self {
        Self {
            goals: Vec::new(),
            last_issued_id: None,
            clock,
            events,
        }
    }

    /// Validate and append a new goal
    pub fn add_goal(&mut self, command: AddGoalCommand) -> Result<DomainGoal, GoalValidationError> {
        info!("🎯 Adding goal: {:?}", command);

        let text = command.text.trim();
        if text.is_empty() {
            return Err(GoalValidationError::EmptyText);
        }
        if text.chars().count() > GOAL_TEXT_MAX_CHARS {
            return Err(GoalValidationError::TextTooLong);
        }

        let target_date = parse_date_value(&command.target_date)
            .map_err(|_| GoalValidationError::InvalidTargetDate(command.target_date.clone()))?
            .ok_or(GoalValidationError::MissingTargetDate)?;

        if target_date < self.clock.today() {
            return Err(GoalValidationError::TargetDateInPast(target_date));
        }

        let total = command.total.filter(|total| *total > 0).unwrap_or(1);
        let id = DomainGoal::generate_id(self.clock.now_millis(), self.last_issued_id);
        self.last_issued_id = Some(id);

        let goal = DomainGoal::new(id, text.to_string(), target_date, total, self.clock.now());
        self.goals.push(goal.clone());

        info!("Successfully added goal {} ({} repeats due {})", goal.id, goal.total, goal.target_date);
        Ok(goal)
    }

    /// Advance a goal by exactly one repeat
    pub fn increment_progress(&mut self, goal_id: u64) -> IncrementOutcome {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == goal_id) else {
            debug!("No goal {} to advance", goal_id);
            return IncrementOutcome::NotFound;
        };

        let was_completed = goal.completed;
        if !goal.advance() {
            warn!("Goal {} is already complete, ignoring progress", goal_id);
            return IncrementOutcome::AlreadyComplete;
        }

        if goal.completed && !was_completed {
            info!("🎉 Goal {} completed: {}", goal.id, goal.text);
            let event = GoalEvent::Completed {
                goal_id: goal.id,
                text: goal.text.clone(),
            };
            self.events.notify(event);
            return IncrementOutcome::Completed;
        }

        debug!("Goal {} progress {}/{}", goal.id, goal.current, goal.total);
        IncrementOutcome::Advanced {
            current: goal.current,
            total: goal.total,
        }
    }

    /// Delete a goal; returns whether anything was removed
    pub fn remove_goal(&mut self, goal_id: u64) -> bool {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != goal_id);
        let removed = self.goals.len() < before;

        if removed {
            info!("🗑️ Removed goal {}", goal_id);
        } else {
            debug!("No goal {} to remove", goal_id);
        }
        removed
    }

    /// Goals in display order
    pub fn goals(&self) -> &[DomainGoal] {
        &self.goals
    }

    pub fn get_goal(&self, goal_id: u64) -> Option<&DomainGoal> {
        self.goals.iter().find(|goal| goal.id == goal_id)
    }

    pub fn summary(&self) -> ProgressSummary {
        progress::summarize(&self.goals)
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }
}
