use chrono::NaiveDate;
use shared::{Goal, GoalCard, GoalDraftView, IncrementOutcome, ProgressSummary};

use crate::domain::date_utils::{format_due_date, format_iso_date};
use crate::domain::goal_form::GoalDraft;
use crate::domain::models::goal::DomainGoal;
use crate::domain::progress::{self, ProgressSummary as DomainProgressSummary};
use crate::domain::IncrementOutcome as DomainIncrementOutcome;

pub struct GoalMapper;

impl GoalMapper {
    /// Convert domain DomainGoal to shared Goal DTO
    pub fn to_dto(domain: &DomainGoal) -> Goal {
        Goal {
            id: domain.id,
            text: domain.text.clone(),
            target_date: format_iso_date(domain.target_date),
            total: domain.total,
            current: domain.current,
            progress: domain.progress,
            completed: domain.completed,
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    /// Goal plus the labels a card shows
    pub fn to_card(domain: &DomainGoal, today: NaiveDate) -> GoalCard {
        let days_remaining = domain.days_remaining(today);
        let status_label = if domain.completed { "Completed" } else { "In Progress" };

        GoalCard {
            goal: Self::to_dto(domain),
            status_label: status_label.to_string(),
            progress_label: format!("Progress: {}", progress::format_percentage(domain.progress)),
            count_label: format!("{}/{}", domain.current, domain.total),
            due_label: format!(
                "Due: {} ({}d remaining)",
                format_due_date(domain.target_date),
                days_remaining
            ),
            days_remaining,
            can_mark_progress: !domain.completed,
        }
    }

    pub fn to_cards(goals: &[DomainGoal], today: NaiveDate) -> Vec<GoalCard> {
        goals.iter().map(|goal| Self::to_card(goal, today)).collect()
    }

    pub fn to_progress_dto(summary: DomainProgressSummary) -> ProgressSummary {
        ProgressSummary {
            completed_count: summary.completed_count,
            total_count: summary.total_count,
            percentage: summary.percentage,
        }
    }

    pub fn to_outcome_dto(outcome: DomainIncrementOutcome) -> IncrementOutcome {
        match outcome {
            DomainIncrementOutcome::NotFound => IncrementOutcome::NotFound,
            DomainIncrementOutcome::AlreadyComplete => IncrementOutcome::AlreadyComplete,
            DomainIncrementOutcome::Advanced { .. } => IncrementOutcome::Advanced,
            DomainIncrementOutcome::Completed => IncrementOutcome::Completed,
        }
    }

    pub fn to_draft_view(draft: &GoalDraft) -> GoalDraftView {
        GoalDraftView {
            text: draft.text().to_string(),
            char_counter: draft.char_counter_label(),
            repeats: draft.repeats().to_string(),
            target_date: draft.target_date().to_string(),
            show_controls: draft.show_controls(),
            repeats_expanded: draft.repeats_expanded(),
            can_submit: draft.can_submit(),
        }
    }
}
