use chrono::{DateTime, NaiveDate, Utc};

use shared::GOAL_TEXT_MAX_CHARS;

#[derive(Debug, Clone, PartialEq)]
pub struct DomainGoal {
    pub id: u64,
    pub text: String,
    pub target_date: NaiveDate,
    pub total: u32,
    pub current: u32,
    /// Cached `current / total * 100`; refreshed by `recompute`
    pub progress: f64,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl DomainGoal {
    /// Creation-time id; bumped past `last_issued` so ids stay unique even
    /// when the clock stalls or steps back
    pub fn generate_id(now_millis: u64, last_issued: Option<u64>) -> u64 {
        match last_issued {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        }
    }

    pub fn new(
        id: u64,
        text: String,
        target_date: NaiveDate,
        total: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut goal = Self {
            id,
            text,
            target_date,
            total: total.max(1),
            current: 0,
            progress: 0.0,
            completed: false,
            created_at,
        };
        goal.recompute();
        goal
    }

    /// Refresh the derived fields from current/total
    pub fn recompute(&mut self) {
        self.current = self.current.min(self.total);
        self.progress = if self.total == 0 {
            0.0
        } else {
            f64::from(self.current) / f64::from(self.total) * 100.0
        };
        self.completed = self.current >= self.total;
    }

    /// Advance by one repeat. Returns false, leaving the goal untouched, once
    /// the goal is already complete.
    pub fn advance(&mut self) -> bool {
        if self.current >= self.total {
            return false;
        }
        self.current += 1;
        self.recompute();
        true
    }

    /// Calendar days from `today` to the target date; negative when overdue
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal text cannot be empty")]
    EmptyText,
    #[error("Goal text cannot exceed {} characters", GOAL_TEXT_MAX_CHARS)]
    TextTooLong,
    #[error("A target date is required")]
    MissingTargetDate,
    #[error("Target date '{0}' is not a valid YYYY-MM-DD date")]
    InvalidTargetDate(String),
    #[error("Target date {0} is in the past")]
    TargetDateInPast(NaiveDate),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_goal(total: u32) -> DomainGoal {
        DomainGoal::new(
            1_741_953_600_000,
            "Read 10 books".to_string(),
            NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            total,
            Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_generate_id() {
        assert_eq!(DomainGoal::generate_id(1000, None), 1000);
        assert_eq!(DomainGoal::generate_id(1000, Some(999)), 1000);
        assert_eq!(DomainGoal::generate_id(1000, Some(1000)), 1001);
        assert_eq!(DomainGoal::generate_id(900, Some(1000)), 1001);
    }

    #[test]
    fn test_new_goal_is_fresh() {
        let goal = sample_goal(10);
        assert_eq!(goal.current, 0);
        assert_eq!(goal.progress, 0.0);
        assert!(!goal.completed);
    }

    #[test]
    fn test_zero_total_becomes_one() {
        let goal = sample_goal(0);
        assert_eq!(goal.total, 1);
        assert!(!goal.completed);
    }

    #[test]
    fn test_advance_until_complete() {
        let mut goal = sample_goal(4);

        assert!(goal.advance());
        assert_eq!(goal.progress, 25.0);
        assert!(goal.advance());
        assert!(goal.advance());
        assert!(!goal.completed);
        assert!(goal.advance());
        assert_eq!(goal.current, 4);
        assert_eq!(goal.progress, 100.0);
        assert!(goal.completed);

        assert!(!goal.advance());
        assert_eq!(goal.current, 4);
    }

    #[test]
    fn test_recompute_clamps_current() {
        let mut goal = sample_goal(3);
        goal.current = 7;
        goal.recompute();
        assert_eq!(goal.current, 3);
        assert!(goal.completed);
        assert_eq!(goal.progress, 100.0);
    }

    #[test]
    fn test_days_remaining() {
        let mut goal = sample_goal(1);
        goal.target_date = NaiveDate::from_ymd_opt(2025, 3, 26).unwrap();

        assert_eq!(goal.days_remaining(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()), 12);
        assert_eq!(goal.days_remaining(NaiveDate::from_ymd_opt(2025, 3, 26).unwrap()), 0);
        assert_eq!(goal.days_remaining(NaiveDate::from_ymd_opt(2025, 3, 28).unwrap()), -2);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            GoalValidationError::TextTooLong.to_string(),
            "Goal text cannot exceed 250 characters"
        );
        assert_eq!(
            GoalValidationError::MissingTargetDate.to_string(),
            "A target date is required"
        );
    }
}
