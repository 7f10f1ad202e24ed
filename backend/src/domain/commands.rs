//! Domain-level command types.
//!
//! The REST layer maps the public DTOs from the `shared` crate onto these
//! before calling into services.

pub mod goal {
    /// Input for adding a goal
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AddGoalCommand {
        pub text: String,
        /// YYYY-MM-DD, `""` when no date was picked
        pub target_date: String,
        /// Repeats required; None or 0 means 1
        pub total: Option<u32>,
    }

    impl AddGoalCommand {
        pub fn new(text: impl Into<String>, target_date: impl Into<String>) -> Self {
            Self {
                text: text.into(),
                target_date: target_date.into(),
                total: None,
            }
        }

        pub fn with_total(mut self, total: u32) -> Self {
            self.total = Some(total);
            self
        }
    }
}
