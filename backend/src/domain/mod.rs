//! # Domain Module
//!
//! Business logic for the SMART goals tracker.
//!
//! Everything here is synchronous and UI-agnostic. The REST layer in
//! [`crate::io`] owns the state and translates requests into calls on these
//! types.
//!
//! ## Module Organization
//!
//! - **calendar**: month grid generation and date arithmetic
//! - **date_selection**: the date picker state machine (open, pick, navigate, clear)
//! - **subscription**: scoped outside-click listener registrations
//! - **goal_service**: the goal store (add, advance, remove)
//! - **progress**: overall completion across the goal list
//! - **goal_form**: the in-progress "new goal" draft
//! - **smart_guide**: the SMART explainer popup
//! - **events**: completion notifications
//! - **clock**: injectable "now" and "today"
//!
//! ## Core Concepts
//!
//! - **Goal**: a tracked objective with a target date and a repeat count
//! - **Repeat**: one unit of progress; a goal completes when every repeat is done
//! - **Date value**: `YYYY-MM-DD`, with `""` meaning unset
//! - **Overlay**: the calendar popup shown while the picker is open

pub mod calendar;
pub mod clock;
pub mod commands;
pub mod date_selection;
pub mod date_utils;
pub mod events;
pub mod goal_form;
pub mod goal_service;
pub mod models;
pub mod progress;
pub mod smart_guide;
pub mod subscription;

pub use goal_service::{GoalService, IncrementOutcome};
