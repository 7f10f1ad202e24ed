//! Date-selection controller behind the date picker field.
//!
//! Owns the overlay's open/closed state, the month being shown and the
//! selected date. Intents come from the presentation layer; every intent that
//! changes the value returns the emitted `YYYY-MM-DD` string (or `""` for a
//! cleared field) so the owner can store it.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};

use super::calendar::{self, CalendarMonthView};
use super::clock::Clock;
use super::date_utils::{format_input_display, format_iso_date, parse_date_value, to_date_value};
use super::subscription::{ListenerRegistry, Subscription};

const LISTENER_SCOPE: &str = "date-picker";
pub const DEFAULT_PLACEHOLDER: &str = "Choose a date to complete the goal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateSelectionError {
    #[error("The calendar is not open")]
    NotOpen,
    #[error("Day {day} does not exist in {month_label}")]
    DayOutOfRange { day: u32, month_label: String },
    #[error("{0} is in the past")]
    PastDate(NaiveDate),
}

/// Render data for the date field and, while open, its overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerSnapshot {
    pub state: PickerState,
    pub value: String,
    pub display_value: String,
    pub placeholder: String,
    pub reference_month: NaiveDate,
    pub month_view: Option<CalendarMonthView>,
    pub outside_click_armed: bool,
}

pub struct DateSelectionController {
    state: PickerState,
    /// Always the first day of the displayed month
    reference_month: NaiveDate,
    selected_date: Option<NaiveDate>,
    placeholder: String,
    listener: Option<Subscription>,
    clock: Arc<dyn Clock>,
    registry: Arc<dyn ListenerRegistry>,
}

impl DateSelectionController {
    /// Create a closed controller showing the month of `value`, or today's
    /// month when `value` is empty or malformed
    pub fn new(value: &str, clock: Arc<dyn Clock>, registry: Arc<dyn ListenerRegistry>) -> Self {
        let today = clock.today();
        let mut controller = Self {
            state: PickerState::Closed,
            reference_month: calendar::month_start(today),
            selected_date: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            listener: None,
            clock,
            registry,
        };
        controller.set_value(value);
        controller
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PickerState::Open
    }

    pub fn reference_month(&self) -> NaiveDate {
        self.reference_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Current wire value, `""` when unset
    pub fn value(&self) -> String {
        to_date_value(self.selected_date)
    }

    /// Owner-supplied value. A date re-anchors the displayed month to it;
    /// `""` unsets the selection and keeps the displayed month.
    pub fn set_value(&mut self, value: &str) {
        match parse_date_value(value) {
            Ok(Some(date)) => {
                self.selected_date = Some(date);
                self.reference_month = calendar::month_start(date);
            }
            Ok(None) => {
                self.selected_date = None;
            }
            Err(e) => {
                warn!("📅 Ignoring date picker value: {}", e);
                self.selected_date = None;
            }
        }
    }

    /// Focus or click on the date field
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.listener = Some(Subscription::acquire(&self.registry, LISTENER_SCOPE));
        self.state = PickerState::Open;
        debug!("📅 Date picker opened on {}", calendar::month_label(self.reference_month));
    }

    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.listener = None;
        self.state = PickerState::Closed;
        debug!("📅 Date picker closed");
    }

    /// Click outside the overlay; only meaningful while the listener is armed
    pub fn outside_click(&mut self) {
        if self.listener.is_some() {
            self.close();
        }
    }

    /// Pick a day of the displayed month
    pub fn select_day(&mut self, day: u32) -> Result<String, DateSelectionError> {
        if !self.is_open() {
            return Err(DateSelectionError::NotOpen);
        }

        let candidate = self
            .reference_month
            .with_day(day)
            .ok_or_else(|| DateSelectionError::DayOutOfRange {
                day,
                month_label: calendar::month_label(self.reference_month),
            })?;

        if candidate < self.clock.today() {
            debug!("📅 Refusing past date {}", candidate);
            return Err(DateSelectionError::PastDate(candidate));
        }

        self.selected_date = Some(candidate);
        let emitted = format_iso_date(candidate);
        info!("📅 Date selected: {}", emitted);
        self.close();
        Ok(emitted)
    }

    /// Move the displayed month; the selection is untouched
    pub fn change_month(&mut self, delta: i32) {
        match calendar::shift_month(self.reference_month, delta) {
            Some(month) => {
                self.reference_month = month;
                debug!("📅 Navigated to {}", calendar::month_label(month));
            }
            None => warn!("📅 Cannot move {} months from {}", delta, self.reference_month),
        }
    }

    /// "Clear" button
    pub fn clear(&mut self) -> String {
        self.selected_date = None;
        self.close();
        info!("📅 Date cleared");
        String::new()
    }

    /// "Today" button
    pub fn today(&mut self) -> String {
        let today = self.clock.today();
        self.selected_date = Some(today);
        self.reference_month = calendar::month_start(today);
        self.close();
        let emitted = format_iso_date(today);
        info!("📅 Date set to today: {}", emitted);
        emitted
    }

    /// Grid for the displayed month, regardless of open state
    pub fn month_view(&self) -> CalendarMonthView {
        calendar::build_month_view(self.reference_month, self.clock.today(), self.selected_date)
    }

    pub fn snapshot(&self) -> DatePickerSnapshot {
        DatePickerSnapshot {
            state: self.state,
            value: self.value(),
            display_value: self.selected_date.map(format_input_display).unwrap_or_default(),
            placeholder: self.placeholder.clone(),
            reference_month: self.reference_month,
            month_view: self.is_open().then(|| self.month_view()),
            outside_click_armed: self.listener.is_some(),
        }
    }
}
