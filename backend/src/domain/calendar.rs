//! Calendar engine for the date picker overlay.
//!
//! Pure functions over a reference date. "Today" and the selected date are
//! always passed in, so a grid is fully determined by its inputs.

use chrono::{Datelike, Months, NaiveDate};

use super::date_utils::month_name;

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A selectable day in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    /// Strictly before today
    pub is_past: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

/// One slot of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Empty slot before the first day of the month
    Placeholder,
    Day(DayCell),
}

impl CalendarCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            CalendarCell::Placeholder => None,
            CalendarCell::Day(cell) => Some(cell),
        }
    }

    /// Past days are rendered muted and cannot be picked
    pub fn is_disabled(&self) -> bool {
        self.as_day().map(|cell| cell.is_past).unwrap_or(false)
    }
}

/// A month grid with the header data the overlay renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthView {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub days_in_month: u32,
    pub first_weekday: u32,
    pub cells: Vec<CalendarCell>,
}

/// Check if a year is a leap year (proleptic Gregorian)
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// First day of the month containing `reference`
pub fn month_start(reference: NaiveDate) -> NaiveDate {
    reference.with_day(1).unwrap_or(reference)
}

/// Number of days in the month containing `reference`
pub fn days_in_month(reference: NaiveDate) -> u32 {
    match reference.month() {
        2 => if is_leap_year(reference.year()) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of the first of the month (0 = Sunday, 1 = Monday, etc.)
pub fn first_weekday_of_month(reference: NaiveDate) -> u32 {
    month_start(reference).weekday().num_days_from_sunday()
}

/// First day of the month `delta` months away, or None past chrono's range
pub fn shift_month(reference: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let start = month_start(reference);
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        start.checked_add_months(months)
    } else {
        start.checked_sub_months(months)
    }
}

/// Header text, e.g. "March 2025"
pub fn month_label(reference: NaiveDate) -> String {
    format!("{} {}", month_name(reference.month()), reference.year())
}

/// Leading placeholders followed by one cell per day of the month
pub fn build_grid(
    reference: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<CalendarCell> {
    let leading = first_weekday_of_month(reference);
    let day_count = days_in_month(reference);
    let start = month_start(reference);

    let mut cells = Vec::with_capacity((leading + day_count) as usize);
    cells.extend((0..leading).map(|_| CalendarCell::Placeholder));

    for day in 1..=day_count {
        let Some(date) = start.with_day(day) else {
            continue;
        };
        cells.push(CalendarCell::Day(DayCell {
            day,
            date,
            is_past: date < today,
            is_today: date == today,
            is_selected: selected == Some(date),
        }));
    }

    cells
}

/// Grid plus header data for the month containing `reference`
pub fn build_month_view(
    reference: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> CalendarMonthView {
    let cells = build_grid(reference, today, selected);
    log::debug!(
        "🗓️ Built grid for {}: {} cells",
        month_label(reference),
        cells.len()
    );

    CalendarMonthView {
        year: reference.year(),
        month: reference.month(),
        label: month_label(reference),
        days_in_month: days_in_month(reference),
        first_weekday: first_weekday_of_month(reference),
        cells,
    }
}
