use chrono::Datelike;
use shared::{CalendarDay, CalendarDayType, CalendarMonth, DatePickerState, DatePickerView};

use crate::domain::calendar::{CalendarCell, CalendarMonthView, WEEKDAY_LABELS};
use crate::domain::date_selection::{DatePickerSnapshot, PickerState};
use crate::domain::date_utils::format_iso_date;

pub struct CalendarMapper;

impl CalendarMapper {
    pub fn to_day_dto(cell: &CalendarCell) -> CalendarDay {
        match cell {
            CalendarCell::Placeholder => CalendarDay {
                day_type: CalendarDayType::PaddingBefore,
                day: 0,
                date: None,
                is_past: false,
                is_today: false,
                is_selected: false,
                is_disabled: false,
            },
            CalendarCell::Day(day) => CalendarDay {
                day_type: CalendarDayType::MonthDay,
                day: day.day,
                date: Some(format_iso_date(day.date)),
                is_past: day.is_past,
                is_today: day.is_today,
                is_selected: day.is_selected,
                is_disabled: cell.is_disabled(),
            },
        }
    }

    pub fn to_month_dto(view: &CalendarMonthView) -> CalendarMonth {
        CalendarMonth {
            month: view.month,
            year: view.year,
            month_label: view.label.clone(),
            days_in_month: view.days_in_month,
            first_day_of_week: view.first_weekday,
            weekday_labels: WEEKDAY_LABELS.iter().map(|label| label.to_string()).collect(),
            days: view.cells.iter().map(Self::to_day_dto).collect(),
        }
    }

    pub fn to_picker_view(snapshot: &DatePickerSnapshot) -> DatePickerView {
        let state = match snapshot.state {
            PickerState::Closed => DatePickerState::Closed,
            PickerState::Open => DatePickerState::Open,
        };

        DatePickerView {
            state,
            value: snapshot.value.clone(),
            display_value: snapshot.display_value.clone(),
            placeholder: snapshot.placeholder.clone(),
            reference_month: snapshot.reference_month.month(),
            reference_year: snapshot.reference_month.year(),
            calendar: snapshot.month_view.as_ref().map(Self::to_month_dto),
            outside_click_armed: snapshot.outside_click_armed,
        }
    }
}
