use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::error::EngineError;
use crate::models::{AlertEntry, CalendarCell, MonthCursor, WeekStart};
use crate::utils::dates::date_key;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// `month0` is zero-based.
pub fn days_in_month(month0: u32, year: i32) -> u32 {
    match month0 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Lays out a month as whole weeks. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarBuilder {
    pub week_start: WeekStart,
}

impl CalendarBuilder {
    pub fn new(week_start: WeekStart) -> Self {
        Self { week_start }
    }

    fn weekday_index(&self, date: NaiveDate) -> u32 {
        match self.week_start {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }

    pub fn build(
        &self,
        cursor: MonthCursor,
        items_by_date: &BTreeMap<NaiveDate, Vec<AlertEntry>>,
        today: NaiveDate,
    ) -> Vec<CalendarCell> {
        let first = cursor.first_day();
        let leading = self.weekday_index(first);
        let month_days = days_in_month(cursor.month0(), cursor.year());
        let prev = cursor.prev();
        let prev_days = days_in_month(prev.month0(), prev.year());

        let total = (leading + month_days).div_ceil(7) * 7;
        let mut cells = Vec::with_capacity(total as usize);

        cells.extend((0..leading).rev().map(|i| CalendarCell::filler(prev_days - i)));

        for (offset, date) in first.iter_days().take(month_days as usize).enumerate() {
            let items = items_by_date.get(&date).cloned().unwrap_or_default();
            let marker = items.iter().map(|item| item.priority).min();
            cells.push(CalendarCell {
                day: offset as u32 + 1,
                date: Some(date),
                key: Some(date_key(date)),
                in_month: true,
                is_today: date == today,
                items,
                marker,
            });
        }

        let trailing = total - leading - month_days;
        cells.extend((1..=trailing).map(CalendarCell::filler));

        log::debug!(
            "built {} with {} leading, {} trailing cells",
            cursor.title(),
            leading,
            trailing
        );
        cells
    }
}

/// Validating entry point taking a zero-based month.
pub fn build(
    month0: u32,
    year: i32,
    items_by_date: &BTreeMap<NaiveDate, Vec<AlertEntry>>,
    today: NaiveDate,
) -> Result<Vec<CalendarCell>, EngineError> {
    let cursor = MonthCursor::new(month0, year)?;
    Ok(CalendarBuilder::default().build(cursor, items_by_date, today))
}
