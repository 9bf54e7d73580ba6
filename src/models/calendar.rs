use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::expiry::{AlertEntry, PriorityTier};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// Displayed (month, year), owned by the caller and passed into every build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// `month0` is zero-based (0 = January).
    pub fn new(month0: u32, year: i32) -> Result<Self, EngineError> {
        if month0 > 11 {
            return Err(EngineError::InvalidMonth(month0));
        }
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .ok_or(EngineError::YearOutOfRange(year))?;
        Ok(Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self { first: date - chrono::Days::new(u64::from(date.day0())) }
    }

    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    // Both wrap across the year boundary; at the edge of chrono's range the
    // cursor stays where it is.
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month0()
    }

    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0() as usize], self.year())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarCell {
    /// Day number shown in the grid; filler cells show the adjacent month's day.
    pub day: u32,
    /// `None` for filler cells.
    pub date: Option<NaiveDate>,
    /// Upstream `YYYY-M-D` key for `date`.
    pub key: Option<String>,
    pub in_month: bool,
    pub is_today: bool,
    pub items: Vec<AlertEntry>,
    /// Most urgent tier among `items`.
    pub marker: Option<PriorityTier>,
}

impl CalendarCell {
    pub fn filler(day: u32) -> Self {
        Self {
            day,
            date: None,
            key: None,
            in_month: false,
            is_today: false,
            items: Vec::new(),
            marker: None,
        }
    }
}
