use std::env;

use chrono::NaiveDate;

use crate::engine::classifier::DEFAULT_HORIZON_DAYS;
use crate::engine::ranker::DEFAULT_ALERT_CAPACITY;
use crate::error::ConfigError;
use crate::models::{MonthCursor, WeekStart};

pub const DEFAULT_LOW_STOCK_PERCENT: u8 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub snapshot_path: String,
    pub alert_capacity: usize,
    pub alert_horizon_days: i64,
    pub low_stock_percent: u8,
    pub week_start: WeekStart,
    /// Pins "today" for reproducible runs; otherwise the binary reads the clock.
    pub today: Option<NaiveDate>,
    pub display_month: Option<MonthCursor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: "snapshot.json".to_string(),
            alert_capacity: DEFAULT_ALERT_CAPACITY,
            alert_horizon_days: DEFAULT_HORIZON_DAYS,
            low_stock_percent: DEFAULT_LOW_STOCK_PERCENT,
            week_start: WeekStart::Sunday,
            today: None,
            display_month: None,
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let alert_capacity = match get("ALERT_CAPACITY") {
            Some(v) => parse(v, "ALERT_CAPACITY", "a non-negative integer")?,
            None => defaults.alert_capacity,
        };
        let alert_horizon_days = match get("ALERT_HORIZON_DAYS") {
            Some(v) => parse(v, "ALERT_HORIZON_DAYS", "an integer number of days")?,
            None => defaults.alert_horizon_days,
        };
        let low_stock_percent = match get("LOW_STOCK_PERCENT") {
            Some(v) => parse::<u8>(v.clone(), "LOW_STOCK_PERCENT", "a percentage (0-100)")
                .and_then(|p| {
                    if p <= 100 {
                        Ok(p)
                    } else {
                        Err(invalid("LOW_STOCK_PERCENT", v, "a percentage (0-100)"))
                    }
                })?,
            None => defaults.low_stock_percent,
        };
        let week_start = match get("WEEK_START") {
            Some(v) => match v.trim().to_lowercase().as_str() {
                "sunday" => WeekStart::Sunday,
                "monday" => WeekStart::Monday,
                _ => return Err(invalid("WEEK_START", v, "sunday or monday")),
            },
            None => defaults.week_start,
        };
        let today = match get("TODAY") {
            Some(v) => Some(
                NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                    .map_err(|_| invalid("TODAY", v, "a YYYY-MM-DD date"))?,
            ),
            None => None,
        };
        let display_month = match (get("DISPLAY_MONTH"), get("DISPLAY_YEAR")) {
            (Some(month), Some(year)) => {
                let month: u32 = parse(month, "DISPLAY_MONTH", "a month number (1-12)")?;
                let year: i32 = parse(year, "DISPLAY_YEAR", "a year")?;
                if month == 0 {
                    return Err(invalid(
                        "DISPLAY_MONTH",
                        month.to_string(),
                        "a month number (1-12)",
                    ));
                }
                Some(MonthCursor::new(month - 1, year)?)
            }
            (None, None) => None,
            (Some(_), None) => {
                return Err(invalid(
                    "DISPLAY_YEAR",
                    String::new(),
                    "set together with DISPLAY_MONTH",
                ))
            }
            (None, Some(_)) => {
                return Err(invalid(
                    "DISPLAY_MONTH",
                    String::new(),
                    "set together with DISPLAY_YEAR",
                ))
            }
        };

        Ok(Self {
            snapshot_path: get("SNAPSHOT_PATH").unwrap_or(defaults.snapshot_path),
            alert_capacity,
            alert_horizon_days,
            low_stock_percent,
            week_start,
            today,
            display_month,
        })
    }
}

fn parse<T: std::str::FromStr>(
    value: String,
    key: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| invalid(key, value, expected))
}

fn invalid(key: &'static str, value: String, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue { key, value, expected }
}
