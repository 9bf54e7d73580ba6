//! Pure transformations from inventory and expiry snapshots to dashboard data.
//! Nothing here reads the clock or holds state; `today` is always an input.

pub mod calendar;
pub mod categorizer;
pub mod classifier;
pub mod ranker;
pub mod stock;

pub use calendar::{build, days_in_month, CalendarBuilder};
pub use categorizer::{categorize, Categorizer, CategoryRule, LabelRule, NameSetRule};
pub use classifier::classify;
pub use ranker::{bucket_by_date, pad_slots, rank, AlertRanker};
pub use stock::{band, fill_percent};
