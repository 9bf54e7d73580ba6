use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::{pad_slots, AlertRanker, CalendarBuilder, Categorizer};
use crate::error::SnapshotError;
use crate::models::{
    AlertEntry, CalendarCell, CategoryGroups, InventoryOverview, MonthCursor, StockRow,
};
use crate::snapshot::Snapshot;
use crate::utils::config::Config;

use super::inventory::{group_by_category, low_stock, overview};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub calendar: Vec<CalendarCell>,
    pub alerts: Vec<AlertEntry>,
    pub alert_capacity: usize,
    pub groups: CategoryGroups,
    pub overview: InventoryOverview,
    pub low_stock: Vec<StockRow>,
}

impl DashboardView {
    /// Exactly `alert_capacity` slots for the alert grid.
    pub fn alert_slots(&self) -> Vec<Option<&AlertEntry>> {
        pad_slots(&self.alerts, self.alert_capacity)
    }
}

/// What the presentation layer renders. A failed fetch is `Unavailable`,
/// never an empty `Ready`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DataState {
    Ready(DashboardView),
    Unavailable { reason: String },
}

impl DataState {
    pub fn view(&self) -> Option<&DashboardView> {
        match self {
            DataState::Ready(view) => Some(view),
            DataState::Unavailable { .. } => None,
        }
    }
}

pub fn dashboard(
    snapshot: &Snapshot,
    cursor: MonthCursor,
    today: NaiveDate,
    config: &Config,
) -> DashboardView {
    let ranker = AlertRanker::new(config.alert_capacity, config.alert_horizon_days);
    let calendar = CalendarBuilder::new(config.week_start);
    let items_by_date = snapshot.items_by_date(today);

    DashboardView {
        title: cursor.title(),
        calendar: calendar.build(cursor, &items_by_date, today),
        alerts: ranker.rank(&snapshot.expiry, today),
        alert_capacity: ranker.capacity,
        groups: group_by_category(&Categorizer::default(), &snapshot.inventory),
        overview: overview(&snapshot.inventory, config.low_stock_percent),
        low_stock: low_stock(&snapshot.inventory, config.low_stock_percent),
    }
}

pub fn refresh(
    source: Result<Snapshot, SnapshotError>,
    cursor: MonthCursor,
    today: NaiveDate,
    config: &Config,
) -> DataState {
    match source {
        Ok(snapshot) => DataState::Ready(dashboard(&snapshot, cursor, today, config)),
        Err(e) => {
            log::error!("expiry data unavailable: {}", e);
            DataState::Unavailable { reason: e.to_string() }
        }
    }
}
