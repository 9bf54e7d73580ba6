use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AlertEntry, ExpiryRecord};

use super::classifier::{classify, DEFAULT_HORIZON_DAYS};

/// Number of alert slots the dashboard grid shows.
pub const DEFAULT_ALERT_CAPACITY: usize = 8;

pub fn enrich(record: &ExpiryRecord, today: NaiveDate) -> AlertEntry {
    let days_until = record.days_until(today);
    AlertEntry {
        item_id: record.item_id,
        item_name: record.item_name.clone(),
        quantity: record.quantity,
        days_until,
        expiry_date: record.expiry_date,
        priority: classify(days_until),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertRanker {
    pub capacity: usize,
    pub horizon_days: i64,
}

impl Default for AlertRanker {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_ALERT_CAPACITY,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl AlertRanker {
    pub fn new(capacity: usize, horizon_days: i64) -> Self {
        Self { capacity, horizon_days }
    }

    /// Most urgent first: by tier, then by days remaining. Equal keys keep
    /// their input order. At most `capacity` entries come back; nothing is
    /// invented to fill the rest.
    pub fn rank(&self, records: &[ExpiryRecord], today: NaiveDate) -> Vec<AlertEntry> {
        let mut entries: Vec<AlertEntry> = records
            .iter()
            .map(|record| enrich(record, today))
            .filter(|entry| entry.days_until <= self.horizon_days)
            .collect();

        // sort_by_key is stable
        entries.sort_by_key(|entry| (entry.priority, entry.days_until));

        let surfaced = entries.len();
        entries.truncate(self.capacity);
        match entries.first() {
            Some(top) => log::debug!(
                "ranked {} expiry records: {} within {} days, {} shown, most urgent {} ({})",
                records.len(),
                surfaced,
                self.horizon_days,
                entries.len(),
                top.item_name,
                top.priority
            ),
            None => log::debug!(
                "ranked {} expiry records: none within {} days",
                records.len(),
                self.horizon_days
            ),
        }
        entries
    }
}

pub fn rank(records: &[ExpiryRecord], today: NaiveDate) -> Vec<AlertEntry> {
    AlertRanker::default().rank(records, today)
}

/// Fixed-size slot list for the alert grid. `None` marks a placeholder.
pub fn pad_slots(entries: &[AlertEntry], capacity: usize) -> Vec<Option<&AlertEntry>> {
    let mut slots: Vec<Option<&AlertEntry>> = entries.iter().take(capacity).map(Some).collect();
    slots.resize(capacity, None);
    slots
}

/// Groups every record by expiry date for the calendar. Unlike `rank`,
/// no horizon applies.
pub fn bucket_by_date(
    records: &[ExpiryRecord],
    today: NaiveDate,
) -> BTreeMap<NaiveDate, Vec<AlertEntry>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<AlertEntry>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(record.expiry_date)
            .or_default()
            .push(enrich(record, today));
    }
    buckets
}
