use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::engine::ranker::enrich;
use crate::error::SnapshotError;
use crate::models::{AlertEntry, ExpiryRecord, InventoryItem};
use crate::utils::dates::parse_date_key;

/// Expiry row as delivered by the expiry query; the date may be missing or garbage.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpiryRow {
    pub item_id: Uuid,
    pub item_name: String,
    pub quantity: Decimal,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl ExpiryRow {
    fn with_date(self, expiry_date: NaiveDate) -> ExpiryRecord {
        ExpiryRecord {
            item_id: self.item_id,
            item_name: self.item_name,
            quantity: self.quantity,
            expiry_date,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    inventory: Vec<InventoryItem>,
    #[serde(default)]
    expiry: Vec<ExpiryRow>,
    #[serde(default)]
    calendar_data: Option<BTreeMap<String, Vec<ExpiryRow>>>,
}

/// Validated view of the upstream data, safe to hand to the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub inventory: Vec<InventoryItem>,
    pub expiry: Vec<ExpiryRecord>,
    /// Pre-bucketed calendar map, when upstream supplied one.
    pub calendar_data: Option<BTreeMap<NaiveDate, Vec<ExpiryRecord>>>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawSnapshot) -> Self {
        let inventory = raw
            .inventory
            .into_iter()
            .map(|mut item| {
                if item.capacity < Decimal::ZERO {
                    log::warn!(
                        "{}: negative capacity {} treated as 0",
                        item.item_name,
                        item.capacity
                    );
                    item.capacity = Decimal::ZERO;
                }
                item
            })
            .collect();

        let expiry = valid_records(raw.expiry);

        let calendar_data = raw.calendar_data.map(|buckets| {
            let mut by_date: BTreeMap<NaiveDate, Vec<ExpiryRecord>> = BTreeMap::new();
            for (key, rows) in buckets {
                let Some(date) = parse_date_key(&key) else {
                    log::warn!("dropping calendar bucket with unparseable key {key:?}");
                    continue;
                };
                // The bucket key wins over any per-row date.
                by_date
                    .entry(date)
                    .or_default()
                    .extend(rows.into_iter().map(|row| row.with_date(date)));
            }
            by_date
        });

        Self { inventory, expiry, calendar_data }
    }

    /// Date map for the calendar: upstream buckets if present, otherwise
    /// the expiry records grouped by date.
    pub fn items_by_date(&self, today: NaiveDate) -> BTreeMap<NaiveDate, Vec<AlertEntry>> {
        match &self.calendar_data {
            Some(buckets) => buckets
                .iter()
                .map(|(date, records)| {
                    (*date, records.iter().map(|r| enrich(r, today)).collect())
                })
                .collect(),
            None => crate::engine::bucket_by_date(&self.expiry, today),
        }
    }
}

fn valid_records(rows: Vec<ExpiryRow>) -> Vec<ExpiryRecord> {
    let total = rows.len();
    let records: Vec<ExpiryRecord> = rows
        .into_iter()
        .filter_map(|row| {
            let parsed = row.expiry_date.as_deref().and_then(parse_date_key);
            match parsed {
                Some(date) => Some(row.with_date(date)),
                None => {
                    log::warn!(
                        "dropping expiry record for {}: bad expiry date {:?}",
                        row.item_name,
                        row.expiry_date
                    );
                    None
                }
            }
        })
        .collect();
    if records.len() < total {
        log::debug!("kept {} of {} expiry records", records.len(), total);
    }
    records
}

pub async fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
    let snapshot = Snapshot::from_json(&json)?;
    log::info!(
        "loaded snapshot {}: {} items, {} expiry records",
        path.display(),
        snapshot.inventory.len(),
        snapshot.expiry.len()
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const ITEM: &str = "6f1c2f64-36a4-4b8e-9a53-2b0f6a4f0d11";

    #[test]
    fn drops_records_without_usable_dates() {
        let json = format!(
            r#"{{
                "expiry": [
                    {{"item_id": "{ITEM}", "item_name": "Milk", "quantity": 8, "expiry_date": "2024-03-11"}},
                    {{"item_id": "{ITEM}", "item_name": "Cream", "quantity": 2, "expiry_date": null}},
                    {{"item_id": "{ITEM}", "item_name": "Jam", "quantity": 1, "expiry_date": "soon"}},
                    {{"item_id": "{ITEM}", "item_name": "Egg", "quantity": 30}}
                ]
            }}"#
        );
        let snapshot = Snapshot::from_json(&json).unwrap();
        assert_eq!(snapshot.expiry.len(), 1);
        assert_eq!(snapshot.expiry[0].item_name, "Milk");
        assert_eq!(snapshot.expiry[0].quantity, dec!(8));
    }

    #[test]
    fn inventory_defaults_and_negative_capacity() {
        let json = format!(
            r#"{{"inventory": [
                {{"id": "{ITEM}", "item_name": "Lettuce", "stock_level": 3, "capacity": -10}}
            ]}}"#
        );
        let snapshot = Snapshot::from_json(&json).unwrap();
        let item = &snapshot.inventory[0];
        assert_eq!(item.capacity, Decimal::ZERO);
        assert!(item.is_active());
        assert_eq!(item.category, None);
    }

    #[test]
    fn empty_document_is_a_valid_empty_snapshot() {
        assert_eq!(Snapshot::from_json("{}").unwrap(), Snapshot::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(matches!(Snapshot::from_json("[1, 2"), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn calendar_buckets_use_their_keys() {
        let json = format!(
            r#"{{"calendar_data": {{
                "2024-3-12": [{{"item_id": "{ITEM}", "item_name": "Milk", "quantity": 1}}],
                "bogus": [{{"item_id": "{ITEM}", "item_name": "Jam", "quantity": 1}}]
            }}}}"#
        );
        let snapshot = Snapshot::from_json(&json).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let map = snapshot.items_by_date(today);
        assert_eq!(map.len(), 1);
        let entries = &map[&NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()];
        assert_eq!(entries[0].days_until, 2);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let err = load_snapshot("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
