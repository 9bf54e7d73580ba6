use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A batch of an item that expires on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryRecord {
    pub item_id: Uuid,
    pub item_name: String,
    pub quantity: Decimal,
    pub expiry_date: NaiveDate,
}

impl ExpiryRecord {
    /// Whole days from `today` until expiry; negative once expired.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }
}

/// Urgency of an expiring record. Declaration order is the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Critical,
    Warning,
    Caution,
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityTier::Critical => write!(f, "critical"),
            PriorityTier::Warning => write!(f, "warning"),
            PriorityTier::Caution => write!(f, "caution"),
        }
    }
}

/// Display-ready alert, recomputed on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEntry {
    pub item_id: Uuid,
    pub item_name: String,
    pub quantity: Decimal,
    pub days_until: i64,
    pub expiry_date: NaiveDate,
    pub priority: PriorityTier,
}
