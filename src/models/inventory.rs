use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Disabled,
}

/// Snapshot of one ingredient as reported by the inventory query.
/// The engine only reads these; restock/edit/disable happen elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub item_name: String,
    pub stock_level: Decimal,
    /// Normalization denominator for the fill percentage.
    pub capacity: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
}

impl InventoryItem {
    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }

    /// Non-empty category label, if the item carries one. Whitespace
    /// still counts as a label.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|label| !label.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryBucket {
    Perishable,
    SemiPerishable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockBand {
    Empty,
    Bad,
    Warn,
    Good,
}

/// One progress-bar row of the grouped inventory view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockRow {
    pub id: Uuid,
    pub name: String,
    pub percent: u8,
    pub band: StockBand,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryGroups {
    pub perishable: Vec<StockRow>,
    pub semi_perishable: Vec<StockRow>,
}

impl CategoryGroups {
    pub fn bucket(&self, bucket: CategoryBucket) -> &[StockRow] {
        match bucket {
            CategoryBucket::Perishable => &self.perishable,
            CategoryBucket::SemiPerishable => &self.semi_perishable,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventoryOverview {
    pub total_items: usize,
    pub out_of_stock: usize,
    pub low_stock: usize,
    pub restock_soon: usize,
}
