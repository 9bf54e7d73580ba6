use rust_decimal::Decimal;

use crate::engine::{band, fill_percent, stock::fill_ratio, Categorizer};
use crate::models::{
    CategoryBucket, CategoryGroups, InventoryItem, InventoryOverview, StockBand, StockRow,
};

pub fn stock_row(item: &InventoryItem) -> StockRow {
    let percent = fill_percent(item.stock_level, item.capacity);
    StockRow {
        id: item.id,
        name: item.item_name.trim().to_string(),
        percent,
        band: band(percent),
    }
}

/// Splits active items into category lists, keeping input order within each.
pub fn group_by_category(categorizer: &Categorizer, items: &[InventoryItem]) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    for item in items.iter().filter(|item| item.is_active()) {
        let row = stock_row(item);
        match categorizer.categorize(item) {
            CategoryBucket::Perishable => groups.perishable.push(row),
            CategoryBucket::SemiPerishable => groups.semi_perishable.push(row),
        }
    }
    groups
}

/// Active items whose stock is strictly below `threshold_percent` of capacity,
/// lowest first. Items without capacity are skipped.
pub fn low_stock(items: &[InventoryItem], threshold_percent: u8) -> Vec<StockRow> {
    let threshold = Decimal::from(threshold_percent) / Decimal::ONE_HUNDRED;
    let mut low: Vec<(Decimal, StockRow)> = items
        .iter()
        .filter(|item| item.is_active())
        .filter_map(|item| {
            let ratio = fill_ratio(item.stock_level, item.capacity)?;
            (ratio < threshold).then(|| (ratio, stock_row(item)))
        })
        .collect();
    low.sort_by(|a, b| a.0.cmp(&b.0));
    low.into_iter().map(|(_, row)| row).collect()
}

pub fn overview(items: &[InventoryItem], threshold_percent: u8) -> InventoryOverview {
    let active: Vec<StockBand> = items
        .iter()
        .filter(|item| item.is_active())
        .map(|item| band(fill_percent(item.stock_level, item.capacity)))
        .collect();

    InventoryOverview {
        total_items: active.len(),
        out_of_stock: active.iter().filter(|b| **b == StockBand::Empty).count(),
        low_stock: active.iter().filter(|b| **b == StockBand::Bad).count(),
        restock_soon: low_stock(items, threshold_percent).len(),
    }
}
