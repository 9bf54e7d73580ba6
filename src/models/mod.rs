pub mod calendar;
pub mod expiry;
pub mod inventory;

pub use calendar::{CalendarCell, MonthCursor, WeekStart};
pub use expiry::{AlertEntry, ExpiryRecord, PriorityTier};
pub use inventory::{
    CategoryBucket, CategoryGroups, InventoryItem, InventoryOverview,
    ItemStatus, StockBand, StockRow,
};
