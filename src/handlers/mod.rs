pub mod dashboard;
pub mod inventory;

pub use dashboard::{dashboard, refresh, DashboardView, DataState};
