//! Expiry tracking and inventory health for a small kitchen.
//!
//! The [`engine`] turns read-only inventory and expiry snapshots into a
//! ranked alert feed, a month calendar and per-item stock metrics.
//! [`handlers`] assembles those into the dashboard view.

pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod snapshot;
pub mod utils;

pub use error::{ConfigError, EngineError, SnapshotError};
