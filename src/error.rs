use thiserror::Error;

/// Errors raised at the boundary of the engine, before any computation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("month index {0} is out of range (expected 0-11)")]
    InvalidMonth(u32),

    #[error("year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}

/// Failures of the external data source. These surface to the presentation
/// layer as "data unavailable", never as an empty result.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
