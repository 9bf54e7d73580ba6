use chrono::NaiveDate;

/// Renders the upstream calendar key, `YYYY-M-D` without zero padding.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%-m-%-d").to_string()
}

/// Accepts `YYYY-M-D` as well as zero-padded `YYYY-MM-DD`.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d").ok()
}
