use crate::models::PriorityTier;

/// Last day (inclusive) that still counts as critical. Expired records are
/// critical too.
pub const CRITICAL_MAX_DAYS: i64 = 1;
pub const WARNING_MAX_DAYS: i64 = 3;

/// Records further out than this are not alerted on at all.
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

pub fn classify(days_until_expiry: i64) -> PriorityTier {
    match days_until_expiry {
        d if d <= CRITICAL_MAX_DAYS => PriorityTier::Critical,
        d if d <= WARNING_MAX_DAYS => PriorityTier::Warning,
        _ => PriorityTier::Caution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints() {
        assert_eq!(classify(-5), PriorityTier::Critical);
        assert_eq!(classify(0), PriorityTier::Critical);
        assert_eq!(classify(1), PriorityTier::Critical);
        assert_eq!(classify(2), PriorityTier::Warning);
        assert_eq!(classify(3), PriorityTier::Warning);
        assert_eq!(classify(4), PriorityTier::Caution);
        assert_eq!(classify(DEFAULT_HORIZON_DAYS), PriorityTier::Caution);
    }

    #[test]
    fn tiers_are_ordered_by_urgency() {
        assert!(PriorityTier::Critical < PriorityTier::Warning);
        assert!(PriorityTier::Warning < PriorityTier::Caution);
    }
}
