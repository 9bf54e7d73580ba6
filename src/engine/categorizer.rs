use std::collections::HashSet;

use crate::models::{CategoryBucket, InventoryItem};

/// Names treated as perishable when an item carries no category label.
pub const PERISHABLE_NAMES: [&str; 11] = [
    "milk", "lettuce", "chicken", "tomato", "bread", "egg",
    "lemon", "mushroom", "fresh fruits", "cream", "jam",
];

/// One step of the categorization chain. Returning `None` defers to the
/// next rule.
pub trait CategoryRule: Send + Sync {
    fn apply(&self, item: &InventoryItem) -> Option<CategoryBucket>;
}

/// Uses the item's explicit label: anything mentioning "semi" is
/// semi-perishable, every other label is perishable.
#[derive(Debug, Default)]
pub struct LabelRule;

impl CategoryRule for LabelRule {
    fn apply(&self, item: &InventoryItem) -> Option<CategoryBucket> {
        let label = item.category_label()?.to_lowercase();
        if label.contains("semi") {
            Some(CategoryBucket::SemiPerishable)
        } else {
            Some(CategoryBucket::Perishable)
        }
    }
}

/// Membership in a fixed set of names; members get `hit`, everyone else `miss`.
#[derive(Debug)]
pub struct NameSetRule {
    names: HashSet<String>,
    hit: CategoryBucket,
    miss: CategoryBucket,
}

impl NameSetRule {
    pub fn new<I, S>(names: I, hit: CategoryBucket, miss: CategoryBucket) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| normalize_name(n.as_ref())).collect(),
            hit,
            miss,
        }
    }

    pub fn perishable_names() -> Self {
        Self::new(
            PERISHABLE_NAMES,
            CategoryBucket::Perishable,
            CategoryBucket::SemiPerishable,
        )
    }
}

impl CategoryRule for NameSetRule {
    fn apply(&self, item: &InventoryItem) -> Option<CategoryBucket> {
        if self.names.contains(&normalize_name(&item.item_name)) {
            Some(self.hit)
        } else {
            Some(self.miss)
        }
    }
}

/// Ordered rule list; the first rule with an opinion wins.
pub struct Categorizer {
    rules: Vec<Box<dyn CategoryRule>>,
    fallback: CategoryBucket,
}

impl Categorizer {
    pub fn new(fallback: CategoryBucket) -> Self {
        Self { rules: Vec::new(), fallback }
    }

    pub fn with_rule(mut self, rule: impl CategoryRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn categorize(&self, item: &InventoryItem) -> CategoryBucket {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(item))
            .unwrap_or(self.fallback)
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(CategoryBucket::SemiPerishable)
            .with_rule(LabelRule)
            .with_rule(NameSetRule::perishable_names())
    }
}

/// Categorizes with the default label-then-name chain.
pub fn categorize(item: &InventoryItem) -> CategoryBucket {
    Categorizer::default().categorize(item)
}

/// Lowercases and collapses runs of whitespace.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn item(name: &str, category: Option<&str>) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            item_name: name.to_string(),
            stock_level: dec!(70),
            capacity: dec!(100),
            category: category.map(str::to_string),
            status: ItemStatus::Active,
        }
    }

    #[test]
    fn label_wins_over_name() {
        assert_eq!(
            categorize(&item("Milk", Some("Semi-Perishable"))),
            CategoryBucket::SemiPerishable
        );
        assert_eq!(
            categorize(&item("Coffee Beans", Some("dairy"))),
            CategoryBucket::Perishable
        );
        assert_eq!(
            categorize(&item("Rice", Some("SEMI"))),
            CategoryBucket::SemiPerishable
        );
    }

    #[test]
    fn unlabelled_items_fall_back_to_names() {
        assert_eq!(categorize(&item("milk", None)), CategoryBucket::Perishable);
        assert_eq!(categorize(&item("  Fresh   Fruits ", None)), CategoryBucket::Perishable);
        assert_eq!(categorize(&item("MUSHROOM", None)), CategoryBucket::Perishable);
        assert_eq!(categorize(&item("Cocoa Powder", None)), CategoryBucket::SemiPerishable);
    }

    #[test]
    fn only_empty_label_is_treated_as_missing() {
        assert_eq!(
            categorize(&item("Mayonnaise", Some("   "))),
            CategoryBucket::Perishable
        );
        assert_eq!(
            categorize(&item("Mayonnaise", Some(""))),
            CategoryBucket::SemiPerishable
        );
        assert_eq!(categorize(&item("Lettuce", Some(""))), CategoryBucket::Perishable);
    }

    #[test]
    fn extra_rules_slot_in_front_of_the_chain() {
        struct Frozen;
        impl CategoryRule for Frozen {
            fn apply(&self, item: &InventoryItem) -> Option<CategoryBucket> {
                normalize_name(&item.item_name)
                    .starts_with("frozen")
                    .then_some(CategoryBucket::SemiPerishable)
            }
        }

        let categorizer = Categorizer::new(CategoryBucket::SemiPerishable)
            .with_rule(Frozen)
            .with_rule(LabelRule)
            .with_rule(NameSetRule::perishable_names());

        assert_eq!(
            categorizer.categorize(&item("Frozen chicken", Some("meat"))),
            CategoryBucket::SemiPerishable
        );
        assert_eq!(
            categorizer.categorize(&item("chicken", None)),
            CategoryBucket::Perishable
        );
    }

    #[test]
    fn empty_chain_uses_fallback() {
        let categorizer = Categorizer::new(CategoryBucket::Perishable);
        assert_eq!(categorizer.categorize(&item("anything", None)), CategoryBucket::Perishable);
    }
}
