use serde::{Deserialize, Serialize};

use super::entities::Item;

/// Spreads the business's fixed cost over the registered items.
///
/// Returns one share per item, in the same order as `items`.
pub trait FixedCostAllocator {
    fn allocate(&self, total_fixed_cost: f64, items: &[Item]) -> Vec<f64>;
}

/// Every item carries the same share, whatever it sells.
///
/// Items with very different sales volumes end up with misleading net
/// margins; the figures are indicative only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EqualSplit;

impl FixedCostAllocator for EqualSplit {
    fn allocate(&self, total_fixed_cost: f64, items: &[Item]) -> Vec<f64> {
        if items.is_empty() {
            return Vec::new();
        }
        let share = total_fixed_cost / items.len() as f64;
        vec![share; items.len()]
    }
}

/// Allocation policies selectable from persisted settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationPolicy {
    #[default]
    EqualSplit,
}

impl AllocationPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            AllocationPolicy::EqualSplit => "Equal split across items",
        }
    }
}

impl FixedCostAllocator for AllocationPolicy {
    fn allocate(&self, total_fixed_cost: f64, items: &[Item]) -> Vec<f64> {
        match self {
            AllocationPolicy::EqualSplit => EqualSplit.allocate(total_fixed_cost, items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_split_divides_by_item_count() {
        let items: Vec<Item> = (1..=4).map(Item::placeholder).collect();
        let shares = EqualSplit.allocate(2_000.0, &items);
        assert_eq!(shares, vec![500.0; 4]);
    }

    #[test]
    fn shares_ignore_item_cost() {
        let items = vec![Item::new("Cheap", 1.0), Item::new("Dear", 900.0)];
        let shares = AllocationPolicy::EqualSplit.allocate(300.0, &items);
        assert_eq!(shares[0], shares[1]);
    }

    #[test]
    fn no_items_no_shares() {
        assert!(EqualSplit.allocate(1_000.0, &[]).is_empty());
    }
}
