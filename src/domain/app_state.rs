use serde::{Deserialize, Serialize};

use super::{
    engine::{recompute, PricingSettings},
    entities::{BusinessProfile, Item, MAX_ITEMS, MIN_ITEMS},
    error::PricingError,
    report::ComparisonReport,
};

/// Inputs of the current pricing session, owned by the shell.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub profile: BusinessProfile,
    pub items: Vec<Item>,
    pub settings: PricingSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            profile: BusinessProfile::default(),
            items: vec![Item::placeholder(1)],
            settings: PricingSettings::default(),
        }
    }
}

impl AppState {
    pub fn recompute(&self) -> Result<ComparisonReport, PricingError> {
        recompute(&self.profile, &self.items, &self.settings)
    }

    /// Grows with placeholders or truncates from the end, keeping the count
    /// within the supported range.
    pub fn set_item_count(&mut self, count: usize) {
        let count = count.clamp(MIN_ITEMS, MAX_ITEMS);
        if count < self.items.len() {
            self.items.truncate(count);
        } else {
            let next = self.items.len() + 1;
            self.items.extend((next..=count).map(Item::placeholder));
        }
    }

    pub fn item_mut(&mut self, position: usize) -> Option<&mut Item> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get_mut(index))
    }

    /// Removes the item at 1-based `position`; the last item always stays.
    pub fn remove_item(&mut self, position: usize) -> bool {
        if self.items.len() <= MIN_ITEMS || position == 0 || position > self.items.len() {
            return false;
        }
        self.items.remove(position - 1);
        true
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.profile = persisted.profile;
        if !persisted.items.is_empty() {
            self.items = persisted.items;
            self.items.truncate(MAX_ITEMS);
        }
        self.settings = persisted.settings;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            profile: self.profile.clone(),
            items: self.items.clone(),
            settings: self.settings,
        }
    }
}

/// Last inputs, restored on the next start.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub profile: BusinessProfile,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub settings: PricingSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_count_grows_with_placeholders_and_shrinks_from_the_end() {
        let mut state = AppState::default();
        state.items[0].name = "Croissant".to_string();

        state.set_item_count(3);
        let names: Vec<_> = state.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Croissant", "Product 2", "Product 3"]);

        state.set_item_count(0);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Croissant");

        state.set_item_count(500);
        assert_eq!(state.items.len(), MAX_ITEMS);
    }

    #[test]
    fn positions_are_one_based() {
        let mut state = AppState::default();
        state.set_item_count(2);

        assert!(state.item_mut(0).is_none());
        state.item_mut(2).unwrap().unit_variable_cost = 7.5;
        assert_eq!(state.items[1].unit_variable_cost, 7.5);

        assert!(state.remove_item(1));
        assert_eq!(state.items[0].unit_variable_cost, 7.5);
        assert!(!state.remove_item(1), "last item is kept");
    }

    #[test]
    fn persisted_round_trip_restores_inputs() {
        let mut state = AppState::default();
        state.profile.commission_rate = 0.1;
        state.items.push(Item::new("Tart", 12.0).with_practiced_price(30.0));

        let mut restored = AppState::default();
        restored.apply_persisted(state.to_persisted());
        assert_eq!(restored, state);
    }

    #[test]
    fn empty_persisted_items_keep_placeholder() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedState::default());
        assert_eq!(state.items, vec![Item::placeholder(1)]);
    }
}
