//! Planner state and the operations the UI drives it with.
//!
//! All list mutations happen through methods on [`Planner`] so the state
//! stays an explicit, serializable value rather than being scattered
//! across UI handles. View filtering is a pure function over that state.
use serde::{Deserialize, Serialize};

use crate::advisory::{AdvisoryConfig, PackSize, recommend_pack_size};
use crate::distribute::{assign_item, auto_balance, carried_counts};
use crate::generate::generate;
use crate::item::{GearItem, TripDetails};

/// The whole planner: trip parameters plus the current packing list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Planner {
    pub trip: TripDetails,
    #[serde(default)]
    pub items: Vec<GearItem>,
}

impl Planner {
    #[must_use]
    pub fn new(trip: TripDetails) -> Self {
        Self {
            trip,
            items: Vec::new(),
        }
    }

    /// Regenerate the packing list from the trip parameters, replacing
    /// the current list wholesale. Custom items do not survive.
    pub fn generate(&mut self) {
        self.items = generate(&self.trip);
    }

    /// Append a user-added item. Blank names are rejected; quantity is
    /// clamped to at least one. Returns the minted id.
    pub fn add_custom_item(
        &mut self,
        name: &str,
        category: &str,
        quantity: u32,
    ) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let category = if category.trim().is_empty() {
            "Custom"
        } else {
            category
        };
        let id = self.next_custom_id();
        self.items
            .push(GearItem::custom(&id, name, category, quantity));
        Some(id)
    }

    /// Smallest unused `custom-N` id.
    fn next_custom_id(&self) -> String {
        let mut n = 1u32;
        loop {
            let id = format!("custom-{n}");
            if self.items.iter().all(|i| i.id != id) {
                return id;
            }
            n += 1;
        }
    }

    /// Remove any item, generated or custom. Returns whether it existed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn toggle_checked(&mut self, id: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.is_checked = !item.is_checked;
        }
    }

    pub fn assign_item(&mut self, id: &str, person: Option<u32>) {
        assign_item(&mut self.items, id, person);
    }

    pub fn auto_balance(&mut self) {
        auto_balance(&mut self.items, self.trip.number_of_people);
    }

    /// Categories for the filter dropdown: "Custom" first, then the
    /// list's categories in encounter order, deduplicated.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = vec!["Custom".to_string()];
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }

    /// Items visible under a filter, in list order.
    #[must_use]
    pub fn visible_items(&self, filter: &ListFilter) -> Vec<&GearItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item, &self.trip))
            .collect()
    }

    /// Packed-versus-total progress over the filtered view.
    #[must_use]
    pub fn progress(&self, filter: &ListFilter) -> Progress {
        let visible = self.visible_items(filter);
        Progress {
            total: visible.len(),
            checked: visible.iter().filter(|i| i.is_checked).count(),
        }
    }

    /// Per-person carried-item counts for the distribution board.
    #[must_use]
    pub fn carried_counts(&self) -> Vec<u32> {
        carried_counts(&self.items, self.trip.number_of_people)
    }

    /// What one person carries, for the distribution column footer.
    #[must_use]
    pub fn person_summary(&self, person: u32) -> PersonSummary {
        let carried = self
            .items
            .iter()
            .filter(|i| i.assigned_to == Some(person));
        let mut summary = PersonSummary::default();
        for item in carried {
            summary.total += 1;
            if item.is_essential {
                summary.essential += 1;
            }
        }
        summary
    }

    /// Pack-size recommendation over the filtered view, so narrowing the
    /// list to essentials or one category narrows the estimate too.
    #[must_use]
    pub fn recommended_pack(&self, filter: &ListFilter, config: &AdvisoryConfig) -> PackSize {
        let visible: Vec<GearItem> = self.visible_items(filter).into_iter().cloned().collect();
        recommend_pack_size(&visible, self.trip.duration, config)
    }
}

/// Progress indicator numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub checked: usize,
}

/// One person's share of the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersonSummary {
    pub total: usize,
    pub essential: usize,
}

/// Which list view the UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    All,
    ByPerson,
    Distribution,
}

/// View filter over the packing list. All criteria are conjunctive;
/// empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Case-insensitive substring match on the item name.
    pub search: String,
    /// Exact category match.
    pub category: Option<String>,
    pub essential_only: bool,
    pub view_mode: ViewMode,
    /// Person whose view is shown in by-person mode. Shared (unassigned)
    /// items are always included there.
    pub person: Option<u32>,
}

impl ListFilter {
    #[must_use]
    pub fn matches(&self, item: &GearItem, trip: &TripDetails) -> bool {
        let search_ok = self.search.is_empty()
            || item.name.to_lowercase().contains(&self.search.to_lowercase());
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|c| &item.category == c);
        let essential_ok = !self.essential_only || item.is_essential;
        let person_ok = match (self.view_mode, self.person) {
            (ViewMode::ByPerson, Some(person)) if trip.distribute_gear => {
                item.assigned_to == Some(person) || item.assigned_to.is_none()
            }
            _ => true,
        };
        search_ok && category_ok && essential_ok && person_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{CampingStyle, Terrain, Weather};

    fn planner() -> Planner {
        let mut planner = Planner::new(TripDetails {
            duration: 2,
            weather: Weather::Sunny,
            terrain: Terrain::Forest,
            camping_style: CampingStyle::Tent,
            ..TripDetails::default()
        });
        planner.generate();
        planner
    }

    #[test]
    fn generate_replaces_the_list_wholesale() {
        let mut planner = planner();
        planner.add_custom_item("Banjo", "Custom", 1).unwrap();
        planner.toggle_checked("11");
        planner.generate();
        assert!(planner.items.iter().all(|i| !i.is_custom));
        assert!(planner.items.iter().all(|i| !i.is_checked));
    }

    #[test]
    fn custom_ids_take_the_smallest_unused_slot() {
        let mut planner = planner();
        let first = planner.add_custom_item("Banjo", "", 0).unwrap();
        let second = planner.add_custom_item("Harmonica", "Custom", 2).unwrap();
        assert_eq!(first, "custom-1");
        assert_eq!(second, "custom-2");
        planner.remove_item("custom-1");
        assert_eq!(planner.add_custom_item("Kazoo", "Custom", 1).unwrap(), "custom-1");

        let harmonica = planner.items.iter().find(|i| i.id == "custom-2").unwrap();
        assert_eq!(harmonica.category, "Custom");
        assert!(harmonica.is_custom);
    }

    #[test]
    fn blank_custom_names_are_rejected() {
        let mut planner = planner();
        assert!(planner.add_custom_item("   ", "Custom", 1).is_none());
    }

    #[test]
    fn custom_quantity_is_clamped_to_one() {
        let mut planner = planner();
        let id = planner.add_custom_item("Banjo", "Custom", 0).unwrap();
        let item = planner.items.iter().find(|i| i.id == id).unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn remove_works_for_generated_items_too() {
        let mut planner = planner();
        assert!(planner.remove_item("11"));
        assert!(!planner.remove_item("11"));
        assert!(planner.items.iter().all(|i| i.id != "11"));
    }

    #[test]
    fn toggle_flips_only_the_named_item() {
        let mut planner = planner();
        planner.toggle_checked("11");
        assert!(planner.items.iter().find(|i| i.id == "11").unwrap().is_checked);
        assert!(planner.items.iter().filter(|i| i.is_checked).count() == 1);
        planner.toggle_checked("11");
        assert!(!planner.items.iter().find(|i| i.id == "11").unwrap().is_checked);
    }

    #[test]
    fn categories_start_with_custom_and_deduplicate() {
        let planner = planner();
        let categories = planner.categories();
        assert_eq!(categories[0], "Custom");
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
        assert!(categories.iter().any(|c| c == "Shelter"));
    }

    #[test]
    fn search_filter_is_case_insensitive() {
        let planner = planner();
        let filter = ListFilter {
            search: "tEnT".to_string(),
            ..ListFilter::default()
        };
        let visible = planner.visible_items(&filter);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|i| i.name.to_lowercase().contains("tent")));
    }

    #[test]
    fn essential_and_category_filters_are_conjunctive() {
        let planner = planner();
        let filter = ListFilter {
            category: Some("Shelter".to_string()),
            essential_only: true,
            ..ListFilter::default()
        };
        let visible = planner.visible_items(&filter);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|i| i.category == "Shelter" && i.is_essential));
    }

    #[test]
    fn by_person_view_includes_shared_items() {
        let mut planner = planner();
        planner.trip.number_of_people = 2;
        planner.trip.distribute_gear = true;
        planner.generate();

        let filter = ListFilter {
            view_mode: ViewMode::ByPerson,
            person: Some(1),
            ..ListFilter::default()
        };
        let visible = planner.visible_items(&filter);
        assert!(visible
            .iter()
            .all(|i| i.assigned_to == Some(1) || i.assigned_to.is_none()));
        assert!(visible.iter().any(|i| i.assigned_to.is_none()));

        // Without distribution the person filter is inert.
        planner.trip.distribute_gear = false;
        let all = planner.visible_items(&filter);
        assert_eq!(all.len(), planner.items.len());
    }

    #[test]
    fn progress_counts_the_filtered_view() {
        let mut planner = planner();
        let filter = ListFilter::default();
        let before = planner.progress(&filter);
        assert_eq!(before.checked, 0);
        planner.toggle_checked("11");
        let after = planner.progress(&filter);
        assert_eq!(after.checked, 1);
        assert_eq!(after.total, before.total);
    }

    #[test]
    fn advisory_follows_the_filtered_view() {
        let planner = planner();
        let config = AdvisoryConfig::default();
        let full = planner.recommended_pack(&ListFilter::default(), &config);

        let filter = ListFilter {
            search: "duct tape".to_string(),
            ..ListFilter::default()
        };
        let narrowed = planner.recommended_pack(&filter, &config);
        // One non-bulky item at quantity 1: the 30L base plus the cold
        // margin its all-weather tag carries.
        assert_eq!(narrowed, PackSize::Weekend);
        // The unfiltered list holds tent, sleeping bag, and pad, all
        // bulky, so narrowing shrank the recommendation.
        assert!(full > narrowed);
    }

    #[test]
    fn person_summary_counts_carried_and_essential_gear() {
        let mut planner = planner();
        planner.trip.number_of_people = 2;
        planner.trip.distribute_gear = true;
        planner.generate();
        planner.auto_balance();

        let one = planner.person_summary(1);
        let two = planner.person_summary(2);
        assert!(one.total > 0 && two.total > 0);
        assert!(one.essential <= one.total);
        let assigned = planner
            .items
            .iter()
            .filter(|i| i.assigned_to.is_some())
            .count();
        assert_eq!(one.total + two.total, assigned);
    }

    #[test]
    fn planner_state_round_trips_through_json() {
        let mut planner = planner();
        planner.trip.number_of_people = 2;
        planner.trip.distribute_gear = true;
        planner.generate();
        planner.toggle_checked("11");
        let json = serde_json::to_string(&planner).unwrap();
        let back: Planner = serde_json::from_str(&json).unwrap();
        assert_eq!(planner, back);
    }
}
