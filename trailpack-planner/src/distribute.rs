//! Gear distribution across the party.
//!
//! Two passes exist: a round-robin hand-out applied at generation time,
//! and an auto-balance pass the user can trigger later to spread whatever
//! is still unassigned. Person numbers are 1-based; `None` means shared
//! or not yet assigned.
use std::collections::HashMap;

use crate::item::GearItem;

/// Deal items out per category, one slot per item in category order.
///
/// Personal items are never assigned but still consume their slot, so the
/// hand-out pattern around them is unchanged. Custom items are left alone.
pub fn distribute_round_robin(items: &mut [GearItem], people: u32) {
    if people <= 1 {
        return;
    }
    let mut slots: HashMap<String, u32> = HashMap::new();
    for item in items.iter_mut().filter(|i| !i.is_custom) {
        let slot = slots.entry(item.category.clone()).or_insert(0);
        if !item.personal {
            item.assigned_to = Some(*slot % people + 1);
        }
        *slot += 1;
    }
}

/// Gear that stays with one person rather than being shared out.
///
/// This is the auto-balance notion of "personal", which is broader than
/// the round-robin exemption: whole categories of worn or hygiene gear
/// qualify, plus anything flagged personal or individual.
#[must_use]
pub fn is_personal_gear(item: &GearItem) -> bool {
    matches!(item.category.as_str(), "Clothing" | "Personal" | "Hygiene")
        || item.personal
        || item.individual
}

/// Spread the remaining unassigned shared gear across the party.
///
/// Shelter components are split between the first two people, heaviest
/// (longest-named) first. Cooking gear is dealt round-robin across
/// everyone. Whatever is left goes to whoever currently carries the
/// least, counting assignments already on the list.
pub fn auto_balance(items: &mut [GearItem], people: u32) {
    if people == 0 {
        return;
    }
    let people_count = people as usize;

    let mut loads = vec![0u32; people_count];
    for item in items.iter() {
        // checked_sub: a corrupted save may carry person 0.
        if let Some(slot) = item.assigned_to.and_then(|p| p.checked_sub(1)) {
            if let Some(load) = loads.get_mut(slot as usize) {
                *load += 1;
            }
        }
    }

    let shared: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, i)| i.assigned_to.is_none() && !i.is_custom && !is_personal_gear(i))
        .map(|(idx, _)| idx)
        .collect();

    let mut shelter: Vec<usize> = shared
        .iter()
        .copied()
        .filter(|&idx| items[idx].category == "Shelter")
        .collect();
    let cooking: Vec<usize> = shared
        .iter()
        .copied()
        .filter(|&idx| items[idx].category == "Fire & Cooking")
        .collect();

    if people >= 2 {
        // Longest name first as a weight proxy: the tent body lands on
        // person 1, the rainfly and poles on person 2.
        shelter.sort_by(|&a, &b| items[b].name.len().cmp(&items[a].name.len()));
        for (slot, &idx) in shelter.iter().enumerate() {
            let person = (slot % people_count.min(2)) as u32 + 1;
            items[idx].assigned_to = Some(person);
            loads[person as usize - 1] += 1;
        }
    }

    for (slot, &idx) in cooking.iter().enumerate() {
        let person = (slot % people_count) as u32 + 1;
        items[idx].assigned_to = Some(person);
        loads[person as usize - 1] += 1;
    }

    for &idx in &shared {
        if items[idx].assigned_to.is_some() {
            continue;
        }
        // First minimum wins on ties.
        let lightest = loads
            .iter()
            .enumerate()
            .min_by_key(|&(_, load)| load)
            .map_or(0, |(i, _)| i);
        items[idx].assigned_to = Some(lightest as u32 + 1);
        loads[lightest] += 1;
    }
}

/// Assign or unassign one item by id, as drag-and-drop does.
pub fn assign_item(items: &mut [GearItem], item_id: &str, person: Option<u32>) {
    if let Some(item) = items.iter_mut().find(|i| i.id == item_id) {
        item.assigned_to = person;
    }
}

/// How many items each person carries, indexed by person number minus one.
#[must_use]
pub fn carried_counts(items: &[GearItem], people: u32) -> Vec<u32> {
    let mut counts = vec![0u32; people as usize];
    for item in items {
        if let Some(slot) = item.assigned_to.and_then(|p| p.checked_sub(1)) {
            if let Some(count) = counts.get_mut(slot as usize) {
                *count += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str) -> GearItem {
        GearItem::new(id, name, category, 1, false)
    }

    #[test]
    fn round_robin_deals_per_category() {
        let mut items = vec![
            item("a", "Stove", "Fire & Cooking"),
            item("b", "Fuel", "Fire & Cooking"),
            item("c", "Cookpot", "Fire & Cooking"),
            item("d", "Map", "Navigation"),
        ];
        distribute_round_robin(&mut items, 2);
        assert_eq!(items[0].assigned_to, Some(1));
        assert_eq!(items[1].assigned_to, Some(2));
        assert_eq!(items[2].assigned_to, Some(1));
        // A fresh category starts over at person 1.
        assert_eq!(items[3].assigned_to, Some(1));
    }

    #[test]
    fn personal_items_stay_unassigned_but_occupy_their_slot() {
        let mut items = vec![
            item("bottle", "Water Bottle", "Hydration").personal_gear(),
            item("filter", "Water Purification", "Hydration"),
            item("jug", "Collapsible Water Container", "Hydration"),
        ];
        distribute_round_robin(&mut items, 2);
        assert_eq!(items[0].assigned_to, None);
        // The bottle consumed slot 0, so the filter lands on person 2.
        assert_eq!(items[1].assigned_to, Some(2));
        assert_eq!(items[2].assigned_to, Some(1));
    }

    #[test]
    fn round_robin_skips_custom_items_and_solo_trips() {
        let mut custom = GearItem::custom("custom-1", "Banjo", "Custom", 1);
        custom.assigned_to = None;
        let mut items = vec![item("a", "Stove", "Fire & Cooking"), custom];
        distribute_round_robin(&mut items, 1);
        assert!(items.iter().all(|i| i.assigned_to.is_none()));
        distribute_round_robin(&mut items, 3);
        assert_eq!(items[0].assigned_to, Some(1));
        assert_eq!(items[1].assigned_to, None);
    }

    #[test]
    fn personal_gear_covers_categories_and_flags() {
        assert!(is_personal_gear(&item("x", "Rain Jacket", "Clothing")));
        assert!(is_personal_gear(&item("x", "Sunscreen", "Personal")));
        assert!(is_personal_gear(&item("x", "Soap", "Hygiene")));
        assert!(is_personal_gear(
            &item("x", "Headlamp", "Lighting").personal_gear()
        ));
        assert!(is_personal_gear(
            &item("x", "First Aid Kit", "Safety & Emergency").individual_gear()
        ));
        assert!(!is_personal_gear(&item("x", "Tarp", "Shelter")));
    }

    #[test]
    fn auto_balance_splits_shelter_between_first_two_people() {
        let mut items = vec![
            item("tent", "Tent", "Shelter"),
            item("fly", "Tent Footprint/Ground Cloth", "Shelter"),
            item("stakes", "Extra Tent Stakes and Guylines", "Shelter"),
        ];
        auto_balance(&mut items, 3);
        // Longest names first: stakes -> 1, footprint -> 2, tent -> 1.
        assert_eq!(items[2].assigned_to, Some(1));
        assert_eq!(items[1].assigned_to, Some(2));
        assert_eq!(items[0].assigned_to, Some(1));
    }

    #[test]
    fn auto_balance_deals_cooking_across_everyone() {
        let mut items = vec![
            item("a", "Stove", "Fire & Cooking"),
            item("b", "Fuel", "Fire & Cooking"),
            item("c", "Cookpot", "Fire & Cooking"),
            item("d", "Firesteel", "Fire & Cooking"),
        ];
        auto_balance(&mut items, 3);
        assert_eq!(items[0].assigned_to, Some(1));
        assert_eq!(items[1].assigned_to, Some(2));
        assert_eq!(items[2].assigned_to, Some(3));
        assert_eq!(items[3].assigned_to, Some(1));
    }

    #[test]
    fn auto_balance_sends_leftovers_to_the_least_loaded() {
        let mut carried = item("carried", "Paracord", "Gear");
        carried.assigned_to = Some(1);
        let mut items = vec![
            carried,
            item("towel", "Microfiber Pack Towel", "Gear"),
            item("poles", "Trekking Poles", "Gear"),
        ];
        auto_balance(&mut items, 2);
        // Person 1 already carries one item, so both leftovers start at 2.
        assert_eq!(items[1].assigned_to, Some(2));
        assert_eq!(items[2].assigned_to, Some(1));
    }

    #[test]
    fn auto_balance_leaves_personal_and_custom_gear_alone() {
        let mut items = vec![
            item("jacket", "Rain Jacket", "Clothing"),
            item("bag", "Sleeping Bag", "Sleep").personal_gear(),
            GearItem::custom("custom-1", "Banjo", "Custom", 1),
        ];
        auto_balance(&mut items, 2);
        assert!(items.iter().all(|i| i.assigned_to.is_none()));
    }

    #[test]
    fn manual_assignment_sets_and_clears() {
        let mut items = vec![item("a", "Stove", "Fire & Cooking")];
        assign_item(&mut items, "a", Some(2));
        assert_eq!(items[0].assigned_to, Some(2));
        assign_item(&mut items, "a", None);
        assert_eq!(items[0].assigned_to, None);
        // Unknown ids are a no-op.
        assign_item(&mut items, "zzz", Some(1));
    }

    #[test]
    fn zero_person_assignments_are_tolerated() {
        // A hand-edited save can carry person 0, which no pass produces.
        let mut stove = item("a", "Stove", "Fire & Cooking");
        stove.assigned_to = Some(0);
        assert_eq!(carried_counts(&[stove.clone()], 2), vec![0, 0]);

        let mut items = vec![stove, item("b", "Trekking Poles", "Gear")];
        auto_balance(&mut items, 2);
        assert_eq!(items[0].assigned_to, Some(0));
        assert_eq!(items[1].assigned_to, Some(1));
    }

    #[test]
    fn carried_counts_ignores_out_of_range_people() {
        let mut a = item("a", "Stove", "Fire & Cooking");
        a.assigned_to = Some(1);
        let mut b = item("b", "Fuel", "Fire & Cooking");
        b.assigned_to = Some(9);
        let counts = carried_counts(&[a, b], 2);
        assert_eq!(counts, vec![1, 0]);
    }
}
