//! List generation: catalog + clothing, party scaling, filtering, sorting.
use crate::catalog::{catalog_items, pet_items};
use crate::clothing::clothing_for_trip;
use crate::distribute::distribute_round_robin;
use crate::item::{GearItem, TripDetails};

/// Build the packing list for a trip.
///
/// Candidates come from the catalog plus the temperature clothing bands.
/// Party-scaled quantities are applied before pet supplies are appended,
/// so a pet's gear is never multiplied by the head count. Filtering and
/// the stable essential-then-category sort run last, followed by the
/// round-robin hand-out when the trip asks for distributed gear.
#[must_use]
pub fn generate(trip: &TripDetails) -> Vec<GearItem> {
    let mut items = catalog_items(trip);
    items.extend(clothing_for_trip(trip));
    scale_for_party(&mut items, trip.number_of_people);
    items.extend(pet_items(trip));
    items.retain(|item| matches_trip(item, trip));
    sort_items(&mut items);
    if trip.distribute_gear && trip.number_of_people > 1 {
        distribute_round_robin(&mut items, trip.number_of_people);
    }
    items
}

/// Multiply flagged quantities by the party size.
pub fn scale_for_party(items: &mut [GearItem], people: u32) {
    if people <= 1 {
        return;
    }
    for item in items {
        if item.scales_with_party {
            item.quantity *= people;
        }
    }
}

/// Whether an item applies to the trip. Empty applicability sets always
/// match; the duration set matches when any checkpoint covers the trip.
#[must_use]
pub fn matches_trip(item: &GearItem, trip: &TripDetails) -> bool {
    let weather_ok = item.weather_conditions.is_empty()
        || item.weather_conditions.contains(&trip.weather);
    let terrain_ok =
        item.terrain_types.is_empty() || item.terrain_types.contains(&trip.terrain);
    let style_ok = item.camping_styles.is_empty()
        || item.camping_styles.contains(&trip.camping_style);
    let duration_ok =
        item.for_duration.is_empty() || item.for_duration.iter().any(|&d| d >= trip.duration);
    weather_ok && terrain_ok && style_ok && duration_ok
}

/// Stable sort: essentials first, then category name ascending. Items
/// tied on both keys keep their catalog order.
pub fn sort_items(items: &mut [GearItem]) {
    items.sort_by(|a, b| {
        b.is_essential
            .cmp(&a.is_essential)
            .then_with(|| a.category.cmp(&b.category))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{CampingStyle, Terrain, Weather};

    fn base_trip() -> TripDetails {
        TripDetails {
            duration: 2,
            weather: Weather::Sunny,
            terrain: Terrain::Forest,
            camping_style: CampingStyle::Tent,
            ..TripDetails::default()
        }
    }

    #[test]
    fn generated_items_match_the_trip() {
        let trip = base_trip();
        let items = generate(&trip);
        assert!(!items.is_empty());
        for item in &items {
            assert!(matches_trip(item, &trip), "{} does not apply", item.name);
        }
        // Sunny forest trips get no rain cover and no microspikes.
        assert!(items.iter().all(|i| i.id != "105"));
        assert!(items.iter().all(|i| i.id != "802"));
    }

    #[test]
    fn scaling_applies_before_filtering_and_skips_pets() {
        let trip = TripDetails {
            number_of_people: 3,
            has_pet: true,
            ..base_trip()
        };
        let items = generate(&trip);
        let bag = items.iter().find(|i| i.id == "101").unwrap();
        assert_eq!(bag.quantity, 3);
        // Unflagged items keep their authored quantity.
        let trowel = items.iter().find(|i| i.id == "107").unwrap();
        assert_eq!(trowel.quantity, 1);
        // Pet supplies are never party-scaled.
        let blanket = items.iter().find(|i| i.id == "pet-2").unwrap();
        assert_eq!(blanket.quantity, 1);
    }

    #[test]
    fn single_person_party_is_never_scaled() {
        let items = generate(&base_trip());
        let bag = items.iter().find(|i| i.id == "101").unwrap();
        assert_eq!(bag.quantity, 1);
    }

    #[test]
    fn essentials_sort_before_extras_with_categories_ascending() {
        let items = generate(&base_trip());
        let split = items.iter().position(|i| !i.is_essential).unwrap_or(items.len());
        let (essentials, extras) = items.split_at(split);
        assert!(essentials.iter().all(|i| i.is_essential));
        assert!(extras.iter().all(|i| !i.is_essential));
        for window in essentials.windows(2) {
            assert!(window[0].category <= window[1].category);
        }
        for window in extras.windows(2) {
            assert!(window[0].category <= window[1].category);
        }
    }

    #[test]
    fn sort_is_stable_within_a_category() {
        let mut items = vec![
            GearItem::new("a", "Alpha", "Tools", 1, true),
            GearItem::new("b", "Beta", "Tools", 1, true),
            GearItem::new("c", "Gamma", "Tools", 1, true),
        ];
        sort_items(&mut items);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn duration_matches_any_covering_checkpoint() {
        let item = GearItem::new("x", "X", "Gear", 1, false).with_days(&[7, 14, 30]);
        let mut trip = base_trip();
        trip.duration = 5;
        assert!(matches_trip(&item, &trip));
        trip.duration = 31;
        assert!(!matches_trip(&item, &trip));
    }

    #[test]
    fn duration_beyond_every_checkpoint_yields_an_empty_list() {
        let trip = TripDetails {
            duration: 31,
            ..base_trip()
        };
        assert!(generate(&trip).is_empty());
    }

    #[test]
    fn round_robin_runs_only_when_requested() {
        let trip = TripDetails {
            number_of_people: 2,
            distribute_gear: false,
            ..base_trip()
        };
        assert!(generate(&trip).iter().all(|i| i.assigned_to.is_none()));

        let trip = TripDetails {
            distribute_gear: true,
            ..trip
        };
        assert!(generate(&trip).iter().any(|i| i.assigned_to.is_some()));
    }
}
