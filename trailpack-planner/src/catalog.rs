//! The authored gear catalog.
//!
//! Every candidate item the generator can suggest lives here, pre-tagged
//! with the weather, terrain, camping-style and duration conditions it
//! applies under. An empty applicability set means the dimension always
//! matches. A handful of entries interpolate trip parameters into their
//! names or quantities (meal counts, pet names, per-person counts), which
//! is why the catalog is built per trip rather than held as a constant.
use crate::item::{CampingStyle, GearItem, Terrain, TripDetails, Weather};
use CampingStyle::{Cabin, Hammock, Primitive, Rv, Tent};
use Terrain::{Coastal, Desert, Forest, Mountain, Plains};
use Weather::{Cold, Hot, Rainy, Snow, Sunny};

pub const ANY_WEATHER: [Weather; 5] = [Sunny, Rainy, Cold, Hot, Snow];
pub const ANY_TERRAIN: [Terrain; 5] = [Forest, Mountain, Desert, Coastal, Plains];

/// Styles most catalog gear applies to (everything but tarp and camper van).
const CAMP_STYLES: [CampingStyle; 5] = [Tent, Hammock, Rv, Cabin, Primitive];
/// Styles where the party carries and pitches its own camp.
const FIELD_STYLES: [CampingStyle; 3] = [Tent, Hammock, Primitive];
/// Field styles plus the ones with a kitchen of sorts.
const KITCHEN_STYLES: [CampingStyle; 5] = [Tent, Hammock, Primitive, Rv, Cabin];

const DAYS_ANY: [u32; 6] = [1, 2, 3, 7, 14, 30];
const DAYS_2_PLUS: [u32; 5] = [2, 3, 7, 14, 30];
const DAYS_3_PLUS: [u32; 4] = [3, 7, 14, 30];
const DAYS_7_PLUS: [u32; 3] = [7, 14, 30];

/// The full candidate set for a trip, in catalog order, pets excluded.
///
/// Pet supplies are appended separately by the generator because they are
/// sized per pet and must not be party-scaled.
#[must_use]
pub fn catalog_items(trip: &TripDetails) -> Vec<GearItem> {
    let mut items = base_items();
    items.extend(cooking_items());
    items.extend(advanced_items());
    items.extend(weather_items());
    items.extend(style_items());
    items.extend(duration_items(trip));
    items.extend(food_items(trip));
    items.extend(terrain_items());
    items.extend(nordic_items(trip));
    items
}

/// Gear everyone needs regardless of conditions.
fn base_items() -> Vec<GearItem> {
    vec![
        GearItem::new("1", "First Aid Kit (with blister treatment)", "Safety & Emergency", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY)
            .individual_gear(),
        GearItem::new("2", "Water Bottle/Hydration System", "Hydration", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY)
            .scaled_for_party()
            .personal_gear(),
        GearItem::new("3", "Multi-tool or Knife", "Tools", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("4", "Headlamp or Flashlight (+ spare batteries)", "Lighting", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY)
            .personal_gear(),
        GearItem::new("101", "Sleeping Bag (rated for conditions)", "Sleep", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&[Tent, Hammock, Rv, Primitive])
            .with_days(&DAYS_ANY)
            .scaled_for_party()
            .personal_gear()
            .bulky_gear(),
        GearItem::new("102", "Navigation Tools (map, compass, GPS)", "Navigation", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("103", "Fire Starting Kit (multiple methods)", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("104", "Water Purification Method", "Hydration", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("105", "Backpack Rain Cover", "Gear Protection", 1, true)
            .with_weather(&[Rainy, Snow])
            .with_terrain(&[Forest, Mountain, Coastal, Plains])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("106", "Toilet Paper (in waterproof container)", "Hygiene", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("107", "Trowel for Digging Catholes", "Hygiene", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
    ]
}

fn cooking_items() -> Vec<GearItem> {
    vec![
        GearItem::new("201", "Compact Camping Stove", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("202", "Fuel for Stove (extra canister)", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("203", "Cookpot with Lid", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("204", "Eating Utensil Set", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY)
            .scaled_for_party(),
        GearItem::new("205", "Mug/Cup (insulated)", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY)
            .scaled_for_party(),
        GearItem::new("206", "Biodegradable Soap", "Hygiene", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
        GearItem::new("207", "Dish Scrubber/Cloth", "Fire & Cooking", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
        GearItem::new("208", "Collapsible Water Container", "Hydration", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
        GearItem::new("209", "Coffee/Tea Making Supplies", "Fire & Cooking", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("210", "Lightweight Cutting Board", "Fire & Cooking", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_3_PLUS),
    ]
}

/// Gear experienced campers carry that beginners tend to overlook.
fn advanced_items() -> Vec<GearItem> {
    vec![
        GearItem::new("301", "Tarp with Guy Lines (multiple uses)", "Shelter", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("302", "Duct Tape (wrapped around water bottle)", "Repair", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS)
            .individual_gear(),
        GearItem::new("303", "Gear Repair Kit (specific to your equipment)", "Repair", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_3_PLUS),
        GearItem::new("304", "Backup Water Treatment (tablets/drops)", "Hydration", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
        GearItem::new(
            "305",
            "Satellite Messenger/Personal Locator Beacon",
            "Safety & Emergency",
            1,
            false,
        )
        .with_weather(&ANY_WEATHER)
        .with_terrain(&ANY_TERRAIN)
        .with_styles(&FIELD_STYLES)
        .with_days(&DAYS_ANY),
        GearItem::new("306", "Emergency Bivy/Space Blanket", "Safety & Emergency", 1, false)
            .with_weather(&[Rainy, Cold, Snow])
            .with_terrain(&[Forest, Mountain, Desert])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("307", "Signaling Device (whistle/mirror)", "Safety & Emergency", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&[Forest, Mountain, Desert])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("308", "Navigation Backup (paper maps)", "Navigation", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
        GearItem::new("309", "Cordage/Paracord (50+ feet)", "Gear", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("310", "Microfiber Pack Towel", "Gear", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
    ]
}

fn weather_items() -> Vec<GearItem> {
    vec![
        GearItem::new("5", "Rain Jacket", "Clothing", 1, true)
            .with_weather(&[Rainy])
            .with_terrain(&[Forest, Mountain, Coastal, Plains])
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("6", "Waterproof Stuff Sacks", "Gear", 2, false)
            .with_weather(&[Rainy])
            .with_terrain(&[Forest, Mountain, Coastal, Plains])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
        GearItem::new("7", "Insulated Jacket", "Clothing", 1, true)
            .with_weather(&[Cold, Snow])
            .with_terrain(&[Forest, Mountain, Plains])
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("8", "Thermal Base Layers", "Clothing", 2, true)
            .with_weather(&[Cold, Snow])
            .with_terrain(&[Forest, Mountain, Plains])
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("9", "Sun Hat", "Clothing", 1, true)
            .with_weather(&[Sunny, Hot])
            .with_terrain(&[Desert, Coastal, Plains])
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("10", "Sunscreen", "Personal", 1, true)
            .with_weather(&[Sunny, Hot])
            .with_terrain(&[Desert, Mountain, Coastal, Plains])
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("403", "Gaiters (for snow/mud/brush)", "Clothing", 1, false)
            .with_weather(&[Rainy, Snow])
            .with_terrain(&[Mountain, Forest])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("404", "Trekking Umbrella", "Gear", 1, false)
            .with_weather(&[Rainy, Hot])
            .with_terrain(&[Forest, Plains, Coastal, Desert])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
        GearItem::new("405", "Buff/Neck Gaiter (multiple uses)", "Clothing", 1, false)
            .with_weather(&[Cold, Hot, Sunny, Snow])
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
    ]
}

fn style_items() -> Vec<GearItem> {
    vec![
        GearItem::new("11", "Tent", "Shelter", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&[Tent])
            .with_days(&DAYS_ANY)
            .bulky_gear(),
        GearItem::new("12", "Sleeping Pad", "Sleep", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&[Tent, Primitive])
            .with_days(&DAYS_ANY)
            .scaled_for_party()
            .personal_gear()
            .bulky_gear(),
        GearItem::new("13", "Hammock", "Shelter", 1, true)
            .with_weather(&[Sunny, Rainy, Hot])
            .with_terrain(&[Forest])
            .with_styles(&[Hammock])
            .with_days(&DAYS_ANY)
            .bulky_gear(),
        GearItem::new("14", "Hammock Straps", "Shelter", 1, true)
            .with_weather(&[Sunny, Rainy, Hot])
            .with_terrain(&[Forest])
            .with_styles(&[Hammock])
            .with_days(&DAYS_ANY)
            .bulky_gear(),
        GearItem::new("501", "Tent Footprint/Ground Cloth", "Shelter", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&[Tent])
            .with_days(&DAYS_ANY)
            .bulky_gear(),
        GearItem::new("502", "Extra Tent Stakes and Guylines", "Shelter", 1, false)
            .with_weather(&[Rainy, Snow])
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&[Tent])
            .with_days(&DAYS_2_PLUS)
            .bulky_gear(),
        GearItem::new("503", "Underquilt (for hammock)", "Sleep", 1, true)
            .with_weather(&[Cold, Snow])
            .with_terrain(&[Forest])
            .with_styles(&[Hammock])
            .with_days(&DAYS_ANY),
        GearItem::new("504", "Bug Net (for hammock)", "Shelter", 1, false)
            .with_weather(&[Hot, Rainy])
            .with_terrain(&[Forest, Coastal, Plains])
            .with_styles(&[Hammock])
            .with_days(&DAYS_ANY),
    ]
}

fn duration_items(trip: &TripDetails) -> Vec<GearItem> {
    let sock_quantity = if trip.duration > 7 {
        trip.duration.div_ceil(3)
    } else {
        2
    };
    vec![
        GearItem::new("15", "Extra Batteries/Power Bank", "Electronics", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_3_PLUS),
        GearItem::new("16", "Repair Kit", "Tools", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&[Tent, Hammock, Rv, Primitive])
            .with_days(&DAYS_7_PLUS),
        GearItem::new("601", "Solar Charger/Power Bank", "Electronics", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_3_PLUS),
        GearItem::new("602", "Extra Pair of Socks", "Clothing", sock_quantity, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY)
            .scaled_for_party(),
        GearItem::new("603", "Journal and Pencil", "Personal", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_3_PLUS),
        GearItem::new("604", "Sewing Kit/Gear Repair", "Repair", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_7_PLUS),
    ]
}

fn food_items(trip: &TripDetails) -> Vec<GearItem> {
    let meal_count = trip.duration * 3;
    let snack_quantity = if trip.duration > 3 {
        trip.duration.div_ceil(2)
    } else {
        1
    };
    vec![
        GearItem::new(
            "701",
            format!("Meals ({meal_count} packed or dehydrated)"),
            "Food",
            1,
            true,
        )
        .with_weather(&ANY_WEATHER)
        .with_terrain(&ANY_TERRAIN)
        .with_styles(&FIELD_STYLES)
        .with_days(&DAYS_ANY)
        .scaled_for_party(),
        GearItem::new("702", "High-Energy Snacks", "Food", snack_quantity, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("703", "Electrolyte Replacement", "Food", 1, false)
            .with_weather(&[Hot, Sunny])
            .with_terrain(&[Desert, Mountain])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("704", "Extra Day of Food (emergency)", "Food", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
        GearItem::new("705", "Bear Canister/Food Storage", "Food", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&[Forest, Mountain])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("706", "Spice Kit (small containers)", "Food", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_3_PLUS),
    ]
}

fn terrain_items() -> Vec<GearItem> {
    vec![
        GearItem::new("801", "Trekking Poles", "Gear", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&[Mountain, Desert, Forest])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("802", "Microspikes/Traction Devices", "Gear", 1, false)
            .with_weather(&[Cold, Snow])
            .with_terrain(&[Mountain])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("803", "Insect Repellent", "Personal", 1, false)
            .with_weather(&[Hot, Rainy])
            .with_terrain(&[Forest, Coastal, Plains])
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("804", "Sun Protection (clothing, hat)", "Clothing", 1, true)
            .with_weather(&[Sunny, Hot])
            .with_terrain(&[Desert, Mountain, Coastal])
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("805", "Field Guide (local plants/animals)", "Navigation", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_2_PLUS),
    ]
}

/// Nordic-style bushcraft gear; per-person counts come from the party size.
fn nordic_items(trip: &TripDetails) -> Vec<GearItem> {
    let people = trip.number_of_people;
    vec![
        GearItem::new("nordic-1", "Fixed-Blade Knife", "Tools", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&[Forest, Mountain, Coastal, Plains])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-2", "Firesteel", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-3", "Sitting Pad", "Gear", people, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-4", "Headlamp + Cap Light", "Lighting", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY)
            .personal_gear(),
        GearItem::new("nordic-5", "Camping Stove", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-6", "Fuel (Alcohol/Gas)", "Fire & Cooking", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-7", "Natural Fire Starter", "Fire & Cooking", 1, false)
            .with_weather(&[Rainy, Cold, Snow])
            .with_terrain(&[Forest, Mountain, Coastal, Plains])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-8", "Insulated Cup", "Fire & Cooking", people, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-9", "Wool Base Layers", "Clothing", 1, false)
            .with_weather(&[Cold, Snow])
            .with_terrain(&[Forest, Mountain, Coastal, Plains])
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-10", "Down Vest", "Clothing", 1, false)
            .with_weather(&[Cold, Snow])
            .with_terrain(&[Forest, Mountain, Coastal, Plains])
            .with_styles(&KITCHEN_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("nordic-11", "Camping Lantern", "Lighting", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&[Forest, Mountain, Coastal, Plains])
            .with_styles(&[Tent, Primitive, Rv, Cabin])
            .with_days(&DAYS_ANY),
    ]
}

/// Supplies for the pet, sized per pet and named after it.
#[must_use]
pub fn pet_items(trip: &TripDetails) -> Vec<GearItem> {
    if !trip.has_pet {
        return Vec::new();
    }
    let pet = trip.pet_display_name();
    let portions = trip.duration * 2;
    let treat_quantity = if trip.duration > 2 { 2 } else { 1 };
    vec![
        GearItem::new("pet-1", format!("{pet}'s Food ({portions} portions)"), "Pet Supplies", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("pet-2", format!("{pet}'s Blanket"), "Pet Supplies", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new(
            "pet-3",
            format!("Chew Bones/Treats for {pet}"),
            "Pet Supplies",
            treat_quantity,
            false,
        )
        .with_weather(&ANY_WEATHER)
        .with_terrain(&ANY_TERRAIN)
        .with_styles(&CAMP_STYLES)
        .with_days(&DAYS_ANY),
        GearItem::new("pet-4", format!("{pet}'s Leash and Collar"), "Pet Supplies", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("pet-5", format!("{pet}'s Water Bowl"), "Pet Supplies", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("pet-6", format!("Waste Bags for {pet}"), "Pet Supplies", 1, true)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
        GearItem::new("pet-7", format!("{pet}'s Sleeping Bag"), "Pet Supplies", 1, false)
            .with_weather(&[Cold, Snow, Rainy])
            .with_terrain(&[Forest, Mountain, Plains, Coastal])
            .with_styles(&FIELD_STYLES)
            .with_days(&DAYS_ANY)
            .personal_gear()
            .bulky_gear(),
        GearItem::new("pet-8", format!("Sitting Pad for {pet} (2)"), "Pet Supplies", 1, false)
            .with_weather(&ANY_WEATHER)
            .with_terrain(&ANY_TERRAIN)
            .with_styles(&CAMP_STYLES)
            .with_days(&DAYS_ANY),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique_per_generation() {
        let trip = TripDetails {
            has_pet: true,
            ..TripDetails::default()
        };
        let mut items = catalog_items(&trip);
        items.extend(pet_items(&trip));
        let mut seen = HashSet::new();
        for item in &items {
            assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
        }
    }

    #[test]
    fn every_item_has_category_and_quantity() {
        let trip = TripDetails {
            has_pet: true,
            ..TripDetails::default()
        };
        let mut items = catalog_items(&trip);
        items.extend(pet_items(&trip));
        for item in &items {
            assert!(!item.category.is_empty(), "{} has no category", item.id);
            assert!(item.quantity >= 1, "{} has zero quantity", item.id);
        }
    }

    #[test]
    fn meal_count_scales_with_duration() {
        let trip = TripDetails {
            duration: 4,
            ..TripDetails::default()
        };
        let items = catalog_items(&trip);
        let meals = items.iter().find(|i| i.id == "701").unwrap();
        assert_eq!(meals.name, "Meals (12 packed or dehydrated)");
    }

    #[test]
    fn sock_quantity_follows_duration_rule() {
        let short = catalog_items(&TripDetails {
            duration: 7,
            ..TripDetails::default()
        });
        assert_eq!(short.iter().find(|i| i.id == "602").unwrap().quantity, 2);

        let long = catalog_items(&TripDetails {
            duration: 10,
            ..TripDetails::default()
        });
        // ceil(10 / 3)
        assert_eq!(long.iter().find(|i| i.id == "602").unwrap().quantity, 4);
    }

    #[test]
    fn per_person_counts_use_party_size() {
        let trip = TripDetails {
            number_of_people: 4,
            ..TripDetails::default()
        };
        let items = catalog_items(&trip);
        assert_eq!(items.iter().find(|i| i.id == "nordic-3").unwrap().quantity, 4);
        assert_eq!(items.iter().find(|i| i.id == "nordic-8").unwrap().quantity, 4);
    }

    #[test]
    fn pet_items_only_appear_with_pet() {
        assert!(pet_items(&TripDetails::default()).is_empty());

        let trip = TripDetails {
            has_pet: true,
            pet_name: "Sickan".to_string(),
            duration: 3,
            ..TripDetails::default()
        };
        let items = pet_items(&trip);
        assert_eq!(items.len(), 8);
        let food = items.iter().find(|i| i.id == "pet-1").unwrap();
        assert_eq!(food.name, "Sickan's Food (6 portions)");
        let treats = items.iter().find(|i| i.id == "pet-3").unwrap();
        assert_eq!(treats.quantity, 2);
    }

    #[test]
    fn pet_sleeping_bag_is_personal_but_never_party_scaled() {
        let trip = TripDetails {
            has_pet: true,
            ..TripDetails::default()
        };
        let items = pet_items(&trip);
        let bag = items.iter().find(|i| i.id == "pet-7").unwrap();
        assert!(bag.personal);
        assert!(bag.bulky);
        assert!(!bag.scales_with_party);
    }
}
