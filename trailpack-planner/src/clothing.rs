//! Temperature-driven clothing suggestions.
//!
//! Bands are keyed off the forecast low, high, and the midpoint of the
//! range, so a trip spanning cool nights and hot afternoons picks up gear
//! from more than one band. Rain and wind gear ride along at the end,
//! keyed off precipitation and the wind flag rather than temperature.
use crate::item::{CampingStyle, GearItem, Precipitation, Terrain, TripDetails, Weather};
use CampingStyle::{Cabin, CamperVan, Hammock, Primitive, Rv, Tarp, Tent};
use Terrain::{Coastal, Desert, Forest, Mountain, Plains};
use Weather::{Cold, Hot, Rainy, Snow, Sunny};

const ALL_TERRAIN: [Terrain; 5] = [Forest, Mountain, Plains, Desert, Coastal];
const ALL_STYLES: [CampingStyle; 7] = [Tent, Hammock, Primitive, Tarp, Rv, CamperVan, Cabin];
/// Styles where the clothing rides in a pack on someone's back.
const CARRY_STYLES: [CampingStyle; 4] = [Tent, Hammock, Primitive, Tarp];
const ALL_DAYS: [u32; 6] = [1, 2, 3, 7, 14, 30];

fn clothing(id: &str, name: &str, quantity: u32, essential: bool) -> GearItem {
    GearItem::new(id, name, "Clothing", quantity, essential)
        .with_terrain(&ALL_TERRAIN)
        .with_days(&ALL_DAYS)
}

/// Clothing items for the trip's temperature range, wind, and rain.
#[must_use]
pub fn clothing_for_trip(trip: &TripDetails) -> Vec<GearItem> {
    let low = trip.temperature_low;
    let high = trip.temperature_high;
    let avg = trip.average_temperature();
    let shirt_quantity = if trip.duration > 3 {
        trip.duration.div_ceil(2)
    } else {
        2
    };

    let mut items = Vec::new();

    // Below 20°F: full expedition layers.
    if low < 20 {
        items.push(
            clothing("temp-01", "Expedition Down Jacket", 1, true)
                .with_weather(&[Cold, Snow])
                .with_terrain(&[Forest, Mountain, Plains])
                .with_styles(&CARRY_STYLES),
        );
        items.push(
            clothing("temp-02", "Insulated Snow Pants", 1, true)
                .with_weather(&[Cold, Snow])
                .with_terrain(&[Forest, Mountain, Plains])
                .with_styles(&CARRY_STYLES),
        );
        items.push(
            clothing("temp-03", "Heavyweight Base Layer (Top & Bottom)", 2, true)
                .with_weather(&[Cold, Snow])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-04", "Expedition Mittens + Liner Gloves", 1, true)
                .with_weather(&[Cold, Snow])
                .with_terrain(&[Forest, Mountain, Plains])
                .with_styles(&CARRY_STYLES),
        );
        items.push(
            GearItem::new("temp-05", "Winter Sleeping Bag (0°F or Lower)", "Sleep", 1, true)
                .with_weather(&[Cold, Snow])
                .with_terrain(&[Forest, Mountain, Plains])
                .with_styles(&CARRY_STYLES)
                .with_days(&ALL_DAYS)
                .scaled_for_party()
                .personal_gear()
                .bulky_gear(),
        );
    }

    // 20-40°F lows.
    if (20..40).contains(&low) {
        items.push(
            clothing("temp-06", "Insulated Down/Synthetic Jacket", 1, true)
                .with_weather(&[Cold])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-07", "Midweight Base Layer (Top & Bottom)", 1, true)
                .with_weather(&[Cold])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-08", "Insulated Gloves", 1, true)
                .with_weather(&[Cold])
                .with_styles(&ALL_STYLES),
        );
    }

    // 40-60°F lows, or an average in that band.
    if (40..60).contains(&low) || (40.0..60.0).contains(&avg) {
        items.push(
            clothing("temp-09", "Fleece Jacket/Pullover", 1, true)
                .with_weather(&[Sunny, Rainy])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-10", "Lightweight Hiking Pants (Non-Cotton)", 1, true)
                .with_weather(&[Sunny, Rainy])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-11", "Lightweight Base Layer Top", 1, true)
                .with_weather(&[Sunny, Rainy])
                .with_styles(&ALL_STYLES),
        );
    }

    // 60-80°F highs, or an average in that band.
    if (60..80).contains(&high) || (60.0..80.0).contains(&avg) {
        items.push(
            clothing("temp-12", "Convertible Hiking Pants/Shorts", 1, true)
                .with_weather(&[Sunny, Hot])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-13", "Moisture-Wicking T-Shirts", shirt_quantity, true)
                .with_weather(&[Sunny, Hot])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-14", "Light Fleece or Jacket (for evenings)", 1, true)
                .with_weather(&[Sunny])
                .with_styles(&ALL_STYLES),
        );
    }

    // 80°F and up.
    if high >= 80 {
        items.push(
            clothing("temp-15", "Lightweight Hiking Shorts", 1, true)
                .with_weather(&[Hot])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-16", "Sun-Protective Shirts (UPF Rated)", shirt_quantity, true)
                .with_weather(&[Hot, Sunny])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-17", "Sun Hat with Wide Brim", 1, true)
                .with_weather(&[Hot, Sunny])
                .with_styles(&ALL_STYLES),
        );
        items.push(
            clothing("temp-18", "Cooling Bandana/Neck Gaiter", 1, false)
                .with_weather(&[Hot])
                .with_styles(&ALL_STYLES),
        );
    }

    if trip.precipitation_type.is_rain() || trip.weather == Rainy {
        items.push(
            clothing("temp-19", "Waterproof Rain Jacket", 1, true)
                .with_weather(&[Rainy])
                .with_styles(&ALL_STYLES),
        );
        // Pants are only essential when heavy rain is forecast.
        items.push(
            clothing(
                "temp-20",
                "Waterproof Rain Pants",
                1,
                trip.precipitation_type == Precipitation::HeavyRain,
            )
            .with_weather(&[Rainy])
            .with_styles(&CARRY_STYLES),
        );
    }

    if trip.is_windy {
        items.push(
            clothing("temp-21", "Windproof Jacket/Shell", 1, true)
                .with_weather(&[Sunny, Cold, Hot])
                .with_styles(&CARRY_STYLES),
        );
    }

    items
}
