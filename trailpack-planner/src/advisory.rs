//! Backpack size advisory.
//!
//! A display-only heuristic: a duration-based base volume plus margins for
//! bulky gear, cold-weather layers, and shared quantities, mapped onto
//! common pack sizes. Coefficients live in a config struct so the tuning
//! is visible in one place.
use serde::{Deserialize, Serialize};

use crate::item::{GearItem, Weather};

/// Volume coefficients for the pack-size estimate, in liters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    pub weekend_base: u32,
    pub short_trip_base: u32,
    pub week_base: u32,
    pub extended_base: u32,
    pub liters_per_bulky_item: u32,
    pub cold_weather_margin: u32,
    pub liters_per_extra_shared: u32,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            weekend_base: 30,
            short_trip_base: 45,
            week_base: 60,
            extended_base: 70,
            liters_per_bulky_item: 5,
            cold_weather_margin: 10,
            liters_per_extra_shared: 10,
        }
    }
}

/// Recommended pack tier, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackSize {
    Daypack,
    Weekend,
    Multiday,
    Expedition,
    ExpeditionPlus,
}

impl PackSize {
    /// Human-readable size range for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daypack => "30-35L Daypack",
            Self::Weekend => "40-50L Backpack",
            Self::Multiday => "55-65L Backpack",
            Self::Expedition => "70-80L Expedition Pack",
            Self::ExpeditionPlus => "80L+ Expedition Pack",
        }
    }
}

/// Estimate the pack volume a trip needs, in liters.
#[must_use]
pub fn estimated_liters(items: &[GearItem], duration: u32, config: &AdvisoryConfig) -> u32 {
    let base = if duration <= 2 {
        config.weekend_base
    } else if duration <= 5 {
        config.short_trip_base
    } else if duration <= 10 {
        config.week_base
    } else {
        config.extended_base
    };

    let bulky = items.iter().filter(|i| i.bulky).count() as u32 * config.liters_per_bulky_item;

    let cold = items.iter().any(|i| {
        i.weather_conditions.contains(&Weather::Cold)
            || i.weather_conditions.contains(&Weather::Snow)
    });
    let weather = if cold { config.cold_weather_margin } else { 0 };

    // Shared-gear margin keyed off the first item's quantity.
    let first_quantity = items.first().map_or(1, |i| i.quantity);
    let shared = first_quantity.saturating_sub(1) * config.liters_per_extra_shared;

    base + bulky + weather + shared
}

/// Map the volume estimate onto a pack tier.
#[must_use]
pub fn recommend_pack_size(items: &[GearItem], duration: u32, config: &AdvisoryConfig) -> PackSize {
    let liters = estimated_liters(items, duration, config);
    if liters < 35 {
        PackSize::Daypack
    } else if liters < 50 {
        PackSize::Weekend
    } else if liters < 65 {
        PackSize::Multiday
    } else if liters < 80 {
        PackSize::Expedition
    } else {
        PackSize::ExpeditionPlus
    }
}
