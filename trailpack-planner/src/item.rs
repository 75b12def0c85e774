//! Gear item and trip parameter types
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error for parsing a condition tag from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag `{0}`")]
pub struct ParseTagError(pub String);

/// Weather a trip is planned around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    #[default]
    Sunny,
    Hot,
    Rainy,
    Cold,
    Snow,
}

impl FromStr for Weather {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sunny" => Ok(Self::Sunny),
            "hot" => Ok(Self::Hot),
            "rainy" => Ok(Self::Rainy),
            "cold" => Ok(Self::Cold),
            "snow" => Ok(Self::Snow),
            other => Err(ParseTagError(other.to_string())),
        }
    }
}

/// Terrain a trip crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    #[default]
    Forest,
    Mountain,
    Desert,
    Coastal,
    Plains,
}

impl FromStr for Terrain {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forest" => Ok(Self::Forest),
            "mountain" => Ok(Self::Mountain),
            "desert" => Ok(Self::Desert),
            "coastal" => Ok(Self::Coastal),
            "plains" => Ok(Self::Plains),
            other => Err(ParseTagError(other.to_string())),
        }
    }
}

/// How the party intends to camp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CampingStyle {
    #[default]
    Tent,
    Hammock,
    Tarp,
    CamperVan,
    Rv,
    Cabin,
    Primitive,
}

impl FromStr for CampingStyle {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tent" => Ok(Self::Tent),
            "hammock" => Ok(Self::Hammock),
            "tarp" => Ok(Self::Tarp),
            "camper_van" => Ok(Self::CamperVan),
            "rv" => Ok(Self::Rv),
            "cabin" => Ok(Self::Cabin),
            "primitive" => Ok(Self::Primitive),
            other => Err(ParseTagError(other.to_string())),
        }
    }
}

/// Expected precipitation during the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Precipitation {
    #[default]
    None,
    LightRain,
    HeavyRain,
    LightSnow,
    HeavySnow,
    Mixed,
}

impl FromStr for Precipitation {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "light_rain" => Ok(Self::LightRain),
            "heavy_rain" => Ok(Self::HeavyRain),
            "light_snow" => Ok(Self::LightSnow),
            "heavy_snow" => Ok(Self::HeavySnow),
            "mixed" => Ok(Self::Mixed),
            other => Err(ParseTagError(other.to_string())),
        }
    }
}

impl Precipitation {
    /// True for rain variants only; mixed precipitation does not count.
    #[must_use]
    pub const fn is_rain(self) -> bool {
        matches!(self, Self::LightRain | Self::HeavyRain)
    }
}

/// A single entry on a packing list.
///
/// Applicability sets (`weather_conditions`, `terrain_types`,
/// `camping_styles`, `for_duration`) constrain when the item is suggested;
/// an empty set means the dimension always matches. The classification
/// flags (`scales_with_party`, `personal`, `individual`, `bulky`) are
/// authored on the item itself rather than inferred from its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub is_essential: bool,
    #[serde(default)]
    pub weather_conditions: Vec<Weather>,
    #[serde(default)]
    pub terrain_types: Vec<Terrain>,
    #[serde(default)]
    pub camping_styles: Vec<CampingStyle>,
    #[serde(default)]
    pub for_duration: Vec<u32>,
    #[serde(default)]
    pub is_checked: bool,
    #[serde(default)]
    pub is_custom: bool,
    /// 1-based person index, or `None` for shared/unassigned gear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u32>,
    /// Quantity is multiplied by party size at generation time.
    #[serde(default)]
    pub scales_with_party: bool,
    /// Carried per person; never handed out by the round-robin pass.
    #[serde(default)]
    pub personal: bool,
    /// Kept with its owner by the auto-balance pass even when shared.
    #[serde(default)]
    pub individual: bool,
    /// Counts toward the backpack-size advisory.
    #[serde(default)]
    pub bulky: bool,
}

impl GearItem {
    /// Create a catalog item with empty (always-matching) applicability sets.
    #[must_use]
    pub fn new(
        id: &str,
        name: impl Into<String>,
        category: &str,
        quantity: u32,
        is_essential: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.into(),
            category: category.to_string(),
            quantity,
            is_essential,
            weather_conditions: Vec::new(),
            terrain_types: Vec::new(),
            camping_styles: Vec::new(),
            for_duration: Vec::new(),
            is_checked: false,
            is_custom: false,
            assigned_to: None,
            scales_with_party: false,
            personal: false,
            individual: false,
            bulky: false,
        }
    }

    /// Create a user-added item, exempt from filtering and distribution.
    #[must_use]
    pub fn custom(id: &str, name: impl Into<String>, category: &str, quantity: u32) -> Self {
        let mut item = Self::new(id, name, category, quantity.max(1), false);
        item.is_custom = true;
        item
    }

    #[must_use]
    pub fn with_weather(mut self, weather: &[Weather]) -> Self {
        self.weather_conditions = weather.to_vec();
        self
    }

    #[must_use]
    pub fn with_terrain(mut self, terrain: &[Terrain]) -> Self {
        self.terrain_types = terrain.to_vec();
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: &[CampingStyle]) -> Self {
        self.camping_styles = styles.to_vec();
        self
    }

    #[must_use]
    pub fn with_days(mut self, days: &[u32]) -> Self {
        self.for_duration = days.to_vec();
        self
    }

    #[must_use]
    pub const fn scaled_for_party(mut self) -> Self {
        self.scales_with_party = true;
        self
    }

    #[must_use]
    pub const fn personal_gear(mut self) -> Self {
        self.personal = true;
        self
    }

    #[must_use]
    pub const fn individual_gear(mut self) -> Self {
        self.individual = true;
        self
    }

    #[must_use]
    pub const fn bulky_gear(mut self) -> Self {
        self.bulky = true;
        self
    }
}

fn default_duration() -> u32 {
    2
}

fn default_temperature_high() -> i32 {
    75
}

fn default_temperature_low() -> i32 {
    55
}

fn default_people() -> u32 {
    1
}

/// Everything the planner needs to know about a trip.
///
/// Every field carries a serde default so records saved by older versions
/// of the planner deserialize cleanly with the documented fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default)]
    pub weather: Weather,
    #[serde(default = "default_temperature_high")]
    pub temperature_high: i32,
    #[serde(default = "default_temperature_low")]
    pub temperature_low: i32,
    #[serde(default)]
    pub is_windy: bool,
    #[serde(default)]
    pub precipitation_type: Precipitation,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub camping_style: CampingStyle,
    #[serde(default = "default_people")]
    pub number_of_people: u32,
    #[serde(default)]
    pub distribute_gear: bool,
    #[serde(default)]
    pub has_pet: bool,
    #[serde(default)]
    pub pet_name: String,
}

impl Default for TripDetails {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            weather: Weather::Sunny,
            temperature_high: default_temperature_high(),
            temperature_low: default_temperature_low(),
            is_windy: false,
            precipitation_type: Precipitation::None,
            terrain: Terrain::Forest,
            camping_style: CampingStyle::Tent,
            number_of_people: default_people(),
            distribute_gear: false,
            has_pet: false,
            pet_name: String::new(),
        }
    }
}

impl TripDetails {
    /// Midpoint of the forecast temperature range, in degrees Fahrenheit.
    #[must_use]
    pub fn average_temperature(&self) -> f64 {
        f64::from(self.temperature_low + self.temperature_high) / 2.0
    }

    /// Display name for the pet, falling back when none was entered.
    #[must_use]
    pub fn pet_display_name(&self) -> &str {
        if self.pet_name.trim().is_empty() {
            "Pet"
        } else {
            &self.pet_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precipitation_rain_detection() {
        assert!(Precipitation::LightRain.is_rain());
        assert!(Precipitation::HeavyRain.is_rain());
        assert!(!Precipitation::Mixed.is_rain());
        assert!(!Precipitation::LightSnow.is_rain());
        assert!(!Precipitation::None.is_rain());
    }

    #[test]
    fn gear_item_round_trips_through_json() {
        let item = GearItem::new("11", "Tent", "Shelter", 1, true)
            .with_styles(&[CampingStyle::Tent])
            .bulky_gear();
        let json = serde_json::to_string(&item).unwrap();
        let back: GearItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn gear_item_defaults_optional_fields() {
        // A record saved before the classification flags existed.
        let json = r#"{
            "id": "2",
            "name": "Water Bottle/Hydration System",
            "category": "Hydration",
            "quantity": 1,
            "isEssential": true,
            "weatherConditions": ["sunny"],
            "terrainTypes": [],
            "campingStyles": [],
            "forDuration": [1, 2, 3]
        }"#;
        let item: GearItem = serde_json::from_str(json).unwrap();
        assert!(!item.is_checked);
        assert!(!item.is_custom);
        assert!(item.assigned_to.is_none());
        assert!(!item.scales_with_party);
    }

    #[test]
    fn trip_details_defaults_missing_fields() {
        // Older saved shape without the temperature/wind/distribution fields.
        let json = r#"{
            "duration": 5,
            "weather": "rainy",
            "terrain": "mountain",
            "campingStyle": "hammock",
            "numberOfPeople": 3,
            "hasPet": false,
            "petName": ""
        }"#;
        let trip: TripDetails = serde_json::from_str(json).unwrap();
        assert_eq!(trip.duration, 5);
        assert_eq!(trip.weather, Weather::Rainy);
        assert_eq!(trip.temperature_high, 75);
        assert_eq!(trip.temperature_low, 55);
        assert!(!trip.is_windy);
        assert_eq!(trip.precipitation_type, Precipitation::None);
        assert!(!trip.distribute_gear);
    }

    #[test]
    fn camping_style_uses_snake_case_tags() {
        let json = serde_json::to_string(&CampingStyle::CamperVan).unwrap();
        assert_eq!(json, "\"camper_van\"");
    }

    #[test]
    fn tags_parse_back_from_their_wire_form() {
        assert_eq!("snow".parse::<Weather>(), Ok(Weather::Snow));
        assert_eq!("plains".parse::<Terrain>(), Ok(Terrain::Plains));
        assert_eq!("camper_van".parse::<CampingStyle>(), Ok(CampingStyle::CamperVan));
        assert_eq!("heavy_rain".parse::<Precipitation>(), Ok(Precipitation::HeavyRain));
        assert_eq!(
            "monsoon".parse::<Weather>(),
            Err(ParseTagError("monsoon".to_string()))
        );
    }

    #[test]
    fn average_temperature_is_range_midpoint() {
        let trip = TripDetails {
            temperature_low: 55,
            temperature_high: 76,
            ..TripDetails::default()
        };
        assert!((trip.average_temperature() - 65.5).abs() < f64::EPSILON);
    }

    #[test]
    fn pet_display_name_falls_back_when_blank() {
        let mut trip = TripDetails::default();
        assert_eq!(trip.pet_display_name(), "Pet");
        trip.pet_name = "Sickan".to_string();
        assert_eq!(trip.pet_display_name(), "Sickan");
    }
}
