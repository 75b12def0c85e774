//! Trailpack Planner Engine
//!
//! Platform-agnostic packing-list logic for the Trailpack adventure
//! planner. This crate covers the gear catalog, list generation, gear
//! distribution, and persistence seams without any UI or platform
//! dependencies.

pub mod advisory;
pub mod catalog;
pub mod clothing;
pub mod distribute;
pub mod generate;
pub mod item;
pub mod planner;

// Re-export commonly used types
pub use advisory::{AdvisoryConfig, PackSize, estimated_liters, recommend_pack_size};
pub use catalog::{catalog_items, pet_items};
pub use clothing::clothing_for_trip;
pub use distribute::{
    assign_item, auto_balance, carried_counts, distribute_round_robin, is_personal_gear,
};
pub use generate::{generate, matches_trip, scale_for_party, sort_items};
pub use item::{CampingStyle, GearItem, ParseTagError, Precipitation, Terrain, TripDetails, Weather};
pub use planner::{ListFilter, Planner, PersonSummary, Progress, ViewMode};

/// Storage key for the saved trip parameters.
pub const TRIP_DETAILS_KEY: &str = "trailpack.trip_details";
/// Storage key for the saved packing list.
pub const PACKING_LIST_KEY: &str = "trailpack.packing_list";

/// Trait for abstracting save/load operations.
/// Platform-specific implementations should provide this.
pub trait PlannerStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save trip parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the trip details cannot be saved.
    fn save_trip(&self, trip: &TripDetails) -> Result<(), Self::Error>;

    /// Load trip parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the trip details cannot be loaded.
    fn load_trip(&self) -> Result<Option<TripDetails>, Self::Error>;

    /// Save the packing list
    ///
    /// # Errors
    ///
    /// Returns an error if the packing list cannot be saved.
    fn save_items(&self, items: &[GearItem]) -> Result<(), Self::Error>;

    /// Load the packing list
    ///
    /// # Errors
    ///
    /// Returns an error if the packing list cannot be loaded.
    fn load_items(&self) -> Result<Option<Vec<GearItem>>, Self::Error>;

    /// Delete everything saved
    ///
    /// # Errors
    ///
    /// Returns an error if the saved plan cannot be deleted.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// Persistence front door: saves and restores whole planner states
/// through whatever storage the platform provides.
pub struct PlannerEngine<S>
where
    S: PlannerStorage,
{
    storage: S,
}

impl<S> PlannerEngine<S>
where
    S: PlannerStorage,
{
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Save the trip and list together
    ///
    /// # Errors
    ///
    /// Returns an error if either part cannot be saved.
    pub fn save_plan(&self, planner: &Planner) -> Result<(), S::Error> {
        self.storage.save_trip(&planner.trip)?;
        self.storage.save_items(&planner.items)
    }

    /// Load the saved plan, if any
    ///
    /// Either half may be missing; a plan is returned when at least one
    /// half exists, with defaults filling the other.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved state cannot be loaded.
    pub fn load_plan(&self) -> Result<Option<Planner>, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        let trip = self.storage.load_trip().map_err(Into::into)?;
        let items = self.storage.load_items().map_err(Into::into)?;
        if trip.is_none() && items.is_none() {
            return Ok(None);
        }
        Ok(Some(Planner {
            trip: trip.unwrap_or_default(),
            items: items.unwrap_or_default(),
        }))
    }

    /// Delete the saved plan
    ///
    /// # Errors
    ///
    /// Returns an error if the saved state cannot be deleted.
    pub fn clear_plan(&self) -> Result<(), S::Error> {
        self.storage.clear()
    }
}
