//! Web-specific planner engine implementation
//!
//! This module provides the localStorage-backed implementation of the
//! trailpack-planner storage trait and re-exports the core planner types.

use crate::dom;

// Re-export all types from trailpack-planner
pub use trailpack_planner::*;

/// Planner storage backed by browser localStorage.
pub struct WebPlannerStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WebPlannerStorage {
    fn set(key: &str, json: &str) -> Result<(), WebStorageError> {
        dom::local_storage()
            .and_then(|storage| storage.set_item(key, json))
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn get(key: &str) -> Result<Option<String>, WebStorageError> {
        dom::local_storage()
            .and_then(|storage| storage.get_item(key))
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn remove(key: &str) -> Result<(), WebStorageError> {
        dom::local_storage()
            .and_then(|storage| storage.remove_item(key))
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    /// Parse a saved record, discarding records that no longer parse so a
    /// corrupt save never wedges the app on load.
    fn parse_or_discard<T: serde::de::DeserializeOwned>(key: &str, json: &str) -> Option<T> {
        match serde_json::from_str(json) {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("discarding unreadable saved record {key}: {err}");
                None
            }
        }
    }
}

impl PlannerStorage for WebPlannerStorage {
    type Error = WebStorageError;

    fn save_trip(&self, trip: &TripDetails) -> Result<(), Self::Error> {
        Self::set(TRIP_DETAILS_KEY, &serde_json::to_string(trip)?)
    }

    fn load_trip(&self) -> Result<Option<TripDetails>, Self::Error> {
        Ok(Self::get(TRIP_DETAILS_KEY)?
            .and_then(|json| Self::parse_or_discard(TRIP_DETAILS_KEY, &json)))
    }

    fn save_items(&self, items: &[GearItem]) -> Result<(), Self::Error> {
        Self::set(PACKING_LIST_KEY, &serde_json::to_string(items)?)
    }

    fn load_items(&self) -> Result<Option<Vec<GearItem>>, Self::Error> {
        Ok(Self::get(PACKING_LIST_KEY)?
            .and_then(|json| Self::parse_or_discard(PACKING_LIST_KEY, &json)))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        Self::remove(TRIP_DETAILS_KEY)?;
        Self::remove(PACKING_LIST_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_carry_context() {
        let err = WebStorageError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");

        let parse = serde_json::from_str::<TripDetails>("not json").unwrap_err();
        let err = WebStorageError::from(parse);
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn unreadable_records_are_discarded() {
        let parsed: Option<TripDetails> =
            WebPlannerStorage::parse_or_discard(TRIP_DETAILS_KEY, "{ not json");
        assert!(parsed.is_none());

        let parsed: Option<TripDetails> =
            WebPlannerStorage::parse_or_discard(TRIP_DETAILS_KEY, "{}");
        assert_eq!(parsed, Some(TripDetails::default()));
    }
}
