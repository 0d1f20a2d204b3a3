//! The map store: cross-component view requests.
//!
//! Clicking a feature in a list should fly the map to it, even when it is the
//! same feature as last time. A bare "current target" value cannot express
//! that, so each request carries a strictly increasing stamp; observers
//! comparing against the previous request always see a change.

use chrono::Utc;

use crate::model::FeatureId;

/// One pending fly-to request. Two requests are never equal, even for the
/// same feature id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyToRequest {
    pub feature_id: FeatureId,
    pub timestamp: i64,
}

/// Shared map view state: the latest fly-to request, if any. Lives in the
/// injected [`crate::tools::MapUiState`] container alongside the tool stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapStore {
    fly_to_request: Option<FlyToRequest>,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fly_to_request(&self) -> Option<FlyToRequest> {
        self.fly_to_request
    }

    /// Ask the map to fly to `feature_id`. The stamp is bumped past the
    /// previous request's when the clock has not advanced, so repeating the
    /// same id within one millisecond still notifies observers.
    pub fn request_fly_to(&mut self, feature_id: FeatureId) {
        let now = Utc::now().timestamp_millis();
        let timestamp = match self.fly_to_request {
            Some(prev) if prev.timestamp >= now => prev.timestamp + 1,
            _ => now,
        };
        self.fly_to_request = Some(FlyToRequest {
            feature_id,
            timestamp,
        });
    }
}
