use serde_json::Value;

use crate::error::{GeomarkError, Result};
use crate::geojson::validate_feature;
use crate::model::{FeatureRecord, UserId};
use crate::store::FeatureStore;

/// Validate the payload and insert a record owned by `user_id`. On validation
/// failure nothing is persisted.
pub fn run<S: FeatureStore>(
    store: &mut S,
    user_id: UserId,
    payload: &Value,
) -> Result<FeatureRecord> {
    validate_feature(payload).map_err(GeomarkError::Validation)?;
    store.insert_feature(user_id, payload.clone())
}
