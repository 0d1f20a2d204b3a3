use serde_json::Value;

use super::require_owner;
use crate::error::{GeomarkError, Result};
use crate::geojson::validate_feature;
use crate::model::{FeatureId, FeatureRecord, UserId};
use crate::store::FeatureStore;

/// Replace a record's feature document in full. The ownership check runs
/// before validation, so a non-owner learns nothing about whether their
/// payload was valid. Id and owner are immutable.
pub fn run<S: FeatureStore>(
    store: &mut S,
    user_id: UserId,
    id: FeatureId,
    payload: &Value,
) -> Result<FeatureRecord> {
    require_owner(store, user_id, id)?;
    validate_feature(payload).map_err(GeomarkError::Validation)?;
    store.replace_feature(id, payload.clone())
}
