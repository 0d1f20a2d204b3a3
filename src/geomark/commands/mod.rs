//! Business logic for each feature operation, one module per command.
//!
//! Commands operate on a [`FeatureStore`], return plain Rust types, and make
//! no I/O assumptions. The ownership invariant is enforced here, once, by
//! [`require_owner`]; the HTTP layer never re-implements it.

use crate::error::{GeomarkError, Result};
use crate::model::{FeatureId, FeatureRecord, UserId};
use crate::store::FeatureStore;

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

/// Central authorization policy for mutating commands.
///
/// Returns the record only when it exists and is owned by `user_id`. A
/// missing record and a foreign record both come back as `Unauthorized`, so
/// callers cannot probe for the existence of other users' records.
pub fn require_owner<S: FeatureStore>(
    store: &S,
    user_id: UserId,
    id: FeatureId,
) -> Result<FeatureRecord> {
    let record = match store.get_feature(id) {
        Ok(record) => record,
        Err(GeomarkError::FeatureNotFound(_)) => return Err(GeomarkError::Unauthorized),
        Err(err) => return Err(err),
    };
    if record.user_id != user_id {
        return Err(GeomarkError::Unauthorized);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use serde_json::json;

    fn point() -> serde_json::Value {
        json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
            "properties": {}
        })
    }

    #[test]
    fn owner_passes_the_policy() {
        let mut store = MemoryStore::new();
        let record = store.insert_feature(1, point()).unwrap();
        assert!(require_owner(&store, 1, record.id).is_ok());
    }

    #[test]
    fn foreign_record_and_missing_record_are_indistinguishable() {
        let mut store = MemoryStore::new();
        let record = store.insert_feature(1, point()).unwrap();

        let foreign = require_owner(&store, 2, record.id).unwrap_err();
        let missing = require_owner(&store, 2, 999).unwrap_err();
        assert!(matches!(foreign, GeomarkError::Unauthorized));
        assert!(matches!(missing, GeomarkError::Unauthorized));
    }
}
