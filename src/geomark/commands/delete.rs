use super::require_owner;
use crate::error::Result;
use crate::model::{FeatureId, UserId};
use crate::store::FeatureStore;

/// Remove a record permanently. Same ownership policy as update; there is no
/// soft-delete.
pub fn run<S: FeatureStore>(store: &mut S, user_id: UserId, id: FeatureId) -> Result<()> {
    require_owner(store, user_id, id)?;
    store.delete_feature(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, list};
    use crate::error::GeomarkError;
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
    fn owner_can_delete_and_listing_excludes_the_record() {
        let mut store = MemoryStore::new();
        let created = create::run(&mut store, 1, &point()).unwrap();

        run(&mut store, 1, created.id).unwrap();
        assert!(list::run(&store, 1).unwrap().is_empty());
    }

    #[test]
    fn non_owner_delete_is_unauthorized_and_leaves_the_record() {
        let mut store = MemoryStore::new();
        let created = create::run(&mut store, 1, &point()).unwrap();

        let err = run(&mut store, 2, created.id).unwrap_err();
        assert!(matches!(err, GeomarkError::Unauthorized));
        assert_eq!(list::run(&store, 1).unwrap().len(), 1);
    }

    #[test]
    fn deleting_a_missing_record_is_not_a_success() {
        let mut store = MemoryStore::new();
        assert!(run(&mut store, 1, 42).is_err());
    }
}
