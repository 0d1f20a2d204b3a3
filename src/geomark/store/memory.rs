use chrono::Utc;
use serde_json::Value;

use super::FeatureStore;
use crate::error::{GeomarkError, Result};
use crate::model::{FeatureId, FeatureRecord, UserId};

/// In-memory store for testing. No persistence, insertion order preserved.
#[derive(Debug)]
pub struct MemoryStore {
    records: Vec<FeatureRecord>,
    next_id: FeatureId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureStore for MemoryStore {
    fn insert_feature(&mut self, user_id: UserId, feature: Value) -> Result<FeatureRecord> {
        let record = FeatureRecord::new(self.next_id, user_id, feature);
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }

    fn get_feature(&self, id: FeatureId) -> Result<FeatureRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(GeomarkError::FeatureNotFound(id))
    }

    fn list_features(&self, user_id: UserId) -> Result<Vec<FeatureRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    fn replace_feature(&mut self, id: FeatureId, feature: Value) -> Result<FeatureRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GeomarkError::FeatureNotFound(id))?;
        record.feature = feature;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    fn delete_feature(&mut self, id: FeatureId) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Err(GeomarkError::FeatureNotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn point(x: f64) -> Value {
        json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [x, 0.0]},
            "properties": {}
        })
    }

    #[test]
    fn assigns_sequential_ids() {
        let mut store = MemoryStore::new();
        let a = store.insert_feature(1, point(0.0)).unwrap();
        let b = store.insert_feature(1, point(1.0)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn lists_only_the_owners_records_in_insertion_order() {
        let mut store = MemoryStore::new();
        store.insert_feature(1, point(0.0)).unwrap();
        store.insert_feature(2, point(1.0)).unwrap();
        store.insert_feature(1, point(2.0)).unwrap();

        let mine = store.list_features(1).unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].feature["geometry"]["coordinates"][0], json!(0.0));
        assert_eq!(mine[1].feature["geometry"]["coordinates"][0], json!(2.0));
    }

    #[test]
    fn replace_keeps_id_and_owner() {
        let mut store = MemoryStore::new();
        let created = store.insert_feature(1, point(0.0)).unwrap();
        let updated = store.replace_feature(created.id, point(9.0)).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.user_id, 1);
        assert_eq!(updated.feature["geometry"]["coordinates"][0], json!(9.0));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = MemoryStore::new();
        let a = store.insert_feature(1, point(0.0)).unwrap();
        store.delete_feature(a.id).unwrap();
        let b = store.insert_feature(1, point(1.0)).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn missing_ids_report_not_found() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.get_feature(42),
            Err(GeomarkError::FeatureNotFound(42))
        ));
        assert!(matches!(
            store.delete_feature(42),
            Err(GeomarkError::FeatureNotFound(42))
        ));
        assert!(matches!(
            store.replace_feature(42, point(0.0)),
            Err(GeomarkError::FeatureNotFound(42))
        ));
    }
}
