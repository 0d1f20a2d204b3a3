use crate::error::Result;
use crate::model::{FeatureRecord, UserId};
use crate::store::FeatureStore;

/// All records owned by `user_id`, in insertion order. No pagination.
pub fn run<S: FeatureStore>(store: &S, user_id: UserId) -> Result<Vec<FeatureRecord>> {
    store.list_features(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::MemoryStore;
    use serde_json::json;

    fn point(x: f64) -> serde_json::Value {
        json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [x, 0.0]},
            "properties": {}
        })
    }

    #[test]
    fn returns_only_the_callers_features() {
        let mut store = MemoryStore::new();
        create::run(&mut store, 1, &point(0.0)).unwrap();
        create::run(&mut store, 2, &point(1.0)).unwrap();

        let mine = run(&store, 1).unwrap();
        assert_eq!(mine.len(), 1);
        assert!(mine.iter().all(|r| r.user_id == 1));
    }

    #[test]
    fn round_trips_created_payloads_verbatim() {
        let mut store = MemoryStore::new();
        let payload = point(3.5);
        create::run(&mut store, 1, &payload).unwrap();

        let listed = run(&store, 1).unwrap();
        assert_eq!(listed[0].feature, payload);
    }
}
