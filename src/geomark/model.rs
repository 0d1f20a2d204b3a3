use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned feature record id. Unique and immutable for the record's life.
pub type FeatureId = i64;

/// Id of the account owning a record.
pub type UserId = i64;

/// One persisted map annotation: an opaque GeoJSON Feature document bound to
/// its owning user. The document is stored and returned verbatim; geomark
/// never interprets coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub id: FeatureId,
    pub user_id: UserId,
    pub feature: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FeatureRecord {
    pub fn new(id: FeatureId, user_id: UserId, feature: Value) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            feature,
            created_at: now,
            updated_at: now,
        }
    }

    /// The stored GeoJSON document with the record id merged in, the shape the
    /// map UI consumes (it needs the id to address the record later).
    pub fn document_with_id(&self) -> Value {
        let mut doc = self.feature.clone();
        if let Some(obj) = doc.as_object_mut() {
            obj.insert("id".to_string(), Value::from(self.id));
        }
        doc
    }
}

/// A geographic point as Leaflet hands it around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A client-local marker. Never persisted server-side; the id is derived from
/// the creation timestamp like the original UI's `Date.now()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub latlng: LatLng,
}
