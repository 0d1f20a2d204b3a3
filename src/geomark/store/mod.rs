//! # Storage Layer
//!
//! The [`FeatureStore`] trait is the storage abstraction for feature records.
//! Storage sits behind a trait so the command layer can be tested against
//! [`memory::MemoryStore`] without a filesystem, and so the production
//! [`fs::FileStore`] could later be swapped for a database backend without
//! touching business logic.
//!
//! Stores persist records, assign ids, and preserve insertion order. They do
//! **not** know about ownership rules or payload validation; that lives in the
//! command layer. Record ids are a monotonically increasing sequence; an id is
//! never reused after deletion.
//!
//! ## Storage Format
//!
//! For `FileStore`, a single `features.json` document in the data directory:
//!
//! ```text
//! {
//!   "next_id": 4,
//!   "records": [ { "id": 1, "user_id": 1, "feature": {...}, ... }, ... ]
//! }
//! ```

use serde_json::Value;

use crate::error::Result;
use crate::model::{FeatureId, FeatureRecord, UserId};

pub mod fs;
pub mod memory;

/// Abstract interface for feature record storage.
///
/// Implementations must assign unique ids, keep insertion order stable, and
/// make each operation atomic with respect to concurrent callers (the caller
/// holds a lock around the store; no finer discipline is required).
pub trait FeatureStore {
    /// Insert a new record owned by `user_id`, assigning the next id.
    fn insert_feature(&mut self, user_id: UserId, feature: Value) -> Result<FeatureRecord>;

    /// Get a record by id.
    fn get_feature(&self, id: FeatureId) -> Result<FeatureRecord>;

    /// List all records owned by `user_id`, in insertion order.
    fn list_features(&self, user_id: UserId) -> Result<Vec<FeatureRecord>>;

    /// Replace a record's feature document in full. Id and owner are
    /// unchanged; `updated_at` is bumped.
    fn replace_feature(&mut self, id: FeatureId, feature: Value) -> Result<FeatureRecord>;

    /// Delete a record permanently.
    fn delete_feature(&mut self, id: FeatureId) -> Result<()>;
}
