//! # API Facade
//!
//! [`FeatureApi`] is a thin facade over the command layer and the single entry
//! point for all feature operations, regardless of the frontend. It dispatches
//! to commands and returns structured `Result` types; business logic stays in
//! `commands/*.rs`, presentation stays in `http/`.
//!
//! The facade is generic over [`FeatureStore`]: production wraps a
//! `FileStore`, tests wrap a `MemoryStore`.

use serde_json::Value;

use crate::commands;
use crate::error::Result;
use crate::model::{FeatureId, FeatureRecord, UserId};
use crate::store::FeatureStore;

/// The main API facade for feature operations.
pub struct FeatureApi<S: FeatureStore> {
    store: S,
}

impl<S: FeatureStore> FeatureApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_features(&self, user_id: UserId) -> Result<Vec<FeatureRecord>> {
        commands::list::run(&self.store, user_id)
    }

    pub fn create_feature(&mut self, user_id: UserId, payload: &Value) -> Result<FeatureRecord> {
        commands::create::run(&mut self.store, user_id, payload)
    }

    pub fn update_feature(
        &mut self,
        user_id: UserId,
        id: FeatureId,
        payload: &Value,
    ) -> Result<FeatureRecord> {
        commands::update::run(&mut self.store, user_id, id, payload)
    }

    pub fn delete_feature(&mut self, user_id: UserId, id: FeatureId) -> Result<()> {
        commands::delete::run(&mut self.store, user_id, id)
    }
}
