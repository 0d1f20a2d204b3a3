use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FeatureStore;
use crate::error::{GeomarkError, Result};
use crate::model::{FeatureId, FeatureRecord, UserId};

const DATA_FILENAME: &str = "features.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoreData {
    next_id: FeatureId,
    records: Vec<FeatureRecord>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

/// Production file-based store. The whole record set lives in one
/// `features.json` document which is read and rewritten per operation; at this
/// table size that is simpler and safer than an incremental format.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(GeomarkError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<StoreData> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(StoreData::default());
        }
        let content = fs::read_to_string(&path).map_err(GeomarkError::Io)?;
        let data: StoreData =
            serde_json::from_str(&content).map_err(GeomarkError::Serialization)?;
        Ok(data)
    }

    fn save(&self, data: &StoreData) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(data).map_err(GeomarkError::Serialization)?;
        fs::write(self.data_path(), content).map_err(GeomarkError::Io)?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FeatureStore for FileStore {
    fn insert_feature(&mut self, user_id: UserId, feature: Value) -> Result<FeatureRecord> {
        let mut data = self.load()?;
        let record = FeatureRecord::new(data.next_id, user_id, feature);
        data.next_id += 1;
        data.records.push(record.clone());
        self.save(&data)?;
        Ok(record)
    }

    fn get_feature(&self, id: FeatureId) -> Result<FeatureRecord> {
        let data = self.load()?;
        data.records
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(GeomarkError::FeatureNotFound(id))
    }

    fn list_features(&self, user_id: UserId) -> Result<Vec<FeatureRecord>> {
        let data = self.load()?;
        Ok(data
            .records
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }

    fn replace_feature(&mut self, id: FeatureId, feature: Value) -> Result<FeatureRecord> {
        let mut data = self.load()?;
        let record = data
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GeomarkError::FeatureNotFound(id))?;
        record.feature = feature;
        record.updated_at = Utc::now();
        let updated = record.clone();
        self.save(&data)?;
        Ok(updated)
    }

    fn delete_feature(&mut self, id: FeatureId) -> Result<()> {
        let mut data = self.load()?;
        let before = data.records.len();
        data.records.retain(|r| r.id != id);
        if data.records.len() == before {
            return Err(GeomarkError::FeatureNotFound(id));
        }
        self.save(&data)?;
        Ok(())
    }
}
