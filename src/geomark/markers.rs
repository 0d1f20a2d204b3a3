//! Locally persisted markers.
//!
//! Markers are client-only state: a serialized list under a single local file,
//! the analog of the original UI's `localStorage` key. Ids are derived from
//! the creation timestamp (milliseconds), bumped when needed so two adds
//! within the same millisecond still get distinct, increasing ids.
//!
//! Missing or corrupt storage never surfaces an error; it reads as an empty
//! list and the next save rewrites it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{GeomarkError, Result};
use crate::model::{LatLng, Marker};

pub struct MarkerStore {
    path: PathBuf,
    markers: Vec<Marker>,
}

impl MarkerStore {
    /// Open the store at `path`, loading whatever is persisted there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let markers = read_markers(&path);
        Self { path, markers }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Append a marker with a fresh id and persist the full list.
    pub fn add_marker(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        latlng: LatLng,
    ) -> Result<Marker> {
        let marker = Marker {
            id: self.next_id(),
            title: title.into(),
            description: description.into(),
            latlng,
        };
        self.markers.push(marker.clone());
        self.save()?;
        Ok(marker)
    }

    /// Drop the marker with `id` and persist. Unknown ids are a no-op list-wise
    /// but the list is still rewritten, matching the original store.
    pub fn remove_marker(&mut self, id: i64) -> Result<()> {
        self.markers.retain(|m| m.id != id);
        self.save()
    }

    /// Move the marker with `id`. A non-existent id is a no-op: the list is
    /// unchanged and no error is raised.
    pub fn update_marker(&mut self, id: i64, latlng: LatLng) -> Result<()> {
        if let Some(marker) = self.markers.iter_mut().find(|m| m.id == id) {
            marker.latlng = latlng;
            self.save()?;
        }
        Ok(())
    }

    /// Reload from disk, discarding unsaved in-memory changes.
    pub fn load_markers(&mut self) {
        self.markers = read_markers(&self.path);
    }

    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.markers.iter().map(|m| m.id).max() {
            Some(last) if last >= now => last + 1,
            _ => now,
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(GeomarkError::Io)?;
            }
        }
        let content =
            serde_json::to_string_pretty(&self.markers).map_err(GeomarkError::Serialization)?;
        fs::write(&self.path, content).map_err(GeomarkError::Io)?;
        Ok(())
    }
}

fn read_markers(path: &Path) -> Vec<Marker> {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berlin() -> LatLng {
        LatLng::new(52.52, 13.405)
    }

    #[test]
    fn add_persists_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markers.json");

        let added = {
            let mut store = MarkerStore::open(&path);
            store.add_marker("Home", "Start here", berlin()).unwrap()
        };

        let store = MarkerStore::open(&path);
        assert_eq!(store.markers(), &[added]);
    }

    #[test]
    fn ids_are_strictly_increasing_even_in_the_same_millisecond() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MarkerStore::open(dir.path().join("markers.json"));

        let a = store.add_marker("A", "", berlin()).unwrap();
        let b = store.add_marker("B", "", berlin()).unwrap();
        let c = store.add_marker("C", "", berlin()).unwrap();
        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn remove_filters_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MarkerStore::open(dir.path().join("markers.json"));
        let a = store.add_marker("A", "", berlin()).unwrap();
        let b = store.add_marker("B", "", berlin()).unwrap();

        store.remove_marker(a.id).unwrap();
        assert_eq!(store.markers(), &[b]);
    }

    #[test]
    fn update_moves_the_matching_marker() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MarkerStore::open(dir.path().join("markers.json"));
        let added = store.add_marker("A", "", berlin()).unwrap();

        let moved = LatLng::new(48.86, 2.35);
        store.update_marker(added.id, moved).unwrap();
        assert_eq!(store.markers()[0].latlng, moved);
    }

    #[test]
    fn update_of_a_nonexistent_id_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = MarkerStore::open(dir.path().join("markers.json"));
        let added = store.add_marker("A", "", berlin()).unwrap();

        store.update_marker(added.id + 1, LatLng::new(0.0, 0.0)).unwrap();
        assert_eq!(store.markers(), &[added]);
    }

    #[test]
    fn corrupt_storage_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markers.json");
        fs::write(&path, "{not json").unwrap();

        let store = MarkerStore::open(&path);
        assert!(store.markers().is_empty());
    }

    #[test]
    fn load_markers_discards_unsaved_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markers.json");

        let mut store = MarkerStore::open(&path);
        store.add_marker("Saved", "", berlin()).unwrap();

        // A second handle mutates without this one noticing.
        let mut other = MarkerStore::open(&path);
        other.markers.push(Marker {
            id: 999,
            title: "Unsaved".to_string(),
            description: String::new(),
            latlng: berlin(),
        });
        assert_eq!(other.markers().len(), 2);

        other.load_markers();
        assert_eq!(other.markers().len(), 1);
        assert_eq!(other.markers()[0].title, "Saved");
    }
}
