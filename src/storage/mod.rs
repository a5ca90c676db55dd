//! Persistence for profile, path, and progress.
//!
//! Everything goes through a small key-value trait so the learner store can
//! run on SQLite in production and in memory for tests. Reads are tolerant:
//! an absent or malformed record falls back to defaults instead of failing,
//! because a broken save must never lock a learner out.

pub mod sqlite;

pub use sqlite::SqliteStore;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::warn;

use crate::config::RewardConfig;
use crate::path::CurriculumEntry;
use crate::progress::ProgressRecord;
use crate::types::LearnerProfile;

/// Storage key of the learner profile record
pub const PROFILE_KEY: &str = "academy_profile_v1";
/// Storage key of the built curriculum
pub const PATH_KEY: &str = "academy_path_v1";
/// Storage key of the progress record
pub const PROGRESS_KEY: &str = "academy_progress_v1";

/// Minimal key-value backend
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// Typed persistence facade over a key-value backend
pub struct LearnerStore<S: KvStore> {
    store: S,
    rewards: RewardConfig,
}

impl<S: KvStore> LearnerStore<S> {
    pub fn new(store: S, rewards: RewardConfig) -> Self {
        Self { store, rewards }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(bytes) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                warn!(key, %error, "stored record is malformed, falling back");
                Ok(None)
            }
        }
    }

    pub fn save_profile(&self, profile: &LearnerProfile) -> Result<()> {
        self.write_json(PROFILE_KEY, profile)
    }

    /// Stored profile, or `None` when onboarding has not run yet
    pub fn read_profile(&self) -> Result<Option<LearnerProfile>> {
        self.read_json(PROFILE_KEY)
    }

    pub fn save_path(&self, path: &[CurriculumEntry]) -> Result<()> {
        self.write_json(PATH_KEY, &path)
    }

    /// Stored curriculum; absent or malformed reads come back empty
    pub fn read_path(&self) -> Result<Vec<CurriculumEntry>> {
        Ok(self.read_json(PATH_KEY)?.unwrap_or_default())
    }

    pub fn save_progress(&self, progress: &ProgressRecord) -> Result<()> {
        self.write_json(PROGRESS_KEY, progress)
    }

    /// Stored progress; absent or malformed reads come back as a fresh,
    /// sanitized default record
    pub fn read_progress(&self) -> Result<ProgressRecord> {
        let record: ProgressRecord = self.read_json(PROGRESS_KEY)?.unwrap_or_default();
        Ok(record.sanitized(self.rewards.max_hearts))
    }

    pub fn reset_progress(&self) -> Result<()> {
        self.store.remove(PROGRESS_KEY)
    }

    /// Atomically (from the caller's view) switch to a new curriculum:
    /// profile and path are replaced, progress starts over
    pub fn start_new_curriculum(
        &self,
        profile: &LearnerProfile,
        path: &[CurriculumEntry],
    ) -> Result<()> {
        self.save_profile(profile)?;
        self.save_path(path)?;
        self.reset_progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_modules;
    use crate::path::build_adaptive_path;

    fn store() -> LearnerStore<MemoryStore> {
        LearnerStore::new(MemoryStore::new(), RewardConfig::default())
    }

    #[test]
    fn profile_round_trips() {
        let store = store();
        assert!(store.read_profile().unwrap().is_none());

        let profile = LearnerProfile {
            role: "teacher".to_string(),
            ..LearnerProfile::default()
        };
        store.save_profile(&profile).unwrap();
        let loaded = store.read_profile().unwrap().unwrap();
        assert_eq!(loaded.role, "teacher");
    }

    #[test]
    fn missing_progress_reads_as_default() {
        let store = store();
        let progress = store.read_progress().unwrap();
        assert_eq!(progress, ProgressRecord::default());
    }

    #[test]
    fn malformed_progress_falls_back_to_default() {
        let store = store();
        store.store.set(PROGRESS_KEY, b"{not valid json").unwrap();
        let progress = store.read_progress().unwrap();
        assert_eq!(progress, ProgressRecord::default());
    }

    #[test]
    fn inflated_hearts_are_clamped_on_read() {
        let store = store();
        store.store.set(PROGRESS_KEY, br#"{"hearts": 42}"#).unwrap();
        assert_eq!(store.read_progress().unwrap().hearts, 5);
    }

    #[test]
    fn path_round_trips_with_order_and_day() {
        let store = store();
        let path = build_adaptive_path(&LearnerProfile::default(), all_modules(), 14);
        store.save_path(&path).unwrap();

        let loaded = store.read_path().unwrap();
        assert_eq!(loaded.len(), path.len());
        assert_eq!(loaded[0].module.id, path[0].module.id);
        assert_eq!(loaded[0].order, 1);
    }

    #[test]
    fn new_curriculum_resets_progress() {
        let store = store();
        let mut progress = ProgressRecord::default();
        progress.xp = 500;
        store.save_progress(&progress).unwrap();

        let path = build_adaptive_path(&LearnerProfile::default(), all_modules(), 14);
        store
            .start_new_curriculum(&LearnerProfile::default(), &path)
            .unwrap();

        assert_eq!(store.read_progress().unwrap().xp, 0);
        assert!(!store.read_path().unwrap().is_empty());
        assert!(store.read_profile().unwrap().is_some());
    }
}
