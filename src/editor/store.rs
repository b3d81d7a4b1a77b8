//! Persistence seam
//!
//! The editor only needs "save this profile, tell me if it worked". No backing
//! format lives here; `MemoryStore` keeps the last accepted snapshot.

use anyhow::{bail, Result};
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::editor::profile::Profile;

/// Accepts a validated profile
pub trait ProfileStore {
    fn save(&mut self, profile: &Profile) -> Result<()>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    saved: Option<Profile>,
    save_count: usize,
    fail_with: Option<String>,
}

/// In-memory store; clones share the same snapshot
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last profile accepted by `save`
    pub fn saved(&self) -> Option<Profile> {
        self.lock().saved.clone()
    }

    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Make subsequent saves fail with `reason`, or succeed again with `None`
    pub fn set_failure(&self, reason: Option<&str>) {
        self.lock().fail_with = reason.map(str::to_string);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        // Poisoning is ignored, the snapshot is plain data
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProfileStore for MemoryStore {
    fn save(&mut self, profile: &Profile) -> Result<()> {
        let mut inner = self.lock();
        inner.save_count += 1;
        if let Some(reason) = &inner.fail_with {
            bail!("{reason}");
        }
        inner.saved = Some(profile.clone());
        info!(display_name = %profile.display_name, "Profile stored in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_snapshot() {
        let store = MemoryStore::new();
        let mut handle = store.clone();

        handle.save(&Profile::seed()).unwrap();
        assert_eq!(store.saved(), Some(Profile::seed()));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_failure_keeps_previous_snapshot() {
        let mut store = MemoryStore::new();
        store.save(&Profile::seed()).unwrap();

        store.set_failure(Some("disk full"));
        let mut changed = Profile::seed();
        changed.display_name = "Other".to_string();
        let err = store.save(&changed).unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert_eq!(store.saved(), Some(Profile::seed()));
        assert_eq!(store.save_count(), 2);
    }
}
