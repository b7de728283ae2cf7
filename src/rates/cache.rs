//! Snapshot cache
//!
//! The CLI shell persists the last good snapshot between invocations so
//! a failed refresh degrades to yesterday's rates instead of zeros. The
//! resolver itself stays file-free.

use super::RateSnapshot;
use std::path::PathBuf;

/// File-backed store for the last successful rate fetch
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Last saved snapshot; a missing or unreadable cache yields empty rates
    pub fn load(&self) -> RateSnapshot {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return RateSnapshot::default(),
        };

        match serde_json::from_str(&text) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding unreadable rate cache"
                );
                RateSnapshot::default()
            }
        }
    }

    /// Persist a snapshot, creating parent directories as needed
    pub fn save(&self, snapshot: &RateSnapshot) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(snapshot)?)?;
        Ok(())
    }
}
