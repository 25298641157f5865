//! Persisted snapshot round-trip with the daily-reset rule.
//!
//! # Responsibility
//! - Serialize `{habits, date}` to one well-known key as a JSON string.
//! - On load, force every `completed` flag to `false` when the stored day
//!   is not the current day.
//!
//! # Invariants
//! - The `date` field always reflects the calendar day of the last save and
//!   is never exposed to state-store consumers.
//! - A structurally different stored value is corrupt, not migratable.
//! - Load never mutates anything other than `completed` flags.

use crate::model::habit::Habit;
use crate::repo::kv_repo::{KeyValueStore, KvError};
use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known storage key for the single persisted snapshot.
pub const SNAPSHOT_KEY: &str = "@habit_tracker_data";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Persistence-adapter error for snapshot load/save operations.
#[derive(Debug)]
pub enum SnapshotError {
    /// Underlying key-value storage failed.
    Storage(KvError),
    /// Stored value exists but does not deserialize into a snapshot.
    CorruptData(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::CorruptData(err) => write!(f, "corrupt persisted snapshot: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::CorruptData(err) => Some(err),
        }
    }
}

impl From<KvError> for SnapshotError {
    fn from(value: KvError) -> Self {
        Self::Storage(value)
    }
}

/// Wire shape of the persisted value. Internal to this module.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSnapshot {
    habits: Vec<Habit>,
    date: String,
}

/// Returns the canonical day stamp for the local calendar day.
///
/// Two instants belong to the same day iff their stamps compare equal.
pub fn local_day_stamp() -> String {
    Local::now().date_naive().to_string()
}

/// Snapshot persistence adapter over an opaque key-value store.
pub struct SnapshotRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SnapshotRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the persisted habit list for `today`.
    ///
    /// # Contract
    /// - Returns `Ok(None)` on first run (key absent).
    /// - Returns `SnapshotError::CorruptData` when the stored value does not
    ///   deserialize; the caller decides the fallback policy.
    /// - When the stored day equals `today`, habits are returned unchanged.
    /// - Otherwise every habit's `completed` flag is forced to `false`; the
    ///   next save writes today's date.
    pub fn load(&self, today: &str) -> SnapshotResult<Option<Vec<Habit>>> {
        let Some(raw) = self.store.get(SNAPSHOT_KEY)? else {
            return Ok(None);
        };

        let snapshot: PersistedSnapshot =
            serde_json::from_str(&raw).map_err(SnapshotError::CorruptData)?;

        if snapshot.date == today {
            return Ok(Some(snapshot.habits));
        }

        info!(
            "event=daily_reset module=repo status=ok stored_date={} today={} habit_count={}",
            snapshot.date,
            today,
            snapshot.habits.len()
        );
        let reset = snapshot
            .habits
            .into_iter()
            .map(|habit| Habit {
                completed: false,
                ..habit
            })
            .collect();
        Ok(Some(reset))
    }

    /// Serializes `{habits, date: today}` and overwrites the well-known key.
    pub fn save(&self, habits: &[Habit], today: &str) -> SnapshotResult<()> {
        let snapshot = PersistedSnapshot {
            habits: habits.to_vec(),
            date: today.to_string(),
        };
        // Serializing our own in-memory model cannot fail structurally;
        // surface it as corrupt data rather than panicking if it ever does.
        let raw = serde_json::to_string(&snapshot).map_err(SnapshotError::CorruptData)?;
        self.store.put(SNAPSHOT_KEY, &raw)?;
        Ok(())
    }
}
