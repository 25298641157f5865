//! Core domain logic for habitloop.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::habit::{default_habits, Habit, HabitId, HabitValidationError};
pub use repo::kv_repo::{KeyValueStore, KvError, KvResult, SqliteKeyValueStore};
pub use repo::snapshot_repo::{
    local_day_stamp, SnapshotError, SnapshotRepository, SnapshotResult, SNAPSHOT_KEY,
};
pub use service::habit_service::{HabitService, Progress};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
