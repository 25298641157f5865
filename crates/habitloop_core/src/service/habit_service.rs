//! Habit state store.
//!
//! # Responsibility
//! - Own the canonical ordered habit list for the running process.
//! - Apply CRUD mutations as synchronous single-step updates.
//! - Persist a full snapshot after every effective mutation.
//!
//! # Invariants
//! - The list is loaded exactly once, before any mutation is accepted.
//! - No partial-update state is ever observable between operations.
//! - A failed save is logged and absorbed; in-memory state stays the
//!   source of truth until the next successful save.

use crate::model::habit::{default_habits, Habit, HabitId, HabitValidationError};
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::snapshot_repo::{local_day_stamp, SnapshotError, SnapshotRepository};
use log::{debug, error, info, warn};

/// Derived completion summary for the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Habits completed today.
    pub completed: usize,
    /// Total habits in the list.
    pub total: usize,
    /// `round(100 * completed / total)`, `0` for an empty list.
    pub percentage: u8,
}

/// State store over the ordered habit list, with snapshot persistence.
pub struct HabitService<S: KeyValueStore> {
    habits: Vec<Habit>,
    snapshots: SnapshotRepository<S>,
}

impl<S: KeyValueStore> HabitService<S> {
    /// Loads initial state from persistence and constructs the store.
    ///
    /// # Contract
    /// - First run (no stored snapshot) starts from the built-in defaults.
    /// - A snapshot saved on an earlier day comes back with every
    ///   `completed` flag reset by the persistence adapter.
    /// - Corrupt or unreadable stored data falls back to the defaults
    ///   instead of failing; the condition is logged, not surfaced.
    pub fn load(snapshots: SnapshotRepository<S>) -> Self {
        let today = local_day_stamp();
        let habits = match snapshots.load(&today) {
            Ok(Some(habits)) => {
                info!(
                    "event=state_load module=service status=ok source=snapshot habit_count={}",
                    habits.len()
                );
                habits
            }
            Ok(None) => {
                info!("event=state_load module=service status=ok source=defaults reason=first_run");
                default_habits()
            }
            Err(SnapshotError::CorruptData(err)) => {
                warn!(
                    "event=state_load module=service status=recovered source=defaults error_code=corrupt_snapshot error={err}"
                );
                default_habits()
            }
            Err(SnapshotError::Storage(err)) => {
                warn!(
                    "event=state_load module=service status=recovered source=defaults error_code=storage_read_failed error={err}"
                );
                default_habits()
            }
        };

        Self { habits, snapshots }
    }

    /// Appends a new habit with a fresh unique id and `completed = false`.
    ///
    /// Returns the created id. No state changes on validation failure.
    pub fn add_habit(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<HabitId, HabitValidationError> {
        Habit::validate_name(name)?;

        let habit = Habit::new(name.trim(), description);
        let id = habit.id.clone();
        self.habits.push(habit);
        self.persist("add_habit");
        Ok(id)
    }

    /// Updates name/description of the habit matching `id` in place.
    ///
    /// Preserves `id` and `completed`. Unknown ids silently no-op, matching
    /// the shipped behavior; the returned flag reports whether an edit
    /// applied so stricter callers can surface it.
    pub fn edit_habit(
        &mut self,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<bool, HabitValidationError> {
        Habit::validate_name(name)?;

        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            debug!("event=edit_habit module=service status=noop reason=not_found id={id}");
            return Ok(false);
        };

        habit.name = name.trim().to_string();
        habit.description = description.to_string();
        self.persist("edit_habit");
        Ok(true)
    }

    /// Flips the `completed` flag of the habit matching `id`.
    ///
    /// Returns whether a habit was toggled; unknown ids no-op.
    pub fn toggle_habit(&mut self, id: &str) -> bool {
        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            debug!("event=toggle_habit module=service status=noop reason=not_found id={id}");
            return false;
        };

        habit.completed = !habit.completed;
        self.persist("toggle_habit");
        true
    }

    /// Removes the habit matching `id`. Idempotent: absent ids no-op.
    pub fn delete_habit(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == before {
            debug!("event=delete_habit module=service status=noop reason=not_found id={id}");
            return false;
        }

        self.persist("delete_habit");
        true
    }

    /// Replaces the entire list with the built-in default set.
    ///
    /// Discards all user-added/edited/deleted habits irrecoverably.
    pub fn reset_to_defaults(&mut self) {
        self.habits = default_habits();
        self.persist("reset_to_defaults");
    }

    /// Read-only view of the current ordered list.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Completion summary with a zero-total guard.
    pub fn progress(&self) -> Progress {
        let total = self.habits.len();
        let completed = self.habits.iter().filter(|habit| habit.completed).count();
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };

        Progress {
            completed,
            total,
            percentage,
        }
    }

    // Persistence is best-effort: memory already holds the applied mutation,
    // so a failed save must not roll back or block the caller.
    fn persist(&self, operation: &str) {
        let today = local_day_stamp();
        if let Err(err) = self.snapshots.save(&self.habits, &today) {
            error!(
                "event=snapshot_save module=service status=error operation={operation} error_code=save_failed error={err}"
            );
        }
    }
}
