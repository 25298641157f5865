//! Habit domain model.
//!
//! # Responsibility
//! - Define the canonical daily-habit record and its name validation rule.
//! - Provide the fixed built-in default set used on first run and reset.
//!
//! # Invariants
//! - `id` is stable and never reused for another habit in the same list.
//! - `name` is non-empty after trimming for every persisted habit.
//! - `completed` is meaningful only for the current calendar day.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a habit.
///
/// Kept as an opaque string: user-created habits carry generated UUIDs,
/// while the built-in defaults keep fixed literal ids.
pub type HabitId = String;

/// Validation failure for habit write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitValidationError {
    /// Name is empty or whitespace-only after trimming.
    EmptyName,
}

impl Display for HabitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "habit name must not be empty"),
        }
    }
}

impl Error for HabitValidationError {}

/// Canonical record for one daily habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Stable opaque ID used for toggle/edit/delete addressing.
    pub id: HabitId,
    /// Display name; non-empty after trimming.
    pub name: String,
    /// Display description; may be empty.
    pub description: String,
    /// Completion flag for the current day only.
    pub completed: bool,
}

impl Habit {
    /// Creates a new habit with a freshly generated stable ID.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - The caller validates the name via `validate()` before persisting.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, description)
    }

    /// Creates a habit with a caller-provided stable ID.
    ///
    /// Used by the built-in default set where identity is fixed.
    pub fn with_id(
        id: impl Into<HabitId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Checks the name-emptiness rule enforced on add/edit.
    pub fn validate_name(name: &str) -> Result<(), HabitValidationError> {
        if name.trim().is_empty() {
            return Err(HabitValidationError::EmptyName);
        }
        Ok(())
    }

    /// Validates this record against model invariants.
    pub fn validate(&self) -> Result<(), HabitValidationError> {
        Self::validate_name(&self.name)
    }
}

/// Returns the built-in default habit set, fixed content and order.
///
/// Ids `"1"`..`"6"` are stable literals so a reset always reproduces the
/// same identities.
pub fn default_habits() -> Vec<Habit> {
    vec![
        Habit::with_id("1", "Drink Water", "Drink 8 glasses"),
        Habit::with_id("2", "Exercise", "30 minutes workout"),
        Habit::with_id("3", "Read", "Read for 20 minutes"),
        Habit::with_id("4", "Meditate", "10 minutes meditation"),
        Habit::with_id("5", "Eat Healthy", "Include vegetables"),
        Habit::with_id("6", "School Assignments", "Complete class works or assignments"),
    ]
}

#[cfg(test)]
mod tests {
    use super::{default_habits, Habit, HabitValidationError};
    use std::collections::HashSet;

    #[test]
    fn new_habit_starts_uncompleted_with_unique_id() {
        let a = Habit::new("Stretch", "5 minutes");
        let b = Habit::new("Stretch", "5 minutes");
        assert!(!a.completed);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn validate_rejects_whitespace_only_name() {
        assert_eq!(
            Habit::validate_name("   "),
            Err(HabitValidationError::EmptyName)
        );
        assert!(Habit::validate_name(" Floss ").is_ok());
    }

    #[test]
    fn default_set_has_six_fixed_entries() {
        let defaults = default_habits();
        assert_eq!(defaults.len(), 6);
        assert!(defaults.iter().all(|habit| !habit.completed));
        assert_eq!(defaults[0].name, "Drink Water");
        assert_eq!(defaults[5].id, "6");

        let ids: HashSet<_> = defaults.iter().map(|habit| habit.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }
}
