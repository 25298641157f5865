//! Domain model for daily habit tracking.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one habit-record shape shared by state store and persistence.
//!
//! # Invariants
//! - Every habit is identified by a stable, list-unique `HabitId`.
//! - A habit name is never empty after trimming.

pub mod habit;
