//! Persistence layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the opaque key-value contract the snapshot format sits on.
//! - Keep SQLite and JSON details out of service/business orchestration.
//!
//! # Invariants
//! - Persistence reads/writes whole snapshots; it never mutates the habit
//!   list it is handed.
//! - The daily-reset transformation is applied on load only.

pub mod kv_repo;
pub mod snapshot_repo;
