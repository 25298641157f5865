//! Core use-case services.
//!
//! # Responsibility
//! - Own the canonical in-memory habit list and its mutation entry points.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod habit_service;
