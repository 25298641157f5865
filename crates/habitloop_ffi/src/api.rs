//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level habit operations to Dart via FRB.
//! - Keep error semantics simple for the UI shell: envelopes, not panics.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Destructive operations (`delete`, `reset`) are confirmed by the UI
//!   before these functions are invoked; core applies them immediately.

use habitloop_core::db::open_db;
use habitloop_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Habit, HabitService, SnapshotRepository, SqliteKeyValueStore,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const HABIT_DB_FILE_NAME: &str = "habitloop.sqlite3";
static HABIT_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One habit row as rendered by the UI list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitItemView {
    /// Stable habit ID in string form.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description; may be empty.
    pub description: String,
    /// Completion flag for the current day.
    pub completed: bool,
}

/// List response envelope with derived progress fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitListResponse {
    /// Current ordered habit list (empty on load failure).
    pub items: Vec<HabitItemView>,
    /// Habits completed today.
    pub completed_count: u32,
    /// Total habits in the list.
    pub total_count: u32,
    /// Rounded completion percentage; `0` for an empty list.
    pub percentage: u8,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Generic action response envelope for habit mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitActionResponse {
    /// Whether the operation applied a change.
    pub ok: bool,
    /// Optional created habit ID.
    pub habit_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl HabitActionResponse {
    fn applied(message: impl Into<String>, habit_id: Option<String>) -> Self {
        Self {
            ok: true,
            habit_id,
            message: message.into(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            habit_id: None,
            message: message.into(),
        }
    }
}

/// Returns the current habit list with completion progress.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; load failures come back as an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn list_habits() -> HabitListResponse {
    match with_habit_service(|service| list_response(service, "OK.")) {
        Ok(response) => response,
        Err(err) => HabitListResponse {
            items: Vec::new(),
            completed_count: 0,
            total_count: 0,
            percentage: 0,
            message: format!("list_habits failed: {err}"),
        },
    }
}

/// Adds a habit from the add/edit dialog flow.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Empty/whitespace name is rejected without state change.
/// - Never panics; returns the created habit ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_habit(name: String, description: String) -> HabitActionResponse {
    let outcome = with_habit_service(|service| service.add_habit(&name, &description));
    match outcome {
        Ok(Ok(id)) => HabitActionResponse::applied("Habit added.", Some(id)),
        Ok(Err(err)) => HabitActionResponse::rejected(err.to_string()),
        Err(err) => HabitActionResponse::rejected(format!("add_habit failed: {err}")),
    }
}

/// Edits name/description of an existing habit.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Empty/whitespace name is rejected without state change.
/// - Unknown ids leave state unchanged and report `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_habit(id: String, name: String, description: String) -> HabitActionResponse {
    let outcome = with_habit_service(|service| service.edit_habit(&id, &name, &description));
    match outcome {
        Ok(Ok(true)) => HabitActionResponse::applied("Habit updated.", Some(id)),
        Ok(Ok(false)) => HabitActionResponse::rejected("Habit not found."),
        Ok(Err(err)) => HabitActionResponse::rejected(err.to_string()),
        Err(err) => HabitActionResponse::rejected(format!("edit_habit failed: {err}")),
    }
}

/// Toggles today's completion flag for one habit.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown ids leave state unchanged and report `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_habit(id: String) -> HabitActionResponse {
    match with_habit_service(|service| service.toggle_habit(&id)) {
        Ok(true) => HabitActionResponse::applied("Habit toggled.", Some(id)),
        Ok(false) => HabitActionResponse::rejected("Habit not found."),
        Err(err) => HabitActionResponse::rejected(format!("toggle_habit failed: {err}")),
    }
}

/// Deletes one habit. Idempotent for unknown ids.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - The UI confirms deletion with the user before calling.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_habit(id: String) -> HabitActionResponse {
    match with_habit_service(|service| service.delete_habit(&id)) {
        Ok(true) => HabitActionResponse::applied("Habit deleted.", Some(id)),
        Ok(false) => HabitActionResponse::rejected("Habit not found."),
        Err(err) => HabitActionResponse::rejected(format!("delete_habit failed: {err}")),
    }
}

/// Replaces all habits with the built-in default set.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - The UI confirms this destructive reset with the user before calling.
/// - Never panics; returns the restored default list.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_default_habits() -> HabitListResponse {
    let outcome = with_habit_service(|service| {
        service.reset_to_defaults();
        list_response(service, "Defaults restored.")
    });
    match outcome {
        Ok(response) => response,
        Err(err) => HabitListResponse {
            items: Vec::new(),
            completed_count: 0,
            total_count: 0,
            percentage: 0,
            message: format!("reset_default_habits failed: {err}"),
        },
    }
}

fn list_response(
    service: &HabitService<SqliteKeyValueStore<'_>>,
    message: &str,
) -> HabitListResponse {
    let progress = service.progress();
    HabitListResponse {
        items: service.habits().iter().map(to_habit_item).collect(),
        completed_count: progress.completed as u32,
        total_count: progress.total as u32,
        percentage: progress.percentage,
        message: message.to_string(),
    }
}

fn to_habit_item(habit: &Habit) -> HabitItemView {
    HabitItemView {
        id: habit.id.clone(),
        name: habit.name.clone(),
        description: habit.description.clone(),
        completed: habit.completed,
    }
}

fn resolve_habit_db_path() -> PathBuf {
    HABIT_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("HABITLOOP_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(HABIT_DB_FILE_NAME)
        })
        .clone()
}

fn with_habit_service<R>(
    f: impl FnOnce(&mut HabitService<SqliteKeyValueStore<'_>>) -> R,
) -> Result<R, String> {
    let db_path = resolve_habit_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("habit DB open failed: {err}"))?;
    let store = SqliteKeyValueStore::new(&conn);
    let mut service = HabitService::load(SnapshotRepository::new(store));
    Ok(f(&mut service))
}
