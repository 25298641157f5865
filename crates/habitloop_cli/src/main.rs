//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `habitloop_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use habitloop_core::db::open_db_in_memory;
use habitloop_core::{HabitService, SnapshotRepository, SqliteKeyValueStore};

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup. In-memory DB, so nothing is left behind.
    println!("habitloop_core ping={}", habitloop_core::ping());
    println!("habitloop_core version={}", habitloop_core::core_version());

    let Ok(conn) = open_db_in_memory() else {
        eprintln!("habitloop_core db_open=failed");
        std::process::exit(1);
    };
    let service = HabitService::load(SnapshotRepository::new(SqliteKeyValueStore::new(&conn)));
    let progress = service.progress();
    println!(
        "habitloop_core defaults={} completed={} percentage={}",
        progress.total, progress.completed, progress.percentage
    );
}
