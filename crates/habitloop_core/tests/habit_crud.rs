use habitloop_core::db::open_db_in_memory;
use habitloop_core::{
    HabitService, HabitValidationError, SnapshotRepository, SqliteKeyValueStore,
};
use rusqlite::Connection;
use std::collections::HashSet;

fn service_over(conn: &Connection) -> HabitService<SqliteKeyValueStore<'_>> {
    HabitService::load(SnapshotRepository::new(SqliteKeyValueStore::new(conn)))
}

#[test]
fn first_run_starts_from_six_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = service_over(&conn);

    assert_eq!(service.habits().len(), 6);
    assert!(service.habits().iter().all(|habit| !habit.completed));
    assert_eq!(service.habits()[0].id, "1");
}

#[test]
fn add_appends_uncompleted_habit_with_unique_id() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);

    let id_a = service.add_habit("Floss", "").unwrap();
    let id_b = service.add_habit("Stretch", "5 minutes").unwrap();

    assert_eq!(service.habits().len(), 8);
    let added = service.habits().last().unwrap();
    assert_eq!(added.name, "Stretch");
    assert!(!added.completed);

    let ids: HashSet<_> = service.habits().iter().map(|habit| habit.id.clone()).collect();
    assert_eq!(ids.len(), 8);
    assert_ne!(id_a, id_b);
}

#[test]
fn add_rejects_empty_and_whitespace_names_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);
    let before = service.habits().to_vec();

    assert_eq!(
        service.add_habit("", "desc"),
        Err(HabitValidationError::EmptyName)
    );
    assert_eq!(
        service.add_habit("   ", "desc"),
        Err(HabitValidationError::EmptyName)
    );
    assert_eq!(service.habits(), before.as_slice());
}

#[test]
fn add_trims_name_and_keeps_description_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);

    let id = service.add_habit("  Floss  ", " evening ").unwrap();
    let added = service
        .habits()
        .iter()
        .find(|habit| habit.id == id)
        .unwrap();
    assert_eq!(added.name, "Floss");
    assert_eq!(added.description, " evening ");
}

#[test]
fn toggle_twice_is_an_involution() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);

    assert!(service.toggle_habit("2"));
    assert!(service.habits()[1].completed);
    assert!(service.toggle_habit("2"));
    assert!(!service.habits()[1].completed);
}

#[test]
fn toggle_unknown_id_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);
    let before = service.habits().to_vec();

    assert!(!service.toggle_habit("missing"));
    assert_eq!(service.habits(), before.as_slice());
}

#[test]
fn edit_updates_fields_preserving_id_and_completed() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);
    service.toggle_habit("3");

    let applied = service
        .edit_habit("3", "Read Fiction", "One chapter")
        .unwrap();
    assert!(applied);

    let edited = &service.habits()[2];
    assert_eq!(edited.id, "3");
    assert_eq!(edited.name, "Read Fiction");
    assert_eq!(edited.description, "One chapter");
    assert!(edited.completed);
}

#[test]
fn edit_unknown_id_silently_noops() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);
    let before = service.habits().to_vec();

    let applied = service.edit_habit("missing", "Name", "Desc").unwrap();
    assert!(!applied);
    assert_eq!(service.habits(), before.as_slice());
}

#[test]
fn edit_rejects_empty_name_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);
    let before = service.habits().to_vec();

    assert_eq!(
        service.edit_habit("1", "  ", "desc"),
        Err(HabitValidationError::EmptyName)
    );
    assert_eq!(service.habits(), before.as_slice());
}

#[test]
fn delete_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);

    assert!(service.delete_habit("4"));
    assert_eq!(service.habits().len(), 5);
    assert!(service.habits().iter().all(|habit| habit.id != "4"));

    assert!(!service.delete_habit("4"));
    assert_eq!(service.habits().len(), 5);
}

#[test]
fn reset_restores_fixed_defaults_regardless_of_prior_state() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);

    service.add_habit("Floss", "").unwrap();
    service.toggle_habit("1");
    service.delete_habit("6");
    service.edit_habit("2", "Run", "5k").unwrap();

    service.reset_to_defaults();

    assert_eq!(service.habits().len(), 6);
    assert!(service.habits().iter().all(|habit| !habit.completed));
    assert_eq!(service.habits()[1].name, "Exercise");
    assert_eq!(service.habits()[5].id, "6");
}

#[test]
fn progress_rounds_and_guards_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service_over(&conn);

    let initial = service.progress();
    assert_eq!((initial.completed, initial.total, initial.percentage), (0, 6, 0));

    service.toggle_habit("1");
    let one_of_six = service.progress();
    assert_eq!(
        (one_of_six.completed, one_of_six.total, one_of_six.percentage),
        (1, 6, 17)
    );

    service.add_habit("Floss", "").unwrap();
    assert_eq!(service.progress().total, 7);

    for id in ["1", "2", "3", "4", "5", "6"] {
        service.delete_habit(id);
    }
    let added_id = service.habits()[0].id.clone();
    service.delete_habit(&added_id);

    let empty = service.progress();
    assert_eq!((empty.completed, empty.total, empty.percentage), (0, 0, 0));
}
