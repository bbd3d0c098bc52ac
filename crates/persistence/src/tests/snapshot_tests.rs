// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::RunQueryDsl;
use horario::Snapshot;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::timetable_snapshots;
use crate::tests::{COMPUTING, create_test_snapshot};
use crate::{Persistence, PersistenceError, SnapshotRow};

#[test]
fn test_load_missing_period_returns_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let loaded: Option<Snapshot> = persistence.load_snapshot("20252").unwrap();

    assert!(loaded.is_none());
}

#[test]
fn test_save_then_load_returns_same_snapshot() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let snapshot: Snapshot = create_test_snapshot("20252");

    persistence.save_snapshot(&snapshot).unwrap();
    let loaded: Snapshot = persistence.load_snapshot("20252").unwrap().unwrap();

    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.slots.placed_count(), 1);
}

#[test]
fn test_save_replaces_previous_snapshot_for_period() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .save_snapshot(&create_test_snapshot("20252"))
        .unwrap();

    let empty: Snapshot = Snapshot {
        period: String::from("20252"),
        ..Snapshot::default()
    };
    persistence.save_snapshot(&empty).unwrap();

    let loaded: Snapshot = persistence.load_snapshot("20252").unwrap().unwrap();
    assert!(loaded.created_sections.is_empty());
    assert_eq!(persistence.list_periods().unwrap(), vec!["20252"]);
}

#[test]
fn test_periods_are_independent() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .save_snapshot(&create_test_snapshot("20261"))
        .unwrap();
    persistence
        .save_snapshot(&Snapshot {
            period: String::from("20252"),
            ..Snapshot::default()
        })
        .unwrap();

    assert_eq!(
        persistence.list_periods().unwrap(),
        vec!["20252", "20261"]
    );
    assert_eq!(
        persistence
            .load_snapshot("20261")
            .unwrap()
            .unwrap()
            .created_sections
            .len(),
        2
    );
}

#[test]
fn test_saved_at_is_rfc3339() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let saved_at: String = persistence
        .save_snapshot(&create_test_snapshot("20252"))
        .unwrap();

    assert!(OffsetDateTime::parse(&saved_at, &Rfc3339).is_ok());
}

#[test]
fn test_program_column_records_snapshot_program() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence
        .save_snapshot(&create_test_snapshot("20252"))
        .unwrap();

    let rows: Vec<SnapshotRow> = timetable_snapshots::table
        .load::<SnapshotRow>(&mut persistence.conn)
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].program, COMPUTING);
}

#[test]
fn test_corrupt_snapshot_is_a_serialization_error() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    diesel::insert_into(timetable_snapshots::table)
        .values(&SnapshotRow {
            period: String::from("20252"),
            program: String::from(COMPUTING),
            snapshot_json: String::from("{not json"),
            saved_at: String::from("2026-01-10T00:00:00Z"),
        })
        .execute(&mut persistence.conn)
        .unwrap();

    let result: Result<Option<Snapshot>, PersistenceError> = persistence.load_snapshot("20252");

    assert!(matches!(
        result,
        Err(PersistenceError::SerializationError(_))
    ));
}
