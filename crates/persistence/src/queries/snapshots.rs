// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use horario::Snapshot;

use crate::data_models::SnapshotRow;
use crate::diesel_schema::timetable_snapshots;
use crate::error::PersistenceError;

/// Retrieves the stored snapshot for a period.
///
/// Returns `None` when nothing was ever saved for `period`.
///
/// # Errors
///
/// Returns an error if the query fails or the stored JSON cannot be
/// decoded.
pub fn find_snapshot(
    conn: &mut SqliteConnection,
    period: &str,
) -> Result<Option<Snapshot>, PersistenceError> {
    let row: Option<SnapshotRow> = timetable_snapshots::table
        .filter(timetable_snapshots::period.eq(period))
        .select(SnapshotRow::as_select())
        .first::<SnapshotRow>(conn)
        .optional()?;

    row.map(|row| serde_json::from_str::<Snapshot>(&row.snapshot_json))
        .transpose()
        .map_err(PersistenceError::from)
}

/// Lists every period with a stored snapshot, in ascending order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_periods(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    Ok(timetable_snapshots::table
        .select(timetable_snapshots::period)
        .order(timetable_snapshots::period.asc())
        .load::<String>(conn)?)
}
