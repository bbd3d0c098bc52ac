// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use horario::Snapshot;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

use crate::data_models::SnapshotRow;
use crate::diesel_schema::timetable_snapshots;
use crate::error::PersistenceError;

/// Stores `snapshot` under its period, replacing any previous row.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be encoded or the write fails.
pub fn upsert_snapshot(
    conn: &mut SqliteConnection,
    snapshot: &Snapshot,
) -> Result<SnapshotRow, PersistenceError> {
    let row: SnapshotRow = SnapshotRow {
        period: snapshot.period.clone(),
        program: snapshot
            .program
            .as_ref()
            .map(|program| program.name().to_string())
            .unwrap_or_default(),
        snapshot_json: serde_json::to_string(snapshot)?,
        saved_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
    };

    debug!(period = %row.period, bytes = row.snapshot_json.len(), "Writing snapshot row");

    diesel::replace_into(timetable_snapshots::table)
        .values(&row)
        .execute(conn)?;

    Ok(row)
}
