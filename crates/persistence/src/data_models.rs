// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;

use crate::diesel_schema::timetable_snapshots;

/// One stored timetable, keyed by period.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = timetable_snapshots)]
pub struct SnapshotRow {
    pub period: String,
    pub program: String,
    pub snapshot_json: String,
    pub saved_at: String,
}
