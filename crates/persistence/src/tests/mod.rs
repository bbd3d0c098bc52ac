// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod snapshot_tests;

use horario::{Location, Scheduler, Snapshot};
use horario_domain::{CourseOffering, Program, Quantity, SlotId, Weekday};

pub const COMPUTING: &str = "Engenharia de Computação";

pub fn create_test_offering(code: &str) -> CourseOffering {
    CourseOffering::new(Program::new(COMPUTING), code, "Cálculo I", 1, "64h")
}

/// Builds a snapshot for `period` holding one 64h section of ECO101, its
/// first meeting block placed on Monday morning.
pub fn create_test_snapshot(period: &str) -> Snapshot {
    let mut scheduler: Scheduler = Scheduler::new(period.to_string(), Program::new(COMPUTING));
    scheduler
        .create_sections(
            &create_test_offering("ECO101"),
            "Maria",
            Quantity::new(1).unwrap(),
        )
        .unwrap();
    scheduler
        .move_section(
            Location::Pool,
            Some(Location::Slot(SlotId::for_cell(
                Weekday::Segunda,
                "07:30-09:30",
            ))),
            0,
            0,
        )
        .unwrap();
    scheduler.serialize_state()
}
