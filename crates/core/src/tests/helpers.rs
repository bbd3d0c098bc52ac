// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Location, Scheduler};
use horario_domain::{CourseOffering, Program, Quantity, Section, SectionLabel, SlotId, Weekday};

pub const COMPUTING: &str = "Engenharia de Computação";

pub fn create_test_offering(code: &str, workload: &str) -> CourseOffering {
    CourseOffering::new(Program::new(COMPUTING), code, "Algoritmos", 1, workload)
}

pub fn create_test_section(code: &str, number: u32, block: u8) -> Section {
    Section::for_offering(
        &create_test_offering(code, "32h"),
        SectionLabel::new("VE", number),
        block,
        "Maria",
    )
}

pub fn create_test_scheduler() -> Scheduler {
    Scheduler::new(String::from("20252"), Program::new(COMPUTING))
}

pub fn quantity(n: i64) -> Quantity {
    Quantity::new(n).unwrap()
}

pub fn monday_morning() -> SlotId {
    SlotId::for_cell(Weekday::Segunda, "07:30-09:30")
}

pub fn tuesday_morning() -> SlotId {
    SlotId::for_cell(Weekday::Terca, "07:30-09:30")
}

pub fn slot(id: &SlotId) -> Location {
    Location::Slot(id.clone())
}

pub fn labels(sections: &[Section]) -> Vec<String> {
    sections
        .iter()
        .map(|s| format!("{}/{}", s.section_label, s.meeting_block))
        .collect()
}
