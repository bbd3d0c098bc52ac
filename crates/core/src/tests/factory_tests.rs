// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_offering, create_test_section, labels, monday_morning, quantity,
};
use crate::{CreatedSections, SectionBatch, SlotRegistry, build_sections};
use horario_domain::{CourseOffering, Program};

#[test]
fn test_build_expands_each_section_into_meeting_blocks() {
    let offering: CourseOffering = create_test_offering("ECO101", "64h");

    let batch: SectionBatch = build_sections(
        &offering,
        "Maria",
        quantity(2),
        &CreatedSections::new(),
        &SlotRegistry::new(),
    )
    .unwrap();

    assert_eq!(labels(&batch.sections), vec!["VE1/1", "VE1/2", "VE2/1", "VE2/2"]);
    assert!(batch.sections.iter().all(|s| s.instructor_name == "Maria"));
    assert!(batch.sections.iter().all(|s| s.offering_code == "ECO101"));
    assert_eq!(batch.high_water, 2);
}

#[test]
fn test_build_with_split_workload_uses_total_hours() {
    let offering: CourseOffering = create_test_offering("ECO101", "64h (32T+32P)");

    let batch: SectionBatch = build_sections(
        &offering,
        "Maria",
        quantity(1),
        &CreatedSections::new(),
        &SlotRegistry::new(),
    )
    .unwrap();

    assert_eq!(labels(&batch.sections), vec!["VE1/1", "VE1/2"]);
}

#[test]
fn test_build_uses_three_blocks_for_96_hours() {
    let offering: CourseOffering = create_test_offering("ECO101", "96h");

    let batch: SectionBatch = build_sections(
        &offering,
        "Maria",
        quantity(1),
        &CreatedSections::new(),
        &SlotRegistry::new(),
    )
    .unwrap();

    assert_eq!(labels(&batch.sections), vec!["VE1/1", "VE1/2", "VE1/3"]);
}

#[test]
fn test_build_skips_numbers_used_by_other_offerings_of_program() {
    let mut created: CreatedSections = CreatedSections::new();
    created.append("ECO999", &[create_test_section("ECO999", 1, 1)]);
    let mut slots: SlotRegistry = SlotRegistry::new();
    slots.insert(&monday_morning(), create_test_section("ECO888", 3, 1), 0);

    let batch: SectionBatch = build_sections(
        &create_test_offering("ECO101", "32h"),
        "Maria",
        quantity(3),
        &created,
        &slots,
    )
    .unwrap();

    assert_eq!(labels(&batch.sections), vec!["VE2/1", "VE4/1", "VE5/1"]);
    assert_eq!(batch.high_water, 5);
}

#[test]
fn test_build_uses_program_prefix() {
    let offering: CourseOffering =
        CourseOffering::new(Program::new("Engenharia Química"), "QUI101", "Química", 1, "32h");

    let batch: SectionBatch = build_sections(
        &offering,
        "Ana",
        quantity(1),
        &CreatedSections::new(),
        &SlotRegistry::new(),
    )
    .unwrap();

    assert_eq!(batch.sections[0].section_label.value(), "VQ1");
}

#[test]
fn test_other_programs_do_not_consume_numbers() {
    let mut created: CreatedSections = CreatedSections::new();
    created.append("ECO101", &[create_test_section("ECO101", 1, 1)]);
    let mining: CourseOffering =
        CourseOffering::new(Program::new("Engenharia de Minas"), "MIN101", "Geologia", 1, "32h");

    let batch: SectionBatch = build_sections(
        &mining,
        "Ana",
        quantity(1),
        &created,
        &SlotRegistry::new(),
    )
    .unwrap();

    assert_eq!(batch.sections[0].section_label.value(), "VM1");
}
