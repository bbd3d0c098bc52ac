// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_section, labels, monday_morning};
use crate::{CreatedSections, SlotRegistry, available_sections};
use horario_domain::Section;

fn create_three_sections() -> CreatedSections {
    let mut created: CreatedSections = CreatedSections::new();
    created.append(
        "ECO101",
        &[
            create_test_section("ECO101", 1, 1),
            create_test_section("ECO101", 2, 1),
            create_test_section("ECO101", 3, 1),
        ],
    );
    created
}

#[test]
fn test_nothing_placed_means_everything_available() {
    let created: CreatedSections = create_three_sections();

    let available: Vec<Section> = available_sections(&created, &SlotRegistry::new());

    assert_eq!(labels(&available), vec!["VE1/1", "VE2/1", "VE3/1"]);
}

#[test]
fn test_placed_sections_are_excluded() {
    let created: CreatedSections = create_three_sections();
    let mut slots: SlotRegistry = SlotRegistry::new();
    slots.insert(&monday_morning(), create_test_section("ECO101", 2, 1), 0);

    let available: Vec<Section> = available_sections(&created, &slots);

    assert_eq!(labels(&available), vec!["VE1/1", "VE3/1"]);
}

#[test]
fn test_identity_match_ignores_instructor() {
    let created: CreatedSections = create_three_sections();
    let mut placed: Section = create_test_section("ECO101", 1, 1);
    placed.instructor_name = String::from("Outro");
    let mut slots: SlotRegistry = SlotRegistry::new();
    slots.insert(&monday_morning(), placed, 0);

    let available: Vec<Section> = available_sections(&created, &slots);

    assert_eq!(labels(&available), vec!["VE2/1", "VE3/1"]);
}

#[test]
fn test_other_meeting_block_stays_available() {
    let mut created: CreatedSections = CreatedSections::new();
    created.append(
        "ECO101",
        &[
            create_test_section("ECO101", 1, 1),
            create_test_section("ECO101", 1, 2),
        ],
    );
    let mut slots: SlotRegistry = SlotRegistry::new();
    slots.insert(&monday_morning(), create_test_section("ECO101", 1, 1), 0);

    let available: Vec<Section> = available_sections(&created, &slots);

    assert_eq!(labels(&available), vec!["VE1/2"]);
}

#[test]
fn test_same_label_of_other_offering_stays_available() {
    let mut created: CreatedSections = create_three_sections();
    created.append("ECO202", &[create_test_section("ECO202", 1, 1)]);
    let mut slots: SlotRegistry = SlotRegistry::new();
    slots.insert(&monday_morning(), create_test_section("ECO101", 1, 1), 0);

    let available: Vec<Section> = available_sections(&created, &slots);

    assert_eq!(available.len(), 3);
    assert!(available.iter().any(|s| s.offering_code == "ECO202"));
}
