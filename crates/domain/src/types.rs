// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Numbering prefix used for programs missing from the prefix table.
pub const DEFAULT_PREFIX: &str = "VE";

/// Program name to section-label prefix.
const PROGRAM_PREFIXES: &[(&str, &str)] = &[
    ("Engenharia de Computação", "VE"),
    ("Engenharia de Controle e Automação", "VC"),
    ("Engenharia Química", "VQ"),
    ("Engenharia de Transportes", "VT"),
    ("Engenharia de Minas", "VM"),
    (Program::ELECTIVES, "VO"),
];

/// A program of study.
///
/// The program determines the numbering namespace of its sections through
/// the prefix table. Two programs that share a prefix share a namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    name: String,
}

impl Program {
    /// The pseudo-program that groups elective offerings.
    pub const ELECTIVES: &'static str = "Optativas";

    /// Creates a new `Program`.
    ///
    /// # Arguments
    ///
    /// * `name` - The program name as it appears in the catalog
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Returns the electives pseudo-program.
    #[must_use]
    pub fn electives() -> Self {
        Self::new(Self::ELECTIVES)
    }

    /// Returns the program name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether this is the electives pseudo-program.
    #[must_use]
    pub fn is_electives(&self) -> bool {
        self.name == Self::ELECTIVES
    }

    /// Returns the section-label prefix for this program.
    ///
    /// Unknown programs fall back to [`DEFAULT_PREFIX`].
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        PROGRAM_PREFIXES
            .iter()
            .find(|(name, _)| *name == self.name)
            .map_or(DEFAULT_PREFIX, |&(_, prefix)| prefix)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A workload descriptor such as `"64h"`.
///
/// The descriptor is free text; only the total contact hours embedded in it
/// matter to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workload {
    descriptor: String,
}

impl Workload {
    /// Creates a new `Workload`, trimming surrounding whitespace.
    #[must_use]
    pub fn new(descriptor: &str) -> Self {
        Self {
            descriptor: descriptor.trim().to_string(),
        }
    }

    /// Returns the descriptor text.
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// Returns the number of weekly meeting blocks this workload requires.
    ///
    /// 96 hours meet three times a week, 64 hours twice and 32 hours once.
    /// Anything else meets once. The larger totals are checked first, so a
    /// split descriptor such as `"64h (32T+32P)"` meets twice.
    #[must_use]
    pub fn meeting_blocks(&self) -> u8 {
        if self.descriptor.contains("96") {
            3
        } else if self.descriptor.contains("64") {
            2
        } else {
            1
        }
    }
}

/// Extracts the section number from a label.
///
/// The number is the first maximal run of ASCII digits (`"VE12"` is 12).
/// A label without digits extracts to 0, which never collides with an
/// allocated number. Runs too large for `u32` saturate.
#[must_use]
pub fn extract_number(label: &str) -> u32 {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

/// A section label such as `"VE3"`: program prefix plus section number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionLabel {
    value: String,
}

impl SectionLabel {
    /// Builds a label from a prefix and a section number.
    #[must_use]
    pub fn new(prefix: &str, number: u32) -> Self {
        Self {
            value: format!("{prefix}{number}"),
        }
    }

    /// Wraps an existing label string without validation.
    #[must_use]
    pub fn from_raw(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the label text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the section number embedded in the label.
    #[must_use]
    pub fn number(&self) -> u32 {
        extract_number(&self.value)
    }
}

impl std::fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A catalog entry for a course offered by a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    /// The program offering the course.
    pub program: Program,
    /// The offering code, unique within the program.
    pub code: String,
    /// The course title.
    pub title: String,
    /// The semester index; 0 marks an elective.
    pub semester: u8,
    /// The workload descriptor.
    pub workload: Workload,
}

impl CourseOffering {
    /// Creates a new `CourseOffering`.
    #[must_use]
    pub fn new(program: Program, code: &str, title: &str, semester: u8, workload: &str) -> Self {
        Self {
            program,
            code: code.to_string(),
            title: title.to_string(),
            semester,
            workload: Workload::new(workload),
        }
    }

    /// Returns whether the offering has no fixed semester.
    #[must_use]
    pub const fn is_elective(&self) -> bool {
        self.semester == 0
    }
}

/// The placement identity of a section.
///
/// Two section records with the same identity are the same placeable item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionIdentity {
    /// The offering code.
    pub offering_code: String,
    /// The section label.
    pub section_label: SectionLabel,
    /// The meeting block index.
    pub meeting_block: u8,
}

impl std::fmt::Display for SectionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.offering_code, self.section_label, self.meeting_block
        )
    }
}

/// One meeting block of a section ("turma") taught by one instructor.
///
/// A section whose workload needs several weekly meetings is represented by
/// one record per meeting block, all sharing the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// The offering this section instantiates.
    pub offering_code: String,
    /// The program the offering belongs to.
    pub program: Program,
    /// The section label.
    pub section_label: SectionLabel,
    /// The meeting block index, starting at 1.
    pub meeting_block: u8,
    /// The instructor's name.
    pub instructor_name: String,
    /// The course title, copied from the offering.
    pub title: String,
    /// The semester index, copied from the offering.
    pub semester: u8,
    /// The workload descriptor, copied from the offering.
    pub workload: Workload,
}

impl Section {
    /// Builds one meeting-block record of a section for an offering.
    #[must_use]
    pub fn for_offering(
        offering: &CourseOffering,
        section_label: SectionLabel,
        meeting_block: u8,
        instructor_name: &str,
    ) -> Self {
        Self {
            offering_code: offering.code.clone(),
            program: offering.program.clone(),
            section_label,
            meeting_block,
            instructor_name: instructor_name.to_string(),
            title: offering.title.clone(),
            semester: offering.semester,
            workload: offering.workload.clone(),
        }
    }

    /// Returns the placement identity of this record.
    #[must_use]
    pub fn identity(&self) -> SectionIdentity {
        SectionIdentity {
            offering_code: self.offering_code.clone(),
            section_label: self.section_label.clone(),
            meeting_block: self.meeting_block,
        }
    }

    /// Returns whether this record has the given placement identity.
    #[must_use]
    pub fn has_identity(&self, identity: &SectionIdentity) -> bool {
        self.offering_code == identity.offering_code
            && self.section_label == identity.section_label
            && self.meeting_block == identity.meeting_block
    }

    /// Returns whether this record belongs to the numbering namespace `prefix`.
    #[must_use]
    pub fn in_namespace(&self, prefix: &str) -> bool {
        self.program.prefix() == prefix
    }

    /// Returns the section number embedded in the label.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.section_label.number()
    }
}
