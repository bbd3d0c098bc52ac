// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::{Program, Section};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::command::MoveOutcome;
use crate::registry::SlotRegistry;

/// Every section ever generated, grouped by offering code.
///
/// Offerings keep the order in which their first sections were created, and
/// that order carries through serialization. Entries are only ever appended. Placing or discarding a section changes
/// where it appears, never whether it was created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedSections {
    by_offering: IndexMap<String, Vec<Section>>,
}

impl CreatedSections {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_offering: IndexMap::new(),
        }
    }

    /// Appends sections under an offering code, after any existing ones.
    pub(crate) fn append(&mut self, offering_code: &str, sections: &[Section]) {
        self.by_offering
            .entry(offering_code.to_string())
            .or_default()
            .extend_from_slice(sections);
    }

    /// Returns the sections created for an offering.
    #[must_use]
    pub fn for_offering(&self, offering_code: &str) -> &[Section] {
        self.by_offering
            .get(offering_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over all created sections, offering by offering.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.by_offering.values().flatten()
    }

    /// Returns the total number of section records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_offering.values().map(Vec::len).sum()
    }

    /// Returns whether no section has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Highest section number seen per numbering prefix.
///
/// This is a hint carried in snapshots. Allocation always scans the live
/// sections instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberingCache {
    high_water: BTreeMap<String, u32>,
}

impl NumberingCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            high_water: BTreeMap::new(),
        }
    }

    /// Recomputes the cache from the created sections.
    #[must_use]
    pub fn rebuild(created: &CreatedSections) -> Self {
        let mut cache: Self = Self::new();
        for section in created.iter() {
            cache.raise(section.program.prefix(), section.number());
        }
        cache
    }

    /// Raises the mark for a prefix to `number` if it is higher.
    pub(crate) fn raise(&mut self, prefix: &str, number: u32) {
        let mark: &mut u32 = self.high_water.entry(prefix.to_string()).or_insert(0);
        *mark = (*mark).max(number);
    }

    /// Returns the mark for a prefix, or 0 when none is recorded.
    #[must_use]
    pub fn get(&self, prefix: &str) -> u32 {
        self.high_water.get(prefix).copied().unwrap_or(0)
    }
}

/// The full timetable state for one period selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    /// The academic period this state belongs to (e.g. `"20252"`).
    pub period: String,
    /// The currently selected program.
    pub program: Program,
    /// All sections ever created in this period.
    pub created: CreatedSections,
    /// Current slot placements.
    pub slots: SlotRegistry,
    /// Per-prefix numbering high-water marks.
    pub numbering: NumberingCache,
}

impl Timetable {
    /// Creates an empty timetable for a period and program.
    #[must_use]
    pub fn new(period: String, program: Program) -> Self {
        Self {
            period,
            program,
            created: CreatedSections::new(),
            slots: SlotRegistry::new(),
            numbering: NumberingCache::new(),
        }
    }

    /// Converts the state to its wire snapshot.
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            period: self.period.clone(),
            program: Some(self.program.clone()),
            created_sections: self.created.clone(),
            numbering_cache: self.numbering.clone(),
            slots: self.slots.clone(),
        }
    }
}

/// Serialized form of a timetable, as exchanged with the store.
///
/// Every field is optional on input: a stored record may carry only the
/// created sections and slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// The academic period.
    pub period: String,
    /// The program selected when the snapshot was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<Program>,
    /// All created sections.
    pub created_sections: CreatedSections,
    /// Numbering high-water marks.
    pub numbering_cache: NumberingCache,
    /// Slot placements.
    pub slots: SlotRegistry,
}

/// What a successful transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// New section records were created.
    SectionsCreated(Vec<Section>),
    /// A move was interpreted.
    Moved(MoveOutcome),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: Timetable,
    /// What the transition did.
    pub outcome: Outcome,
}
