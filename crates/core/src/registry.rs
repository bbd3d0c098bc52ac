// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::{Section, SectionIdentity, SlotId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of inserting a section into a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The section was inserted at `index`.
    Inserted {
        /// The final position within the slot.
        index: usize,
    },
    /// The slot already holds this identity; nothing changed.
    Duplicate,
}

/// Placed sections per slot, in display order.
///
/// No slot ever holds two records with the same identity. Keeping an identity
/// in at most one slot is the coordinator's job, since only it sees both ends
/// of a move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotRegistry {
    slots: BTreeMap<SlotId, Vec<Section>>,
}

impl SlotRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Returns the sections placed in a slot.
    #[must_use]
    pub fn sections(&self, slot: &SlotId) -> &[Section] {
        self.slots
            .get(slot)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether a slot holds a section with this identity.
    #[must_use]
    pub fn contains(&self, slot: &SlotId, identity: &SectionIdentity) -> bool {
        self.sections(slot)
            .iter()
            .any(|section| section.has_identity(identity))
    }

    /// Inserts a section into a slot at `index`.
    ///
    /// Indices past the end append. The insert is refused when the slot
    /// already holds the same identity.
    pub fn insert(&mut self, slot: &SlotId, section: Section, index: usize) -> InsertOutcome {
        if self.contains(slot, &section.identity()) {
            return InsertOutcome::Duplicate;
        }

        let list: &mut Vec<Section> = self.slots.entry(slot.clone()).or_default();
        let index: usize = index.min(list.len());
        list.insert(index, section);
        InsertOutcome::Inserted { index }
    }

    /// Removes and returns the section at `index` of a slot.
    ///
    /// Returns `None` when the slot is unknown or the index is out of range.
    pub fn remove(&mut self, slot: &SlotId, index: usize) -> Option<Section> {
        let list: &mut Vec<Section> = self.slots.get_mut(slot)?;
        if index < list.len() {
            Some(list.remove(index))
        } else {
            None
        }
    }

    /// Iterates over slots and their sections in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&SlotId, &[Section])> {
        self.slots
            .iter()
            .map(|(slot, list)| (slot, list.as_slice()))
    }

    /// Iterates over every placed section with its slot.
    pub fn placed(&self) -> impl Iterator<Item = (&SlotId, &Section)> {
        self.slots
            .iter()
            .flat_map(|(slot, list)| list.iter().map(move |section| (slot, section)))
    }

    /// Returns the number of placed section records.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }
}
