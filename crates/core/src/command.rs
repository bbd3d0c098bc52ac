// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::{CourseOffering, Quantity, SectionIdentity, SlotId};
use serde::{Deserialize, Serialize};

/// One end of a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "slot", rename_all = "snake_case")]
pub enum Location {
    /// The derived pool of unplaced sections.
    Pool,
    /// A grid slot.
    Slot(SlotId),
    /// The discard target. Valid only as a destination.
    Discard,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pool => write!(f, "available pool"),
            Self::Slot(slot) => write!(f, "slot '{slot}'"),
            Self::Discard => write!(f, "discard target"),
        }
    }
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create new sections for an offering.
    CreateSections {
        /// The offering to instantiate.
        offering: CourseOffering,
        /// The instructor teaching every new section.
        instructor_name: String,
        /// How many sections to create.
        quantity: Quantity,
    },
    /// Move a section between the pool, slots and the discard target.
    Move {
        /// Where the section is taken from.
        source: Location,
        /// Where it is dropped. `None` means the drag was cancelled.
        destination: Option<Location>,
        /// Position within the source.
        source_index: usize,
        /// Position within the destination.
        destination_index: usize,
    },
}

/// How a move was interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The section now sits in `slot` at `index`.
    Placed {
        /// The section identity.
        identity: SectionIdentity,
        /// The destination slot.
        slot: SlotId,
        /// The final position within the slot.
        index: usize,
    },
    /// The section moved within its own slot.
    Reordered {
        /// The section identity.
        identity: SectionIdentity,
        /// The slot that was reordered.
        slot: SlotId,
        /// The final position within the slot.
        index: usize,
    },
    /// The section left its slot and is back in the pool.
    Unplaced {
        /// The section identity.
        identity: SectionIdentity,
    },
    /// The destination already held this identity, so the section was dropped.
    DuplicateDropped {
        /// The section identity.
        identity: SectionIdentity,
    },
    /// The drag had no destination; nothing changed.
    Cancelled,
    /// The move has no effect on placements; nothing changed.
    Ignored,
}
