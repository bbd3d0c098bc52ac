// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::Section;
use std::collections::BTreeSet;

use crate::registry::SlotRegistry;
use crate::state::CreatedSections;

/// Collects the section numbers in use for a numbering prefix.
///
/// Both created and placed sections count, so a number stays taken for the
/// life of the period even after its section leaves every slot.
#[must_use]
pub fn used_numbers(
    prefix: &str,
    created: &CreatedSections,
    slots: &SlotRegistry,
) -> BTreeSet<u32> {
    created
        .iter()
        .chain(slots.placed().map(|(_, section)| section))
        .filter(|section| section.in_namespace(prefix))
        .map(Section::number)
        .collect()
}

/// Hands out the smallest positive section numbers not yet in use.
///
/// Each allocation is recorded, so a batch of allocations never repeats a
/// number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberAllocator {
    used: BTreeSet<u32>,
    next: u32,
}

impl NumberAllocator {
    /// Creates an allocator over an existing used-set.
    #[must_use]
    pub const fn new(used: BTreeSet<u32>) -> Self {
        Self { used, next: 1 }
    }

    /// Creates an allocator for a prefix from the live sections.
    #[must_use]
    pub fn for_prefix(prefix: &str, created: &CreatedSections, slots: &SlotRegistry) -> Self {
        Self::new(used_numbers(prefix, created, slots))
    }

    /// Allocates the next free number.
    ///
    /// The scan continues from the previous allocation; numbers below it are
    /// already known to be taken. Returns `None` once `u32` is exhausted.
    pub fn allocate(&mut self) -> Option<u32> {
        while self.used.contains(&self.next) {
            self.next = self.next.checked_add(1)?;
        }
        let number: u32 = self.next;
        self.used.insert(number);
        self.next = self.next.saturating_add(1);
        Some(number)
    }

    /// Returns the highest number in use, or 0 when none is.
    #[must_use]
    pub fn high_water(&self) -> u32 {
        self.used.last().copied().unwrap_or(0)
    }
}
