// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::{Section, SectionIdentity};
use std::collections::HashSet;

use crate::registry::SlotRegistry;
use crate::state::CreatedSections;

/// Returns the created sections that are not placed in any slot.
///
/// This is recomputed from scratch on every call. Pool indices used by moves
/// refer to positions in this list.
#[must_use]
pub fn available_sections(created: &CreatedSections, slots: &SlotRegistry) -> Vec<Section> {
    let placed: HashSet<SectionIdentity> = slots
        .placed()
        .map(|(_, section)| section.identity())
        .collect();

    created
        .iter()
        .filter(|section| !placed.contains(&section.identity()))
        .cloned()
        .collect()
}
