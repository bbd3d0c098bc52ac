// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario::{Scheduler, SlotRegistry};
use horario_domain::{SlotId, TIME_RANGES, Weekday, standard_slots};

use crate::request_response::{GridCell, GridRow, GridView};

fn cell(registry: &SlotRegistry, slot_id: SlotId) -> GridCell {
    GridCell {
        sections: registry.sections(&slot_id).to_vec(),
        slot_id,
    }
}

/// Arranges placements as time ranges (rows) by weekdays (columns).
#[must_use]
pub fn build_grid_view(scheduler: &Scheduler) -> GridView {
    let registry: &SlotRegistry = &scheduler.state().slots;
    let standard: Vec<SlotId> = standard_slots();

    let rows: Vec<GridRow> = TIME_RANGES
        .iter()
        .map(|range| GridRow {
            time_range: (*range).to_string(),
            cells: Weekday::ALL
                .iter()
                .map(|weekday| cell(registry, SlotId::for_cell(*weekday, range)))
                .collect(),
        })
        .collect();

    let other_slots: Vec<GridCell> = registry
        .iter()
        .filter(|(slot, sections)| !sections.is_empty() && !standard.contains(slot))
        .map(|(slot, _)| cell(registry, slot.clone()))
        .collect();

    GridView {
        weekdays: Weekday::ALL.iter().map(ToString::to_string).collect(),
        rows,
        other_slots,
    }
}
