// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::{CourseOffering, Quantity, Section, SectionLabel};

use crate::allocator::NumberAllocator;
use crate::error::CoreError;
use crate::registry::SlotRegistry;
use crate::state::CreatedSections;

/// The records produced by one section-creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBatch {
    /// One record per meeting block of each new section.
    pub sections: Vec<Section>,
    /// The highest number in use for the prefix after allocation.
    pub high_water: u32,
}

/// Expands a creation request into section records.
///
/// Each of the `quantity` sections gets a fresh number and one record per
/// meeting block required by the offering's workload. Nothing is mutated;
/// the caller appends the batch.
///
/// # Errors
///
/// Returns `CoreError::NumberingExhausted` if the prefix has no free number.
pub fn build_sections(
    offering: &CourseOffering,
    instructor_name: &str,
    quantity: Quantity,
    created: &CreatedSections,
    slots: &SlotRegistry,
) -> Result<SectionBatch, CoreError> {
    let prefix: &str = offering.program.prefix();
    let blocks: u8 = offering.workload.meeting_blocks();
    let mut allocator: NumberAllocator = NumberAllocator::for_prefix(prefix, created, slots);

    let mut sections: Vec<Section> = Vec::new();
    for _ in 0..quantity.get() {
        let number: u32 = allocator
            .allocate()
            .ok_or_else(|| CoreError::NumberingExhausted {
                prefix: prefix.to_string(),
            })?;
        let label: SectionLabel = SectionLabel::new(prefix, number);
        for block in 1..=blocks {
            sections.push(Section::for_offering(
                offering,
                label.clone(),
                block,
                instructor_name,
            ));
        }
    }

    Ok(SectionBatch {
        sections,
        high_water: allocator.high_water(),
    })
}
