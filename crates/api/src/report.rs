// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delimited-text report of placed sections.
//!
//! One row per placed section record, every field quoted. Rows follow the
//! standard grid row by row; placements in other slots come last, by slot
//! identifier.

use horario::{Scheduler, SlotRegistry};
use horario_domain::{Section, SlotId, standard_slots};

use crate::error::ApiError;

/// Header line of the report.
pub const REPORT_HEADER: &str = "Curso,Disciplina,Turma,Professor,Horário,Carga Horária";

const MISSING: &str = "N/A";

fn or_missing(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING
    } else {
        value
    }
}

/// Returns the slots holding placements, in report order.
fn report_order(registry: &SlotRegistry) -> Vec<SlotId> {
    let standard: Vec<SlotId> = standard_slots();
    let mut ordered: Vec<SlotId> = standard
        .iter()
        .filter(|slot| !registry.sections(slot).is_empty())
        .cloned()
        .collect();
    ordered.extend(
        registry
            .iter()
            .filter(|(slot, sections)| !sections.is_empty() && !standard.contains(slot))
            .map(|(slot, _)| slot.clone()),
    );
    ordered
}

fn report_row(slot: &SlotId, section: &Section) -> [String; 6] {
    [
        or_missing(section.program.name()).to_string(),
        or_missing(&section.title).to_string(),
        or_missing(section.section_label.value()).to_string(),
        or_missing(&section.instructor_name).to_string(),
        slot.time_label(),
        or_missing(section.workload.descriptor()).to_string(),
    ]
}

/// Renders the placed sections as CSV.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn export_report(scheduler: &Scheduler) -> Result<String, ApiError> {
    let registry: &SlotRegistry = &scheduler.state().slots;

    let mut buffer: Vec<u8> = format!("{REPORT_HEADER}\n").into_bytes();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buffer);

        for slot in report_order(registry) {
            for section in registry.sections(&slot) {
                writer
                    .write_record(report_row(&slot, section))
                    .map_err(|e| ApiError::Internal {
                        message: format!("Failed to write report row: {e}"),
                    })?;
            }
        }

        writer.flush().map_err(|e| ApiError::Internal {
            message: format!("Failed to flush report: {e}"),
        })?;
    }

    String::from_utf8(buffer).map_err(|e| ApiError::Internal {
        message: format!("Report is not valid UTF-8: {e}"),
    })
}
