// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers take the scheduler, catalog and store they need as explicit
//! arguments. Locking and transport belong to the server.

use horario::{MoveOutcome, Scheduler, Snapshot};
use horario_domain::{Catalog, CourseOffering, Program, Quantity, Section};
use horario_persistence::Persistence;
use tracing::{info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CatalogResponse, CreateSectionsRequest, CreateSectionsResponse, ListAvailableResponse,
    MoveRequest, MoveResponse, SaveResponse, StoredPeriodsResponse, SwitchPeriodRequest,
    SwitchPeriodResponse,
};

fn require_period(period: &str) -> Result<&str, ApiError> {
    let trimmed: &str = period.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("period"),
            message: String::from("Period must not be empty"),
        });
    }
    Ok(trimmed)
}

/// Lists the offerings of a program.
///
/// When `program` is `None` the scheduler's selected program is listed.
#[must_use]
pub fn get_catalog(
    catalog: &Catalog,
    scheduler: &Scheduler,
    program: Option<&str>,
) -> CatalogResponse {
    let program: Program = program.map_or_else(|| scheduler.program().clone(), Program::new);

    CatalogResponse {
        program: program.name().to_string(),
        programs: catalog
            .programs()
            .iter()
            .map(|p| p.name().to_string())
            .collect(),
        offerings: catalog.offerings_for(&program).to_vec(),
    }
}

/// Creates sections of an offering listed for the selected program.
///
/// The quantity arrives as raw text and is validated before anything else.
///
/// # Errors
///
/// Returns an error if:
/// - The quantity is not a positive integer
/// - The selected program does not list the offering
/// - No section number is left
pub fn create_sections(
    scheduler: &mut Scheduler,
    catalog: &Catalog,
    request: &CreateSectionsRequest,
) -> Result<CreateSectionsResponse, ApiError> {
    let quantity: Quantity = Quantity::parse(&request.quantity).map_err(translate_domain_error)?;

    let offering: CourseOffering = catalog
        .find(scheduler.program(), request.offering_code.trim())
        .map_err(translate_domain_error)?
        .clone();

    let sections: Vec<Section> = scheduler
        .create_sections(&offering, request.instructor_name.trim(), quantity)
        .map_err(translate_core_error)?;

    Ok(CreateSectionsResponse {
        message: format!(
            "Created {} section(s) of {} ({} record(s))",
            quantity.get(),
            offering.code,
            sections.len()
        ),
        sections,
    })
}

/// Applies a move and reports how it was interpreted.
///
/// # Errors
///
/// Returns an error if the source position holds no section or the source
/// is the discard target. The state is unchanged in that case.
pub fn move_section(
    scheduler: &mut Scheduler,
    request: MoveRequest,
) -> Result<MoveResponse, ApiError> {
    let outcome: MoveOutcome = scheduler
        .move_section(
            request.source,
            request.destination,
            request.source_index,
            request.destination_index,
        )
        .map_err(translate_core_error)?;

    Ok(MoveResponse {
        outcome,
        available_count: scheduler.available_sections().len(),
    })
}

/// Lists the sections not placed in any slot.
#[must_use]
pub fn list_available(scheduler: &Scheduler) -> ListAvailableResponse {
    ListAvailableResponse {
        sections: scheduler.available_sections(),
    }
}

/// Exports the current state.
#[must_use]
pub fn get_snapshot(scheduler: &Scheduler) -> Snapshot {
    scheduler.serialize_state()
}

/// Switches to another period, loading its stored timetable.
///
/// A period with no stored snapshot, or whose snapshot cannot be read,
/// starts from an empty timetable.
///
/// # Errors
///
/// Returns an error if the period is empty.
pub fn switch_period(
    scheduler: &mut Scheduler,
    persistence: &mut Persistence,
    request: &SwitchPeriodRequest,
) -> Result<SwitchPeriodResponse, ApiError> {
    let period: &str = require_period(&request.period)?;

    if let Some(program) = &request.program {
        scheduler.select_program(Program::new(program));
    }

    let loaded: bool = match persistence.load_snapshot(period) {
        Ok(Some(snapshot)) => {
            scheduler.load_state(period, Some(snapshot));
            true
        }
        Ok(None) => {
            info!(period, "No stored timetable, starting empty");
            scheduler.reset(period);
            false
        }
        Err(e) => {
            warn!(period, error = %e, "Failed to load stored timetable, starting empty");
            scheduler.reset(period);
            false
        }
    };

    Ok(SwitchPeriodResponse {
        period: scheduler.period().to_string(),
        program: scheduler.program().name().to_string(),
        loaded,
        created_count: scheduler.state().created.len(),
        placed_count: scheduler.state().slots.placed_count(),
    })
}

/// Saves the current state under its period.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn save(scheduler: &Scheduler, persistence: &mut Persistence) -> Result<SaveResponse, ApiError> {
    store_snapshot(persistence, &scheduler.serialize_state())
}

/// Reads the stored snapshot of a period.
///
/// # Errors
///
/// Returns an error if the period is empty or the store fails.
pub fn fetch_stored(
    persistence: &mut Persistence,
    period: &str,
) -> Result<Option<Snapshot>, ApiError> {
    let period: &str = require_period(period)?;
    Ok(persistence.load_snapshot(period)?)
}

/// Lists the periods that have a stored timetable.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn list_stored_periods(
    persistence: &mut Persistence,
) -> Result<StoredPeriodsResponse, ApiError> {
    Ok(StoredPeriodsResponse {
        periods: persistence.list_periods()?,
    })
}

/// Writes a snapshot to the store, replacing whatever its period held.
///
/// # Errors
///
/// Returns an error if the snapshot has no period or the store fails.
pub fn store_snapshot(
    persistence: &mut Persistence,
    snapshot: &Snapshot,
) -> Result<SaveResponse, ApiError> {
    let period: String = require_period(&snapshot.period)?.to_string();
    let saved_at: String = persistence.save_snapshot(snapshot)?;

    Ok(SaveResponse {
        message: format!("Timetable for period {period} saved"),
        period,
        saved_at,
    })
}
