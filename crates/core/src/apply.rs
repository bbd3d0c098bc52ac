// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::{Section, SectionIdentity, SlotId};
use tracing::debug;

use crate::availability::available_sections;
use crate::command::{Command, Location, MoveOutcome};
use crate::error::CoreError;
use crate::factory::{SectionBatch, build_sections};
use crate::registry::InsertOutcome;
use crate::state::{Outcome, Timetable, TransitionResult};

/// Applies a command to the current state, producing a new state.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what changed
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - No free section number is left for the offering's prefix
/// - A move names a source position that holds no section
/// - A move uses the discard target as its source
pub fn apply(state: &Timetable, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateSections {
            offering,
            instructor_name,
            quantity,
        } => {
            let batch: SectionBatch = build_sections(
                &offering,
                &instructor_name,
                quantity,
                &state.created,
                &state.slots,
            )?;

            let mut new_state: Timetable = state.clone();
            new_state.created.append(&offering.code, &batch.sections);
            new_state
                .numbering
                .raise(offering.program.prefix(), batch.high_water);

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::SectionsCreated(batch.sections),
            })
        }
        Command::Move {
            source,
            destination,
            source_index,
            destination_index,
        } => {
            let Some(destination) = destination else {
                return Ok(TransitionResult {
                    new_state: state.clone(),
                    outcome: Outcome::Moved(MoveOutcome::Cancelled),
                });
            };

            let (new_state, outcome) = match source {
                Location::Slot(from) => {
                    move_from_slot(state, &from, &destination, source_index, destination_index)?
                }
                Location::Pool => move_from_pool(state, &destination, source_index, destination_index)?,
                Location::Discard => {
                    return Err(CoreError::InvalidMove(String::from(
                        "the discard target cannot be a move source",
                    )));
                }
            };

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::Moved(outcome),
            })
        }
    }
}

/// Takes a section out of a slot and drops it at `destination`.
///
/// Dropping on the pool or the discard target unplaces the section.
fn move_from_slot(
    state: &Timetable,
    from: &SlotId,
    destination: &Location,
    source_index: usize,
    destination_index: usize,
) -> Result<(Timetable, MoveOutcome), CoreError> {
    let mut new_state: Timetable = state.clone();
    let removed: Section = new_state
        .slots
        .remove(from, source_index)
        .ok_or_else(|| CoreError::SectionNotFound {
            location: Location::Slot(from.clone()).to_string(),
            index: source_index,
        })?;
    let identity: SectionIdentity = removed.identity();

    let outcome: MoveOutcome = match destination {
        Location::Pool | Location::Discard => MoveOutcome::Unplaced { identity },
        Location::Slot(to) => {
            match new_state.slots.insert(to, removed, destination_index) {
                InsertOutcome::Inserted { index } if to == from => MoveOutcome::Reordered {
                    identity,
                    slot: to.clone(),
                    index,
                },
                InsertOutcome::Inserted { index } => MoveOutcome::Placed {
                    identity,
                    slot: to.clone(),
                    index,
                },
                InsertOutcome::Duplicate => {
                    debug!(%identity, slot = %to, "Dropping section already present in destination");
                    MoveOutcome::DuplicateDropped { identity }
                }
            }
        }
    };

    Ok((new_state, outcome))
}

/// Places the pool entry at `source_index` into `destination`.
///
/// The pool is derived, so dropping a pool entry anywhere but a slot changes
/// nothing.
fn move_from_pool(
    state: &Timetable,
    destination: &Location,
    source_index: usize,
    destination_index: usize,
) -> Result<(Timetable, MoveOutcome), CoreError> {
    let mut pool: Vec<Section> = available_sections(&state.created, &state.slots);
    if source_index >= pool.len() {
        return Err(CoreError::SectionNotFound {
            location: Location::Pool.to_string(),
            index: source_index,
        });
    }
    let section: Section = pool.swap_remove(source_index);

    let Location::Slot(to) = destination else {
        return Ok((state.clone(), MoveOutcome::Ignored));
    };

    let identity: SectionIdentity = section.identity();
    let mut new_state: Timetable = state.clone();
    let outcome: MoveOutcome = match new_state.slots.insert(to, section, destination_index) {
        InsertOutcome::Inserted { index } => MoveOutcome::Placed {
            identity,
            slot: to.clone(),
            index,
        },
        InsertOutcome::Duplicate => {
            debug!(%identity, slot = %to, "Dropping section already present in destination");
            MoveOutcome::DuplicateDropped { identity }
        }
    };

    Ok((new_state, outcome))
}
