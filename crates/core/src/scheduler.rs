// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::{CourseOffering, Program, Quantity, Section};
use tracing::info;

use crate::apply::apply;
use crate::availability::available_sections;
use crate::command::{Command, Location, MoveOutcome};
use crate::error::CoreError;
use crate::state::{NumberingCache, Outcome, Snapshot, Timetable, TransitionResult};

/// Owns the timetable of the current period selection.
///
/// All mutations go through [`apply`]; a failed command leaves the state
/// untouched. Switching periods replaces the state wholesale through
/// [`Scheduler::load_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    state: Timetable,
}

impl Scheduler {
    /// Creates a scheduler with an empty timetable.
    #[must_use]
    pub fn new(period: String, program: Program) -> Self {
        Self {
            state: Timetable::new(period, program),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &Timetable {
        &self.state
    }

    /// Returns the selected period.
    #[must_use]
    pub fn period(&self) -> &str {
        &self.state.period
    }

    /// Returns the selected program.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.state.program
    }

    /// Changes the selected program.
    ///
    /// Sections and placements are kept: they belong to the period, not the
    /// program.
    pub fn select_program(&mut self, program: Program) {
        self.state.program = program;
    }

    /// Creates `quantity` sections of an offering taught by `instructor_name`.
    ///
    /// # Returns
    ///
    /// The new section records, one per meeting block.
    ///
    /// # Errors
    ///
    /// Returns an error if no free section number is left for the
    /// offering's prefix. The state is unchanged on error.
    pub fn create_sections(
        &mut self,
        offering: &CourseOffering,
        instructor_name: &str,
        quantity: Quantity,
    ) -> Result<Vec<Section>, CoreError> {
        let command: Command = Command::CreateSections {
            offering: offering.clone(),
            instructor_name: instructor_name.to_string(),
            quantity,
        };

        match self.commit(command)? {
            Outcome::SectionsCreated(sections) => {
                info!(
                    offering = %offering.code,
                    quantity = quantity.get(),
                    records = sections.len(),
                    "Created sections"
                );
                Ok(sections)
            }
            Outcome::Moved(_) => Ok(Vec::new()),
        }
    }

    /// Moves a section between the pool, slots and the discard target.
    ///
    /// # Errors
    ///
    /// Returns an error if the source position holds no section or the
    /// discard target is used as the source. The state is unchanged on error.
    pub fn move_section(
        &mut self,
        source: Location,
        destination: Option<Location>,
        source_index: usize,
        destination_index: usize,
    ) -> Result<MoveOutcome, CoreError> {
        let command: Command = Command::Move {
            source,
            destination,
            source_index,
            destination_index,
        };

        match self.commit(command)? {
            Outcome::Moved(outcome) => {
                info!(?outcome, "Applied move");
                Ok(outcome)
            }
            Outcome::SectionsCreated(_) => Ok(MoveOutcome::Ignored),
        }
    }

    /// Returns the created sections not placed in any slot.
    #[must_use]
    pub fn available_sections(&self) -> Vec<Section> {
        available_sections(&self.state.created, &self.state.slots)
    }

    /// Replaces the whole state with a loaded snapshot for `period`.
    ///
    /// An absent snapshot resets to an empty timetable. The numbering cache
    /// is always recomputed from the loaded sections. The selected program
    /// is kept.
    pub fn load_state(&mut self, period: &str, snapshot: Option<Snapshot>) {
        let program: Program = self.state.program.clone();
        let mut state: Timetable = Timetable::new(period.to_string(), program);

        if let Some(snapshot) = snapshot {
            state.numbering = NumberingCache::rebuild(&snapshot.created_sections);
            state.created = snapshot.created_sections;
            state.slots = snapshot.slots;
        }

        info!(
            period = %state.period,
            created = state.created.len(),
            placed = state.slots.placed_count(),
            "Loaded timetable state"
        );
        self.state = state;
    }

    /// Resets to an empty timetable for `period`.
    pub fn reset(&mut self, period: &str) {
        self.load_state(period, None);
    }

    /// Exports the current state as a snapshot.
    #[must_use]
    pub fn serialize_state(&self) -> Snapshot {
        self.state.to_snapshot()
    }

    fn commit(&mut self, command: Command) -> Result<Outcome, CoreError> {
        let TransitionResult { new_state, outcome } = apply(&self.state, command)?;
        self.state = new_state;
        Ok(outcome)
    }
}
