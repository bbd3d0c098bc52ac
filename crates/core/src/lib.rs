// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Section numbering and slot placement engine.
//!
//! Sections are created per offering with program-scoped numbers, then
//! placed into weekly slots by move commands. The pool of available
//! sections is always derived from the created sections and the current
//! placements.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocator;
mod apply;
mod availability;
mod command;
mod error;
mod factory;
mod registry;
mod scheduler;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use allocator::{NumberAllocator, used_numbers};
pub use apply::apply;
pub use availability::available_sections;
pub use command::{Command, Location, MoveOutcome};
pub use error::CoreError;
pub use factory::{SectionBatch, build_sections};
pub use registry::{InsertOutcome, SlotRegistry};
pub use scheduler::Scheduler;
pub use state::{CreatedSections, NumberingCache, Outcome, Snapshot, Timetable, TransitionResult};
