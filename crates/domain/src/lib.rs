// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod catalog;
mod error;
mod grid;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use error::DomainError;
pub use grid::{SlotId, TIME_RANGES, Weekday, standard_slots};
pub use types::{
    CourseOffering, DEFAULT_PREFIX, Program, Section, SectionIdentity, SectionLabel, Workload,
    extract_number,
};
pub use validation::{MAX_QUANTITY, Quantity};
