// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the timetable planner.
//!
//! Requests arrive as raw DTOs, are validated into domain types, and are
//! applied to an explicitly passed `Scheduler`. Core and domain errors are
//! translated into `ApiError` before they leave this crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod grid_view;
mod handlers;
mod report;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use grid_view::build_grid_view;
pub use handlers::{
    create_sections, fetch_stored, get_catalog, get_snapshot, list_available, list_stored_periods,
    move_section, save, store_snapshot, switch_period,
};
pub use report::{REPORT_HEADER, export_report};
pub use request_response::{
    CatalogResponse, CreateSectionsRequest, CreateSectionsResponse, GridCell, GridRow, GridView,
    ListAvailableResponse, MoveRequest, MoveResponse, SaveResponse, StoredPeriodsResponse,
    SwitchPeriodRequest, SwitchPeriodResponse,
};
