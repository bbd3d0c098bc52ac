// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use horario::{Location, MoveOutcome};
use horario_domain::{CourseOffering, Section, SlotId};
use serde::{Deserialize, Serialize};

/// API request to create sections of an offering of the selected program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionsRequest {
    /// The offering code.
    pub offering_code: String,
    /// The instructor teaching every new section.
    pub instructor_name: String,
    /// The number of sections, as typed by the user.
    pub quantity: String,
}

/// API response for a successful section creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionsResponse {
    /// Every new meeting-block record, in creation order.
    pub sections: Vec<Section>,
    /// A success message.
    pub message: String,
}

/// API request to move a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Where the section is taken from.
    pub source: Location,
    /// Where it is dropped. Absent when the drag was cancelled.
    #[serde(default)]
    pub destination: Option<Location>,
    /// Position within the source.
    pub source_index: usize,
    /// Position within the destination.
    #[serde(default)]
    pub destination_index: usize,
}

/// API response for a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// How the move was interpreted.
    pub outcome: MoveOutcome,
    /// The number of unplaced sections after the move.
    pub available_count: usize,
}

/// API response listing unplaced sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAvailableResponse {
    /// Unplaced sections, offerings in creation order.
    pub sections: Vec<Section>,
}

/// API response listing the offerings of a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// The program whose offerings are listed.
    pub program: String,
    /// Every selectable program, electives last.
    pub programs: Vec<String>,
    /// The program's offerings.
    pub offerings: Vec<CourseOffering>,
}

/// API request to switch the working period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchPeriodRequest {
    /// The period to switch to, e.g. `20252`.
    pub period: String,
    /// The program to select. The current program is kept when absent.
    #[serde(default)]
    pub program: Option<String>,
}

/// API response for a period switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPeriodResponse {
    /// The period now selected.
    pub period: String,
    /// The program now selected.
    pub program: String,
    /// Whether a stored snapshot was loaded. `false` means the state was reset.
    pub loaded: bool,
    /// The number of section records in the new state.
    pub created_count: usize,
    /// The number of placed section records in the new state.
    pub placed_count: usize,
}

/// API response for a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    /// The period that was saved.
    pub period: String,
    /// When the save was recorded (RFC 3339).
    pub saved_at: String,
    /// A success message.
    pub message: String,
}

/// API response listing the periods with a stored timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPeriodsResponse {
    /// Stored periods, in ascending order.
    pub periods: Vec<String>,
}

/// The weekly grid, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    /// Column headers.
    pub weekdays: Vec<String>,
    /// One row per time range.
    pub rows: Vec<GridRow>,
    /// Placements in slots outside the standard grid.
    pub other_slots: Vec<GridCell>,
}

/// One time range of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    /// The time range, e.g. `07:30-09:30`.
    pub time_range: String,
    /// One cell per weekday.
    pub cells: Vec<GridCell>,
}

/// One slot of the grid and its placed sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// The slot identifier.
    pub slot_id: SlotId,
    /// The sections placed in the slot, in display order.
    pub sections: Vec<Section>,
}
