// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The weekly grid of teaching slots.

use serde::{Deserialize, Serialize};

/// The time ranges of the standard weekly grid, in display order.
pub const TIME_RANGES: [&str; 4] = ["07:30-09:30", "09:30-11:30", "13:30-15:30", "15:30-17:30"];

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Segunda,
    Terca,
    Quarta,
    Quinta,
    Sexta,
}

impl Weekday {
    /// All teaching weekdays, in display order.
    pub const ALL: [Self; 5] = [
        Self::Segunda,
        Self::Terca,
        Self::Quarta,
        Self::Quinta,
        Self::Sexta,
    ];

    /// Returns the display name used in slot identifiers.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Segunda => "Segunda",
            Self::Terca => "Terça",
            Self::Quarta => "Quarta",
            Self::Quinta => "Quinta",
            Self::Sexta => "Sexta",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one cell of the weekly grid.
///
/// The registry treats slot identifiers as opaque keys. Cells of the
/// standard grid are named `slot-<weekday>-<time range>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    /// Wraps an arbitrary slot key.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier of a standard grid cell.
    #[must_use]
    pub fn for_cell(weekday: Weekday, time_range: &str) -> Self {
        Self(format!("slot-{}-{time_range}", weekday.as_str()))
    }

    /// Returns the slot key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the time portion of the identifier.
    ///
    /// This is everything after the second `-`, or `"N/A"` when the
    /// identifier has fewer segments.
    #[must_use]
    pub fn time_label(&self) -> String {
        let label: String = self.0.split('-').skip(2).collect::<Vec<&str>>().join("-");
        if label.is_empty() {
            String::from("N/A")
        } else {
            label
        }
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns every cell of the standard grid, row by row.
#[must_use]
pub fn standard_slots() -> Vec<SlotId> {
    TIME_RANGES
        .iter()
        .flat_map(|range| {
            Weekday::ALL
                .iter()
                .map(move |weekday| SlotId::for_cell(*weekday, range))
        })
        .collect()
}
