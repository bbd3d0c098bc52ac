// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// No section exists at the given position of a move source.
    #[error("No section at index {index} of {location}")]
    SectionNotFound {
        /// The move source that was inspected.
        location: String,
        /// The requested index.
        index: usize,
    },
    /// The move is structurally invalid.
    #[error("Invalid move: {0}")]
    InvalidMove(String),
    /// Every section number for a prefix is in use.
    #[error("No free section number left for prefix '{prefix}'")]
    NumberingExhausted {
        /// The numbering prefix.
        prefix: String,
    },
}
