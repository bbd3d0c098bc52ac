// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The requested number of sections is not a positive integer within the cap.
    #[error("Invalid quantity '{input}': {reason}")]
    InvalidQuantity {
        /// The raw quantity as supplied by the caller.
        input: String,
        /// Why the quantity was rejected.
        reason: &'static str,
    },
    /// A catalog semester value could not be coerced to an integer.
    #[error("Invalid semester '{value}' for offering '{code}'")]
    InvalidSemester {
        /// The offering code carrying the bad value.
        code: String,
        /// The raw semester value.
        value: String,
    },
    /// A catalog entry is missing a required field.
    #[error("Invalid offering: {0}")]
    InvalidOffering(String),
    /// The catalog document could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    CatalogParse(String),
    /// No offering with this code exists for the program.
    #[error("Offering '{code}' not found for program '{program}'")]
    OfferingNotFound {
        /// The program that was searched.
        program: String,
        /// The offering code that was requested.
        code: String,
    },
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::CatalogParse(err.to_string())
    }
}
