// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use horario::CoreError;
use horario_domain::DomainError;
use horario_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The snapshot store failed.
    #[error("Persistence error: {message}")]
    Persistence {
        /// A description of the store failure.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidQuantity { input, reason } => ApiError::InvalidInput {
            field: String::from("quantity"),
            message: format!("'{input}' is not a valid quantity: {reason}"),
        },
        DomainError::InvalidSemester { code, value } => ApiError::InvalidInput {
            field: String::from("semester"),
            message: format!("Offering '{code}' has semester '{value}'"),
        },
        DomainError::InvalidOffering(msg) => ApiError::InvalidInput {
            field: String::from("offering"),
            message: msg,
        },
        DomainError::CatalogParse(msg) => ApiError::InvalidInput {
            field: String::from("catalog"),
            message: msg,
        },
        DomainError::OfferingNotFound { program, code } => ApiError::ResourceNotFound {
            resource_type: String::from("Offering"),
            message: format!("Offering '{code}' is not listed for program '{program}'"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::SectionNotFound { location, index } => ApiError::ResourceNotFound {
            resource_type: String::from("Section"),
            message: format!("No section at index {index} of {location}"),
        },
        CoreError::InvalidMove(msg) => ApiError::DomainRuleViolation {
            rule: String::from("move_source"),
            message: msg,
        },
        CoreError::NumberingExhausted { prefix } => ApiError::DomainRuleViolation {
            rule: String::from("section_numbering"),
            message: format!("No free section number left for prefix '{prefix}'"),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence {
            message: err.to_string(),
        }
    }
}
