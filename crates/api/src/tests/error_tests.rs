// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use horario::CoreError;
use horario_domain::{DomainError, Quantity};
use horario_persistence::PersistenceError;

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_invalid_quantity_maps_to_invalid_input() {
    let err: DomainError = Quantity::parse("abc").unwrap_err();

    let api: ApiError = translate_domain_error(err);

    assert!(matches!(api, ApiError::InvalidInput { field, message }
        if field == "quantity" && message.contains("abc")));
}

#[test]
fn test_offering_not_found_maps_to_not_found() {
    let api: ApiError = translate_domain_error(DomainError::OfferingNotFound {
        program: String::from("Engenharia Química"),
        code: String::from("EQ999"),
    });

    assert_eq!(
        api.to_string(),
        "Offering not found: Offering 'EQ999' is not listed for program 'Engenharia Química'"
    );
}

#[test]
fn test_core_domain_violation_is_unwrapped() {
    let core: CoreError = CoreError::from(Quantity::new(0).unwrap_err());

    assert!(matches!(
        translate_core_error(core),
        ApiError::InvalidInput { .. }
    ));
}

#[test]
fn test_section_not_found_maps_to_not_found() {
    let api: ApiError = ApiError::from(CoreError::SectionNotFound {
        location: String::from("available pool"),
        index: 7,
    });

    assert!(matches!(api, ApiError::ResourceNotFound { resource_type, .. }
        if resource_type == "Section"));
}

#[test]
fn test_numbering_exhausted_is_rule_violation() {
    let api: ApiError = ApiError::from(CoreError::NumberingExhausted {
        prefix: String::from("VE"),
    });

    assert!(matches!(api, ApiError::DomainRuleViolation { rule, .. }
        if rule == "section_numbering"));
}

#[test]
fn test_persistence_error_maps_to_persistence() {
    let api: ApiError = ApiError::from(PersistenceError::QueryFailed(String::from("locked")));

    assert_eq!(api.to_string(), "Persistence error: Query failed: locked");
}
