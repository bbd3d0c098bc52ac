// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidQuantity {
        input: String::from("abc"),
        reason: "must be a number",
    };
    assert_eq!(format!("{err}"), "Invalid quantity 'abc': must be a number");

    let err: DomainError = DomainError::InvalidSemester {
        code: String::from("ECO101"),
        value: String::from("primeiro"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid semester 'primeiro' for offering 'ECO101'"
    );

    let err: DomainError = DomainError::OfferingNotFound {
        program: String::from("Engenharia de Minas"),
        code: String::from("MIN999"),
    };
    assert_eq!(
        format!("{err}"),
        "Offering 'MIN999' not found for program 'Engenharia de Minas'"
    );

    let err: DomainError = DomainError::InvalidOffering(String::from("empty code"));
    assert_eq!(format!("{err}"), "Invalid offering: empty code");
}
