// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Catalog, CourseOffering, DomainError, Program};

const PROGRAMS_JSON: &str = r#"{
    "Engenharia de Computação": [
        { "codigo": "ECO101", "nome": "Algoritmos", "semestre": "1", "carga_horaria": " 64h " },
        { "codigo": "ECO202", "nome": "Redes", "semestre": 4, "carga_horaria": "96h" }
    ],
    "Engenharia de Minas": [
        { "codigo": "MIN101", "nome": "Geologia", "semestre": 1, "carga_horaria": "32h" }
    ]
}"#;

const ELECTIVES_JSON: &str = r#"[
    { "codigo": "OPT001", "nome": "Libras", "semestre": 7, "carga_horaria": "32h\n" }
]"#;

#[test]
fn test_from_json_normalizes_offerings() {
    let catalog: Catalog = Catalog::from_json(PROGRAMS_JSON, ELECTIVES_JSON).unwrap();
    let program: Program = Program::new("Engenharia de Computação");

    let offerings: &[CourseOffering] = catalog.offerings_for(&program);
    assert_eq!(offerings.len(), 2);
    assert_eq!(offerings[0].semester, 1);
    assert_eq!(offerings[0].workload.descriptor(), "64h");
    assert_eq!(offerings[0].program, program);
    assert_eq!(offerings[1].semester, 4);
}

#[test]
fn test_electives_are_forced_to_semester_zero() {
    let catalog: Catalog = Catalog::from_json(PROGRAMS_JSON, ELECTIVES_JSON).unwrap();

    let electives: &[CourseOffering] = catalog.offerings_for(&Program::electives());
    assert_eq!(electives.len(), 1);
    assert_eq!(electives[0].semester, 0);
    assert!(electives[0].is_elective());
    assert_eq!(electives[0].program, Program::electives());
    assert_eq!(electives[0].workload.descriptor(), "32h");
}

#[test]
fn test_unknown_program_lists_nothing() {
    let catalog: Catalog = Catalog::from_json(PROGRAMS_JSON, ELECTIVES_JSON).unwrap();
    assert!(catalog.offerings_for(&Program::new("Medicina")).is_empty());
}

#[test]
fn test_programs_lists_electives_last() {
    let catalog: Catalog = Catalog::from_json(PROGRAMS_JSON, ELECTIVES_JSON).unwrap();
    let programs: Vec<Program> = catalog.programs();

    assert_eq!(programs.len(), 3);
    assert_eq!(programs.last(), Some(&Program::electives()));
}

#[test]
fn test_find_offering() {
    let catalog: Catalog = Catalog::from_json(PROGRAMS_JSON, ELECTIVES_JSON).unwrap();
    let program: Program = Program::new("Engenharia de Minas");

    assert_eq!(catalog.find(&program, "MIN101").unwrap().title, "Geologia");
    assert!(matches!(
        catalog.find(&program, "ECO101"),
        Err(DomainError::OfferingNotFound { .. })
    ));
}

#[test]
fn test_invalid_semester_is_rejected() {
    let programs: &str = r#"{ "Engenharia Química": [
        { "codigo": "QUI101", "nome": "Química Geral", "semestre": "primeiro", "carga_horaria": "64h" }
    ] }"#;

    let result: Result<Catalog, DomainError> = Catalog::from_json(programs, "[]");
    assert!(matches!(result, Err(DomainError::InvalidSemester { .. })));
}

#[test]
fn test_empty_code_is_rejected() {
    let programs: &str = r#"{ "Engenharia Química": [
        { "codigo": " ", "nome": "Química Geral", "semestre": 1, "carga_horaria": "64h" }
    ] }"#;

    let result: Result<Catalog, DomainError> = Catalog::from_json(programs, "[]");
    assert!(matches!(result, Err(DomainError::InvalidOffering(_))));
}

#[test]
fn test_malformed_json_is_rejected() {
    let result: Result<Catalog, DomainError> = Catalog::from_json("{", "[]");
    assert!(matches!(result, Err(DomainError::CatalogParse(_))));
}

#[test]
fn test_new_normalizes_electives() {
    let elective: CourseOffering =
        CourseOffering::new(Program::new("Engenharia de Minas"), "OPT9", "Música", 3, "32h");
    let catalog: Catalog = Catalog::new(std::collections::BTreeMap::new(), vec![elective]);

    let electives: &[CourseOffering] = catalog.offerings_for(&Program::electives());
    assert_eq!(electives[0].semester, 0);
    assert_eq!(electives[0].program, Program::electives());
}
