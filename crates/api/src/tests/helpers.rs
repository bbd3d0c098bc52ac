// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use horario::{Location, Scheduler};
use horario_domain::{Catalog, Program, SlotId, Weekday};
use horario_persistence::Persistence;

use crate::{CreateSectionsRequest, MoveRequest};

pub const COMPUTING: &str = "Engenharia de Computação";

const PROGRAMS_JSON: &str = r#"{
    "Engenharia de Computação": [
        { "codigo": "ECO101", "nome": "Cálculo I", "semestre": "1", "carga_horaria": "64h " },
        { "codigo": "ECO202", "nome": "Estruturas de Dados", "semestre": 2, "carga_horaria": "32h" }
    ],
    "Engenharia de Minas": [
        { "codigo": "MIN101", "nome": "Geologia", "semestre": 1, "carga_horaria": "96h" }
    ]
}"#;

const ELECTIVES_JSON: &str = r#"[
    { "codigo": "OPT001", "nome": "Robótica", "semestre": "5", "carga_horaria": "32h" }
]"#;

pub fn create_test_catalog() -> Catalog {
    Catalog::from_json(PROGRAMS_JSON, ELECTIVES_JSON).unwrap()
}

pub fn create_test_scheduler() -> Scheduler {
    Scheduler::new(String::from("20252"), Program::new(COMPUTING))
}

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_request(code: &str, instructor: &str, quantity: &str) -> CreateSectionsRequest {
    CreateSectionsRequest {
        offering_code: code.to_string(),
        instructor_name: instructor.to_string(),
        quantity: quantity.to_string(),
    }
}

pub fn monday_morning() -> SlotId {
    SlotId::for_cell(Weekday::Segunda, "07:30-09:30")
}

pub fn place_request(pool_index: usize, slot: &SlotId) -> MoveRequest {
    MoveRequest {
        source: Location::Pool,
        destination: Some(Location::Slot(slot.clone())),
        source_index: pool_index,
        destination_index: 0,
    }
}
