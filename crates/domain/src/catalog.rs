// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The static course catalog.
//!
//! The catalog is read once at startup from two JSON documents: a map of
//! program name to offerings, and a flat list of elective offerings.
//! Entries are normalized on load so the rest of the system never sees
//! untrimmed workloads or textual semesters.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::types::{CourseOffering, Program};

/// Semester values appear both as numbers and as strings in catalog files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSemester {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawOffering {
    codigo: String,
    nome: String,
    #[serde(default)]
    semestre: Option<RawSemester>,
    carga_horaria: String,
}

fn normalize_semester(code: &str, raw: Option<&RawSemester>) -> Result<u8, DomainError> {
    let invalid = |value: String| DomainError::InvalidSemester {
        code: code.to_string(),
        value,
    };

    match raw {
        None => Ok(0),
        Some(RawSemester::Number(n)) => u8::try_from(*n).map_err(|_| invalid(n.to_string())),
        Some(RawSemester::Text(text)) => {
            let trimmed: &str = text.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed.parse::<u8>().map_err(|_| invalid(text.clone()))
        }
    }
}

fn normalize(
    raw: RawOffering,
    program: &Program,
    elective: bool,
) -> Result<CourseOffering, DomainError> {
    let code: &str = raw.codigo.trim();
    if code.is_empty() {
        return Err(DomainError::InvalidOffering(format!(
            "offering '{}' in program '{program}' has an empty code",
            raw.nome
        )));
    }

    let semester: u8 = if elective {
        0
    } else {
        normalize_semester(code, raw.semestre.as_ref())?
    };

    Ok(CourseOffering::new(
        program.clone(),
        code,
        &raw.nome,
        semester,
        &raw.carga_horaria,
    ))
}

/// The course catalog: offerings per program plus the elective pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    programs: BTreeMap<Program, Vec<CourseOffering>>,
    electives: Vec<CourseOffering>,
}

impl Catalog {
    /// Creates a catalog from already-normalized offerings.
    ///
    /// Electives are forced to semester 0 and the electives program.
    #[must_use]
    pub fn new(
        programs: BTreeMap<Program, Vec<CourseOffering>>,
        electives: Vec<CourseOffering>,
    ) -> Self {
        let electives: Vec<CourseOffering> = electives
            .into_iter()
            .map(|mut offering| {
                offering.semester = 0;
                offering.program = Program::electives();
                offering
            })
            .collect();
        Self {
            programs,
            electives,
        }
    }

    /// Parses and normalizes a catalog from its JSON documents.
    ///
    /// # Arguments
    ///
    /// * `programs_json` - An object mapping program name to a list of offerings
    /// * `electives_json` - A list of elective offerings
    ///
    /// # Errors
    ///
    /// Returns an error if either document is malformed, an offering has an
    /// empty code, or a semester cannot be read as an integer.
    pub fn from_json(programs_json: &str, electives_json: &str) -> Result<Self, DomainError> {
        let raw_programs: BTreeMap<String, Vec<RawOffering>> = serde_json::from_str(programs_json)?;
        let raw_electives: Vec<RawOffering> = serde_json::from_str(electives_json)?;

        let mut programs: BTreeMap<Program, Vec<CourseOffering>> = BTreeMap::new();
        for (name, offerings) in raw_programs {
            let program: Program = Program::new(&name);
            let normalized: Vec<CourseOffering> = offerings
                .into_iter()
                .map(|raw| normalize(raw, &program, false))
                .collect::<Result<_, _>>()?;
            programs.insert(program, normalized);
        }

        let electives_program: Program = Program::electives();
        let electives: Vec<CourseOffering> = raw_electives
            .into_iter()
            .map(|raw| normalize(raw, &electives_program, true))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            programs,
            electives,
        })
    }

    /// Returns the selectable programs, electives last.
    #[must_use]
    pub fn programs(&self) -> Vec<Program> {
        let mut programs: Vec<Program> = self
            .programs
            .keys()
            .filter(|p| !p.is_electives())
            .cloned()
            .collect();
        programs.push(Program::electives());
        programs
    }

    /// Returns the offerings listed for a program.
    ///
    /// The electives program lists the elective pool. Unknown programs list
    /// nothing.
    #[must_use]
    pub fn offerings_for(&self, program: &Program) -> &[CourseOffering] {
        if program.is_electives() {
            return &self.electives;
        }
        self.programs
            .get(program)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks up an offering by program and code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OfferingNotFound` if the program does not list
    /// an offering with that code.
    pub fn find(&self, program: &Program, code: &str) -> Result<&CourseOffering, DomainError> {
        self.offerings_for(program)
            .iter()
            .find(|offering| offering.code == code)
            .ok_or_else(|| DomainError::OfferingNotFound {
                program: program.name().to_string(),
                code: code.to_string(),
            })
    }
}
