use crate::parser::{parse, Config};
use crate::types::TuringMachineError;

// Default embedded machines
const PROGRAM_TEXTS: [(&str, &str); 5] = [
    ("ends-in-one", include_str!("../machines/ends-in-one.txt")),
    ("even-length", include_str!("../machines/even-length.txt")),
    ("zeros-then-ones", include_str!("../machines/zeros-then-ones.txt")),
    ("invert", include_str!("../machines/invert.txt")),
    ("left-edge", include_str!("../machines/left-edge.txt")),
];

/// A machine configuration shipped with the crate.
#[derive(Debug, Clone)]
pub struct Program {
    pub name: &'static str,
    pub text: &'static str,
    pub config: Config,
}

impl Program {
    /// The first comment line of the configuration, without the leading `#`.
    pub fn description(&self) -> &'static str {
        self.text
            .lines()
            .map(str::trim)
            .find_map(|line| line.strip_prefix('#'))
            .map(str::trim)
            .unwrap_or_default()
    }
}

lazy_static::lazy_static! {
    pub static ref PROGRAMS: Vec<Program> = PROGRAM_TEXTS
        .iter()
        .map(|&(name, text)| Program {
            name,
            text,
            config: parse(text),
        })
        .collect();
}

pub struct ProgramManager;

impl ProgramManager {
    /// Get the number of available programs
    pub fn get_program_count() -> usize {
        PROGRAMS.len()
    }

    /// Get a program by its index
    pub fn get_program_by_index(index: usize) -> Result<&'static Program, TuringMachineError> {
        PROGRAMS.get(index).ok_or_else(|| {
            TuringMachineError::ValidationError(format!("Program index {} out of range", index))
        })
    }

    /// Get a program by its name
    pub fn get_program_by_name(name: &str) -> Result<&'static Program, TuringMachineError> {
        PROGRAMS
            .iter()
            .find(|program| program.name == name)
            .ok_or_else(|| {
                TuringMachineError::ValidationError(format!("Program '{}' not found", name))
            })
    }

    /// List all program names
    pub fn list_program_names() -> Vec<&'static str> {
        PROGRAMS.iter().map(|program| program.name).collect()
    }

    /// Get information about a program by its index
    pub fn get_program_info(index: usize) -> Result<ProgramInfo, TuringMachineError> {
        let program = Self::get_program_by_index(index)?;

        Ok(ProgramInfo {
            index,
            name: program.name,
            description: program.description(),
            transition_count: program.config.rules.len(),
            final_states: program.config.final_states.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ProgramInfo {
    pub index: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub transition_count: usize,
    pub final_states: Vec<String>,
}
