//! This crate provides the core logic for a single-tape Turing machine simulator.
//! It includes modules for reading machine configurations, executing a transition table against
//! a tape, encoding transition tables into unary bitstrings, analyzing tables for likely
//! mistakes, and a collection of predefined machines.

pub mod alphabet;
pub mod analyzer;
pub mod encoder;
pub mod loader;
pub mod machine;
pub mod parser;
pub mod programs;
pub mod table;
pub mod types;

/// Re-exports the alphabet enums and the blank tape character.
pub use alphabet::{Direction, State, Symbol, BLANK};
/// Re-exports the `analyze` function and `AnalysisWarning` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisWarning};
/// Re-exports the encoding functions from the encoder module.
pub use encoder::{encode, encode_rules, encode_table, explanation};
/// Re-exports the `ConfigLoader` struct from the loader module.
pub use loader::ConfigLoader;
/// Re-exports the `TuringMachine` struct and the `run` shortcut from the machine module.
pub use machine::{run, TuringMachine};
/// Re-exports the `parse` function and the `Config` it produces.
pub use parser::{parse, Config};
/// Re-exports `Program`, `ProgramInfo`, `ProgramManager`, and `PROGRAMS` from the programs module.
pub use programs::{Program, ProgramInfo, ProgramManager, PROGRAMS};
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the shared types from the types module.
pub use types::{
    Halt, Rejection, RuleText, Step, SymbolKind, Transition, TuringMachineError, MAX_CONFIG_SIZE,
};
