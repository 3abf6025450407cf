//! This module defines the closed vocabularies a machine is built from: its states, its tape
//! symbols, and its head directions. Each member carries a fixed unary code used by the
//! encoder, and can be parsed from the spelling used in configuration files.

use crate::types::{SymbolKind, TuringMachineError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The character used on the tape for blank cells.
pub const BLANK: char = 'B';

/// A machine state. `Q0` is the initial state of every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Q0,
    Q1,
    Q2,
    Q3,
}

impl State {
    /// All states in registry order.
    pub const ALL: [State; 4] = [State::Q0, State::Q1, State::Q2, State::Q3];

    /// The state every run starts in.
    pub const INITIAL: State = State::Q0;

    /// Returns the unary code of this state.
    ///
    /// The run lengths are 3, 4, 5 and 7. q3 does not follow the progression of the others.
    pub fn code(self) -> &'static str {
        match self {
            State::Q0 => "111",
            State::Q1 => "1111",
            State::Q2 => "11111",
            State::Q3 => "1111111",
        }
    }

    /// Returns the name used for this state in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            State::Q0 => "q0",
            State::Q1 => "q1",
            State::Q2 => "q2",
            State::Q3 => "q3",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for State {
    type Err = TuringMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| TuringMachineError::unknown(SymbolKind::State, s))
    }
}

/// A tape symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "B")]
    Blank,
}

impl Symbol {
    /// All symbols in registry order.
    pub const ALL: [Symbol; 3] = [Symbol::Zero, Symbol::One, Symbol::Blank];

    /// Returns the unary code of this symbol.
    pub fn code(self) -> &'static str {
        match self {
            Symbol::Zero => "101",
            Symbol::One => "1010",
            Symbol::Blank => "111111",
        }
    }

    /// Returns the tape character for this symbol.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Blank => BLANK,
        }
    }

    /// Maps a tape character back to a symbol, if it is one.
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            BLANK => Some(Symbol::Blank),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Symbol {
    type Err = TuringMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Symbol::from_char), chars.next()) {
            (Some(symbol), None) => Ok(symbol),
            _ => Err(TuringMachineError::unknown(SymbolKind::Symbol, s)),
        }
    }
}

/// The direction the head moves after a transition is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Returns the unary code of this direction.
    pub fn code(self) -> &'static str {
        match self {
            Direction::Left => "1",
            Direction::Right => "11",
        }
    }

    /// Returns the letter used for this direction in configuration files.
    pub fn letter(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = TuringMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Direction::Left),
            "R" => Ok(Direction::Right),
            _ => Err(TuringMachineError::unknown(SymbolKind::Direction, s)),
        }
    }
}
