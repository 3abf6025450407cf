//! This module defines the core data structures shared by the simulator, including transitions,
//! execution outcomes, and error types.

use crate::alphabet::{Direction, State, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The maximum allowed size for a machine configuration in bytes.
pub const MAX_CONFIG_SIZE: usize = 65536; // 64KB

/// Represents a single transition rule.
///
/// When the machine is in `from` and reads `read`, it writes `write`, moves the head in
/// `direction`, and continues in `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: State,
    pub read: Symbol,
    pub write: Symbol,
    pub direction: Direction,
    pub to: State,
}

impl Transition {
    pub fn new(from: State, read: Symbol, write: Symbol, direction: Direction, to: State) -> Self {
        Self {
            from,
            read,
            write,
            direction,
            to,
        }
    }
}

/// Transitions are displayed in configuration-file order: `from read to write direction`.
impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.from, self.read, self.to, self.write, self.direction
        )
    }
}

/// A transition line as read from a configuration, before its tokens are checked against the
/// alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleText {
    /// The 1-based line number the rule was read from.
    pub line: usize,
    pub from: String,
    pub read: String,
    pub to: String,
    pub write: String,
    pub direction: String,
}

impl TryFrom<&RuleText> for Transition {
    type Error = TuringMachineError;

    fn try_from(rule: &RuleText) -> Result<Self, Self::Error> {
        Ok(Transition {
            from: rule.from.parse()?,
            read: rule.read.parse()?,
            write: rule.write.parse()?,
            direction: rule.direction.parse()?,
            to: rule.to.parse()?,
        })
    }
}

/// Represents the outcome of a single execution step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A transition was applied and execution continues.
    Continue,
    /// The machine has halted.
    Halt(Halt),
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Halt {
    /// The machine reached an accepting state.
    Accept(State),
    /// The machine stopped without reaching an accepting state.
    Reject(Rejection),
}

impl Halt {
    pub fn is_accept(&self) -> bool {
        matches!(self, Halt::Accept(_))
    }
}

/// Details of a rejection outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No transition is defined for the current state and the symbol under the head.
    NoRule { state: State, symbol: char },
    /// The head moved left from the first cell.
    LeftEdge { state: State },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoRule { state, symbol } => {
                write!(f, "no transition for state {state} reading '{symbol}'")
            }
            Rejection::LeftEdge { state } => {
                write!(f, "head moved off the left edge of the tape in state {state}")
            }
        }
    }
}

/// The vocabulary a rejected name was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    State,
    Symbol,
    Direction,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::State => f.write_str("state"),
            SymbolKind::Symbol => f.write_str("symbol"),
            SymbolKind::Direction => f.write_str("direction"),
        }
    }
}

/// Represents various errors that can occur while loading or encoding a machine.
///
/// Execution itself never fails; its outcome is reported through [`Halt`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// A name is not a member of the state, symbol or direction alphabet.
    #[error("Unknown {kind}: {value}")]
    UnknownSymbolKind { kind: SymbolKind, value: String },
    /// A transition line does not have exactly five tokens.
    #[error("Invalid transition format on line {line} ({tokens} tokens): {content}")]
    MalformedConfigLine {
        line: usize,
        content: String,
        tokens: usize,
    },
    /// Indicates an error during the validation of a configuration or a registry lookup.
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Indicates an error related to file system operations, such as reading configuration files.
    #[error("File error: {0}")]
    FileError(String),
}

impl TuringMachineError {
    pub(crate) fn unknown(kind: SymbolKind, value: &str) -> Self {
        TuringMachineError::UnknownSymbolKind {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(from: &str, read: &str, to: &str, write: &str, direction: &str) -> RuleText {
        RuleText {
            line: 1,
            from: from.into(),
            read: read.into(),
            to: to.into(),
            write: write.into(),
            direction: direction.into(),
        }
    }

    #[test]
    fn test_transition_from_rule_text() {
        let transition = Transition::try_from(&rule("q0", "0", "q1", "B", "R")).unwrap();

        assert_eq!(
            transition,
            Transition::new(State::Q0, Symbol::Zero, Symbol::Blank, Direction::Right, State::Q1)
        );
    }

    #[test]
    fn test_transition_from_rule_text_unknown_direction() {
        let error = Transition::try_from(&rule("q0", "0", "q1", "0", "S")).unwrap_err();

        assert_eq!(
            error,
            TuringMachineError::UnknownSymbolKind {
                kind: SymbolKind::Direction,
                value: "S".into(),
            }
        );
    }

    #[test]
    fn test_transition_display_uses_config_field_order() {
        let transition =
            Transition::new(State::Q0, Symbol::One, Symbol::Zero, Direction::Left, State::Q2);
        assert_eq!(transition.to_string(), "q0 1 q2 0 L");
    }

    #[test]
    fn test_halt_serialization() {
        let halt = Halt::Reject(Rejection::NoRule {
            state: State::Q1,
            symbol: 'B',
        });

        let json = serde_json::to_string(&halt).unwrap();
        assert_eq!(json, r#"{"Reject":{"NoRule":{"state":"q1","symbol":"B"}}}"#);

        let deserialized: Halt = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, halt);
        assert!(!deserialized.is_accept());
        assert!(Halt::Accept(State::Q3).is_accept());
    }

    #[test]
    fn test_error_display() {
        let error = TuringMachineError::unknown(SymbolKind::State, "q9");
        assert_eq!(error.to_string(), "Unknown state: q9");

        let error = TuringMachineError::MalformedConfigLine {
            line: 7,
            content: "q0 0 q1".into(),
            tokens: 3,
        };
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("line 7"));
        assert!(error_msg.contains("q0 0 q1"));
    }
}
