//! This module provides encoding functionality for converting a transition table into the unary
//! bitstring used by universal machine constructions.

use crate::alphabet::{Direction, State, Symbol};
use crate::table::TransitionTable;
use crate::types::{RuleText, Transition, TuringMachineError};

/// Marks the start and the end of an encoded transition list.
pub const SENTINEL: &str = "0000";
/// Separates two encoded transitions.
pub const TRANSITION_SEPARATOR: &str = "000";
/// Separates the fields of one encoded transition.
pub const FIELD_SEPARATOR: &str = "00";

/// Encodes transitions into a single bitstring.
///
/// Format: `0000 t1 000 t2 000 ... tn 0000`, where each `t` is
/// `from 00 read 00 to 00 write 00 direction` using the unary code of each field.
/// An empty list encodes to `00000000`.
///
/// # Arguments
///
/// * `transitions` - The transitions to encode, in order.
///
/// # Returns
///
/// * `String` - The encoded bitstring.
pub fn encode(transitions: &[Transition]) -> String {
    let body = transitions
        .iter()
        .map(encode_transition)
        .collect::<Vec<_>>()
        .join(TRANSITION_SEPARATOR);

    format!("{SENTINEL}{body}{SENTINEL}")
}

/// Encodes the transitions of a table in insertion order.
pub fn encode_table(table: &TransitionTable) -> String {
    encode(table.transitions())
}

/// Encodes transitions read from a configuration.
///
/// Every rule is checked against the alphabet before anything is encoded, so a failure never
/// leaves a partial bitstring behind.
///
/// # Returns
///
/// * `Ok(String)` - The encoded bitstring.
/// * `Err(TuringMachineError::UnknownSymbolKind)` - A rule names a state, symbol or direction
///   outside the alphabet.
pub fn encode_rules(rules: &[RuleText]) -> Result<String, TuringMachineError> {
    let transitions = rules
        .iter()
        .map(Transition::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(encode(&transitions))
}

/// Returns the label and code of every state, symbol and direction, in registry order.
pub fn explanation() -> Vec<(String, &'static str)> {
    let states = State::ALL.iter().map(|s| (s.to_string(), s.code()));
    let symbols = Symbol::ALL.iter().map(|s| (s.to_string(), s.code()));
    let directions = Direction::ALL.iter().map(|d| (d.to_string(), d.code()));

    states.chain(symbols).chain(directions).collect()
}

/// Encodes one transition. The target state precedes the written symbol.
fn encode_transition(transition: &Transition) -> String {
    [
        transition.from.code(),
        transition.read.code(),
        transition.to.code(),
        transition.write.code(),
        transition.direction.code(),
    ]
    .join(FIELD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SymbolKind;

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
    fn test_encode_single_transition() {
        let transition =
            Transition::new(State::Q0, Symbol::Zero, Symbol::Zero, Direction::Right, State::Q1);

        assert_eq!(encode(&[transition]), "0000111001010011110010100110000");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "00000000");
        assert_eq!(encode_table(&TransitionTable::default()), "00000000");
    }

    #[test]
    fn test_encode_two_transitions() {
        let transitions = [
            Transition::new(State::Q1, Symbol::One, Symbol::Blank, Direction::Left, State::Q3),
            Transition::new(State::Q2, Symbol::Blank, Symbol::One, Direction::Right, State::Q0),
        ];

        let expected = [
            "0000",
            "1111", "00", "1010", "00", "1111111", "00", "111111", "00", "1",
            "000",
            "11111", "00", "111111", "00", "111", "00", "1010", "00", "11",
            "0000",
        ]
        .concat();

        assert_eq!(encode(&transitions), expected);
    }

    #[test]
    fn test_encode_rules_matches_typed_encoding() {
        let rules = vec![rule("q0", "0", "q1", "0", "R"), rule("q1", "B", "q2", "B", "L")];
        let table = TransitionTable::build(&rules, &[]).unwrap();

        assert_eq!(encode_rules(&rules).unwrap(), encode_table(&table));
    }

    #[test]
    fn test_encode_rules_unknown_state() {
        let rules = vec![rule("q0", "0", "q1", "0", "R"), rule("q1", "0", "q4", "0", "R")];

        let result = encode_rules(&rules);
        assert_eq!(
            result,
            Err(TuringMachineError::UnknownSymbolKind {
                kind: SymbolKind::State,
                value: "q4".into(),
            })
        );
    }

    #[test]
    fn test_encode_rules_unknown_symbol() {
        let result = encode_rules(&[rule("q0", "0", "q1", "X", "R")]);

        assert!(matches!(
            result,
            Err(TuringMachineError::UnknownSymbolKind {
                kind: SymbolKind::Symbol,
                ..
            })
        ));
    }

    #[test]
    fn test_explanation() {
        let explanation = explanation();

        assert_eq!(explanation.len(), 9);
        assert_eq!(explanation[0], ("q0".to_string(), "111"));
        assert_eq!(explanation[3], ("q3".to_string(), "1111111"));
        assert_eq!(explanation[6], ("B".to_string(), "111111"));
        assert_eq!(explanation[8], ("R".to_string(), "11"));
    }
}
