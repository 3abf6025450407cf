//! This module defines the `TransitionTable`, the immutable rule set a machine runs against.

use crate::alphabet::{State, Symbol};
use crate::types::{RuleText, Transition, TuringMachineError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered list of transitions plus the set of accepting states.
///
/// Lookups are first-match-wins in insertion order. If two transitions share the same
/// `(from, read)` pair the later one is never selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
    accepting: BTreeSet<State>,
}

impl TransitionTable {
    /// Creates a table from already validated transitions.
    pub fn new(
        transitions: Vec<Transition>,
        accepting: impl IntoIterator<Item = State>,
    ) -> Self {
        Self {
            transitions,
            accepting: accepting.into_iter().collect(),
        }
    }

    /// Builds a table from rules and final state names read from a configuration.
    ///
    /// Every token of every rule must name a member of the alphabet. Final state names are not
    /// checked: a name outside the alphabet can never match a real state, so it is dropped.
    ///
    /// # Returns
    ///
    /// * `Ok(TransitionTable)` with the rules in their original order.
    /// * `Err(TuringMachineError::UnknownSymbolKind)` for the first rule token that is not
    ///   part of the alphabet.
    pub fn build(rules: &[RuleText], final_states: &[String]) -> Result<Self, TuringMachineError> {
        let transitions = rules
            .iter()
            .map(Transition::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let accepting = final_states.iter().filter_map(|name| match name.parse::<State>() {
            Ok(state) => Some(state),
            Err(_) => {
                tracing::debug!(name = %name, "final state is not a machine state, ignoring");
                None
            }
        });

        Ok(Self::new(transitions, accepting))
    }

    /// Returns the first transition for `state` reading `symbol`, if any.
    pub fn lookup(&self, state: State, symbol: Symbol) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from == state && t.read == symbol)
    }

    /// Checks whether `state` is an accepting state.
    pub fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    /// Returns the transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the accepting states in registry order.
    pub fn accepting_states(&self) -> impl Iterator<Item = State> + '_ {
        self.accepting.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Direction;
    use crate::types::SymbolKind;

    fn rule(line: usize, text: &str) -> RuleText {
        let parts: Vec<&str> = text.split(' ').collect();
        RuleText {
            line,
            from: parts[0].into(),
            read: parts[1].into(),
            to: parts[2].into(),
            write: parts[3].into(),
            direction: parts[4].into(),
        }
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let first = Transition::new(State::Q0, Symbol::Zero, Symbol::One, Direction::Right, State::Q1);
        let shadowed =
            Transition::new(State::Q0, Symbol::Zero, Symbol::Zero, Direction::Left, State::Q2);
        let table = TransitionTable::new(vec![first, shadowed], [State::Q1]);

        assert_eq!(table.lookup(State::Q0, Symbol::Zero), Some(&first));
        assert_eq!(table.lookup(State::Q0, Symbol::One), None);
        assert_eq!(table.lookup(State::Q1, Symbol::Zero), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_is_accepting() {
        let table = TransitionTable::new(Vec::new(), [State::Q2, State::Q3]);

        assert!(table.is_empty());
        assert!(table.is_accepting(State::Q2));
        assert!(table.is_accepting(State::Q3));
        assert!(!table.is_accepting(State::Q0));
        assert_eq!(
            table.accepting_states().collect::<Vec<_>>(),
            vec![State::Q2, State::Q3]
        );
    }

    #[test]
    fn test_build_keeps_rule_order() {
        let rules = vec![rule(3, "q0 1 q0 1 R"), rule(4, "q0 0 q1 0 R")];
        let table = TransitionTable::build(&rules, &["q1".to_string()]).unwrap();

        assert_eq!(table.transitions()[0].read, Symbol::One);
        assert_eq!(table.transitions()[1].to, State::Q1);
        assert!(table.is_accepting(State::Q1));
    }

    #[test]
    fn test_build_ignores_unknown_final_states() {
        let rules = vec![rule(1, "q0 0 q1 0 R")];
        let finals = vec!["halt".to_string(), "".to_string(), "q1".to_string()];
        let table = TransitionTable::build(&rules, &finals).unwrap();

        assert_eq!(table.accepting_states().collect::<Vec<_>>(), vec![State::Q1]);
    }

    #[test]
    fn test_build_rejects_unknown_rule_tokens() {
        let rules = vec![rule(1, "q0 0 q1 0 R"), rule(2, "q1 2 q1 0 R")];
        let error = TransitionTable::build(&rules, &[]).unwrap_err();

        assert_eq!(
            error,
            TuringMachineError::UnknownSymbolKind {
                kind: SymbolKind::Symbol,
                value: "2".into(),
            }
        );
    }
}
