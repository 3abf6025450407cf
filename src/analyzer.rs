//! This module provides functions for analyzing transition tables to detect likely mistakes
//! before execution. None of the findings prevent a table from running; they point at rules
//! and states that can never take effect.

use crate::alphabet::State;
use crate::table::TransitionTable;
use std::collections::BTreeSet;
use std::fmt;

/// Represents the findings of an analysis of a transition table.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisWarning {
    /// The transition at `index` has the same state and read symbol as the earlier transition
    /// at `shadowed_by`, so it is never applied.
    ShadowedTransition { index: usize, shadowed_by: usize },
    /// The table has no accepting states, so every input is rejected or runs forever.
    NoAcceptingStates,
    /// Accepting states that no sequence of transitions from `q0` can reach.
    UnreachableAcceptingStates(Vec<State>),
    /// States that have outgoing transitions but cannot be reached from `q0`.
    UnreachableStates(Vec<State>),
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisWarning::ShadowedTransition { index, shadowed_by } => write!(
                f,
                "Transition #{} is never applied: transition #{} matches the same state and symbol",
                index + 1,
                shadowed_by + 1
            ),
            AnalysisWarning::NoAcceptingStates => write!(f, "No accepting states are defined"),
            AnalysisWarning::UnreachableAcceptingStates(states) => {
                write!(f, "Accepting states are unreachable: {}", join(states))
            }
            AnalysisWarning::UnreachableStates(states) => {
                write!(f, "Unreachable states detected: {}", join(states))
            }
        }
    }
}

/// Analyzes a transition table and returns every finding, in a fixed order.
///
/// # Arguments
///
/// * `table` - A reference to the `TransitionTable` to be analyzed.
///
/// # Returns
///
/// * `Vec<AnalysisWarning>` - Empty if nothing suspicious was found.
pub fn analyze(table: &TransitionTable) -> Vec<AnalysisWarning> {
    let mut warnings = check_shadowed_transitions(table);
    let reachable = reachable_states(table);

    warnings.extend(
        [check_accepting_states, check_unreachable_states]
            .iter()
            .filter_map(|check| check(table, &reachable)),
    );

    warnings
}

/// Finds transitions hidden behind an earlier transition with the same `(from, read)` pair.
fn check_shadowed_transitions(table: &TransitionTable) -> Vec<AnalysisWarning> {
    let transitions = table.transitions();

    transitions
        .iter()
        .enumerate()
        .filter_map(|(index, t)| {
            transitions[..index]
                .iter()
                .position(|earlier| earlier.from == t.from && earlier.read == t.read)
                .map(|shadowed_by| AnalysisWarning::ShadowedTransition { index, shadowed_by })
        })
        .collect()
}

/// Checks that at least one accepting state exists and is reachable.
fn check_accepting_states(
    table: &TransitionTable,
    reachable: &BTreeSet<State>,
) -> Option<AnalysisWarning> {
    let accepting: Vec<State> = table.accepting_states().collect();
    if accepting.is_empty() {
        return Some(AnalysisWarning::NoAcceptingStates);
    }

    let unreachable: Vec<State> = accepting
        .into_iter()
        .filter(|state| !reachable.contains(state))
        .collect();

    (!unreachable.is_empty()).then_some(AnalysisWarning::UnreachableAcceptingStates(unreachable))
}

/// Checks for states with outgoing transitions that the machine can never enter.
fn check_unreachable_states(
    table: &TransitionTable,
    reachable: &BTreeSet<State>,
) -> Option<AnalysisWarning> {
    let sources: BTreeSet<State> = table.transitions().iter().map(|t| t.from).collect();
    let unreachable: Vec<State> = sources.difference(reachable).copied().collect();

    (!unreachable.is_empty()).then_some(AnalysisWarning::UnreachableStates(unreachable))
}

/// Collects the states reachable from `q0` by following transitions, ignoring tape contents.
///
/// Accepting states end a run, so their outgoing transitions are not followed.
fn reachable_states(table: &TransitionTable) -> BTreeSet<State> {
    let mut visited = BTreeSet::new();
    let mut queue = vec![State::INITIAL];

    while let Some(state) = queue.pop() {
        if !visited.insert(state) || table.is_accepting(state) {
            continue;
        }

        for transition in table.transitions().iter().filter(|t| t.from == state) {
            if !visited.contains(&transition.to) {
                queue.push(transition.to);
            }
        }
    }

    visited
}

fn join(states: &[State]) -> String {
    states
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
