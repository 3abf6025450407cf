//! This module defines the `TuringMachine` struct, which executes a `TransitionTable` against a
//! single tape. It handles the machine's state, tape operations, head movements, and the
//! accept/reject decision.

use crate::alphabet::{Direction, State, Symbol, BLANK};
use crate::table::TransitionTable;
use crate::types::{Halt, Rejection, Step, Transition};

/// A single run of a machine over one input.
///
/// Each run owns its tape exclusively; the table is only borrowed, so any number of runs may
/// share one table.
///
/// The tape grows by one blank cell whenever the head moves past its right end. It never grows
/// on the left: moving left from the first cell rejects the input.
pub struct TuringMachine<'a> {
    table: &'a TransitionTable,
    input: String,
    state: State,
    tape: Vec<char>,
    head: usize,
    step_count: usize,
    halted: Option<Halt>,
}

impl<'a> TuringMachine<'a> {
    /// Creates a new run of `table` over `input`.
    ///
    /// The tape holds the characters of `input` followed by one blank, the head is on the first
    /// cell and the state is `q0`.
    pub fn new(table: &'a TransitionTable, input: &str) -> Self {
        Self {
            table,
            input: input.to_string(),
            state: State::INITIAL,
            tape: initial_tape(input),
            head: 0,
            step_count: 0,
            halted: None,
        }
    }

    /// Executes a single step of the machine.
    ///
    /// The accepting check happens before the table is consulted, so a machine sitting in an
    /// accepting state halts without reading the tape.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if a transition was applied.
    /// * `Step::Halt(_)` once the machine accepts or rejects. Every later call returns the same
    ///   halt.
    pub fn step(&mut self) -> Step {
        if let Some(halt) = &self.halted {
            return Step::Halt(halt.clone());
        }

        tracing::debug!(
            tape = %self.tape_string(),
            state = %self.state,
            head = self.head,
            "step {}",
            self.step_count
        );

        if self.table.is_accepting(self.state) {
            tracing::debug!(state = %self.state, "machine reached accepting state");
            return self.halt(Halt::Accept(self.state));
        }

        let transition = match self.transition().copied() {
            Some(t) => t,
            None => {
                tracing::debug!(state = %self.state, "no valid transition found, machine halts");
                return self.halt(Halt::Reject(Rejection::NoRule {
                    state: self.state,
                    symbol: self.symbol(),
                }));
            }
        };

        self.tape[self.head] = transition.write.as_char();
        self.state = transition.to;
        self.step_count += 1;

        match transition.direction {
            Direction::Left => {
                if self.head == 0 {
                    tracing::debug!(state = %self.state, "head moved out of bounds, rejecting input");
                    return self.halt(Halt::Reject(Rejection::LeftEdge { state: self.state }));
                }
                self.head -= 1;
            }
            Direction::Right => {
                self.head += 1;
                if self.head >= self.tape.len() {
                    self.tape.push(BLANK);
                }
            }
        }

        Step::Continue
    }

    /// Runs the machine until it halts.
    ///
    /// There is no step limit: a table that cycles forever without reaching an accepting state
    /// or a missing rule never returns.
    pub fn run(&mut self) -> Halt {
        loop {
            if let Step::Halt(halt) = self.step() {
                return halt;
            }
        }
    }

    /// Returns the current state of the machine.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the input this run was created with.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the tape contents.
    pub fn tape(&self) -> &[char] {
        &self.tape
    }

    /// Returns the tape contents as a string.
    pub fn tape_string(&self) -> String {
        self.tape.iter().collect()
    }

    /// Returns the head position.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the number of transitions applied so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the character under the head.
    pub fn symbol(&self) -> char {
        self.tape[self.head]
    }

    /// Checks whether the machine has halted.
    pub fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    /// Finds the transition for the current state and the character under the head.
    ///
    /// A character outside the tape alphabet never matches any transition.
    pub fn transition(&self) -> Option<&Transition> {
        Symbol::from_char(self.symbol()).and_then(|symbol| self.table.lookup(self.state, symbol))
    }

    /// Resets the machine to its initial configuration.
    pub fn reset(&mut self) {
        self.state = State::INITIAL;
        self.tape = initial_tape(&self.input);
        self.head = 0;
        self.step_count = 0;
        self.halted = None;
    }

    fn halt(&mut self, halt: Halt) -> Step {
        self.halted = Some(halt.clone());
        Step::Halt(halt)
    }
}

/// Runs `table` over `input` and reports whether the input is accepted.
///
/// Both ways of rejecting (no applicable rule, or the head moving off the left edge) return
/// `false`.
pub fn run(table: &TransitionTable, input: &str) -> bool {
    TuringMachine::new(table, input).run().is_accept()
}

fn initial_tape(input: &str) -> Vec<char> {
    input.chars().chain(std::iter::once(BLANK)).collect()
}
