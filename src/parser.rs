//! This module provides the parser for machine configurations, utilizing the `pest` crate.
//! The grammar in `grammar.pest` describes one configuration line; this module walks the input
//! line by line and collects accepting states, transition rules and diagnostics into a `Config`.

use crate::encoder::encode_rules;
use crate::table::TransitionTable;
use crate::types::{RuleText, TuringMachineError};
use pest::{iterators::Pair, Parser as PestParser};
use pest_derive::Parser as PestParser;
use serde::{Deserialize, Serialize};

/// Derives a `PestParser` for the configuration line grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct ConfigParser;

/// A machine configuration as read from text.
///
/// Names are kept as written. They are checked against the alphabet only when the
/// configuration is turned into a table or encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Transition rules in file order.
    pub rules: Vec<RuleText>,
    /// Names listed on `FinalState:` lines.
    pub final_states: Vec<String>,
    /// Problems found while reading; each skipped line has one entry.
    #[serde(skip)]
    pub diagnostics: Vec<TuringMachineError>,
}

impl Config {
    /// Builds the transition table described by this configuration.
    pub fn table(&self) -> Result<TransitionTable, TuringMachineError> {
        TransitionTable::build(&self.rules, &self.final_states)
    }

    /// Encodes the rules of this configuration into a bitstring.
    pub fn encode(&self) -> Result<String, TuringMachineError> {
        encode_rules(&self.rules)
    }
}

/// Parses the given configuration text into a `Config`.
///
/// Parsing never fails. Comment lines (`#`) and blank lines are ignored, `FinalState:` lines
/// may appear anywhere, and a `Transitions:` line (any case) switches to reading rules. A rule
/// line without exactly five space-separated tokens is skipped and reported as a
/// `MalformedConfigLine` diagnostic.
///
/// # Arguments
///
/// * `input` - A string slice containing the configuration.
pub fn parse(input: &str) -> Config {
    let mut config = Config::default();
    let mut in_transitions = false;

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(pair) => match pair.as_rule() {
                Rule::final_states => config.final_states.extend(parse_final_states(pair)),
                Rule::transitions_header => in_transitions = true,
                Rule::transition if in_transitions => {
                    config.rules.push(parse_rule(pair, index + 1));
                }
                _ => {} // Comments, and rules before the transitions section
            },
            None if in_transitions => {
                let diagnostic = TuringMachineError::MalformedConfigLine {
                    line: index + 1,
                    content: line.to_string(),
                    tokens: line.split(' ').count(),
                };
                tracing::warn!("{diagnostic}");
                config.diagnostics.push(diagnostic);
            }
            None => {}
        }
    }

    config
}

/// Parses one trimmed line, returning the pair of the alternative it matched.
fn parse_line(line: &str) -> Option<Pair<'_, Rule>> {
    ConfigParser::parse(Rule::line, line)
        .ok()?
        .next()?
        .into_inner()
        .next()
}

/// Collects the trimmed, non-empty names of a `FinalState:` line.
fn parse_final_states(pair: Pair<Rule>) -> Vec<String> {
    pair.into_inner()
        .map(|name| name.as_str().trim())
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Builds a `RuleText` from a matched transition line.
///
/// Tokens appear as `<from> <read> <to> <write> <direction>`: the target state comes before
/// the written symbol.
fn parse_rule(pair: Pair<Rule>, line: usize) -> RuleText {
    let mut tokens = pair.into_inner().map(|token| token.as_str().to_string());
    let mut next = || tokens.next().unwrap_or_default();

    RuleText {
        line,
        from: next(),
        read: next(),
        to: next(),
        write: next(),
        direction: next(),
    }
}
