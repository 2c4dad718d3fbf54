
use std::collections::BTreeMap;
use std::convert::TryFrom;

use thiserror::Error;

use crate::grammar::{Grammar, Symbol, SymbolId, EOF_NAME};
use super::types::Action;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Unrecognized state token: '{0}'.")]
    UnknownLabel(String),
    #[error("State '{0}' declared after the first table row.")]
    StatesClosed(String),
    #[error("ACTION rows must be labelled with a terminal token, found '{0}'.")]
    NotATerminal(String),
    #[error("GOTO rows must be labelled with a nonterminal token, found '{0}'.")]
    NotANonterminal(String),
    #[error("Duplicate ACTION row for '{0}'.")]
    DuplicateAction(String),
    #[error("Duplicate GOTO row for '{0}'.")]
    DuplicateGoto(String),
    #[error("Expected {expected} integers for the row of '{label}', found {found}.")]
    RowLength {
        label: String,
        expected: usize,
        found: usize,
    },
    #[error("Invalid reduction/halt in state {state}: '{value}' is out of range for {productions} productions.")]
    ReduceOutOfRange {
        state: usize,
        value: i64,
        productions: usize,
    },
    #[error("Invalid shift in state {state}: '{value}' is out of range for {states} states.")]
    ShiftOutOfRange {
        state: usize,
        value: i64,
        states: usize,
    },
    #[error("Invalid state in GOTO column {state}: '{value}' is out of range for {states} states.")]
    GotoOutOfRange {
        state: usize,
        value: i64,
        states: usize,
    },
}

impl TableError {
    /// The state (column) of the offending cell, if the error is about a cell.
    pub fn state(&self) -> Option<usize> {
        match self {
            TableError::ReduceOutOfRange {state, ..}
            | TableError::ShiftOutOfRange {state, ..}
            | TableError::GotoOutOfRange {state, ..} => Some(*state),
            _ => None,
        }
    }
}

/// The ACTION and GOTO tables of an LALR automaton.
///
/// State 0 is the end-of-input state and state 1 the start symbol's;
/// the other states are numbered in declaration order. Every row has
/// exactly one cell per state.
#[derive(Clone, Debug)]
pub struct ParseTable {
    states: Vec<Symbol>,
    action: BTreeMap<SymbolId, Vec<i64>>,
    goto_table: BTreeMap<SymbolId, Vec<usize>>,
    production_count: usize,
}

impl ParseTable {
    /// Cells are checked against `grammar`'s productions, so the table
    /// may only drive that grammar (`PDA::new` refuses any other).
    pub fn builder(grammar: &Grammar) -> ParseTableBuilder {
        ParseTableBuilder::new(grammar)
    }

    /// The symbol labelling each state.
    pub fn states(&self) -> &[Symbol] {
        &self.states
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn production_count(&self) -> usize {
        self.production_count
    }

    pub fn action_row(&self, terminal: SymbolId) -> Option<&[i64]> {
        self.action.get(&terminal).map(Vec::as_slice)
    }

    pub fn goto_row(&self, nonterminal: SymbolId) -> Option<&[usize]> {
        self.goto_table.get(&nonterminal).map(Vec::as_slice)
    }

    /// Decoded ACTION cell, `None` if there is no such row or state.
    pub fn action(&self, terminal: SymbolId, state: usize) -> Option<Action> {
        let value = *self.action_row(terminal)?.get(state)?;
        Action::decode(value, self.production_count)
    }

    pub fn action_rows(&self) -> impl Iterator<Item = (SymbolId, &[i64])> {
        self.action.iter().map(|(id, row)| (*id, row.as_slice()))
    }

    pub fn goto_rows(&self) -> impl Iterator<Item = (SymbolId, &[usize])> {
        self.goto_table.iter().map(|(id, row)| (*id, row.as_slice()))
    }
}

/*
 * Assembles a table against an already built grammar.
 * All the states must be declared before the first row.
 */
pub struct ParseTableBuilder<'g> {
    grammar: &'g Grammar,
    states: Vec<Symbol>,
    action: BTreeMap<SymbolId, Vec<i64>>,
    goto_table: BTreeMap<SymbolId, Vec<usize>>,
}

impl<'g> ParseTableBuilder<'g> {
    pub fn new(grammar: &'g Grammar) -> ParseTableBuilder<'g> {
        ParseTableBuilder {
            grammar,
            // The first state is 0 (end of input), then comes the start symbol.
            states: vec!(grammar.eof().clone(), grammar.start_symbol().clone()),
            action: BTreeMap::new(),
            goto_table: BTreeMap::new(),
        }
    }

    /// Declares the next state and returns its id.
    pub fn state(&mut self, label: &str) -> Result<usize, TableError> {
        if !self.action.is_empty() || !self.goto_table.is_empty() {
            return Err(TableError::StatesClosed(label.to_string()))
        }

        let symbol = self.grammar.lookup(label)
            .and_then(|id| self.grammar.symbol(id))
            .ok_or_else(|| TableError::UnknownLabel(label.to_string()))?;

        self.states.push(symbol.clone());
        Ok(self.states.len() - 1)
    }

    fn check_len(&self, label: &str, found: usize) -> Result<(), TableError> {
        if found == self.states.len() {
            Ok(())
        } else {
            Err(TableError::RowLength {
                label: label.to_string(),
                expected: self.states.len(),
                found,
            })
        }
    }

    pub fn action_row(&mut self, label: &str, cells: Vec<i64>) -> Result<(), TableError> {
        let id = if label == EOF_NAME {
            self.grammar.eof().id()
        } else {
            match self.grammar.lookup(label) {
                Some(id @ SymbolId::T(_)) => id,
                _ => return Err(TableError::NotATerminal(label.to_string())),
            }
        };

        self.check_len(label, cells.len())?;

        if self.action.contains_key(&id) {
            return Err(TableError::DuplicateAction(label.to_string()))
        }

        let states = self.states.len();
        let productions = self.grammar.production_count();

        for (state, &value) in cells.iter().enumerate() {
            match Action::decode(value, productions) {
                Some(Action::Shift(q)) if q >= states => {
                    return Err(TableError::ShiftOutOfRange {state, value, states})
                },
                None => {
                    return Err(TableError::ReduceOutOfRange {state, value, productions})
                },
                _ => (),
            }
        }

        self.action.insert(id, cells);
        Ok(())
    }

    pub fn goto_row(&mut self, label: &str, cells: Vec<i64>) -> Result<(), TableError> {
        let id = match self.grammar.lookup(label) {
            Some(id @ SymbolId::N(_)) => id,
            _ => return Err(TableError::NotANonterminal(label.to_string())),
        };

        self.check_len(label, cells.len())?;

        if self.goto_table.contains_key(&id) {
            return Err(TableError::DuplicateGoto(label.to_string()))
        }

        let states = self.states.len();
        let row = cells.iter().enumerate().map(|(state, &value)| {
            usize::try_from(value).ok()
                .filter(|q| *q < states)
                .ok_or(TableError::GotoOutOfRange {state, value, states})
        }).collect::<Result<Vec<usize>, TableError>>()?;

        self.goto_table.insert(id, row);
        Ok(())
    }

    pub fn build(self) -> ParseTable {
        ParseTable {
            states: self.states,
            action: self.action,
            goto_table: self.goto_table,
            production_count: self.grammar.production_count(),
        }
    }
}
