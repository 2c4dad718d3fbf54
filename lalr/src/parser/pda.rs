
use log::trace;

use crate::error::ParseError;
use crate::grammar::{Grammar, Symbol};
use super::types::Action;
use super::table::ParseTable;
use super::derivation::Derivation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Shift(usize),
    Reduce(usize),
    Halt,
}

/// The pushdown automaton driven by a parse table.
///
/// It only borrows the grammar and the table: any number of parses
/// may run on the same pair at once, each one owning its own stack.
#[derive(Clone, Copy)]
pub struct PDA<'a> {
    grammar: &'a Grammar,
    table: &'a ParseTable,
}

impl<'a> PDA<'a> {
    /// Fails if `table` was not built against a grammar with the
    /// same productions, since reduce and halt codes depend on them.
    pub fn new(grammar: &'a Grammar, table: &'a ParseTable) -> Result<PDA<'a>, ParseError> {
        if grammar.production_count() != table.production_count() {
            return Err(ParseError::TableMismatch {
                grammar: grammar.production_count(),
                table: table.production_count(),
            })
        }
        Ok(PDA {grammar, table})
    }

    pub fn session(&self) -> Session<'a> {
        Session {
            pda: *self,
            stack: vec!(0), // The first state is 0.
            derivation: Vec::new(),
            halted: false,
        }
    }

    /// Parses a token stream ending with the end-of-input terminal.
    /// Returns the productions in the order they were reduced.
    pub fn parse(&self, tokens: &[Symbol]) -> Result<Derivation, ParseError> {
        let mut session = self.session();
        let mut tokens = tokens.iter().peekable();

        while let Some(lookahead) = tokens.peek() {
            match session.step(lookahead)? {
                Step::Shift(_) => {
                    tokens.next();
                },
                Step::Reduce(_) => (),
                Step::Halt => return Ok(session.finish()),
            }
        }

        Err(ParseError::InputExhausted {state: session.top()})
    }
}

/*
 * The state of one parse: the state stack and
 * the reductions applied so far.
 */
pub struct Session<'a> {
    pda: PDA<'a>,
    stack: Vec<usize>,
    derivation: Vec<usize>,
    halted: bool,
}

impl<'a> Session<'a> {
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    pub fn top(&self) -> usize {
        // The stack never loses its bottom state: reductions
        // check there is something left to push onto.
        self.stack[self.stack.len() - 1]
    }

    pub fn derivation(&self) -> &[usize] {
        &self.derivation
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn finish(self) -> Derivation {
        Derivation::from(self.derivation)
    }

    /*
     * Performs the move given by the table for the current
     * state and `lookahead`. Shifting consumes the lookahead,
     * reducing and halting don't.
     */
    pub fn step(&mut self, lookahead: &Symbol) -> Result<Step, ParseError> {
        if self.halted {
            return Ok(Step::Halt)
        }

        let state = self.top();
        let table = self.pda.table;

        let row = table.action_row(lookahead.id()).ok_or_else(|| ParseError::UnknownTerminal {
            terminal: lookahead.name().to_string(),
            state,
        })?;
        // Rows have one cell per state and only table states reach the stack.
        let value = row[state];

        match Action::decode(value, table.production_count()) {
            Some(Action::Shift(q)) => {
                trace!("Shift {} on '{}'", q, lookahead.name());
                self.stack.push(q);
                Ok(Step::Shift(q))
            },
            Some(Action::Reduce(p)) => {
                self.reduce(p)?;
                Ok(Step::Reduce(p))
            },
            Some(Action::Halt) => {
                trace!("Halt on '{}'", lookahead.name());
                self.halted = true;
                Ok(Step::Halt)
            },
            Some(Action::Error) => Err(ParseError::NoAction {
                state,
                lookahead: lookahead.name().to_string(),
            }),
            None => Err(ParseError::InvalidAction {
                value,
                state,
                lookahead: lookahead.name().to_string(),
            }),
        }
    }

    fn reduce(&mut self, p: usize) -> Result<(), ParseError> {
        let rule = self.pda.grammar.production(p)?;
        let needed = rule.rhs_len();

        if needed >= self.stack.len() {
            return Err(ParseError::StackUnderflow {
                production: p,
                needed,
                depth: self.stack.len(),
            })
        }

        self.stack.truncate(self.stack.len() - needed);
        let state = self.top();

        let target = self.pda.table.goto_row(rule.lhs.id())
            .and_then(|row| row.get(state).copied())
            // No transition ever leads back to the initial state.
            .filter(|q| *q != 0)
            .ok_or_else(|| ParseError::NoGoto {
                nonterminal: rule.lhs.name().to_string(),
                state,
            })?;

        trace!("Reduce {} ({}), goto {}", p + 1, rule.lhs.name(), target);
        self.stack.push(target);
        self.derivation.push(p);
        Ok(())
    }
}
