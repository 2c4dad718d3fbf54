
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Production index {index} exceeds production list ({count} productions).")]
pub struct OutOfRange {
    pub index: usize,
    pub count: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unknown symbol '{symbol}' found during lexicating at {line}:{column}.")]
    NoMatch {
        symbol: String,
        line: usize,
        column: usize,
    },
    #[error("Unknown symbol '{symbol}' found during lexicating at {line}:{column} (only a prefix of a terminal).")]
    Incomplete {
        symbol: String,
        line: usize,
        column: usize,
    },
    #[error("Unknown symbol '{symbol}' found during lexicating at {line}:{column} ({candidates} terminals start with it).")]
    Ambiguous {
        symbol: String,
        line: usize,
        column: usize,
        candidates: usize,
    },
}

impl LexError {
    /// The text that could not be matched.
    pub fn symbol(&self) -> &str {
        match self {
            LexError::NoMatch {symbol, ..}
            | LexError::Incomplete {symbol, ..}
            | LexError::Ambiguous {symbol, ..} => symbol,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("The parse table was built for {table} productions, the grammar has {grammar}.")]
    TableMismatch {
        grammar: usize,
        table: usize,
    },
    #[error("No ACTION row for terminal '{terminal}' (state {state}).")]
    UnknownTerminal {
        terminal: String,
        state: usize,
    },
    #[error("Parser hit an empty cell while parsing: state {state}, lookahead '{lookahead}'.")]
    NoAction {
        state: usize,
        lookahead: String,
    },
    #[error("Invalid action {value} in state {state} on '{lookahead}'.")]
    InvalidAction {
        value: i64,
        state: usize,
        lookahead: String,
    },
    #[error("No GOTO entry for '{nonterminal}' in state {state}.")]
    NoGoto {
        nonterminal: String,
        state: usize,
    },
    #[error("Reducing by production index {production} pops {needed} states, the stack holds {depth}.")]
    StackUnderflow {
        production: usize,
        needed: usize,
        depth: usize,
    },
    #[error("Ran out of input during parse without halting (state {state}).")]
    InputExhausted {
        state: usize,
    },
    #[error(transparent)]
    Production(#[from] OutOfRange),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeriveError {
    #[error("Production index {production} rewrites '{found}' but the rightmost nonterminal is '{expected}'.")]
    Mismatch {
        production: usize,
        expected: String,
        found: String,
    },
    #[error("Production index {production} applied to a form without nonterminals.")]
    NoNonterminal {
        production: usize,
    },
    #[error(transparent)]
    Production(#[from] OutOfRange),
}
