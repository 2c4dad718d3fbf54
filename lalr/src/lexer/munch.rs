
use log::trace;

use crate::error::LexError;
use crate::grammar::{Grammar, Symbol};
use crate::line_counter::{CountingIter, Loc};

/*
 * The characters read since the last token, and where they start.
 */
struct Buffer<'g> {
    grammar: &'g Grammar,
    text: String,
    start: Loc,
}

impl<'g> Buffer<'g> {
    /*
     * `candidates` are the terminals the buffer is a prefix of,
     * when it cannot be committed.
     */
    fn error(&self, candidates: &[&Symbol]) -> LexError {
        let (symbol, line, column) = (self.text.clone(), self.start.1, self.start.2);
        match candidates {
            [] => LexError::NoMatch {symbol, line, column},
            [_] => LexError::Incomplete {symbol, line, column},
            _ => LexError::Ambiguous {symbol, line, column, candidates: candidates.len()},
        }
    }

    fn emit(&mut self, token: &Symbol) -> Symbol {
        trace!("Token '{}' at {}:{}", token.name(), self.start.1, self.start.2);
        self.text.clear();
        token.clone()
    }

    /*
     * Adds a character. Commits as soon as a single terminal
     * is left and the buffer spells it out entirely.
     */
    fn push(&mut self, c: char, loc: Loc) -> Result<Option<Symbol>, LexError> {
        if self.text.is_empty() {
            self.start = loc;
        }
        self.text.push(c);

        let grammar = self.grammar;
        match grammar.terminal_prefix_matches(&self.text).as_slice() {
            [] => Err(self.error(&[])),
            [token] if token.name() == self.text => Ok(Some(self.emit(token))),
            _ => Ok(None),
        }
    }

    /*
     * Called on whitespace and at the end of input: the buffer
     * must be a whole terminal and no other terminal may extend it.
     */
    fn close(&mut self) -> Result<Option<Symbol>, LexError> {
        if self.text.is_empty() {
            return Ok(None)
        }

        let grammar = self.grammar;
        match grammar.terminal_prefix_matches(&self.text).as_slice() {
            [token] if token.name() == self.text => Ok(Some(self.emit(token))),
            candidates => Err(self.error(candidates)),
        }
    }
}

/// Splits `input` into terminals of `grammar` with maximal munch,
/// and closes the stream with the end-of-input terminal.
///
/// Whitespace separates tokens but is never emitted. Lexing is
/// all-or-nothing: the first unknown or ambiguous symbol fails the
/// whole input.
pub fn lexicate(input: &str, grammar: &Grammar) -> Result<Vec<Symbol>, LexError> {
    let mut tokens = Vec::new();
    let mut buffer = Buffer {
        grammar,
        text: String::new(),
        start: (0, 1, 1),
    };

    for (c, loc) in CountingIter::new(input) {
        let token = if c.is_whitespace() {
            buffer.close()?
        } else {
            buffer.push(c, loc)?
        };
        tokens.extend(token);
    }

    tokens.extend(buffer.close()?);
    tokens.push(grammar.eof().clone());

    Ok(tokens)
}
