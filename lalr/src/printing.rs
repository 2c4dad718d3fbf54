
use std::fmt;

use crate::grammar::*;
use crate::parser::{Derivation, ParseTable};

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name() == EOF_NAME {
            write!(f, "$")
        } else {
            write!(f, "{}", self.name())
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        for symbol in &self.rhs {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start_symbol();
        writeln!(f, "Start Symbol:")?;
        writeln!(f, "  {} (idx: {})", start, start.index())?;

        writeln!(f, "Nonterminals:")?;
        for symbol in self.nonterminals() {
            writeln!(f, "  {} (idx: {})", symbol, symbol.index())?;
        }

        writeln!(f, "Terminals:")?;
        for symbol in self.terminals() {
            writeln!(f, "  {} (idx: {})", symbol, symbol.index())?;
        }

        write!(f, "Productions:")?;
        for (i, production) in self.productions().iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, production)?;
        }

        Ok(())
    }
}

/// Production numbers (starting at 1), separated by spaces.
impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers = self.reverse_rightmost().iter()
            .map(|p| (p + 1).to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", numbers.join(" "))
    }
}

pub struct TableDisplay<'a> {
    table: &'a ParseTable,
    grammar: &'a Grammar,
}

impl ParseTable {
    /// Rows are labelled through `grammar`, which must be the
    /// grammar the table was built against.
    pub fn display<'a>(&'a self, grammar: &'a Grammar) -> TableDisplay<'a> {
        TableDisplay {table: self, grammar}
    }
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |id: SymbolId| match self.grammar.symbol(id) {
            Some(symbol) => symbol.to_string(),
            None => format!("{:?}", id),
        };

        writeln!(f, "State List:")?;
        for (i, symbol) in self.table.states().iter().enumerate() {
            writeln!(f, "  {}: {}", i, symbol)?;
        }

        writeln!(f, "Action Table:")?;
        for (id, row) in self.table.action_rows() {
            write!(f, "  {}", label(id))?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }

        write!(f, "Goto Table:")?;
        for (id, row) in self.table.goto_rows() {
            write!(f, "\n  {}", label(id))?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
        }

        Ok(())
    }
}
