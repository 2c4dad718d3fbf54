
use std::collections::BTreeMap;

use thiserror::Error;

use super::types::*;
use super::api::Grammar;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("Nonterminal token '{0}' already exists in grammar.")]
    DuplicateNonterminal(String),
    #[error("Terminal token '{0}' already exists in grammar.")]
    DuplicateTerminal(String),
    #[error("Nonterminal token '{0}' already exists in grammar. Cannot make a terminal token with the same name.")]
    TerminalShadowsNonterminal(String),
    #[error("Terminal token '{0}' already exists in grammar. Cannot make a nonterminal token with the same name.")]
    NonterminalShadowsTerminal(String),
    #[error("'{0}' is reserved for the end of input.")]
    Reserved(String),
    #[error("Invalid token name '{0}'.")]
    InvalidName(String),
    #[error("Start symbol '{0}' is not an existing nonterminal token.")]
    UnknownStart(String),
    #[error("The grammar has no start symbol.")]
    MissingStart,
    #[error("'{0}' is not a nonterminal token.")]
    NotANonterminal(String),
    #[error("A production of '{0}' has an empty right-hand side.")]
    EmptyProduction(String),
    #[error("Unrecognized token: '{0}'.")]
    UnknownSymbol(String),
    #[error("The grammar has no productions.")]
    NoProductions,
}

/*
 * Collects the symbols and productions of a grammar,
 * checking every structural constraint as they come.
 * Symbols must be declared before productions refer to them.
 */
#[derive(Default)]
pub struct GrammarBuilder {
    terminals: Vec<Symbol>,
    nonterminals: Vec<Symbol>,
    names: BTreeMap<String, SymbolId>,
    start: Option<usize>,
    productions: Vec<Production>,
}

impl GrammarBuilder {
    pub fn new() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    fn check_name(&self, name: &str) -> Result<(), GrammarError> {
        if name == EOF_NAME {
            Err(GrammarError::Reserved(name.to_string()))
        } else if name.is_empty() || name.chars().any(char::is_whitespace) {
            Err(GrammarError::InvalidName(name.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.names.get(name).copied()
    }

    fn symbol(&self, id: SymbolId) -> &Symbol {
        match id {
            SymbolId::T(i) => &self.terminals[i],
            SymbolId::N(i) => &self.nonterminals[i],
        }
    }

    pub fn nonterminal(&mut self, name: &str) -> Result<usize, GrammarError> {
        self.check_name(name)?;
        match self.lookup(name) {
            Some(SymbolId::N(_)) => Err(GrammarError::DuplicateNonterminal(name.to_string())),
            Some(SymbolId::T(_)) => Err(GrammarError::NonterminalShadowsTerminal(name.to_string())),
            None => {
                let id = SymbolId::N(self.nonterminals.len());
                self.nonterminals.push(Symbol::new(name, id));
                self.names.insert(name.to_string(), id);
                Ok(id.index())
            }
        }
    }

    pub fn terminal(&mut self, name: &str) -> Result<usize, GrammarError> {
        self.check_name(name)?;
        match self.lookup(name) {
            Some(SymbolId::T(_)) => Err(GrammarError::DuplicateTerminal(name.to_string())),
            Some(SymbolId::N(_)) => Err(GrammarError::TerminalShadowsNonterminal(name.to_string())),
            None => {
                let id = SymbolId::T(self.terminals.len());
                self.terminals.push(Symbol::new(name, id));
                self.names.insert(name.to_string(), id);
                Ok(id.index())
            }
        }
    }

    pub fn start(&mut self, name: &str) -> Result<(), GrammarError> {
        match self.lookup(name) {
            Some(SymbolId::N(i)) => {
                self.start = Some(i);
                Ok(())
            },
            _ => Err(GrammarError::UnknownStart(name.to_string())),
        }
    }

    /*
     * Adds the production `lhs -> rhs` and returns its (zero-based) index.
     */
    pub fn production(&mut self, lhs: &str, rhs: &[&str]) -> Result<usize, GrammarError> {
        let lhs = match self.lookup(lhs) {
            Some(id @ SymbolId::N(_)) => self.symbol(id).clone(),
            _ => return Err(GrammarError::NotANonterminal(lhs.to_string())),
        };

        if rhs.is_empty() {
            return Err(GrammarError::EmptyProduction(lhs.name().to_string()))
        }

        let rhs = rhs.iter().map(|name| {
            self.lookup(name)
                .map(|id| self.symbol(id).clone())
                .ok_or_else(|| GrammarError::UnknownSymbol(name.to_string()))
        }).collect::<Result<Vec<Symbol>, GrammarError>>()?;

        self.productions.push(Production {lhs, rhs});
        Ok(self.productions.len() - 1)
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        let start = self.start.ok_or(GrammarError::MissingStart)?;

        if self.productions.is_empty() {
            return Err(GrammarError::NoProductions)
        }

        Ok(Grammar::new(
            self.terminals,
            self.nonterminals,
            start,
            self.productions,
            self.names,
        ))
    }
}
