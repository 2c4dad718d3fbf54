
use std::collections::BTreeMap;

use crate::error::OutOfRange;
use super::types::*;
use super::builder::GrammarBuilder;

/// A context-free grammar: the terminal and non-terminal tables,
/// the start symbol and the productions.
///
/// Once built, a grammar is never modified; it can be shared freely
/// between lexers and parsers, including across threads.
#[derive(Clone, Debug)]
pub struct Grammar {
    terminals: Vec<Symbol>,
    nonterminals: Vec<Symbol>,
    start: usize,
    productions: Vec<Production>,
    names: BTreeMap<String, SymbolId>,
    eof: Symbol,
}

impl Grammar {
    pub(super) fn new(
        terminals: Vec<Symbol>,
        nonterminals: Vec<Symbol>,
        start: usize,
        productions: Vec<Production>,
        names: BTreeMap<String, SymbolId>,
    ) -> Grammar {
        let eof = Symbol::new(EOF_NAME, SymbolId::T(terminals.len()));
        Grammar {terminals, nonterminals, start, productions, names, eof}
    }

    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.names.get(name).copied()
    }

    pub fn lookup_terminal(&self, name: &str) -> Option<usize> {
        match self.lookup(name) {
            Some(SymbolId::T(i)) => Some(i),
            _ => None,
        }
    }

    pub fn lookup_nonterminal(&self, name: &str) -> Option<usize> {
        match self.lookup(name) {
            Some(SymbolId::N(i)) => Some(i),
            _ => None,
        }
    }

    /// Resolves an id to its symbol. `T(terminal_count())` is the
    /// end-of-input terminal.
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        match id {
            SymbolId::T(i) if i == self.terminals.len() => Some(&self.eof),
            SymbolId::T(i) => self.terminals.get(i),
            SymbolId::N(i) => self.nonterminals.get(i),
        }
    }

    pub fn production(&self, index: usize) -> Result<&Production, OutOfRange> {
        self.productions.get(index).ok_or(OutOfRange {
            index,
            count: self.productions.len(),
        })
    }

    /// Every terminal whose name starts with `prefix`, in table order.
    pub fn terminal_prefix_matches(&self, prefix: &str) -> Vec<&Symbol> {
        self.terminals.iter()
            .filter(|t| t.name().starts_with(prefix))
            .collect()
    }

    pub fn start_symbol(&self) -> &Symbol {
        &self.nonterminals[self.start]
    }

    /// The synthesized end-of-input terminal.
    pub fn eof(&self) -> &Symbol {
        &self.eof
    }

    pub fn terminals(&self) -> &[Symbol] {
        &self.terminals
    }

    pub fn nonterminals(&self) -> &[Symbol] {
        &self.nonterminals
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    pub fn nonterminal_count(&self) -> usize {
        self.nonterminals.len()
    }

    pub fn production_count(&self) -> usize {
        self.productions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::collection::btree_set;
    use proptest::prelude::*;

    fn grammar() -> Grammar {
        let mut builder = Grammar::builder();
        builder.nonterminal("E").unwrap();
        builder.nonterminal("T").unwrap();
        builder.start("E").unwrap();
        for t in &["+", "id", "i", "(", ")"] {
            builder.terminal(t).unwrap();
        }
        builder.production("E", &["E", "+", "T"]).unwrap();
        builder.production("E", &["T"]).unwrap();
        builder.production("T", &["id"]).unwrap();
        builder.production("T", &["(", "E", ")"]).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn lookups_are_split_by_kind() {
        let g = grammar();
        assert_eq!(g.lookup_terminal("id"), Some(1));
        assert_eq!(g.lookup_terminal("T"), None);
        assert_eq!(g.lookup_nonterminal("T"), Some(1));
        assert_eq!(g.lookup_nonterminal("id"), None);
        assert_eq!(g.lookup_terminal("missing"), None);
    }

    #[test]
    fn counts_and_start() {
        let g = grammar();
        assert_eq!(g.terminal_count(), 5);
        assert_eq!(g.nonterminal_count(), 2);
        assert_eq!(g.production_count(), 4);
        assert_eq!(g.start_symbol().name(), "E");
        assert_eq!(g.start_symbol().kind(), Kind::Nonterminal);
    }

    #[test]
    fn production_bounds() {
        let g = grammar();
        for i in 0..g.production_count() {
            assert!(g.production(i).is_ok());
        }
        assert_eq!(g.production(4), Err(OutOfRange {index: 4, count: 4}));
        assert_eq!(g.production(1).unwrap().rhs_len(), 1);
        assert_eq!(g.production(3).unwrap().lhs.name(), "T");
    }

    #[test]
    fn prefix_matches_keep_table_order() {
        let g = grammar();
        let names = |prefix: &str| g.terminal_prefix_matches(prefix).iter()
            .map(|s| s.name().to_string())
            .collect::<Vec<_>>();

        assert_eq!(names("i"), vec!["id", "i"]);
        assert_eq!(names("id"), vec!["id"]);
        assert_eq!(names("x"), Vec::<String>::new());
        assert_eq!(names("E"), Vec::<String>::new());
    }

    #[test]
    fn eof_sits_after_the_terminals() {
        let g = grammar();
        assert_eq!(g.eof().name(), EOF_NAME);
        assert_eq!(g.eof().id(), SymbolId::T(5));
        assert_eq!(g.symbol(SymbolId::T(5)), Some(g.eof()));
        assert_eq!(g.symbol(SymbolId::T(6)), None);
        assert_eq!(g.lookup_terminal(EOF_NAME), None);
    }

    #[test]
    fn grammar_is_shareable() {
        fn assert_shareable<T: Send + Sync>() {}
        assert_shareable::<Grammar>();
    }

    proptest! {
        #[test]
        fn symbol_tables_round_trip(
            terms in btree_set("[a-z]{1,4}", 1..12),
            nterms in btree_set("[A-Z]{1,4}", 1..12),
        ) {
            let terms: Vec<String> = terms.into_iter().collect();
            let nterms: Vec<String> = nterms.into_iter().collect();

            let mut builder = Grammar::builder();
            for n in &nterms {
                builder.nonterminal(n).unwrap();
            }
            builder.start(&nterms[0]).unwrap();
            for t in &terms {
                builder.terminal(t).unwrap();
            }
            builder.production(&nterms[0], &[terms[0].as_str()]).unwrap();
            let g = builder.build().unwrap();

            for (i, t) in terms.iter().enumerate() {
                prop_assert_eq!(g.lookup_terminal(t), Some(i));
                prop_assert_eq!(g.terminals()[i].index(), i);
                prop_assert_eq!(g.lookup_terminal(g.terminals()[i].name()), Some(i));
            }
            for (i, n) in nterms.iter().enumerate() {
                prop_assert_eq!(g.lookup_nonterminal(n), Some(i));
                prop_assert_eq!(g.nonterminals()[i].index(), i);
                prop_assert_eq!(g.lookup_nonterminal(g.nonterminals()[i].name()), Some(i));
            }
        }
    }
}
