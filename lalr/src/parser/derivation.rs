
use crate::error::DeriveError;
use crate::grammar::{Grammar, Symbol, SymbolId};

/// The productions applied by a successful parse, in the order they
/// were reduced (a reverse rightmost derivation).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Derivation {
    reductions: Vec<usize>,
}

impl From<Vec<usize>> for Derivation {
    fn from(reductions: Vec<usize>) -> Self {
        Derivation {reductions}
    }
}

impl Derivation {
    pub fn reverse_rightmost(&self) -> &[usize] {
        &self.reductions
    }

    pub fn rightmost(&self) -> Vec<usize> {
        self.reductions.iter().rev().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.reductions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reductions.is_empty()
    }

    /*
     * Replays the rightmost derivation from the start symbol,
     * each step rewriting the rightmost non-terminal.
     * Returns every sentential form, the start symbol first.
     */
    pub fn sentential_forms(&self, grammar: &Grammar) -> Result<Vec<Vec<SymbolId>>, DeriveError> {
        let mut form = vec!(grammar.start_symbol().id());
        let mut forms = vec!(form.clone());

        for p in self.rightmost() {
            let rule = grammar.production(p)?;
            let pos = form.iter()
                .rposition(|s| !s.is_terminal())
                .ok_or(DeriveError::NoNonterminal {production: p})?;

            if form[pos] != rule.lhs.id() {
                let expected = grammar.symbol(form[pos])
                    .map(|s| s.name().to_string())
                    .unwrap_or_default();
                return Err(DeriveError::Mismatch {
                    production: p,
                    expected,
                    found: rule.lhs.name().to_string(),
                })
            }

            form.splice(pos..=pos, rule.rhs.iter().map(Symbol::id));
            forms.push(form.clone());
        }

        Ok(forms)
    }
}
