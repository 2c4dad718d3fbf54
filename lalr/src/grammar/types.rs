
// Name of the terminal that closes every token stream.
// It never appears in the terminal table.
pub const EOF_NAME: &str = "\\eof";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SymbolId {
    // Terminal
    T(usize),
    // Non-terminal
    N(usize),
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Terminal,
    Nonterminal,
}

impl SymbolId {
    pub fn kind(&self) -> Kind {
        match self {
            SymbolId::T(_) => Kind::Terminal,
            SymbolId::N(_) => Kind::Nonterminal,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            SymbolId::T(i) | SymbolId::N(i) => *i,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind() == Kind::Terminal
    }
}

/*
 * A grammar symbol: its name and its position in the
 * terminal or non-terminal table.
 * Equality and hashing both cover every field.
 */
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Symbol {
    name: String,
    id: SymbolId,
}

impl Symbol {
    pub(crate) fn new(name: &str, id: SymbolId) -> Symbol {
        Symbol {
            name: name.to_string(),
            id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn kind(&self) -> Kind {
        self.id.kind()
    }

    pub fn index(&self) -> usize {
        self.id.index()
    }

    pub fn is_terminal(&self) -> bool {
        self.id.is_terminal()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Production {
    pub lhs: Symbol,
    pub rhs: Vec<Symbol>,
}

impl Production {
    pub fn rhs_len(&self) -> usize {
        self.rhs.len()
    }
}
