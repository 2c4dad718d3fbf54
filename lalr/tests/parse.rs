
use proptest::prelude::*;

use lalr::error::{LexError, ParseError};
use lalr::grammar::Grammar;
use lalr::lexer::lexicate;
use lalr::parser::{ParseTable, TableError, PDA};
use lalr::read_error::ReadErrorKind;
use lalr::reading::{read_grammar, read_table};

const ANBN_GRAMMAR: &str = include_str!("data/anbn.grammar");
const ANBN_TABLE: &str = include_str!("data/anbn.table");
const EXPR_GRAMMAR: &str = include_str!("data/expr.grammar");
const EXPR_TABLE: &str = include_str!("data/expr.table");

fn load(grammar: &str, table: &str) -> (Grammar, ParseTable) {
    let g = read_grammar("grammar", grammar).unwrap();
    let t = read_table("table", table, &g).unwrap();
    (g, t)
}

fn rhs_names(g: &Grammar, p: usize) -> Vec<&str> {
    g.production(p).unwrap().rhs.iter().map(|s| s.name()).collect()
}

fn spell(g: &Grammar, form: &[lalr::grammar::SymbolId]) -> String {
    form.iter()
        .map(|id| g.symbol(*id).unwrap().name())
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn nested_pairs() {
    let (g, t) = load(ANBN_GRAMMAR, ANBN_TABLE);

    let tokens = lexicate("a a b b", &g).unwrap();
    let names = tokens.iter().map(|s| s.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "a", "b", "b", "\\eof"]);

    let derivation = PDA::new(&g, &t).unwrap().parse(&tokens).unwrap();
    let rightmost = derivation.rightmost();
    assert_eq!(rhs_names(&g, rightmost[0]), vec!["a", "S", "b"]);
    assert_eq!(rhs_names(&g, rightmost[1]), vec!["a", "b"]);
    assert_eq!(derivation.to_string(), "2 1");
}

#[test]
fn unknown_character_fails_lexing() {
    let (g, _) = load(ANBN_GRAMMAR, ANBN_TABLE);
    let err = lexicate("a c b", &g).unwrap_err();
    assert_eq!(err, LexError::NoMatch {symbol: "c".into(), line: 1, column: 3});
    assert_eq!(err.to_string(), "Unknown symbol 'c' found during lexicating at 1:3.");
}

#[test]
fn short_action_row_fails_loading() {
    let g = read_grammar("anbn.grammar", ANBN_GRAMMAR).unwrap();
    let table = ANBN_TABLE.replace("a     2  0  2  0  0  0", "a     2  0  2  0  0");
    let err = read_table("anbn.table", &table, &g).unwrap_err();
    assert_eq!(
        err.kind,
        ReadErrorKind::Table(TableError::RowLength {label: "a".into(), expected: 6, found: 5}),
    );
    assert_eq!(err.span.line(), 7);
}

#[test]
fn running_out_of_input_after_a_reduction() {
    let g = read_grammar("anbn.grammar", ANBN_GRAMMAR).unwrap();
    // Shift the end of input instead of halting.
    let table = ANBN_TABLE.replace("\\eof  0 -3", "\\eof  0  1");
    let t = read_table("anbn.table", &table, &g).unwrap();

    let tokens = lexicate("a b", &g).unwrap();
    let err = PDA::new(&g, &t).unwrap().parse(&tokens).unwrap_err();
    assert_eq!(err, ParseError::InputExhausted {state: 1});
    assert_eq!(err.to_string(), "Ran out of input during parse without halting (state 1).");
}

#[test]
fn expressions() {
    let (g, t) = load(EXPR_GRAMMAR, EXPR_TABLE);
    let pda = PDA::new(&g, &t).unwrap();

    let tokens = lexicate("id + (id)", &g).unwrap();
    let derivation = pda.parse(&tokens).unwrap();
    assert_eq!(derivation.reverse_rightmost(), &[2, 1, 2, 1, 3, 0]);
    assert_eq!(derivation.to_string(), "3 2 3 2 4 1");

    let forms = derivation.sentential_forms(&g).unwrap();
    assert_eq!(spell(&g, &forms[0]), "E");
    assert_eq!(spell(&g, forms.last().unwrap()), "id + ( id )");

    let err = pda.parse(&lexicate("id + )", &g).unwrap()).unwrap_err();
    assert_eq!(err, ParseError::NoAction {state: 5, lookahead: ")".into()});
}

#[test]
fn one_table_many_threads() {
    let (g, t) = load(EXPR_GRAMMAR, EXPR_TABLE);
    let pda = PDA::new(&g, &t).unwrap();
    let inputs = ["id", "id + id", "(id)", "((id) + id) + id"];

    let lengths = std::thread::scope(|s| {
        inputs.iter()
            .map(|input| {
                let g = &g;
                s.spawn(move || {
                    let tokens = lexicate(input, g).unwrap();
                    pda.parse(&tokens).unwrap().len()
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert_eq!(lengths, vec![2, 4, 4, 10]);
}

proptest! {
    #[test]
    fn replaying_the_derivation_spells_the_input(n in 1usize..40) {
        let (g, t) = load(ANBN_GRAMMAR, ANBN_TABLE);
        let input = [vec!["a"; n], vec!["b"; n]].concat().join(" ");

        let tokens = lexicate(&input, &g).unwrap();
        let derivation = PDA::new(&g, &t).unwrap().parse(&tokens).unwrap();
        prop_assert_eq!(derivation.len(), n);

        let mut reversed = derivation.rightmost();
        reversed.reverse();
        prop_assert_eq!(reversed.as_slice(), derivation.reverse_rightmost());

        let forms = derivation.sentential_forms(&g).unwrap();
        prop_assert_eq!(spell(&g, forms.last().unwrap()), input);
    }

    #[test]
    fn unbalanced_input_is_rejected(n in 1usize..20, m in 1usize..20) {
        prop_assume!(n != m);
        let (g, t) = load(ANBN_GRAMMAR, ANBN_TABLE);
        let input = [vec!["a"; n], vec!["b"; m]].concat().join(" ");

        let tokens = lexicate(&input, &g).unwrap();
        let err = PDA::new(&g, &t).unwrap().parse(&tokens).unwrap_err();
        prop_assert!(matches!(err, ParseError::NoAction {..}), "{}", err);
    }
}
