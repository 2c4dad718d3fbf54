
use log::debug;

use crate::grammar::{Grammar, GrammarBuilder, GrammarError};
use crate::line_counter::*;
use crate::read_error::{ReadError, ReadErrorKind};
use super::sections::Sections;

fn declare<'a, F>(file: &'a str, lines: &[Line<'a>], mut add: F) -> Result<(), ReadError<'a>>
where F: FnMut(&str) -> Result<usize, GrammarError> {
    for line in lines {
        let word = line.trimmed();
        add(word.text).map_err(|e| ReadError::from((word.span(file), e)))?;
    }
    Ok(())
}

/*
 * Adds `lhs -> rhs`, `at` being where to complain
 * when the right-hand side is empty.
 */
fn production<'a>(
    builder: &mut GrammarBuilder,
    file: &'a str,
    lhs: &Word<'a>,
    rhs: &[Word<'a>],
    at: Span<'a>,
) -> Result<(), ReadError<'a>> {
    let names = rhs.iter().map(|w| w.text).collect::<Vec<&str>>();

    match builder.production(lhs.text, &names) {
        Ok(_) => Ok(()),
        Err(e) => {
            let span = match &e {
                GrammarError::NotANonterminal(_) => lhs.span(file),
                GrammarError::UnknownSymbol(name) => rhs.iter()
                    .find(|w| w.text == *name)
                    .map(|w| w.span(file))
                    .unwrap_or(at),
                _ => at,
            };
            Err((span, e).into())
        },
    }
}

fn production_line<'a>(
    builder: &mut GrammarBuilder,
    file: &'a str,
    separator: &str,
    line: &Line<'a>,
) -> Result<(), ReadError<'a>> {
    let words = line.words();
    let lhs = words[0];

    match words.get(1) {
        Some(word) if word.text == separator => (),
        found => {
            let span = found.map(|w| w.span(file)).unwrap_or_else(|| line.end_span(file));
            let kind = ReadErrorKind::MissingSeparator {
                lhs: lhs.text.to_string(),
                separator: separator.to_string(),
            };
            return Err((span, kind).into())
        },
    }

    let mut start = 2;
    for (i, word) in words.iter().enumerate().skip(2) {
        if word.text == separator {
            production(builder, file, &lhs, &words[start..i], word.span(file))?;
            start = i + 1;
        }
    }

    production(builder, file, &lhs, &words[start..], line.end_span(file))
}

/// Reads a grammar description.
///
/// The file is made of five sections, each one introduced by a line
/// starting with '#': the separator, the nonterminals (one per line),
/// the start symbol, the terminals (one per line) and the productions.
/// A production line reads `LHS SEP rhs...`, and further `SEP rhs...`
/// groups add alternatives for the same left-hand side.
pub fn read_grammar<'a>(file: &'a str, contents: &'a str) -> Result<Grammar, ReadError<'a>> {
    let mut sections = Sections::split(file, contents)?;
    let mut builder = GrammarBuilder::new();

    let separator = sections.expect("separator")?.single(file)?;
    if separator.text.chars().any(char::is_whitespace) {
        let kind = ReadErrorKind::InvalidSeparator(separator.text.to_string());
        return Err((separator.span(file), kind).into())
    }

    let nonterminals = sections.expect("nonterminals")?;
    declare(file, &nonterminals.lines, |name| builder.nonterminal(name))?;

    let start = sections.expect("start symbol")?.single(file)?;
    builder.start(start.text).map_err(|e| ReadError::from((start.span(file), e)))?;

    let terminals = sections.expect("terminals")?;
    declare(file, &terminals.lines, |name| builder.terminal(name))?;

    if builder.lookup(separator.text).is_some() {
        let kind = ReadErrorKind::SeparatorIsSymbol(separator.text.to_string());
        return Err((separator.span(file), kind).into())
    }

    let productions = sections.expect("productions")?;
    for line in &productions.lines {
        production_line(&mut builder, file, separator.text, line)?;
    }

    sections.finish();

    let grammar = builder.build()
        .map_err(|e| ReadError::from((productions.header.span(file), e)))?;

    debug!(
        "{}: {} nonterminals, {} terminals, {} productions",
        file,
        grammar.nonterminal_count(),
        grammar.terminal_count(),
        grammar.production_count(),
    );

    Ok(grammar)
}
