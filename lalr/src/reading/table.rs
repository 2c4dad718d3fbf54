
use log::debug;

use crate::grammar::Grammar;
use crate::line_counter::*;
use crate::parser::{ParseTable, TableError};
use crate::read_error::{ReadError, ReadErrorKind};
use super::sections::Sections;

/*
 * Splits a row into its label and cells.
 * The line is never blank, so there is a label.
 */
fn row<'a>(file: &'a str, line: &Line<'a>) -> Result<(Vec<Word<'a>>, Vec<i64>), ReadError<'a>> {
    let words = line.words();
    let cells = words[1..].iter().map(|w| {
        w.text.parse::<i64>()
            .map_err(|_| ReadError::from((w.span(file), ReadErrorKind::NotAnInteger(w.text.to_string()))))
    }).collect::<Result<Vec<i64>, ReadError<'a>>>()?;

    Ok((words, cells))
}

fn locate<'a>(file: &'a str, line: &Line<'a>, words: &[Word<'a>], e: TableError) -> ReadError<'a> {
    let span = match (&e, e.state()) {
        (TableError::RowLength {..}, _) => line.span(file),
        (_, Some(state)) => words.get(state + 1)
            .map(|w| w.span(file))
            .unwrap_or_else(|| line.span(file)),
        (_, None) => words[0].span(file),
    };
    (span, e).into()
}

/// Reads the ACTION and GOTO tables of `grammar`'s automaton.
///
/// Three sections: the state labels (one per line, states 0 and 1
/// being implicit), the ACTION rows and the GOTO rows. Each row is a
/// label followed by one integer per state.
pub fn read_table<'a>(file: &'a str, contents: &'a str, grammar: &Grammar) -> Result<ParseTable, ReadError<'a>> {
    let mut sections = Sections::split(file, contents)?;
    let mut builder = ParseTable::builder(grammar);

    for line in sections.expect("states")?.lines {
        let word = line.trimmed();
        builder.state(word.text).map_err(|e| ReadError::from((word.span(file), e)))?;
    }

    for line in sections.expect("action table")?.lines {
        let (words, cells) = row(file, &line)?;
        builder.action_row(words[0].text, cells)
            .map_err(|e| locate(file, &line, &words, e))?;
    }

    for line in sections.expect("goto table")?.lines {
        let (words, cells) = row(file, &line)?;
        builder.goto_row(words[0].text, cells)
            .map_err(|e| locate(file, &line, &words, e))?;
    }

    sections.finish();
    let table = builder.build();

    debug!(
        "{}: {} states, {} ACTION rows, {} GOTO rows",
        file,
        table.state_count(),
        table.action_rows().count(),
        table.goto_rows().count(),
    );

    Ok(table)
}
