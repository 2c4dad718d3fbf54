
use log::{trace, warn};

use crate::line_counter::*;
use crate::read_error::{ReadError, ReadErrorKind};

/*
 * A header line (starting with '#') and the non-blank
 * lines that follow it, up to the next header.
 */
#[derive(Debug)]
pub(super) struct Section<'a> {
    pub name: &'static str,
    pub header: Line<'a>,
    pub lines: Vec<Line<'a>>,
}

impl<'a> Section<'a> {
    /// The only line of the section, trimmed.
    pub fn single(&self, file: &'a str) -> Result<Word<'a>, ReadError<'a>> {
        match self.lines.as_slice() {
            [line] => Ok(line.trimmed()),
            lines => {
                let span = match lines.get(1) {
                    Some(extra) => extra.span(file),
                    None => self.header.end_span(file),
                };
                let kind = ReadErrorKind::ExpectedOneLine {
                    section: self.name,
                    found: lines.len(),
                };
                Err((span, kind).into())
            },
        }
    }
}

pub(super) struct Sections<'a> {
    file: &'a str,
    sections: std::vec::IntoIter<(Line<'a>, Vec<Line<'a>>)>,
    end: Span<'a>,
}

impl<'a> Sections<'a> {
    pub fn split(file: &'a str, contents: &'a str) -> Result<Sections<'a>, ReadError<'a>> {
        let mut sections: Vec<(Line<'a>, Vec<Line<'a>>)> = Vec::new();
        let mut end = Span::new(file, (0, 1, 1), (0, 1, 1));

        for line in LineIter::new(contents) {
            end = line.end_span(file);

            if line.text.starts_with('#') {
                sections.push((line, Vec::new()));
            } else if !line.is_blank() {
                match sections.last_mut() {
                    Some((_, lines)) => lines.push(line),
                    None => return Err((line.span(file), ReadErrorKind::ExpectedHeader).into()),
                }
            }
        }

        Ok(Sections {
            file,
            sections: sections.into_iter(),
            end,
        })
    }

    /// The next section, which the caller calls `name`.
    pub fn expect(&mut self, name: &'static str) -> Result<Section<'a>, ReadError<'a>> {
        match self.sections.next() {
            Some((header, lines)) => Ok(Section {name, header, lines}),
            None => Err((self.end, ReadErrorKind::MissingSection(name)).into()),
        }
    }

    /*
     * Anything past the expected sections is ignored. A closing
     * header alone is the normal case, other content gets a warning.
     */
    pub fn finish(self) {
        let file = self.file;
        for (header, lines) in self.sections {
            if let Some(line) = lines.first() {
                warn!("{}: ignoring {} line(s) after the last section", line.span(file), lines.len());
            } else {
                trace!("{}: closing header '{}'", header.span(file), header.text);
            }
        }
    }
}
