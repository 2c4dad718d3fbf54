
use std::fmt;

// (character offset, line, column); lines and columns start at 1.
pub type Loc = (usize, usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub file: &'a str,
    pub start: Loc,
    pub end: Loc,
}

impl<'a> Span<'a> {
    pub fn new(file: &'a str, start: Loc, end: Loc) -> Span<'a> {
        Span {file, start, end}
    }

    pub fn line(&self) -> usize {
        self.start.1
    }

    pub fn column(&self) -> usize {
        self.start.2
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{{{}:{}-{}:{}}}",
            self.file,
            self.start.1, self.start.2,
            self.end.1, self.end.2,
        )
    }
}

/*
 * Walks the characters of a string, pairing each one
 * with its location.
 */
pub struct CountingIter<'a> {
    chars: std::str::Chars<'a>,
    line: usize,
    column: usize,
    i: usize,
}

impl<'a> CountingIter<'a> {
    pub fn new(s: &'a str) -> CountingIter<'a> {
        CountingIter {
            chars: s.chars(),
            line: 1,
            column: 1,
            i: 0,
        }
    }
}

impl Iterator for CountingIter<'_> {
    type Item = (char, Loc);

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        let res = (c, (self.i, self.line, self.column));

        // Prepare the position of the next character.
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.i += 1;

        Some(res)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub start: Loc,
    pub end: Loc,
}

impl<'a> Word<'a> {
    pub fn span<'f>(&self, file: &'f str) -> Span<'f> {
        Span::new(file, self.start, self.end)
    }
}

/*
 * A line of input, without its line terminator.
 * `start` is the location of its first character.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    pub start: Loc,
}

impl<'a> Line<'a> {
    fn loc(&self, i: usize) -> Loc {
        (self.start.0 + i, self.start.1, self.start.2 + i)
    }

    fn end(&self) -> Loc {
        self.loc(self.text.chars().count().saturating_sub(1))
    }

    pub fn span<'f>(&self, file: &'f str) -> Span<'f> {
        Span::new(file, self.start, self.end())
    }

    /// The location just past the last character, for
    /// reporting what is missing at the end of a line.
    pub fn end_span<'f>(&self, file: &'f str) -> Span<'f> {
        let past = self.loc(self.text.chars().count());
        Span::new(file, past, past)
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The line without surrounding whitespace, as a single word.
    pub fn trimmed(&self) -> Word<'a> {
        let leading = self.text.chars().take_while(|c| c.is_whitespace()).count();
        let text = self.text.trim();
        let len = text.chars().count();
        Word {
            text,
            start: self.loc(leading),
            end: self.loc(leading + len.saturating_sub(1)),
        }
    }

    /// Splits the line on whitespace.
    pub fn words(&self) -> Vec<Word<'a>> {
        let mut words = Vec::new();
        // (byte offset, character index) of the word being read
        let mut current: Option<(usize, usize)> = None;
        let mut count = 0;

        for (i, (b, c)) in self.text.char_indices().enumerate() {
            match (c.is_whitespace(), current) {
                (true, Some((sb, si))) => {
                    words.push(Word {
                        text: &self.text[sb..b],
                        start: self.loc(si),
                        end: self.loc(i - 1),
                    });
                    current = None;
                },
                (false, None) => current = Some((b, i)),
                _ => (),
            }
            count = i + 1;
        }

        if let Some((sb, si)) = current {
            words.push(Word {
                text: &self.text[sb..],
                start: self.loc(si),
                end: self.loc(count - 1),
            });
        }

        words
    }
}

/*
 * Splits a string into lines, keeping track of where
 * each one starts. Accepts both "\n" and "\r\n".
 */
pub struct LineIter<'a> {
    rest: Option<&'a str>,
    offset: usize,
    line: usize,
}

impl<'a> LineIter<'a> {
    pub fn new(s: &'a str) -> LineIter<'a> {
        LineIter {
            rest: if s.is_empty() {None} else {Some(s)},
            offset: 0,
            line: 1,
        }
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let (text, consumed, next) = match rest.find('\n') {
            Some(i) => (&rest[..i], &rest[..=i], Some(&rest[i + 1..]).filter(|s| !s.is_empty())),
            None => (rest, rest, None),
        };
        let text = text.strip_suffix('\r').unwrap_or(text);

        let line = Line {
            text,
            start: (self.offset, self.line, 1),
        };

        self.offset += consumed.chars().count();
        self.line += 1;
        self.rest = next;

        Some(line)
    }
}
