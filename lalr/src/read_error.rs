
use thiserror::Error;

use crate::grammar::GrammarError;
use crate::parser::TableError;
use super::line_counter::*;

#[derive(Debug, Error)]
#[error("{span}\n{kind}")]
pub struct ReadError<'a> {
    pub span: Span<'a>,
    pub kind: ReadErrorKind,
}

impl<'a, K: Into<ReadErrorKind>> From<(Span<'a>, K)> for ReadError<'a> {
    fn from(desc: (Span<'a>, K)) -> Self {
        ReadError {
            span: desc.0,
            kind: desc.1.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadErrorKind {
    #[error("Expected a section header (a line starting with '#').")]
    ExpectedHeader,
    #[error("Missing the {0} section.")]
    MissingSection(&'static str),
    #[error("Expected exactly one line in the {section} section, found {found}.")]
    ExpectedOneLine {
        section: &'static str,
        found: usize,
    },
    #[error("Invalid separator '{0}'.")]
    InvalidSeparator(String),
    #[error("The separator '{0}' is also a grammar token.")]
    SeparatorIsSymbol(String),
    #[error("Production line does not follow the LHS token '{lhs}' with separator '{separator}'.")]
    MissingSeparator {
        lhs: String,
        separator: String,
    },
    #[error("'{0}' is not an integer.")]
    NotAnInteger(String),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Table(#[from] TableError),
}
