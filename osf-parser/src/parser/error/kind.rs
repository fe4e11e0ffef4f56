//! The kinds of syntax errors the parser can produce.
//!
//! Each kind builds its own [`ariadne`] report; the shared shape (a message, one highlighted
//! label, optional help text) lives in [`report`].

use crate::tokenizer::TokenKind;
use ariadne::{Fmt, Label, Report, ReportBuilder, ReportKind};
use osf_error::{ErrorKind, TERM};
use std::ops::Range;

/// Starts a report with the given message and a single label pointing at the error's span.
fn report<'a>(
    src_id: &'a str,
    span: Range<usize>,
    message: impl ToString,
    label: impl ToString,
) -> ReportBuilder<'a, (&'a str, Range<usize>)> {
    Report::build(ReportKind::Error, src_id, span.start)
        .with_message(message)
        .with_label(
            Label::new((src_id, span))
                .with_message(label)
                .with_color(TERM),
        )
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            span,
            "unexpected end of input",
            format!("you might need to add another {} here", "term".fg(TERM)),
        ).finish()
    }
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            span,
            "expected end of input",
            format!("I could not understand the remaining {} here", "input".fg(TERM)),
        ).finish()
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            span,
            "unexpected token",
            format!(
                "expected one of: {}",
                self.expected
                    .iter()
                    .map(|kind| format!("{:?}", kind))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        )
            .with_help(format!("found {:?}", self.found))
            .finish()
    }
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(src_id, span, "unclosed parenthesis", "this parenthesis is not closed")
            .with_help(if self.opening {
                "add a closing parenthesis `)` somewhere after this"
            } else {
                "add an opening parenthesis `(` somewhere before this"
            })
            .finish()
    }
}

/// A subscript brace was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedBrace;

impl ErrorKind for UnclosedBrace {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(src_id, span, "unclosed brace", "this brace is not closed")
            .with_help("add a closing brace `}` after the subscript term")
            .finish()
    }
}

/// A numeral was too large to expand into a term.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumeral;

impl ErrorKind for InvalidNumeral {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(src_id, span, "invalid numeral", "this numeral is too large")
            .with_help("a numeral desugars to that many copies of `亞(0,0)`, which must fit in memory")
            .finish()
    }
}
