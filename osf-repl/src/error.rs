use ariadne::{Label, Report, ReportKind, Source};
use osf_compute::ordinal::InvariantViolation;
use osf_error::{ErrorKind, TERM};
use osf_parser::parser::error::Error as ParseError;
use std::ops::Range;

/// Utility enum to package errors that can occur while processing a line of input.
#[derive(Debug)]
pub enum Error {
    /// An error that occurred while parsing a term.
    ParseError(ParseError),

    /// An error that occurred while computing, attached to the expression it came from.
    ComputeError(osf_error::Error),

    /// A command is missing one of its operands.
    MissingOperand(osf_error::Error),
}

impl Error {
    /// Packages a computation failure with the region of the line it came from.
    pub fn compute(span: Range<usize>, kind: InvariantViolation) -> Self {
        Self::ComputeError(osf_error::Error::new(span, kind))
    }

    /// Reports a missing operand at the given region of the line.
    pub fn missing_operand(span: Range<usize>, expected: &'static str) -> Self {
        Self::MissingOperand(osf_error::Error::new(span, MissingOperand { expected }))
    }

    /// Report the errors in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        let report = match self {
            Self::ParseError(err) => err.build_report("input"),
            Self::ComputeError(err) | Self::MissingOperand(err) => err.build_report("input"),
        };
        report.eprint(("input", Source::from(input))).unwrap();
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::ParseError(err)
    }
}

/// The report-building half of [`Error::MissingOperand`].
#[derive(Debug)]
struct MissingOperand {
    expected: &'static str,
}

impl ErrorKind for MissingOperand {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(format!("expected {}", self.expected))
            .with_label(
                Label::new((src_id, span))
                    .with_message(format!("add {} here", self.expected))
                    .with_color(TERM),
            )
            .finish()
    }
}
