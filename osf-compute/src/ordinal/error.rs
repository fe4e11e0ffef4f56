use ariadne::{Label, Report, ReportKind};
use osf_error::{ErrorKind, TERM};
use std::ops::Range;

/// An internal assumption of the fundamental-sequence algorithm was contradicted.
///
/// On canonical terms this never happens; seeing it means a non-canonical term reached the
/// algorithm or the algorithm itself has a bug. Either way the computation is abandoned rather
/// than recovered.
#[derive(Debug, Clone, PartialEq)]
pub struct InvariantViolation {
    /// The assumption that broke.
    pub what: &'static str,
}

impl InvariantViolation {
    pub(crate) fn new(what: &'static str) -> Self {
        Self { what }
    }
}

impl ErrorKind for InvariantViolation {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message("internal invariant violated while expanding a fundamental sequence")
            .with_label(
                Label::new((src_id, span))
                    .with_message(format!("while evaluating this expression, {}", self.what))
                    .with_color(TERM),
            )
            .with_help("this is a bug in the calculator; please report it along with the input")
            .finish()
    }
}
