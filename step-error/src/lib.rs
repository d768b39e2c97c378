//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors here never describe a wrong algebra step. A wrong step is an ordinary, negative check
//! result. An [`Error`] means the expression tree handed to the checker could not have come from a
//! well-behaved parser.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of a rendered expression that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the rendered expression that this error originated from, in characters.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, using `input` as the source the spans point into.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Renders the report of this error into a string.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use pretty_assertions::assert_eq;
    use super::*;

    #[derive(Debug)]
    struct Lonely;

    impl ErrorKind for Lonely {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message("this addition has only one term")
                .with_label(Label::new((src_id, spans[0].clone()))
                    .with_message("here")
                    .with_color(EXPR))
                .finish()
        }
    }

    #[test]
    fn report_mentions_message_and_label() {
        let err = Error::new(vec![4..9], Lonely);
        let report = err.report_to_string("before", "a * (x + )").unwrap();
        let plain = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();

        assert!(plain.contains("this addition has only one term"));
        assert!(plain.contains("here"));
        assert!(plain.contains("before"));
    }

    #[test]
    fn keeps_spans() {
        let err = Error::new(vec![0..1, 2..3], Lonely);
        assert_eq!(err.spans, vec![0..1, 2..3]);
    }
}
