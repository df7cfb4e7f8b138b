use logos::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Error {
    #[error("Escape sequence truncated at end of input")]
    TruncatedEscape(Span),
    #[error("Invalid hex in escape sequence '{0}'")]
    InvalidEscapeHex(String, Span),
    #[error("Invalid hex in BER value '{0}'")]
    InvalidBerHex(String, Span),
    #[error("Failed to decode BER value: {0}")]
    BerDecode(String, Span),
    #[error("DN ended with incomplete type, value pair")]
    IncompletePair(Span),
    #[error("Attribute text is not valid UTF-8")]
    InvalidUtf8(Span),
    #[error("Unrecognized token")]
    UnrecognizedToken(Span),
}

impl Error {
    pub fn is_default(&self) -> bool {
        matches!(self, Error::UnrecognizedToken(_))
    }

    /// The byte range of the input the error refers to.
    #[rustfmt::skip]
    pub fn span(&self) -> &Span {
        match self {
            Error::TruncatedEscape(range) => range,
            Error::InvalidEscapeHex(_, range) => range,
            Error::InvalidBerHex(_, range) => range,
            Error::BerDecode(_, range) => range,
            Error::IncompletePair(range) => range,
            Error::InvalidUtf8(range) => range,
            Error::UnrecognizedToken(range) => range,
        }
    }

    fn format_message(
        message: &dyn ToString,
        source: &str,
        range: &Span,
    ) -> String {
        let message = message.to_string();
        let start = range.start.min(source.len());
        let end = range.end.min(source.len());
        // DNs are normally single-line, but a value may legally carry a raw
        // newline, so locate the line holding `start`.
        let mut line_number = 1;
        let mut line_start = 0;
        for (idx, byte) in source.bytes().enumerate() {
            if idx >= start {
                break;
            }
            if byte == b'\n' {
                line_number += 1;
                line_start = idx + 1;
            }
        }
        let line = source.lines().nth(line_number - 1).unwrap_or("");
        let column = start.saturating_sub(line_start);
        let underline_len = end.saturating_sub(start).max(1);
        let caret = " ".repeat(column) + &"^".repeat(underline_len);
        format!("line {line_number}: {message}\n{line}\n{caret}")
    }

    /// Renders the error together with the offending line of `source` and a
    /// caret underline beneath the span.
    pub fn full_message(&self, source: &str) -> String {
        Self::format_message(self, source, self.span())
    }
}

impl Default for Error {
    fn default() -> Self { Error::UnrecognizedToken(Span::default()) }
}

pub type Result<T> = std::result::Result<T, Error>;
