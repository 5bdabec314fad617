//! Error types.

use core::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Unexpected character that is not allowed by the IRI syntax.
    ///
    /// The error index points to the character, or to the end of input
    /// if there was unconsumed input expected but none left.
    UnexpectedChar,
    /// The input ended while a production still expected more characters.
    ///
    /// The error index equals the number of code points in the input.
    EndOfInput,
    /// Scheme that does not start with a letter.
    ///
    /// The error index points to the first character of the scheme.
    InvalidScheme,
    /// Percent-encoded octet with a non-hexadecimal digit.
    ///
    /// The error index points to the offending digit.
    InvalidPctEncoded,
    /// Decimal octet that is out of range, has a leading zero or is too long.
    ///
    /// The error index points to the first digit that cannot be accepted.
    InvalidDecOctet,
    /// IPv4 address without exactly four dot-separated octets.
    InvalidIpv4,
    /// IPv6 address with a misplaced colon or a wrong number of groups.
    InvalidIpv6,
    /// IPv6 address with more than one `::`, a `:::`, or a `::` eliding no group.
    InvalidZeroCollapse,
    /// IP literal that is neither an IPv6 address nor an IPvFuture.
    ///
    /// The error index points to the preceding left square bracket `[`.
    InvalidIpLiteral,
    /// Port that is missing, has more than five digits, or exceeds 65535.
    InvalidPort,
    /// Path segment that must be non-empty but is not.
    EmptySegment,
    /// IRI reference without a scheme where one is required.
    ///
    /// The error index is always zero.
    NoScheme,
}

impl ParseErrorKind {
    /// Returns a human-readable description of the violated rule.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::UnexpectedChar => "unexpected character",
            Self::EndOfInput => "unexpected end of input",
            Self::InvalidScheme => "scheme must start with a letter",
            Self::InvalidPctEncoded => "invalid percent-encoded octet",
            Self::InvalidDecOctet => "invalid decimal octet",
            Self::InvalidIpv4 => "invalid IPv4 address",
            Self::InvalidIpv6 => "invalid IPv6 address",
            Self::InvalidZeroCollapse => "invalid zero collapse in IPv6 address",
            Self::InvalidIpLiteral => "invalid IP literal",
            Self::InvalidPort => "invalid port",
            Self::EmptySegment => "empty path segment",
            Self::NoScheme => "scheme expected",
        }
    }
}

/// An error occurred when parsing an IRI (reference).
///
/// The index is counted in code points, not bytes.
///
/// When parsing from a [`String`](alloc::string::String), the input is kept
/// in the error and may be recovered with [`into_input`](Self::into_input).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParseError<I = ()> {
    pub(crate) index: usize,
    pub(crate) ch: Option<char>,
    pub(crate) kind: ParseErrorKind,
    pub(crate) input: I,
}

impl ParseError {
    pub(crate) fn new(index: usize, ch: Option<char>, kind: ParseErrorKind) -> Self {
        Self {
            index,
            ch,
            kind,
            input: (),
        }
    }

    pub(crate) fn with_input<I>(self, input: I) -> ParseError<I> {
        ParseError {
            index: self.index,
            ch: self.ch,
            kind: self.kind,
            input,
        }
    }
}

impl<I> ParseError<I> {
    /// Returns the code point index at which the error occurred.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the character at the error index, or `None` at end of input.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        self.ch
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Recovers the input that was attempted to parse.
    #[must_use]
    pub fn into_input(self) -> I {
        self.input
    }

    /// Returns the error with input erased.
    #[must_use]
    pub fn strip_input(&self) -> ParseError {
        ParseError::new(self.index, self.ch, self.kind)
    }
}

impl<I> fmt::Debug for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("index", &self.index)
            .field("char", &self.ch)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<I> fmt::Display for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {}", self.kind.message(), self.index)?;
        match self.ch {
            Some(c) => write!(f, " ({c:?})"),
            None if self.kind == ParseErrorKind::EndOfInput => Ok(()),
            None => f.write_str(" (end of input)"),
        }
    }
}

#[cfg(feature = "impl-error")]
#[cfg_attr(docsrs, doc(cfg(feature = "impl-error")))]
impl<I> crate::Error for ParseError<I> {}
