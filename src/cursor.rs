use crate::error::{ParseError, ParseErrorKind};

pub(crate) type Result<T> = core::result::Result<T, ParseError>;

/// A saved cursor position, restorable with [`Cursor::reset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mark {
    pos: usize,
    index: usize,
}

/// Cursor over the code points of the input.
///
/// # Invariants
///
/// `pos <= text.len()` and `pos` is on a char boundary.
/// `index` is the number of code points in `text[..pos]`.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    index: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Cursor {
            text,
            pos: 0,
            index: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub(crate) fn byte_pos(&self) -> usize {
        self.pos
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn has_remaining(&self) -> bool {
        self.pos < self.text.len()
    }

    /// Returns the code point at the current position.
    pub(crate) fn current(&self) -> Result<char> {
        match self.rest().chars().next() {
            Some(c) => Ok(c),
            None => Err(self.error(ParseErrorKind::EndOfInput)),
        }
    }

    /// Returns the code point after the current one without moving.
    pub(crate) fn peek(&self) -> Result<char> {
        let mut chars = self.rest().chars();
        let first = chars.next();
        match chars.next() {
            Some(c) => Ok(c),
            None => Err(ParseError::new(
                self.index + usize::from(first.is_some()),
                None,
                ParseErrorKind::EndOfInput,
            )),
        }
    }

    /// Returns the current code point as a digit in `radix`, if it is one.
    pub(crate) fn current_digit(&self, radix: u32) -> Option<u32> {
        self.rest().chars().next()?.to_digit(radix)
    }

    /// Moves forward by one code point.
    pub(crate) fn advance(&mut self) -> Result<()> {
        let c = self.current()?;
        // INVARIANT: Skipping a whole code point keeps `pos` on a char boundary.
        self.pos += c.len_utf8();
        self.index += 1;
        Ok(())
    }

    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            self.index += s.chars().count();
            true
        } else {
            false
        }
    }

    /// Consumes `c`, failing at the current position if it is not there.
    pub(crate) fn expect(&mut self, c: char) -> Result<()> {
        if self.current()? != c {
            return Err(self.error(ParseErrorKind::UnexpectedChar));
        }
        self.advance()
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            index: self.index,
        }
    }

    pub(crate) fn reset(&mut self, mark: Mark) {
        debug_assert!(mark.pos <= self.text.len());
        self.pos = mark.pos;
        self.index = mark.index;
    }

    /// Creates an error at the current position.
    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.index, self.rest().chars().next(), kind)
    }

    /// Creates an error at a saved position.
    pub(crate) fn error_at(&self, mark: Mark, kind: ParseErrorKind) -> ParseError {
        ParseError::new(mark.index, self.text[mark.pos..].chars().next(), kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_and_peek() {
        let mut c = Cursor::new("a\u{e9}b");
        assert_eq!(c.current(), Ok('a'));
        assert_eq!(c.peek(), Ok('\u{e9}'));
        c.advance().unwrap();
        assert_eq!(c.index(), 1);
        assert_eq!(c.byte_pos(), 1);
        c.advance().unwrap();
        assert_eq!(c.index(), 2);
        assert_eq!(c.byte_pos(), 3);
        assert_eq!(c.current(), Ok('b'));
        assert_eq!(c.peek().unwrap_err().index(), 3);
        c.advance().unwrap();
        assert!(!c.has_remaining());

        let e = c.advance().unwrap_err();
        assert_eq!(e.kind(), ParseErrorKind::EndOfInput);
        assert_eq!(e.index(), 3);
        assert_eq!(e.char(), None);
    }

    #[test]
    fn mark_and_reset() {
        let mut c = Cursor::new("\u{10000}xy");
        let start = c.mark();
        assert!(c.eat('\u{10000}'));
        assert!(c.eat_str("xy"));
        assert!(!c.has_remaining());
        assert_eq!(c.index(), 3);

        c.reset(start);
        assert_eq!(c.index(), 0);
        assert_eq!(c.byte_pos(), 0);
        assert!(!c.eat('x'));
        assert_eq!(c.expect('x').unwrap_err().char(), Some('\u{10000}'));
    }

    #[test]
    fn errors_at_marks() {
        let mut c = Cursor::new("ab");
        let start = c.mark();
        c.advance().unwrap();
        let e = c.error_at(start, ParseErrorKind::UnexpectedChar);
        assert_eq!((e.index(), e.char()), (0, Some('a')));
        let e = c.error(ParseErrorKind::UnexpectedChar);
        assert_eq!((e.index(), e.char()), (1, Some('b')));
    }
}
