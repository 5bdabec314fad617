use crate::{
    cursor::{Cursor, Result},
    error::ParseErrorKind,
    internal::{AuthMeta, Meta, Rule},
    table::{self, Table},
};
use core::{
    num::NonZeroUsize,
    ops::{Deref, DerefMut},
};

/// Returns immediately with an error at the current position,
/// or at a saved position if one is given.
macro_rules! err {
    ($p:expr, $kind:ident) => {
        return Err($p.error(crate::error::ParseErrorKind::$kind))
    };
    ($p:expr, $mark:expr, $kind:ident) => {
        return Err($p.error_at($mark, crate::error::ParseErrorKind::$kind))
    };
}

mod authority;
mod ip;
mod path;

#[cfg(test)]
mod tests;

pub(crate) fn parse(s: &str, rule: Rule) -> Result<Meta> {
    let mut parser = Parser::new(s);
    match rule {
        Rule::Iri => parser.iri(),
        Rule::AbsoluteIri => parser.absolute_iri(),
        Rule::IriReference => parser.iri_reference(),
    }
}

/// Recursive-descent IRI parser.
///
/// Every rule either succeeds, leaving the cursor after what it matched,
/// or fails with the error that stopped it. A failed rule may leave the cursor
/// anywhere; callers that go on to try something else restore it with
/// [`Cursor::reset`], which [`attempt`](Self::attempt) and
/// [`first_of`](Self::first_of) do for them.
///
/// Rules return what they matched (bounds, host data) and never write
/// to shared output, so nothing needs undoing on a failed path.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Deref for Parser<'a> {
    type Target = Cursor<'a>;

    fn deref(&self) -> &Self::Target {
        &self.cursor
    }
}

impl DerefMut for Parser<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cursor
    }
}

/// Output of `ihier-part` and `irelative-part`.
struct Part {
    auth: Option<AuthMeta>,
    path: (usize, usize),
}

impl<'a> Parser<'a> {
    pub(crate) fn new(s: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(s),
        }
    }

    /// Runs an optional rule, rolling the cursor back if it fails.
    fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Result<T>) -> Option<T> {
        let mark = self.mark();
        match rule(self) {
            Ok(out) => Some(out),
            Err(_) => {
                self.reset(mark);
                None
            }
        }
    }

    /// Ordered choice: tries each alternative from the same position and
    /// returns the first success.
    ///
    /// If every alternative fails, the cursor is restored and the error
    /// of the last one is returned.
    fn first_of<T>(&mut self, alternatives: &[fn(&mut Self) -> Result<T>]) -> Result<T> {
        let mark = self.mark();
        let mut last = self.error(ParseErrorKind::UnexpectedChar);
        for alternative in alternatives {
            match alternative(self) {
                Ok(out) => return Ok(out),
                Err(e) => {
                    self.reset(mark);
                    last = e;
                }
            }
        }
        Err(last)
    }

    /// Checks whether the next character starts something allowed by `table`.
    fn starts(&self, table: Table) -> bool {
        match self.current() {
            Ok('%') => table.allows_pct_encoded(),
            Ok(c) => table.allows(c),
            Err(_) => false,
        }
    }

    /// Consumes one character allowed by `table`, or a `pct-encoded` octet
    /// if the table allows them.
    fn one(&mut self, table: Table) -> Result<()> {
        match self.current()? {
            '%' if table.allows_pct_encoded() => self.pct_encoded(),
            c if table.allows(c) => self.advance(),
            _ => err!(self, UnexpectedChar),
        }
    }

    /// Consumes the longest run allowed by `table`.
    ///
    /// A `%` always commits to `pct-encoded`, so a malformed octet fails the
    /// run instead of ending it.
    ///
    /// Returns `true` iff anything was consumed.
    fn read(&mut self, table: Table) -> Result<bool> {
        let start = self.byte_pos();
        while self.starts(table) {
            self.one(table)?;
        }
        Ok(self.byte_pos() > start)
    }

    /// Like [`read`](Self::read) but requires at least one character,
    /// failing with `kind` (or at end of input) otherwise.
    fn read1(&mut self, table: Table, kind: ParseErrorKind) -> Result<()> {
        if self.read(table)? {
            return Ok(());
        }
        self.current()?;
        Err(self.error(kind))
    }

    /// `pct-encoded = "%" HEXDIG HEXDIG`
    fn pct_encoded(&mut self) -> Result<()> {
        if self.current()? != '%' {
            err!(self, UnexpectedChar);
        }
        self.advance()?;
        for _ in 0..2 {
            if !table::is_hexdig(self.current()?) {
                err!(self, InvalidPctEncoded);
            }
            self.advance()?;
        }
        Ok(())
    }

    /// Fails unless the whole input has been consumed.
    fn finish(&self) -> Result<()> {
        if self.has_remaining() {
            err!(self, UnexpectedChar);
        }
        Ok(())
    }

    /// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
    ///
    /// Returns the end of the scheme.
    fn scheme(&mut self) -> Result<usize> {
        if !table::is_alpha(self.current()?) {
            err!(self, InvalidScheme);
        }
        self.read(table::SCHEME)?;
        Ok(self.byte_pos())
    }

    /// `IRI = scheme ":" ihier-part [ "?" iquery ] [ "#" ifragment ]`
    fn iri(&mut self) -> Result<Meta> {
        let meta = self.scheme_to_query()?;
        self.fragment_opt()?;
        self.finish()?;
        Ok(meta)
    }

    /// `absolute-IRI = scheme ":" ihier-part [ "?" iquery ]`
    fn absolute_iri(&mut self) -> Result<Meta> {
        let meta = self.scheme_to_query()?;
        self.finish()?;
        Ok(meta)
    }

    /// `scheme ":" ihier-part [ "?" iquery ]`
    fn scheme_to_query(&mut self) -> Result<Meta> {
        let scheme_end = self.scheme()?;
        self.expect(':')?;
        let part = self.hier_part()?;
        let query_end = self.query_opt()?;
        Ok(Meta {
            scheme_end: NonZeroUsize::new(scheme_end),
            auth_meta: part.auth,
            path_bounds: part.path,
            query_end,
        })
    }

    /// `IRI-reference = IRI / irelative-ref`
    fn iri_reference(&mut self) -> Result<Meta> {
        // A relative reference never starts with `scheme ":"`,
        // and an IRI always does.
        let mark = self.mark();
        let has_scheme = self
            .attempt(|p| {
                p.scheme()?;
                p.expect(':')
            })
            .is_some();
        self.reset(mark);

        if has_scheme {
            self.iri()
        } else {
            self.relative_ref()
        }
    }

    /// `irelative-ref = irelative-part [ "?" iquery ] [ "#" ifragment ]`
    fn relative_ref(&mut self) -> Result<Meta> {
        let part = self.relative_part()?;
        let query_end = self.query_opt()?;
        self.fragment_opt()?;
        self.finish()?;
        Ok(Meta {
            scheme_end: None,
            auth_meta: part.auth,
            path_bounds: part.path,
            query_end,
        })
    }

    /// ```text
    /// ihier-part = "//" iauthority ipath-abempty
    ///            / ipath-absolute
    ///            / ipath-rootless
    ///            / ipath-empty
    /// ```
    fn hier_part(&mut self) -> Result<Part> {
        if let Some(part) = self.authority_part()? {
            return Ok(part);
        }
        // The first character picks the path form.
        let path = if self.current() == Ok('/') {
            self.path_absolute()?
        } else if self.starts(table::IPCHAR) {
            self.path_rootless()?
        } else {
            self.path_empty()?
        };
        Ok(Part { auth: None, path })
    }

    /// ```text
    /// irelative-part = "//" iauthority ipath-abempty
    ///                / ipath-absolute
    ///                / ipath-noscheme
    ///                / ipath-empty
    /// ```
    fn relative_part(&mut self) -> Result<Part> {
        if let Some(part) = self.authority_part()? {
            return Ok(part);
        }
        let path = if self.current() == Ok('/') {
            self.path_absolute()?
        } else if self.starts(table::ISEGMENT_NZ_NC) {
            self.path_noscheme()?
        } else {
            self.path_empty()?
        };
        Ok(Part { auth: None, path })
    }

    /// `"//" iauthority ipath-abempty`
    ///
    /// No path alternative starts with `"//"`, so the authority form is
    /// committed to as soon as it is seen.
    fn authority_part(&mut self) -> Result<Option<Part>> {
        if !self.eat_str("//") {
            return Ok(None);
        }
        let auth = self.authority()?;
        let path = self.path_abempty()?;
        Ok(Some(Part {
            auth: Some(auth),
            path,
        }))
    }

    /// `[ "?" iquery ]`, returning the end of the query if present.
    fn query_opt(&mut self) -> Result<Option<NonZeroUsize>> {
        if !self.eat('?') {
            return Ok(None);
        }
        self.query()?;
        Ok(NonZeroUsize::new(self.byte_pos()))
    }

    /// `[ "#" ifragment ]`
    fn fragment_opt(&mut self) -> Result<()> {
        if self.eat('#') {
            self.fragment()?;
        }
        Ok(())
    }
}
