use super::Parser;
use crate::{cursor::Result, error::ParseErrorKind, table};

impl Parser<'_> {
    /// `ipath-abempty = *( "/" isegment )`
    pub(super) fn path_abempty(&mut self) -> Result<(usize, usize)> {
        let start = self.byte_pos();
        self.slash_segments()?;
        Ok((start, self.byte_pos()))
    }

    /// `ipath-absolute = "/" [ isegment-nz *( "/" isegment ) ]`
    pub(super) fn path_absolute(&mut self) -> Result<(usize, usize)> {
        let start = self.byte_pos();
        self.expect('/')?;
        if self.starts(table::IPCHAR) {
            self.isegment_nz()?;
            self.slash_segments()?;
        }
        Ok((start, self.byte_pos()))
    }

    /// `ipath-rootless = isegment-nz *( "/" isegment )`
    pub(super) fn path_rootless(&mut self) -> Result<(usize, usize)> {
        let start = self.byte_pos();
        self.isegment_nz()?;
        self.slash_segments()?;
        Ok((start, self.byte_pos()))
    }

    /// `ipath-noscheme = isegment-nz-nc *( "/" isegment )`
    pub(super) fn path_noscheme(&mut self) -> Result<(usize, usize)> {
        let start = self.byte_pos();
        self.read1(table::ISEGMENT_NZ_NC, ParseErrorKind::EmptySegment)?;
        self.slash_segments()?;
        Ok((start, self.byte_pos()))
    }

    /// `ipath-empty = 0<ipchar>`
    ///
    /// Matches only where the path may end: at end of input or before
    /// a query or fragment.
    pub(super) fn path_empty(&mut self) -> Result<(usize, usize)> {
        let pos = self.byte_pos();
        match self.current() {
            Err(_) | Ok('?' | '#') => Ok((pos, pos)),
            Ok(_) => err!(self, UnexpectedChar),
        }
    }

    /// `*( "/" isegment )`
    fn slash_segments(&mut self) -> Result<()> {
        while self.eat('/') {
            self.isegment()?;
        }
        Ok(())
    }

    /// `isegment = *ipchar`
    pub(super) fn isegment(&mut self) -> Result<()> {
        while self.starts(table::IPCHAR) {
            self.ipchar()?;
        }
        Ok(())
    }

    /// `isegment-nz = 1*ipchar`
    pub(super) fn isegment_nz(&mut self) -> Result<()> {
        if !self.starts(table::IPCHAR) {
            self.current()?;
            err!(self, EmptySegment);
        }
        self.isegment()
    }

    /// `ipchar = iunreserved / pct-encoded / sub-delims / ":" / "@"`
    pub(super) fn ipchar(&mut self) -> Result<()> {
        self.one(table::IPCHAR)
    }

    /// `iquery = *( ipchar / iprivate / "/" / "?" )`
    pub(super) fn query(&mut self) -> Result<()> {
        self.read(table::IQUERY)?;
        Ok(())
    }

    /// `ifragment = *( ipchar / "/" / "?" )`
    pub(super) fn fragment(&mut self) -> Result<()> {
        self.read(table::IFRAGMENT)?;
        Ok(())
    }
}
