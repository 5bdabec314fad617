use super::Parser;
use crate::{
    cursor::Result,
    error::ParseErrorKind,
    internal::HostMeta,
    table,
};
use core::net::{Ipv4Addr, Ipv6Addr};

impl Parser<'_> {
    /// ```text
    /// dec-octet = DIGIT                 ; 0-9
    ///           / %x31-39 DIGIT         ; 10-99
    ///           / "1" 2DIGIT            ; 100-199
    ///           / "2" %x30-34 DIGIT     ; 200-249
    ///           / "25" %x30-35          ; 250-255
    /// ```
    pub(super) fn dec_octet(&mut self) -> Result<u8> {
        let mut value = 0;
        let mut len = 0;
        while let Some(digit) = self.current_digit(10) {
            if len == 3 || (len == 1 && value == 0) || value * 10 + digit > 255 {
                err!(self, InvalidDecOctet);
            }
            value = value * 10 + digit;
            len += 1;
            self.advance()?;
        }
        if len == 0 {
            self.current()?;
            err!(self, InvalidDecOctet);
        }
        Ok(value as u8)
    }

    /// `IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet`
    pub(super) fn ipv4_address(&mut self) -> Result<[u8; 4]> {
        let mut octets = [0; 4];
        octets[0] = self.dec_octet()?;
        for octet in &mut octets[1..] {
            if self.current()? != '.' {
                err!(self, InvalidIpv4);
            }
            self.advance()?;
            *octet = self.dec_octet()?;
        }
        Ok(octets)
    }

    /// `h16 = 1*4HEXDIG`
    pub(super) fn h16(&mut self) -> Result<u16> {
        let mut value = 0;
        let mut len = 0;
        while len < 4 {
            let Some(digit) = self.current_digit(16) else {
                break;
            };
            value = (value << 4) | digit as u16;
            len += 1;
            self.advance()?;
        }
        if len == 0 {
            self.current()?;
            err!(self, InvalidIpv6);
        }
        Ok(value)
    }

    /// `ls32 = ( h16 ":" h16 ) / IPv4address`, with the IPv4 form tried first.
    pub(super) fn ls32(&mut self) -> Result<(u16, u16)> {
        self.first_of(&[Self::ls32_ipv4, Self::ls32_h16])
    }

    fn ls32_ipv4(&mut self) -> Result<(u16, u16)> {
        let [a, b, c, d] = self.ipv4_address()?;
        Ok((u16::from_be_bytes([a, b]), u16::from_be_bytes([c, d])))
    }

    fn ls32_h16(&mut self) -> Result<(u16, u16)> {
        let hi = self.h16()?;
        self.expect(':')?;
        let lo = self.h16()?;
        Ok((hi, lo))
    }

    /// ```text
    /// IPv6address =                            6( h16 ":" ) ls32
    ///             /                       "::" 5( h16 ":" ) ls32
    ///             / [               h16 ] "::" 4( h16 ":" ) ls32
    ///             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
    ///             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
    ///             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
    ///             / [ *4( h16 ":" ) h16 ] "::"              ls32
    ///             / [ *5( h16 ":" ) h16 ] "::"              h16
    ///             / [ *6( h16 ":" ) h16 ] "::"
    /// ```
    ///
    /// Returns the eight groups with the elided ones filled with zeros.
    pub(super) fn ipv6_address(&mut self) -> Result<[u16; 8]> {
        let mut groups = [0; 8];
        let mut len = 0;
        // Number of groups read before the `::`.
        let mut elision = None;

        if self.current()? == ':' {
            if self.peek() != Ok(':') {
                err!(self, InvalidIpv6);
            }
            self.advance()?;
            self.advance()?;
            if self.current() == Ok(':') {
                err!(self, InvalidZeroCollapse);
            }
            elision = Some(0);
        }

        while len < 8 {
            if elision.is_none() && len == 6 {
                if let Some((hi, lo)) = self.attempt(Self::ls32) {
                    groups[6] = hi;
                    groups[7] = lo;
                    len = 8;
                    break;
                }
            }
            if elision == Some(len) && self.current_digit(16).is_none() {
                break;
            }
            if len <= 6 {
                if let Some((hi, lo)) = self.attempt(Self::ls32_ipv4) {
                    groups[len] = hi;
                    groups[len + 1] = lo;
                    len += 2;
                    break;
                }
            }

            groups[len] = self.h16()?;
            len += 1;
            if len == 8 {
                break;
            }

            let sep = self.mark();
            if self.eat_str("::") {
                if elision.is_some() || self.current() == Ok(':') {
                    err!(self, sep, InvalidZeroCollapse);
                }
                elision = Some(len);
            } else if !self.eat(':') {
                break;
            }
        }

        match elision {
            None if len < 8 => err!(self, InvalidIpv6),
            Some(_) if len == 8 => err!(self, InvalidZeroCollapse),
            Some(i) => {
                let tail = len - i;
                groups.copy_within(i..len, 8 - tail);
                groups[i..8 - tail].fill(0);
            }
            None => {}
        }
        Ok(groups)
    }

    /// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
    pub(super) fn ipv_future(&mut self) -> Result<()> {
        if !matches!(self.current()?, 'v' | 'V') {
            err!(self, UnexpectedChar);
        }
        self.advance()?;
        self.read1(table::HEXDIG, ParseErrorKind::UnexpectedChar)?;
        self.expect('.')?;
        self.read1(table::IPV_FUTURE, ParseErrorKind::UnexpectedChar)
    }

    /// `IP-literal = "[" ( IPv6address / IPvFuture ) "]"`
    pub(super) fn ip_literal(&mut self) -> Result<HostMeta> {
        let start = self.mark();
        self.expect('[')?;
        let meta = match self.first_of(&[Self::ipv6_host, Self::ipv_future_host]) {
            Ok(meta) => meta,
            Err(_) => err!(self, start, InvalidIpLiteral),
        };
        self.expect(']')?;
        Ok(meta)
    }

    fn ipv6_host(&mut self) -> Result<HostMeta> {
        let groups = self.ipv6_address()?;
        Ok(HostMeta::Ipv6(Ipv6Addr::from(groups)))
    }

    fn ipv_future_host(&mut self) -> Result<HostMeta> {
        self.ipv_future()?;
        Ok(HostMeta::IpvFuture)
    }

    /// An IPv4 address that makes up the whole host.
    pub(super) fn ipv4_host(&mut self) -> Result<HostMeta> {
        let octets = self.ipv4_address()?;
        if self.starts(table::IREG_NAME) {
            err!(self, InvalidIpv4);
        }
        Ok(HostMeta::Ipv4(Ipv4Addr::from(octets)))
    }
}
