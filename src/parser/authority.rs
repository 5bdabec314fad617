use super::Parser;
use crate::{
    cursor::Result,
    internal::{AuthMeta, HostMeta},
    table,
};

impl Parser<'_> {
    /// `iauthority = [ iuserinfo "@" ] ihost [ ":" port ]`
    pub(super) fn authority(&mut self) -> Result<AuthMeta> {
        self.attempt(Self::userinfo);

        let host_start = self.byte_pos();
        let host_meta = self.host()?;
        let host_bounds = (host_start, self.byte_pos());

        let port = if self.eat(':') {
            Some(self.port()?)
        } else {
            None
        };

        Ok(AuthMeta {
            host_bounds,
            host_meta,
            port,
        })
    }

    /// `iuserinfo "@"`
    fn userinfo(&mut self) -> Result<()> {
        self.read(table::IUSERINFO)?;
        self.expect('@')
    }

    /// `ihost = IP-literal / IPv4address / ireg-name`
    fn host(&mut self) -> Result<HostMeta> {
        // Neither of the other alternatives allows a `[`.
        if self.current() == Ok('[') {
            return self.ip_literal();
        }
        self.first_of(&[Self::ipv4_host, Self::reg_name])
    }

    /// `ireg-name = *( iunreserved / pct-encoded / sub-delims )`
    fn reg_name(&mut self) -> Result<HostMeta> {
        self.read(table::IREG_NAME)?;
        Ok(HostMeta::RegName)
    }

    /// `port = 1*5DIGIT`, at most 65535.
    pub(super) fn port(&mut self) -> Result<u16> {
        let start = self.mark();
        let mut value = 0u32;
        let mut len = 0;
        while let Some(digit) = self.current_digit(10) {
            if len == 5 {
                err!(self, InvalidPort);
            }
            value = value * 10 + digit;
            len += 1;
            self.advance()?;
        }
        if len == 0 {
            err!(self, InvalidPort);
        }
        match u16::try_from(value) {
            Ok(port) => Ok(port),
            Err(_) => err!(self, start, InvalidPort),
        }
    }
}
