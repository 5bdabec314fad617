use super::Parser;
use crate::{
    cursor::Result,
    error::{ParseError, ParseErrorKind::*},
    internal::HostMeta,
};
use alloc::string::ToString;
use core::net::{Ipv4Addr, Ipv6Addr};

/// Runs `rule` on `s` and requires it to match the whole input.
fn ok<'a, T>(s: &'a str, rule: impl FnOnce(&mut Parser<'a>) -> Result<T>) -> T {
    let mut p = Parser::new(s);
    let out = rule(&mut p).unwrap_or_else(|e| panic!("{s:?}: {e}"));
    assert!(!p.has_remaining(), "{s:?}: stopped at {}", p.index());
    out
}

/// Runs `rule` on `s` and returns how many code points it consumed.
fn consumed<'a, T>(s: &'a str, rule: impl FnOnce(&mut Parser<'a>) -> Result<T>) -> usize {
    let mut p = Parser::new(s);
    rule(&mut p).unwrap_or_else(|e| panic!("{s:?}: {e}"));
    p.index()
}

fn fail<'a, T>(s: &'a str, rule: impl FnOnce(&mut Parser<'a>) -> Result<T>) -> ParseError {
    let mut p = Parser::new(s);
    match rule(&mut p) {
        Ok(_) => panic!("{s:?}: unexpectedly matched {} code points", p.index()),
        Err(e) => e,
    }
}

#[test]
fn pct_encoded() {
    for s in ["%00", "%1d", "%C4", "%EE", "%ae", "%129", "%122", "%ddd"] {
        assert_eq!(consumed(s, Parser::pct_encoded), 3, "{s:?}");
    }

    let e = fail("%", Parser::pct_encoded);
    assert_eq!((e.index(), e.kind()), (1, EndOfInput));
    let e = fail("1", Parser::pct_encoded);
    assert_eq!((e.index(), e.kind()), (0, UnexpectedChar));
    let e = fail("%z", Parser::pct_encoded);
    assert_eq!((e.index(), e.char(), e.kind()), (1, Some('z'), InvalidPctEncoded));
    let e = fail("%1", Parser::pct_encoded);
    assert_eq!((e.index(), e.kind()), (2, EndOfInput));
    let e = fail("%D", Parser::pct_encoded);
    assert_eq!((e.index(), e.kind()), (2, EndOfInput));
    let e = fail("%4g", Parser::pct_encoded);
    assert_eq!((e.index(), e.kind()), (2, InvalidPctEncoded));
}

#[test]
fn scheme() {
    for s in ["http", "tls", "rpc14", "a", "z39.50r", "iris.beep", "svn+ssh", "A-b"] {
        assert_eq!(ok(s, Parser::scheme), s.len());
    }
    assert_eq!(consumed("http:", Parser::scheme), 4);

    let e = fail("+go", Parser::scheme);
    assert_eq!((e.index(), e.kind()), (0, InvalidScheme));
    assert_eq!(fail("1ab", Parser::scheme).kind(), InvalidScheme);
    assert_eq!(fail("", Parser::scheme).kind(), EndOfInput);
}

#[test]
fn dec_octet() {
    for n in 0..=255u8 {
        let s = n.to_string();
        assert_eq!(ok(&s, Parser::dec_octet), n);
    }

    for (s, index) in [
        ("00", 1),
        ("05", 1),
        ("000", 1),
        ("001", 1),
        ("256", 2),
        ("300", 2),
        ("1000", 3),
    ] {
        let e = fail(s, Parser::dec_octet);
        assert_eq!((e.index(), e.kind()), (index, InvalidDecOctet), "{s:?}");
    }

    assert_eq!(fail("a", Parser::dec_octet).kind(), InvalidDecOctet);
    assert_eq!(fail("", Parser::dec_octet).kind(), EndOfInput);
}

#[test]
fn ipv4_address() {
    for s in ["0.0.0.0", "1.1.1.1", "11.11.11.11", "255.255.255.255", "192.0.2.16"] {
        let expected: Ipv4Addr = s.parse().unwrap();
        assert_eq!(Ipv4Addr::from(ok(s, Parser::ipv4_address)), expected);
    }

    for s in ["1", "1.1", "1.1.1"] {
        let e = fail(s, Parser::ipv4_address);
        assert_eq!((e.index(), e.kind()), (s.len(), EndOfInput), "{s:?}");
    }
    for s in ["00.0.0.00", "256.0.0.1", "1234.0.0.1", "999.9.1.0"] {
        assert_eq!(fail(s, Parser::ipv4_address).kind(), InvalidDecOctet, "{s:?}");
    }

    let e = fail("1.2:3.4", Parser::ipv4_address);
    assert_eq!((e.index(), e.char(), e.kind()), (3, Some(':'), InvalidIpv4));
    assert_eq!(fail("1..2.3", Parser::ipv4_address).kind(), InvalidDecOctet);
}

#[test]
fn h16_and_ls32() {
    assert_eq!(ok("0", Parser::h16), 0);
    assert_eq!(ok("fFfF", Parser::h16), 0xffff);
    assert_eq!(consumed("12345", Parser::h16), 4);
    assert_eq!(fail("g", Parser::h16).kind(), InvalidIpv6);

    assert_eq!(ok("1:2", Parser::ls32), (1, 2));
    assert_eq!(ok("192.0.2.1", Parser::ls32), (0xc000, 0x0201));
    // "12" is not followed by '.', so the hex form is used.
    assert_eq!(ok("12:34", Parser::ls32), (0x12, 0x34));
    assert_eq!(fail("1:", Parser::ls32).kind(), EndOfInput);
}

#[test]
fn ipv6_address() {
    for s in [
        "2001:0db8:0000:0000:0000:ff00:0042:8329",
        "2001:db8::7",
        "::",
        "::1",
        "1::",
        "1:2:3:4:5:6:7::",
        "::2:3:4:5:6:7:8",
        "1:2:3:4:5:6::8",
        "fe80::1:2",
        "::ffff:192.0.2.1",
        "1:2:3:4:5:6:192.0.2.1",
        "1::192.0.2.1",
        "::192.0.2.1",
        "ABCD:EF01:2345:6789:ABCD:EF01:2345:6789",
    ] {
        let expected: Ipv6Addr = s.parse().unwrap();
        assert_eq!(Ipv6Addr::from(ok(s, Parser::ipv6_address)), expected, "{s:?}");
    }

    for (s, index, kind) in [
        (":0db8:0000:0000:0000:ff00:0042:8329", 0, InvalidIpv6),
        (":1", 0, InvalidIpv6),
        (":::", 2, InvalidZeroCollapse),
        ("1:::2", 1, InvalidZeroCollapse),
        ("1::2::3", 4, InvalidZeroCollapse),
        ("::1::", 3, InvalidZeroCollapse),
        ("1:2:3:4:5:6:7", 13, InvalidIpv6),
        ("1:2:3:4:1.2.3.4", 15, InvalidIpv6),
        ("1::2:3:4:5:6:7:8", 16, InvalidZeroCollapse),
        ("1::2:3:4:5:6:1.2.3.4", 20, InvalidZeroCollapse),
        ("1:2:", 4, EndOfInput),
        ("1:2:g", 4, InvalidIpv6),
    ] {
        let e = fail(s, Parser::ipv6_address);
        assert_eq!((e.index(), e.kind()), (index, kind), "{s:?}");
    }

    // Groups stop at eight and at an embedded IPv4 tail.
    assert_eq!(consumed("1:2:3:4:5:6:7:8:9", Parser::ipv6_address), 15);
    assert_eq!(consumed("::1.2.3.4:5", Parser::ipv6_address), 9);
}

#[test]
fn ipv_future() {
    for s in ["v7.1-2", "V1.a", "vFe.::", "v1.!$&'()*+,;=-._~"] {
        ok(s, Parser::ipv_future);
    }
    for s in ["7", "v.1", "v7", "v7.", "vg.1"] {
        fail(s, Parser::ipv_future);
    }
}

#[test]
fn ip_literal() {
    assert_eq!(ok("[v7.1-2]", Parser::ip_literal), HostMeta::IpvFuture);
    assert_eq!(
        ok("[2001:0db8:0000:0000:0000:ff00:0042:8329]", Parser::ip_literal),
        HostMeta::Ipv6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0xff00, 0x42, 0x8329))
    );
    assert_eq!(
        ok("[::1]", Parser::ip_literal),
        HostMeta::Ipv6(Ipv6Addr::LOCALHOST)
    );

    assert_eq!(fail("7", Parser::ip_literal).kind(), UnexpectedChar);
    for s in ["[]", "[7]", "[1:::2]", "[v7]", "[1.2.3.4]"] {
        let e = fail(s, Parser::ip_literal);
        assert_eq!((e.index(), e.char(), e.kind()), (0, Some('['), InvalidIpLiteral), "{s:?}");
    }

    let e = fail("[::1", Parser::ip_literal);
    assert_eq!((e.index(), e.kind()), (4, EndOfInput));
    let e = fail("[::1)", Parser::ip_literal);
    assert_eq!((e.index(), e.char(), e.kind()), (4, Some(')'), UnexpectedChar));
}

#[test]
fn port() {
    for (s, port) in [("1", 1), ("655", 655), ("65535", 65535), ("0", 0), ("00080", 80)] {
        assert_eq!(ok(s, Parser::port), port);
    }

    for (s, index) in [("-1", 0), ("65565", 0), ("99999", 0), ("123456", 5), ("", 0)] {
        let e = fail(s, Parser::port);
        assert_eq!((e.index(), e.kind()), (index, InvalidPort), "{s:?}");
    }
}

#[test]
fn authority() {
    let auth = ok("user:pass@example.com:8080", Parser::authority);
    assert_eq!(auth.host_bounds, (10, 21));
    assert_eq!(auth.host_meta, HostMeta::RegName);
    assert_eq!(auth.port, Some(8080));

    let auth = ok("192.0.2.16:80", Parser::authority);
    assert_eq!(auth.host_meta, HostMeta::Ipv4(Ipv4Addr::new(192, 0, 2, 16)));
    assert_eq!(auth.host_bounds, (0, 10));

    // Dotted decimal followed by more name characters is a registered name.
    for s in ["1.2.3.4.5", "1.2.3", "999.1.1.1", "1.2.3.4a", "1.2.3.4%41"] {
        assert_eq!(ok(s, Parser::authority).host_meta, HostMeta::RegName, "{s:?}");
    }

    // No `@` means the userinfo attempt is rolled back.
    assert_eq!(ok("a:1", Parser::authority).host_bounds, (0, 1));
    assert_eq!(ok("", Parser::authority).host_bounds, (0, 0));
    assert_eq!(ok("@", Parser::authority).host_bounds, (1, 1));
    assert_eq!(ok("\u{e9}t\u{e9}.fr", Parser::authority).host_bounds, (0, 8));

    assert_eq!(fail("h:", Parser::authority).kind(), InvalidPort);
    assert_eq!(fail("%zz@h", Parser::authority).kind(), InvalidPctEncoded);
    assert_eq!(consumed("[::1]/x", Parser::authority), 5);
}

#[test]
fn paths() {
    assert_eq!(ok("/a/b/", Parser::path_abempty), (0, 5));
    assert_eq!(ok("", Parser::path_abempty), (0, 0));
    assert_eq!(consumed("a", Parser::path_abempty), 0);

    assert_eq!(ok("/", Parser::path_absolute), (0, 1));
    assert_eq!(ok("/a//b", Parser::path_absolute), (0, 5));
    assert_eq!(consumed("//a", Parser::path_absolute), 1);

    assert_eq!(ok("a:b/c", Parser::path_rootless), (0, 5));
    assert_eq!(fail("/a", Parser::path_rootless).kind(), EmptySegment);

    assert_eq!(ok("a@b/c:d", Parser::path_noscheme), (0, 7));
    assert_eq!(consumed("a:b", Parser::path_noscheme), 1);
    let e = fail(":a", Parser::path_noscheme);
    assert_eq!((e.index(), e.kind()), (0, EmptySegment));

    assert_eq!(ok("", Parser::path_empty), (0, 0));
    assert_eq!(consumed("?q", Parser::path_empty), 0);
    assert_eq!(consumed("#f", Parser::path_empty), 0);
    assert_eq!(fail("a", Parser::path_empty).kind(), UnexpectedChar);
}

#[test]
fn segments_and_ipchar() {
    ok("\u{10000}:@!$&'()*+,;=-._~%41", Parser::isegment);
    assert_eq!(consumed("ab/c", Parser::isegment), 2);
    assert_eq!(consumed("?", Parser::isegment), 0);
    assert_eq!(fail("a%4", Parser::isegment).kind(), EndOfInput);
    assert_eq!(fail("a%zz", Parser::isegment).kind(), InvalidPctEncoded);
    assert_eq!(fail("", Parser::isegment_nz).kind(), EndOfInput);
    assert_eq!(fail("/", Parser::isegment_nz).kind(), EmptySegment);

    ok("\u{e9}", Parser::ipchar);
    ok("%e9", Parser::ipchar);
    assert_eq!(fail("/", Parser::ipchar).kind(), UnexpectedChar);
    // Private use characters are not ipchars.
    assert_eq!(fail("\u{e000}", Parser::ipchar).kind(), UnexpectedChar);
}

#[test]
fn query_and_fragment() {
    ok("a=1&b=/?\u{e000}\u{10fffd}", Parser::query);
    assert_eq!(consumed("a\u{e000}#", Parser::fragment), 1);
    ok("/?:@\u{10000}", Parser::fragment);
    assert_eq!(consumed("a#b", Parser::query), 1);
    assert_eq!(consumed("a b", Parser::fragment), 1);
}

#[test]
fn backtracking_restores_position() {
    let mut p = Parser::new("1.2.3x");
    assert_eq!(p.attempt(Parser::ipv4_address), None);
    assert_eq!(p.index(), 0);

    let mut p = Parser::new("zz");
    let e = p.first_of(&[Parser::ipv4_host, Parser::path_empty_host]).unwrap_err();
    assert_eq!((p.index(), e.kind()), (0, UnexpectedChar));
}

impl Parser<'_> {
    fn path_empty_host(&mut self) -> Result<HostMeta> {
        self.path_empty()?;
        Ok(HostMeta::RegName)
    }
}
