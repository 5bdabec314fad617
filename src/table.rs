//! Character classes from RFC 3986 and RFC 3987.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

use core::cmp::Ordering;

const MASK_PCT_ENCODED: u64 = 1 << b'%';
const MASK_UCSCHAR: u64 = 1;
const MASK_IPRIVATE: u64 = 2;
const MASK_UNENCODED_ASCII: u64 = !(MASK_PCT_ENCODED | MASK_UCSCHAR | MASK_IPRIVATE);

/// Code point ranges of the `ucschar` rule, sorted and disjoint.
static UCSCHAR_RANGES: &[(u32, u32)] = &[
    (0xa0, 0xd7ff),
    (0xf900, 0xfdcf),
    (0xfdf0, 0xffef),
    (0x10000, 0x1fffd),
    (0x20000, 0x2fffd),
    (0x30000, 0x3fffd),
    (0x40000, 0x4fffd),
    (0x50000, 0x5fffd),
    (0x60000, 0x6fffd),
    (0x70000, 0x7fffd),
    (0x80000, 0x8fffd),
    (0x90000, 0x9fffd),
    (0xa0000, 0xafffd),
    (0xb0000, 0xbfffd),
    (0xc0000, 0xcfffd),
    (0xd0000, 0xdfffd),
    (0xe1000, 0xefffd),
];

/// Code point ranges of the `iprivate` rule, sorted and disjoint.
static IPRIVATE_RANGES: &[(u32, u32)] = &[
    (0xe000, 0xf8ff),
    (0xf0000, 0xffffd),
    (0x100000, 0x10fffd),
];

fn in_ranges(ranges: &[(u32, u32)], x: u32) -> bool {
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < x {
                Ordering::Less
            } else if lo > x {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Checks whether a character matches the [`ucschar`] ABNF rule from RFC 3987.
///
/// [`ucschar`]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
#[must_use]
pub fn is_ucschar(c: char) -> bool {
    in_ranges(UCSCHAR_RANGES, c as u32)
}

/// Checks whether a character matches the [`iprivate`] ABNF rule from RFC 3987.
///
/// [`iprivate`]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
#[must_use]
pub fn is_iprivate(c: char) -> bool {
    in_ranges(IPRIVATE_RANGES, c as u32)
}

/// `ALPHA = %x41-5A / %x61-7A`
#[must_use]
pub const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// `DIGIT = %x30-39`
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`, case-insensitive.
#[must_use]
pub const fn is_hexdig(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
#[must_use]
pub fn is_sub_delim(c: char) -> bool {
    SUB_DELIMS.allows(c)
}

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
#[must_use]
pub fn is_gen_delim(c: char) -> bool {
    GEN_DELIMS.allows(c)
}

/// `reserved = gen-delims / sub-delims`
#[must_use]
pub fn is_reserved(c: char) -> bool {
    RESERVED.allows(c)
}

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
#[must_use]
pub fn is_unreserved(c: char) -> bool {
    UNRESERVED.allows(c)
}

/// `iunreserved = ALPHA / DIGIT / "-" / "." / "_" / "~" / ucschar`
#[must_use]
pub fn is_iunreserved(c: char) -> bool {
    IUNRESERVED.allows(c)
}

/// A table specifying the characters allowed in a string.
#[derive(Clone, Copy, Debug)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `0`, `1`, or `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, 0 | 1 | b'%' | 128..),
                "cannot allow non-ASCII byte, 0, 1, or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Marks this table as allowing percent-encoded octets.
    #[must_use]
    pub const fn or_pct_encoded(self) -> Self {
        Self(self.0 | MASK_PCT_ENCODED, self.1)
    }

    /// Marks this table as allowing characters matching the `ucschar` rule.
    #[must_use]
    pub const fn or_ucschar(self) -> Self {
        Self(self.0 | MASK_UCSCHAR, self.1)
    }

    /// Marks this table as allowing characters matching the `iprivate` rule.
    #[must_use]
    pub const fn or_iprivate(self) -> Self {
        Self(self.0 | MASK_IPRIVATE, self.1)
    }

    /// Checks whether the table allows percent-encoded octets.
    #[must_use]
    pub const fn allows_pct_encoded(self) -> bool {
        self.0 & MASK_PCT_ENCODED != 0
    }

    /// Checks whether an unencoded ASCII byte is allowed by the table.
    #[must_use]
    pub const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0 & MASK_UNENCODED_ASCII
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether an unencoded character is allowed by the table.
    ///
    /// The percent sign is never allowed on its own; see
    /// [`allows_pct_encoded`](Self::allows_pct_encoded).
    #[must_use]
    pub fn allows(self, c: char) -> bool {
        if c.is_ascii() {
            return self.allows_ascii(c as u8);
        }
        (self.0 & MASK_UCSCHAR != 0 && is_ucschar(c))
            || (self.0 & MASK_IPRIVATE != 0 && is_iprivate(c))
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

// Rules from RFC 3986:

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
pub const IPV_FUTURE: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":"));

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

// Rules from RFC 3987:

/// `iunreserved = ALPHA / DIGIT / "-" / "." / "_" / "~" / ucschar`
pub const IUNRESERVED: Table = UNRESERVED.or_ucschar();

/// `iuserinfo = *( iunreserved / pct-encoded / sub-delims / ":" )`
pub const IUSERINFO: Table = IUNRESERVED.or(SUB_DELIMS).or(new(b":")).or_pct_encoded();

/// `ireg-name = *( iunreserved / pct-encoded / sub-delims )`
pub const IREG_NAME: Table = IUNRESERVED.or(SUB_DELIMS).or_pct_encoded();

/// `ipchar = iunreserved / pct-encoded / sub-delims / ":" / "@"`
pub const IPCHAR: Table = IUNRESERVED.or(SUB_DELIMS).or(new(b":@")).or_pct_encoded();

/// `isegment-nz-nc = 1*( iunreserved / pct-encoded / sub-delims / "@" )`
pub const ISEGMENT_NZ_NC: Table = IUNRESERVED.or(SUB_DELIMS).or(new(b"@")).or_pct_encoded();

/// `iquery = *( ipchar / iprivate / "/" / "?" )`
pub const IQUERY: Table = IPCHAR.or(new(b"/?")).or_iprivate();

/// `ifragment = *( ipchar / "/" / "?" )`
pub const IFRAGMENT: Table = IPCHAR.or(new(b"/?"));

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(x: u32) -> char {
        char::from_u32(x).unwrap()
    }

    // Surrogates are not characters and belong to no range.
    fn in_class(f: fn(char) -> bool, x: u32) -> bool {
        char::from_u32(x).is_some_and(f)
    }

    #[test]
    fn ascii_classes() {
        assert!("azAZ".chars().all(is_alpha));
        assert!(!"09-_".chars().any(is_alpha));
        assert!("0123456789abcdefABCDEF".chars().all(is_hexdig));
        assert!(!"gG%".chars().any(is_hexdig));
        assert!("!$&'()*+,;=".chars().all(is_sub_delim));
        assert!(":/?#[]@".chars().all(is_gen_delim));
        assert!(!":/?#[]@".chars().any(is_sub_delim));
        assert!(!"!$&'()*+,;=".chars().any(is_gen_delim));
        assert!("!$&'()*+,;=:/?#[]@".chars().all(is_reserved));
        assert!("aZ09-._~".chars().all(is_unreserved));
        assert!(!"%!:/ ".chars().any(is_unreserved));
    }

    #[test]
    fn ucschar_bounds() {
        for (lo, hi) in UCSCHAR_RANGES {
            assert!(is_ucschar(ch(*lo)));
            assert!(is_ucschar(ch(*hi)));
            assert!(!in_class(is_ucschar, lo - 1));
            assert!(!in_class(is_ucschar, hi + 1));
        }
        assert!(!is_ucschar('a'));
        assert!(!is_ucschar(ch(0xe000)));
        assert!(!is_ucschar(ch(0xe0000)));
        assert!(is_iunreserved('\u{4e2d}'));
        assert!(!is_iunreserved('\u{e000}'));
    }

    #[test]
    fn iprivate_bounds() {
        for (lo, hi) in IPRIVATE_RANGES {
            assert!(is_iprivate(ch(*lo)));
            assert!(is_iprivate(ch(*hi)));
            assert!(!in_class(is_iprivate, lo - 1));
        }
        assert!(!is_iprivate(ch(0xf900)));
        assert!(!is_iprivate(ch(0xffffe)));
        assert!(!is_iprivate(ch(0x10fffe)));
        assert!(!is_iprivate(ch(0x10ffff)));
    }

    #[test]
    fn tables() {
        assert!(IQUERY.allows('\u{e000}'));
        assert!(!IFRAGMENT.allows('\u{e000}'));
        assert!(IFRAGMENT.allows('\u{a0}'));
        assert!(!IPV_FUTURE.allows('\u{a0}'));
        assert!(IPCHAR.allows('@') && !ISEGMENT_NZ_NC.allows(':'));
        assert!(!IPCHAR.allows('%') && IPCHAR.allows_pct_encoded());
        assert!(!IPV_FUTURE.allows_pct_encoded());
        assert!(!SCHEME.allows('_'));
        assert!(!IUSERINFO.allows('@'));
    }
}
