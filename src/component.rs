//! IRI components.

use crate::{
    internal::{AuthMeta, HostMeta},
    table,
};
use core::{
    fmt, hash,
    net::{Ipv4Addr, Ipv6Addr},
    str::Split,
};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. You should do a case-insensitive
/// comparison if the scheme specification allows both letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use iri_descent::{component::Scheme, Iri};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// let scheme = Iri::parse("HTTP://EXAMPLE.COM/")?.scheme();
///
/// // Case-insensitive comparison.
/// assert_eq!(scheme, SCHEME_HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(scheme.as_str(), "HTTP");
/// # Ok::<_, iri_descent::error::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the conversion fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::component::Scheme;
    ///
    /// assert!(Scheme::new("svn+ssh").is_some());
    /// assert!(Scheme::new("+go").is_none());
    /// assert!(Scheme::new("").is_none());
    /// ```
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        let bytes = s.as_bytes();
        if !matches!(bytes, [first, ..] if first.is_ascii_alphabetic()) {
            return None;
        }
        let mut i = 1;
        while i < bytes.len() {
            if !table::SCHEME.allows_ascii(bytes[i]) {
                return None;
            }
            i += 1;
        }
        Some(Scheme::new_validated(s))
    }

    /// Returns the scheme component as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::Iri;
    ///
    /// let iri = Iri::parse("http://example.com/")?;
    /// assert_eq!(iri.scheme().as_str(), "http");
    /// let iri = Iri::parse("HTTP://EXAMPLE.COM/")?;
    /// assert_eq!(iri.scheme().as_str(), "HTTP");
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

impl fmt::Debug for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// A [path] component.
///
/// The path is always present in an IRI (reference), although it may be empty.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(path: &str) -> &Path;

    /// Returns the path component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the path is absolute, i.e., starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Checks whether the path is rootless, i.e., not starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        !self.inner.starts_with('/')
    }

    /// Returns an iterator over the path segments, separated by `'/'`.
    ///
    /// The leading slash of an absolute path is skipped.
    /// An empty path has no segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::Iri;
    ///
    /// let iri = Iri::parse("http://example.com/über/a//b/")?;
    /// assert!(iri.path().segments().eq(["über", "a", "", "b", ""]));
    ///
    /// let iri = Iri::parse("urn:isbn:0451450523")?;
    /// assert!(iri.path().segments().eq(["isbn:0451450523"]));
    ///
    /// let iri = Iri::parse("http://example.com")?;
    /// assert_eq!(iri.path().segments().count(), 0);
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let path = self.inner.strip_prefix('/').unwrap_or(&self.inner);
        let split: Option<Split<'_, char>> = (!self.inner.is_empty()).then(|| path.split('/'));
        split.into_iter().flatten()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Path {}

impl hash::Hash for Path {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<Path> for str {
    fn eq(&self, other: &Path) -> bool {
        self == &other.inner
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        &self.inner == *other
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// An [authority] component.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
#[derive(Clone, Copy)]
pub struct Authority<'a> {
    val: &'a str,
    meta: AuthMeta,
}

impl<'a> Authority<'a> {
    pub(crate) const fn new(val: &'a str, meta: AuthMeta) -> Self {
        Self { val, meta }
    }

    /// Returns the authority component as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::Iri;
    ///
    /// let iri = Iri::parse("http://user@example.com:8080/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.as_str(), "user@example.com:8080");
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.val
    }

    /// Returns the optional [userinfo] subcomponent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::Iri;
    ///
    /// let iri = Iri::parse("http://user@example.com/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.userinfo(), Some("user"));
    ///
    /// let iri = Iri::parse("http://example.com/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.userinfo(), None);
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        let host_start = self.meta.host_bounds.0;
        (host_start != 0).then(|| &self.val[..host_start - 1])
    }

    /// Returns the [host] subcomponent as a string slice.
    ///
    /// The host subcomponent is always present, although it may be empty.
    ///
    /// The square brackets enclosing an IPv6 or IPvFuture address are included.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::Iri;
    ///
    /// let iri = Iri::parse("http://user@example.com:8080/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.host(), "example.com");
    ///
    /// let iri = Iri::parse("file:///path/to/file")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.host(), "");
    ///
    /// let iri = Iri::parse("http://[::1]")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.host(), "[::1]");
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn host(&self) -> &'a str {
        let (start, end) = self.meta.host_bounds;
        &self.val[start..end]
    }

    /// Returns the parsed [host] subcomponent.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::{component::Host, Iri};
    /// use std::net::{Ipv4Addr, Ipv6Addr};
    ///
    /// let iri = Iri::parse("foo://127.0.0.1")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.host_parsed(), Host::Ipv4(Ipv4Addr::LOCALHOST));
    ///
    /// let iri = Iri::parse("foo://[::1]")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.host_parsed(), Host::Ipv6(Ipv6Addr::LOCALHOST));
    ///
    /// let iri = Iri::parse("foo://[v1.addr]")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.host_parsed(), Host::IpvFuture);
    ///
    /// let iri = Iri::parse("foo://localhost")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.host_parsed(), Host::RegName("localhost"));
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn host_parsed(&self) -> Host<'a> {
        match self.meta.host_meta {
            HostMeta::Ipv4(addr) => Host::Ipv4(addr),
            HostMeta::Ipv6(addr) => Host::Ipv6(addr),
            HostMeta::IpvFuture => Host::IpvFuture,
            HostMeta::RegName => Host::RegName(self.host()),
        }
    }

    /// Returns the optional [port] subcomponent.
    ///
    /// A port, when present, has one to five digits and a value of at most 65535.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::Iri;
    ///
    /// let iri = Iri::parse("foo://localhost:04673/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.port(), Some("04673"));
    ///
    /// let iri = Iri::parse("foo://localhost/")?;
    /// let auth = iri.authority().unwrap();
    /// assert_eq!(auth.port(), None);
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn port(&self) -> Option<&'a str> {
        let host_end = self.meta.host_bounds.1;
        (host_end != self.val.len()).then(|| &self.val[host_end + 1..])
    }

    /// Returns the value of the [port] subcomponent, if present.
    ///
    /// Leading zeros are ignored.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::Iri;
    ///
    /// let iri = Iri::parse("foo://localhost:04673/")?;
    /// assert_eq!(iri.authority().unwrap().port_to_u16(), Some(4673));
    ///
    /// let iri = Iri::parse("foo://localhost/")?;
    /// assert_eq!(iri.authority().unwrap().port_to_u16(), None);
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn port_to_u16(&self) -> Option<u16> {
        self.meta.port
    }

    /// Checks whether a userinfo subcomponent is present.
    #[inline]
    #[must_use]
    pub fn has_userinfo(&self) -> bool {
        self.meta.host_bounds.0 != 0
    }

    /// Checks whether a port subcomponent is present.
    #[inline]
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.meta.port.is_some()
    }
}

impl fmt::Debug for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("host_parsed", &self.host_parsed())
            .field("port", &self.port())
            .finish()
    }
}

impl fmt::Display for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.val, f)
    }
}

/// A parsed [host] component.
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Host<'a> {
    /// An IPv4 address.
    Ipv4(Ipv4Addr),
    /// An IPv6 address.
    Ipv6(Ipv6Addr),
    /// An IP address of future version.
    IpvFuture,
    /// A registered name, possibly with percent-encoded octets
    /// and non-ASCII characters.
    ///
    /// Note that ASCII characters within a registered name are *case-insensitive*.
    RegName(&'a str),
}
