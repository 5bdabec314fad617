use crate::{
    component::{Authority, Path, Scheme},
    error::{ParseError, ParseErrorKind},
    internal::{Meta, Parse, RiRef, Rule},
};
use alloc::{borrow::ToOwned, string::String};
use borrow_or_share::{BorrowOrShare, Bos};
use core::{cmp::Ordering, fmt, hash, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An IRI: a scheme, an optional authority, a path, and an optional query
/// and fragment.
///
/// `T` is the storage of the input, either `&str` or `String`. Parsing
/// records where each component starts and ends, so the accessors only slice
/// the input. On an `Iri<&'a str>` they return slices that live for `'a`,
/// even after the `Iri` itself is gone.
///
/// Equality, hashing and ordering compare the input strings byte by byte.
/// Nothing is normalized, except that [`Scheme`] compares case-insensitively.
///
/// # Examples
///
/// ```
/// use iri_descent::{component::Host, Iri};
///
/// let iri = Iri::parse("https://anna@例え.jp:8443/資料/2024?lang=ja#概要")?;
/// assert_eq!(iri.scheme().as_str(), "https");
///
/// let auth = iri.authority().unwrap();
/// assert_eq!(auth.userinfo(), Some("anna"));
/// assert_eq!(auth.host_parsed(), Host::RegName("例え.jp"));
/// assert_eq!(auth.port_to_u16(), Some(8443));
///
/// assert_eq!(iri.path(), "/資料/2024");
/// assert_eq!(iri.query(), Some("lang=ja"));
/// assert_eq!(iri.fragment(), Some("概要"));
/// # Ok::<_, iri_descent::error::ParseError>(())
/// ```
///
/// Error indexes count code points, not bytes. A port has at most five
/// digits and a value of at most 65535; a larger one is reported at its
/// first digit:
///
/// ```
/// use iri_descent::{error::ParseErrorKind, Iri};
///
/// let e = Iri::parse("http://例え.jp:65536/").unwrap_err();
/// assert_eq!(e.index(), 13);
/// assert_eq!(e.char(), Some('6'));
/// assert_eq!(e.kind(), ParseErrorKind::InvalidPort);
/// ```
#[derive(Clone, Copy)]
pub struct Iri<T> {
    val: T,
    meta: Meta,
}

/// An IRI reference: either an [`Iri`] or a relative reference.
///
/// A relative reference has no scheme and is what appears in links such as
/// `../img/ロゴ.png` or `//cdn.example/a.js`. An input that starts with
/// `scheme ":"` is always read as an IRI, so its errors are reported against
/// the IRI grammar.
///
/// # Examples
///
/// ```
/// use iri_descent::{error::ParseErrorKind, Iri, IriRef};
///
/// let r = IriRef::parse("../img/ロゴ.png?v=2")?;
/// assert!(!r.has_scheme());
/// assert!(r.authority().is_none());
/// assert_eq!(r.path(), "../img/ロゴ.png");
/// assert_eq!(r.query(), Some("v=2"));
///
/// // Only a reference with a scheme converts to an `Iri`.
/// let e = Iri::try_from(r).unwrap_err();
/// assert_eq!(e.kind(), ParseErrorKind::NoScheme);
///
/// let iri = Iri::try_from(IriRef::parse("urn:isbn:0451450523")?)?;
/// assert_eq!(iri.path(), "isbn:0451450523");
/// # Ok::<_, iri_descent::error::ParseError>(())
/// ```
#[derive(Clone, Copy)]
pub struct IriRef<T> {
    val: T,
    meta: Meta,
}

/// Implements what `Iri` and `IriRef` share.
macro_rules! impl_ri {
    ($Ty:ident, $rule:ident, $what:literal) => {
        impl<T> RiRef for $Ty<T> {
            type Val = T;

            fn new(val: T, meta: Meta) -> Self {
                Self { val, meta }
            }
        }

        impl<T> $Ty<T> {
            #[doc = concat!("Parses ", $what, " from a `&str` or a `String`.")]
            ///
            /// A `&str` input fails with [`ParseError`]. A `String` input fails
            /// with `ParseError<String>`, which hands the string back through
            /// [`into_input`](ParseError::into_input).
            ///
            /// # Errors
            ///
            /// Returns `Err` at the first code point that the grammar cannot
            /// accept, or at the end of input if the input stops short.
            pub fn parse<I>(input: I) -> Result<Self, I::Err>
            where
                I: Parse<Val = T>,
            {
                input.parse(Rule::$rule).map(RiRef::from_pair)
            }
        }

        impl $Ty<String> {
            /// Returns a copy that borrows the string held by `self`.
            #[allow(clippy::should_implement_trait)]
            #[must_use]
            pub fn borrow(&self) -> $Ty<&str> {
                RiRef::new(self.val.as_str(), self.meta)
            }

            /// Returns the string held by `self`.
            #[must_use]
            pub fn into_string(self) -> String {
                self.val
            }
        }

        impl $Ty<&str> {
            /// Copies the input into a `String`. The input is not parsed again.
            #[must_use]
            pub fn to_owned(&self) -> $Ty<String> {
                RiRef::new(self.val.to_owned(), self.meta)
            }
        }

        impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> $Ty<T> {
            /// Returns the input as a string slice.
            #[must_use]
            pub fn as_str(&'i self) -> &'o str {
                self.val.borrow_or_share()
            }

            fn view(&'i self) -> Ref<'o, 'i> {
                Ref {
                    val: self.as_str(),
                    meta: &self.meta,
                }
            }

            /// Returns the authority, which follows a `//`.
            #[must_use]
            pub fn authority(&'i self) -> Option<Authority<'o>> {
                self.view().authority()
            }

            /// Returns the path. It is always present, but may be empty.
            #[must_use]
            pub fn path(&'i self) -> &'o Path {
                self.view().path()
            }

            /// Returns the query, without the leading `?`.
            ///
            /// An empty query after a `?` is `Some("")`.
            #[must_use]
            pub fn query(&'i self) -> Option<&'o str> {
                self.view().query()
            }

            /// Returns the fragment, without the leading `#`.
            #[must_use]
            pub fn fragment(&'i self) -> Option<&'o str> {
                self.view().fragment()
            }
        }

        impl<T: Bos<str>> $Ty<T> {
            /// Checks whether an authority is present.
            #[must_use]
            pub fn has_authority(&self) -> bool {
                self.meta.auth_meta.is_some()
            }

            /// Checks whether a query is present.
            #[must_use]
            pub fn has_query(&self) -> bool {
                self.meta.query_end.is_some()
            }

            /// Checks whether a fragment is present.
            #[must_use]
            pub fn has_fragment(&self) -> bool {
                self.view().fragment_start().is_some()
            }
        }

        impl<T: Bos<str>, U: Bos<str>> PartialEq<$Ty<U>> for $Ty<T> {
            fn eq(&self, other: &$Ty<U>) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl<T: Bos<str>> Eq for $Ty<T> {}

        impl<T: Bos<str>> PartialEq<str> for $Ty<T> {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl<T: Bos<str>> PartialEq<&str> for $Ty<T> {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl<T: Bos<str>> hash::Hash for $Ty<T> {
            fn hash<H: hash::Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl<T: Bos<str>> Ord for $Ty<T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl<T: Bos<str>> PartialOrd for $Ty<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<'a> TryFrom<&'a str> for $Ty<&'a str> {
            type Error = ParseError;

            fn try_from(s: &'a str) -> Result<Self, ParseError> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $Ty<String> {
            type Error = ParseError<String>;

            fn try_from(s: String) -> Result<Self, ParseError<String>> {
                Self::parse(s)
            }
        }

        impl FromStr for $Ty<String> {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, ParseError> {
                $Ty::parse(s).map(|r| r.to_owned())
            }
        }

        impl<T: Bos<str>> fmt::Debug for $Ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($Ty))
                    .field("scheme", &self.scheme())
                    .field("authority", &self.authority())
                    .field("path", &self.path())
                    .field("query", &self.query())
                    .field("fragment", &self.fragment())
                    .finish()
            }
        }

        impl<T: Bos<str>> fmt::Display for $Ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
        impl<T: Bos<str>> Serialize for $Ty<T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
        impl<'de> Deserialize<'de> for $Ty<&'de str> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <&'de str>::deserialize(deserializer)?;
                Self::parse(s).map_err(de::Error::custom)
            }
        }

        #[cfg(feature = "serde")]
        #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
        impl<'de> Deserialize<'de> for $Ty<String> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::parse(s).map_err(de::Error::custom)
            }
        }
    };
}

impl_ri!(Iri, Iri, "an IRI");
impl_ri!(IriRef, IriReference, "an IRI reference");

impl<T> Iri<T> {
    /// Parses an absolute IRI, which is an IRI without a fragment.
    ///
    /// Useful for base IRIs, which must not carry a fragment.
    ///
    /// # Errors
    ///
    /// Returns `Err` as [`parse`](Self::parse) does. A `#` is not
    /// accepted, so an input with a fragment fails at the `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_descent::{error::ParseErrorKind, Iri};
    ///
    /// let base = Iri::parse_absolute("http://example.com/docs/?v=3")?;
    /// assert_eq!(base.query(), Some("v=3"));
    ///
    /// let e = Iri::parse_absolute("http://example.com/#top").unwrap_err();
    /// assert_eq!((e.index(), e.kind()), (19, ParseErrorKind::UnexpectedChar));
    /// # Ok::<_, iri_descent::error::ParseError>(())
    /// ```
    pub fn parse_absolute<I>(input: I) -> Result<Self, I::Err>
    where
        I: Parse<Val = T>,
    {
        input.parse(Rule::AbsoluteIri).map(RiRef::from_pair)
    }
}

impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> Iri<T> {
    /// Returns the scheme.
    ///
    /// Compare it with a [`Scheme`] constant to ignore letter case.
    #[must_use]
    pub fn scheme(&'i self) -> &'o Scheme {
        self.view().scheme().unwrap_or(Scheme::new_validated(""))
    }
}

impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> IriRef<T> {
    /// Returns the scheme, if the reference is an IRI.
    #[must_use]
    pub fn scheme(&'i self) -> Option<&'o Scheme> {
        self.view().scheme()
    }
}

impl<T: Bos<str>> IriRef<T> {
    /// Checks whether a scheme is present, i.e. the reference is an IRI.
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.meta.scheme_end.is_some()
    }
}

impl<T> From<Iri<T>> for IriRef<T> {
    fn from(iri: Iri<T>) -> Self {
        RiRef::new(iri.val, iri.meta)
    }
}

impl<'a> TryFrom<IriRef<&'a str>> for Iri<&'a str> {
    type Error = ParseError;

    /// Fails with [`NoScheme`](ParseErrorKind::NoScheme) at index 0 if the
    /// reference is relative.
    fn try_from(r: IriRef<&'a str>) -> Result<Self, ParseError> {
        match r.no_scheme() {
            Some(e) => Err(e),
            None => Ok(RiRef::new(r.val, r.meta)),
        }
    }
}

impl TryFrom<IriRef<String>> for Iri<String> {
    type Error = ParseError<IriRef<String>>;

    /// Fails with [`NoScheme`](ParseErrorKind::NoScheme) at index 0 if the
    /// reference is relative. The reference is kept in the error.
    fn try_from(r: IriRef<String>) -> Result<Self, Self::Error> {
        match r.no_scheme() {
            Some(e) => Err(e.with_input(r)),
            None => Ok(RiRef::new(r.val, r.meta)),
        }
    }
}

impl<T: Bos<str>> IriRef<T> {
    fn no_scheme(&self) -> Option<ParseError> {
        if self.has_scheme() {
            return None;
        }
        let first = self.as_str().chars().next();
        Some(ParseError::new(0, first, ParseErrorKind::NoScheme))
    }
}

/// An input paired with its component bounds.
struct Ref<'v, 'm> {
    val: &'v str,
    meta: &'m Meta,
}

impl<'v> Ref<'v, '_> {
    fn scheme(&self) -> Option<&'v Scheme> {
        let end = self.meta.scheme_end?.get();
        Some(Scheme::new_validated(&self.val[..end]))
    }

    fn authority(&self) -> Option<Authority<'v>> {
        let mut meta = self.meta.auth_meta?;
        // Skip "//", and the scheme with its colon if present.
        let start = self.meta.scheme_end.map_or(0, |i| i.get() + 1) + 2;
        let end = self.meta.path_bounds.0;

        meta.host_bounds.0 -= start;
        meta.host_bounds.1 -= start;
        Some(Authority::new(&self.val[start..end], meta))
    }

    fn path(&self) -> &'v Path {
        let (start, end) = self.meta.path_bounds;
        Path::new_validated(&self.val[start..end])
    }

    fn query(&self) -> Option<&'v str> {
        let end = self.meta.query_end?.get();
        Some(&self.val[self.meta.path_bounds.1 + 1..end])
    }

    /// Index of the `#`, if any.
    fn fragment_start(&self) -> Option<usize> {
        let i = self.meta.query_or_path_end();
        (i < self.val.len()).then_some(i)
    }

    fn fragment(&self) -> Option<&'v str> {
        self.fragment_start().map(|i| &self.val[i + 1..])
    }
}
