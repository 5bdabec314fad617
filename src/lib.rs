#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

//! A strict recursive-descent IRI parser compliant with IETF [RFC 3987]
//! (and thus [RFC 3986]).
//!
//! **Examples:** [Parsing](Iri#examples).
//!
//! [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987/
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! # Terminology
//!
//! An *[IRI reference]* is either an *[IRI]* or a *[relative reference]*.
//! An *[absolute IRI]* is an IRI without a fragment.
//!
//! [IRI reference]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
//! [IRI]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
//! [relative reference]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
//! [absolute IRI]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
//!
//! # Parsing
//!
//! Every grammar rule is matched by its own method on an internal parser that
//! walks the input one code point at a time. Ambiguous rules are resolved by
//! ordered choice: the alternatives are tried in a fixed order from the same
//! position and the first one that matches wins. The parse is all-or-nothing;
//! the whole input must match or a [`ParseError`](error::ParseError) is returned.
//!
//! Error indexes are counted in code points, not bytes.
//!
//! ```
//! use iri_descent::error::ParseErrorKind;
//!
//! let e = iri_descent::parse("http://[zz]/").unwrap_err();
//! assert_eq!(e.index(), 7);
//! assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);
//!
//! let e = iri_descent::parse("http://例え.jp/%E3%8").unwrap_err();
//! assert_eq!(e.index(), 18);
//! assert_eq!(e.char(), None);
//! assert_eq!(e.kind(), ParseErrorKind::EndOfInput);
//! ```
//!
//! # Crate features
//!
//! - `std` (default): Enables `std` support. This includes [`Error`] implementations.
//!
//! - `impl-error` (default): Enables [`Error`] implementations.
//!   Implied by `std`.
//!
//! - `serde`: Enables [`serde`] support.
//!
//! [`Error`]: core::error::Error

extern crate alloc;

pub mod component;
pub mod error;
pub mod table;

mod cursor;
mod internal;
mod parser;
mod ri;

pub use ri::{Iri, IriRef};

#[cfg(feature = "impl-error")]
use core::error::Error;

/// Parses an IRI from a string slice.
///
/// Equivalent to [`Iri::parse`] with `I = &str`.
///
/// # Errors
///
/// Returns `Err` if the string does not match the
/// [`IRI`][abnf] ABNF rule from RFC 3987.
///
/// [abnf]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
///
/// # Examples
///
/// ```
/// let iri = iri_descent::parse("ldap://[2001:db8::7]/c=GB?objectClass?one")?;
/// assert_eq!(iri.scheme().as_str(), "ldap");
/// assert_eq!(iri.authority().unwrap().host(), "[2001:db8::7]");
/// assert_eq!(iri.path(), "/c=GB");
/// assert_eq!(iri.query(), Some("objectClass?one"));
/// # Ok::<_, iri_descent::error::ParseError>(())
/// ```
pub fn parse(s: &str) -> Result<Iri<&str>, error::ParseError> {
    Iri::parse(s)
}
