#![allow(missing_debug_implementations)]

use crate::{error::ParseError, parser};
use alloc::string::String;
use core::{
    net::{Ipv4Addr, Ipv6Addr},
    num::NonZeroUsize,
};

/// Top-level grammar rule to parse with.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `IRI`
    Iri,
    /// `absolute-IRI`
    AbsoluteIri,
    /// `IRI-reference`
    IriReference,
}

pub trait RiRef: Sized {
    type Val;

    fn new(val: Self::Val, meta: Meta) -> Self;

    fn from_pair((val, meta): (Self::Val, Meta)) -> Self {
        Self::new(val, meta)
    }
}

pub trait Parse {
    type Val;
    type Err;

    fn parse(self, rule: Rule) -> Result<(Self::Val, Meta), Self::Err>;
}

impl<'a> Parse for &'a str {
    type Val = &'a str;
    type Err = ParseError;

    fn parse(self, rule: Rule) -> Result<(Self::Val, Meta), Self::Err> {
        parser::parse(self, rule).map(|meta| (self, meta))
    }
}

impl Parse for String {
    type Val = String;
    type Err = ParseError<String>;

    fn parse(self, rule: Rule) -> Result<(Self::Val, Meta), Self::Err> {
        match parser::parse(&self, rule) {
            Ok(meta) => Ok((self, meta)),
            Err(e) => Err(e.with_input(self)),
        }
    }
}

/// Component boundaries, in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Meta {
    // The index of the trailing colon.
    pub scheme_end: Option<NonZeroUsize>,
    pub auth_meta: Option<AuthMeta>,
    pub path_bounds: (usize, usize),
    // One byte past the last byte of query.
    pub query_end: Option<NonZeroUsize>,
}

impl Meta {
    #[inline]
    pub fn query_or_path_end(&self) -> usize {
        self.query_end.map_or(self.path_bounds.1, |i| i.get())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthMeta {
    pub host_bounds: (usize, usize),
    pub host_meta: HostMeta,
    pub port: Option<u16>,
}

/// Which `ihost` alternative matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostMeta {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    IpvFuture,
    RegName,
}
