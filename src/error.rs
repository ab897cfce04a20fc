//! Parsers in this crate report failure in exactly one way: by pointing at the input that could not be parsed.
//!
//! There is no distinction between 'unexpected end of input', 'expected X, found Y' or 'malformed attribute'. An
//! [`Error`] is simply the unconsumed input at the point where the failing parser was invoked, which is all that the
//! backtracking combinators need in order to retry from the right position.

use core::fmt;

/// The input at which a parser failed.
///
/// Compare against the expected leftover input to check *where* a parse failed:
///
/// ```
/// # use parsnip::prelude::*;
/// let err = just("a").parse("poo").unwrap_err();
///
/// assert_eq!(err, "poo");
/// assert_eq!(err.offset_in("poo"), Some(0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Error<'a> {
    rest: &'a str,
}

impl<'a> Error<'a> {
    /// Create an error pointing at the given input.
    pub const fn at(rest: &'a str) -> Self {
        Self { rest }
    }

    /// The unconsumed input at the point of failure.
    pub const fn rest(&self) -> &'a str {
        self.rest
    }

    /// Returns `true` if parsing failed because the input ran out.
    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    /// The byte offset of the failure point within `source`, the input originally handed to the parser.
    ///
    /// Returns `None` if this error's input is not a suffix of `source`.
    pub fn offset_in(&self, source: &str) -> Option<usize> {
        if source.ends_with(self.rest) {
            Some(source.len() - self.rest.len())
        } else {
            None
        }
    }
}

impl PartialEq<&str> for Error<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.rest == *other
    }
}

impl fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep messages short for large inputs
        const SHOWN: usize = 24;

        match self.rest.char_indices().nth(SHOWN) {
            _ if self.rest.is_empty() => write!(f, "parse failed at end of input"),
            Some((idx, _)) => write!(f, "parse failed at {:?}...", &self.rest[..idx]),
            None => write!(f, "parse failed at {:?}", self.rest),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error<'_> {}
