#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

/// Combinators that allow combining and extending existing parsers.
pub mod combinator;
/// Utilities for debugging parsers.
pub mod debug;
#[cfg(feature = "either")]
mod either;
/// The error type produced by every parser in the crate.
pub mod error;
/// A worked example: a recursive-descent parser for a small nested markup language.
pub mod markup;
/// Parser primitives that accept specific input patterns.
pub mod primitive;
/// Recursive parsers (parser that include themselves within their patterns).
pub mod recursive;
/// Helpers for working with collections of [`Result`]s.
pub mod result;
/// Text-specific parsers and utilities.
pub mod text;

pub use crate::error::Error;

use crate::{combinator::*, debug::Debug};

use alloc::{boxed::Box, rc::Rc};
use core::{iter::FromIterator, marker::PhantomData, panic::Location};

#[cfg(feature = "sync")]
use alloc::sync::Arc;

/// Commonly used functions, traits and types.
pub mod prelude {
    pub use super::{
        combinator::{
            and_then, either, left, map, one_or_more, pair, pred, right, zero_or_more,
        },
        error::Error,
        primitive::{any, custom, empty, end, just},
        recursive::{lazy, recursive, Recursive},
        run_parser,
        text::{identifier, quoted_string, space0, space1, string_between, whitespace},
        Boxed, PResult, Parser,
    };
}

/// The outcome of running a parser: the unconsumed remainder paired with the produced value, or an [`Error`] marking
/// the input at which parsing failed.
pub type PResult<'a, O> = Result<(&'a str, O), Error<'a>>;

// Reference counting used by `Boxed` and `Recursive`.
#[cfg(feature = "sync")]
pub(crate) type RefC<T> = Arc<T>;
#[cfg(not(feature = "sync"))]
pub(crate) type RefC<T> = Rc<T>;

#[cfg(feature = "sync")]
pub(crate) type DynParser<'a, O> = dyn Parser<'a, O> + Send + Sync + 'a;
#[cfg(not(feature = "sync"))]
pub(crate) type DynParser<'a, O> = dyn Parser<'a, O> + 'a;

/// A trait that requires `Send + Sync` when the `sync` feature is enabled, and nothing otherwise.
///
/// Parsers stored behind [`Boxed`] or [`Recursive`](recursive::Recursive) must implement it.
#[cfg(feature = "sync")]
pub trait MaybeSync: Send + Sync {}
#[cfg(feature = "sync")]
impl<T: ?Sized + Send + Sync> MaybeSync for T {}

/// A trait that requires `Send + Sync` when the `sync` feature is enabled, and nothing otherwise.
///
/// Parsers stored behind [`Boxed`] or [`Recursive`](recursive::Recursive) must implement it.
#[cfg(not(feature = "sync"))]
pub trait MaybeSync {}
#[cfg(not(feature = "sync"))]
impl<T: ?Sized> MaybeSync for T {}

/// Run a parser against some input.
///
/// This is the free-function form of [`Parser::parse`].
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// assert_eq!(run_parser(just("a"), "apoo"), Ok(("poo", "a")));
/// assert_eq!(run_parser(just("a"), "poo"), Err(Error::at("poo")));
/// ```
pub fn run_parser<'a, O, P: Parser<'a, O>>(parser: P, input: &'a str) -> PResult<'a, O> {
    parser.go(input)
}

/// A trait implemented by parsers.
///
/// A parser takes a string slice and attempts to recognise a prefix of it, producing a value of type `O` along with
/// the unconsumed remainder of the input. Every parser in the crate upholds the same contract:
///
/// - On success, the remainder is a suffix of the input. Nothing is fabricated.
///
/// - On failure, the [`Error`] carries the input that the failing parser was given, so that combinators like
///   [`Parser::or`] and [`Parser::repeated`] can retry from the right place.
///
/// Parsers are immutable: running one never changes it, so the same parser may be run any number of times against
/// unrelated inputs.
pub trait Parser<'a, O> {
    /// Run the parser against the given input.
    ///
    /// Implement this method to create your own parser. Prefer [`custom`](primitive::custom) for one-off parsers.
    fn go(&self, inp: &'a str) -> PResult<'a, O>;

    /// Parse the given input, yielding the produced value and whatever input was left unconsumed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let ds = just("d").repeated().at_least(1);
    ///
    /// assert_eq!(ds.parse("ddddog"), Ok(("og", vec!["d"; 4])));
    /// ```
    fn parse(&self, inp: &'a str) -> PResult<'a, O> {
        self.go(inp)
    }

    /// Parse the given input, requiring that all of it is consumed.
    ///
    /// Leftover input is reported as an [`Error`] at the point where parsing stopped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let word = identifier();
    ///
    /// assert_eq!(word.parse_complete("hello"), Ok("hello".to_string()));
    /// assert_eq!(word.parse_complete("hello world"), Err(Error::at(" world")));
    /// ```
    fn parse_complete(&self, inp: &'a str) -> Result<O, Error<'a>> {
        match self.go(inp)? {
            ("", out) => Ok(out),
            (rest, _) => Err(Error::at(rest)),
        }
    }

    /// Parse the given input, collecting a trace of every parser marked with [`Parser::debug`] that was entered.
    ///
    /// See [`debug::Verbose`] for the format of the trace. On targets without `std`, the trace is always empty.
    fn parse_traced(&self, inp: &'a str) -> (PResult<'a, O>, debug::Verbose) {
        debug::collect(|| self.go(inp))
    }

    /// Parse the given input, printing a trace of every parser marked with [`Parser::debug`] that was entered.
    ///
    /// You'll probably want to make sure that this doesn't end up in production code: it exists only to help you
    /// debug your parser.
    #[cfg(feature = "std")]
    fn parse_verbose(&self, inp: &'a str) -> PResult<'a, O> {
        let (res, trace) = self.parse_traced(inp);
        trace.print();
        res
    }

    /// Include this parser in the trace produced by [`Parser::parse_verbose`].
    ///
    /// Outside of a traced parse this has no effect.
    #[track_caller]
    fn debug<L: Into<alloc::borrow::Cow<'static, str>>>(self, label: L) -> Debug<Self>
    where
        Self: Sized,
    {
        Debug {
            parser: self,
            label: label.into(),
            location: *Location::caller(),
        }
    }

    /// Map the output of this parser to another value.
    ///
    /// Failures pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let len = identifier().map(|s| s.len());
    ///
    /// assert_eq!(len.parse("hello!"), Ok(("!", 5)));
    /// ```
    fn map<U, F: Fn(O) -> U>(self, f: F) -> Map<Self, O, F>
    where
        Self: Sized,
    {
        Map {
            parser: self,
            mapper: f,
            phantom: PhantomData,
        }
    }

    /// Transform all outputs of this parser to a pretermined value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// #[derive(Clone, Debug, PartialEq)]
    /// enum Op { Add, Sub }
    ///
    /// let op = just('+').to(Op::Add).or(just('-').to(Op::Sub));
    ///
    /// assert_eq!(op.parse("-1"), Ok(("1", Op::Sub)));
    /// ```
    fn to<U: Clone>(self, x: U) -> To<Self, O, U>
    where
        Self: Sized,
    {
        To {
            parser: self,
            to: x,
            phantom: PhantomData,
        }
    }

    /// Ignore the output of this parser, yielding `()` as an output instead.
    fn ignored(self) -> Ignored<Self, O>
    where
        Self: Sized,
    {
        Ignored {
            parser: self,
            phantom: PhantomData,
        }
    }

    /// Collect the output of this parser into a type implementing [`FromIterator`].
    ///
    /// This is commonly useful for collecting [`Vec<char>`] outputs into [`String`]s.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let digits = any()
    ///     .filter(|c: &char| c.is_ascii_digit())
    ///     .repeated()
    ///     .collect::<String>();
    ///
    /// assert_eq!(digits.parse("123abc"), Ok(("abc", "123".to_string())));
    /// ```
    fn collect<C: FromIterator<O::Item>>(self) -> Collect<Self, O, C>
    where
        Self: Sized,
        O: IntoIterator,
    {
        Collect {
            parser: self,
            phantom: PhantomData,
        }
    }

    /// After a successful parse, reject the output unless it satisfies the given predicate.
    ///
    /// A rejected output fails with the input this parser was *given*, so whatever the inner parser consumed is never
    /// considered spent.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let lowercase = any().filter(|c: &char| c.is_ascii_lowercase());
    ///
    /// assert_eq!(lowercase.parse("ab"), Ok(("b", 'a')));
    /// assert_eq!(lowercase.parse("Ab"), Err(Error::at("Ab")));
    /// ```
    fn filter<F: Fn(&O) -> bool>(self, f: F) -> Filter<Self, F>
    where
        Self: Sized,
    {
        Filter {
            parser: self,
            filter: f,
        }
    }

    /// Parse one thing and then another thing, yielding a tuple of the two outputs.
    ///
    /// There is no rollback: if the second parser fails, its error is returned as-is, positioned after whatever the
    /// first parser consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let key_value = identifier().then_ignore(just('=')).then(identifier());
    ///
    /// assert_eq!(key_value.parse("a=b"), Ok(("", ("a".to_string(), "b".to_string()))));
    /// assert_eq!(key_value.parse("a=!"), Err(Error::at("!")));
    /// ```
    fn then<U, B: Parser<'a, U>>(self, other: B) -> Then<Self, B>
    where
        Self: Sized,
    {
        Then {
            parser_a: self,
            parser_b: other,
        }
    }

    /// Parse one thing and then another thing, yielding only the output of the latter.
    fn ignore_then<U, B: Parser<'a, U>>(self, other: B) -> IgnoreThen<Self, B, O>
    where
        Self: Sized,
    {
        IgnoreThen {
            parser_a: self,
            parser_b: other,
            phantom: PhantomData,
        }
    }

    /// Parse one thing and then another thing, yielding only the output of the former.
    fn then_ignore<U, B: Parser<'a, U>>(self, other: B) -> ThenIgnore<Self, B, U>
    where
        Self: Sized,
    {
        ThenIgnore {
            parser_a: self,
            parser_b: other,
            phantom: PhantomData,
        }
    }

    /// Parse a pattern surrounded by two others, yielding only the output of the inner pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let tag = identifier().delimited_by(just('<'), just('>'));
    ///
    /// assert_eq!(tag.parse("<br>"), Ok(("", "br".to_string())));
    /// ```
    fn delimited_by<U, V, B, C>(self, start: B, end: C) -> DelimitedBy<Self, B, C, U, V>
    where
        Self: Sized,
        B: Parser<'a, U>,
        C: Parser<'a, V>,
    {
        DelimitedBy {
            parser: self,
            start,
            end,
            phantom: PhantomData,
        }
    }

    /// Run a parser, then use its output to build a second parser and run that against the remaining input.
    ///
    /// This is the only way for the grammar of a later stage to depend on the *value* produced by an earlier one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// // A character, followed by that same character again
    /// let doubled = any().and_then(|c: char| any().filter(move |d: &char| *d == c));
    ///
    /// assert_eq!(doubled.parse("aab"), Ok(("b", 'a')));
    /// assert_eq!(doubled.parse("abb"), Err(Error::at("bb")));
    /// ```
    fn and_then<U, B: Parser<'a, U>, F: Fn(O) -> B>(self, f: F) -> AndThen<Self, F, O>
    where
        Self: Sized,
    {
        AndThen {
            parser: self,
            then: f,
            phantom: PhantomData,
        }
    }

    /// Parse one thing or, on failure, another thing.
    ///
    /// The second parser is run against the *original* input, so this is ordered choice with full backtracking: if
    /// both would succeed, the first always wins.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let sign = just('+').or(just('-'));
    ///
    /// assert_eq!(sign.parse("-1"), Ok(("1", '-')));
    /// assert!(sign.parse("1").is_err());
    /// ```
    fn or<B: Parser<'a, O>>(self, other: B) -> Or<Self, B>
    where
        Self: Sized,
    {
        Or {
            parser_a: self,
            parser_b: other,
        }
    }

    /// Attempt to parse something, but only if it exists.
    ///
    /// If parsing of the pattern is successful, the output is `Some(_)`. Otherwise, the output is `None` and no input
    /// is consumed.
    fn or_not(self) -> OrNot<Self>
    where
        Self: Sized,
    {
        OrNot { parser: self }
    }

    /// Parse a pattern any number of times (including zero times), collecting the outputs into a [`Vec`].
    ///
    /// Input is eagerly parsed. Use [`Repeated::at_least`] to require a minimum number of repetitions.
    ///
    /// Repetition stops as soon as the pattern fails, or succeeds without consuming any input. In both cases the
    /// final attempt is discarded along with anything it consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let spaces = just(' ').repeated();
    ///
    /// assert_eq!(spaces.parse("  dog"), Ok(("dog", vec![' ', ' '])));
    /// assert_eq!(spaces.parse("dog"), Ok(("dog", vec![])));
    /// ```
    fn repeated(self) -> Repeated<Self, O>
    where
        Self: Sized,
    {
        Repeated {
            parser: self,
            at_least: 0,
            at_most: None,
            phantom: PhantomData,
        }
    }

    /// Box the parser, yielding a parser that performs parsing through dynamic dispatch.
    ///
    /// Boxing a parser might be useful for:
    ///
    /// - Breaking cycles in the types of self-referential grammars (see [`markup::element`])
    ///
    /// - Places where you need to name the type of a parser
    ///
    /// - Getting around compiler implementation problems with long types
    ///
    /// Boxing a parser is broadly equivalent to boxing other combinators, such as [`Iterator`].
    fn boxed(self) -> Boxed<'a, O>
    where
        Self: Sized + MaybeSync + 'a,
    {
        Boxed {
            inner: RefC::new(self),
        }
    }
}

impl<'a, O, T: Parser<'a, O> + ?Sized> Parser<'a, O> for &T {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        (**self).go(inp)
    }
}

impl<'a, O, T: Parser<'a, O> + ?Sized> Parser<'a, O> for Box<T> {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        (**self).go(inp)
    }
}

impl<'a, O, T: Parser<'a, O> + ?Sized> Parser<'a, O> for Rc<T> {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        (**self).go(inp)
    }
}

#[cfg(feature = "sync")]
impl<'a, O, T: Parser<'a, O> + ?Sized> Parser<'a, O> for Arc<T> {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        (**self).go(inp)
    }
}

/// See [`Parser::boxed`].
///
/// An opaque, cheaply clonable handle to a parser. Internally this is an [`Rc`] (or an
/// [`Arc`](alloc::sync::Arc) with the `sync` feature) to facilitate efficient cloning.
pub struct Boxed<'a, O> {
    inner: RefC<DynParser<'a, O>>,
}

impl<'a, O> Clone for Boxed<'a, O> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, O> Parser<'a, O> for Boxed<'a, O> {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        self.inner.go(inp)
    }

    fn boxed(self) -> Boxed<'a, O>
    where
        Self: Sized + MaybeSync + 'a,
    {
        // Never double-box parsers
        self
    }
}
