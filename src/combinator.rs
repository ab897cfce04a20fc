//! Combinators that allow combining and extending existing parsers.
//!
//! *“Ford... you're turning into a penguin. Stop it.”*
//!
//! Although it's *sometimes* useful to be able to name their type, most of these parsers are much easier to work with
//! when accessed through their respective methods on [`Parser`]. Each of the core combinators also has a free-function
//! form ([`pair`], [`either`], [`zero_or_more`], ...) for grammars that read better in prefix style.
//!
//! All combinators share one contract: a failure carries the input at which the *failing* parser was invoked. Only
//! [`Or`], [`Repeated`] and [`OrNot`] ever discard a failure, and only because backtracking is their job.

use super::*;
use alloc::vec::Vec;

/// See [`Parser::map`].
pub struct Map<A, OA, F> {
    pub(crate) parser: A,
    pub(crate) mapper: F,
    pub(crate) phantom: PhantomData<OA>,
}

impl<A: Copy, OA, F: Copy> Copy for Map<A, OA, F> {}
impl<A: Clone, OA, F: Clone> Clone for Map<A, OA, F> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            mapper: self.mapper.clone(),
            phantom: PhantomData,
        }
    }
}

impl<'a, O, A, OA, F> Parser<'a, O> for Map<A, OA, F>
where
    A: Parser<'a, OA>,
    F: Fn(OA) -> O,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        let (rest, out) = self.parser.go(inp)?;
        Ok((rest, (self.mapper)(out)))
    }
}

/// See [`Parser::to`].
pub struct To<A, OA, O> {
    pub(crate) parser: A,
    pub(crate) to: O,
    pub(crate) phantom: PhantomData<OA>,
}

impl<A: Copy, OA, O: Copy> Copy for To<A, OA, O> {}
impl<A: Clone, OA, O: Clone> Clone for To<A, OA, O> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            to: self.to.clone(),
            phantom: PhantomData,
        }
    }
}

impl<'a, O, A, OA> Parser<'a, O> for To<A, OA, O>
where
    A: Parser<'a, OA>,
    O: Clone,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        let (rest, _) = self.parser.go(inp)?;
        Ok((rest, self.to.clone()))
    }
}

/// See [`Parser::ignored`].
pub struct Ignored<A, OA> {
    pub(crate) parser: A,
    pub(crate) phantom: PhantomData<OA>,
}

impl<A: Copy, OA> Copy for Ignored<A, OA> {}
impl<A: Clone, OA> Clone for Ignored<A, OA> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            phantom: PhantomData,
        }
    }
}

impl<'a, A, OA> Parser<'a, ()> for Ignored<A, OA>
where
    A: Parser<'a, OA>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, ()> {
        let (rest, _) = self.parser.go(inp)?;
        Ok((rest, ()))
    }
}

/// See [`Parser::collect`].
pub struct Collect<A, O, C> {
    pub(crate) parser: A,
    pub(crate) phantom: PhantomData<(O, C)>,
}

impl<A: Copy, O, C> Copy for Collect<A, O, C> {}
impl<A: Clone, O, C> Clone for Collect<A, O, C> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            phantom: PhantomData,
        }
    }
}

impl<'a, A, O, C> Parser<'a, C> for Collect<A, O, C>
where
    A: Parser<'a, O>,
    O: IntoIterator,
    C: FromIterator<O::Item>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, C> {
        let (rest, out) = self.parser.go(inp)?;
        Ok((rest, out.into_iter().collect()))
    }
}

/// See [`Parser::filter`].
#[derive(Copy, Clone)]
pub struct Filter<A, F> {
    pub(crate) parser: A,
    pub(crate) filter: F,
}

impl<'a, A, O, F> Parser<'a, O> for Filter<A, F>
where
    A: Parser<'a, O>,
    F: Fn(&O) -> bool,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        let (rest, out) = self.parser.go(inp)?;
        if (self.filter)(&out) {
            Ok((rest, out))
        } else {
            // Whatever the inner parser consumed is given back
            Err(Error::at(inp))
        }
    }
}

/// See [`Parser::then`].
#[derive(Copy, Clone)]
pub struct Then<A, B> {
    pub(crate) parser_a: A,
    pub(crate) parser_b: B,
}

impl<'a, A, B, OA, OB> Parser<'a, (OA, OB)> for Then<A, B>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, (OA, OB)> {
        let (rest, a) = self.parser_a.go(inp)?;
        let (rest, b) = self.parser_b.go(rest)?;
        Ok((rest, (a, b)))
    }
}

/// See [`Parser::ignore_then`].
pub struct IgnoreThen<A, B, OA> {
    pub(crate) parser_a: A,
    pub(crate) parser_b: B,
    pub(crate) phantom: PhantomData<OA>,
}

impl<A: Copy, B: Copy, OA> Copy for IgnoreThen<A, B, OA> {}
impl<A: Clone, B: Clone, OA> Clone for IgnoreThen<A, B, OA> {
    fn clone(&self) -> Self {
        Self {
            parser_a: self.parser_a.clone(),
            parser_b: self.parser_b.clone(),
            phantom: PhantomData,
        }
    }
}

impl<'a, A, B, OA, OB> Parser<'a, OB> for IgnoreThen<A, B, OA>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, OB> {
        let (rest, _) = self.parser_a.go(inp)?;
        self.parser_b.go(rest)
    }
}

/// See [`Parser::then_ignore`].
pub struct ThenIgnore<A, B, OB> {
    pub(crate) parser_a: A,
    pub(crate) parser_b: B,
    pub(crate) phantom: PhantomData<OB>,
}

impl<A: Copy, B: Copy, OB> Copy for ThenIgnore<A, B, OB> {}
impl<A: Clone, B: Clone, OB> Clone for ThenIgnore<A, B, OB> {
    fn clone(&self) -> Self {
        Self {
            parser_a: self.parser_a.clone(),
            parser_b: self.parser_b.clone(),
            phantom: PhantomData,
        }
    }
}

impl<'a, A, B, OA, OB> Parser<'a, OA> for ThenIgnore<A, B, OB>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, OA> {
        let (rest, a) = self.parser_a.go(inp)?;
        let (rest, _) = self.parser_b.go(rest)?;
        Ok((rest, a))
    }
}

/// See [`Parser::delimited_by`].
pub struct DelimitedBy<A, B, C, OB, OC> {
    pub(crate) parser: A,
    pub(crate) start: B,
    pub(crate) end: C,
    pub(crate) phantom: PhantomData<(OB, OC)>,
}

impl<A: Copy, B: Copy, C: Copy, OB, OC> Copy for DelimitedBy<A, B, C, OB, OC> {}
impl<A: Clone, B: Clone, C: Clone, OB, OC> Clone for DelimitedBy<A, B, C, OB, OC> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            phantom: PhantomData,
        }
    }
}

impl<'a, A, B, C, OA, OB, OC> Parser<'a, OA> for DelimitedBy<A, B, C, OB, OC>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
    C: Parser<'a, OC>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, OA> {
        let (rest, _) = self.start.go(inp)?;
        let (rest, a) = self.parser.go(rest)?;
        let (rest, _) = self.end.go(rest)?;
        Ok((rest, a))
    }
}

/// See [`Parser::and_then`].
pub struct AndThen<A, F, OA> {
    pub(crate) parser: A,
    pub(crate) then: F,
    pub(crate) phantom: PhantomData<OA>,
}

impl<A: Copy, F: Copy, OA> Copy for AndThen<A, F, OA> {}
impl<A: Clone, F: Clone, OA> Clone for AndThen<A, F, OA> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            then: self.then.clone(),
            phantom: PhantomData,
        }
    }
}

impl<'a, A, B, F, OA, OB> Parser<'a, OB> for AndThen<A, F, OA>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
    F: Fn(OA) -> B,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, OB> {
        let (rest, out) = self.parser.go(inp)?;
        (self.then)(out).go(rest)
    }
}

/// See [`Parser::or`].
#[derive(Copy, Clone)]
pub struct Or<A, B> {
    pub(crate) parser_a: A,
    pub(crate) parser_b: B,
}

impl<'a, A, B, O> Parser<'a, O> for Or<A, B>
where
    A: Parser<'a, O>,
    B: Parser<'a, O>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        match self.parser_a.go(inp) {
            Ok(out) => Ok(out),
            // `A` failed without spending anything, so `B` starts from the same place
            Err(_) => self.parser_b.go(inp),
        }
    }
}

/// See [`Parser::or_not`].
#[derive(Copy, Clone)]
pub struct OrNot<A> {
    pub(crate) parser: A,
}

impl<'a, A, O> Parser<'a, Option<O>> for OrNot<A>
where
    A: Parser<'a, O>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, Option<O>> {
        Ok(match self.parser.go(inp) {
            Ok((rest, out)) => (rest, Some(out)),
            Err(_) => (inp, None),
        })
    }
}

/// See [`Parser::repeated`].
pub struct Repeated<A, OA> {
    pub(crate) parser: A,
    pub(crate) at_least: usize,
    pub(crate) at_most: Option<usize>,
    pub(crate) phantom: PhantomData<OA>,
}

impl<A: Copy, OA> Copy for Repeated<A, OA> {}
impl<A: Clone, OA> Clone for Repeated<A, OA> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            at_least: self.at_least,
            at_most: self.at_most,
            phantom: PhantomData,
        }
    }
}

impl<A, OA> Repeated<A, OA> {
    /// Require that the pattern appear at least a minimum number of times.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// let ds = just('d').repeated().at_least(1);
    ///
    /// assert_eq!(ds.parse("ddog"), Ok(("og", vec!['d', 'd'])));
    /// assert_eq!(ds.parse("og"), Err(Error::at("og")));
    /// ```
    pub fn at_least(self, at_least: usize) -> Self {
        Self { at_least, ..self }
    }

    /// Require that the pattern appear at most a maximum number of times.
    ///
    /// Repetition stops once the maximum is reached, leaving any further occurrences unconsumed.
    pub fn at_most(self, at_most: usize) -> Self {
        Self {
            at_most: Some(at_most),
            ..self
        }
    }

    /// Require that the pattern appear exactly the given number of times.
    pub fn exactly(self, exactly: usize) -> Self {
        Self {
            at_least: exactly,
            at_most: Some(exactly),
            ..self
        }
    }
}

impl<'a, A, OA> Parser<'a, Vec<OA>> for Repeated<A, OA>
where
    A: Parser<'a, OA>,
{
    fn go(&self, inp: &'a str) -> PResult<'a, Vec<OA>> {
        let mut rest = inp;
        let mut outputs = Vec::new();

        while self.at_most.map_or(true, |at_most| outputs.len() < at_most) {
            match self.parser.go(rest) {
                // A pattern that matches without consuming would match forever, so treat it as the end
                Ok((after, _)) if after.len() == rest.len() => break,
                Ok((after, out)) => {
                    outputs.push(out);
                    rest = after;
                }
                // With nothing banked, the failure is exactly what the pattern alone would produce
                Err(err) if outputs.is_empty() && self.at_least > 0 => return Err(err),
                Err(_) => break,
            }
        }

        if outputs.len() < self.at_least {
            Err(Error::at(inp))
        } else {
            Ok((rest, outputs))
        }
    }
}

/// Apply a function to the output of a parser. See [`Parser::map`].
pub fn map<'a, A, OA, O, F>(parser: A, f: F) -> Map<A, OA, F>
where
    A: Parser<'a, OA>,
    F: Fn(OA) -> O,
{
    parser.map(f)
}

/// Parse `a` and then `b`, yielding both outputs. See [`Parser::then`].
pub fn pair<'a, A, B, OA, OB>(a: A, b: B) -> Then<A, B>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
{
    a.then(b)
}

/// Parse `a` and then `b`, yielding only the output of `a`. See [`Parser::then_ignore`].
pub fn left<'a, A, B, OA, OB>(a: A, b: B) -> ThenIgnore<A, B, OB>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
{
    a.then_ignore(b)
}

/// Parse `a` and then `b`, yielding only the output of `b`. See [`Parser::ignore_then`].
pub fn right<'a, A, B, OA, OB>(a: A, b: B) -> IgnoreThen<A, B, OA>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
{
    a.ignore_then(b)
}

/// Parse `a` or, should it fail, `b` from the same position. See [`Parser::or`].
pub fn either<'a, A, B, O>(a: A, b: B) -> Or<A, B>
where
    A: Parser<'a, O>,
    B: Parser<'a, O>,
{
    a.or(b)
}

/// Parse a pattern any number of times, including none. See [`Parser::repeated`].
///
/// This parser never fails.
pub fn zero_or_more<'a, A, OA>(parser: A) -> Repeated<A, OA>
where
    A: Parser<'a, OA>,
{
    parser.repeated()
}

/// Parse a pattern at least once. See [`Repeated::at_least`].
pub fn one_or_more<'a, A, OA>(parser: A) -> Repeated<A, OA>
where
    A: Parser<'a, OA>,
{
    parser.repeated().at_least(1)
}

/// Reject the output of a parser unless it satisfies a predicate. See [`Parser::filter`].
pub fn pred<'a, A, O, F>(parser: A, f: F) -> Filter<A, F>
where
    A: Parser<'a, O>,
    F: Fn(&O) -> bool,
{
    parser.filter(f)
}

/// Build a second parser from the output of the first. See [`Parser::and_then`].
pub fn and_then<'a, A, B, F, OA, OB>(parser: A, f: F) -> AndThen<A, F, OA>
where
    A: Parser<'a, OA>,
    B: Parser<'a, OB>,
    F: Fn(OA) -> B,
{
    parser.and_then(f)
}
