//! Parser primitives that accept specific input patterns.
//!
//! *“These creatures you call mice, you see, they are not quite as they appear. They are merely the protrusion into
//! our dimension of vastly hyperintelligent pandimensional beings.”*
//!
//! Every other parser in the crate is ultimately built from these.

use super::*;
use alloc::string::String;

/// See [`custom`].
#[derive(Copy, Clone)]
pub struct Custom<F>(F);

impl<'a, O, F> Parser<'a, O> for Custom<F>
where
    F: Fn(&'a str) -> PResult<'a, O>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        (self.0)(inp)
    }
}

/// A parser primitive that allows you to define your own custom parsers from a plain function.
///
/// The function must uphold the usual contract: on success the remainder must be a suffix of its input, and on
/// failure the error must point at its input.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// // Accepts a single ASCII digit and yields its value
/// let digit = custom(|inp| match inp.chars().next().and_then(|c| c.to_digit(10)) {
///     Some(d) => Ok((&inp[1..], d)),
///     None => Err(Error::at(inp)),
/// });
///
/// assert_eq!(digit.parse("7up"), Ok(("up", 7)));
/// assert!(digit.parse("up").is_err());
/// ```
pub fn custom<'a, O, F: Fn(&'a str) -> PResult<'a, O>>(f: F) -> Custom<F> {
    Custom(f)
}

/// See [`end`].
#[derive(Copy, Clone)]
pub struct End;

impl<'a> Parser<'a, ()> for End {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, ()> {
        if inp.is_empty() {
            Ok((inp, ()))
        } else {
            Err(Error::at(inp))
        }
    }
}

/// A parser that accepts only the end of input.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// assert_eq!(end().parse(""), Ok(("", ())));
/// assert!(end().parse("hello").is_err());
/// ```
pub fn end() -> End {
    End
}

/// See [`empty`].
#[derive(Copy, Clone)]
pub struct Empty;

impl<'a> Parser<'a, ()> for Empty {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, ()> {
        Ok((inp, ()))
    }
}

/// A parser that parses no inputs and always succeeds.
pub fn empty() -> Empty {
    Empty
}

/// See [`any`].
#[derive(Copy, Clone)]
pub struct Any;

impl<'a> Parser<'a, char> for Any {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, char> {
        let mut chars = inp.chars();
        match chars.next() {
            Some(c) => Ok((chars.as_str(), c)),
            None => Err(Error::at(inp)),
        }
    }
}

/// A parser that accepts any single character, failing only at the end of input.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// assert_eq!(any().parse("hey"), Ok(("ey", 'h')));
/// assert_eq!(any().parse("é!"), Ok(("!", 'é')));
/// assert_eq!(any().parse(""), Err(Error::at("")));
/// ```
pub fn any() -> Any {
    Any
}

/// Something that [`just`] can match at the start of the input: a [`char`], a [`str`], or a [`String`].
pub trait Literal: Clone {
    /// If `inp` starts with this literal, the input after it.
    fn strip_from<'a>(&self, inp: &'a str) -> Option<&'a str>;
}

impl Literal for char {
    fn strip_from<'a>(&self, inp: &'a str) -> Option<&'a str> {
        inp.strip_prefix(*self)
    }
}

impl Literal for &str {
    fn strip_from<'a>(&self, inp: &'a str) -> Option<&'a str> {
        inp.strip_prefix(*self)
    }
}

impl Literal for String {
    fn strip_from<'a>(&self, inp: &'a str) -> Option<&'a str> {
        inp.strip_prefix(self.as_str())
    }
}

/// See [`just`].
#[derive(Copy, Clone)]
pub struct Just<T>(T);

impl<'a, T: Literal> Parser<'a, T> for Just<T> {
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, T> {
        match self.0.strip_from(inp) {
            Some(rest) => Ok((rest, self.0.clone())),
            None => Err(Error::at(inp)),
        }
    }
}

/// A parser that accepts only the given literal, yielding it as its output.
///
/// The literal must match exactly, character for character. On a mismatch nothing at all is consumed, even if a
/// prefix of the literal matched.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// let a = just("a");
///
/// assert_eq!(a.parse("apoo"), Ok(("poo", "a")));
/// assert_eq!(a.parse("poo"), Err(Error::at("poo")));
///
/// let close = just("</");
/// assert_eq!(close.parse("<div"), Err(Error::at("<div")));
/// assert_eq!(just('?').parse("?!"), Ok(("!", '?')));
/// ```
pub fn just<T: Literal>(literal: T) -> Just<T> {
    Just(literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn literal_is_exact() {
        let lit = just("abc");
        for inp in ["", "a", "ab", "abd", "xabc"] {
            assert_eq!(lit.parse(inp), Err(Error::at(inp)));
        }
        assert_eq!(lit.parse("abcd"), Ok(("d", "abc")));
    }

    #[test]
    fn owned_literals() {
        let name = just("div".to_string());
        assert_eq!(name.parse("div>"), Ok((">", "div".to_string())));
        assert_eq!(name.parse("dvi>"), Err(Error::at("dvi>")));
    }

    #[test]
    fn empty_literal_always_matches() {
        assert_eq!(just("").parse("x"), Ok(("x", "")));
    }

    #[test]
    fn any_consumes_whole_chars() {
        assert_eq!(any().parse("ü"), Ok(("", 'ü')));
        assert_eq!(any().then(any()).parse("日本"), Ok(("", ('日', '本'))));
    }

    #[test]
    fn custom_wraps_functions() {
        let two = custom(|inp| match inp.get(..2) {
            Some(head) => Ok((&inp[2..], head)),
            None => Err(Error::at(inp)),
        });
        assert_eq!(two.parse("abc"), Ok(("c", "ab")));
        assert_eq!(two.parse("a"), Err(Error::at("a")));
    }

    #[test]
    fn end_and_empty() {
        assert_eq!(end().parse(""), Ok(("", ())));
        assert_eq!(end().parse("x"), Err(Error::at("x")));
        assert_eq!(empty().parse("x"), Ok(("x", ())));
    }
}
