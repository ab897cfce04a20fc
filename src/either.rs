//! A small module that implements the [`Parser`] trait for the
//! [`either::Either`](https://docs.rs/either/latest/either/enum.Either.html) type.

use either::Either;

use crate::{PResult, Parser};

impl<'a, L, R, O> Parser<'a, O> for Either<L, R>
where
    L: Parser<'a, O>,
    R: Parser<'a, O>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        match self {
            Either::Left(l) => l.go(inp),
            Either::Right(r) => r.go(inp),
        }
    }
}
