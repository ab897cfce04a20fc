//! Recursive parsers (parser that include themselves within their patterns).
//!
//! *“It's unpleasantly like being drunk."
//! "What's so unpleasant about being drunk?"
//! "You ask a glass of water.”*
//!
//! A grammar like `element := '<' name '>' element* '</' name '>'` refers to itself, so its parser must too. There are
//! two ways to tie the knot:
//!
//! - [`lazy`] builds the inner parser afresh every time it is run. It needs no shared state at all, but each
//!   invocation pays for constructing the parser.
//!
//! - [`recursive()`] (or [`Recursive::declare`] and [`Recursive::define`] for mutually-recursive parsers) builds the
//!   parser once and hands it a cheap handle to itself.
//!
//! With the `stacker` feature (enabled by default), both spill on to the heap rather than overflowing the stack when
//! nesting gets deep.

use super::*;

#[cfg(feature = "sync")]
type OnceCell<T> = std::sync::OnceLock<T>;
#[cfg(not(feature = "sync"))]
type OnceCell<T> = core::cell::OnceCell<T>;

#[cfg(feature = "sync")]
type Weak<T> = alloc::sync::Weak<T>;
#[cfg(not(feature = "sync"))]
type Weak<T> = alloc::rc::Weak<T>;

#[inline]
pub(crate) fn recurse<R>(f: impl FnOnce() -> R) -> R {
    #[cfg(feature = "stacker")]
    return stacker::maybe_grow(1024 * 64, 1024 * 1024, f);
    #[cfg(not(feature = "stacker"))]
    return f();
}

/// See [`lazy`].
#[derive(Copy, Clone)]
pub struct Lazy<F>(F);

impl<'a, O, A, F> Parser<'a, O> for Lazy<F>
where
    A: Parser<'a, O>,
    F: Fn() -> A,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        recurse(|| (self.0)().go(inp))
    }
}

/// A parser that is only constructed when it is run.
///
/// The function is called on every invocation, so a parser may refer to itself simply by calling the function that
/// builds it. Such functions usually need to return a named type (often [`Boxed`]) since an `impl Parser` type cannot
/// contain itself.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// // depth := '(' depth ')' | ''
/// fn depth<'a>() -> Boxed<'a, usize> {
///     just('(')
///         .ignore_then(lazy(depth))
///         .then_ignore(just(')'))
///         .map(|d| d + 1)
///         .or(empty().to(0))
///         .boxed()
/// }
///
/// assert_eq!(depth().parse("((()))"), Ok(("", 3)));
/// assert_eq!(depth().parse("(()"), Ok(("(()", 0)));
/// ```
pub fn lazy<'a, O, A, F>(f: F) -> Lazy<F>
where
    A: Parser<'a, O>,
    F: Fn() -> A,
{
    Lazy(f)
}

enum RecursiveInner<T: ?Sized> {
    Owned(RefC<T>),
    Unowned(Weak<T>),
}

struct Indirect<'a, O> {
    inner: OnceCell<Box<DynParser<'a, O>>>,
}

/// A parser that can be defined in terms of itself by separating its [declaration](Recursive::declare) from its
/// [definition](Recursive::define).
///
/// Prefer to use [`recursive()`], which exists as a convenient wrapper around both operations, if possible.
pub struct Recursive<'a, O> {
    inner: RecursiveInner<Indirect<'a, O>>,
}

impl<'a, O> Recursive<'a, O> {
    /// Declare the existence of a recursive parser, allowing it to be used to construct parser combinators before
    /// being fully defined.
    ///
    /// This should be followed by **exactly one** call to the [`Recursive::define`] method prior to using the parser
    /// for parsing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsnip::prelude::*;
    /// #[derive(Debug, PartialEq)]
    /// enum Chain {
    ///     End,
    ///     Link(char, Box<Chain>),
    /// }
    ///
    /// // Declare the existence of the parser before defining it so that it can reference itself
    /// let mut chain = Recursive::declare();
    ///
    /// // A right-recursive list of '+' becomes a singly linked list
    /// chain.define(just('+')
    ///     .then(chain.clone())
    ///     .map(|(c, chain)| Chain::Link(c, Box::new(chain)))
    ///     .or_not()
    ///     .map(|chain| chain.unwrap_or(Chain::End)));
    ///
    /// assert_eq!(chain.parse_complete(""), Ok(Chain::End));
    /// assert_eq!(
    ///     chain.parse_complete("++"),
    ///     Ok(Chain::Link('+', Box::new(Chain::Link('+', Box::new(Chain::End))))),
    /// );
    /// ```
    pub fn declare() -> Self {
        Recursive {
            inner: RecursiveInner::Owned(RefC::new(Indirect {
                inner: OnceCell::new(),
            })),
        }
    }

    /// Defines the parser after declaring it, allowing it to be used for parsing.
    ///
    /// # Panics
    ///
    /// Panics if the parser has already been defined.
    pub fn define<A: Parser<'a, O> + MaybeSync + 'a>(&mut self, parser: A) {
        if self.parser().inner.set(Box::new(parser)).is_err() {
            panic!("recursive parser already defined");
        }
    }

    fn parser(&self) -> RefC<Indirect<'a, O>> {
        match &self.inner {
            RecursiveInner::Owned(x) => x.clone(),
            RecursiveInner::Unowned(x) => x
                .upgrade()
                .expect("recursive parser used after its owner was dropped"),
        }
    }
}

impl<'a, O> Clone for Recursive<'a, O> {
    fn clone(&self) -> Self {
        Self {
            inner: match &self.inner {
                RecursiveInner::Owned(x) => RecursiveInner::Owned(x.clone()),
                RecursiveInner::Unowned(x) => RecursiveInner::Unowned(x.clone()),
            },
        }
    }
}

impl<'a, O> Parser<'a, O> for Recursive<'a, O> {
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        let parser = self.parser();
        let inner = parser
            .inner
            .get()
            .expect("recursive parser used before being defined");
        recurse(|| inner.go(inp))
    }
}

/// Construct a recursive parser (i.e: a parser that may contain itself as part of its pattern).
///
/// The given function must create the parser. The parser must not be used to parse input before this function returns.
///
/// The handle passed to the function does not keep the parser alive, so a parser built this way never forms a
/// reference cycle. This is a wrapper around [`Recursive::declare`] and [`Recursive::define`].
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// #[derive(Debug, PartialEq)]
/// enum Tree {
///     Leaf(String),
///     Branch(Vec<Tree>),
/// }
///
/// // Parser that recursively parses nested lists
/// let tree = recursive(|tree| {
///     let item = tree.then_ignore(space0());
///     item.repeated()
///         .delimited_by(just('[').then(space0()), just(']'))
///         .map(Tree::Branch)
///         .or(identifier().map(Tree::Leaf))
/// });
///
/// assert_eq!(tree.parse_complete("hello"), Ok(Tree::Leaf("hello".to_string())));
/// assert_eq!(tree.parse_complete("[a b [c]]"), Ok(Tree::Branch(vec![
///     Tree::Leaf("a".to_string()),
///     Tree::Leaf("b".to_string()),
///     Tree::Branch(vec![Tree::Leaf("c".to_string())]),
/// ])));
/// ```
pub fn recursive<'a, O, A, F>(f: F) -> Recursive<'a, O>
where
    A: Parser<'a, O> + MaybeSync + 'a,
    F: FnOnce(Recursive<'a, O>) -> A,
{
    let rc = RefC::new(Indirect {
        inner: OnceCell::new(),
    });
    let handle = Recursive {
        inner: RecursiveInner::Unowned(RefC::downgrade(&rc)),
    };
    let mut parser = Recursive {
        inner: RecursiveInner::Owned(rc),
    };
    parser.define(f(handle));
    parser
}
