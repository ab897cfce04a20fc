//! Utilities for debugging parsers.
//!
//! *“He was staring at the instruments with the air of one who is trying to convert Fahrenheit to centigrade in his
//! head while his house is burning down.”*
//!
//! Mark the parsers you care about with [`Parser::debug`], then run the whole grammar with
//! [`Parser::parse_verbose`] (or [`Parser::parse_traced`] to inspect the trace programmatically). Outside of a traced
//! parse, a [`Debug`] parser behaves exactly like the parser it wraps.

use super::*;

use alloc::{borrow::Cow, vec::Vec};
use core::{fmt, panic::Location};

/// Information about a specific parser.
#[derive(Clone, Debug)]
pub struct ParserInfo {
    label: Cow<'static, str>,
    location: Location<'static>,
}

impl ParserInfo {
    pub(crate) fn new(label: Cow<'static, str>, location: Location<'static>) -> Self {
        Self { label, location }
    }

    /// The label given to [`Parser::debug`].
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The place in the source code where the parser was marked for debugging.
    pub fn location(&self) -> Location<'static> {
        self.location
    }
}

/// How a traced parser finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The parser succeeded, consuming this many bytes.
    Matched {
        /// Bytes of input consumed.
        consumed: usize,
    },
    /// The parser failed. The failure was reported this many bytes after the point at which the parser was entered.
    Failed {
        /// Offset of the failure, relative to where the parser started.
        offset: usize,
    },
}

/// A single traced parser invocation, along with every traced invocation nested within it.
#[derive(Clone, Debug)]
pub struct Event {
    info: ParserInfo,
    outcome: Outcome,
    scope: Verbose,
}

impl Event {
    /// The parser that was entered.
    pub fn info(&self) -> &ParserInfo {
        &self.info
    }

    /// How the parser finished.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The traced parsers entered while this one was running.
    pub fn scope(&self) -> &Verbose {
        &self.scope
    }
}

/// A trace of the parsers marked with [`Parser::debug`] that were entered during a parse.
///
/// When displayed, each entry looks like
///
/// ```text
/// Entered element at line 12 in src/main.rs
///     Entered attributes at line 9 in src/main.rs
///     Matched 7 bytes
/// Failed 3 bytes in
/// ```
///
/// with nested parsers indented by four spaces.
#[derive(Clone, Debug, Default)]
pub struct Verbose {
    events: Vec<Event>,
}

impl Verbose {
    pub(crate) fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// The top-level events of this trace, in the order they were entered.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns `true` if no traced parser was entered.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn fmt_inner(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for event in &self.events {
            let indent = depth * 4;
            writeln!(
                f,
                "{:indent$}Entered {} at line {} in {}",
                "",
                event.info.label,
                event.info.location.line(),
                event.info.location.file(),
            )?;
            event.scope.fmt_inner(f, depth + 1)?;
            match event.outcome {
                Outcome::Matched { consumed } => writeln!(f, "{:indent$}Matched {} bytes", "", consumed)?,
                Outcome::Failed { offset } => writeln!(f, "{:indent$}Failed {} bytes in", "", offset)?,
            }
        }
        Ok(())
    }

    /// Print the trace to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Verbose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_inner(f, 0)
    }
}

#[cfg(feature = "std")]
std::thread_local! {
    // One frame per open scope; empty when no traced parse is running
    static SCOPES: core::cell::RefCell<Vec<Verbose>> = core::cell::RefCell::new(Vec::new());
}

#[cfg(feature = "std")]
pub(crate) fn collect<R>(f: impl FnOnce() -> R) -> (R, Verbose) {
    SCOPES.with(|scopes| scopes.borrow_mut().push(Verbose::new()));
    let res = f();
    let trace = SCOPES.with(|scopes| scopes.borrow_mut().pop()).unwrap_or_default();
    (res, trace)
}

#[cfg(not(feature = "std"))]
pub(crate) fn collect<R>(f: impl FnOnce() -> R) -> (R, Verbose) {
    (f(), Verbose::new())
}

#[cfg(feature = "std")]
fn scope<'a, O>(info: impl FnOnce() -> ParserInfo, inp: &'a str, f: impl FnOnce() -> PResult<'a, O>) -> PResult<'a, O> {
    if SCOPES.with(|scopes| scopes.borrow().is_empty()) {
        return f();
    }

    let (res, scope) = collect(f);
    let outcome = match &res {
        Ok((rest, _)) => Outcome::Matched {
            consumed: inp.len() - rest.len(),
        },
        Err(err) => Outcome::Failed {
            offset: inp.len().saturating_sub(err.rest().len()),
        },
    };
    SCOPES.with(|scopes| {
        if let Some(parent) = scopes.borrow_mut().last_mut() {
            parent.events.push(Event {
                info: info(),
                outcome,
                scope,
            });
        }
    });
    res
}

#[cfg(not(feature = "std"))]
fn scope<'a, O>(_: impl FnOnce() -> ParserInfo, _: &'a str, f: impl FnOnce() -> PResult<'a, O>) -> PResult<'a, O> {
    f()
}

/// See [`Parser::debug`].
#[derive(Clone)]
pub struct Debug<A> {
    pub(crate) parser: A,
    pub(crate) label: Cow<'static, str>,
    pub(crate) location: Location<'static>,
}

impl<'a, A, O> Parser<'a, O> for Debug<A>
where
    A: Parser<'a, O>,
{
    #[inline]
    fn go(&self, inp: &'a str) -> PResult<'a, O> {
        scope(
            || ParserInfo::new(self.label.clone(), self.location),
            inp,
            || self.parser.go(inp),
        )
    }
}
