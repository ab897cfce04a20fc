//! Text-specific parsers and utilities.
//!
//! *“Mostly harmless.”*
//!
//! These are the lexical building blocks of a grammar: whitespace, identifiers and delimited strings. There is no
//! separate lexing pass; each of these parsers works directly on characters.

use super::*;
use crate::primitive::any;
use alloc::{string::String, vec::Vec};

/// A parser that accepts exactly one whitespace character.
///
/// A character is whitespace if [`str::trim`] removes it entirely, which is the Unicode `White_Space` property. This
/// includes U+0085 (next line) but not U+FEFF (the byte order mark), which some other languages' `trim` strips.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// assert_eq!(whitespace().parse("\t x"), Ok((" x", '\t')));
/// assert_eq!(whitespace().parse("x"), Err(Error::at("x")));
/// assert_eq!(whitespace().parse("\u{feff}"), Err(Error::at("\u{feff}")));
/// ```
pub fn whitespace<'a>() -> impl Parser<'a, char> + Copy + Clone {
    any().filter(|c: &char| c.encode_utf8(&mut [0; 4]).trim().is_empty())
}

/// A parser that accepts any amount of whitespace, including none at all.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// assert_eq!(space0().parse("  \n x"), Ok(("x", vec![' ', ' ', '\n', ' '])));
/// assert_eq!(space0().parse("x"), Ok(("x", vec![])));
/// ```
pub fn space0<'a>() -> impl Parser<'a, Vec<char>> + Copy + Clone {
    whitespace().repeated()
}

/// A parser that accepts at least one whitespace character.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// assert_eq!(space1().parse(" x"), Ok(("x", vec![' '])));
/// assert_eq!(space1().parse("x"), Err(Error::at("x")));
/// ```
pub fn space1<'a>() -> impl Parser<'a, Vec<char>> + Copy + Clone {
    whitespace().repeated().at_least(1)
}

/// A parser that accepts an identifier: one or more ASCII alphanumeric characters (`[0-9A-Za-z]+`).
///
/// Unlike identifiers in most programming languages, a leading digit is permitted.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// assert_eq!(identifier().parse("div class"), Ok((" class", "div".to_string())));
/// assert_eq!(identifier().parse("h1>"), Ok((">", "h1".to_string())));
/// assert_eq!(identifier().parse("-x"), Err(Error::at("-x")));
/// ```
pub fn identifier<'a>() -> impl Parser<'a, String> + Copy + Clone {
    any()
        .filter(|c: &char| c.is_ascii_alphanumeric())
        .repeated()
        .at_least(1)
        .collect()
}

/// A parser that accepts `start`, then any characters that are neither `start` nor `end`, then `end`, yielding the
/// characters in between.
///
/// Both delimiters are single characters; there is no escaping.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// let braces = string_between('{', '}');
///
/// assert_eq!(braces.parse("{a b}c"), Ok(("c", "a b".to_string())));
/// assert_eq!(braces.parse("{}"), Ok(("", String::new())));
/// // Nesting is not supported
/// assert_eq!(braces.parse("{a{b}}"), Err(Error::at("{b}}")));
/// ```
pub fn string_between<'a>(
    start: char,
    end: char,
) -> impl Parser<'a, String> + Copy + Clone {
    let open = any().filter(move |c: &char| *c == start);
    let body = any()
        .filter(move |c: &char| *c != start && *c != end)
        .repeated()
        .collect::<String>();
    let close = any().filter(move |c: &char| *c == end);
    open.ignore_then(body).then_ignore(close)
}

/// A parser that accepts a double-quoted string, yielding its contents without the quotes.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// assert_eq!(quoted_string().parse("\"dog\""), Ok(("", "dog".to_string())));
/// assert_eq!(quoted_string().parse("\"dog"), Err(Error::at("")));
/// ```
pub fn quoted_string<'a>() -> impl Parser<'a, String> + Copy + Clone {
    string_between('"', '"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    #[test]
    fn whitespace_kinds() {
        for ws in [" ", "\t", "\n", "\r", "\u{a0}", "\u{2003}"] {
            assert_eq!(whitespace().parse(ws).map(|(rest, _)| rest), Ok(""));
        }
        assert_eq!(whitespace().parse(""), Err(Error::at("")));
    }

    #[test]
    fn whitespace_is_what_trims_away() {
        assert_eq!(whitespace().parse("\u{85}x"), Ok(("x", '\u{85}')));
        assert_eq!(whitespace().parse("\u{feff}x"), Err(Error::at("\u{feff}x")));
        assert_eq!(whitespace().parse("\u{200b}"), Err(Error::at("\u{200b}")));

        for c in ['\u{b}', '\u{c}', '\u{1680}', '\u{2028}', '\u{3000}', '\u{180e}', 'a', '\0'] {
            let s = c.to_string();
            assert_eq!(whitespace().parse(&s).is_ok(), s.trim().is_empty(), "{:?}", c);
        }
    }

    #[test]
    fn space1_requires_one() {
        assert_eq!(space1().parse("\t\tx"), Ok(("x", vec!['\t', '\t'])));
        assert_eq!(space1().parse(""), Err(Error::at("")));
    }

    #[test]
    fn identifier_is_ascii_only() {
        assert_eq!(identifier().parse("abc123XYZ_"), Ok(("_", "abc123XYZ".to_string())));
        assert_eq!(identifier().parse("naïve"), Ok(("ïve", "na".to_string())));
        assert_eq!(identifier().parse("ïve"), Err(Error::at("ïve")));
        assert_eq!(identifier().parse(""), Err(Error::at("")));
    }

    #[test]
    fn quoted() {
        assert_eq!(quoted_string().parse("\"dog\""), Ok(("", "dog".to_string())));
        assert_eq!(quoted_string().parse("\"\"rest"), Ok(("rest", "".to_string())));
        assert_eq!(quoted_string().parse("dog"), Err(Error::at("dog")));
    }

    #[test]
    fn distinct_delimiters() {
        let angle = string_between('<', '>');
        assert_eq!(angle.parse("<a\"b>"), Ok(("", "a\"b".to_string())));
        // The start delimiter may not appear inside either
        assert_eq!(angle.parse("<a<b>"), Err(Error::at("<b>")));
    }
}
