//! A parser for a minimal XML-like markup language, built entirely from the crate's own combinators.
//!
//! *“The ships hung in the sky in much the same way that bricks don't.”*
//!
//! The grammar, at the level of characters:
//!
//! ```text
//! attribute_pair   = identifier "=" quoted_string
//! attributes       = { space1 attribute_pair }
//! element_start    = "<" identifier attributes
//! single_element   = element_start "/>"
//! open_element     = element_start ">"
//! close_element(n) = "</" identifier ">"        where identifier == n
//! parent_element   = open_element { element } close_element(name of open_element)
//! element          = single_element | parent_element
//! ```
//!
//! There is no whitespace between elements, no text content, and no escaping within attribute values. Beyond matching
//! closing tags to opening tags, nothing is validated.
//!
//! # Examples
//!
//! ```
//! # use parsnip::prelude::*;
//! use parsnip::markup::{element, Element};
//!
//! let html = r#"<div class="float"><img src="hello.jpg"/></div>"#;
//!
//! assert_eq!(
//!     element().parse(html),
//!     Ok(("", Element::new("div")
//!         .with_attribute("class", "float")
//!         .with_child(Element::new("img").with_attribute("src", "hello.jpg")))),
//! );
//! ```

use super::*;
use crate::{
    primitive::{end, just},
    recursive::lazy,
    text::{identifier, quoted_string, space0, space1},
};
use alloc::{string::String, vec::Vec};
use core::fmt;

/// A node in a markup document.
///
/// Elements produced by [`element`] are built bottom-up: every child is complete before its parent is assembled.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// The tag name.
    pub name: String,
    /// Attributes in the order they were written. Keys need not be unique.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order. Empty for self-closing elements.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with the given name, no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// The value of the first attribute with the given key, if any.
    ///
    /// ```
    /// # use parsnip::markup::Element;
    /// let link = Element::new("a").with_attribute("rel", "first").with_attribute("rel", "second");
    ///
    /// assert_eq!(link.attribute("rel"), Some("first"));
    /// assert_eq!(link.attribute("href"), None);
    /// ```
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Renders the element back into markup that [`element`] accepts.
///
/// Elements without children are rendered in self-closing form. Attribute values containing `"` cannot be expressed
/// in the grammar and are written out as-is.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        if self.children.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.name)
    }
}

/// A `key="value"` pair.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// use parsnip::markup::attribute_pair;
///
/// assert_eq!(
///     attribute_pair().parse(r#"src="hello.jpg"/>"#),
///     Ok(("/>", ("src".to_string(), "hello.jpg".to_string()))),
/// );
/// ```
pub fn attribute_pair<'a>() -> impl Parser<'a, (String, String)> + Copy + Clone {
    identifier().then_ignore(just('=')).then(quoted_string())
}

/// Any number of attribute pairs, each preceded by at least one whitespace character.
///
/// Trailing whitespace that isn't followed by an attribute is left unconsumed.
pub fn attributes<'a>() -> impl Parser<'a, Vec<(String, String)>> + Copy + Clone {
    space1().ignore_then(attribute_pair()).repeated()
}

/// `<`, a tag name and its attributes.
pub fn element_start<'a>() -> impl Parser<'a, (String, Vec<(String, String)>)> + Copy + Clone {
    just('<').ignore_then(identifier().then(attributes()))
}

/// A self-closing element, like `<br/>`.
pub fn single_element<'a>() -> impl Parser<'a, Element> + Copy + Clone {
    element_start()
        .then_ignore(just("/>"))
        .map(|(name, attributes)| Element {
            name,
            attributes,
            children: Vec::new(),
        })
}

/// The opening tag of an element with children, like `<div class="float">`.
pub fn open_element<'a>() -> impl Parser<'a, (String, Vec<(String, String)>)> + Copy + Clone {
    element_start().then_ignore(just('>'))
}

/// A closing tag whose name is exactly `name`.
///
/// The name is checked against the whole tag, so a tag with any other name is rejected at its `</`.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// use parsnip::markup::close_element;
///
/// assert_eq!(close_element("a".to_string()).parse("</a>"), Ok(("", "a".to_string())));
/// assert_eq!(close_element("a".to_string()).parse("</b>"), Err(Error::at("</b>")));
/// ```
pub fn close_element<'a>(name: String) -> impl Parser<'a, String> + Clone {
    just("</")
        .ignore_then(identifier())
        .then_ignore(just('>'))
        .filter(move |id: &String| *id == name)
}

/// An element with an opening tag, any number of child elements, and a matching closing tag.
///
/// The name required of the closing tag is only known once the opening tag has been parsed.
pub fn parent_element<'a>() -> impl Parser<'a, Element> + Copy + Clone {
    open_element().and_then(|(name, attributes)| {
        lazy(element)
            .repeated()
            .then(close_element(name).debug("close_element"))
            .map(move |(children, name)| Element {
                name,
                attributes: attributes.clone(),
                children,
            })
    })
}

/// A single element, either self-closing or with children.
///
/// If the self-closing form doesn't match, the element is retried as a parent element from the same position. When
/// both fail, the error is the one reported by the parent element.
///
/// Elements and closing tags are labelled `element` and `close_element` in traces (see [`Parser::parse_traced`]), so
/// the trace of a nested document nests the same way.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// use parsnip::markup::{element, Element};
///
/// assert_eq!(
///     element().parse(r#"<div class="float"/>"#),
///     Ok(("", Element::new("div").with_attribute("class", "float"))),
/// );
/// // Mismatched tags are reported at the start of the closing tag
/// assert_eq!(element().parse("<a></b>"), Err(Error::at("</b>")));
/// ```
pub fn element<'a>() -> Boxed<'a, Element> {
    single_element().or(parent_element()).debug("element").boxed()
}

/// Any number of top-level elements, optionally separated by whitespace, making up the whole input.
///
/// # Examples
///
/// ```
/// # use parsnip::prelude::*;
/// use parsnip::markup::document;
///
/// let doc = document().parse_complete("<a/>\n<b><c/></b>\n").unwrap();
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc[1].children[0].name, "c");
/// ```
pub fn document<'a>() -> impl Parser<'a, Vec<Element>> + Clone {
    element()
        .then_ignore(space0())
        .repeated()
        .delimited_by(space0(), end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    fn attr(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn self_closing() {
        assert_eq!(
            element().parse("<div class=\"float\"/>"),
            Ok((
                "",
                Element {
                    name: "div".to_string(),
                    attributes: vec![attr("class", "float")],
                    children: vec![],
                },
            )),
        );
    }

    #[test]
    fn nested() {
        let (rest, div) = element()
            .parse("<div class=\"float\"><img src=\"hello.jpg\"/></div>")
            .unwrap();
        assert_eq!(rest, "");
        assert_eq!(div.name, "div");
        assert_eq!(div.children, vec![Element::new("img").with_attribute("src", "hello.jpg")]);
    }

    #[test]
    fn attributes_keep_order_and_duplicates() {
        assert_eq!(
            attributes().parse(" b=\"2\"  a=\"1\" b=\"3\">"),
            Ok((">", vec![attr("b", "2"), attr("a", "1"), attr("b", "3")])),
        );
        // Trailing whitespace belongs to whatever comes next
        assert_eq!(attributes().parse(" x=\"1\" >"), Ok((" >", vec![attr("x", "1")])));
    }

    #[test]
    fn attribute_values_may_be_empty() {
        assert_eq!(attribute_pair().parse("alt=\"\""), Ok(("", attr("alt", ""))));
        assert_eq!(attribute_pair().parse("alt=x"), Err(Error::at("x")));
    }

    #[test]
    fn siblings_and_depth() {
        let (rest, root) = element().parse("<a><b/><c><d/><e/></c><f/></a>tail").unwrap();
        assert_eq!(rest, "tail");
        let names = root.children.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["b", "c", "f"]);
        assert_eq!(root.children[1].children.len(), 2);
    }

    #[test]
    fn empty_parent_is_allowed() {
        assert_eq!(element().parse("<p></p>"), Ok(("", Element::new("p"))));
    }

    #[test]
    fn mismatched_close_tag() {
        assert_eq!(element().parse("<a></b>"), Err(Error::at("</b>")));
        assert_eq!(element().parse("<a><b/></c>"), Err(Error::at("</c>")));
        // An unterminated tag still fails where the tag broke off
        assert_eq!(close_element("a".to_string()).parse("</a"), Err(Error::at("")));
        // A child that fails to parse just ends the children, so `a` expects its close tag where `b` began
        assert_eq!(element().parse("<a><b></a></a>"), Err(Error::at("<b></a></a>")));
    }

    #[test]
    fn whitespace_between_children_is_rejected() {
        assert_eq!(element().parse("<a> <b/></a>"), Err(Error::at(" <b/></a>")));
    }

    #[test]
    fn unterminated() {
        assert_eq!(element().parse("<a"), Err(Error::at("")));
        assert_eq!(element().parse("<a><b/>"), Err(Error::at("")));
        assert_eq!(element().parse("a/>"), Err(Error::at("a/>")));
    }

    #[test]
    fn display_round_trips() {
        let source = "<ul id=\"menu\"><li class=\"item\" data=\"1\"/><li><a href=\"#\"/></li></ul>";
        let (_, parsed) = element().parse(source).unwrap();
        assert_eq!(parsed.to_string(), source);
        let rendered = parsed.to_string();
        assert_eq!(element().parse_complete(&rendered), Ok(parsed));
    }

    #[test]
    fn display_collapses_empty_parents() {
        let (_, parsed) = element().parse("<p></p>").unwrap();
        assert_eq!(parsed.to_string(), "<p/>");
    }

    #[test]
    fn documents() {
        assert_eq!(document().parse_complete(""), Ok(vec![]));
        assert_eq!(
            document().parse_complete("  <a/> <b/>"),
            Ok(vec![Element::new("a"), Element::new("b")]),
        );
        assert_eq!(document().parse_complete("<a/> junk"), Err(Error::at("junk")));
    }
}
