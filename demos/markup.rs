//! Parses a markup document and prints its element tree.
//!
//! Run it with the following command:
//! cargo run --example markup -- '<div class="float"><img src="hello.jpg"/></div>'
//!
//! With no argument, a built-in sample is parsed. Pass `--trace` to see which elements and closing tags were entered,
//! nested the same way as the document.

use parsnip::{
    markup::{self, Element},
    prelude::*,
};

// Whitespace may only separate top-level elements
const SAMPLE: &str = include_str!("sample.html");

fn parser<'a>() -> impl Parser<'a, Vec<Element>> {
    markup::element()
        .then_ignore(space0())
        .repeated()
        .delimited_by(space0(), end())
}

fn print_tree(element: &Element, depth: usize) {
    print!("{:indent$}{}", "", element.name, indent = depth * 2);
    for (key, value) in &element.attributes {
        print!(" {key}={value:?}");
    }
    println!();
    for child in &element.children {
        print_tree(child, depth + 1);
    }
}

fn main() {
    let mut trace = false;
    let mut src = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--trace" => trace = true,
            _ => src = Some(arg),
        }
    }
    let src = src.unwrap_or_else(|| SAMPLE.to_string());

    let parser = parser();

    let res = if trace {
        parser.parse_verbose(&src)
    } else {
        parser.parse(&src)
    };

    match res {
        Ok((_, elements)) => elements.iter().for_each(|e| print_tree(e, 0)),
        Err(err) => {
            let offset = err.offset_in(&src).unwrap_or(0);
            let line = src[..offset].matches('\n').count() + 1;
            println!("Parse error on line {line}: {err}");
        }
    }
}
