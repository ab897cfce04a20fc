//! Behaviour that should hold for any parser and any input, checked over a spread of both.

use parsnip::{prelude::*, result};

const INPUTS: &[&str] = &["", "a", "aa", "ab", "abc", "ddddog", " x", "<a/>", "日本語", "\"q\""];

#[test]
fn literals_fail_with_the_whole_input() {
    for literal in ["a", "abc", "dog", "<a/>", "日本"] {
        for inp in INPUTS {
            match just(literal).parse(inp) {
                Ok((rest, out)) => {
                    assert_eq!(out, literal);
                    assert_eq!(format!("{}{}", literal, rest), *inp);
                }
                Err(err) => assert_eq!(err, *inp),
            }
        }
    }
}

#[test]
fn zero_or_more_never_fails() {
    for inp in INPUTS {
        assert!(zero_or_more(any()).parse(inp).is_ok());
        assert!(zero_or_more(just("a")).parse(inp).is_ok());
        assert!(zero_or_more(identifier()).parse(inp).is_ok());
        assert!(zero_or_more(quoted_string()).parse(inp).is_ok());
        assert!(zero_or_more(pair(just('a'), just('b'))).parse(inp).is_ok());
    }
}

#[test]
fn one_or_more_fails_exactly_like_its_first_attempt() {
    for inp in INPUTS {
        let once = just('a').parse(inp);
        let many = one_or_more(just('a')).parse(inp);
        match (once, many) {
            (Err(e1), Err(e2)) => assert_eq!(e1, e2),
            (Ok(_), Ok((_, outs))) => assert!(!outs.is_empty()),
            (once, many) => panic!("{:?} disagrees with {:?} on {:?}", once, many, inp),
        }
    }
}

#[test]
fn either_prefers_its_first_branch() {
    let first = any().map(|c| (1, c));
    let second = any().map(|c| (2, c));
    for inp in INPUTS.iter().filter(|inp| !inp.is_empty()) {
        assert_eq!(either(first, second).parse(inp).map(|(_, (n, _))| n), Ok(1));
    }
}

#[test]
fn pred_gives_back_what_it_consumed() {
    let word = one_or_more(any()).collect::<String>();
    for inp in INPUTS {
        assert_eq!(pred(word, |_: &String| false).parse(inp), Err(Error::at(inp)));
    }
}

#[test]
fn remainders_are_suffixes() {
    let parsers: Vec<Boxed<'_, String>> = vec![
        identifier().boxed(),
        quoted_string().boxed(),
        space0().collect::<String>().boxed(),
        zero_or_more(any()).collect::<String>().boxed(),
    ];
    for parser in &parsers {
        for inp in INPUTS {
            match parser.parse(inp) {
                Ok((rest, _)) => assert!(inp.ends_with(rest)),
                Err(err) => assert!(err.offset_in(inp).is_some()),
            }
        }
    }
}

#[test]
fn result_scenarios() {
    assert_eq!(result::all(Vec::<Result<i32, ()>>::new()), Ok(vec![]));
    assert_eq!(result::all([Ok(1), Err("x"), Err("y")]), Err("x"));
    assert_eq!(result::any([Err("x"), Ok(1)]), vec![1]);
    assert_eq!(result::first(Err("x"), [Err("y"), Ok(2)]), Ok(2));
    assert_eq!(result::split([Ok(1), Err("x")]), (vec!["x"], vec![1]));
}

#[test]
fn concrete_scenarios() {
    assert_eq!(just("a").parse("poo"), Err(Error::at("poo")));
    assert_eq!(just("a").parse("apoo"), Ok(("poo", "a")));
    assert_eq!(one_or_more(just("d")).parse("ddddog"), Ok(("og", vec!["d"; 4])));
    assert_eq!(zero_or_more(just(" ")).parse("dog"), Ok(("dog", vec![])));
    assert_eq!(quoted_string().parse("\"dog\""), Ok(("", "dog".to_string())));
}
