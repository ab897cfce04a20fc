use parsnip::prelude::*;

#[test]
#[should_panic]
fn recursive_define_twice() {
    let mut expr = Recursive::declare();
    expr.define({
        let atom = any()
            .filter(|c: &char| c.is_alphabetic())
            .repeated()
            .at_least(1)
            .collect::<String>();
        let sum = atom
            .then_ignore(just('+'))
            .then(expr.clone())
            .map(|(a, b): (String, String)| format!("{}{}", a, b));

        sum.or(atom)
    });
    expr.define(expr.clone());

    let _ = expr.then_ignore(end()).parse("a+b+c");
}

fn arithmetic<'a>() -> Recursive<'a, i64> {
    recursive(|expr| {
        let int = any()
            .filter(|c: &char| c.is_ascii_digit())
            .repeated()
            .at_least(1)
            .collect::<String>()
            .map(|s: String| s.parse::<i64>().unwrap());

        let atom = int.or(expr.delimited_by(just('('), just(')')));

        let product = recursive(|product| {
            atom.clone()
                .then(just('*').ignore_then(product).or_not())
                .map(|(a, b): (i64, Option<i64>)| b.map_or(a, |b| a * b))
        });

        product
            .clone()
            .then(just('+').ignore_then(product).repeated())
            .map(|(a, bs): (i64, Vec<i64>)| a + bs.into_iter().sum::<i64>())
    })
}

#[test]
fn arithmetic_expressions() {
    assert_eq!(arithmetic().parse_complete("1+2*3"), Ok(7));
    assert_eq!(arithmetic().parse_complete("(1+2)*3"), Ok(9));
    assert_eq!(arithmetic().parse_complete("2*(3+(4*5))+1"), Ok(47));
    assert_eq!(arithmetic().parse("7)"), Ok((")", 7)));
    assert_eq!(arithmetic().parse("(1+2"), Err(Error::at("")));
}

#[test]
fn recursive_parsers_are_reusable() {
    let expr = arithmetic();
    for (inp, expected) in [("1", 1), ("10*10", 100), ("((((5))))", 5)] {
        assert_eq!(expr.parse_complete(inp), Ok(expected));
    }
}

#[test]
fn lazy_and_recursive_agree() {
    fn nested<'a>() -> Boxed<'a, usize> {
        lazy(nested)
            .delimited_by(just('['), just(']'))
            .map(|d| d + 1)
            .or(empty().to(0))
            .boxed()
    }

    let with_recursive = recursive(|nested| {
        nested
            .delimited_by(just('['), just(']'))
            .map(|d: usize| d + 1)
            .or(empty().to(0))
    });

    for inp in ["", "[]", "[[[]]]", "[[]", "[]]", "x"] {
        assert_eq!(nested().parse(inp), with_recursive.parse(inp));
    }
}
