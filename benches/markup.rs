use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parsnip::{markup, prelude::*};

fn wide(n: usize) -> String {
    let item = r#"<li class="item" data="x"><a href="/page"/></li>"#;
    format!("<ul>{}</ul>", item.repeat(n))
}

fn deep(n: usize) -> String {
    format!("{}<leaf/>{}", "<node kind=\"inner\">".repeat(n), "</node>".repeat(n))
}

fn bench_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup");

    for n in [10, 100, 1000] {
        let input = wide(n);
        group.bench_with_input(BenchmarkId::new("wide", n), &input, |b, input| {
            b.iter(|| black_box(markup::element().parse_complete(black_box(input))).unwrap())
        });
    }

    for n in [10, 100, 1000] {
        let input = deep(n);
        group.bench_with_input(BenchmarkId::new("deep", n), &input, |b, input| {
            b.iter(|| black_box(markup::element().parse_complete(black_box(input))).unwrap())
        });
    }

    group.finish();
}

fn bench_lexical(c: &mut Criterion) {
    let words = "alpha beta gamma delta ".repeat(500);
    let idents = identifier().then_ignore(space0()).repeated();

    c.bench_function("identifiers", |b| {
        b.iter(|| black_box(idents.parse_complete(black_box(&words))).unwrap())
    });
}

criterion_group!(benches, bench_markup, bench_lexical);
criterion_main!(benches);
