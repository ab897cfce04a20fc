use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parsnip::prelude::*;

fn bench_backtrack(c: &mut Criterion) {
    let four = just('!')
        .repeated()
        .then_ignore(just(';'))
        .repeated()
        .exactly(4)
        .then_ignore(just(';'));

    let five = just('!')
        .repeated()
        .then_ignore(just(';'))
        .repeated()
        .exactly(5)
        .then_ignore(just(';'));

    let xs = five.or(four).repeated();
    let input = "!!!!;!!!!;!!!!;!!!!;;".repeat(1000);

    c.bench_function("backtrack", |b| {
        b.iter(|| {
            black_box(xs.parse_complete(black_box(&input))).unwrap();
        })
    });
}

criterion_group!(benches, bench_backtrack);
criterion_main!(benches);
