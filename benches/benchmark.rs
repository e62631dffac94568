use calclex::parse;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse short expression", |b| {
        b.iter(|| parse(black_box("(2022-1992)/2+7")))
    });

    let long = "4.55-0.12x5+(3&+5v-3x}4/3) ".repeat(200);
    c.bench_function("parse long noisy expression", |b| {
        b.iter(|| parse(black_box(&long)))
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
