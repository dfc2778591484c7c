use criterion::{criterion_group, criterion_main, Criterion};
use tokendex_core::{evaluate, normalize, parse, InvertedIndex};

fn sample_index() -> InvertedIndex {
    let words = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta"];
    let mut index = InvertedIndex::new();
    for id in 0..10_000 {
        let tokens: Vec<&str> = words.iter().enumerate().filter(|(i, _)| id % (i + 2) == 0).map(|(_, w)| *w).collect();
        if !tokens.is_empty() {
            index.add_document(id as i32, &tokens);
        }
    }
    index
}

fn bench_query(c: &mut Criterion) {
    let index = sample_index();
    let input = "(alpha | beta) & (gamma | delta) & (epsilon | zeta | eta) | theta";
    c.bench_function("parse_normalize", |b| b.iter(|| normalize(&parse(input).unwrap())));
    let dnf = normalize(&parse(input).unwrap());
    c.bench_function("evaluate_dnf", |b| b.iter(|| evaluate(&dnf, &index)));
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
