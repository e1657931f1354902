mod types;

use criterion::{criterion_group, criterion_main, Criterion};
use ofx_serde::{Binary, Format, Json, Xml};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;
use types::*;

fn randomizer() -> StdRng {
    StdRng::seed_from_u64(0)
}

fn encode<F>(input: &Sketch) -> Vec<u8>
where
    F: Format,
{
    let mut result = Vec::with_capacity(1024);
    F::save(&mut result, input).unwrap();
    result
}

fn serialize(c: &mut Criterion) {
    let mut rng = randomizer();
    let input = &Sketch::generate(&mut rng);

    c.bench_function("Serialize JSON", |b| {
        b.iter(|| encode::<Json>(black_box(input)))
    });
    c.bench_function("Serialize XML", |b| {
        b.iter(|| encode::<Xml>(black_box(input)))
    });
    c.bench_function("Serialize Binary", |b| {
        b.iter(|| encode::<Binary>(black_box(input)))
    });
}

fn deserialize(c: &mut Criterion) {
    let mut rng = randomizer();
    let input = &Sketch::generate(&mut rng);

    c.bench_function("Deserialize JSON", |b| {
        let input = &encode::<Json>(input);
        b.iter(|| Json::load::<Sketch, _>(black_box(input.as_slice())).unwrap())
    });
    c.bench_function("Deserialize XML", |b| {
        let input = &encode::<Xml>(input);
        b.iter(|| Xml::load::<Sketch, _>(black_box(input.as_slice())).unwrap())
    });
    c.bench_function("Deserialize Binary", |b| {
        let input = &encode::<Binary>(input);
        b.iter(|| Binary::load::<Sketch, _>(black_box(input.as_slice())).unwrap())
    });
}

criterion_group!(benches, serialize, deserialize);
criterion_main!(benches);
