//! Benchmarks for radix conversion and digit rearrangement

extern crate criterion;
extern crate digitlist;
extern crate oorandom;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use digitlist::DigitList;

criterion_main!(
    conversion,
    rearrange,
);

criterion_group!(
    name = conversion;
    config = Criterion::default()
                       .sample_size(100);
    targets =
        bench_from_decimal_str,
        bench_change_scale,
        bench_additional_operation,
);

criterion_group!(
    name = rearrange;
    config = Criterion::default()
                       .sample_size(50);
    targets =
        bench_sort_ascending,
        bench_shift_left,
);


/// Random decimal string of `len` digits with a non-zero leading digit
fn random_decimal(rng: &mut oorandom::Rand32, len: usize) -> String {
    let mut s = String::with_capacity(len);
    s.push(char::from(b'1' + rng.rand_range(0..9) as u8));
    for _ in 1..len {
        s.push(char::from(b'0' + rng.rand_range(0..10) as u8));
    }
    s
}

fn bench_from_decimal_str(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(7);
    let input = random_decimal(&mut rng, 500);

    c.bench_function("from_decimal_str 500 digits", |b| {
        b.iter(|| DigitList::from_decimal_str(black_box(&input)))
    });
}

fn bench_change_scale(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(11);
    let list = DigitList::from_decimal_str(&random_decimal(&mut rng, 500));

    c.bench_function("change_scale 500 digits", |b| {
        b.iter(|| black_box(&list).change_scale())
    });
}

fn bench_additional_operation(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(13);
    let a = DigitList::from_decimal_str(&random_decimal(&mut rng, 300));
    let b = DigitList::from_decimal_str(&random_decimal(&mut rng, 300)).change_scale();

    c.bench_function("additional_operation 300 digits", |bench| {
        bench.iter(|| black_box(&a).additional_operation(Some(black_box(&b))))
    });
}

fn bench_sort_ascending(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(17);
    let list = DigitList::from_decimal_str(&random_decimal(&mut rng, 200));

    c.bench_function("sort_ascending", |b| {
        b.iter(|| {
            let mut l = list.clone();
            l.sort_ascending();
            l
        })
    });
}

fn bench_shift_left(c: &mut Criterion) {
    let mut rng = oorandom::Rand32::new(19);
    let mut list = DigitList::from_decimal_str(&random_decimal(&mut rng, 1000));

    c.bench_function("shift_left", |b| {
        b.iter(|| list.shift_left())
    });
}
