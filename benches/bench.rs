use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const NUMS: &[f64] = &[0., -69., 123406000., 0.1234, 2.718281828459045, 1.7976931348623157e308];

fn benchmark_id(x: f64) -> BenchmarkId {
    BenchmarkId::from_parameter(ryu::Buffer::new().format(x))
}

fn dectoa_general(c: &mut Criterion) {
    let mut g = c.benchmark_group("dectoa_general");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| dectoa::Buffer::new().format_finite(black_box(num)).len());
        });
    }
    g.finish();
}

fn dectoa_exp(c: &mut Criterion) {
    let mut g = c.benchmark_group("dectoa_exp");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| dectoa::Buffer::new().format_exp_finite(black_box(num)).len());
        });
    }
    g.finish();
}

fn dectoa_precision(c: &mut Criterion) {
    let mut g = c.benchmark_group("dectoa_precision");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| dectoa::format_precision(black_box(num), black_box(6)).len());
        });
    }
    g.finish();
}

fn ryu(c: &mut Criterion) {
    let mut g = c.benchmark_group("ryu");

    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| ryu::Buffer::new().format_finite(black_box(num)).len());
        });
    }
    g.finish();
}

fn std(c: &mut Criterion) {
    let mut g = c.benchmark_group("std");

    use std::io::Write;
    let mut buf = [0u8; 80];
    for num in NUMS {
        g.bench_with_input(benchmark_id(*num), num, |b, &num| {
            b.iter(|| write!(buf.as_mut_slice(), "{}", black_box(num)));
        });
    }
    g.finish();
}

criterion_group!(bench, dectoa_general, dectoa_exp, dectoa_precision, ryu, std);

criterion_main!(bench);
