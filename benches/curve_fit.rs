use criterion::{criterion_group, criterion_main, Criterion};
use pacurve::chardata::read_char_data;
use pacurve::fitting::curve_fit::{par_power_curves, power_curves, DEFAULT_INCREMENT};

const TEST_FILE: &str = "tests/test_files/SubgigPowerMapping.csv";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("Power curves", |b| b.iter(|| fit_curves()));
    c.bench_function("Parallel power curves", |b| b.iter(|| par_fit_curves()));
}

fn fit_curves() {
    let data = read_char_data(TEST_FILE).expect("Test file not found");
    let _ = power_curves(&data.power_levels, &data.output_powers, DEFAULT_INCREMENT)
        .expect("Could not fit curves");
}

fn par_fit_curves() {
    let data = read_char_data(TEST_FILE).expect("Test file not found");
    let _ = par_power_curves(&data.power_levels, &data.output_powers, DEFAULT_INCREMENT)
        .expect("Could not fit curves");
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
