use criterion::{black_box, criterion_group, Criterion};

use sph_kernels::{Dim, Kernel, KernelFamily, SmoothingKernel};

fn bench_kernels(c: &mut Criterion) {
    let u = black_box(0.5);
    let h_inv = black_box(2.0);

    for family in KernelFamily::ALL {
        let kernel = black_box(Kernel::<f64>::new(family));
        c.bench_function(&format!("{}.value", family), |b| {
            b.iter(|| kernel.value(u, h_inv, Dim::Three))
        });
        c.bench_function(&format!("{}.derivative", family), |b| {
            b.iter(|| kernel.derivative(u, h_inv, Dim::Three))
        });
        c.bench_function(&format!("{}.bias_correction", family), |b| {
            b.iter(|| kernel.bias_correction(black_box(1.0), black_box(1.0), h_inv, Dim::Three))
        });
    }
}

fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(core::time::Duration::new(0, 100))
        .sample_size(1000)
        .significance_level(0.1)
}

criterion_group!(
    name = smoothing_kernel;
    config = config();
    targets = bench_kernels
);
