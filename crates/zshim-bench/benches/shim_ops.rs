//! Criterion micro-benchmarks for entropy fill and aligned allocation.

use std::hint::black_box;
use std::ptr;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use zshim_bench::{chacha_platform, libc_platform, ALLOC_PROFILE, ENTROPY_LENGTHS};
use zshim_core::{entropy, ShimConfig};
use zshim_ffi::raw;

fn bench_entropy_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("entropy_fill");
    let libc = libc_platform();
    let chacha = chacha_platform(42);
    let mut buf = [0u8; 256];
    for len in ENTROPY_LENGTHS {
        group.bench_with_input(BenchmarkId::new("minimal_libc", len), &len, |b, &len| {
            b.iter(|| {
                entropy::fill(&libc, &ShimConfig::DEFAULT, &mut buf[..len]).unwrap();
                black_box(&buf);
            });
        });
        group.bench_with_input(BenchmarkId::new("chacha8", len), &len, |b, &len| {
            b.iter(|| {
                entropy::fill(&chacha, &ShimConfig::DEFAULT, &mut buf[..len]).unwrap();
                black_box(&buf);
            });
        });
    }
    group.finish();
}

fn bench_posix_memalign(c: &mut Criterion) {
    let mut group = c.benchmark_group("posix_memalign");
    let platform = libc_platform();
    for (alignment, size) in ALLOC_PROFILE {
        let id = BenchmarkId::from_parameter(format!("{alignment}x{size}"));
        group.bench_function(id, |b| {
            b.iter(|| {
                let mut slot = ptr::null_mut();
                let rc = unsafe {
                    raw::posix_memalign(&platform, &ShimConfig::DEFAULT, &mut slot, alignment, size)
                };
                assert_eq!(rc, 0);
                platform.heap.release(black_box(slot));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_entropy_fill, bench_posix_memalign);
criterion_main!(benches);
