#![allow(dead_code)]
use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;

use criterion::measurement::WallTime;
use criterion::{Bencher, BenchmarkGroup, BenchmarkId, Criterion};
use fast_image_convolve::{Bgr8, Image};

pub type BenchGroup<'a> = BenchmarkGroup<'a, WallTime>;

pub const WIDTH: u32 = 1920;
pub const HEIGHT: u32 = 1080;

/// Noisy synthetic image, so the benchmarks don't depend on data files.
pub fn get_src_image() -> Image {
    let mut seed = 0x2545_f491_u32;
    let pixels = (0..WIDTH * HEIGHT)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let [b, g, r, _] = seed.to_le_bytes();
            Bgr8::new(b, g, r)
        })
        .collect();
    Image::from_pixels(
        NonZeroU32::new(WIDTH).unwrap(),
        NonZeroU32::new(HEIGHT).unwrap(),
        pixels,
    )
    .unwrap()
}

pub fn run_bench<F>(bench_fn: F, name: &str)
where
    F: FnOnce(&mut BenchGroup),
{
    let mut criterion = Criterion::default()
        .output_directory(&criterion_output_directory())
        .configure_from_args();
    let mut group = criterion.benchmark_group(name);
    bench_fn(&mut group);
    group.finish();
    criterion.final_summary();
}

pub fn bench<S1, S2, F>(
    group: &mut BenchGroup,
    sample_size: usize,
    func_name: S1,
    parameter: S2,
    mut f: F,
) where
    S1: Into<String>,
    S2: Into<String>,
    F: FnMut(&mut Bencher),
{
    let parameter = parameter.into();
    group.sample_size(sample_size);
    group.bench_with_input(
        BenchmarkId::new(func_name.into(), &parameter),
        &parameter,
        |bencher, _| f(bencher),
    );
}

fn criterion_output_directory() -> PathBuf {
    if let Some(value) = env::var_os("CRITERION_HOME") {
        PathBuf::from(value)
    } else {
        PathBuf::from("target/criterion")
    }
}
