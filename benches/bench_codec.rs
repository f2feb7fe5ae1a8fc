use std::io::Cursor;

use criterion::black_box;
use fast_image_convolve::{decode_from_reader, encode_to_vec, encode_to_writer};

use crate::utils::{bench, get_src_image, BenchGroup, HEIGHT, WIDTH};

mod utils;

fn bench_codec(bench_group: &mut BenchGroup) {
    let src_image = get_src_image();
    let size = format!("{WIDTH}x{HEIGHT}");
    let bytes = encode_to_vec(&src_image).unwrap();

    bench(bench_group, 50, "decode", &size, |bencher| {
        bencher.iter(|| decode_from_reader(&mut Cursor::new(&bytes)).unwrap())
    });

    let mut buffer = Vec::with_capacity(bytes.len());
    bench(bench_group, 50, "encode", &size, |bencher| {
        bencher.iter(|| {
            buffer.clear();
            encode_to_writer(&mut buffer, &src_image).unwrap();
            black_box(buffer.len())
        })
    });
}

fn main() {
    utils::run_bench(bench_codec, "BMP codec");
}
