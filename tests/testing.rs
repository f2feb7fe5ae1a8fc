#![allow(dead_code)]
use std::num::NonZeroU32;
use std::path::PathBuf;

use fast_image_convolve::{Bgr8, Image};

pub fn non_zero_u32(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap()
}

/// Image where every pixel has its own value depending on coordinates.
pub fn gradient_image(width: u32, height: u32) -> Image {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                Bgr8::new(
                    (x * 7 + y * 3) as u8,
                    (x * 13 ^ y * 5) as u8,
                    (x + y * 11) as u8,
                )
            })
        })
        .collect();
    Image::from_pixels(non_zero_u32(width), non_zero_u32(height), pixels).unwrap()
}

pub fn uniform_image(width: u32, height: u32, pixel: Bgr8) -> Image {
    Image::filled(non_zero_u32(width), non_zero_u32(height), pixel)
}

pub fn image_checksum(image: &Image) -> [u64; 3] {
    let mut res = [0u64; 3];
    for pixel in image.pixels() {
        res[0] += pixel.blue as u64;
        res[1] += pixel.green as u64;
        res[2] += pixel.red as u64;
    }
    res
}

/// Path to the file inside of `./data/result` directory.
pub fn result_path(name: &str) -> PathBuf {
    let dir = PathBuf::from("./data/result");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}
