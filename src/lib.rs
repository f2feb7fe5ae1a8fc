#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use bmp::{
    decode, decode_from_reader, encode, encode_to_vec, encode_to_writer, row_padding, row_stride,
    BmpHeader,
};
pub use convolution::{
    apply, apply_into, apply_with_options, ConvolveOptions, Kernel, KernelName, BOX_BLUR,
    EDGE_DETECTION, GAUSSIAN_BLUR, IDENTITY, SHARPEN,
};
pub use errors::*;
pub use images::Image;
pub use pixels::Bgr8;

pub mod bmp;
mod convolution;
mod errors;
pub mod images;
pub mod pixels;
#[cfg(feature = "rayon")]
mod threading;
