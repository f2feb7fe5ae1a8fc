//! Codec of uncompressed 24-bit BMP files.
pub use decode::{decode, decode_from_reader};
pub use encode::{encode, encode_to_vec, encode_to_writer};
pub use header::{row_padding, row_stride, BmpHeader, SIGNATURE};

mod decode;
mod encode;
mod header;
