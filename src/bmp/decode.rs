use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use log::debug;

use super::header::{read_error, row_padding, row_stride, BmpHeader};
use crate::images::Image;
use crate::pixels::Bgr8;
use crate::{BmpError, FormatError};

/// Read an uncompressed 24-bit BMP file.
pub fn decode(path: impl AsRef<Path>) -> Result<Image, BmpError> {
    let path = path.as_ref();
    debug!("Opening the BMP file {:?}", path);
    let file = File::open(path)?;
    decode_from_reader(&mut BufReader::new(file))
}

/// Read an uncompressed 24-bit BMP image from the stream.
///
/// The stream must be positioned at the start of the file header.
/// Rows are stored in the file from bottom to top, the returned
/// image has the top row first.
pub fn decode_from_reader<R: Read + Seek>(reader: &mut R) -> Result<Image, BmpError> {
    let header = BmpHeader::read_from(reader)?;
    let (width, height) = header.validate()?;
    debug!(
        "Decode {}x{} BMP image, pixels data at offset {}",
        width, height, header.data_offset
    );

    let too_large = FormatError::DimensionsTooLarge {
        width: width.get(),
        height: height.get(),
    };
    let pixels_count = (width.get() as usize)
        .checked_mul(height.get() as usize)
        .ok_or(too_large)?;
    let buffer_size = pixels_count.checked_mul(Bgr8::SIZE).ok_or(too_large)?;
    if buffer_size > isize::MAX as usize {
        return Err(too_large.into());
    }

    // Padding after the last row may be missing.
    let row_size = width.get() as u64 * Bgr8::SIZE as u64;
    let data_size = row_stride(width.get()) * (height.get() as u64 - 1) + row_size;
    let stream_len = reader.seek(SeekFrom::End(0))?;
    if stream_len < header.data_offset as u64 + data_size {
        return Err(FormatError::UnexpectedEof.into());
    }

    let mut pixels = vec![Bgr8::default(); pixels_count];
    let padding = row_padding(width.get()) as usize;
    let mut padding_buf = [0u8; 3];

    reader.seek(SeekFrom::Start(header.data_offset as u64))?;
    for (i, row) in pixels.chunks_exact_mut(width.get() as usize).rev().enumerate() {
        if i > 0 && padding > 0 {
            reader
                .read_exact(&mut padding_buf[..padding])
                .map_err(read_error)?;
        }
        reader
            .read_exact(bytemuck::cast_slice_mut(row))
            .map_err(read_error)?;
    }

    Ok(Image::from_raw_parts(width, height, pixels))
}
