use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::header::{row_padding, BmpHeader};
use crate::images::Image;
use crate::BmpError;

const PADDING: [u8; 3] = [0; 3];

/// Write the image into a file as uncompressed 24-bit BMP.
///
/// Existing file is truncated.
pub fn encode(path: impl AsRef<Path>, image: &Image) -> Result<(), BmpError> {
    let path = path.as_ref();
    debug!("Save the image into the BMP file {:?}", path);
    let mut writer = BufWriter::new(File::create(path)?);
    encode_to_writer(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Write header and pixel rows of the image into the stream.
///
/// Rows are written from bottom to top, each row is padded with zeros
/// up to a multiple of 4 bytes.
pub fn encode_to_writer<W: Write>(writer: &mut W, image: &Image) -> Result<(), BmpError> {
    let header = BmpHeader::for_image(image.width(), image.height())?;
    debug!(
        "Encode {}x{} BMP image, file size {} bytes",
        image.width(),
        image.height(),
        header.file_size
    );
    header.write_to(writer)?;

    let padding = &PADDING[..row_padding(image.width().get()) as usize];
    for row in image.rows().rev() {
        writer.write_all(bytemuck::cast_slice(row))?;
        writer.write_all(padding)?;
    }
    Ok(())
}

/// Encode the image into a vector of bytes of BMP file.
pub fn encode_to_vec(image: &Image) -> Result<Vec<u8>, BmpError> {
    let header = BmpHeader::for_image(image.width(), image.height())?;
    let mut res = Vec::with_capacity(header.file_size as usize);
    encode_to_writer(&mut res, image)?;
    Ok(res)
}
