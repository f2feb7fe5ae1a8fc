use std::io::{self, Read, Write};
use std::num::NonZeroU32;

use crate::pixels::Bgr8;
use crate::{BmpError, FormatError};

/// "BM" read as little-endian `u16`.
pub const SIGNATURE: u16 = 0x4D42;

const INFO_HEADER_SIZE: u32 = 40;
const BITS_PER_PIXEL: u16 = 24;

/// Number of zero bytes appended to every row of pixels, so that length
/// of the row in the file is a multiple of 4.
#[inline]
pub fn row_padding(width: u32) -> u32 {
    let row_size = (width as u64 * Bgr8::SIZE as u64) % 4;
    ((4 - row_size) % 4) as u32
}

/// Length of one row of pixels in the file, including padding.
#[inline]
pub fn row_stride(width: u32) -> u64 {
    width as u64 * Bgr8::SIZE as u64 + row_padding(width) as u64
}

/// File header and BITMAPINFOHEADER of BMP file.
///
/// Fields are serialized one by one in little-endian byte order,
/// without any gaps between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BmpHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved: u32,
    pub data_offset: u32,
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BmpHeader {
    pub const SIZE: usize = 54;

    /// Header of uncompressed 24-bit file with pixels data placed
    /// right after the header.
    pub fn for_image(width: NonZeroU32, height: NonZeroU32) -> Result<Self, FormatError> {
        let too_large = FormatError::DimensionsTooLarge {
            width: width.get(),
            height: height.get(),
        };
        let signed_width = i32::try_from(width.get()).map_err(|_| too_large)?;
        let signed_height = i32::try_from(height.get()).map_err(|_| too_large)?;
        let image_size = width
            .get()
            .checked_mul(height.get())
            .and_then(|v| v.checked_mul(Bgr8::SIZE as u32))
            .ok_or(too_large)?;
        let file_size = row_padding(width.get())
            .checked_mul(height.get())
            .and_then(|v| v.checked_add(image_size))
            .and_then(|v| v.checked_add(Self::SIZE as u32))
            .ok_or(too_large)?;

        Ok(Self {
            signature: SIGNATURE,
            file_size,
            reserved: 0,
            data_offset: Self::SIZE as u32,
            header_size: INFO_HEADER_SIZE,
            width: signed_width,
            height: signed_height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        })
    }

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let mut fields = FieldReader { bytes, pos: 0 };
        Self {
            signature: fields.u16(),
            file_size: fields.u32(),
            reserved: fields.u32(),
            data_offset: fields.u32(),
            header_size: fields.u32(),
            width: fields.i32(),
            height: fields.i32(),
            planes: fields.u16(),
            bits_per_pixel: fields.u16(),
            compression: fields.u32(),
            image_size: fields.u32(),
            x_pixels_per_meter: fields.i32(),
            y_pixels_per_meter: fields.i32(),
            colors_used: fields.u32(),
            colors_important: fields.u32(),
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut fields = FieldWriter {
            bytes: [0; Self::SIZE],
            pos: 0,
        };
        fields.put(&self.signature.to_le_bytes());
        fields.put(&self.file_size.to_le_bytes());
        fields.put(&self.reserved.to_le_bytes());
        fields.put(&self.data_offset.to_le_bytes());
        fields.put(&self.header_size.to_le_bytes());
        fields.put(&self.width.to_le_bytes());
        fields.put(&self.height.to_le_bytes());
        fields.put(&self.planes.to_le_bytes());
        fields.put(&self.bits_per_pixel.to_le_bytes());
        fields.put(&self.compression.to_le_bytes());
        fields.put(&self.image_size.to_le_bytes());
        fields.put(&self.x_pixels_per_meter.to_le_bytes());
        fields.put(&self.y_pixels_per_meter.to_le_bytes());
        fields.put(&self.colors_used.to_le_bytes());
        fields.put(&self.colors_important.to_le_bytes());
        debug_assert_eq!(fields.pos, Self::SIZE);
        fields.bytes
    }

    pub fn read_from(reader: &mut impl Read) -> Result<Self, BmpError> {
        let mut bytes = [0; Self::SIZE];
        reader.read_exact(&mut bytes).map_err(read_error)?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Checks the fields this codec depends on and returns dimensions
    /// of the image.
    ///
    /// Compression, planes and resolution fields are not checked.
    pub fn validate(&self) -> Result<(NonZeroU32, NonZeroU32), FormatError> {
        if self.signature != SIGNATURE {
            return Err(FormatError::BadSignature(self.signature));
        }
        if self.bits_per_pixel != BITS_PER_PIXEL {
            return Err(FormatError::UnsupportedDepth(self.bits_per_pixel));
        }
        let invalid = FormatError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        let width = u32::try_from(self.width)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(invalid)?;
        let height = u32::try_from(self.height)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(invalid)?;
        Ok((width, height))
    }
}

/// A file shorter than its header declares is a format problem,
/// not an I/O one.
pub(crate) fn read_error(err: io::Error) -> BmpError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        FormatError::UnexpectedEof.into()
    } else {
        err.into()
    }
}

struct FieldReader<'a> {
    bytes: &'a [u8; BmpHeader::SIZE],
    pos: usize,
}

impl FieldReader<'_> {
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut res = [0; N];
        res.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        res
    }

    fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }
}

struct FieldWriter {
    bytes: [u8; BmpHeader::SIZE],
    pos: usize,
}

impl FieldWriter {
    fn put(&mut self, field: &[u8]) {
        self.bytes[self.pos..self.pos + field.len()].copy_from_slice(field);
        self.pos += field.len();
    }
}
