use std::num::NonZeroU32;
use std::slice::{ChunksExact, ChunksExactMut};

use crate::pixels::Bgr8;
use crate::ImageBufferError;

/// Owned 24-bit image.
///
/// Pixels are stored in row-major order, the first row is the top row
/// of the image. Length of the buffer is always equal to `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: NonZeroU32,
    height: NonZeroU32,
    pixels: Vec<Bgr8>,
}

impl Image {
    /// Create a black image with given dimensions.
    pub fn new(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self::filled(width, height, Bgr8::default())
    }

    /// Create an image where every pixel is equal to `pixel`.
    pub fn filled(width: NonZeroU32, height: NonZeroU32, pixel: Bgr8) -> Self {
        let size = width.get() as usize * height.get() as usize;
        Self {
            width,
            height,
            pixels: vec![pixel; size],
        }
    }

    /// Create an image from vector with pixels.
    pub fn from_pixels(
        width: NonZeroU32,
        height: NonZeroU32,
        pixels: Vec<Bgr8>,
    ) -> Result<Self, ImageBufferError> {
        let size = width.get() as usize * height.get() as usize;
        if pixels.len() != size {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image from vector with bytes of pixels in B, G, R order.
    pub fn from_vec_u8(
        width: NonZeroU32,
        height: NonZeroU32,
        buffer: Vec<u8>,
    ) -> Result<Self, ImageBufferError> {
        let size = width.get() as usize * height.get() as usize * Bgr8::SIZE;
        if buffer.len() != size {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        let pixels = bytemuck::cast_slice::<u8, Bgr8>(&buffer).to_vec();
        Self::from_pixels(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> NonZeroU32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> NonZeroU32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Bgr8] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Bgr8] {
        &mut self.pixels
    }

    /// Buffer with image pixels as bytes in B, G, R order.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Bgr8> {
        if x >= self.width.get() || y >= self.height.get() {
            return None;
        }
        let index = y as usize * self.width.get() as usize + x as usize;
        self.pixels.get(index).copied()
    }

    /// Iterator over rows of the image, from top to bottom.
    #[inline]
    pub fn rows(&self) -> ChunksExact<'_, Bgr8> {
        self.pixels.chunks_exact(self.width.get() as usize)
    }

    #[inline]
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, Bgr8> {
        self.pixels.chunks_exact_mut(self.width.get() as usize)
    }

    #[inline]
    pub fn into_pixels(self) -> Vec<Bgr8> {
        self.pixels
    }

    /// Caller guarantees that `pixels.len() == width * height`.
    pub(crate) fn from_raw_parts(width: NonZeroU32, height: NonZeroU32, pixels: Vec<Bgr8>) -> Self {
        debug_assert_eq!(pixels.len(), width.get() as usize * height.get() as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub(crate) fn same_dimensions(&self, other: &Image) -> bool {
        self.width == other.width && self.height == other.height
    }
}
