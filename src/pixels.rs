use bytemuck::{Pod, Zeroable};

/// Pixel of a 24-bit bitmap.
///
/// Components are stored in the same order as in the pixel rows of BMP file,
/// so a row of pixels can be read or written as one chunk of bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Bgr8 {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Bgr8 {
    pub const SIZE: usize = 3;

    #[inline]
    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    /// Pixel with the same value in every component.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}
