use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Size of buffer don't match to image dimensions")]
    InvalidBufferSize,
    #[error("Width and height of image must be greater than zero")]
    ZeroDimensions,
}

/// Problems with the content of a BMP file.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid BMP signature {0:#06x}, expected 0x4d42 (\"BM\")")]
    BadSignature(u16),
    #[error("Expected 24 bits per pixel, but file has {0}")]
    UnsupportedDepth(u16),
    #[error("Image dimensions {width}x{height} are not positive")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("Image dimensions {width}x{height} are too large")]
    DimensionsTooLarge { width: u32, height: u32 },
    #[error("File ended before all pixel rows were read")]
    UnexpectedEof,
}

#[derive(Error, Debug)]
pub enum BmpError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionError {
    #[error("Count of kernel weights ({0}) is not a perfect square")]
    InvalidKernel(usize),
    #[error(
        "The dimensions of the source image are not equal to the dimensions of the destination image"
    )]
    DifferentDimensions,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelParseError {
    #[error("Kernel value #{position} ({token:?}) is not a number")]
    InvalidToken { position: usize, token: String },
    #[error("Unknown kernel name {0:?}")]
    UnknownKernelName(String),
}
