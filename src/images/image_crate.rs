use std::num::NonZeroU32;

use ::image::{Rgb, RgbImage};

use crate::images::Image;
use crate::pixels::Bgr8;
use crate::ImageBufferError;

impl From<&Image> for RgbImage {
    fn from(image: &Image) -> Self {
        RgbImage::from_fn(image.width().get(), image.height().get(), |x, y| {
            Rgb(image.get_pixel(x, y).unwrap_or_default().to_rgb())
        })
    }
}

impl TryFrom<&RgbImage> for Image {
    type Error = ImageBufferError;

    fn try_from(image: &RgbImage) -> Result<Self, Self::Error> {
        let width = NonZeroU32::new(image.width()).ok_or(ImageBufferError::ZeroDimensions)?;
        let height = NonZeroU32::new(image.height()).ok_or(ImageBufferError::ZeroDimensions)?;
        let pixels = image
            .pixels()
            .map(|&Rgb([r, g, b])| Bgr8::from_rgb(r, g, b))
            .collect();
        Image::from_pixels(width, height, pixels)
    }
}
