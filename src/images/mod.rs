//! Containers of image pixels.
pub use self::image::Image;

mod image;

#[cfg(feature = "image")]
mod image_crate;
