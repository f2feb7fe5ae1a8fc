pub use kernels::*;

use log::debug;

use crate::images::Image;
use crate::ConvolutionError;

mod kernels;
mod native;

/// Options for [apply_with_options] and [apply_into].
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct ConvolveOptions {
    pub use_threading: bool,
}

impl Default for ConvolveOptions {
    fn default() -> Self {
        Self {
            use_threading: true,
        }
    }
}

impl ConvolveOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Split rows of the image between threads of the current
    /// `rayon` thread pool.
    ///
    /// Has no effect without `rayon` feature. Result of convolution
    /// doesn't depend on this option.
    ///
    /// `true` by default.
    pub fn use_threading(&self, v: bool) -> Self {
        let mut options = *self;
        options.use_threading = v;
        options
    }
}

/// Convolve the image with the kernel using default options.
///
/// Pixels outside of the image are replaced by the nearest edge pixels.
/// Each component of the result is clamped into `[0, 255]` and truncated
/// to integer.
pub fn apply(src_image: &Image, kernel: &Kernel) -> Result<Image, ConvolutionError> {
    apply_with_options(src_image, kernel, &ConvolveOptions::default())
}

pub fn apply_with_options(
    src_image: &Image,
    kernel: &Kernel,
    options: &ConvolveOptions,
) -> Result<Image, ConvolutionError> {
    let mut dst_image = Image::new(src_image.width(), src_image.height());
    apply_into(src_image, &mut dst_image, kernel, options)?;
    Ok(dst_image)
}

/// Convolve the image with the kernel and store result into
/// the destination image that has the same dimensions.
pub fn apply_into(
    src_image: &Image,
    dst_image: &mut Image,
    kernel: &Kernel,
    options: &ConvolveOptions,
) -> Result<(), ConvolutionError> {
    if !kernel.is_square() {
        return Err(ConvolutionError::InvalidKernel(kernel.len()));
    }
    if !src_image.same_dimensions(dst_image) {
        return Err(ConvolutionError::DifferentDimensions);
    }

    let width = src_image.width().get();
    let height = src_image.height().get();
    let window = native::Window::new(
        kernel.weights(),
        kernel.side(),
        kernel.radius(),
        width as usize,
    );
    debug!(
        "Convolve {}x{} image with {}x{} kernel (radius {})",
        width,
        height,
        kernel.side(),
        kernel.side(),
        kernel.radius()
    );

    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            if options.use_threading {
                if let Some(rows_per_part) = crate::threading::rows_per_part(width, height) {
                    use rayon::prelude::*;

                    debug!("Split the image into parts of {} rows", rows_per_part);
                    let window = &window;
                    dst_image
                        .pixels_mut()
                        .par_chunks_mut(rows_per_part * width as usize)
                        .enumerate()
                        .for_each(|(i, dst_rows)| {
                            native::convolve_rows(src_image, window, i * rows_per_part, dst_rows)
                        });
                    return Ok(());
                }
            }
        } else {
            let _ = options;
        }
    }

    native::convolve_rows(src_image, &window, 0, dst_image.pixels_mut());
    Ok(())
}
