use crate::images::Image;
use crate::pixels::Bgr8;

/// Geometry of the kernel window, prepared once for the whole image.
pub(crate) struct Window<'a> {
    weights: &'a [f32],
    side: usize,
    radius: usize,
    /// For every column of the image, clamped source columns
    /// of `x - radius ..= x + radius`.
    columns: Vec<usize>,
}

impl<'a> Window<'a> {
    pub fn new(weights: &'a [f32], side: usize, radius: usize, width: usize) -> Self {
        let size = 2 * radius + 1;
        let mut columns = Vec::with_capacity(width * size);
        for x in 0..width {
            columns.extend((0..size).map(|k| clamp_coord(x, k, radius, width)));
        }
        Self {
            weights,
            side,
            radius,
            columns,
        }
    }

    #[inline]
    fn size(&self) -> usize {
        2 * self.radius + 1
    }
}

/// Source coordinate of `pos + k - radius` clamped into `0..len`.
#[inline(always)]
fn clamp_coord(pos: usize, k: usize, radius: usize, len: usize) -> usize {
    (pos + k).saturating_sub(radius).min(len - 1)
}

/// Saturating cast with truncation of the fractional part.
#[inline(always)]
fn clip8(v: f32) -> u8 {
    v.clamp(0., 255.) as u8
}

/// Compute rows of the destination image starting from `first_row`.
///
/// `dst_rows` must hold a whole number of rows of the source width.
pub(crate) fn convolve_rows(src: &Image, window: &Window, first_row: usize, dst_rows: &mut [Bgr8]) {
    let width = src.width().get() as usize;
    let height = src.height().get() as usize;
    let src_pixels = src.pixels();
    let size = window.size();

    for (dy, dst_row) in dst_rows.chunks_exact_mut(width).enumerate() {
        let y = first_row + dy;
        for (x, dst_pixel) in dst_row.iter_mut().enumerate() {
            let columns = &window.columns[x * size..(x + 1) * size];
            let mut ss_b = 0f32;
            let mut ss_g = 0f32;
            let mut ss_r = 0f32;

            for ky in 0..size {
                let src_y = clamp_coord(y, ky, window.radius, height);
                let src_row = &src_pixels[src_y * width..(src_y + 1) * width];
                let first_k = ky * window.side;
                // Window row is `size` weights starting at `ky * side`.
                // For even side it overlaps the next table row and may run
                // past the end of the table, missing weights count as zero.
                let ks = window.weights.get(first_k..).unwrap_or_default();
                for (&k, &src_x) in ks.iter().zip(columns) {
                    let pixel = src_row[src_x];
                    ss_b += pixel.blue as f32 * k;
                    ss_g += pixel.green as f32 * k;
                    ss_r += pixel.red as f32 * k;
                }
            }

            *dst_pixel = Bgr8::new(clip8(ss_b), clip8(ss_g), clip8(ss_r));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_columns() {
        let window = Window::new(&[0.; 9], 3, 1, 4);
        assert_eq!(
            window.columns,
            vec![0, 0, 1, 0, 1, 2, 1, 2, 3, 2, 3, 3]
        );
    }

    #[test]
    fn clip() {
        assert_eq!(clip8(-0.5), 0);
        assert_eq!(clip8(254.99), 254);
        assert_eq!(clip8(1000.), 255);
        assert_eq!(clip8(f32::NAN), 0);
    }
}
