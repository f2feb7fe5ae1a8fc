use rayon::current_num_threads;

/// Number of rows in each part of the destination image processed
/// by one task, or `None` if the image should not be split.
pub(crate) fn rows_per_part(width: u32, height: u32) -> Option<usize> {
    let max_num_parts = calculate_max_h_parts_number(width, height);
    let num_threads = current_num_threads() as u32;
    if num_threads > 1 && max_num_parts > 1 {
        let num_parts = num_threads.min(max_num_parts);
        return Some(height.div_ceil(num_parts) as usize);
    }
    None
}

/// It is not optimal to split images on too small parts.
/// We have to calculate minimal height of one part.
/// For small images, it is equal to `constant / area`.
/// For tall images, it is equal to `height / 256`.
fn calculate_max_h_parts_number(width: u32, height: u32) -> u32 {
    if width == 0 || height == 0 {
        return 1;
    }
    let area = height as u64 * height.max(width) as u64;
    let min_height = ((1u64 << 14) / area).max(height as u64 / 256) as u32;
    height / min_height.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_parts_number() {
        assert_eq!(calculate_max_h_parts_number(0, 100), 1);
        // Too small image to split
        assert_eq!(calculate_max_h_parts_number(10, 10), 0);
        assert_eq!(calculate_max_h_parts_number(100, 100), 100);
        assert_eq!(calculate_max_h_parts_number(100, 1024), 256);
        assert_eq!(calculate_max_h_parts_number(100_000, 100_000), 256);
    }

    #[test]
    fn parts_cover_all_rows() {
        for height in [1u32, 7, 100, 1000, 4321] {
            if let Some(rows) = rows_per_part(512, height) {
                let num_parts = (height as usize).div_ceil(rows);
                assert!(num_parts <= current_num_threads());
                assert!(rows * num_parts >= height as usize);
            }
        }
    }
}
