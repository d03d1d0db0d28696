use pixbot_image::{Image, ImageDtype, ImageError};

use crate::parallel;

/// The 3x3 Sobel kernel for the horizontal gradient.
pub const SOBEL_KERNEL_X: [[f32; 3]; 3] = [
    [-1.0, 0.0, 1.0],
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];

/// The 3x3 Sobel kernel for the vertical gradient, the transpose of
/// [`SOBEL_KERNEL_X`].
pub const SOBEL_KERNEL_Y: [[f32; 3]; 3] = [
    [-1.0, -2.0, -1.0],
    [0.0, 0.0, 0.0],
    [1.0, 2.0, 1.0],
];

/// Estimate the gradient magnitude of a grayscale image with 3x3 Sobel kernels.
///
/// Both gradients are computed by discrete correlation with the
/// replicate border policy. Each gradient is taken as an absolute value
/// clamped to [0, 255], and the output is the equal-weighted sum
/// `0.5 * |Gx| + 0.5 * |Gy|`, rounded and clamped to [0, 255].
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output gradient magnitude image.
///
/// Precondition: the input and output images must have the same size.
pub fn sobel_magnitude(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let rows = src.rows();
    let cols = src.cols();
    let src_data = src.as_slice();

    parallel::par_iter_rows_indexed(dst, |y, dst_row| {
        for x in 0..cols {
            let mut sum_x = 0.0f32;
            let mut sum_y = 0.0f32;
            for ky in 0..3usize {
                let sy = (y as isize + ky as isize - 1).clamp(0, rows as isize - 1) as usize;
                for kx in 0..3usize {
                    let sx = (x as isize + kx as isize - 1).clamp(0, cols as isize - 1) as usize;
                    let val: f32 = src_data[sy * cols + sx].into();
                    sum_x += SOBEL_KERNEL_X[ky][kx] * val;
                    sum_y += SOBEL_KERNEL_Y[ky][kx] * val;
                }
            }
            let abs_x = sum_x.abs().min(255.0);
            let abs_y = sum_y.abs().min(255.0);
            dst_row[x] = u8::from_f32(0.5 * abs_x + 0.5 * abs_y);
        }
    });

    Ok(())
}
