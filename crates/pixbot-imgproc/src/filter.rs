use pixbot_image::{Image, ImageDtype, ImageError};

use crate::parallel;

/// The fixed 3x3 sharpening kernel.
pub const SHARPEN_KERNEL: [[f32; 3]; 3] = [
    [-1.0, -1.0, -1.0],
    [-1.0, 9.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// Blur an image using an unweighted box filter.
///
/// Each output sample is the mean of the `kernel_size` x `kernel_size`
/// neighborhood around it, per channel, with the anchor at
/// `kernel_size / 2`. Border samples are handled with the replicate
/// policy: edge values extend outward indefinitely.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_size` - The side length of the kernel, at least 1.
///
/// # Example
///
/// ```
/// use pixbot_image::{Image, ImageSize};
/// use pixbot_imgproc::filter::box_blur;
///
/// let image = Image::<u8, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 4,
///     },
///     128,
/// )
/// .unwrap();
///
/// let mut blurred = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// box_blur(&image, &mut blurred, 3).unwrap();
/// assert_eq!(blurred.as_slice(), image.as_slice());
/// ```
pub fn box_blur<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel_size: usize,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if kernel_size == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }

    let rows = src.rows();
    let cols = src.cols();
    let half = (kernel_size / 2) as isize;
    let norm = 1.0 / (kernel_size * kernel_size) as f32;
    let src_data = src.as_slice();

    parallel::par_iter_rows_indexed(dst, |y, dst_row| {
        for x in 0..cols {
            for ch in 0..C {
                let mut sum = 0.0f32;
                for ky in 0..kernel_size {
                    let sy = (y as isize + ky as isize - half).clamp(0, rows as isize - 1) as usize;
                    for kx in 0..kernel_size {
                        let sx =
                            (x as isize + kx as isize - half).clamp(0, cols as isize - 1) as usize;
                        sum += src_data[(sy * cols + sx) * C + ch].into();
                    }
                }
                dst_row[x * C + ch] = T::from_f32(sum * norm);
            }
        }
    });

    Ok(())
}

/// Apply a 3x3 kernel to an image by discrete correlation.
///
/// Border samples are handled with the replicate policy. The sum is
/// accumulated in f32 and converted back with the sample type's
/// rounding and clamping rules.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The 3x3 kernel, row major.
pub fn filter_3x3<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    kernel: &[[f32; 3]; 3],
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
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
            for ch in 0..C {
                let mut sum = 0.0f32;
                for (ky, kernel_row) in kernel.iter().enumerate() {
                    let sy = (y as isize + ky as isize - 1).clamp(0, rows as isize - 1) as usize;
                    for (kx, k) in kernel_row.iter().enumerate() {
                        let sx =
                            (x as isize + kx as isize - 1).clamp(0, cols as isize - 1) as usize;
                        sum += k * src_data[(sy * cols + sx) * C + ch].into();
                    }
                }
                dst_row[x * C + ch] = T::from_f32(sum);
            }
        }
    });

    Ok(())
}

/// Sharpen an image by repeated application of [`SHARPEN_KERNEL`].
///
/// The requested `level` is clamped to [1, 10] and the kernel is applied
/// `level - 1` times, clamping channel values to [0, 255] after each
/// pass. A level of 1 therefore returns the input unmodified; this
/// off-by-one is intentional and preserved from the reference behavior.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `level` - The requested sharpening level.
pub fn sharpen<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    level: i64,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let passes = (level.clamp(1, 10) - 1) as usize;
    if passes == 0 {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let mut current = src.clone();
    for _ in 0..passes {
        let mut next = Image::<u8, C>::from_size_val(src.size(), 0)?;
        filter_3x3(&current, &mut next, &SHARPEN_KERNEL)?;
        current = next;
    }

    dst.as_slice_mut().copy_from_slice(current.as_slice());

    Ok(())
}
