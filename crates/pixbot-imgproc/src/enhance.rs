use pixbot_image::{Image, ImageDtype, ImageError};

use crate::histogram::compute_histogram;
use crate::parallel;

/// Linearly rescale the observed sample range of an image to [0, 255].
///
/// The minimum and maximum are taken over the whole buffer, across all
/// channels, matching the min-max normalization of the reference
/// implementation. A constant image is returned unchanged to avoid a
/// division by zero.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output normalized image with shape (H, W, C).
///
/// # Example
///
/// ```
/// use pixbot_image::{Image, ImageSize};
/// use pixbot_imgproc::enhance::normalize_min_max;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 3, height: 1 },
///     vec![50, 100, 150],
/// ).unwrap();
///
/// let mut normalized = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// normalize_min_max(&image, &mut normalized).unwrap();
/// assert_eq!(normalized.as_slice(), &[0, 128, 255]);
/// ```
pub fn normalize_min_max<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let (min, max) = match src.as_slice().iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    }) {
        Some(range) => range,
        None => return Ok(()),
    };

    if min == max {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let scale = 255.0 / (max - min) as f32;
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate().take(max as usize + 1).skip(min as usize) {
        *out = u8::from_f32((v - min as usize) as f32 * scale);
    }

    parallel::par_iter_rows_val(src, dst, |src_sample, dst_sample| {
        *dst_sample = lut[*src_sample as usize];
    });

    Ok(())
}

/// Equalize the intensity histogram of a grayscale image.
///
/// Computes the 256-bin histogram, its cumulative distribution, and
/// remaps each sample with the standard equalization formula
/// `round((cdf(v) - cdf_min) / (total - cdf_min) * 255)`, flattening
/// the intensity distribution. A constant image is returned unchanged.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output equalized image.
pub fn equalize_histogram(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let mut hist = [0usize; 256];
    compute_histogram(src, &mut hist, 256)?;

    let mut cdf = [0usize; 256];
    let mut running = 0usize;
    for (c, h) in cdf.iter_mut().zip(hist.iter()) {
        running += h;
        *c = running;
    }

    let total = running;
    let cdf_min = match cdf.iter().find(|&&c| c > 0) {
        Some(&c) => c,
        None => return Ok(()),
    };

    if total == cdf_min {
        dst.as_slice_mut().copy_from_slice(src.as_slice());
        return Ok(());
    }

    let denom = (total - cdf_min) as f32;
    let mut lut = [0u8; 256];
    for (out, &c) in lut.iter_mut().zip(cdf.iter()) {
        *out = u8::from_f32(c.saturating_sub(cdf_min) as f32 * 255.0 / denom);
    }

    parallel::par_iter_rows_val(src, dst, |src_sample, dst_sample| {
        *dst_sample = lut[*src_sample as usize];
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use pixbot_image::{Image, ImageError, ImageSize};

    #[test]
    fn normalize_min_max_stretches_range() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![50, 100, 150],
        )?;

        let mut normalized = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::normalize_min_max(&image, &mut normalized)?;

        assert_eq!(normalized.as_slice(), &[0, 128, 255]);

        Ok(())
    }

    #[test]
    fn normalize_min_max_whole_buffer() -> Result<(), ImageError> {
        // the range is computed across channels, not per channel
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![0, 128, 255],
        )?;

        let mut normalized = Image::<u8, 3>::from_size_val(image.size(), 0)?;
        super::normalize_min_max(&image, &mut normalized)?;

        assert_eq!(normalized.as_slice(), &[0, 128, 255]);

        Ok(())
    }

    #[test]
    fn normalize_min_max_constant_input() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            42,
        )?;

        let mut normalized = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::normalize_min_max(&image, &mut normalized)?;

        assert_eq!(normalized.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn equalize_histogram_spreads_values() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![10, 10, 20, 30],
        )?;

        let mut equalized = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::equalize_histogram(&image, &mut equalized)?;

        assert_eq!(equalized.as_slice(), &[0, 0, 128, 255]);

        Ok(())
    }

    #[test]
    fn equalize_histogram_constant_input() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            7,
        )?;

        let mut equalized = Image::<u8, 1>::from_size_val(image.size(), 0)?;
        super::equalize_histogram(&image, &mut equalized)?;

        assert_eq!(equalized.as_slice(), image.as_slice());

        Ok(())
    }
}
