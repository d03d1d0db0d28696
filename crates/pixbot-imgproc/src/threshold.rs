use num_traits::Zero;
use std::cmp::PartialOrd;

use pixbot_image::{Image, ImageError};

use crate::parallel;

fn check_sizes<T, const C: usize>(
    src: &Image<T, C>,
    dst: &Image<T, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Apply a binary threshold to an image.
///
/// Samples greater than or equal to `threshold` become `max_value`,
/// the rest become zero.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
/// * `max_value` - The value assigned to samples at or above the threshold.
///
/// # Examples
///
/// ```
/// use pixbot_image::{Image, ImageSize};
/// use pixbot_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0).unwrap();
///
/// threshold_binary(&image, &mut thresholded, 127, 255).unwrap();
/// assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 255, 255]);
/// ```
pub fn threshold_binary<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
) -> Result<(), ImageError>
where
    T: Copy + Clone + Send + Sync + PartialOrd + Zero,
{
    check_sizes(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |src_sample, dst_sample| {
        *dst_sample = if *src_sample >= threshold {
            max_value
        } else {
            T::zero()
        };
    });

    Ok(())
}

/// Apply an inverse binary threshold to an image.
///
/// Samples greater than or equal to `threshold` become zero, the rest
/// become `max_value`.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
/// * `max_value` - The value assigned to samples below the threshold.
pub fn threshold_binary_inverse<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
) -> Result<(), ImageError>
where
    T: Copy + Clone + Send + Sync + PartialOrd + Zero,
{
    check_sizes(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |src_sample, dst_sample| {
        *dst_sample = if *src_sample >= threshold {
            T::zero()
        } else {
            max_value
        };
    });

    Ok(())
}

/// Apply a truncated threshold to an image.
///
/// Samples greater than `threshold` are replaced by the threshold,
/// the rest are unchanged.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
pub fn threshold_truncate<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
) -> Result<(), ImageError>
where
    T: Copy + Clone + Send + Sync + PartialOrd,
{
    check_sizes(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |src_sample, dst_sample| {
        *dst_sample = if *src_sample > threshold {
            threshold
        } else {
            *src_sample
        };
    });

    Ok(())
}

/// Apply a to-zero threshold to an image.
///
/// Samples greater than or equal to `threshold` are unchanged, the
/// rest become zero.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
pub fn threshold_to_zero<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
) -> Result<(), ImageError>
where
    T: Copy + Clone + Send + Sync + PartialOrd + Zero,
{
    check_sizes(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |src_sample, dst_sample| {
        *dst_sample = if *src_sample >= threshold {
            *src_sample
        } else {
            T::zero()
        };
    });

    Ok(())
}

/// Apply an inverse to-zero threshold to an image.
///
/// Samples greater than or equal to `threshold` become zero, the rest
/// are unchanged.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
pub fn threshold_to_zero_inverse<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
) -> Result<(), ImageError>
where
    T: Copy + Clone + Send + Sync + PartialOrd + Zero,
{
    check_sizes(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |src_sample, dst_sample| {
        *dst_sample = if *src_sample >= threshold {
            T::zero()
        } else {
            *src_sample
        };
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use pixbot_image::{Image, ImageError, ImageSize};

    fn test_image() -> Result<Image<u8, 1>, ImageError> {
        Image::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 127, 128, 255],
        )
    }

    #[test]
    fn threshold_binary() -> Result<(), ImageError> {
        let image = test_image()?;
        let mut thresholded = Image::from_size_val(image.size(), 0)?;

        super::threshold_binary(&image, &mut thresholded, 127, 255)?;
        assert_eq!(thresholded.as_slice(), &[0, 255, 255, 255]);

        Ok(())
    }

    #[test]
    fn threshold_binary_inverse() -> Result<(), ImageError> {
        let image = test_image()?;
        let mut thresholded = Image::from_size_val(image.size(), 0)?;

        super::threshold_binary_inverse(&image, &mut thresholded, 127, 255)?;
        assert_eq!(thresholded.as_slice(), &[255, 0, 0, 0]);

        Ok(())
    }

    #[test]
    fn threshold_truncate() -> Result<(), ImageError> {
        let image = test_image()?;
        let mut thresholded = Image::from_size_val(image.size(), 0)?;

        super::threshold_truncate(&image, &mut thresholded, 127)?;
        assert_eq!(thresholded.as_slice(), &[0, 127, 127, 127]);

        Ok(())
    }

    #[test]
    fn threshold_to_zero() -> Result<(), ImageError> {
        let image = test_image()?;
        let mut thresholded = Image::from_size_val(image.size(), 0)?;

        super::threshold_to_zero(&image, &mut thresholded, 127)?;
        assert_eq!(thresholded.as_slice(), &[0, 127, 128, 255]);

        Ok(())
    }

    #[test]
    fn threshold_to_zero_inverse() -> Result<(), ImageError> {
        let image = test_image()?;
        let mut thresholded = Image::from_size_val(image.size(), 0)?;

        super::threshold_to_zero_inverse(&image, &mut thresholded, 127)?;
        assert_eq!(thresholded.as_slice(), &[0, 0, 0, 0]);

        Ok(())
    }
}
