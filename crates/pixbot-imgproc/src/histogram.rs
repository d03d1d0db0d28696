use pixbot_image::{Image, ImageError};
use rayon::prelude::*;

/// Compute the pixel intensity histogram of an image.
///
/// NOTE: this is limited to 8-bit 1-channel images.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
/// * `hist` - The output histogram, accumulated in place.
/// * `num_bins` - The number of bins to use for the histogram.
///
/// # Errors
///
/// Returns an error if the number of bins is invalid.
///
/// # Example
///
/// ```
/// use pixbot_image::{Image, ImageSize};
/// use pixbot_imgproc::histogram::compute_histogram;
///
/// let image = Image::<u8, 1>::new(
///   ImageSize {
///     width: 3,
///     height: 3,
///   },
///   vec![0, 2, 4, 128, 130, 132, 254, 255, 255],
/// ).unwrap();
///
/// let mut histogram = vec![0; 3];
///
/// compute_histogram(&image, &mut histogram, 3).unwrap();
/// assert_eq!(histogram, vec![3, 3, 3]);
/// ```
pub fn compute_histogram(
    src: &Image<u8, 1>,
    hist: &mut [usize],
    num_bins: usize,
) -> Result<(), ImageError> {
    if num_bins == 0 || num_bins > 256 {
        return Err(ImageError::InvalidHistogramBins(num_bins));
    }

    if hist.len() != num_bins {
        return Err(ImageError::InvalidHistogramBins(num_bins));
    }

    let mut bin_lut = [0usize; 256];
    for (i, bin) in bin_lut.iter_mut().enumerate() {
        *bin = (i * num_bins) >> 8;
    }

    let counts = src
        .as_slice()
        .par_chunks(4096)
        .fold(
            || vec![0usize; num_bins],
            |mut local, chunk| {
                for &px in chunk {
                    local[bin_lut[px as usize]] += 1;
                }
                local
            },
        )
        .reduce(
            || vec![0usize; num_bins],
            |mut a, b| {
                for (i, val) in b.iter().enumerate() {
                    a[i] += val;
                }
                a
            },
        );

    for (h, c) in hist.iter_mut().zip(counts.iter()) {
        *h += c;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pixbot_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_compute_histogram() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![0, 2, 4, 128, 130, 132, 254, 255, 255],
        )?;

        let mut histogram = vec![0; 3];

        super::compute_histogram(&image, &mut histogram, 3)?;
        assert_eq!(histogram, vec![3, 3, 3]);

        Ok(())
    }

    #[test]
    fn test_compute_histogram_invalid_bins() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;

        let mut histogram = vec![0; 257];
        assert_eq!(
            super::compute_histogram(&image, &mut histogram, 257),
            Err(ImageError::InvalidHistogramBins(257))
        );

        Ok(())
    }
}
