use rustfft::{num_complex::Complex, FftPlanner};

use pixbot_image::{Image, ImageDtype, ImageError, ImageSize};

/// Compute the optimal transform size for a discrete Fourier transform.
///
/// Returns the smallest integer greater than or equal to `n` that can
/// be expressed as `2^a * 3^b * 5^c`, found by trial division. Sizes of
/// this form keep the transform cost bounded.
///
/// # Example
///
/// ```
/// use pixbot_imgproc::spectrum::optimal_dft_size;
///
/// assert_eq!(optimal_dft_size(7), 8);
/// assert_eq!(optimal_dft_size(9), 9);
/// assert_eq!(optimal_dft_size(101), 108);
/// ```
pub fn optimal_dft_size(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }

    let mut m = n;
    loop {
        let mut k = m;
        for f in [2, 3, 5] {
            while k % f == 0 {
                k /= f;
            }
        }
        if k == 1 {
            return m;
        }
        m += 1;
    }
}

/// Compute the centered logarithmic magnitude spectrum of a grayscale image.
///
/// The input is zero-padded on the bottom and right to the optimal
/// transform dimensions, run through a 2-D discrete Fourier transform,
/// and reduced to `log(1 + magnitude)`. The plane is then cropped to
/// even row and column counts, quadrant-swapped so the zero-frequency
/// component sits at the image center, scaled by 20 for display
/// contrast, and rounded and clamped to 8-bit samples.
///
/// The output dimensions are the even-cropped optimal transform
/// dimensions, which may differ from the input dimensions.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
pub fn dft_magnitude(src: &Image<u8, 1>) -> Result<Image<u8, 1>, ImageError> {
    let rows = src.rows();
    let cols = src.cols();
    if rows == 0 || cols == 0 {
        return Ok(src.clone());
    }

    let opt_h = optimal_dft_size(rows);
    let opt_w = optimal_dft_size(cols);

    // zero-pad the real input plane to the optimal dimensions
    let mut data = vec![Complex::new(0.0f32, 0.0); opt_h * opt_w];
    let src_data = src.as_slice();
    for y in 0..rows {
        for x in 0..cols {
            data[y * opt_w + x] = Complex::new(src_data[y * cols + x] as f32, 0.0);
        }
    }

    // row-column decomposition of the 2-D transform
    let mut planner = FftPlanner::<f32>::new();
    let fft_rows = planner.plan_fft_forward(opt_w);
    fft_rows.process(&mut data);

    let fft_cols = planner.plan_fft_forward(opt_h);
    let mut column = vec![Complex::new(0.0f32, 0.0); opt_h];
    for x in 0..opt_w {
        for y in 0..opt_h {
            column[y] = data[y * opt_w + x];
        }
        fft_cols.process(&mut column);
        for y in 0..opt_h {
            data[y * opt_w + x] = column[y];
        }
    }

    let magnitude = data
        .iter()
        .map(|c| (1.0 + c.norm()).ln())
        .collect::<Vec<f32>>();

    // crop to even dimensions, then swap quadrants to center the
    // zero-frequency component
    let out_h = opt_h & !1;
    let out_w = opt_w & !1;
    let half_h = out_h / 2;
    let half_w = out_w / 2;

    let mut out = vec![0u8; out_h * out_w];
    for y in 0..out_h {
        let sy = (y + half_h) % out_h;
        for x in 0..out_w {
            let sx = (x + half_w) % out_w;
            out[y * out_w + x] = u8::from_f32(20.0 * magnitude[sy * opt_w + sx]);
        }
    }

    Image::new(
        ImageSize {
            width: out_w,
            height: out_h,
        },
        out,
    )
}

#[cfg(test)]
mod tests {
    use pixbot_image::{Image, ImageError, ImageSize};

    #[test]
    fn optimal_dft_size_search() {
        assert_eq!(super::optimal_dft_size(0), 1);
        assert_eq!(super::optimal_dft_size(1), 1);
        assert_eq!(super::optimal_dft_size(7), 8);
        assert_eq!(super::optimal_dft_size(9), 9);
        assert_eq!(super::optimal_dft_size(10), 10);
        assert_eq!(super::optimal_dft_size(11), 12);
        assert_eq!(super::optimal_dft_size(13), 15);
        assert_eq!(super::optimal_dft_size(101), 108);
    }

    #[test]
    fn dft_magnitude_uniform_peak() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 8,
                height: 8,
            },
            255,
        )?;

        let spectrum = super::dft_magnitude(&image)?;

        assert_eq!(spectrum.size().width, 8);
        assert_eq!(spectrum.size().height, 8);

        // a constant image carries all its energy in the zero-frequency
        // component, which the quadrant swap moves to the center
        for y in 0..8 {
            for x in 0..8 {
                let val = *spectrum.get([y, x, 0]).ok_or(ImageError::CastError)?;
                if (y, x) == (4, 4) {
                    assert!(val > 0);
                } else {
                    assert_eq!(val, 0);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn dft_magnitude_crops_odd_dimensions() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 5,
                height: 5,
            },
            128,
        )?;

        let spectrum = super::dft_magnitude(&image)?;

        // 5 is already an optimal transform size, the odd trailing row
        // and column are dropped
        assert_eq!(spectrum.size().width, 4);
        assert_eq!(spectrum.size().height, 4);

        Ok(())
    }
}
