use pixbot_image::{Image, ImageDtype, ImageError};

use crate::parallel;

/// Define the BGR weights for the grayscale conversion.
const BW: f32 = 0.114;
const GW: f32 = 0.587;
const RW: f32 = 0.299;

/// Convert a BGR image to grayscale using the formula:
///
/// Y = 0.114 * B + 0.587 * G + 0.299 * R
///
/// The result is rounded to the nearest integer and clamped to [0, 255].
///
/// # Arguments
///
/// * `src` - The input BGR image.
/// * `dst` - The output grayscale image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use pixbot_image::{Image, ImageSize};
/// use pixbot_imgproc::color::gray_from_bgr;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// gray_from_bgr(&image, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_bgr(src: &Image<u8, 3>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let b = src_pixel[0] as f32;
        let g = src_pixel[1] as f32;
        let r = src_pixel[2] as f32;
        dst_pixel[0] = u8::from_f32(BW * b + GW * g + RW * r);
    });

    Ok(())
}

/// Convert a BGR image to an HSV image.
///
/// Uses the conventional 8-bit HSV encoding:
///
/// * H: the hue channel in half-degree units, range [0, 179].
/// * S: the saturation channel in the range [0, 255].
/// * V: the value channel in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
pub fn hsv_from_bgr(src: &Image<u8, 3>, dst: &mut Image<u8, 3>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let b = src_pixel[0] as f32;
        let g = src_pixel[1] as f32;
        let r = src_pixel[2] as f32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (g - b) / delta
        } else if max == g {
            120.0 + 60.0 * (b - r) / delta
        } else {
            240.0 + 60.0 * (r - g) / delta
        };

        // hue is periodic, fold into [0, 360) and store in half-degrees
        let h = if h < 0.0 { h + 360.0 } else { h };
        let h = (h / 2.0).round() % 180.0;

        let s = if max == 0.0 { 0.0 } else { delta / max * 255.0 };

        dst_pixel[0] = h as u8;
        dst_pixel[1] = u8::from_f32(s);
        dst_pixel[2] = u8::from_f32(max);
    });

    Ok(())
}
