use pixbot_image::{Image, ImageError};

use crate::parallel;

/// Rotate an image 90 degrees clockwise.
///
/// The output dimensions are the input's transposed: width becomes
/// height and vice versa. The mapping is `dst(y, x) = src(H - 1 - x, y)`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Example
///
/// ```
/// use pixbot_image::{Image, ImageSize};
/// use pixbot_imgproc::rotate::rotate90_cw;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1, 2, 3, 4],
/// ).unwrap();
///
/// let rotated = rotate90_cw(&image).unwrap();
/// assert_eq!(rotated.as_slice(), &[3, 1, 4, 2]);
/// ```
pub fn rotate90_cw<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    let rows = src.rows();
    let cols = src.cols();
    let src_data = src.as_slice();

    let mut dst = Image::<T, C>::from_size_val(src.size().transposed(), T::default())?;

    parallel::par_iter_rows_indexed(&mut dst, |y, dst_row| {
        for x in 0..rows {
            let sy = rows - 1 - x;
            let sx = y;
            for ch in 0..C {
                dst_row[x * C + ch] = src_data[(sy * cols + sx) * C + ch];
            }
        }
    });

    Ok(dst)
}

/// Rotate an image 90 degrees counter-clockwise.
///
/// The output dimensions are the input's transposed. The mapping is
/// `dst(y, x) = src(x, W - 1 - y)`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
pub fn rotate90_ccw<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    let rows = src.rows();
    let cols = src.cols();
    let src_data = src.as_slice();

    let mut dst = Image::<T, C>::from_size_val(src.size().transposed(), T::default())?;

    parallel::par_iter_rows_indexed(&mut dst, |y, dst_row| {
        for x in 0..rows {
            let sy = x;
            let sx = cols - 1 - y;
            for ch in 0..C {
                dst_row[x * C + ch] = src_data[(sy * cols + sx) * C + ch];
            }
        }
    });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use pixbot_image::{Image, ImageError, ImageSize};

    #[test]
    fn rotate90_cw_rectangular() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![
                1, 2, 3,
                4, 5, 6,
            ],
        )?;

        let rotated = super::rotate90_cw(&image)?;

        assert_eq!(rotated.size().width, 2);
        assert_eq!(rotated.size().height, 3);
        #[rustfmt::skip]
        assert_eq!(
            rotated.as_slice(),
            &[
                4, 1,
                5, 2,
                6, 3,
            ]
        );

        Ok(())
    }

    #[test]
    fn rotate90_ccw_maps_top_right_to_origin() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )?;

        let rotated = super::rotate90_ccw(&image)?;

        // pixel (0, 1) of the input lands at (0, 0) of the output
        assert_eq!(rotated.get([0, 0, 0]), image.get([0, 1, 0]));
        assert_eq!(rotated.as_slice(), &[2, 4, 1, 3]);

        Ok(())
    }

    #[test]
    fn rotate90_round_trip() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            (0..18).collect(),
        )?;

        let there = super::rotate90_cw(&image)?;
        let back = super::rotate90_ccw(&there)?;

        assert_eq!(back.size(), image.size());
        assert_eq!(back.as_slice(), image.as_slice());

        Ok(())
    }
}
