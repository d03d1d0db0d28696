use rayon::prelude::*;

use pixbot_image::Image;

/// Apply a function to each pixel in the image in parallel by rows.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each sample in the image in parallel by rows.
pub fn par_iter_rows_val<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_sample, dst_sample)| {
                    f(src_sample, dst_sample);
                });
        });
}

/// Apply a function to each destination row in parallel, with the row index.
///
/// Used by neighborhood operations that need to gather from arbitrary
/// source coordinates while writing each output row exactly once.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Image<T, C>,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) where
    T: Clone + Send + Sync,
{
    let cols = dst.cols();
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(row, dst_chunk)| {
            f(row, dst_chunk);
        });
}
