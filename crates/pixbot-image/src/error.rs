/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image sizes of two buffers do not match.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a sample value cannot be cast to the target type.
    #[error("Failed to cast the pixel value")]
    CastError,

    /// Error when the kernel size is not valid for a filter.
    #[error("Invalid kernel size ({0})")]
    InvalidKernelSize(usize),

    /// Error when the number of histogram bins is not valid.
    #[error("Invalid number of histogram bins ({0})")]
    InvalidHistogramBins(usize),
}
