use pixbot_image::ImageError;

/// An error type for the dispatch module.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    /// A transform requiring image data was resolved but no frame was supplied.
    #[error("A transform was resolved but no frame was supplied")]
    MissingImage,

    /// A channel-specific transform received an unsupported layout.
    #[error("The transform does not support a {0}-channel layout")]
    UnsupportedChannelLayout(usize),

    /// A catalog pattern failed to compile.
    #[error("Invalid catalog pattern")]
    Pattern(#[from] regex::Error),

    /// An image operation failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}
