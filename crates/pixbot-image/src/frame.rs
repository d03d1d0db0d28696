use crate::image::{Image, ImageSize};

/// A decoded pixel buffer with its channel layout, as exchanged with the
/// transport layer.
///
/// The transform core supports two layouts: single-channel intensity
/// planes and 3-channel images in BGR order (channel 0 is blue).
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// A single-channel 8-bit intensity image.
    Gray(Image<u8, 1>),
    /// A 3-channel 8-bit image, in BGR channel order when it carries
    /// color samples.
    ///
    /// This variant is the generic 3-channel carrier: transforms that
    /// emit a different 3-channel encoding (the HSV conversion) deliver
    /// their planes through it unchanged.
    Bgr(Image<u8, 3>),
}

impl Frame {
    /// Get the size of the underlying image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            Frame::Gray(img) => img.size(),
            Frame::Bgr(img) => img.size(),
        }
    }

    /// Get the width of the underlying image in pixels.
    pub fn width(&self) -> usize {
        self.size().width
    }

    /// Get the height of the underlying image in pixels.
    pub fn height(&self) -> usize {
        self.size().height
    }

    /// Get the number of channels of the underlying image.
    pub fn num_channels(&self) -> usize {
        match self {
            Frame::Gray(_) => 1,
            Frame::Bgr(_) => 3,
        }
    }

    /// Get the underlying single-channel image, if the frame holds one.
    pub fn as_gray(&self) -> Option<&Image<u8, 1>> {
        match self {
            Frame::Gray(img) => Some(img),
            Frame::Bgr(_) => None,
        }
    }

    /// Get the underlying 3-channel BGR image, if the frame holds one.
    pub fn as_bgr(&self) -> Option<&Image<u8, 3>> {
        match self {
            Frame::Bgr(img) => Some(img),
            Frame::Gray(_) => None,
        }
    }
}

impl From<Image<u8, 1>> for Frame {
    fn from(img: Image<u8, 1>) -> Self {
        Frame::Gray(img)
    }
}

impl From<Image<u8, 3>> for Frame {
    fn from(img: Image<u8, 3>) -> Self {
        Frame::Bgr(img)
    }
}
