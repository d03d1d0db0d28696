use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixbot_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl ImageSize {
    /// Return the size with width and height swapped, as produced by a 90 degree rotation.
    pub fn transposed(&self) -> Self {
        ImageSize {
            width: self.height,
            height: self.width,
        }
    }
}

/// Trait for image sample types.
///
/// Send and Sync is required for the row-parallel pixel loops.
pub trait ImageDtype: Copy + Default + Into<f32> + Send + Sync {
    /// Convert a f32 value to the image sample type.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored contiguously in row-major, channel-interleaved
/// order with shape (H, W, C).
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbot_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///      height: 20,
    ///  },
    /// vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * C {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * C,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a constant pixel value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixbot_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///    height: 20,
    /// }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * C];
        Image::new(size, data)
    }

    /// Get a channel of the image as a single-channel image.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image<T, 1>, ImageError>
    where
        T: Copy,
    {
        if channel >= C {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, C));
        }

        let channel_data = self
            .data
            .iter()
            .skip(channel)
            .step_by(C)
            .copied()
            .collect();

        Image::new(self.size, channel_data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// Get the pixel data as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the sample at the given row, column and channel.
    ///
    /// Returns `None` when the index is out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, ch] = index;
        if y >= self.height() || x >= self.width() || ch >= C {
            return None;
        }
        self.data.get((y * self.width() + x) * C + ch)
    }
}
