use pixbot_image::{Frame, Image};
use pixbot_imgproc::{color, enhance, filter, gradient, rotate, spectrum, threshold};

use crate::error::DispatchError;

/// The fixed threshold cutoff applied by [`TransformKind::Threshold`].
pub const THRESHOLD_CUTOFF: u8 = 127;

/// The maximum value assigned by the binary threshold modes.
pub const THRESHOLD_MAX: u8 = 255;

/// The default kernel size for [`TransformKind::Blur`].
pub const DEFAULT_BLUR_KERNEL_SIZE: usize = 3;

/// How many argument tokens a catalog entry consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// The transform takes no argument; a trailing token is ignored.
    Nullary,
    /// The transform takes zero or one argument token.
    Optional,
}

/// The direction of a quarter-turn rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationDirection {
    /// Rotate 90 degrees clockwise.
    Clockwise,
    /// Rotate 90 degrees counter-clockwise.
    CounterClockwise,
}

impl RotationDirection {
    /// Interpret an optional direction token.
    ///
    /// `right` anywhere in the token or a leading `cw` select clockwise;
    /// `left` or a leading `ccw` select counter-clockwise. An absent or
    /// unrecognized token defaults to clockwise.
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return RotationDirection::Clockwise;
        };
        let token = token.to_ascii_lowercase();
        if token.contains("right") || token.starts_with("cw") {
            RotationDirection::Clockwise
        } else if token.contains("left") || token.starts_with("ccw") {
            RotationDirection::CounterClockwise
        } else {
            RotationDirection::Clockwise
        }
    }
}

/// The thresholding mode selected by the argument token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdMode {
    /// At or above the cutoff becomes the maximum value, the rest zero.
    Binary,
    /// At or above the cutoff becomes zero, the rest the maximum value.
    BinaryInverse,
    /// Above the cutoff becomes the cutoff, the rest is unchanged.
    Truncate,
    /// At or above the cutoff is unchanged, the rest becomes zero.
    ToZero,
    /// At or above the cutoff becomes zero, the rest is unchanged.
    ToZeroInverse,
}

impl ThresholdMode {
    /// Interpret an optional mode token by substring match.
    ///
    /// The first matching pattern wins; the inverse patterns are checked
    /// ahead of the plain ones they contain, so `bininv` routes to the
    /// inverse mode rather than its `bin` prefix. An absent or
    /// unrecognized token defaults to [`ThresholdMode::Binary`].
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return ThresholdMode::Binary;
        };
        let token = token.to_ascii_lowercase();
        if token.contains("bininv") {
            ThresholdMode::BinaryInverse
        } else if token.contains("tozeroinv") {
            ThresholdMode::ToZeroInverse
        } else if token.starts_with("tozero") {
            ThresholdMode::ToZero
        } else if token.contains("trunc") {
            ThresholdMode::Truncate
        } else {
            ThresholdMode::Binary
        }
    }
}

/// The closed set of transform operations selectable from the catalog.
///
/// Each variant maps an input [`Frame`] and an optional argument token
/// to a new frame; inputs are never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    /// Convert to grayscale.
    Gray,
    /// Convert to the HSV colorspace, delivered in the 3-channel frame as-is.
    Hsv,
    /// Extract the blue channel.
    Blue,
    /// Extract the green channel.
    Green,
    /// Extract the red channel.
    Red,
    /// Extract the hue channel of the HSV conversion.
    Hue,
    /// Extract the saturation channel of the HSV conversion.
    Sat,
    /// Extract the value channel of the HSV conversion.
    Val,
    /// Box blur with an optional kernel size argument.
    Blur,
    /// Repeated sharpening with an optional level argument.
    Sharpen,
    /// Min-max contrast normalization.
    Normalize,
    /// Sobel gradient magnitude.
    Sobel,
    /// Histogram equalization of the grayscale plane.
    HistEq,
    /// Centered logarithmic DFT magnitude spectrum.
    Dft,
    /// Quarter-turn rotation with an optional direction argument.
    Rotate,
    /// Fixed-cutoff thresholding with an optional mode argument.
    Threshold,
}

impl TransformKind {
    /// How many argument tokens the transform consumes.
    pub fn arity(&self) -> Arity {
        match self {
            TransformKind::Blur
            | TransformKind::Sharpen
            | TransformKind::Rotate
            | TransformKind::Threshold => Arity::Optional,
            _ => Arity::Nullary,
        }
    }

    /// Apply the transform to a frame, producing a new frame.
    ///
    /// The argument token, when present, is interpreted per transform;
    /// an unparsable token substitutes the transform's documented
    /// default rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedChannelLayout`] when a
    /// channel-specific transform receives a single-channel frame.
    pub fn apply(&self, frame: &Frame, arg: Option<&str>) -> Result<Frame, DispatchError> {
        match self {
            TransformKind::Gray => Ok(Frame::Gray(to_gray(frame)?)),
            TransformKind::Hsv => {
                let bgr = require_bgr(frame)?;
                let mut hsv = Image::<u8, 3>::from_size_val(bgr.size(), 0)?;
                color::hsv_from_bgr(bgr, &mut hsv)?;
                Ok(Frame::Bgr(hsv))
            }
            TransformKind::Blue => extract_bgr_channel(frame, 0),
            TransformKind::Green => extract_bgr_channel(frame, 1),
            TransformKind::Red => extract_bgr_channel(frame, 2),
            TransformKind::Hue => extract_hsv_channel(frame, 0),
            TransformKind::Sat => extract_hsv_channel(frame, 1),
            TransformKind::Val => extract_hsv_channel(frame, 2),
            TransformKind::Blur => {
                let kernel_size = arg
                    .and_then(|s| s.parse::<usize>().ok())
                    .filter(|&k| k >= 1)
                    .unwrap_or(DEFAULT_BLUR_KERNEL_SIZE);
                match frame {
                    Frame::Gray(img) => {
                        let mut dst = Image::<u8, 1>::from_size_val(img.size(), 0)?;
                        filter::box_blur(img, &mut dst, kernel_size)?;
                        Ok(Frame::Gray(dst))
                    }
                    Frame::Bgr(img) => {
                        let mut dst = Image::<u8, 3>::from_size_val(img.size(), 0)?;
                        filter::box_blur(img, &mut dst, kernel_size)?;
                        Ok(Frame::Bgr(dst))
                    }
                }
            }
            TransformKind::Sharpen => {
                let level = arg.and_then(|s| s.parse::<i64>().ok()).unwrap_or(1);
                match frame {
                    Frame::Gray(img) => {
                        let mut dst = Image::<u8, 1>::from_size_val(img.size(), 0)?;
                        filter::sharpen(img, &mut dst, level)?;
                        Ok(Frame::Gray(dst))
                    }
                    Frame::Bgr(img) => {
                        let mut dst = Image::<u8, 3>::from_size_val(img.size(), 0)?;
                        filter::sharpen(img, &mut dst, level)?;
                        Ok(Frame::Bgr(dst))
                    }
                }
            }
            TransformKind::Normalize => match frame {
                Frame::Gray(img) => {
                    let mut dst = Image::<u8, 1>::from_size_val(img.size(), 0)?;
                    enhance::normalize_min_max(img, &mut dst)?;
                    Ok(Frame::Gray(dst))
                }
                Frame::Bgr(img) => {
                    let mut dst = Image::<u8, 3>::from_size_val(img.size(), 0)?;
                    enhance::normalize_min_max(img, &mut dst)?;
                    Ok(Frame::Bgr(dst))
                }
            },
            TransformKind::Sobel => {
                let gray = to_gray(frame)?;
                let mut dst = Image::<u8, 1>::from_size_val(gray.size(), 0)?;
                gradient::sobel_magnitude(&gray, &mut dst)?;
                Ok(Frame::Gray(dst))
            }
            TransformKind::HistEq => {
                let gray = to_gray(frame)?;
                let mut dst = Image::<u8, 1>::from_size_val(gray.size(), 0)?;
                enhance::equalize_histogram(&gray, &mut dst)?;
                Ok(Frame::Gray(dst))
            }
            TransformKind::Dft => {
                let gray = to_gray(frame)?;
                Ok(Frame::Gray(spectrum::dft_magnitude(&gray)?))
            }
            TransformKind::Rotate => {
                let direction = RotationDirection::from_token(arg);
                match (frame, direction) {
                    (Frame::Gray(img), RotationDirection::Clockwise) => {
                        Ok(Frame::Gray(rotate::rotate90_cw(img)?))
                    }
                    (Frame::Gray(img), RotationDirection::CounterClockwise) => {
                        Ok(Frame::Gray(rotate::rotate90_ccw(img)?))
                    }
                    (Frame::Bgr(img), RotationDirection::Clockwise) => {
                        Ok(Frame::Bgr(rotate::rotate90_cw(img)?))
                    }
                    (Frame::Bgr(img), RotationDirection::CounterClockwise) => {
                        Ok(Frame::Bgr(rotate::rotate90_ccw(img)?))
                    }
                }
            }
            TransformKind::Threshold => {
                let mode = ThresholdMode::from_token(arg);
                let gray = to_gray(frame)?;
                let mut dst = Image::<u8, 1>::from_size_val(gray.size(), 0)?;
                match mode {
                    ThresholdMode::Binary => threshold::threshold_binary(
                        &gray,
                        &mut dst,
                        THRESHOLD_CUTOFF,
                        THRESHOLD_MAX,
                    )?,
                    ThresholdMode::BinaryInverse => threshold::threshold_binary_inverse(
                        &gray,
                        &mut dst,
                        THRESHOLD_CUTOFF,
                        THRESHOLD_MAX,
                    )?,
                    ThresholdMode::Truncate => {
                        threshold::threshold_truncate(&gray, &mut dst, THRESHOLD_CUTOFF)?
                    }
                    ThresholdMode::ToZero => {
                        threshold::threshold_to_zero(&gray, &mut dst, THRESHOLD_CUTOFF)?
                    }
                    ThresholdMode::ToZeroInverse => {
                        threshold::threshold_to_zero_inverse(&gray, &mut dst, THRESHOLD_CUTOFF)?
                    }
                }
                Ok(Frame::Gray(dst))
            }
        }
    }
}

/// Transforms starting with a grayscale conversion accept an already
/// gray frame as converted.
fn to_gray(frame: &Frame) -> Result<Image<u8, 1>, DispatchError> {
    match frame {
        Frame::Gray(img) => Ok(img.clone()),
        Frame::Bgr(img) => {
            let mut gray = Image::<u8, 1>::from_size_val(img.size(), 0)?;
            color::gray_from_bgr(img, &mut gray)?;
            Ok(gray)
        }
    }
}

fn require_bgr(frame: &Frame) -> Result<&Image<u8, 3>, DispatchError> {
    frame
        .as_bgr()
        .ok_or(DispatchError::UnsupportedChannelLayout(frame.num_channels()))
}

fn extract_bgr_channel(frame: &Frame, channel: usize) -> Result<Frame, DispatchError> {
    let bgr = require_bgr(frame)?;
    Ok(Frame::Gray(bgr.channel(channel)?))
}

fn extract_hsv_channel(frame: &Frame, channel: usize) -> Result<Frame, DispatchError> {
    let bgr = require_bgr(frame)?;
    let mut hsv = Image::<u8, 3>::from_size_val(bgr.size(), 0)?;
    color::hsv_from_bgr(bgr, &mut hsv)?;
    Ok(Frame::Gray(hsv.channel(channel)?))
}

#[cfg(test)]
mod tests {
    use super::{RotationDirection, ThresholdMode, TransformKind};
    use crate::error::DispatchError;
    use pixbot_image::{Frame, Image, ImageSize};

    fn bgr_frame(width: usize, height: usize, data: Vec<u8>) -> Frame {
        Frame::Bgr(Image::new(ImageSize { width, height }, data).unwrap())
    }

    #[test]
    fn rotation_direction_tokens() {
        assert_eq!(
            RotationDirection::from_token(None),
            RotationDirection::Clockwise
        );
        assert_eq!(
            RotationDirection::from_token(Some("RIGHT")),
            RotationDirection::Clockwise
        );
        assert_eq!(
            RotationDirection::from_token(Some("cw")),
            RotationDirection::Clockwise
        );
        assert_eq!(
            RotationDirection::from_token(Some("left")),
            RotationDirection::CounterClockwise
        );
        assert_eq!(
            RotationDirection::from_token(Some("CCW")),
            RotationDirection::CounterClockwise
        );
        assert_eq!(
            RotationDirection::from_token(Some("sideways")),
            RotationDirection::Clockwise
        );
    }

    #[test]
    fn threshold_mode_tokens() {
        assert_eq!(ThresholdMode::from_token(None), ThresholdMode::Binary);
        assert_eq!(ThresholdMode::from_token(Some("bin")), ThresholdMode::Binary);
        assert_eq!(
            ThresholdMode::from_token(Some("bininv")),
            ThresholdMode::BinaryInverse
        );
        assert_eq!(
            ThresholdMode::from_token(Some("TRUNC")),
            ThresholdMode::Truncate
        );
        assert_eq!(
            ThresholdMode::from_token(Some("tozero")),
            ThresholdMode::ToZero
        );
        assert_eq!(
            ThresholdMode::from_token(Some("tozeroinv")),
            ThresholdMode::ToZeroInverse
        );
        assert_eq!(
            ThresholdMode::from_token(Some("whatever")),
            ThresholdMode::Binary
        );
    }

    #[test]
    fn gray_preserves_dimensions() -> Result<(), DispatchError> {
        let frame = bgr_frame(3, 2, vec![100; 3 * 2 * 3]);

        let out = TransformKind::Gray.apply(&frame, None)?;

        assert_eq!(out.num_channels(), 1);
        assert_eq!(out.size(), frame.size());

        Ok(())
    }

    #[test]
    fn hsv_rides_the_three_channel_carrier() -> Result<(), DispatchError> {
        // pure red in BGR order
        let frame = bgr_frame(1, 1, vec![0, 0, 255]);

        let out = TransformKind::Hsv.apply(&frame, None)?;
        let plane = out.as_bgr().expect("3-channel output");

        // the carrier holds HSV samples, not BGR ones
        assert_eq!(plane.as_slice(), &[0, 255, 255]);

        Ok(())
    }

    #[test]
    fn channel_extraction_requires_bgr() {
        let frame = Frame::Gray(
            Image::from_size_val(
                ImageSize {
                    width: 2,
                    height: 2,
                },
                0,
            )
            .unwrap(),
        );

        let res = TransformKind::Red.apply(&frame, None);
        assert!(matches!(
            res,
            Err(DispatchError::UnsupportedChannelLayout(1))
        ));
    }

    #[test]
    fn blue_channel_extraction() -> Result<(), DispatchError> {
        let frame = bgr_frame(1, 2, vec![10, 20, 30, 40, 50, 60]);

        let out = TransformKind::Blue.apply(&frame, None)?;
        let gray = out.as_gray().expect("single-channel output");

        assert_eq!(gray.as_slice(), &[10, 40]);

        Ok(())
    }

    #[test]
    fn sharpen_level_one_is_identity() -> Result<(), DispatchError> {
        let frame = bgr_frame(2, 2, (0..12).collect());

        let out = TransformKind::Sharpen.apply(&frame, Some("1"))?;

        assert_eq!(out, frame);

        Ok(())
    }

    #[test]
    fn blur_invalid_argument_uses_default() -> Result<(), DispatchError> {
        let frame = bgr_frame(4, 4, vec![128; 4 * 4 * 3]);

        let with_default = TransformKind::Blur.apply(&frame, None)?;
        let with_garbage = TransformKind::Blur.apply(&frame, Some("huge"))?;
        let with_zero = TransformKind::Blur.apply(&frame, Some("0"))?;

        assert_eq!(with_default, with_garbage);
        assert_eq!(with_default, with_zero);

        Ok(())
    }

    #[test]
    fn threshold_binary_emits_two_levels() -> Result<(), DispatchError> {
        let frame = bgr_frame(2, 2, (0..12).map(|v| v * 20).collect());

        let out = TransformKind::Threshold.apply(&frame, Some("binary"))?;
        let gray = out.as_gray().expect("single-channel output");

        assert!(gray.as_slice().iter().all(|&v| v == 0 || v == 255));

        Ok(())
    }

    #[test]
    fn rotate_defaults_to_clockwise() -> Result<(), DispatchError> {
        let frame = bgr_frame(2, 1, vec![1, 2, 3, 4, 5, 6]);

        let out = TransformKind::Rotate.apply(&frame, None)?;

        assert_eq!(out.width(), 1);
        assert_eq!(out.height(), 2);

        Ok(())
    }
}
