#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixbot_image as image;

#[doc(inline)]
pub use pixbot_imgproc as imgproc;

#[doc(inline)]
pub use pixbot_dispatch as dispatch;
