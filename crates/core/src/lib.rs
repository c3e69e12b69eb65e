//! Blurring of fixed rectangular regions within raster images.
//!
//! The entry point is [`blur::blur_regions`]: load an image, Gaussian-blur a
//! list of caller-specified rectangles, write the result to a new file.
//! Each region is cropped from the pristine source image, so regions never
//! compound on each other; on overlap the later-listed region wins.

pub mod blur;
pub mod error;
pub mod gaussian;
pub mod region;
