use crate::error::BlurError;

/// A rectangle to blur: corner pixel coordinates plus blur strength.
///
/// Coordinates are in image space with origin top-left; `left`/`top` are
/// inclusive, `right`/`bottom` exclusive. `radius` is the Gaussian standard
/// deviation, with 0 acting as the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub radius: f32,
}

impl Region {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32, radius: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            radius,
        }
    }

    /// Width in pixels. Only meaningful after [`Region::validate`] passed.
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height in pixels. Only meaningful after [`Region::validate`] passed.
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Checks the rectangle against the image dimensions.
    ///
    /// Rejects degenerate rectangles (left >= right, top >= bottom),
    /// rectangles extending past the image edge, and negative or
    /// non-finite radii.
    pub fn validate(&self, image_width: u32, image_height: u32) -> Result<(), BlurError> {
        let reason = if self.left >= self.right {
            Some("left must be less than right")
        } else if self.top >= self.bottom {
            Some("top must be less than bottom")
        } else if self.right > image_width {
            Some("right edge extends past image width")
        } else if self.bottom > image_height {
            Some("bottom edge extends past image height")
        } else if !(self.radius.is_finite() && self.radius >= 0.0) {
            Some("radius must be finite and non-negative")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(BlurError::InvalidRegion {
                region: *self,
                width: image_width,
                height: image_height,
                reason,
            }),
            None => Ok(()),
        }
    }
}
