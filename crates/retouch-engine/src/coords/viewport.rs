use super::Vec2;

/// Framebuffer size in physical pixels.
///
/// Defines the NDC to pixel mapping the rasterizer applies to `pos` before
/// the fragment stage runs.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps NDC to framebuffer pixels.
    ///
    /// `(-1, 1)` lands on the top-left corner and `(1, -1)` on the
    /// bottom-right corner; +Y flips to point down.
    #[inline]
    pub fn ndc_to_framebuffer(self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_framebuffer_edges() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.ndc_to_framebuffer(Vec2::new(-1.0, 1.0)), Vec2::new(0.0, 0.0));
        assert_eq!(vp.ndc_to_framebuffer(Vec2::new(1.0, -1.0)), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn origin_maps_to_center() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.ndc_to_framebuffer(Vec2::zero()), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(!Viewport::new(10.0, f32::NAN).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
