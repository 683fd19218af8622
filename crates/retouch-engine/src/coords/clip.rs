use super::Vec2;

/// Homogeneous clip-space position as emitted by a vertex stage.
///
/// Any value is representable. The rasterizer needs `w != 0` to divide;
/// see [`ClipPos::ndc`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl ClipPos {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Lifts an NDC point onto the `z = 0`, `w = 1` plane.
    #[inline]
    pub const fn from_ndc(p: Vec2) -> Self {
        Self::new(p.x, p.y, 0.0, 1.0)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// `w` is usable as a perspective divisor.
    #[inline]
    pub fn has_divisible_w(self) -> bool {
        self.w != 0.0 && self.w.is_finite()
    }

    /// Perspective divide to normalized device coordinates (x/y only).
    ///
    /// Returns `None` when `w` is zero or not finite.
    #[inline]
    pub fn ndc(self) -> Option<Vec2> {
        if !self.has_divisible_w() {
            return None;
        }
        Some(Vec2::new(self.x / self.w, self.y / self.w))
    }
}

impl From<[f32; 4]> for ClipPos {
    #[inline]
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}
