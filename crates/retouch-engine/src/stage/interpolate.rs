//! CPU model of the rasterizer's work between `vs_main` and `fs_main`.
//!
//! The GPU does this in fixed function. Keeping a reference model lets the
//! stage contract be checked without a device.

use crate::coords::{Vec2, Viewport};

use super::RasterizerData;

/// Screen-space barycentric weights of a fragment inside a triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Barycentric {
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
}

impl Barycentric {
    #[inline]
    pub const fn new(b0: f32, b1: f32, b2: f32) -> Self {
        Self { b0, b1, b2 }
    }

    #[inline]
    pub const fn centroid() -> Self {
        Self::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0)
    }

    /// All weight on corner `i`. `i` must be 0, 1 or 2.
    #[inline]
    pub const fn vertex(i: usize) -> Self {
        debug_assert!(i < 3, "triangle corner index out of range");
        match i {
            0 => Self::new(1.0, 0.0, 0.0),
            1 => Self::new(0.0, 1.0, 0.0),
            _ => Self::new(0.0, 0.0, 1.0),
        }
    }

    #[inline]
    fn to_array(self) -> [f32; 3] {
        [self.b0, self.b1, self.b2]
    }
}

/// Produces the record a fragment stage observes at `bary`.
///
/// `pos` is the fragment position, not a clip position:
/// - `x`, `y`: framebuffer pixels, from the screen-space blend of the
///   corners' NDC mapped through `viewport`.
/// - `z`: blended NDC depth (`z / w`).
/// - `w`: blended `1 / w`.
///
/// `tex_coord` is perspective-correct: each corner is weighted by
/// `b_i / w_i`, then normalized by the blended `1 / w`.
///
/// Returns `None` for an invalid viewport, a corner with an unusable `w`,
/// or weights that cancel out.
pub fn interpolate(
    tri: &[RasterizerData; 3],
    bary: Barycentric,
    viewport: Viewport,
) -> Option<RasterizerData> {
    if !viewport.is_valid() {
        log::trace!("interpolate: invalid viewport {viewport:?}");
        return None;
    }

    let mut ndc = Vec2::zero();
    let mut depth = 0.0f32;
    let mut inv_w = 0.0f32;
    let mut uv_over_w = Vec2::zero();

    for (corner, &bi) in tri.iter().zip(&bary.to_array()) {
        let clip = corner.position();
        let Some(p) = clip.ndc() else {
            log::trace!("interpolate: corner with zero or non-finite w");
            return None;
        };
        let rcp_w = 1.0 / clip.w;

        ndc = ndc + p * bi;
        depth += bi * clip.z * rcp_w;
        inv_w += bi * rcp_w;
        uv_over_w = uv_over_w + corner.tex_coord() * (bi * rcp_w);
    }

    if inv_w == 0.0 || !inv_w.is_finite() {
        log::trace!("interpolate: degenerate 1/w sum {inv_w}");
        return None;
    }

    let frag = viewport.ndc_to_framebuffer(ndc);
    let tex_coord = uv_over_w / inv_w;

    Some(RasterizerData::new([frag.x, frag.y, depth, inv_w], tex_coord.to_array()))
}
