use bytemuck::{Pod, Zeroable};

use crate::coords::{ClipPos, Vec2};

pub const POSITION_COMPONENTS: usize = 4;
pub const TEX_COORD_COMPONENTS: usize = 2;

pub const POSITION_OFFSET: usize = core::mem::offset_of!(RasterizerData, pos);
pub const TEX_COORD_OFFSET: usize = core::mem::offset_of!(RasterizerData, tex_coord);

/// Per-vertex output of the vertex stage and per-fragment input of the
/// fragment stage.
///
/// Field order is part of the contract: `pos` first (the position output
/// the rasterizer works against), `tex_coord` second.
///
/// Values are stored as given. `tex_coord` outside `[0, 1]` is legal and
/// left to the sampler's address mode; `pos.w == 0` is representable but
/// cannot be perspective-divided.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct RasterizerData {
    pub pos: [f32; POSITION_COMPONENTS], // clip space
    pub tex_coord: [f32; TEX_COORD_COMPONENTS],
}

impl RasterizerData {
    #[inline]
    pub const fn new(
        pos: [f32; POSITION_COMPONENTS],
        tex_coord: [f32; TEX_COORD_COMPONENTS],
    ) -> Self {
        Self { pos, tex_coord }
    }

    #[inline]
    pub const fn from_parts(pos: ClipPos, tex_coord: Vec2) -> Self {
        Self::new(pos.to_array(), tex_coord.to_array())
    }

    #[inline]
    pub fn position(&self) -> ClipPos {
        ClipPos::from(self.pos)
    }

    #[inline]
    pub fn tex_coord(&self) -> Vec2 {
        Vec2::from(self.tex_coord)
    }

    /// Whether the rasterizer can perspective-divide this vertex.
    ///
    /// Informational; nothing in this type rejects a zero `w`.
    #[inline]
    pub fn is_perspective_divisible(&self) -> bool {
        self.position().has_divisible_w()
    }
}
