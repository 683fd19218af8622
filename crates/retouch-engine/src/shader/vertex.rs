use bytemuck::{Pod, Zeroable};

/// Host vertex consumed by the passthrough `vs_main`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct EditorVertex {
    pub pos: [f32; 2],       // NDC
    pub tex_coord: [f32; 2], // 0..1, top-left origin
}

impl EditorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2  // tex_coord
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<EditorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Full-frame quad. NDC +Y is up while texture +V is down, so the top edge
/// samples `v = 0`.
pub const QUAD_VERTICES: [EditorVertex; 4] = [
    EditorVertex { pos: [-1.0, 1.0], tex_coord: [0.0, 0.0] },
    EditorVertex { pos: [1.0, 1.0], tex_coord: [1.0, 0.0] },
    EditorVertex { pos: [1.0, -1.0], tex_coord: [1.0, 1.0] },
    EditorVertex { pos: [-1.0, -1.0], tex_coord: [0.0, 1.0] },
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ClipPos, Vec2, Viewport};

    #[test]
    fn layout_matches_shader_locations() {
        let layout = EditorVertex::layout();
        assert_eq!(layout.array_stride, 16);
        let locations: Vec<u32> = layout.attributes.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![0, 1]);
        assert_eq!(layout.attributes[1].offset, 8);
    }

    #[test]
    fn quad_tex_coords_follow_framebuffer_pixels() {
        // Texture space and framebuffer space share a top-left origin.
        let vp = Viewport::new(2.0, 2.0);
        for v in QUAD_VERTICES {
            let ndc = ClipPos::from_ndc(Vec2::from(v.pos)).ndc().unwrap();
            let px = vp.ndc_to_framebuffer(ndc);
            assert_eq!(px / 2.0, Vec2::from(v.tex_coord));
        }
    }

    #[test]
    fn quad_indices_are_in_range() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
    }
}
