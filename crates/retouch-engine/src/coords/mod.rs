//! Coordinate value types behind the stage record's typed views.
//!
//! Conventions:
//! - `ClipPos` is homogeneous clip space, as written by the vertex stage.
//! - NDC is `[-1, 1]` on both axes with +Y up (wgpu convention).
//! - Framebuffer coordinates are pixels, top-left origin, +Y down.

mod clip;
mod vec2;
mod viewport;

pub use clip::ClipPos;
pub use vec2::Vec2;
pub use viewport::Viewport;
