//! Stage interface between the vertex and fragment stages.
//!
//! `RasterizerData` is the only contract between the two stages. Its WGSL
//! twin lives in `shader/shaders/editor_common.wgsl`; both must keep the
//! same field order.

mod interpolate;
mod record;

pub use interpolate::{interpolate, Barycentric};
pub use record::{
    RasterizerData, POSITION_COMPONENTS, POSITION_OFFSET, TEX_COORD_COMPONENTS, TEX_COORD_OFFSET,
};
