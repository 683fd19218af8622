//! WGSL side of the stage interface.
//!
//! `editor_common.wgsl` declares `RasterizerData` for the shading language.
//! Stage bodies pull it in with `#import editor_common`; [`compose`]
//! resolves those lines before the source reaches wgpu.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};

mod compose;
mod error;
mod vertex;

pub use compose::compose;
pub use error::ComposeError;
pub use vertex::{EditorVertex, QUAD_INDICES, QUAD_VERTICES};

/// WGSL declaration of the stage record.
pub const EDITOR_COMMON: &str = include_str!("shaders/editor_common.wgsl");

/// Passthrough stage pair (unresolved; contains `#import`).
pub const PASSTHROUGH: &str = include_str!("shaders/passthrough.wgsl");

pub const VS_ENTRY: &str = "vs_main";
pub const FS_ENTRY: &str = "fs_main";

/// Composes `body` and wraps it for `wgpu::ShaderModuleDescriptor`.
pub fn stage_source(body: &str) -> std::result::Result<wgpu::ShaderSource<'static>, ComposeError> {
    let src = compose(body)?;
    Ok(wgpu::ShaderSource::Wgsl(Cow::Owned(src)))
}

pub fn passthrough_source() -> std::result::Result<wgpu::ShaderSource<'static>, ComposeError> {
    stage_source(PASSTHROUGH)
}

/// Builds a shader module from an unresolved stage body.
///
/// WGSL type errors surface through wgpu's validation, not here.
pub fn create_module(
    device: &wgpu::Device,
    label: &str,
    body: &str,
) -> std::result::Result<wgpu::ShaderModule, ComposeError> {
    let source = stage_source(body)?;
    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source,
    }))
}

/// Reads a WGSL stage file from disk and resolves its imports.
pub fn load_stage(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stage file {}", path.display()))?;
    let composed = compose(&body).with_context(|| format!("failed to compose {}", path.display()))?;
    log::debug!("loaded stage {} ({} bytes)", path.display(), composed.len());
    Ok(composed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_resolves() {
        let Ok(wgpu::ShaderSource::Wgsl(src)) = passthrough_source() else {
            panic!("passthrough did not compose to WGSL");
        };
        assert!(src.contains("struct RasterizerData"));
        assert!(src.contains(VS_ENTRY));
        assert!(src.contains(FS_ENTRY));
    }

    #[test]
    fn load_stage_reports_missing_file() {
        let err = load_stage("/nonexistent/retouch/stage.wgsl").unwrap_err();
        assert!(err.to_string().contains("failed to read stage file"));
    }

    #[test]
    fn load_stage_composes_file() {
        let path = std::env::temp_dir().join(format!("retouch-stage-{}.wgsl", std::process::id()));
        std::fs::write(&path, "#import editor_common\n").unwrap();
        let out = load_stage(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(out.unwrap().contains("@builtin(position) pos: vec4<f32>"));
    }

    #[test]
    fn load_stage_surfaces_compose_error() {
        let path = std::env::temp_dir().join(format!("retouch-bad-{}.wgsl", std::process::id()));
        std::fs::write(&path, "#import missing\n").unwrap();
        let err = load_stage(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        let chain = format!("{err:#}");
        assert!(chain.contains("failed to compose"));
        assert!(chain.contains("unknown module `missing`"));
    }
}
