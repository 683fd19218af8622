//! Prints a WGSL stage with its `#import` lines resolved.
//!
//! Usage: `retouch-studio [stage.wgsl]`. Without a path the built-in
//! passthrough stage is printed. Verbosity follows `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use retouch_engine::logging::{init_logging, LoggingConfig};
use retouch_engine::shader;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args_os().skip(1);
    let path = args.next().map(PathBuf::from);
    anyhow::ensure!(args.next().is_none(), "usage: retouch-studio [stage.wgsl]");

    let source = match &path {
        Some(p) => shader::load_stage(p)?,
        None => {
            log::info!("no stage file given; using built-in passthrough");
            shader::compose(shader::PASSTHROUGH).context("built-in passthrough stage")?
        }
    };

    print!("{source}");
    Ok(())
}
