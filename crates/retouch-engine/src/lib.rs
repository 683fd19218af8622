//! Retouch engine crate.
//!
//! Owns the record exchanged between the vertex and fragment stages of the
//! media editor's GPU pipeline, its WGSL declaration, and the stage stubs
//! that link against it.

pub mod coords;
pub mod logging;
pub mod shader;
pub mod stage;
