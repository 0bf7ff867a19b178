//! GL abstraction and the objects built on it: shader programs, static
//! geometry, cached state and drawables.

mod api;
mod buffer;
pub(crate) mod context;
pub mod diagnostics;
pub(crate) mod geometry;
mod program;
pub(crate) mod renderer;
#[cfg(test)]
pub(crate) mod testing;

pub use api::GlApi;
pub use context::GlState;
pub use diagnostics::{InfoLog, ObjectKind};
pub use geometry::{GeometryBuffers, QUAD_INDEX_COUNT, QUAD_INDICES, QUAD_VERTICES};
pub use program::{POSITION_ATTRIB, ShaderProgram, ShaderStage};
pub use renderer::{Drawable, RenderContext};
