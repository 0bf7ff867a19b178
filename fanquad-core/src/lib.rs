//! Platform-agnostic half of fanquad: builds a shader program, uploads a
//! static quad and draws it as a triangle fan while a toggle allows.
//!
//! All GL access goes through [`gl::GlApi`], implemented for
//! [`glow::Context`]. The windowing side lives in the `fanquad-demo` crate.

pub mod error;
pub mod frame;
pub mod gl;
pub mod scene;
pub mod shaders;

pub use error::Error;
pub use frame::{DEFAULT_TOGGLE_KEY, FrameLoop, InputEvent, LoopState, RenderToggle};
pub use gl::{
    Drawable, GeometryBuffers, GlApi, GlState, InfoLog, RenderContext, ShaderProgram, ShaderStage,
};
pub use scene::{FrameOutcome, Scene};

/// GL shader language target for version injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlslVersion {
    /// OpenGL ES 2.0: `#version 100`
    #[default]
    Es100,
    /// Desktop OpenGL 2.1: `#version 120`
    Gl120,
}

impl GlslVersion {
    /// `#version` line prepended to vertex sources.
    #[must_use]
    pub fn vertex_preamble(&self) -> &'static str {
        match self {
            Self::Es100 => "#version 100\n",
            Self::Gl120 => "#version 120\n",
        }
    }

    /// `#version` line, plus a default float precision on ES, prepended to
    /// fragment sources.
    #[must_use]
    pub fn fragment_preamble(&self) -> &'static str {
        match self {
            Self::Es100 => "#version 100\nprecision mediump float;\n",
            Self::Gl120 => "#version 120\n",
        }
    }
}
