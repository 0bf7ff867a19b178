//! Error type shared by every fallible operation in the crate.

use crate::gl::ShaderStage;

/// Error categories for startup of the renderer.
///
/// All of these are detected while initializing; the frame loop does not
/// check GL error state.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Windowing system, window, or GL context creation failed.
    #[error("Platform initialization failed: {0}")]
    PlatformInit(String),

    /// A shader stage did not compile.
    #[error("Unable to compile {stage} shader: {log}")]
    ShaderCompile {
        /// Stage that failed.
        stage: ShaderStage,
        /// Compiler info log, never empty.
        log: String,
    },

    /// Both stages compiled but the program did not link.
    #[error("Error linking program: {log}")]
    ShaderLink {
        /// Linker info log, never empty.
        log: String,
    },

    /// The linked program has no active attribute with the given name.
    #[error("{name} is not a valid glsl program variable")]
    AttributeBinding {
        /// The attribute that was looked up.
        name: String,
    },

    /// GL object creation or management errors.
    #[error("Resource error: {0}")]
    Resource(String),
}

impl Error {
    /// Platform failure at `step`, e.g. `"window creation"`.
    pub fn platform_init(step: &str, detail: impl std::fmt::Display) -> Self {
        Self::PlatformInit(format!("{step}: {detail}"))
    }

    // Shader errors
    pub(crate) fn shader_creation_failed(stage: ShaderStage, detail: &str) -> Self {
        Self::Resource(format!("Failed to create {stage} shader object: {detail}"))
    }

    pub(crate) fn shader_program_creation_failed(detail: &str) -> Self {
        Self::Resource(format!("Failed to create shader program: {detail}"))
    }

    pub(crate) fn shader_compile_failed(stage: ShaderStage, log: String) -> Self {
        Self::ShaderCompile { stage, log: non_empty_log(log) }
    }

    pub(crate) fn shader_link_failed(log: String) -> Self {
        Self::ShaderLink { log: non_empty_log(log) }
    }

    pub(crate) fn attribute_not_found(name: &str) -> Self {
        Self::AttributeBinding { name: name.to_string() }
    }

    // Resource errors
    pub(crate) fn buffer_creation_failed(buffer_type: &str, detail: &str) -> Self {
        Self::Resource(format!("Failed to create {buffer_type} buffer: {detail}"))
    }
}

/// Some drivers report failure with an empty info log.
fn non_empty_log(log: String) -> String {
    let trimmed = log.trim_end();
    if trimmed.is_empty() {
        "(driver returned no info log)".to_string()
    } else {
        trimmed.to_string()
    }
}
