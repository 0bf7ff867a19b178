use std::fmt;

use crate::{
    error::Error,
    gl::{GlApi, diagnostics},
};

/// Name of the per-vertex position input declared by the vertex shader.
pub const POSITION_ATTRIB: &str = "a_position";

/// A linked shader program together with its resolved position attribute.
///
/// Built once at startup and never mutated. Call [`ShaderProgram::delete`]
/// while the GL context is still current.
#[derive(Debug)]
#[must_use = "call `delete(gl)` before dropping to avoid GPU resource leaks"]
pub struct ShaderProgram<G: GlApi> {
    pub(crate) program: G::Program,
    position_location: u32,
}

impl<G: GlApi> ShaderProgram<G> {
    /// Compiles both stages, links them and resolves [`POSITION_ATTRIB`].
    ///
    /// The vertex stage is compiled first; if it fails the fragment stage is
    /// never compiled and nothing is linked. Shader objects are released on
    /// every path, so only the returned program needs cleanup.
    ///
    /// # Errors
    ///
    /// - [`Error::ShaderCompile`] with the offending stage and its info log
    /// - [`Error::ShaderLink`] with the program info log
    /// - [`Error::AttributeBinding`] if the linked program has no active
    ///   `a_position` input
    /// - [`Error::Resource`] if the driver refuses to create an object
    pub fn build(gl: &G, vertex_source: &str, fragment_source: &str) -> Result<Self, Error> {
        let vertex_shader = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment_shader = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(e) => {
                gl.delete_shader(vertex_shader);
                return Err(e);
            },
        };

        let program = link_program(gl, vertex_shader, fragment_shader);

        // shaders are no longer needed once the program is linked (or failed to)
        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);

        let program = program?;
        let Some(position_location) = gl.attrib_location(program, POSITION_ATTRIB) else {
            gl.delete_program(program);
            return Err(Error::attribute_not_found(POSITION_ATTRIB));
        };

        Ok(Self { program, position_location })
    }

    /// Attribute slot of [`POSITION_ATTRIB`].
    #[must_use]
    pub fn position_location(&self) -> u32 {
        self.position_location
    }

    /// Use the shader program.
    pub fn use_program(&self, gl: &G) {
        gl.use_program(Some(self.program));
    }

    /// Deletes the program, releasing the GPU resource.
    pub fn delete(self, gl: &G) {
        gl.delete_program(self.program);
    }
}

fn compile_shader<G: GlApi>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, Error> {
    let shader = gl
        .create_shader(stage.into())
        .map_err(|e| Error::shader_creation_failed(stage, &e))?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        let log = diagnostics::describe_shader(gl, shader).into_text();
        gl.delete_shader(shader);
        return Err(Error::shader_compile_failed(stage, log));
    }

    Ok(shader)
}

/// Links the two stages. On success the shaders are detached again so that
/// deleting them frees them immediately.
fn link_program<G: GlApi>(
    gl: &G,
    vertex_shader: G::Shader,
    fragment_shader: G::Shader,
) -> Result<G::Program, Error> {
    let program = gl
        .create_program()
        .map_err(|e| Error::shader_program_creation_failed(&e))?;

    gl.attach_shader(program, vertex_shader);
    gl.attach_shader(program, fragment_shader);
    gl.link_program(program);

    if !gl.program_link_status(program) {
        let log = diagnostics::describe_program(gl, program).into_text();
        gl.delete_program(program);
        return Err(Error::shader_link_failed(log));
    }

    gl.detach_shader(program, vertex_shader);
    gl.detach_shader(program, fragment_shader);

    Ok(program)
}

/// Enum representing the type of shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// `VERTEX_SHADER`
    Vertex,
    /// `FRAGMENT_SHADER`
    Fragment,
}

impl From<ShaderStage> for u32 {
    fn from(val: ShaderStage) -> Self {
        use ShaderStage::*;

        match val {
            Vertex => glow::VERTEX_SHADER,
            Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}
