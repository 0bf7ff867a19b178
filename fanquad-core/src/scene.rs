//! The drawn scene and the per-iteration frame step.

use crate::{
    GlslVersion,
    error::Error,
    frame::{FrameLoop, InputEvent, LoopState},
    gl::{
        Drawable, GeometryBuffers, GlApi, GlState, QUAD_INDEX_COUNT, RenderContext,
        ShaderProgram,
    },
    shaders,
};

/// Background shown behind (or instead of) the quad.
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// What a call to [`Scene::render`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Cleared and drew the quad.
    Drawn,
    /// Only cleared; the quad is toggled off.
    Cleared,
}

/// The hard-coded quad: one shader program and its static buffers.
///
/// Both are fully built before the scene exists, so every draw sees a
/// complete program and complete geometry.
#[derive(Debug)]
#[must_use = "call `delete(gl)` before dropping to avoid GPU resource leaks"]
pub struct Scene<G: GlApi> {
    program: ShaderProgram<G>,
    geometry: GeometryBuffers<G>,
}

impl<G: GlApi> Scene<G> {
    /// Builds the shader program, uploads the quad and sets the clear color.
    ///
    /// # Errors
    ///
    /// Propagates shader build errors ([`Error::ShaderCompile`],
    /// [`Error::ShaderLink`], [`Error::AttributeBinding`]) and buffer
    /// creation errors ([`Error::Resource`]).
    pub fn new(gl: &G, state: &mut GlState, glsl_version: GlslVersion) -> Result<Self, Error> {
        let program = ShaderProgram::build(
            gl,
            &shaders::quad_vertex_source(glsl_version),
            &shaders::quad_fragment_source(glsl_version),
        )?;

        let geometry = match GeometryBuffers::quad(gl) {
            Ok(geometry) => geometry,
            Err(e) => {
                program.delete(gl);
                return Err(e);
            },
        };

        let [r, g, b, a] = CLEAR_COLOR;
        state.clear_color(gl, r, g, b, a);

        Ok(Self { program, geometry })
    }

    /// The linked quad program.
    #[must_use]
    pub fn program(&self) -> &ShaderProgram<G> {
        &self.program
    }

    /// Clears the color buffer and, if the toggle is set, draws the quad.
    pub fn render(&self, context: &mut RenderContext<G>, frame: &FrameLoop) -> FrameOutcome {
        context.gl.clear(glow::COLOR_BUFFER_BIT);

        if !frame.render_quad() {
            return FrameOutcome::Cleared;
        }

        self.prepare(context);
        self.draw(context);
        self.cleanup(context);

        FrameOutcome::Drawn
    }

    /// One loop iteration: applies the pending `events`, then renders unless
    /// they stopped the loop.
    ///
    /// Returns `None` once the loop is stopped; nothing is issued to GL in
    /// that case, on this call or any later one.
    pub fn frame<I>(
        &self,
        context: &mut RenderContext<G>,
        frame: &mut FrameLoop,
        events: I,
    ) -> Option<FrameOutcome>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        match frame.drain(events) {
            LoopState::Running => Some(self.render(context, frame)),
            LoopState::Stopped => None,
        }
    }

    /// Disables any attribute arrays still enabled, then deletes the program
    /// and both buffers. Consumes the scene, so this runs at most once.
    pub fn delete(self, context: &mut RenderContext<G>) {
        let gl = context.gl;
        context.state.reset(gl);

        self.program.delete(gl);
        self.geometry.delete(gl);
    }
}

impl<G: GlApi> Drawable<G> for Scene<G> {
    fn prepare(&self, context: &mut RenderContext<G>) {
        let gl = context.gl;
        let location = self.program.position_location();

        self.program.use_program(gl);

        gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.geometry.vertices));
        context.state.vertex_attrib_array(gl, location, true);
        gl.vertex_attrib_pointer_f32(
            location,
            GeometryBuffers::<G>::COMPONENTS,
            false,
            GeometryBuffers::<G>::STRIDE,
            0,
        );

        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.geometry.indices));
    }

    fn draw(&self, context: &mut RenderContext<G>) {
        context
            .gl
            .draw_elements(glow::TRIANGLE_FAN, QUAD_INDEX_COUNT, glow::UNSIGNED_INT, 0);
    }

    fn cleanup(&self, context: &mut RenderContext<G>) {
        let gl = context.gl;
        context
            .state
            .vertex_attrib_array(gl, self.program.position_location(), false);
        gl.use_program(None);
    }
}
