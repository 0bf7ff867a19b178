use crate::gl::{GlApi, context::GlState};

/// Rendering context that provides access to GL state.
pub struct RenderContext<'a, G: GlApi> {
    /// The current GL context.
    pub gl: &'a G,
    /// Cached GL state, shared across frames.
    pub state: &'a mut GlState,
}

impl<'a, G: GlApi> RenderContext<'a, G> {
    /// Borrows `gl` and `state` for one frame.
    pub fn new(gl: &'a G, state: &'a mut GlState) -> Self {
        Self { gl, state }
    }
}

/// Trait for objects that can be rendered.
pub trait Drawable<G: GlApi> {
    /// Prepares the object for rendering.
    ///
    /// This method should set up all necessary OpenGL state, bind shaders
    /// and vertex data required for rendering.
    fn prepare(&self, context: &mut RenderContext<G>);

    /// Performs the actual rendering.
    ///
    /// This method should issue draw calls to render the object. All necessary
    /// state should already be set up from the `prepare()` call.
    fn draw(&self, context: &mut RenderContext<G>);

    /// Cleans up after rendering.
    ///
    /// This method should restore OpenGL state and unbind any resources
    /// that were bound during `prepare()`.
    fn cleanup(&self, context: &mut RenderContext<G>);
}
