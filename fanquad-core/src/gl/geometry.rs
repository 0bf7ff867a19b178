use crate::{
    error::Error,
    gl::{GlApi, buffer::create_buffer_with},
};

/// Number of indices drawn per frame.
pub const QUAD_INDEX_COUNT: i32 = 4;

/// Unit quad centered at the origin, as interleaved `x, y` pairs.
#[rustfmt::skip]
pub const QUAD_VERTICES: [f32; 8] = [
    //  x     y
    -0.5, -0.5, // bottom-left
     0.5, -0.5, // bottom-right
     0.5,  0.5, // top-right
    -0.5,  0.5, // top-left
];

/// Triangle-fan order over [`QUAD_VERTICES`]; every triangle shares vertex 0.
pub const QUAD_INDICES: [u32; QUAD_INDEX_COUNT as usize] = [0, 1, 2, 3];

/// Vertex and index buffers for the quad, uploaded once as static data.
#[derive(Debug)]
#[must_use = "call `delete(gl)` before dropping to avoid GPU resource leaks"]
pub struct GeometryBuffers<G: GlApi> {
    pub(crate) vertices: G::Buffer,
    pub(crate) indices: G::Buffer,
}

impl<G: GlApi> GeometryBuffers<G> {
    /// Floats per vertex position.
    pub const COMPONENTS: i32 = 2;
    /// Byte distance between consecutive positions (tightly packed).
    pub const STRIDE: i32 = Self::COMPONENTS * size_of::<f32>() as i32;

    /// Uploads [`QUAD_VERTICES`] and [`QUAD_INDICES`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resource`] if a buffer object cannot be created.
    pub fn quad(gl: &G) -> Result<Self, Error> {
        Self::upload(gl, &QUAD_VERTICES, &QUAD_INDICES)
    }

    /// Creates the vertex (`ARRAY_BUFFER`) and index (`ELEMENT_ARRAY_BUFFER`)
    /// buffers. Both are declared `STATIC_DRAW`: written once, drawn many
    /// times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resource`] if a buffer object cannot be created.
    pub fn upload(
        gl: &G,
        vertices: &[f32; 8],
        indices: &[u32; QUAD_INDEX_COUNT as usize],
    ) -> Result<Self, Error> {
        let vertex_buffer =
            create_buffer_with(gl, "vertex", glow::ARRAY_BUFFER, vertices, glow::STATIC_DRAW)?;

        let index_buffer = match create_buffer_with(
            gl,
            "index",
            glow::ELEMENT_ARRAY_BUFFER,
            indices,
            glow::STATIC_DRAW,
        ) {
            Ok(buffer) => buffer,
            Err(e) => {
                gl.delete_buffer(vertex_buffer);
                return Err(e);
            },
        };

        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

        Ok(Self { vertices: vertex_buffer, indices: index_buffer })
    }

    /// Deletes both buffers, releasing the GPU resources.
    pub fn delete(self, gl: &G) {
        gl.delete_buffer(self.vertices);
        gl.delete_buffer(self.indices);
    }
}
