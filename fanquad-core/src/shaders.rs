//! GLSL sources for the quad.
//!
//! The bodies are written in the GLSL ES 1.00 / GLSL 1.20 common subset
//! (`attribute`, `gl_FragColor`); the version line is injected per
//! [`GlslVersion`].

use crate::GlslVersion;

const QUAD_VERTEX_GLSL: &str = include_str!("shaders/quad.vert");
const QUAD_FRAGMENT_GLSL: &str = include_str!("shaders/quad.frag");

/// Vertex shader placing `a_position` directly in clip space.
#[must_use]
pub fn quad_vertex_source(glsl_version: GlslVersion) -> String {
    format!("{}{}", glsl_version.vertex_preamble(), QUAD_VERTEX_GLSL)
}

/// Fragment shader filling with solid magenta.
#[must_use]
pub fn quad_fragment_source(glsl_version: GlslVersion) -> String {
    format!("{}{}", glsl_version.fragment_preamble(), QUAD_FRAGMENT_GLSL)
}
