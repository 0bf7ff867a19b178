use crate::gl::GlApi;

/// Manages simple GL state to reduce redundant state changes
#[derive(Debug)]
pub struct GlState {
    // Clear color
    clear_color: [f32; 4],

    // Enabled vertex attribute arrays
    enabled_vertex_attribs: Vec<bool>,
}

impl GlState {
    /// Create a new GlState object with GL defaults
    pub fn new<G: GlApi>(gl: &G) -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 0.0],
            enabled_vertex_attribs: vec![false; gl.max_vertex_attribs() as usize],
        }
    }

    /// Set clear color
    pub fn clear_color<G: GlApi>(&mut self, gl: &G, r: f32, g: f32, b: f32, a: f32) -> &mut Self {
        let new_color = [r, g, b, a];
        if self.clear_color != new_color {
            gl.clear_color(r, g, b, a);
            self.clear_color = new_color;
        }
        self
    }

    /// Enable or disable a vertex attribute array
    pub fn vertex_attrib_array<G: GlApi>(&mut self, gl: &G, index: u32, enable: bool) -> &mut Self {
        let idx = index as usize;
        if idx < self.enabled_vertex_attribs.len() && self.enabled_vertex_attribs[idx] != enable {
            if enable {
                gl.enable_vertex_attrib_array(index);
            } else {
                gl.disable_vertex_attrib_array(index);
            }
            self.enabled_vertex_attribs[idx] = enable;
        }
        self
    }

    /// Reset all tracked vertex attributes to disabled
    pub fn reset<G: GlApi>(&mut self, gl: &G) {
        for (idx, enabled) in self.enabled_vertex_attribs.iter_mut().enumerate() {
            if *enabled {
                gl.disable_vertex_attrib_array(idx as u32);
                *enabled = false;
            }
        }

        // clear color is kept; it is set once at startup
    }
}
