use std::fmt::Debug;

use glow::HasContext;

/// The GL entry points used by the renderer.
///
/// Every method assumes a current context on the calling thread. The
/// implementation for [`glow::Context`] wraps the corresponding unsafe glow
/// call; tests substitute a recording fake.
pub trait GlApi {
    /// Handle to a shader object.
    type Shader: Copy + Debug + PartialEq;
    /// Handle to a program object.
    type Program: Copy + Debug + PartialEq;
    /// Handle to a buffer object.
    type Buffer: Copy + Debug + PartialEq;

    /// The numeric GL name behind a shader handle.
    fn shader_name(shader: Self::Shader) -> u32;
    /// The numeric GL name behind a program handle.
    fn program_name(program: Self::Program) -> u32;

    // shaders

    /// `glCreateShader` for `VERTEX_SHADER` or `FRAGMENT_SHADER`.
    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String>;
    /// Replaces the source of `shader`.
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// Compiles the current source of `shader`.
    fn compile_shader(&self, shader: Self::Shader);
    /// `COMPILE_STATUS` of the last compile.
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// The compile log; may be empty.
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    /// Whether `shader` names a live shader object.
    fn is_shader(&self, shader: Self::Shader) -> bool;
    /// Flags `shader` for deletion.
    fn delete_shader(&self, shader: Self::Shader);

    // programs

    /// `glCreateProgram`.
    fn create_program(&self) -> Result<Self::Program, String>;
    /// Attaches `shader` to `program`.
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Detaches `shader` from `program`.
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Links the attached stages.
    fn link_program(&self, program: Self::Program);
    /// `LINK_STATUS` of the last link.
    fn program_link_status(&self, program: Self::Program) -> bool;
    /// The link log; may be empty.
    fn program_info_log(&self, program: Self::Program) -> String;
    /// Whether `program` names a live program object.
    fn is_program(&self, program: Self::Program) -> bool;
    /// Location of the active attribute `name`, if any.
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    /// Installs `program`, or unbinds with `None`.
    fn use_program(&self, program: Option<Self::Program>);
    /// Flags `program` for deletion.
    fn delete_program(&self, program: Self::Program);

    // buffers

    /// `glGenBuffers` for a single buffer.
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    /// Binds `buffer` to `target`, or unbinds with `None`.
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    /// Uploads `data` to the buffer bound at `target`.
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);
    /// Deletes `buffer`.
    fn delete_buffer(&self, buffer: Self::Buffer);

    // per-frame state and drawing

    /// `MAX_VERTEX_ATTRIBS`.
    fn max_vertex_attribs(&self) -> u32;
    /// Sets the color used by [`GlApi::clear`].
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    /// Clears the buffers selected by `mask`.
    fn clear(&self, mask: u32);
    /// Enables the generic vertex attribute array at `index`.
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Disables the generic vertex attribute array at `index`.
    fn disable_vertex_attrib_array(&self, index: u32);
    /// Describes float data for attribute `index` in the bound `ARRAY_BUFFER`.
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    /// Draws `count` indices from the bound `ELEMENT_ARRAY_BUFFER`.
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);
}

impl GlApi for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;

    fn shader_name(shader: Self::Shader) -> u32 {
        shader.0.get()
    }

    fn program_name(program: Self::Program) -> u32 {
        program.0.get()
    }

    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, shader_type) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) };
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) };
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn is_shader(&self, shader: Self::Shader) -> bool {
        unsafe { HasContext::is_shader(self, shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) };
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) };
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) };
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) };
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn is_program(&self, program: Self::Program) -> bool {
        unsafe { HasContext::is_program(self, program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.get_attrib_location(program, name) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) };
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) };
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, target, buffer) };
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { self.buffer_data_u8_slice(target, data, usage) };
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) };
    }

    fn max_vertex_attribs(&self) -> u32 {
        let max = unsafe { self.get_parameter_i32(glow::MAX_VERTEX_ATTRIBS) };
        max.max(0) as u32
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { HasContext::clear_color(self, r, g, b, a) };
    }

    fn clear(&self, mask: u32) {
        unsafe { HasContext::clear(self, mask) };
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) };
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::disable_vertex_attrib_array(self, index) };
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                index,
                size,
                glow::FLOAT,
                normalized,
                stride,
                offset,
            );
        }
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        unsafe { HasContext::draw_elements(self, mode, count, element_type, offset) };
    }
}
