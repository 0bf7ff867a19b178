//! Recording stand-in for a GL context.
//!
//! Compilation fails for sources containing an `#error` directive, linking
//! fails when either stage lacks `main`, and attribute lookup succeeds for
//! names declared with `attribute` in the vertex stage.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::gl::GlApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct FakeHandle(pub u32);

/// State-changing calls, in issue order. Queries are not recorded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(FakeHandle, u32),
    CompileShader(FakeHandle),
    DeleteShader(FakeHandle),
    CreateProgram(FakeHandle),
    AttachShader(FakeHandle, FakeHandle),
    DetachShader(FakeHandle, FakeHandle),
    LinkProgram(FakeHandle),
    UseProgram(Option<FakeHandle>),
    DeleteProgram(FakeHandle),
    CreateBuffer(FakeHandle),
    BindBuffer(u32, Option<FakeHandle>),
    BufferData { target: u32, len: usize, usage: u32 },
    DeleteBuffer(FakeHandle),
    ClearColor(f32, f32, f32, f32),
    Clear(u32),
    EnableVertexAttribArray(u32),
    DisableVertexAttribArray(u32),
    VertexAttribPointer { index: u32, size: i32, normalized: bool, stride: i32, offset: i32 },
    DrawElements { mode: u32, count: i32, element_type: u32, offset: i32 },
}

#[derive(Debug, Default)]
struct FakeShader {
    source: String,
    compiled: bool,
    log: String,
}

#[derive(Debug, Default)]
struct FakeProgram {
    attached: Vec<FakeHandle>,
    linked: bool,
    log: String,
    attributes: Vec<String>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeGl {
    next_handle: Cell<u32>,
    calls: RefCell<Vec<Call>>,
    shaders: RefCell<HashMap<FakeHandle, FakeShader>>,
    programs: RefCell<HashMap<FakeHandle, FakeProgram>>,
    buffers: RefCell<Vec<FakeHandle>>,
    buffers_before_failure: Cell<Option<usize>>,
}

impl FakeGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn live_shader_count(&self) -> usize {
        self.shaders.borrow().len()
    }

    pub(crate) fn live_program_count(&self) -> usize {
        self.programs.borrow().len()
    }

    pub(crate) fn live_buffer_count(&self) -> usize {
        self.buffers.borrow().len()
    }

    /// Lets `count` more buffers be created, then fails every request.
    pub(crate) fn fail_buffer_creation_after(&self, count: usize) {
        self.buffers_before_failure.set(Some(count));
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self) -> FakeHandle {
        let id = self.next_handle.get() + 1;
        self.next_handle.set(id);
        FakeHandle(id)
    }
}

fn declared_attributes(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("attribute "))
        .filter_map(|line| line.trim_end_matches(';').split_whitespace().last())
        .map(str::to_string)
        .collect()
}

impl GlApi for FakeGl {
    type Shader = FakeHandle;
    type Program = FakeHandle;
    type Buffer = FakeHandle;

    fn shader_name(shader: Self::Shader) -> u32 {
        shader.0
    }

    fn program_name(program: Self::Program) -> u32 {
        program.0
    }

    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String> {
        let handle = self.allocate();
        self.shaders.borrow_mut().insert(handle, FakeShader::default());
        self.record(Call::CreateShader(handle, shader_type));
        Ok(handle)
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        if let Some(s) = self.shaders.borrow_mut().get_mut(&shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        if let Some(s) = self.shaders.borrow_mut().get_mut(&shader) {
            match s.source.lines().position(|line| line.trim_start().starts_with("#error")) {
                Some(line) => {
                    s.compiled = false;
                    s.log = format!("ERROR: 0:{}: '#error' : user-defined error\n", line + 1);
                },
                None => {
                    s.compiled = true;
                    s.log.clear();
                },
            }
        }
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        self.shaders.borrow().get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        self.shaders
            .borrow()
            .get(&shader)
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    fn is_shader(&self, shader: Self::Shader) -> bool {
        self.shaders.borrow().contains_key(&shader)
    }

    fn delete_shader(&self, shader: Self::Shader) {
        self.shaders.borrow_mut().remove(&shader);
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        let handle = self.allocate();
        self.programs.borrow_mut().insert(handle, FakeProgram::default());
        self.record(Call::CreateProgram(handle));
        Ok(handle)
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        if let Some(p) = self.programs.borrow_mut().get_mut(&program) {
            p.attached.push(shader);
        }
        self.record(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        if let Some(p) = self.programs.borrow_mut().get_mut(&program) {
            p.attached.retain(|&s| s != shader);
        }
        self.record(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: Self::Program) {
        let shaders = self.shaders.borrow();
        if let Some(p) = self.programs.borrow_mut().get_mut(&program) {
            let missing_main = p.attached.iter().find(|handle| {
                shaders.get(*handle).is_none_or(|s| !s.source.contains("void main"))
            }).copied();

            match missing_main {
                Some(handle) => {
                    p.linked = false;
                    p.attributes.clear();
                    p.log = format!("error: shader {handle:?} lacks `main'\n");
                },
                None => {
                    p.linked = true;
                    p.log.clear();
                    p.attributes = p
                        .attached
                        .iter()
                        .filter_map(|handle| shaders.get(handle))
                        .flat_map(|s| declared_attributes(&s.source))
                        .collect();
                },
            }
        }
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        self.programs.borrow().get(&program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        self.programs
            .borrow()
            .get(&program)
            .map(|p| p.log.clone())
            .unwrap_or_default()
    }

    fn is_program(&self, program: Self::Program) -> bool {
        self.programs.borrow().contains_key(&program)
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        let programs = self.programs.borrow();
        let p = programs.get(&program).filter(|p| p.linked)?;
        p.attributes
            .iter()
            .position(|attr| attr == name)
            .map(|idx| idx as u32)
    }

    fn use_program(&self, program: Option<Self::Program>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: Self::Program) {
        self.programs.borrow_mut().remove(&program);
        self.record(Call::DeleteProgram(program));
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        if let Some(remaining) = self.buffers_before_failure.get() {
            if remaining == 0 {
                return Err("out of memory".to_string());
            }
            self.buffers_before_failure.set(Some(remaining - 1));
        }

        let handle = self.allocate();
        self.buffers.borrow_mut().push(handle);
        self.record(Call::CreateBuffer(handle));
        Ok(handle)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData { target, len: data.len(), usage });
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        self.buffers.borrow_mut().retain(|&b| b != buffer);
        self.record(Call::DeleteBuffer(buffer));
    }

    fn max_vertex_attribs(&self) -> u32 {
        // GLES 2.0 guarantees at least 8
        8
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor(r, g, b, a));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::DisableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::VertexAttribPointer { index, size, normalized, stride, offset });
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(Call::DrawElements { mode, count, element_type, offset });
    }
}
