//! Info-log retrieval for shader and program objects.
//!
//! These never fail: a handle of the wrong kind (or one that was already
//! deleted) yields [`InfoLog::WrongKind`] instead of a log.

use std::fmt;

use crate::gl::GlApi;

/// Printable outcome of an info-log query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoLog {
    /// The driver produced a non-empty log.
    Text(String),
    /// The object exists but has no log.
    Empty,
    /// The handle does not name a live object of the expected kind.
    WrongKind {
        /// Numeric GL name of the handle.
        name: u32,
        /// What the caller expected `name` to be.
        expected: ObjectKind,
    },
}

/// The two object kinds that carry an info log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// A shader object.
    Shader,
    /// A program object.
    Program,
}

impl InfoLog {
    fn from_log(log: String) -> Self {
        if log.trim().is_empty() { Self::Empty } else { Self::Text(log) }
    }

    /// Returns the log text, or the printable diagnostic when there is none.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(log) => log,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for InfoLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(log) => f.write_str(log.trim_end()),
            Self::Empty => f.write_str("(no info log)"),
            Self::WrongKind { name, expected: ObjectKind::Shader } => {
                write!(f, "Name {name} is not a shader")
            },
            Self::WrongKind { name, expected: ObjectKind::Program } => {
                write!(f, "Name {name} is not a program")
            },
        }
    }
}

/// Fetches the compile log of `shader`.
pub fn describe_shader<G: GlApi>(gl: &G, shader: G::Shader) -> InfoLog {
    if !gl.is_shader(shader) {
        return InfoLog::WrongKind {
            name: G::shader_name(shader),
            expected: ObjectKind::Shader,
        };
    }

    InfoLog::from_log(gl.shader_info_log(shader))
}

/// Fetches the link log of `program`.
pub fn describe_program<G: GlApi>(gl: &G, program: G::Program) -> InfoLog {
    if !gl.is_program(program) {
        return InfoLog::WrongKind {
            name: G::program_name(program),
            expected: ObjectKind::Program,
        };
    }

    InfoLog::from_log(gl.program_info_log(program))
}
