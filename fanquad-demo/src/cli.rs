use clap::{Parser, ValueEnum};
use color_eyre::{Report, eyre::eyre};
use fanquad_core::{DEFAULT_TOGGLE_KEY, GlslVersion};
use tracing::Level;

use crate::platform::WindowConfig;

/// Largest window edge accepted on the command line.
const MAX_DIMENSION: u32 = 16384;

#[derive(Parser, Debug)]
#[command(
    name = "fanquad",
    about = "Draws a magenta quad with OpenGL ES 2.0",
    long_about = "Opens a window with an OpenGL ES 2.0 context and draws a single quad as a triangle fan. \
                  Press the toggle key to hide or show the quad; close the window to quit."
)]
pub struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 640, value_name = "PX")]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 480, value_name = "PX")]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = "fanquad", value_name = "TEXT")]
    pub title: String,

    /// Character that toggles the quad on and off
    #[arg(long, default_value_t = DEFAULT_TOGGLE_KEY, value_name = "CHAR")]
    pub toggle_key: char,

    /// Present frames without waiting for vertical sync
    #[arg(long)]
    pub no_vsync: bool,

    /// Which flavor of OpenGL context to request
    #[arg(long, value_enum, default_value_t = GraphicsApi::Gles)]
    pub api: GraphicsApi,

    /// Log level; overrides FANQUAD_LOG_LEVEL
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<Level>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Context flavor requested from the platform.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsApi {
    /// OpenGL ES 2.0
    Gles,
    /// Desktop OpenGL 2.1
    Gl,
}

impl GraphicsApi {
    pub fn glsl_version(self) -> GlslVersion {
        match self {
            GraphicsApi::Gles => GlslVersion::Es100,
            GraphicsApi::Gl => GlslVersion::Gl120,
        }
    }
}

impl Cli {
    /// Rejects values that would fail later in less obvious ways.
    pub fn validate(&self) -> Result<(), Report> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_DIMENSION {
                return Err(eyre!("{name} must be between 1 and {MAX_DIMENSION}, got {value}"));
            }
        }

        if self.toggle_key.is_whitespace() || self.toggle_key.is_control() {
            return Err(eyre!(
                "toggle key must be a printable character, got {:?}",
                self.toggle_key
            ));
        }

        Ok(())
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            title: self.title.clone(),
            size: (self.width, self.height),
            vsync: !self.no_vsync,
            api: self.api,
        }
    }
}
