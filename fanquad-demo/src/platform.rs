use std::num::NonZeroU32;

use fanquad_core::Error;
use glow::HasContext;
use glutin::{
    config::{Api, ConfigTemplateBuilder, GlConfig},
    context::{
        ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
    },
    display::{GetGlDisplay, GlDisplay},
    surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface},
};
use glutin_winit::{ApiPreference, DisplayBuilder};
use raw_window_handle::HasWindowHandle;
use tracing::{info, warn};
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use crate::cli::GraphicsApi;

/// What to ask the windowing system for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    /// Logical size in pixels.
    pub size: (u32, u32),
    pub vsync: bool,
    pub api: GraphicsApi,
}

impl GraphicsApi {
    fn config_api(self) -> Api {
        match self {
            GraphicsApi::Gles => Api::GLES2,
            GraphicsApi::Gl => Api::OPENGL,
        }
    }

    fn context_api(self) -> ContextApi {
        match self {
            GraphicsApi::Gles => ContextApi::Gles(Some(Version::new(2, 0))),
            GraphicsApi::Gl => ContextApi::OpenGl(Some(Version::new(2, 1))),
        }
    }
}

/// A shown window with a current GL context on its surface.
///
/// Dropping it releases the surface, then the context, then the window.
pub struct GlWindow {
    pub gl: glow::Context,
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    pub window: Window,
}

impl GlWindow {
    /// Creates the window, the GL context and the window surface, and makes
    /// the context current.
    ///
    /// Vsync is best-effort: failing to set the swap interval only logs a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlatformInit`] naming the step that failed. Anything
    /// created before the failure is released on return.
    pub fn open(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, Error> {
        let (width, height) = config.size;
        let window_attrs = WindowAttributes::default()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(width, height))
            .with_visible(true);

        let config_template = ConfigTemplateBuilder::new().with_api(config.api.config_api());

        let (window, gl_config) = DisplayBuilder::new()
            .with_preference(ApiPreference::PreferEgl)
            .with_window_attributes(Some(window_attrs))
            .build(event_loop, config_template, |configs| {
                // glutin only calls the picker with at least one matching config
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() { config } else { accum }
                    })
                    .expect("config picker called without configs")
            })
            .map_err(|e| Error::platform_init("display creation", e))?;

        let window = window.ok_or_else(|| {
            Error::platform_init("window creation", "display builder returned no window")
        })?;
        info!(width, height, title = %config.title, "window created");

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| Error::platform_init("window handle", e))?
            .as_raw();

        let gl_display = gl_config.display();
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(config.api.context_api())
            .build(Some(raw_window_handle));

        let not_current_context = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .map_err(|e| Error::platform_init("GL context creation", e))?;

        let inner = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(inner.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(inner.height).unwrap_or(NonZeroU32::MIN),
        );

        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .map_err(|e| Error::platform_init("GL surface creation", e))?;

        let gl_context = not_current_context
            .make_current(&gl_surface)
            .map_err(|e| Error::platform_init("making GL context current", e))?;

        let interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        match gl_surface.set_swap_interval(&gl_context, interval) {
            Ok(()) => info!(vsync = config.vsync, "swap interval set"),
            Err(e) => warn!("Unable to set VSync: {e}"),
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        };

        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        info!(api = ?config.api, %version, "GL context created");

        Ok(Self { gl, gl_surface, gl_context, window })
    }

    /// Presents the back buffer. Blocks until the next refresh when vsync is
    /// on.
    pub fn swap_buffers(&self) {
        if let Err(e) = self.gl_surface.swap_buffers(&self.gl_context) {
            warn!("Failed to swap buffers: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gles_requests_es2_context() {
        assert_eq!(GraphicsApi::Gles.config_api(), Api::GLES2);
        assert!(matches!(
            GraphicsApi::Gles.context_api(),
            ContextApi::Gles(Some(v)) if v == Version::new(2, 0)
        ));
    }

    #[test]
    fn test_gl_requests_desktop_context() {
        assert_eq!(GraphicsApi::Gl.config_api(), Api::OPENGL);
        assert!(matches!(
            GraphicsApi::Gl.context_api(),
            ContextApi::OpenGl(Some(v)) if v == Version::new(2, 1)
        ));
    }
}
