//! The winit side of the frame loop.
//!
//! winit delivers every pending window event first and then calls
//! `about_to_wait`, which is where a frame is rendered and presented. With
//! `ControlFlow::Poll` and vsync on, the swap is the only point where the
//! loop blocks.

use fanquad_core::{
    Error, FrameLoop, FrameOutcome, GlState, InputEvent, LoopState, RenderContext, Scene,
};
use tracing::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use crate::platform::{GlWindow, WindowConfig};

/// Everything created during initialization, owned in one place.
struct Session {
    win: GlWindow,
    gl_state: GlState,
    scene: Scene<glow::Context>,
}

impl Session {
    fn init(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, Error> {
        let win = GlWindow::open(event_loop, config)?;
        let mut gl_state = GlState::new(&win.gl);

        // on error `win` is dropped here, destroying the window and context
        let scene = Scene::new(&win.gl, &mut gl_state, config.api.glsl_version())?;
        info!(
            location = scene.program().position_location(),
            "shader program linked, quad uploaded"
        );

        Ok(Self { win, gl_state, scene })
    }

    /// Applies `events`, then renders and presents unless the loop stopped.
    fn step(&mut self, frame: &mut FrameLoop, events: Vec<InputEvent>) -> Option<FrameOutcome> {
        let mut context = RenderContext::new(&self.win.gl, &mut self.gl_state);
        let outcome = self.scene.frame(&mut context, frame, events)?;
        self.win.swap_buffers();
        Some(outcome)
    }

    /// Deletes GPU objects while the context is still current, then drops
    /// the window and context.
    fn teardown(mut self) {
        self.scene
            .delete(&mut RenderContext::new(&self.win.gl, &mut self.gl_state));
        drop(self.win);
        info!("GL resources released, window destroyed");
    }
}

/// Counters reported after the loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_drawn: u64,
    pub frames_cleared: u64,
}

pub struct App {
    config: WindowConfig,
    frame: FrameLoop,
    /// Events received since the last `about_to_wait`.
    pending: Vec<InputEvent>,
    session: Option<Session>,
    cursor: PhysicalPosition<f64>,
    init_attempted: bool,
    init_error: Option<Error>,
    summary: RunSummary,
}

impl App {
    pub fn new(config: WindowConfig, toggle_key: char) -> Self {
        Self {
            config,
            frame: FrameLoop::new(toggle_key),
            pending: Vec::new(),
            session: None,
            cursor: PhysicalPosition::default(),
            init_attempted: false,
            init_error: None,
            summary: RunSummary::default(),
        }
    }

    fn handle_key(&mut self, ch: char) {
        trace!(key = %ch, x = self.cursor.x, y = self.cursor.y, "text input");
        self.pending.push(InputEvent::Text(ch));
    }

    /// Runs one loop iteration over the pending events. Returns the loop
    /// state afterwards.
    fn step(&mut self) -> LoopState {
        let events = std::mem::take(&mut self.pending);
        let visible = self.frame.render_quad();

        let outcome = match self.session.as_mut() {
            Some(session) => session.step(&mut self.frame, events),
            None => {
                self.frame.drain(events);
                None
            },
        };

        if visible != self.frame.render_quad() {
            debug!(visible = self.frame.render_quad(), "quad toggled");
        }

        match outcome {
            Some(FrameOutcome::Drawn) => self.summary.frames_drawn += 1,
            Some(FrameOutcome::Cleared) => self.summary.frames_cleared += 1,
            None => {},
        }

        self.frame.state()
    }

    /// Releases the session. Safe to call more than once; only the first
    /// call finds something to release.
    fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            session.teardown();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.init_attempted {
            return;
        }
        self.init_attempted = true;

        event_loop.set_control_flow(ControlFlow::Poll);

        match Session::init(event_loop, &self.config) {
            Ok(session) => {
                info!("init all ok");
                self.session = Some(session);
            },
            Err(e) => {
                error!("{e}");
                error!("failed to initialize");
                self.init_error = Some(e);
                event_loop.exit();
            },
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("quit requested");
                self.pending.push(InputEvent::Quit);
            },
            WindowEvent::CursorMoved { position, .. } => self.cursor = position,
            WindowEvent::KeyboardInput {
                event: KeyEvent { state: ElementState::Pressed, text: Some(text), .. },
                ..
            } => {
                if let Some(ch) = text.chars().next() {
                    self.handle_key(ch);
                }
            },
            _ => {},
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.step() == LoopState::Stopped {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

/// Runs the program until the window is closed.
///
/// # Errors
///
/// Returns the initialization error (already logged) if the window,
/// context, or scene could not be created, or a [`Error::PlatformInit`] if
/// the event loop itself fails.
pub fn run(config: WindowConfig, toggle_key: char) -> Result<RunSummary, Error> {
    let event_loop = EventLoop::new().map_err(|e| {
        let e = Error::platform_init("event loop creation", e);
        error!("{e}");
        error!("failed to initialize");
        e
    })?;
    debug!("event loop created");

    let mut app = App::new(config, toggle_key);
    let result = event_loop.run_app(&mut app);

    // normally done in `exiting`; covers an event loop that bailed out early
    app.teardown();

    if let Some(e) = app.init_error.take() {
        return Err(e);
    }

    result.map_err(|e| {
        let e = Error::platform_init("event loop", e);
        error!("{e}");
        e
    })?;

    Ok(app.summary)
}
