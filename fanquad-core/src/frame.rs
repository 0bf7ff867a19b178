//! Frame-loop state: running/stopped and the quad visibility toggle.
//!
//! The platform layer translates its events into [`InputEvent`]s and feeds
//! them here; drawing reads [`FrameLoop::render_quad`].

/// Default key flipping [`RenderToggle`].
pub const DEFAULT_TOGGLE_KEY: char = 'q';

/// Whether the loop keeps producing frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Frames are rendered and presented.
    Running,
    /// Terminal; teardown follows.
    Stopped,
}

/// Platform events that carry meaning for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed.
    Quit,
    /// First character of a text-input event.
    Text(char),
}

/// Whether the quad is drawn. Starts enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderToggle(bool);

impl RenderToggle {
    /// `true` while the quad is visible.
    #[must_use]
    pub fn is_set(self) -> bool {
        self.0
    }

    /// Shows a hidden quad or hides a visible one.
    pub fn flip(&mut self) {
        self.0 = !self.0;
    }
}

impl Default for RenderToggle {
    fn default() -> Self {
        Self(true)
    }
}

/// Loop state plus the quad toggle, driven by [`InputEvent`]s.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    toggle: RenderToggle,
    toggle_key: char,
}

impl FrameLoop {
    /// A running loop with the quad visible, toggled by `toggle_key`.
    #[must_use]
    pub fn new(toggle_key: char) -> Self {
        Self {
            state: LoopState::Running,
            toggle: RenderToggle::default(),
            toggle_key,
        }
    }

    /// Applies one event. Once stopped, events are consumed and ignored.
    pub fn handle_event(&mut self, event: InputEvent) {
        if self.state == LoopState::Stopped {
            return;
        }

        match event {
            InputEvent::Quit => self.state = LoopState::Stopped,
            InputEvent::Text(ch) if ch == self.toggle_key => self.toggle.flip(),
            InputEvent::Text(_) => {},
        }
    }

    /// Applies a whole batch of pending events and returns the resulting
    /// state.
    pub fn drain<I>(&mut self, events: I) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        events.into_iter().for_each(|event| self.handle_event(event));
        self.state
    }

    /// Current loop state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// `true` until a [`InputEvent::Quit`] has been handled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Current quad toggle.
    #[must_use]
    pub fn toggle(&self) -> RenderToggle {
        self.toggle
    }

    /// `true` when this frame should draw the quad.
    #[must_use]
    pub fn render_quad(&self) -> bool {
        self.toggle.is_set()
    }

    /// Character that flips the toggle.
    #[must_use]
    pub fn toggle_key(&self) -> char {
        self.toggle_key
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TOGGLE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_running_with_quad_visible() {
        let frame = FrameLoop::default();
        assert_eq!(frame.state(), LoopState::Running);
        assert!(frame.render_quad());
        assert_eq!(frame.toggle_key(), 'q');
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut frame = FrameLoop::default();

        frame.handle_event(InputEvent::Text('q'));
        assert!(!frame.render_quad());

        frame.handle_event(InputEvent::Text('q'));
        assert!(frame.render_quad());
    }

    #[test]
    fn test_other_characters_are_ignored() {
        let mut frame = FrameLoop::default();
        let state = frame.drain("wasdQ 1".chars().map(InputEvent::Text));

        assert_eq!(state, LoopState::Running);
        assert!(frame.render_quad());
    }

    #[test]
    fn test_custom_toggle_key() {
        let mut frame = FrameLoop::new('t');
        frame.drain([InputEvent::Text('q'), InputEvent::Text('t')]);
        assert!(!frame.render_quad());
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut frame = FrameLoop::default();
        let state = frame.drain([
            InputEvent::Text('q'),
            InputEvent::Quit,
            // still drained, but no longer acted upon
            InputEvent::Text('q'),
        ]);

        assert_eq!(state, LoopState::Stopped);
        assert!(!frame.is_running());
        assert!(!frame.render_quad());

        frame.handle_event(InputEvent::Text('q'));
        assert_eq!(frame.state(), LoopState::Stopped);
        assert!(!frame.toggle().is_set());
    }
}
