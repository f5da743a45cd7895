//! Window fullscreen state.

/// A fullscreen transition to request from the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Leave,
}

/// Mirrors whether the main window is fullscreen.
///
/// Only window-state notifications change the mirrored flag. A request the
/// window manager ignores leaves it untouched, so the next toggle asks for
/// the same transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenState {
    fullscreen: bool,
}

impl FullscreenState {
    pub fn new(fullscreen: bool) -> Self {
        Self { fullscreen }
    }

    pub fn is_fullscreen(self) -> bool {
        self.fullscreen
    }

    /// The transition that toggles the observed state.
    pub fn toggle_request(self) -> FullscreenRequest {
        if self.fullscreen {
            FullscreenRequest::Leave
        } else {
            FullscreenRequest::Enter
        }
    }

    /// Record the state reported by the window.
    pub fn observe(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
}

impl std::fmt::Display for FullscreenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.fullscreen {
            write!(f, "fullscreen")
        } else {
            write!(f, "windowed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_follows_observed_state() {
        let mut state = FullscreenState::new(true);
        assert_eq!(state.toggle_request(), FullscreenRequest::Leave);
        state.observe(false);
        assert!(!state.is_fullscreen());
        assert_eq!(state.toggle_request(), FullscreenRequest::Enter);
        state.observe(true);
        assert_eq!(state.toggle_request(), FullscreenRequest::Leave);
    }

    #[test]
    fn ignored_request_is_retried() {
        // Window manager refuses to leave fullscreen: no notification arrives.
        let state = FullscreenState::new(true);
        assert_eq!(state.toggle_request(), FullscreenRequest::Leave);
        assert!(state.is_fullscreen());
        assert_eq!(state.toggle_request(), FullscreenRequest::Leave);
    }

    #[test]
    fn display_names_the_mode() {
        let mut state = FullscreenState::new(false);
        assert_eq!(state.to_string(), "windowed");
        state.observe(true);
        assert_eq!(state.to_string(), "fullscreen");
    }
}
