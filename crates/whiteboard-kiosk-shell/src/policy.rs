//! Navigation policy and page load notifications.
//!
//! The remote site signs in through a chain of redirects and a popup window,
//! so every navigation and every new-window request is approved. Tightening
//! this breaks sign-in.

use std::fmt;

/// Kind of decision the engine asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// The page wants a new top-level window (e.g. `window.open`).
    NewWindow,
    /// Any navigation of an existing view.
    Navigation,
    /// Response handling and anything newer engines add.
    Other,
}

/// What to do with a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Approve the request.
    Use,
    /// Leave it to the engine's default handling.
    Default,
}

impl Verdict {
    /// Whether the signal handler claims the decision.
    pub fn is_handled(self) -> bool {
        self == Self::Use
    }
}

/// Decide a policy request.
pub fn decide(kind: DecisionKind) -> Verdict {
    match kind {
        DecisionKind::NewWindow | DecisionKind::Navigation => Verdict::Use,
        DecisionKind::Other => Verdict::Default,
    }
}

/// Page load progress reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Started,
    Redirected,
    Committed,
    Finished,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::Redirected => write!(f, "redirected"),
            Self::Committed => write!(f, "committed"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_and_popups_are_always_used() {
        assert_eq!(decide(DecisionKind::Navigation), Verdict::Use);
        assert_eq!(decide(DecisionKind::NewWindow), Verdict::Use);
        assert!(decide(DecisionKind::Navigation).is_handled());
    }

    #[test]
    fn other_decisions_fall_through() {
        assert_eq!(decide(DecisionKind::Other), Verdict::Default);
        assert!(!decide(DecisionKind::Other).is_handled());
    }
}
