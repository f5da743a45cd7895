//! Scroll suppression window.

use std::time::{Duration, Instant};

/// Quiescence delay after the last consumed touch event.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(250);

/// Blocks native scrolling for a short window after touch activity.
///
/// Every consumed touch event re-arms the guard, pushing the deadline out to
/// `now + quiescence`. The script uses a restartable `setTimeout`; here the
/// timer is a deadline compared against the caller's clock.
#[derive(Debug, Clone)]
pub struct ScrollGuard {
    quiescence: Duration,
    armed_until: Option<Instant>,
}

impl Default for ScrollGuard {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

impl ScrollGuard {
    pub fn new(quiescence: Duration) -> Self {
        Self {
            quiescence,
            armed_until: None,
        }
    }

    pub fn quiescence(&self) -> Duration {
        self.quiescence
    }

    /// Arm (or extend) suppression starting at `now`.
    pub fn arm(&mut self, now: Instant) {
        self.armed_until = Some(now + self.quiescence);
    }

    /// Whether scroll and wheel events are suppressed at `now`.
    pub fn is_armed(&self, now: Instant) -> bool {
        self.armed_until.is_some_and(|deadline| now < deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_guard_is_disarmed() {
        let guard = ScrollGuard::default();
        assert!(!guard.is_armed(Instant::now()));
    }

    #[test]
    fn clears_after_quiescence() {
        let mut guard = ScrollGuard::new(Duration::from_millis(250));
        let t0 = Instant::now();
        guard.arm(t0);
        assert!(guard.is_armed(t0));
        assert!(guard.is_armed(t0 + Duration::from_millis(249)));
        assert!(!guard.is_armed(t0 + Duration::from_millis(250)));
    }

    #[test]
    fn rearming_extends_the_window() {
        let mut guard = ScrollGuard::new(Duration::from_millis(250));
        let t0 = Instant::now();
        guard.arm(t0);
        guard.arm(t0 + Duration::from_millis(200));
        assert!(guard.is_armed(t0 + Duration::from_millis(400)));
        assert!(!guard.is_armed(t0 + Duration::from_millis(450)));
    }
}
