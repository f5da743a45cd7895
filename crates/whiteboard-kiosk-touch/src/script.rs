//! The injected touch bridge script.
//!
//! The script body lives in `touch_bridge.js` with `__NAME__` placeholders
//! for the values shared with the Rust side.

use std::time::Duration;

use whiteboard_kiosk_types::{PRIMARY_BUTTON, SYNTHETIC_POINTER_ID};

use crate::guard::DEFAULT_QUIESCENCE;

const TOUCH_BRIDGE: &str = include_str!("touch_bridge.js");

/// Values substituted into the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Scroll suppression delay after the last touch event.
    pub quiescence: Duration,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            quiescence: DEFAULT_QUIESCENCE,
        }
    }
}

/// Render the script source for injection.
pub fn render(options: &ScriptOptions) -> String {
    TOUCH_BRIDGE
        .replace("__QUIESCENCE_MS__", &options.quiescence.as_millis().to_string())
        .replace("__POINTER_ID__", &SYNTHETIC_POINTER_ID.to_string())
        .replace("__PRIMARY_BUTTON__", &PRIMARY_BUTTON.to_string())
}
