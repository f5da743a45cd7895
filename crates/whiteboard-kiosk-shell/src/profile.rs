//! The fixed browser-engine profile applied before first navigation.

use std::path::PathBuf;

use whiteboard_kiosk_touch::script;

use crate::config::{CacheModel, Config};

/// Everything the kiosk sets on the engine.
///
/// Capability flags are not configurable; the remote whiteboard needs all of
/// them.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineProfile {
    pub javascript: bool,
    pub webgl: bool,
    pub webaudio: bool,
    pub media_stream: bool,
    pub accelerated_2d_canvas: bool,
    pub javascript_can_access_clipboard: bool,
    pub smooth_scrolling: bool,
    pub back_forward_gestures: bool,
    pub console_to_stdout: bool,
    /// Hardware-accelerated compositing always on, never on demand.
    pub always_accelerate: bool,
    pub user_agent: String,
    pub cache_model: CacheModel,
    /// Text cookie store; all cookies are accepted.
    pub cookie_store: PathBuf,
    /// Injected into every frame at document start, when touch is enabled.
    pub touch_script: Option<String>,
}

impl EngineProfile {
    pub fn kiosk(config: &Config) -> Self {
        Self {
            javascript: true,
            webgl: true,
            webaudio: true,
            media_stream: true,
            accelerated_2d_canvas: true,
            javascript_can_access_clipboard: true,
            smooth_scrolling: true,
            back_forward_gestures: true,
            console_to_stdout: config.browser.console_to_stdout,
            always_accelerate: true,
            user_agent: config.browser.user_agent.clone(),
            cache_model: config.browser.cache_model,
            cookie_store: config.cookies.resolved_path(),
            touch_script: config
                .touch
                .enabled
                .then(|| script::render(&config.touch.script_options())),
        }
    }
}
