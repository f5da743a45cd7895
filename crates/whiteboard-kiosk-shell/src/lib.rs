//! Kiosk shell for a remote whiteboard web application.
//!
//! Holds the toolkit-independent pieces (configuration, engine profile,
//! navigation policy, shortcuts, fullscreen state) and, behind the `gtk`
//! feature, the WebKitGTK window that uses them.

pub mod config;
pub mod error;
pub mod policy;
pub mod profile;
pub mod setup;
pub mod shortcuts;
pub mod state;
#[cfg(feature = "gtk")]
mod ui;

pub use config::Config;
pub use error::ShellError;
pub use profile::EngineProfile;
pub use shortcuts::{Keymap, ShellAction};
pub use state::FullscreenState;

use tracing::info;

/// Prepare the cookie store and run the kiosk window until it is closed.
pub fn launch(config: &Config) -> Result<(), ShellError> {
    let profile = EngineProfile::kiosk(config);
    setup::prepare_cookie_store(&profile.cookie_store)?;
    info!(
        url = %config.browser.url,
        touch = profile.touch_script.is_some(),
        "starting kiosk"
    );
    run_engine(config, &profile)
}

#[cfg(feature = "gtk")]
fn run_engine(config: &Config, profile: &EngineProfile) -> Result<(), ShellError> {
    ui::run(config, profile)
}

#[cfg(not(feature = "gtk"))]
fn run_engine(_config: &Config, _profile: &EngineProfile) -> Result<(), ShellError> {
    Err(ShellError::EngineUnavailable(
        "built without the `gtk` feature".to_string(),
    ))
}
