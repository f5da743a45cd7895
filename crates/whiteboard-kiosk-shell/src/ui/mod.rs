//! GTK and WebKitGTK front end.

mod engine;
mod keys;
mod popup;
mod window;

use tracing::info;

use crate::config::Config;
use crate::error::ShellError;
use crate::profile::EngineProfile;

use self::window::KioskWindow;

/// Initialise GTK, open the kiosk window and run the main loop until the
/// window is closed.
pub fn run(config: &Config, profile: &EngineProfile) -> Result<(), ShellError> {
    gtk::init().map_err(|e| ShellError::EngineUnavailable(e.to_string()))?;

    let window = KioskWindow::build(config, profile);
    window.load(&config.browser.url);
    window.show();

    info!("entering main loop");
    gtk::main();
    info!("main loop exited");
    Ok(())
}
