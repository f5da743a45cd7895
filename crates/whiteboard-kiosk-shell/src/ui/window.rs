//! The main kiosk window.

use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk::{gdk, glib};
use tracing::{debug, info};
use webkit2gtk::{WebView, WebViewExt};

use super::{engine, keys, popup};
use crate::config::Config;
use crate::profile::EngineProfile;
use crate::shortcuts::{Keymap, ShellAction};
use crate::state::{FullscreenRequest, FullscreenState};

/// The top-level window and its web view.
pub struct KioskWindow {
    window: gtk::Window,
    webview: WebView,
}

impl KioskWindow {
    /// Build the window around a configured web view. Nothing is shown yet.
    pub fn build(config: &Config, profile: &EngineProfile) -> Self {
        let webview = WebView::new();
        engine::configure(&webview, profile);
        engine::connect_callbacks(&webview);

        let window = gtk::Window::new(gtk::WindowType::Toplevel);
        window.set_title(&config.window.title);
        window.set_default_size(config.window.width, config.window.height);
        window.set_position(gtk::WindowPosition::Center);
        set_icon(&window, &config.window.icon_name);
        window.add(&webview);

        popup::allow_popups(
            &webview,
            &window,
            popup::PopupSize {
                width: config.window.popup_width,
                height: config.window.popup_height,
            },
        );

        let state = Rc::new(RefCell::new(FullscreenState::new(false)));
        connect_window_state(&window, Rc::clone(&state));
        connect_shortcuts(
            &window,
            &webview,
            Keymap::from_config(&config.shortcuts),
            state,
        );
        window.connect_destroy(|_| gtk::main_quit());

        if config.window.fullscreen {
            window.fullscreen();
        }

        Self { window, webview }
    }

    pub fn load(&self, uri: &str) {
        info!(uri, "loading");
        self.webview.load_uri(uri);
    }

    pub fn show(&self) {
        self.window.show_all();
    }
}

fn set_icon(window: &gtk::Window, name: &str) {
    window.set_icon_name(Some(name));
    let known = gtk::IconTheme::default().is_some_and(|theme| theme.has_icon(name));
    if !known {
        debug!(icon = name, "icon not found in theme");
    }
}

fn connect_window_state(window: &gtk::Window, state: Rc<RefCell<FullscreenState>>) {
    window.connect_window_state_event(move |_, event| {
        let fullscreen = event
            .new_window_state()
            .contains(gdk::WindowState::FULLSCREEN);
        let mut state = state.borrow_mut();
        state.observe(fullscreen);
        debug!(state = %*state, "window state changed");
        glib::Propagation::Proceed
    });
}

fn connect_shortcuts(
    window: &gtk::Window,
    webview: &WebView,
    keymap: Keymap,
    state: Rc<RefCell<FullscreenState>>,
) {
    let webview = webview.downgrade();
    window.connect_key_press_event(move |window, event| {
        let Some(action) = keys::chord(event).and_then(|chord| keymap.resolve(&chord)) else {
            return glib::Propagation::Proceed;
        };
        debug!(action = ?action, "shortcut");
        match action {
            ShellAction::ToggleFullscreen => match state.borrow().toggle_request() {
                FullscreenRequest::Enter => window.fullscreen(),
                FullscreenRequest::Leave => window.unfullscreen(),
            },
            ShellAction::Quit => window.close(),
            ShellAction::Reload => {
                if let Some(webview) = webview.upgrade() {
                    webview.reload();
                }
            }
        }
        glib::Propagation::Stop
    });
}
