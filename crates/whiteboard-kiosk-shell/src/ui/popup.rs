//! Secondary windows for `window.open` and sign-in flows.

use gtk::glib;
use gtk::prelude::*;
use tracing::{debug, info};
use webkit2gtk::{WebView, WebViewExt};

use super::engine;

/// Size of popup windows.
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    pub width: i32,
    pub height: i32,
}

/// Let `view` open popups centered on `parent`.
///
/// Popups may open popups of their own.
pub fn allow_popups(view: &WebView, parent: &gtk::Window, size: PopupSize) {
    let parent = parent.downgrade();
    view.connect_create(move |opener, _action| {
        let parent = parent.upgrade()?;
        let popup = open(opener, &parent, size);
        Some(popup.upcast())
    });
}

/// Create a view related to `opener` inside a new transient window.
///
/// The window stays hidden until the page signals it is ready to show and is
/// closed when the page calls `window.close()`.
fn open(opener: &WebView, parent: &gtk::Window, size: PopupSize) -> WebView {
    let mut builder = glib::Object::builder::<WebView>().property("related-view", opener.clone());
    if let Some(settings) = WebViewExt::settings(opener) {
        builder = builder.property("settings", settings);
    }
    if let Some(manager) = opener.user_content_manager() {
        builder = builder.property("user-content-manager", manager);
    }
    let popup = builder.build();

    let window = gtk::Window::new(gtk::WindowType::Toplevel);
    window.set_transient_for(Some(parent));
    window.set_position(gtk::WindowPosition::CenterOnParent);
    window.set_default_size(size.width, size.height);
    window.add(&popup);

    let shown = window.downgrade();
    popup.connect_ready_to_show(move |_| {
        if let Some(window) = shown.upgrade() {
            window.show_all();
        }
    });
    let closed = window.downgrade();
    popup.connect_close(move |_| {
        if let Some(window) = closed.upgrade() {
            debug!("popup closed by page");
            window.close();
        }
    });

    engine::connect_callbacks(&popup);
    allow_popups(&popup, &window, size);
    info!(width = size.width, height = size.height, "popup opened");
    popup
}
