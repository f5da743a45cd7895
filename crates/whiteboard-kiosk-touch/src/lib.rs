//! Touch-to-mouse translation for whiteboard-kiosk.
//!
//! The kiosk injects [`script::render`] into every frame of the embedded
//! browser. [`TouchTranslator`] is the same state machine expressed in Rust:
//! it drives trace replay and pins down the behaviour the script implements.
//!
//! The translator talks to the page through three seams. A [`Document`]
//! answers hit-tests, an [`EventSink`] receives synthetic events, and a
//! [`Viewport`] is reset while scroll suppression is armed.

use whiteboard_kiosk_types::{ElementId, Point, SyntheticEvent};

pub mod error;
pub mod guard;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod replay;
pub mod script;
pub mod translator;

pub use error::TouchError;
pub use guard::{ScrollGuard, DEFAULT_QUIESCENCE};
pub use translator::TouchTranslator;

/// Hit-testing and liveness queries against the page's DOM.
pub trait Document {
    /// The topmost element at `point`, like `document.elementFromPoint`.
    fn element_from_point(&self, point: Point) -> Option<ElementId>;

    /// `document.body`, the hit-test fallback.
    fn body(&self) -> ElementId;

    /// Whether `element` is still attached to the document.
    fn is_connected(&self, element: ElementId) -> bool;
}

/// Receives synthetic events in dispatch order.
pub trait EventSink {
    fn dispatch(&mut self, event: SyntheticEvent);
}

impl EventSink for Vec<SyntheticEvent> {
    fn dispatch(&mut self, event: SyntheticEvent) {
        self.push(event);
    }
}

/// The scrollable viewport of the frame.
pub trait Viewport {
    /// Force the scroll position back to (0, 0).
    fn scroll_to_origin(&mut self);
}

/// What the capture-phase listener does with the native event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Default action prevented and propagation stopped.
    Consumed,
    /// Left for the page and the browser to handle.
    PassThrough,
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Consumed => write!(f, "consumed"),
            Self::PassThrough => write!(f, "pass"),
        }
    }
}
