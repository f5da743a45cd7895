//! Single-contact touch session state machine.

use std::time::{Duration, Instant};

use tracing::{debug, trace};
use whiteboard_kiosk_types::{
    ElementId, Point, PointerType, SyntheticEvent, SyntheticKind, TouchEvent, TouchId, TouchPhase,
};

use crate::guard::ScrollGuard;
use crate::{Disposition, Document, EventSink, Viewport};

const PRESS_SEQUENCE: [SyntheticKind; 4] = [
    SyntheticKind::PointerOver,
    SyntheticKind::PointerEnter,
    SyntheticKind::PointerDown,
    SyntheticKind::MouseDown,
];

const MOVE_SEQUENCE: [SyntheticKind; 2] = [SyntheticKind::PointerMove, SyntheticKind::MouseMove];

const RELEASE_SEQUENCE: [SyntheticKind; 4] = [
    SyntheticKind::PointerUp,
    SyntheticKind::PointerLeave,
    SyntheticKind::PointerOut,
    SyntheticKind::MouseUp,
];

/// The one finger currently being translated.
#[derive(Debug, Clone, Copy)]
struct Session {
    id: TouchId,
    target: ElementId,
    last: Point,
}

/// Translates touch events into mouse-typed pointer and mouse events.
///
/// Tracks at most one contact. Every touch event is consumed whatever the
/// branch, so the page never sees raw touch input.
#[derive(Debug, Clone, Default)]
pub struct TouchTranslator {
    session: Option<Session>,
    guard: ScrollGuard,
}

impl TouchTranslator {
    pub fn new(quiescence: Duration) -> Self {
        Self {
            session: None,
            guard: ScrollGuard::new(quiescence),
        }
    }

    /// Identifier of the active contact, if any.
    pub fn active_touch(&self) -> Option<TouchId> {
        self.session.map(|s| s.id)
    }

    /// Element the active session dispatches to.
    pub fn target(&self) -> Option<ElementId> {
        self.session.map(|s| s.target)
    }

    pub fn is_scroll_suppressed(&self, now: Instant) -> bool {
        self.guard.is_armed(now)
    }

    /// Handle a `touchstart`/`touchmove`/`touchend`/`touchcancel`.
    pub fn on_touch<D, S>(
        &mut self,
        event: &TouchEvent,
        document: &D,
        sink: &mut S,
        now: Instant,
    ) -> Disposition
    where
        D: Document + ?Sized,
        S: EventSink + ?Sized,
    {
        self.guard.arm(now);

        match event.phase {
            TouchPhase::Start => self.begin(event, document, sink),
            TouchPhase::Move => self.track(event, document, sink),
            TouchPhase::End | TouchPhase::Cancel => self.finish(event, document, sink),
        }

        Disposition::Consumed
    }

    /// Handle a native pointer event seen at window capture.
    ///
    /// Touch-typed pointer events duplicate the synthetic stream and are
    /// dropped; everything else (including our own mouse-typed events) passes.
    pub fn on_pointer(&self, pointer_type: PointerType) -> Disposition {
        match pointer_type {
            PointerType::Touch => Disposition::Consumed,
            PointerType::Mouse | PointerType::Pen | PointerType::Unknown => {
                Disposition::PassThrough
            }
        }
    }

    pub fn on_wheel(&self, now: Instant) -> Disposition {
        if self.guard.is_armed(now) {
            Disposition::Consumed
        } else {
            Disposition::PassThrough
        }
    }

    /// Handle a `scroll`; while suppressed the viewport snaps back to origin.
    pub fn on_scroll<V>(&self, viewport: &mut V, now: Instant) -> Disposition
    where
        V: Viewport + ?Sized,
    {
        if self.guard.is_armed(now) {
            viewport.scroll_to_origin();
            Disposition::Consumed
        } else {
            Disposition::PassThrough
        }
    }

    fn begin<D, S>(&mut self, event: &TouchEvent, document: &D, sink: &mut S)
    where
        D: Document + ?Sized,
        S: EventSink + ?Sized,
    {
        if let Some(active) = self.session {
            trace!(active = active.id.0, "ignoring additional contact");
            return;
        }
        let Some(touch) = event.changed.first() else {
            return;
        };

        let target = hit_test(document, touch.point);
        debug!(touch = touch.id.0, element = target.0, "touch session started");
        emit(sink, &PRESS_SEQUENCE, target, touch.point);
        self.session = Some(Session {
            id: touch.id,
            target,
            last: touch.point,
        });
    }

    fn track<D, S>(&mut self, event: &TouchEvent, document: &D, sink: &mut S)
    where
        D: Document + ?Sized,
        S: EventSink + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(touch) = event.find(session.id) else {
            return;
        };

        session.target = live_target(document, session.target, touch.point);
        session.last = touch.point;
        emit(sink, &MOVE_SEQUENCE, session.target, touch.point);
    }

    fn finish<D, S>(&mut self, event: &TouchEvent, document: &D, sink: &mut S)
    where
        D: Document + ?Sized,
        S: EventSink + ?Sized,
    {
        let Some(session) = self.session else {
            return;
        };

        let point = match event.find(session.id) {
            Some(touch) => touch.point,
            // A cancel that no longer lists our contact still ends it.
            None if event.phase == TouchPhase::Cancel => session.last,
            None => return,
        };

        let target = live_target(document, session.target, point);
        emit(sink, &RELEASE_SEQUENCE, target, point);
        debug!(touch = session.id.0, phase = event.phase.dom_name(), "touch session ended");
        self.session = None;
    }
}

fn hit_test<D: Document + ?Sized>(document: &D, point: Point) -> ElementId {
    document
        .element_from_point(point)
        .unwrap_or_else(|| document.body())
}

fn live_target<D: Document + ?Sized>(document: &D, cached: ElementId, point: Point) -> ElementId {
    if document.is_connected(cached) {
        cached
    } else {
        debug!(element = cached.0, "cached target left the document");
        hit_test(document, point)
    }
}

fn emit<S: EventSink + ?Sized>(
    sink: &mut S,
    kinds: &[SyntheticKind],
    target: ElementId,
    point: Point,
) {
    for &kind in kinds {
        sink.dispatch(SyntheticEvent::new(kind, target, point));
    }
}
