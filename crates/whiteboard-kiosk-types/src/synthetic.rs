//! Synthetic pointer and mouse events emitted in place of touch input.

use serde::{Deserialize, Serialize};

use crate::touch::Point;

/// Opaque handle for a DOM element, assigned by the document model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

/// `pointerId` carried by every synthetic pointer event.
pub const SYNTHETIC_POINTER_ID: i32 = 1;

/// Primary-button mask for the `buttons` field.
pub const PRIMARY_BUTTON: u16 = 1;

/// The kind of synthetic event, in DOM terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntheticKind {
    PointerOver,
    PointerEnter,
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    PointerOut,
    MouseDown,
    MouseMove,
    MouseUp,
}

impl SyntheticKind {
    /// The DOM event type name.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::PointerOver => "pointerover",
            Self::PointerEnter => "pointerenter",
            Self::PointerDown => "pointerdown",
            Self::PointerMove => "pointermove",
            Self::PointerUp => "pointerup",
            Self::PointerLeave => "pointerleave",
            Self::PointerOut => "pointerout",
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseUp => "mouseup",
        }
    }

    /// The `buttons` mask the event carries while a contact is down.
    #[must_use]
    pub fn buttons(self) -> u16 {
        match self {
            Self::PointerDown | Self::PointerMove | Self::MouseDown | Self::MouseMove => {
                PRIMARY_BUTTON
            }
            Self::PointerOver
            | Self::PointerEnter
            | Self::PointerUp
            | Self::PointerLeave
            | Self::PointerOut
            | Self::MouseUp => 0,
        }
    }
}

impl std::fmt::Display for SyntheticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dom_name())
    }
}

/// A synthetic event ready for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticEvent {
    pub kind: SyntheticKind,
    pub target: ElementId,
    pub point: Point,
    pub buttons: u16,
}

impl SyntheticEvent {
    #[must_use]
    pub fn new(kind: SyntheticKind, target: ElementId, point: Point) -> Self {
        Self {
            kind,
            target,
            point,
            buttons: kind.buttons(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_phase_carries_primary_button() {
        assert_eq!(SyntheticKind::PointerDown.buttons(), PRIMARY_BUTTON);
        assert_eq!(SyntheticKind::MouseMove.buttons(), PRIMARY_BUTTON);
        assert_eq!(SyntheticKind::PointerEnter.buttons(), 0);
        assert_eq!(SyntheticKind::PointerUp.buttons(), 0);
        assert_eq!(SyntheticKind::MouseUp.buttons(), 0);
    }

    #[test]
    fn new_event_derives_buttons_from_kind() {
        let ev = SyntheticEvent::new(
            SyntheticKind::PointerMove,
            ElementId(2),
            Point::new(1.0, 1.0),
        );
        assert_eq!(ev.buttons, PRIMARY_BUTTON);
        assert_eq!(ev.kind.to_string(), "pointermove");
    }
}
