//! Touch input types.
//!
//! A platform-agnostic view of the DOM touch and pointer events the
//! translator consumes.

use serde::{Deserialize, Serialize};

/// Opaque identifier the browser assigns to one finger contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchId(pub i64);

/// Viewport (client) coordinates in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One entry of a touch event's changed-touches list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    pub id: TouchId,
    #[serde(flatten)]
    pub point: Point,
}

impl Touch {
    #[must_use]
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self {
            id: TouchId(id),
            point: Point::new(x, y),
        }
    }
}

/// Which touch event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

impl TouchPhase {
    /// The DOM event type name.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Start => "touchstart",
            Self::Move => "touchmove",
            Self::End => "touchend",
            Self::Cancel => "touchcancel",
        }
    }
}

/// A touch event as delivered to the capture-phase listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// The `changedTouches` list.
    #[serde(default)]
    pub changed: Vec<Touch>,
}

impl TouchEvent {
    #[must_use]
    pub fn new(phase: TouchPhase, changed: Vec<Touch>) -> Self {
        Self { phase, changed }
    }

    /// Find the changed touch with the given identifier.
    #[must_use]
    pub fn find(&self, id: TouchId) -> Option<&Touch> {
        self.changed.iter().find(|t| t.id == id)
    }
}

/// The `pointerType` carried by unified pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    Mouse,
    Pen,
    Touch,
    /// Empty or vendor-specific pointer type, reported as `unknown`.
    #[serde(other)]
    Unknown,
}

impl PointerType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Pen => "pen",
            Self::Touch => "touch",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_event_find_by_id() {
        let event = TouchEvent::new(
            TouchPhase::Move,
            vec![Touch::new(3, 1.0, 2.0), Touch::new(7, 5.0, 6.0)],
        );
        assert_eq!(event.find(TouchId(7)).map(|t| t.point), Some(Point::new(5.0, 6.0)));
        assert!(event.find(TouchId(9)).is_none());
    }

    #[test]
    fn touch_deserializes_flat_coordinates() {
        let touch: Touch = serde_json::from_str(r#"{"id": 4, "x": 10.5, "y": 20}"#).unwrap();
        assert_eq!(touch, Touch::new(4, 10.5, 20.0));
    }

    #[test]
    fn unrecognized_pointer_type_is_unknown() {
        let kind: PointerType = serde_json::from_str(r#""stylus-x""#).unwrap();
        assert_eq!(kind, PointerType::Unknown);
        assert_eq!(kind.as_str(), "unknown");
        let kind: PointerType = serde_json::from_str(r#""touch""#).unwrap();
        assert_eq!(kind, PointerType::Touch);
    }
}
