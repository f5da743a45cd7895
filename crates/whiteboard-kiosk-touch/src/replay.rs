//! Offline replay of recorded touch traces.
//!
//! A trace is JSON lines, one input per line, timestamped in milliseconds
//! from the start of the recording:
//!
//! ```text
//! {"type": "touch", "at_ms": 0, "phase": "start", "touches": [{"id": 1, "x": 10, "y": 20}]}
//! {"type": "pointer", "at_ms": 1, "pointer_type": "touch"}
//! {"type": "wheel", "at_ms": 120}
//! {"type": "scroll", "at_ms": 900}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Replay runs against a
//! flat page where every point hits a single surface element.

use std::io::BufRead;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use whiteboard_kiosk_types::{
    ElementId, Point, PointerType, SyntheticEvent, Touch, TouchEvent, TouchPhase,
};

use crate::error::TouchError;
use crate::translator::TouchTranslator;
use crate::{Document, Viewport};

/// The element every replayed hit-test lands on.
pub const SURFACE: ElementId = ElementId(1);

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TraceRecord {
    Touch {
        at_ms: u64,
        phase: TouchPhase,
        #[serde(default)]
        touches: Vec<Touch>,
    },
    Pointer {
        at_ms: u64,
        pointer_type: PointerType,
    },
    Wheel {
        at_ms: u64,
    },
    Scroll {
        at_ms: u64,
    },
}

impl TraceRecord {
    pub fn at_ms(&self) -> u64 {
        match self {
            Self::Touch { at_ms, .. }
            | Self::Pointer { at_ms, .. }
            | Self::Wheel { at_ms }
            | Self::Scroll { at_ms } => *at_ms,
        }
    }

    /// Short label naming the DOM event.
    pub fn label(&self) -> String {
        match self {
            Self::Touch { phase, .. } => phase.dom_name().to_string(),
            Self::Pointer { pointer_type, .. } => format!("pointer[{}]", pointer_type.as_str()),
            Self::Wheel { .. } => "wheel".to_string(),
            Self::Scroll { .. } => "scroll".to_string(),
        }
    }
}

/// The outcome of replaying one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    pub at_ms: u64,
    pub input: String,
    pub disposition: String,
    pub emitted: Vec<SyntheticEvent>,
    /// Whether the viewport was forced back to the origin.
    pub viewport_reset: bool,
}

/// Parse a JSON-lines trace.
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<TraceRecord>, TouchError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record = serde_json::from_str(trimmed).map_err(|source| TouchError::Trace {
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Flat page used for replay: one full-viewport surface over the body.
#[derive(Debug, Default)]
struct FlatPage {
    resets: usize,
}

impl Document for FlatPage {
    fn element_from_point(&self, _point: Point) -> Option<ElementId> {
        Some(SURFACE)
    }

    fn body(&self) -> ElementId {
        ElementId(0)
    }

    fn is_connected(&self, _element: ElementId) -> bool {
        true
    }
}

impl Viewport for FlatPage {
    fn scroll_to_origin(&mut self) {
        self.resets += 1;
    }
}

/// Run `records` through a fresh translator.
pub fn replay(records: &[TraceRecord], quiescence: Duration) -> Vec<ReplayStep> {
    let epoch = Instant::now();
    let mut translator = TouchTranslator::new(quiescence);
    let mut page = FlatPage::default();

    records
        .iter()
        .map(|record| {
            let now = epoch + Duration::from_millis(record.at_ms());
            let resets_before = page.resets;
            let mut emitted: Vec<SyntheticEvent> = Vec::new();

            let disposition = match record {
                TraceRecord::Touch { phase, touches, .. } => {
                    let event = TouchEvent::new(*phase, touches.clone());
                    translator.on_touch(&event, &page, &mut emitted, now)
                }
                TraceRecord::Pointer { pointer_type, .. } => translator.on_pointer(*pointer_type),
                TraceRecord::Wheel { .. } => translator.on_wheel(now),
                TraceRecord::Scroll { .. } => translator.on_scroll(&mut page, now),
            };

            ReplayStep {
                at_ms: record.at_ms(),
                input: record.label(),
                disposition: disposition.to_string(),
                emitted,
                viewport_reset: page.resets > resets_before,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let input = "# recorded on panel 3\n\n{\"type\": \"wheel\", \"at_ms\": 5}\n";
        let records = parse_trace(input.as_bytes()).unwrap();
        assert_eq!(records, vec![TraceRecord::Wheel { at_ms: 5 }]);
    }

    #[test]
    fn parse_reports_line_number() {
        let input = "{\"type\": \"wheel\", \"at_ms\": 5}\n{\"type\": \"bogus\"}\n";
        let err = parse_trace(input.as_bytes()).unwrap_err();
        assert!(matches!(err, TouchError::Trace { line: 2, .. }));
    }

    #[test]
    fn touch_record_defaults_to_no_touches() {
        let input = r#"{"type": "touch", "at_ms": 7, "phase": "cancel"}"#;
        let records = parse_trace(input.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![TraceRecord::Touch {
                at_ms: 7,
                phase: TouchPhase::Cancel,
                touches: vec![],
            }]
        );
    }
}
