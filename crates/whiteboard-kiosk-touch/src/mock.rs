//! Mock page seams for testing.

use std::cell::Cell;
use std::collections::HashSet;

use whiteboard_kiosk_types::{ElementId, Point, SyntheticEvent, SyntheticKind};

use crate::{Document, Viewport};

/// Axis-aligned hit region, inclusive of its top-left edge.
#[derive(Debug, Clone, Copy)]
struct Region {
    id: ElementId,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Region {
    fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x < self.x1 && p.y >= self.y0 && p.y < self.y1
    }
}

/// A document made of rectangular elements stacked in insertion order.
///
/// The body is `ElementId(0)` and is returned when no element is hit.
/// Elements can be detached to simulate the page removing a node mid-gesture.
#[derive(Debug)]
pub struct MockDocument {
    body: ElementId,
    regions: Vec<Region>,
    detached: HashSet<ElementId>,
    hit_tests: Cell<usize>,
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDocument {
    pub fn new() -> Self {
        Self {
            body: ElementId(0),
            regions: Vec::new(),
            detached: HashSet::new(),
            hit_tests: Cell::new(0),
        }
    }

    /// Add an element covering `[x0, x1) x [y0, y1)` on top of the stack.
    #[must_use]
    pub fn with_element(mut self, id: u64, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        self.regions.push(Region {
            id: ElementId(id),
            x0,
            y0,
            x1,
            y1,
        });
        self
    }

    /// Remove an element from the document.
    pub fn detach(&mut self, id: ElementId) {
        self.detached.insert(id);
    }

    /// Number of `element_from_point` calls so far.
    pub fn hit_tests(&self) -> usize {
        self.hit_tests.get()
    }
}

impl Document for MockDocument {
    fn element_from_point(&self, point: Point) -> Option<ElementId> {
        self.hit_tests.set(self.hit_tests.get() + 1);
        self.regions
            .iter()
            .rev()
            .find(|r| !self.detached.contains(&r.id) && r.contains(point))
            .map(|r| r.id)
    }

    fn body(&self) -> ElementId {
        self.body
    }

    fn is_connected(&self, element: ElementId) -> bool {
        element == self.body
            || self
                .regions
                .iter()
                .any(|r| r.id == element && !self.detached.contains(&element))
    }
}

/// Viewport that counts forced resets.
#[derive(Debug, Default)]
pub struct MockViewport {
    pub resets: usize,
}

impl Viewport for MockViewport {
    fn scroll_to_origin(&mut self) {
        self.resets += 1;
    }
}

/// The kinds of `events`, in order.
pub fn kinds(events: &[SyntheticEvent]) -> Vec<SyntheticKind> {
    events.iter().map(|e| e.kind).collect()
}

/// How many of `events` are of `kind`.
pub fn count(events: &[SyntheticEvent], kind: SyntheticKind) -> usize {
    events.iter().filter(|e| e.kind == kind).count()
}
