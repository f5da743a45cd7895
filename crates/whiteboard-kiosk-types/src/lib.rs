//! Shared types for whiteboard-kiosk.
//!
//! This crate contains the types shared across the workspace: the touch and
//! pointer input the translator consumes, the synthetic events it emits, and
//! the key chords the shell binds to its shortcuts.

pub mod key;
pub mod synthetic;
pub mod touch;

pub use key::{ChordParseError, Key, KeyChord, Modifiers};
pub use synthetic::{
    ElementId, SyntheticEvent, SyntheticKind, PRIMARY_BUTTON, SYNTHETIC_POINTER_ID,
};
pub use touch::{Point, PointerType, Touch, TouchEvent, TouchId, TouchPhase};
