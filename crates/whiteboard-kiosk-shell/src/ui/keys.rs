//! GDK key events to key chords.

use gtk::gdk;
use whiteboard_kiosk_types::{Key, KeyChord, Modifiers};

/// The chord for a key press, or `None` for keys no shortcut can use.
pub fn chord(event: &gdk::EventKey) -> Option<KeyChord> {
    let name = event.keyval().name()?;
    let key: Key = name.as_str().parse().ok()?;
    let state = event.state();

    Some(KeyChord::new(
        key,
        Modifiers {
            ctrl: state.contains(gdk::ModifierType::CONTROL_MASK),
            alt: state.contains(gdk::ModifierType::MOD1_MASK),
            shift: state.contains(gdk::ModifierType::SHIFT_MASK),
        },
    ))
}
