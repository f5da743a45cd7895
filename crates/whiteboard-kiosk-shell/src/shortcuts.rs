//! Shell keyboard shortcuts.

use whiteboard_kiosk_types::KeyChord;

use crate::config::ShortcutConfig;

/// Something the shell does in response to a key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    ToggleFullscreen,
    Quit,
    Reload,
}

/// Maps chords to actions. Unbound chords pass through to the page.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyChord, ShellAction)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&ShortcutConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &ShortcutConfig) -> Self {
        Self {
            bindings: vec![
                (config.toggle_fullscreen, ShellAction::ToggleFullscreen),
                (config.quit, ShellAction::Quit),
                (config.reload, ShellAction::Reload),
            ],
        }
    }

    /// The action bound to `chord`, if any. The first binding wins when
    /// two actions share a chord.
    pub fn resolve(&self, chord: &KeyChord) -> Option<ShellAction> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == chord)
            .map(|(_, action)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whiteboard_kiosk_types::{Key, Modifiers};

    #[test]
    fn default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.resolve(&KeyChord::plain(Key::F(11))),
            Some(ShellAction::ToggleFullscreen)
        );
        assert_eq!(
            keymap.resolve(&KeyChord::ctrl(Key::Char('q'))),
            Some(ShellAction::Quit)
        );
        assert_eq!(
            keymap.resolve(&KeyChord::ctrl(Key::Char('R'))),
            Some(ShellAction::Reload)
        );
    }

    #[test]
    fn unbound_keys_pass_through() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve(&KeyChord::plain(Key::Char('q'))), None);
        assert_eq!(keymap.resolve(&KeyChord::plain(Key::F(4))), None);
        let alt_f4 = KeyChord::new(
            Key::F(4),
            Modifiers {
                alt: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(keymap.resolve(&alt_f4), None);
    }

    #[test]
    fn extra_modifiers_do_not_match() {
        let keymap = Keymap::default();
        let ctrl_shift_q = KeyChord::new(
            Key::Char('q'),
            Modifiers {
                ctrl: true,
                shift: true,
                alt: false,
            },
        );
        assert_eq!(keymap.resolve(&ctrl_shift_q), None);
    }

    #[test]
    fn rebinding_from_config() {
        let config = ShortcutConfig {
            reload: "F5".parse().unwrap(),
            ..ShortcutConfig::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(keymap.resolve(&KeyChord::plain(Key::F(5))), Some(ShellAction::Reload));
        assert_eq!(keymap.resolve(&KeyChord::ctrl(Key::Char('r'))), None);
    }
}
