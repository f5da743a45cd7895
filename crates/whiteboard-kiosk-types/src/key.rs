//! Keyboard chords used for shell shortcuts.
//!
//! Chords are written in config files as `+`-separated strings such as
//! `"F11"` or `"Ctrl+Q"`. Modifier names are case-insensitive; letter keys
//! are normalised to lowercase so `"Ctrl+q"` and `"Ctrl+Q"` are the same chord.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A non-modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character, stored lowercase.
    Char(char),
    /// Function key `F1`..`F24`.
    F(u8),
    Escape,
}

/// Modifier state relevant to shortcut matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
    };
}

/// A key plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyChord {
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        let key = match key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self { key, modifiers }
    }

    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    #[must_use]
    pub fn ctrl(key: Key) -> Self {
        Self::new(key, Modifiers::CTRL)
    }
}

/// Failure to parse a chord string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordParseError {
    #[error("empty key chord")]
    Empty,

    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),

    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

impl FromStr for KeyChord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key_name = parts.pop().filter(|k| !k.is_empty()).ok_or(ChordParseError::Empty)?;

        let mut modifiers = Modifiers::NONE;
        for part in parts {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => return Err(ChordParseError::UnknownModifier(part.to_string())),
            }
        }

        Ok(Self::new(key_name.parse()?, modifiers))
    }
}

impl FromStr for Key {
    type Err = ChordParseError;

    /// Parse a key name: a single letter or digit, `F1`..`F24`, or `Escape`.
    ///
    /// Toolkit keyval names (`"q"`, `"Q"`, `"F11"`) use the same spelling.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_alphanumeric() {
                return Ok(Self::Char(c.to_ascii_lowercase()));
            }
        }

        if name.eq_ignore_ascii_case("escape") || name.eq_ignore_ascii_case("esc") {
            return Ok(Self::Escape);
        }

        if let Some(n) = name.strip_prefix('F').or_else(|| name.strip_prefix('f')) {
            if let Ok(n) = n.parse::<u8>() {
                if (1..=24).contains(&n) {
                    return Ok(Self::F(n));
                }
            }
        }

        Err(ChordParseError::UnknownKey(name.to_string()))
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("Alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("Shift+")?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::F(n) => write!(f, "F{n}"),
            Key::Escape => f.write_str("Escape"),
        }
    }
}

impl Serialize for KeyChord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyChord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_function_key() {
        assert_eq!("F11".parse::<KeyChord>(), Ok(KeyChord::plain(Key::F(11))));
        assert_eq!("f5".parse::<KeyChord>(), Ok(KeyChord::plain(Key::F(5))));
    }

    #[test]
    fn parse_ctrl_letter_is_case_insensitive() {
        let upper: KeyChord = "Ctrl+Q".parse().unwrap();
        let lower: KeyChord = "control+q".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, KeyChord::ctrl(Key::Char('q')));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<KeyChord>(), Err(ChordParseError::Empty));
        assert_eq!("Ctrl+".parse::<KeyChord>(), Err(ChordParseError::Empty));
        assert_eq!(
            "Hyper+Q".parse::<KeyChord>(),
            Err(ChordParseError::UnknownModifier("Hyper".to_string()))
        );
        assert_eq!(
            "F99".parse::<KeyChord>(),
            Err(ChordParseError::UnknownKey("F99".to_string()))
        );
    }

    #[test]
    fn key_names_from_toolkit() {
        assert_eq!("Q".parse::<Key>(), Ok(Key::Char('q')));
        assert_eq!("Escape".parse::<Key>(), Ok(Key::Escape));
        assert!("Return".parse::<Key>().is_err());
    }

    #[test]
    fn display_matches_config_spelling() {
        assert_eq!(KeyChord::ctrl(Key::Char('r')).to_string(), "Ctrl+R");
        assert_eq!(KeyChord::plain(Key::F(11)).to_string(), "F11");
        let chord: KeyChord = "Ctrl+Shift+Escape".parse().unwrap();
        assert_eq!(chord.to_string(), "Ctrl+Shift+Escape");
    }
}
