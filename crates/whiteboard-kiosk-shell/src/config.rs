//! Kiosk configuration loaded from TOML.
//!
//! Every field has a default, so an absent config file gives the stock
//! whiteboard kiosk.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use whiteboard_kiosk_touch::script::ScriptOptions;
use whiteboard_kiosk_types::{Key, KeyChord};

use crate::setup;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub cookies: CookieConfig,
    #[serde(default)]
    pub touch: TouchConfig,
    #[serde(default)]
    pub shortcuts: ShortcutConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            browser: BrowserConfig::default(),
            window: WindowConfig::default(),
            cookies: CookieConfig::default(),
            touch: TouchConfig::default(),
            shortcuts: ShortcutConfig::default(),
        }
    }
}

/// Embedded browser settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Sent in place of the engine's own user agent; the remote site's
    /// sign-in flow rejects unfamiliar browsers.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub cache_model: CacheModel,
    #[serde(default = "default_true")]
    pub console_to_stdout: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
            cache_model: CacheModel::default(),
            console_to_stdout: true,
        }
    }
}

/// Engine cache policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheModel {
    DocumentViewer,
    #[default]
    WebBrowser,
    DocumentBrowser,
}

/// Main window and popup geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_true")]
    pub fullscreen: bool,
    #[serde(default = "default_icon_name")]
    pub icon_name: String,
    #[serde(default = "default_popup_width")]
    pub popup_width: i32,
    #[serde(default = "default_popup_height")]
    pub popup_height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            fullscreen: true,
            icon_name: default_icon_name(),
            popup_width: default_popup_width(),
            popup_height: default_popup_height(),
        }
    }
}

/// Persistent cookie storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Overrides the per-user default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl CookieConfig {
    /// The cookie store file to use.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(setup::default_cookie_path)
    }
}

/// Touch bridge settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TouchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Scroll suppression delay after the last touch event.
    #[serde(default = "default_quiescence_ms")]
    pub quiescence_ms: u64,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            quiescence_ms: default_quiescence_ms(),
        }
    }
}

impl TouchConfig {
    pub fn quiescence(&self) -> Duration {
        Duration::from_millis(self.quiescence_ms)
    }

    pub fn script_options(&self) -> ScriptOptions {
        ScriptOptions {
            quiescence: self.quiescence(),
        }
    }
}

/// Key chords for the shell's shortcuts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutConfig {
    #[serde(default = "default_toggle_fullscreen")]
    pub toggle_fullscreen: KeyChord,
    #[serde(default = "default_quit")]
    pub quit: KeyChord,
    #[serde(default = "default_reload")]
    pub reload: KeyChord,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            toggle_fullscreen: default_toggle_fullscreen(),
            quit: default_quit(),
            reload: default_reload(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_url() -> String {
    "https://whiteboard.microsoft.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn default_true() -> bool {
    true
}

fn default_title() -> String {
    "Microsoft Whiteboard".to_string()
}

fn default_width() -> i32 {
    1920
}

fn default_height() -> i32 {
    1080
}

fn default_icon_name() -> String {
    "whiteboard-app".to_string()
}

fn default_popup_width() -> i32 {
    800
}

fn default_popup_height() -> i32 {
    600
}

fn default_quiescence_ms() -> u64 {
    250
}

fn default_toggle_fullscreen() -> KeyChord {
    KeyChord::plain(Key::F(11))
}

fn default_quit() -> KeyChord {
    KeyChord::ctrl(Key::Char('q'))
}

fn default_reload() -> KeyChord {
    KeyChord::ctrl(Key::Char('r'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("url = \"https://whiteboard.microsoft.com\""));
        assert!(toml_str.contains("toggle_fullscreen = \"F11\""));
        assert!(toml_str.contains("quit = \"Ctrl+Q\""));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.window.fullscreen);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.browser.cache_model, CacheModel::WebBrowser);
        assert_eq!(config.touch.quiescence(), Duration::from_millis(250));
        assert!(config.cookies.path.is_none());
    }

    #[test]
    fn parse_example_config() {
        let toml_str = r#"
log_level = "debug"

[browser]
url = "https://example.test/board"
cache_model = "document-viewer"

[window]
fullscreen = false
popup_width = 1024

[cookies]
path = "/var/lib/kiosk/cookies.txt"

[touch]
enabled = false
quiescence_ms = 400

[shortcuts]
reload = "F5"
quit = "Ctrl+Shift+Q"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.browser.url, "https://example.test/board");
        assert_eq!(config.browser.cache_model, CacheModel::DocumentViewer);
        assert!(!config.window.fullscreen);
        assert_eq!(config.window.popup_width, 1024);
        assert_eq!(config.window.popup_height, 600);
        assert_eq!(
            config.cookies.resolved_path(),
            PathBuf::from("/var/lib/kiosk/cookies.txt")
        );
        assert!(!config.touch.enabled);
        assert_eq!(config.touch.script_options().quiescence, Duration::from_millis(400));
        assert_eq!(config.shortcuts.reload, KeyChord::plain(Key::F(5)));
        assert!(config.shortcuts.quit.modifiers.shift);
        assert_eq!(config.shortcuts.toggle_fullscreen, KeyChord::plain(Key::F(11)));
    }

    #[test]
    fn bad_chord_is_rejected() {
        let err = toml::from_str::<Config>("[shortcuts]\nquit = \"Super+Q\"\n").unwrap_err();
        assert!(err.to_string().contains("unknown modifier"));
    }
}
