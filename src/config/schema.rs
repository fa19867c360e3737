use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/hearth/config.toml` or `~/.config/hearth/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `HEARTH__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub content: ContentSettings,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            content: ContentSettings::default(),
            log: LogSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Event-loop poll timeout (milliseconds) while no content widget has
    /// injected its own delay.
    pub refresh_delay_ms: u64,

    /// How many outward notifications the footer log retains.
    pub event_log_capacity: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ hearth: home at a glance ~ ".to_string(),
            refresh_delay_ms: 200,
            event_log_capacity: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Poll interval (milliseconds) a content widget injects into the
    /// dashboard on construction. Process-wide once set.
    pub refresh_delay_ms: u64,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            refresh_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub level: String,
    /// Log file path; stderr belongs to the TUI.
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: PathBuf::from("hearth.log"),
        }
    }
}
