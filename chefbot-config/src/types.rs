//! Enum and record types referenced by [`crate::Config`] fields.

use serde::{Deserialize, Serialize};

/// How the widget obtains bot replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStrategy {
    /// Wait a fixed delay, then echo the request back.
    #[default]
    Simulated,
    /// POST the message to the configured query endpoint.
    Remote,
}

impl ReplyStrategy {
    /// Display name for logs and the CLI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReplyStrategy::Simulated => "simulated",
            ReplyStrategy::Remote => "remote",
        }
    }
}

/// Log level for the debug log file.
///
/// The `RUST_LOG` environment variable and the `--log-level` CLI flag take
/// precedence over this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// A predefined button that submits `action` as if the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Text shown on the button.
    pub label: String,
    /// Text submitted when the button is clicked.
    pub action: String,
}

impl QuickAction {
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// Bot message shown when a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub text: String,
    /// Inline action buttons rendered under the greeting.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}
