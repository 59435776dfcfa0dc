//! Core `Config` struct definition.
//!
//! Reply-provider settings live in [`ReplyConfig`], which is flattened into
//! `Config` so every field is serialised at the top level of the YAML file.

use crate::defaults;
use crate::types::{Greeting, LogLevel, QuickAction, ReplyStrategy};
use serde::{Deserialize, Serialize};

/// Settings that select and configure the reply provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    /// Which provider answers user messages: "simulated" or "remote"
    pub reply_strategy: ReplyStrategy,

    /// Delay before the simulated provider answers, in milliseconds
    #[serde(default = "defaults::simulated_delay_ms")]
    pub simulated_delay_ms: u64,

    /// Endpoint the remote provider POSTs `{"message": ...}` to
    #[serde(default = "defaults::query_endpoint")]
    pub query_endpoint: String,

    /// Upper bound on the remote response body size
    #[serde(default = "defaults::max_response_bytes")]
    pub max_response_bytes: u64,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            reply_strategy: ReplyStrategy::default(),
            simulated_delay_ms: defaults::simulated_delay_ms(),
            query_endpoint: defaults::query_endpoint(),
            max_response_bytes: defaults::max_response_bytes(),
        }
    }
}

/// Top-level widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // ========================================================================
    // Window & Panel
    // ========================================================================
    /// Title of the host window
    #[serde(default = "defaults::window_title")]
    pub window_title: String,

    /// Initial host window width in logical pixels
    #[serde(default = "defaults::window_width")]
    pub window_width: u32,

    /// Initial host window height in logical pixels
    #[serde(default = "defaults::window_height")]
    pub window_height: u32,

    /// Width of the expanded chat panel in points
    #[serde(default = "defaults::panel_width")]
    pub panel_width: f32,

    /// Height of the expanded chat panel in points
    #[serde(default = "defaults::panel_height")]
    pub panel_height: f32,

    /// Start with the chat panel expanded instead of the launcher bubble
    #[serde(default = "defaults::bool_false")]
    pub open_on_startup: bool,

    // ========================================================================
    // Conversation
    // ========================================================================
    /// Name shown in the panel header and the loading indicator
    #[serde(default = "defaults::bot_name")]
    pub bot_name: String,

    /// Buttons shown above the input field
    #[serde(default = "defaults::quick_actions")]
    pub quick_actions: Vec<QuickAction>,

    /// First bot message of every session (`null` disables it)
    #[serde(default = "defaults::greeting")]
    pub greeting: Option<Greeting>,

    // ========================================================================
    // Reply provider
    // ========================================================================
    #[serde(flatten)]
    pub reply: ReplyConfig,

    // ========================================================================
    // Diagnostics
    // ========================================================================
    /// Debug log verbosity
    pub log_level: LogLevel,

    /// Resolve every `${VAR}` reference, not only allowlisted ones
    #[serde(default = "defaults::bool_false")]
    pub allow_all_env_vars: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: defaults::window_title(),
            window_width: defaults::window_width(),
            window_height: defaults::window_height(),
            panel_width: defaults::panel_width(),
            panel_height: defaults::panel_height(),
            open_on_startup: defaults::bool_false(),
            bot_name: defaults::bot_name(),
            quick_actions: defaults::quick_actions(),
            greeting: defaults::greeting(),
            reply: ReplyConfig::default(),
            log_level: LogLevel::default(),
            allow_all_env_vars: defaults::bool_false(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reply strategy
    pub fn with_strategy(mut self, strategy: ReplyStrategy) -> Self {
        self.reply.reply_strategy = strategy;
        self
    }

    /// Set the query endpoint used by the remote strategy
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.reply.query_endpoint = endpoint.into();
        self
    }

    /// Set the simulated reply delay
    pub fn with_simulated_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reply.simulated_delay_ms = delay_ms;
        self
    }

    /// Set the bot name
    pub fn with_bot_name(mut self, name: impl Into<String>) -> Self {
        self.bot_name = name.into();
        self
    }
}
