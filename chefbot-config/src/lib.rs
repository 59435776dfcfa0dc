//! Configuration system for the ChefBot chat widget.
//!
//! This crate provides configuration loading, saving, validation and default
//! values for the widget. It includes:
//!
//! - The [`Config`] struct and its reply-provider settings
//! - Quick action and greeting definitions
//! - `${VAR}` environment substitution in the raw YAML
//! - Typed [`ConfigError`] variants for I/O, parse and validation failures

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::{Config, ReplyConfig, substitute_variables, validate_endpoint};
pub use error::ConfigError;
pub use types::{Greeting, LogLevel, QuickAction, ReplyStrategy};
