//! Default value functions for configuration.
//!
//! Each function backs a `#[serde(default = "crate::defaults::...")]`
//! attribute on a `Config` field, so a partial YAML file fills the gaps with
//! the same values `Config::default()` uses.

use crate::types::{Greeting, QuickAction};

// ── Window & panel ─────────────────────────────────────────────────────────

pub fn window_title() -> String {
    "ChefBot".to_string()
}

pub fn bot_name() -> String {
    "ChefBot".to_string()
}

pub fn window_width() -> u32 {
    420
}

pub fn window_height() -> u32 {
    560
}

pub fn panel_width() -> f32 {
    320.0
}

pub fn panel_height() -> f32 {
    384.0
}

pub fn bool_false() -> bool {
    false
}

// ── Reply provider ─────────────────────────────────────────────────────────

pub fn simulated_delay_ms() -> u64 {
    1000
}

pub fn query_endpoint() -> String {
    "http://localhost:8000/api/query".to_string()
}

/// 1 MiB is far above any answer the query endpoint produces.
pub fn max_response_bytes() -> u64 {
    1024 * 1024
}

// ── Conversation ───────────────────────────────────────────────────────────

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("View menu", "Show me the full menu."),
        QuickAction::new("Order online", "How do I place an online order?"),
        QuickAction::new("Book a table", "I need to book a table for four tonight."),
        QuickAction::new("Chef's specials", "What are the chef's specials today?"),
    ]
}

pub fn greeting() -> Option<Greeting> {
    Some(Greeting {
        text: "Welcome! How can I help you today?".to_string(),
        actions: vec!["View menu".to_string(), "Book a table".to_string()],
    })
}
