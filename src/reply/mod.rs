//! Reply providers: how a bot answer is obtained for a user message.
//!
//! Two implementations exist, selected from [`ReplyStrategy`]:
//! - [`SimulatedReply`]: echoes the request after a fixed delay
//! - [`RemoteReply`]: POSTs the message to a query endpoint

mod remote;
mod simulated;

use std::sync::Arc;

use chefbot_config::{Config, ReplyStrategy};
use thiserror::Error;

pub use remote::{QueryRequest, QueryResponse, RemoteReply};
pub use simulated::SimulatedReply;

/// Text used when the endpoint answers without a usable `answer`.
pub const NO_RESPONSE_TEXT: &str = "No response";

/// A bot answer produced by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    pub text: String,
    pub actions: Vec<String>,
}

impl BotReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.actions = actions;
        self
    }
}

/// Why a reply could not be produced.
///
/// Callers treat every variant the same way; the split only exists so log
/// lines say what went wrong.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: ureq::Error,
    },

    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("failed to read response body from {endpoint}: {source}")]
    Body {
        endpoint: String,
        #[source]
        source: ureq::Error,
    },

    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("reply task did not complete: {0}")]
    Task(String),
}

/// Source of bot replies.
///
/// `reply` blocks; the dispatcher runs it on the tokio blocking pool.
pub trait ReplyProvider: Send + Sync {
    fn reply(&self, text: &str) -> Result<BotReply, ReplyError>;

    /// Short name used in log lines.
    fn name(&self) -> &'static str;
}

/// Build the provider selected by `config.reply.reply_strategy`.
pub fn build_provider(config: &Config) -> Arc<dyn ReplyProvider> {
    let reply = &config.reply;
    crate::debug_info!(
        "REPLY",
        "Using {} reply provider",
        reply.reply_strategy.display_name()
    );
    match reply.reply_strategy {
        ReplyStrategy::Simulated => Arc::new(SimulatedReply::from_millis(reply.simulated_delay_ms)),
        ReplyStrategy::Remote => Arc::new(RemoteReply::new(
            reply.query_endpoint.clone(),
            reply.max_response_bytes,
        )),
    }
}
