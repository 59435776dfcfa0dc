//! Delay-based reply used when no query endpoint is available.

use std::time::Duration;

use super::{BotReply, ReplyError, ReplyProvider};

/// Echoes the request back after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedReply {
    delay: Duration,
}

impl SimulatedReply {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// The text produced for `request`.
    pub fn echo(request: &str) -> String {
        format!("I have received your request: \"{request}\"")
    }
}

impl ReplyProvider for SimulatedReply {
    fn reply(&self, text: &str) -> Result<BotReply, ReplyError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(BotReply::new(Self::echo(text)))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
