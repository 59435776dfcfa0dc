//! Message dispatch: user text in, bot reply out.
//!
//! `send` appends the user message and starts the provider on the tokio
//! blocking pool. The result comes back over an unbounded channel and is
//! applied to the session by `poll` (or `wait`) on the UI thread, so the
//! session only ever has one writer.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::chat::{ChatMessage, ChatSession};
use crate::reply::{BotReply, ReplyError, ReplyProvider};

type ReplyOutcome = Result<BotReply, ReplyError>;

/// Sends user messages to a reply provider and applies the answers.
pub struct Dispatcher {
    provider: Arc<dyn ReplyProvider>,
    runtime: Handle,
    tx: mpsc::UnboundedSender<ReplyOutcome>,
    rx: mpsc::UnboundedReceiver<ReplyOutcome>,
}

impl Dispatcher {
    pub fn new(provider: Arc<dyn ReplyProvider>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            provider,
            runtime,
            tx,
            rx,
        }
    }

    /// Submit `text` as a user message and request a reply.
    ///
    /// Returns `false` without touching the session when the trimmed text is
    /// empty or a reply is already outstanding.
    pub fn send(&self, session: &mut ChatSession, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        if session.is_loading() {
            crate::debug_log!("DISPATCH", "Ignoring send while a reply is pending");
            return false;
        }
        if !session.append_message(ChatMessage::user(text)) {
            return false;
        }
        session.set_loading(true);
        session.clear_error();

        crate::debug_info!(
            "DISPATCH",
            "Requesting {} reply ({} chars)",
            self.provider.name(),
            text.len()
        );

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let request = text.to_string();
        self.runtime.spawn(async move {
            // Providers block (sleep or ureq), keep them off the async workers
            let outcome = match tokio::task::spawn_blocking(move || provider.reply(&request)).await
            {
                Ok(outcome) => outcome,
                Err(e) => Err(ReplyError::Task(e.to_string())),
            };
            // Receiver gone means the dispatcher was dropped; nothing to update
            let _ = tx.send(outcome);
        });
        true
    }

    /// Apply every finished reply to `session`. Returns `true` if anything
    /// changed.
    pub fn poll(&mut self, session: &mut ChatSession) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            apply_outcome(session, outcome);
            changed = true;
        }
        changed
    }

    /// Block until the outstanding reply arrives and apply it.
    ///
    /// Returns `false` immediately when nothing is pending. Must not be called
    /// from inside the tokio runtime.
    pub fn wait(&mut self, session: &mut ChatSession) -> bool {
        if !session.is_loading() {
            return false;
        }
        match self.rx.blocking_recv() {
            Some(outcome) => {
                apply_outcome(session, outcome);
                true
            }
            None => false,
        }
    }
}

fn apply_outcome(session: &mut ChatSession, outcome: ReplyOutcome) {
    match outcome {
        Ok(reply) => {
            crate::debug_log!(
                "DISPATCH",
                "Reply received ({} chars, {} actions)",
                reply.text.len(),
                reply.actions.len()
            );
            session.append_message(ChatMessage::bot_with_actions(reply.text, reply.actions));
        }
        Err(e) => {
            log::error!("Failed to get reply: {e}");
            session.set_error(format!("Sorry, something went wrong: {e}"));
        }
    }
    session.set_loading(false);
}
