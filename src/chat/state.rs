//! `ChatSession`: the append-only message history plus the input, open,
//! loading and error state the widget renders.

use chefbot_config::Greeting;

use super::types::{ChatMessage, Sender};

/// State of one chat widget session.
///
/// Owned by the controller and mutated only from the UI thread.
#[derive(Debug, Default)]
pub struct ChatSession {
    /// Full history in arrival order. Never reordered, edited or truncated.
    messages: Vec<ChatMessage>,
    /// The current text input from the user (not yet sent).
    input: String,
    /// Whether the panel is expanded.
    open: bool,
    /// Whether a reply is outstanding.
    loading: bool,
    /// Last reply failure, shown inline until dismissed or the next send.
    error: Option<String>,
}

impl ChatSession {
    /// Create a new empty, closed session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session whose history starts with the greeting, if any.
    pub fn with_greeting(greeting: Option<&Greeting>) -> Self {
        let mut session = Self::new();
        if let Some(greeting) = greeting {
            session.append_message(ChatMessage::bot_with_actions(
                greeting.text.clone(),
                greeting.actions.clone(),
            ));
        }
        session
    }

    /// Append a message to the end of the history.
    ///
    /// Returns `false` (and appends nothing) for a user message whose text is
    /// blank after trimming, or that arrives while a reply is outstanding.
    /// Bot messages are always accepted.
    pub fn append_message(&mut self, msg: ChatMessage) -> bool {
        if msg.sender() == Sender::User && (self.loading || msg.text().trim().is_empty()) {
            return false;
        }
        self.messages.push(msg);
        true
    }

    /// All messages in the conversation history.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Mutable access for binding the text field.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Take the current input, leaving the field empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggle the panel open/closed, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
