//! Core message types for the chat session.

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

/// A message in the chat history.
///
/// Fields are private so a message cannot change once it has been appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    sender: Sender,
    text: String,
    /// Inline action buttons; only bot replies carry them.
    actions: Vec<String>,
}

impl ChatMessage {
    /// A message typed (or quick-actioned) by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            actions: Vec::new(),
        }
    }

    /// A bot reply without action buttons.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::bot_with_actions(text, Vec::new())
    }

    /// A bot reply with inline action buttons.
    pub fn bot_with_actions(text: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            actions,
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }
}
