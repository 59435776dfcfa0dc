//! Chat session store.
//!
//! Sub-modules:
//! - [`state`]: `ChatSession`: message history, input text, open/loading flags
//! - [`types`]: `ChatMessage` and `Sender`

mod state;
mod types;

#[cfg(test)]
mod tests;

pub use state::ChatSession;
pub use types::{ChatMessage, Sender};
