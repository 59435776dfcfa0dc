// Library exports for testing and the `chefbot` binary.
//
// Threading: the chat session is only touched on the UI (event loop) thread.
// Reply providers run on the tokio blocking pool and hand results back over
// an unbounded mpsc channel drained by `Dispatcher::poll`.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod app;
pub mod chat;
pub mod chat_window;
pub mod cli;
pub mod controller;
pub mod dispatcher;
pub mod http;
pub mod reply;
pub mod ui_constants;
pub mod widget;

pub use chefbot_config as config;
