//! Application entry point: loads the config and runs the winit event loop
//! that hosts the chat window.

use crate::chat_window::{ChatWindow, ChatWindowAction};
use crate::cli::RuntimeOptions;
use anyhow::Result;
use chefbot_config::Config;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// How often the event loop wakes to check for a reply while one is pending.
pub const REPLY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main application entry point
pub struct App {
    config: Config,
    runtime: Arc<Runtime>,
}

impl App {
    /// Load the config (or the one named on the command line) and apply CLI
    /// overrides.
    pub fn new(runtime: Arc<Runtime>, runtime_options: RuntimeOptions) -> Result<Self> {
        let config = runtime_options.load_config()?;
        crate::debug::apply_config_log_level(config.log_level.to_level_filter());

        log::info!(
            "Reply strategy: {} (bot name '{}')",
            config.reply.reply_strategy.display_name(),
            config.bot_name
        );

        Ok(Self { config, runtime })
    }

    /// Run the application until the chat window is closed
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut handler = ChatApp {
            config: self.config,
            runtime: self.runtime,
            window: None,
        };
        event_loop.run_app(&mut handler)?;

        Ok(())
    }
}

/// winit handler owning the single chat window
struct ChatApp {
    config: Config,
    runtime: Arc<Runtime>,
    window: Option<ChatWindow>,
}

impl ApplicationHandler for ChatApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.runtime.block_on(ChatWindow::new(
            event_loop,
            &self.config,
            self.runtime.handle().clone(),
        )) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create chat window: {e:#}");
                eprintln!("chefbot: error: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        if window.handle_window_event(event) == ChatWindowAction::Close {
            log::info!("Chat window closed");
            self.window = None;
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.should_close() {
            return;
        }

        window.poll();

        if window.is_loading() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(
                Instant::now() + REPLY_POLL_INTERVAL,
            ));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}
