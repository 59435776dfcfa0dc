//! `ChatController`: owns the session, the widget and the dispatcher, and
//! applies `WidgetAction`s.

use std::sync::Arc;

use tokio::runtime::Handle;

use chefbot_config::Config;

use crate::chat::ChatSession;
use crate::dispatcher::Dispatcher;
use crate::reply::{ReplyProvider, build_provider};
use crate::widget::{ChatWidget, WidgetAction};

/// Explicit state for one chat window.
pub struct ChatController {
    session: ChatSession,
    widget: ChatWidget,
    dispatcher: Dispatcher,
}

impl ChatController {
    /// Build a controller with the provider selected by `config`.
    pub fn new(config: &Config, runtime: Handle) -> Self {
        Self::with_provider(config, build_provider(config), runtime)
    }

    /// Build a controller around an explicit provider.
    pub fn with_provider(
        config: &Config,
        provider: Arc<dyn ReplyProvider>,
        runtime: Handle,
    ) -> Self {
        let mut session = ChatSession::with_greeting(config.greeting.as_ref());
        if config.open_on_startup {
            session.open();
        }
        Self {
            session,
            widget: ChatWidget::new(config),
            dispatcher: Dispatcher::new(provider, runtime),
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ChatSession {
        &mut self.session
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// Render the widget and apply whatever the user did.
    pub fn show(&mut self, ctx: &egui::Context) {
        let action = self.widget.show(ctx, &mut self.session);
        self.handle(action);
    }

    /// Apply a widget action to the session. Returns `true` if a reply was
    /// requested.
    pub fn handle(&mut self, action: WidgetAction) -> bool {
        match action {
            WidgetAction::None => false,
            WidgetAction::Toggle => {
                let open = self.session.toggle();
                crate::debug_log!("CHAT", "Panel {}", if open { "opened" } else { "closed" });
                false
            }
            WidgetAction::Close => {
                self.session.close();
                false
            }
            WidgetAction::DismissError => {
                self.session.clear_error();
                false
            }
            WidgetAction::Send(text) => self.dispatcher.send(&mut self.session, &text),
        }
    }

    /// Apply finished replies. Returns `true` if the session changed.
    pub fn poll(&mut self) -> bool {
        self.dispatcher.poll(&mut self.session)
    }

    /// Block until the outstanding reply (if any) is applied.
    pub fn wait(&mut self) -> bool {
        self.dispatcher.wait(&mut self.session)
    }
}
