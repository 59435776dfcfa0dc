//! Chat widget: a launcher bubble that expands into a chat panel in the
//! bottom-right corner of the window.
//!
//! The widget never mutates the conversation itself. It renders a
//! [`ChatSession`], binds the text field to the session input and reports
//! what the user did as a [`WidgetAction`]. Applying the action is the
//! controller's job.

mod chat_view;
mod types;

pub use types::WidgetAction;

use egui::{Align2, Button, Color32, Context, Frame, Id, Key, Order, RichText, Vec2};

use chefbot_config::{Config, QuickAction};

use crate::chat::ChatSession;
use crate::ui_constants::{
    CHAT_LAUNCHER_SIZE, CHAT_PANEL_CORNER_RADIUS, CHAT_PANEL_INNER_INSET,
    CHAT_PANEL_INNER_MARGIN, CHAT_SCREEN_MARGIN,
};
use types::{ACCENT, MUTED_TEXT, PANEL_BG, PANEL_BORDER};

/// Id of the single-line message field.
pub const INPUT_ID: &str = "chefbot_input";

/// Rendering configuration for the chat widget.
pub struct ChatWidget {
    bot_name: String,
    quick_actions: Vec<QuickAction>,
    panel_size: Vec2,
}

impl ChatWidget {
    pub fn new(config: &Config) -> Self {
        Self {
            bot_name: config.bot_name.clone(),
            quick_actions: config.quick_actions.clone(),
            panel_size: Vec2::new(config.panel_width, config.panel_height),
        }
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    pub fn quick_actions(&self) -> &[QuickAction] {
        &self.quick_actions
    }

    /// Id of the message text field.
    pub fn input_id() -> Id {
        Id::new(INPUT_ID)
    }

    /// Render the widget and return any action to perform.
    pub fn show(&self, ctx: &Context, session: &mut ChatSession) -> WidgetAction {
        let was_open = ctx.data_mut(|d| {
            let was_open = d.get_temp::<bool>(Self::open_state_id()).unwrap_or(false);
            d.insert_temp(Self::open_state_id(), session.is_open());
            was_open
        });
        if !session.is_open() {
            return self.show_launcher(ctx);
        }

        // Escape closes, but only when the input field does not own it
        let input_focused = ctx.memory(|m| m.has_focus(Self::input_id()));
        if ctx.input(|i| i.key_pressed(Key::Escape)) && !input_focused {
            return WidgetAction::Close;
        }

        let offset = Vec2::splat(-CHAT_SCREEN_MARGIN);
        let action = egui::Area::new(Id::new("chefbot_panel"))
            .anchor(Align2::RIGHT_BOTTOM, offset)
            .order(Order::Foreground)
            .interactable(true)
            .show(ctx, |ui| {
                let mut action = WidgetAction::None;

                let panel_frame = Frame::new()
                    .fill(PANEL_BG)
                    .stroke(PANEL_BORDER)
                    .corner_radius(CHAT_PANEL_CORNER_RADIUS)
                    .inner_margin(CHAT_PANEL_INNER_MARGIN);

                panel_frame.show(ui, |ui| {
                    let inner_width = self.panel_size.x - CHAT_PANEL_INNER_INSET;
                    let inner_height = self.panel_size.y - CHAT_PANEL_INNER_INSET;
                    ui.set_min_width(inner_width);
                    ui.set_max_width(inner_width);
                    // Both bounds, otherwise the Area reports unbounded height
                    // and the bottom rows drift off-screen
                    ui.set_min_height(inner_height);
                    ui.set_max_height(inner_height);

                    // === Header ===
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&self.bot_name).strong().color(ACCENT));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .button(RichText::new("X").color(MUTED_TEXT))
                                .on_hover_text("Close (Escape)")
                                .clicked()
                            {
                                action = WidgetAction::Close;
                            }
                        });
                    });
                    ui.separator();

                    // Bottom rows are laid out first so the message list gets
                    // whatever height remains
                    let body_action = ui
                        .with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                            let mut body_action = self.render_input(ui, session);
                            ui.add_space(4.0);

                            keep_first(&mut body_action, self.render_quick_actions(ui, session));

                            if let Some(error) = session.error() {
                                keep_first(&mut body_action, Self::render_error(ui, error));
                            }

                            if session.is_loading() {
                                self.render_loading(ui);
                            }

                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                keep_first(&mut body_action, Self::render_messages(ui, session));
                            });

                            body_action
                        })
                        .inner;
                    keep_first(&mut action, body_action);
                });

                action
            })
            .inner;

        // Focus the message field on the frame the panel opens
        if !was_open && !session.is_loading() {
            ctx.memory_mut(|m| m.request_focus(Self::input_id()));
        }

        action
    }

    /// Temp-memory slot holding whether the panel was open last frame.
    fn open_state_id() -> Id {
        Id::new("chefbot_panel_open")
    }

    /// Collapsed state: a round button in the corner.
    fn show_launcher(&self, ctx: &Context) -> WidgetAction {
        let offset = Vec2::splat(-CHAT_SCREEN_MARGIN);
        egui::Area::new(Id::new("chefbot_launcher"))
            .anchor(Align2::RIGHT_BOTTOM, offset)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                let button = Button::new(RichText::new("Chat").strong().color(Color32::WHITE))
                    .fill(ACCENT)
                    .corner_radius(CHAT_LAUNCHER_SIZE / 2.0);
                let response = ui
                    .add_sized(Vec2::splat(CHAT_LAUNCHER_SIZE), button)
                    .on_hover_text(format!("Chat with {}", self.bot_name));
                if response.clicked() {
                    WidgetAction::Toggle
                } else {
                    WidgetAction::None
                }
            })
            .inner
    }
}

/// Keep the earlier action when more than one row reports something in the
/// same frame.
fn keep_first(slot: &mut WidgetAction, next: WidgetAction) {
    if slot.is_none() {
        *slot = next;
    }
}
