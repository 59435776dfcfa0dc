//! Body rendering for the chat panel: message list, loading row, error
//! banner, quick-action row and the input field.

use egui::{Button, Color32, Frame, Key, Label, RichText};

use crate::chat::{ChatMessage, ChatSession};
use crate::ui_constants::{
    CHAT_BUBBLE_CORNER_RADIUS, CHAT_BUBBLE_INNER_MARGIN, CHAT_BUBBLE_MAX_WIDTH_RATIO,
    CHAT_MESSAGE_SPACING, CHAT_SEND_BUTTON_WIDTH,
};

use super::types::{
    ACCENT, BOT_MSG_BG, BOT_MSG_TEXT, ERROR_BG, ERROR_TEXT, MUTED_TEXT, USER_MSG_BG,
    USER_MSG_TEXT,
};
use super::{ChatWidget, WidgetAction};

impl ChatWidget {
    /// Render the conversation history, pinned to the newest message.
    pub(super) fn render_messages(ui: &mut egui::Ui, session: &ChatSession) -> WidgetAction {
        let mut action = WidgetAction::None;
        let loading = session.is_loading();

        egui::ScrollArea::vertical()
            .id_salt("chefbot_messages")
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let bubble_width = ui.available_width() * CHAT_BUBBLE_MAX_WIDTH_RATIO;
                for msg in session.messages() {
                    if msg.is_bot() {
                        ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                            let clicked = Self::render_bot_message(ui, msg, bubble_width, loading);
                            if let Some(text) = clicked {
                                action = WidgetAction::Send(text);
                            }
                        });
                    } else {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            Self::render_user_message(ui, msg, bubble_width);
                        });
                    }
                    ui.add_space(CHAT_MESSAGE_SPACING);
                }
            });

        action
    }

    fn render_user_message(ui: &mut egui::Ui, msg: &ChatMessage, max_width: f32) {
        Frame::new()
            .fill(USER_MSG_BG)
            .corner_radius(CHAT_BUBBLE_CORNER_RADIUS)
            .inner_margin(CHAT_BUBBLE_INNER_MARGIN)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.add(
                    Label::new(RichText::new(msg.text()).color(USER_MSG_TEXT))
                        .selectable(true)
                        .wrap(),
                );
            });
    }

    /// Returns the action text if one of the message's buttons was clicked.
    fn render_bot_message(
        ui: &mut egui::Ui,
        msg: &ChatMessage,
        max_width: f32,
        loading: bool,
    ) -> Option<String> {
        let mut clicked = None;
        Frame::new()
            .fill(BOT_MSG_BG)
            .corner_radius(CHAT_BUBBLE_CORNER_RADIUS)
            .inner_margin(CHAT_BUBBLE_INNER_MARGIN)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.add(
                    Label::new(RichText::new(msg.text()).color(BOT_MSG_TEXT))
                        .selectable(true)
                        .wrap(),
                );
                if !msg.actions().is_empty() {
                    ui.add_space(4.0);
                    ui.horizontal_wrapped(|ui| {
                        for action in msg.actions() {
                            let button = Button::new(RichText::new(action).small().color(ACCENT));
                            if ui.add_enabled(!loading, button).clicked() {
                                clicked = Some(action.clone());
                            }
                        }
                    });
                }
            });
        clicked
    }

    pub(super) fn render_loading(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(
                RichText::new(format!("{} is thinking...", self.bot_name))
                    .color(MUTED_TEXT)
                    .italics(),
            );
        });
    }

    pub(super) fn render_error(ui: &mut egui::Ui, error: &str) -> WidgetAction {
        let mut action = WidgetAction::None;
        Frame::new()
            .fill(ERROR_BG)
            .corner_radius(4.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.add(Label::new(RichText::new(error).color(ERROR_TEXT).small()).wrap());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button("Dismiss")
                            .on_hover_text("Hide this message")
                            .clicked()
                        {
                            action = WidgetAction::DismissError;
                        }
                    });
                });
            });
        action
    }

    pub(super) fn render_quick_actions(
        &self,
        ui: &mut egui::Ui,
        session: &ChatSession,
    ) -> WidgetAction {
        let mut action = WidgetAction::None;
        if self.quick_actions.is_empty() {
            return action;
        }
        let enabled = !session.is_loading();
        ui.horizontal_wrapped(|ui| {
            for quick in &self.quick_actions {
                let button = Button::new(RichText::new(&quick.label).small());
                if ui
                    .add_enabled(enabled, button)
                    .on_hover_text(&quick.action)
                    .clicked()
                {
                    action = WidgetAction::Send(quick.action.clone());
                }
            }
        });
        action
    }

    /// Single-line input with a send button. Enter or the button submits.
    pub(super) fn render_input(&self, ui: &mut egui::Ui, session: &mut ChatSession) -> WidgetAction {
        let loading = session.is_loading();
        let input_width = (ui.available_width() - CHAT_SEND_BUTTON_WIDTH).max(0.0);

        let (enter_submitted, send_clicked) = ui
            .horizontal(|ui| {
                let response = ui.add_enabled(
                    !loading,
                    egui::TextEdit::singleline(session.input_mut())
                        .id(Self::input_id())
                        .hint_text("Type your message...")
                        .desired_width(input_width),
                );
                // A single-line field gives up focus when Enter is pressed
                let enter_submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                let can_send = !loading && !session.input().trim().is_empty();
                let send_clicked = ui
                    .add_enabled(
                        can_send,
                        Button::new(RichText::new("Send").color(Color32::WHITE)).fill(ACCENT),
                    )
                    .on_hover_text("Send message (Enter)")
                    .clicked();

                if enter_submitted {
                    response.request_focus();
                }
                (enter_submitted, send_clicked)
            })
            .inner;

        if enter_submitted || send_clicked {
            take_submission(session)
        } else {
            WidgetAction::None
        }
    }
}

/// Turn the pending input into a `Send`, clearing the field.
///
/// Blank input or an outstanding reply yields `None` and leaves the field
/// untouched.
pub(super) fn take_submission(session: &mut ChatSession) -> WidgetAction {
    if session.is_loading() || session.input().trim().is_empty() {
        return WidgetAction::None;
    }
    let text = session.take_input().trim().to_string();
    WidgetAction::Send(text)
}
