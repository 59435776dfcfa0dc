//! Public types for the chat widget.
//!
//! Contains `WidgetAction` and the colour palette shared by the widget
//! sub-modules.

use egui::{Color32, Stroke};

/// Actions returned from the chat widget to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    /// No action needed.
    None,
    /// The launcher bubble was clicked.
    Toggle,
    /// Close the panel (header button or Escape).
    Close,
    /// Submit text as a user message. Typed input, quick actions and bot
    /// action buttons all produce this.
    Send(String),
    /// Dismiss the inline error banner.
    DismissError,
}

impl WidgetAction {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Accent colour for the launcher, header and send button.
pub(super) const ACCENT: Color32 = Color32::from_rgb(214, 98, 44);

/// Panel background colour.
pub(super) const PANEL_BG: Color32 = Color32::from_rgb(250, 247, 242);

/// Panel border stroke.
pub(super) const PANEL_BORDER: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_gray(210),
};

/// User message background.
pub(super) const USER_MSG_BG: Color32 = Color32::from_rgb(214, 98, 44);

/// User message text.
pub(super) const USER_MSG_TEXT: Color32 = Color32::WHITE;

/// Bot message background.
pub(super) const BOT_MSG_BG: Color32 = Color32::from_rgb(236, 232, 225);

/// Bot message text.
pub(super) const BOT_MSG_TEXT: Color32 = Color32::from_gray(40);

/// Header and loading-row text.
pub(super) const MUTED_TEXT: Color32 = Color32::from_gray(110);

/// Error banner background.
pub(super) const ERROR_BG: Color32 = Color32::from_rgb(253, 236, 234);

/// Error banner text.
pub(super) const ERROR_TEXT: Color32 = Color32::from_rgb(183, 28, 28);
