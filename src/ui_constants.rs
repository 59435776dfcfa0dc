//! Named constants for UI layout dimensions.
//!
//! Only UI layout constants (dimensions, sizes, spacing) belong here.
//! Colour values live in `widget::types`.

// ---------------------------------------------------------------------------
// Launcher bubble  (src/widget/mod.rs)
// ---------------------------------------------------------------------------

/// Diameter of the collapsed launcher bubble.
pub const CHAT_LAUNCHER_SIZE: f32 = 56.0;
/// Gap between the widget and the bottom-right corner of the window.
pub const CHAT_SCREEN_MARGIN: f32 = 16.0;

// ---------------------------------------------------------------------------
// Chat panel  (src/widget/mod.rs)
// ---------------------------------------------------------------------------

/// Inner margin of the expanded panel frame.
pub const CHAT_PANEL_INNER_MARGIN: f32 = 8.0;
/// Corner radius of the expanded panel frame.
pub const CHAT_PANEL_CORNER_RADIUS: f32 = 10.0;
/// Horizontal inset subtracted from the panel width to get content width
/// (inner margin on both sides plus the frame stroke).
pub const CHAT_PANEL_INNER_INSET: f32 = 2.0 * CHAT_PANEL_INNER_MARGIN + 2.0;

// ---------------------------------------------------------------------------
// Message list  (src/widget/chat_view.rs)
// ---------------------------------------------------------------------------

/// Maximum width of a message bubble as a fraction of the list width.
pub const CHAT_BUBBLE_MAX_WIDTH_RATIO: f32 = 0.8;
/// Corner radius of a message bubble.
pub const CHAT_BUBBLE_CORNER_RADIUS: f32 = 8.0;
/// Inner margin of a message bubble.
pub const CHAT_BUBBLE_INNER_MARGIN: f32 = 6.0;
/// Vertical gap between consecutive messages.
pub const CHAT_MESSAGE_SPACING: f32 = 4.0;

// ---------------------------------------------------------------------------
// Input row  (src/widget/chat_view.rs)
// ---------------------------------------------------------------------------

/// Width reserved for the send button next to the text field.
pub const CHAT_SEND_BUTTON_WIDTH: f32 = 48.0;
