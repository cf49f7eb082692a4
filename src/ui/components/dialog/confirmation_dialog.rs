//! Confirmation shown after a message was delivered

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

pub const CONFIRMATION_TEXT: &str = "Vielen Dank für Ihre Nachricht!";

/// Render the confirmation overlay over a dimmed screen
pub fn render_confirmation_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            message: CONFIRMATION_TEXT,
            foreground: Color::Black,
            background: Color::White,
            dim_backdrop: true,
            max_width: 44,
            ..Default::default()
        },
    );
}
