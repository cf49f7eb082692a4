//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a filled button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool, fill: Color) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(fill)
    };

    let mut text_style = Style::default().fg(Color::White).bg(fill);
    if is_selected {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(fill));

    frame.render_widget(paragraph.block(block), area);
}
